//! Diesel models representing doctors and their specialty join.

use diesel::prelude::*;

use crate::domain::doctor::{
    Doctor as DomainDoctor, DoctorWithSpecialty as DomainDoctorWithSpecialty,
    NewDoctor as DomainNewDoctor, UpdateDoctor as DomainUpdateDoctor,
};
use crate::domain::types::{DoctorId, DoctorName, SpecialtyId, SpecialtyName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::doctors)]
/// Diesel model for [`crate::domain::doctor::Doctor`].
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialty_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::doctors)]
/// Insertable form of [`Doctor`].
pub struct NewDoctor<'a> {
    pub name: &'a str,
    pub specialty_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::doctors)]
/// Data used when updating a [`Doctor`] record.
pub struct UpdateDoctor<'a> {
    pub name: &'a str,
    pub specialty_id: i32,
}

#[derive(Debug, Clone, Queryable)]
/// Row produced by the `doctors INNER JOIN specialties` query.
pub struct DoctorWithSpecialty {
    pub id: i32,
    pub doctor_name: String,
    pub specialty_id: i32,
    pub specialty_name: String,
}

impl TryFrom<Doctor> for DomainDoctor {
    type Error = TypeConstraintError;

    fn try_from(doctor: Doctor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DoctorId::try_from(doctor.id)?,
            name: DoctorName::new(doctor.name)?,
            specialty_id: SpecialtyId::try_from(doctor.specialty_id)?,
        })
    }
}

impl TryFrom<DoctorWithSpecialty> for DomainDoctorWithSpecialty {
    type Error = TypeConstraintError;

    fn try_from(row: DoctorWithSpecialty) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DoctorId::try_from(row.id)?,
            doctor_name: DoctorName::new(row.doctor_name)?,
            specialty_id: SpecialtyId::try_from(row.specialty_id)?,
            specialty_name: SpecialtyName::new(row.specialty_name)?,
        })
    }
}

impl<'a> From<&'a DomainNewDoctor> for NewDoctor<'a> {
    fn from(doctor: &'a DomainNewDoctor) -> Self {
        Self {
            name: doctor.name.as_str(),
            specialty_id: doctor.specialty_id.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDoctor> for UpdateDoctor<'a> {
    fn from(doctor: &'a DomainUpdateDoctor) -> Self {
        Self {
            name: doctor.name.as_str(),
            specialty_id: doctor.specialty_id.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_doctor() {
        let domain = DomainNewDoctor::new(
            DoctorName::new("Dr. A").expect("valid name"),
            SpecialtyId::new(3).expect("valid specialty id"),
        );
        let new: NewDoctor = (&domain).into();
        assert_eq!(new.name, "Dr. A");
        assert_eq!(new.specialty_id, 3);
    }

    #[test]
    fn doctor_into_domain() {
        let db = Doctor {
            id: 1,
            name: "Dr. B".into(),
            specialty_id: 2,
        };
        let domain = DomainDoctor::try_from(db).expect("valid doctor");
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.name.as_str(), "Dr. B");
        assert_eq!(domain.specialty_id.get(), 2);
    }

    #[test]
    fn joined_row_with_blank_specialty_is_rejected() {
        let row = DoctorWithSpecialty {
            id: 1,
            doctor_name: "Dr. C".into(),
            specialty_id: 2,
            specialty_name: "  ".into(),
        };
        assert_eq!(
            DomainDoctorWithSpecialty::try_from(row),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
