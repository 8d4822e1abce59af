//! Diesel models representing medical specialties.

use diesel::prelude::*;

use crate::domain::specialty::{NewSpecialty as DomainNewSpecialty, Specialty as DomainSpecialty};
use crate::domain::types::{SpecialtyId, SpecialtyName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::specialties)]
/// Diesel model for [`crate::domain::specialty::Specialty`].
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::specialties)]
/// Insertable and updatable form of [`Specialty`].
pub struct NewSpecialty<'a> {
    pub name: &'a str,
}

impl TryFrom<Specialty> for DomainSpecialty {
    type Error = TypeConstraintError;

    fn try_from(specialty: Specialty) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SpecialtyId::try_from(specialty.id)?,
            name: SpecialtyName::new(specialty.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewSpecialty> for NewSpecialty<'a> {
    fn from(specialty: &'a DomainNewSpecialty) -> Self {
        Self {
            name: specialty.name.as_str(),
        }
    }
}
