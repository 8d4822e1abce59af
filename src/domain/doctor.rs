use serde::{Deserialize, Serialize};

use crate::domain::types::{DoctorId, DoctorName, SpecialtyId, SpecialtyName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: DoctorName,
    /// Specialty the doctor belongs to. Existence is checked by the service
    /// layer, not by the store.
    pub specialty_id: SpecialtyId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewDoctor {
    pub name: DoctorName,
    pub specialty_id: SpecialtyId,
}

impl NewDoctor {
    #[must_use]
    pub fn new(name: DoctorName, specialty_id: SpecialtyId) -> Self {
        Self { name, specialty_id }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDoctor {
    pub name: DoctorName,
    pub specialty_id: SpecialtyId,
}

impl UpdateDoctor {
    #[must_use]
    pub fn new(name: DoctorName, specialty_id: SpecialtyId) -> Self {
        Self { name, specialty_id }
    }
}

impl From<NewDoctor> for UpdateDoctor {
    fn from(doctor: NewDoctor) -> Self {
        Self::new(doctor.name, doctor.specialty_id)
    }
}

/// Doctor joined with the name of its specialty. Read-only projection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DoctorWithSpecialty {
    pub id: DoctorId,
    pub doctor_name: DoctorName,
    pub specialty_id: SpecialtyId,
    pub specialty_name: SpecialtyName,
}
