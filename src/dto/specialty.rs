use serde::{Deserialize, Serialize};

use crate::domain::specialty::Specialty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyDto {
    pub id: i32,
    pub name: String,
}

impl From<Specialty> for SpecialtyDto {
    fn from(specialty: Specialty) -> Self {
        Self {
            id: specialty.id.get(),
            name: specialty.name.into_inner(),
        }
    }
}
