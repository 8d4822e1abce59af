use serde::{Deserialize, Serialize};

use crate::domain::types::{SpecialtyId, SpecialtyName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: SpecialtyName,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewSpecialty {
    pub name: SpecialtyName,
}

impl NewSpecialty {
    #[must_use]
    pub fn new(name: SpecialtyName) -> Self {
        Self { name }
    }
}
