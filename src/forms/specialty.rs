use serde::Deserialize;
use validator::Validate;

use crate::domain::specialty::NewSpecialty;
use crate::domain::types::SpecialtyName;
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// JSON body of the create/update specialty endpoints.
pub struct SpecialtyPayload {
    pub id: Option<i32>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

impl TryFrom<SpecialtyPayload> for NewSpecialty {
    type Error = FormError;

    fn try_from(payload: SpecialtyPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        let name = SpecialtyName::new(payload.name.unwrap_or_default())
            .map_err(|_| FormError::InvalidName)?;

        Ok(NewSpecialty::new(name))
    }
}
