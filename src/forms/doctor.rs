use serde::Deserialize;
use validator::Validate;

use crate::domain::doctor::NewDoctor;
use crate::domain::types::{DoctorName, SpecialtyId};
use crate::dto::doctor::DoctorPageQuery;
use crate::forms::FormError;
use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON body of the create/update doctor endpoints.
pub struct DoctorPayload {
    /// Ignored: ids are assigned by the store or taken from the path.
    pub id: Option<i32>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub specialty_id: Option<i32>,
}

impl TryFrom<DoctorPayload> for NewDoctor {
    type Error = FormError;

    fn try_from(payload: DoctorPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        let name = DoctorName::new(payload.name.unwrap_or_default())
            .map_err(|_| FormError::InvalidName)?;
        let specialty_id = payload
            .specialty_id
            .and_then(|id| SpecialtyId::new(id).ok())
            .ok_or(FormError::InvalidSpecialtyId)?;

        Ok(NewDoctor::new(name, specialty_id))
    }
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_order() -> String {
    "asc".to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Query string of `GET /api/doctors/page`.
pub struct DoctorPageParams {
    pub name: Option<String>,
    pub specialty_id: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub page: i64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1))]
    pub size: i64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

impl TryFrom<DoctorPageParams> for DoctorPageQuery {
    type Error = FormError;

    fn try_from(params: DoctorPageParams) -> Result<Self, Self::Error> {
        params.validate()?;

        Ok(DoctorPageQuery {
            name: params.name,
            specialty_id: params.specialty_id,
            page: params.page,
            size: params.size,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        })
    }
}
