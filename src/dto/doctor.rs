//! Transport shapes for doctor endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::doctor::{Doctor, DoctorWithSpecialty};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Flat projection of [`Doctor`] sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub id: i32,
    pub name: String,
    pub specialty_id: i32,
}

impl From<Doctor> for DoctorDto {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.get(),
            name: doctor.name.into_inner(),
            specialty_id: doctor.specialty_id.get(),
        }
    }
}

/// Doctor with the name of its specialty, produced by the join lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorWithSpecialtyDto {
    pub id: i32,
    pub doctor_name: String,
    pub specialty_id: i32,
    pub specialty_name: String,
}

impl From<DoctorWithSpecialty> for DoctorWithSpecialtyDto {
    fn from(row: DoctorWithSpecialty) -> Self {
        Self {
            id: row.id.get(),
            doctor_name: row.doctor_name.into_inner(),
            specialty_id: row.specialty_id.get(),
            specialty_name: row.specialty_name.into_inner(),
        }
    }
}

/// Optional filters of the paginated doctor listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    /// Non-empty name substring, matched verbatim.
    pub name: Option<String>,
    pub specialty_id: Option<i32>,
}

impl DoctorFilter {
    pub fn new(name: Option<String>, specialty_id: Option<i32>) -> Self {
        Self {
            name: name.filter(|s| !s.is_empty()),
            specialty_id,
        }
    }

    pub fn is_active(&self) -> bool {
        self.name.is_some() || self.specialty_id.is_some()
    }
}

/// Raw parameters of the paginated doctor listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorPageQuery {
    pub name: Option<String>,
    pub specialty_id: Option<i32>,
    pub page: i64,
    pub size: i64,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for DoctorPageQuery {
    fn default() -> Self {
        Self {
            name: None,
            specialty_id: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: "id".to_string(),
            sort_order: "asc".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_filter_is_inactive() {
        let filter = DoctorFilter::new(Some(String::new()), None);
        assert_eq!(filter.name, None);
        assert!(!filter.is_active());
    }

    #[test]
    fn name_filter_keeps_surrounding_whitespace() {
        let filter = DoctorFilter::new(Some(" Ana".into()), None);
        assert_eq!(filter.name.as_deref(), Some(" Ana"));
        assert!(filter.is_active());
    }

    #[test]
    fn specialty_alone_activates_filter() {
        assert!(DoctorFilter::new(None, Some(4)).is_active());
    }

    #[test]
    fn doctor_dto_uses_camel_case() {
        let dto = DoctorDto {
            id: 1,
            name: "Dr. A".into(),
            specialty_id: 1,
        };
        let json = serde_json::to_value(&dto).expect("serializable");
        assert_eq!(json["specialtyId"], 1);
        assert_eq!(json["name"], "Dr. A");
    }
}
