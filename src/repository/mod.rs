use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::doctor::{Doctor, DoctorWithSpecialty, NewDoctor, UpdateDoctor};
use crate::domain::specialty::{NewSpecialty, Specialty};
use crate::domain::types::{DoctorId, SpecialtyId};
use crate::pagination::SortDirection;
use crate::repository::errors::RepositoryResult;

pub mod doctor;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod specialty;

/// `LIMIT` / `OFFSET` window applied to a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }
}

/// Filtered doctor listing. Absent filters match every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorSearchQuery {
    /// Substring matched against the doctor name.
    pub name: Option<String>,
    /// Exact specialty id.
    pub specialty_id: Option<i32>,
    pub pagination: Pagination,
}

impl DoctorSearchQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            name: None,
            specialty_id: None,
            pagination,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn specialty_id(mut self, specialty_id: i32) -> Self {
        self.specialty_id = Some(specialty_id);
        self
    }
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait DoctorReader {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
    fn list_doctors(&self) -> RepositoryResult<Vec<Doctor>>;
    /// Unfiltered page ordered by id in the given direction.
    fn list_doctors_ordered_by_id(
        &self,
        pagination: Pagination,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Doctor>>;
    /// Unfiltered page in the default order (id ascending).
    fn list_doctors_default(&self, pagination: Pagination) -> RepositoryResult<Vec<Doctor>>;
    /// Filtered page ordered by id in the given direction.
    fn search_doctors_ordered_by_id(
        &self,
        query: &DoctorSearchQuery,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Doctor>>;
    fn get_doctor_with_specialty(
        &self,
        id: DoctorId,
    ) -> RepositoryResult<Option<DoctorWithSpecialty>>;
    fn list_doctors_with_specialty(&self) -> RepositoryResult<Vec<DoctorWithSpecialty>>;
}

pub trait DoctorWriter {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
    fn update_doctor(&self, id: DoctorId, updates: &UpdateDoctor) -> RepositoryResult<Doctor>;
    fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<()>;
}

pub trait SpecialtyReader {
    fn get_specialty_by_id(&self, id: SpecialtyId) -> RepositoryResult<Option<Specialty>>;
    fn list_specialties(&self) -> RepositoryResult<Vec<Specialty>>;
    fn specialty_exists(&self, id: SpecialtyId) -> RepositoryResult<bool>;
}

pub trait SpecialtyWriter {
    fn create_specialty(&self, new_specialty: &NewSpecialty) -> RepositoryResult<Specialty>;
    fn update_specialty(
        &self,
        id: SpecialtyId,
        updates: &NewSpecialty,
    ) -> RepositoryResult<Specialty>;
    fn delete_specialty(&self, id: SpecialtyId) -> RepositoryResult<()>;
}
