//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::doctor::{Doctor, DoctorWithSpecialty, NewDoctor, UpdateDoctor};
use crate::domain::specialty::{NewSpecialty, Specialty};
use crate::domain::types::{DoctorId, SpecialtyId};
use crate::pagination::SortDirection;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DoctorReader, DoctorSearchQuery, DoctorWriter, Pagination, SpecialtyReader, SpecialtyWriter,
};

mock! {
    pub Repository {}

    impl DoctorReader for Repository {
        fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
        fn list_doctors(&self) -> RepositoryResult<Vec<Doctor>>;
        fn list_doctors_ordered_by_id(
            &self,
            pagination: Pagination,
            direction: SortDirection,
        ) -> RepositoryResult<Vec<Doctor>>;
        fn list_doctors_default(&self, pagination: Pagination) -> RepositoryResult<Vec<Doctor>>;
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

    impl DoctorWriter for Repository {
        fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
        fn update_doctor(&self, id: DoctorId, updates: &UpdateDoctor) -> RepositoryResult<Doctor>;
        fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<()>;
    }

    impl SpecialtyReader for Repository {
        fn get_specialty_by_id(&self, id: SpecialtyId) -> RepositoryResult<Option<Specialty>>;
        fn list_specialties(&self) -> RepositoryResult<Vec<Specialty>>;
        fn specialty_exists(&self, id: SpecialtyId) -> RepositoryResult<bool>;
    }

    impl SpecialtyWriter for Repository {
        fn create_specialty(&self, new_specialty: &NewSpecialty) -> RepositoryResult<Specialty>;
        fn update_specialty(
            &self,
            id: SpecialtyId,
            updates: &NewSpecialty,
        ) -> RepositoryResult<Specialty>;
        fn delete_specialty(&self, id: SpecialtyId) -> RepositoryResult<()>;
    }
}
