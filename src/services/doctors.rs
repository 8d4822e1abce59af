//! Doctor workflows, including the paginated listing resolver.

use crate::domain::doctor::{NewDoctor, UpdateDoctor};
use crate::domain::types::DoctorId;
use crate::dto::doctor::{DoctorDto, DoctorFilter, DoctorPageQuery, DoctorWithSpecialtyDto};
use crate::forms::doctor::DoctorPayload;
use crate::pagination::{PageRequest, PageResponse, Sort, SortDirection, SortField};
use crate::repository::errors::RepositoryError;
use crate::repository::{DoctorReader, DoctorSearchQuery, DoctorWriter, Pagination, SpecialtyReader};
use crate::services::specialties::ensure_specialty_exists;
use crate::services::{ServiceError, ServiceResult};

const DOCTOR: &str = "Doctor";

/// Query chosen for one listing request.
///
/// Only `id` has dedicated ascending and descending queries. The other
/// allow-listed fields fall back to id ascending, filtered or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchPlan {
    UnfilteredById(SortDirection),
    UnfilteredDefault,
    FilteredById(SortDirection),
}

impl FetchPlan {
    fn select(filtered: bool, sort: Sort) -> Self {
        match (filtered, sort.field) {
            (false, SortField::Id) => FetchPlan::UnfilteredById(sort.direction),
            (false, SortField::Name | SortField::SpecialtyId) => FetchPlan::UnfilteredDefault,
            (true, SortField::Id) => FetchPlan::FilteredById(sort.direction),
            (true, SortField::Name | SortField::SpecialtyId) => {
                FetchPlan::FilteredById(SortDirection::Asc)
            }
        }
    }
}

/// Checks `sortBy` against the allow-list and `sortOrder` against asc/desc.
pub fn validate_sort_parameters(sort_by: &str, sort_order: &str) -> ServiceResult<Sort> {
    Sort::parse(sort_by, sort_order).map_err(|err| {
        log::error!("Rejected sort parameters: {err}");
        ServiceError::from(err)
    })
}

/// Validates raw listing parameters and returns the requested page.
pub fn list_doctors_page<R>(
    repo: &R,
    query: DoctorPageQuery,
) -> ServiceResult<PageResponse<DoctorDto>>
where
    R: DoctorReader + ?Sized,
{
    let sort = validate_sort_parameters(&query.sort_by, &query.sort_order)?;
    let pageable = PageRequest::new(query.page, query.size, sort);
    let filter = DoctorFilter::new(query.name, query.specialty_id);

    list_doctors_paginated(repo, &filter, Some(&pageable))
}

/// Returns one page of doctors using exactly one fetch and no count query.
///
/// `last` is `true` whenever fewer than `size` rows come back, so an exactly
/// full final page is reported as not last.
pub fn list_doctors_paginated<R>(
    repo: &R,
    filter: &DoctorFilter,
    pageable: Option<&PageRequest>,
) -> ServiceResult<PageResponse<DoctorDto>>
where
    R: DoctorReader + ?Sized,
{
    let Some(pageable) = pageable else {
        log::error!("Paginated doctor listing requested without page parameters");
        return Err(ServiceError::InvalidArgument("Page request must not be null".to_string()));
    };

    log::info!(
        "Listing doctors: page={}, size={}, sort={} {}, name={:?}, specialty_id={:?}",
        pageable.page,
        pageable.size,
        pageable.sort.field,
        pageable.sort.direction,
        filter.name,
        filter.specialty_id
    );

    let pagination = page_window(pageable)?;

    let doctors = match FetchPlan::select(filter.is_active(), pageable.sort) {
        FetchPlan::UnfilteredById(direction) => {
            repo.list_doctors_ordered_by_id(pagination, direction)
        }
        FetchPlan::UnfilteredDefault => repo.list_doctors_default(pagination),
        FetchPlan::FilteredById(direction) => {
            repo.search_doctors_ordered_by_id(&search_query(filter, pagination), direction)
        }
    }
    .map_err(|err| {
        log::error!("Failed to list doctors page: {err}");
        ServiceError::from(err)
    })?;

    let page = PageResponse::new(doctors, pageable.page, pageable.size).map(DoctorDto::from);

    log::info!("Doctor page completed: {} results", page.content.len());

    Ok(page)
}

fn page_window(pageable: &PageRequest) -> ServiceResult<Pagination> {
    match pageable.offset() {
        Some(offset) if pageable.size >= 0 && offset >= 0 => {
            Ok(Pagination::new(pageable.size, offset))
        }
        _ => Err(ServiceError::InvalidArgument(
            "Size and offset must be greater than or equal to zero".to_string(),
        )),
    }
}

fn search_query(filter: &DoctorFilter, pagination: Pagination) -> DoctorSearchQuery {
    let mut query = DoctorSearchQuery::new(pagination);
    if let Some(name) = &filter.name {
        query = query.name(name.as_str());
    }
    if let Some(specialty_id) = filter.specialty_id {
        query = query.specialty_id(specialty_id);
    }
    query
}

/// Lists every doctor ordered by id.
pub fn list_doctors<R>(repo: &R) -> ServiceResult<Vec<DoctorDto>>
where
    R: DoctorReader + ?Sized,
{
    let doctors = repo.list_doctors().map_err(|err| {
        log::error!("Failed to list doctors: {err}");
        ServiceError::from(err)
    })?;

    Ok(doctors.into_iter().map(DoctorDto::from).collect())
}

/// Fetches a doctor by id. Ids that cannot exist resolve to `None`.
pub fn get_doctor_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<DoctorDto>>
where
    R: DoctorReader + ?Sized,
{
    let Ok(doctor_id) = DoctorId::new(id) else {
        log::warn!("Doctor lookup with non-positive id {id}");
        return Ok(None);
    };

    let doctor = repo.get_doctor_by_id(doctor_id).map_err(|err| {
        log::error!("Failed to load doctor {id}: {err}");
        ServiceError::from(err)
    })?;

    if doctor.is_none() {
        log::warn!("Doctor {id} not found");
    }

    Ok(doctor.map(DoctorDto::from))
}

/// Lists every doctor joined with its specialty name.
pub fn list_doctors_with_specialty<R>(repo: &R) -> ServiceResult<Vec<DoctorWithSpecialtyDto>>
where
    R: DoctorReader + ?Sized,
{
    let rows = repo.list_doctors_with_specialty().map_err(|err| {
        log::error!("Failed to list doctors with specialty: {err}");
        ServiceError::from(err)
    })?;

    Ok(rows.into_iter().map(DoctorWithSpecialtyDto::from).collect())
}

/// Fetches one doctor joined with its specialty name.
pub fn get_doctor_with_specialty_by_id<R>(
    repo: &R,
    id: i32,
) -> ServiceResult<Option<DoctorWithSpecialtyDto>>
where
    R: DoctorReader + ?Sized,
{
    let Ok(doctor_id) = DoctorId::new(id) else {
        return Ok(None);
    };

    let row = repo.get_doctor_with_specialty(doctor_id).map_err(|err| {
        log::error!("Failed to load doctor {id} with specialty: {err}");
        ServiceError::from(err)
    })?;

    Ok(row.map(DoctorWithSpecialtyDto::from))
}

fn parse_payload(payload: DoctorPayload) -> ServiceResult<NewDoctor> {
    NewDoctor::try_from(payload).map_err(|err| {
        log::error!("Invalid doctor payload: {err}");
        ServiceError::InvalidArgument(format!("Invalid doctor data: {err}"))
    })
}

/// Creates a doctor after checking that its specialty exists.
///
/// Any id in the payload is ignored.
pub fn create_doctor<R>(repo: &R, payload: DoctorPayload) -> ServiceResult<DoctorDto>
where
    R: DoctorWriter + SpecialtyReader + ?Sized,
{
    let new_doctor = parse_payload(payload)?;

    ensure_specialty_exists(repo, new_doctor.specialty_id)?;

    let created = repo.create_doctor(&new_doctor).map_err(|err| {
        log::error!("Failed to save doctor: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Doctor {} created", created.id);

    Ok(created.into())
}

/// Replaces name and specialty of an existing doctor.
///
/// Checks run in order: payload, specialty existence, doctor existence.
pub fn update_doctor<R>(repo: &R, id: i32, payload: DoctorPayload) -> ServiceResult<DoctorDto>
where
    R: DoctorReader + DoctorWriter + SpecialtyReader + ?Sized,
{
    let updates = UpdateDoctor::from(parse_payload(payload)?);

    ensure_specialty_exists(repo, updates.specialty_id)?;

    let doctor_id = DoctorId::new(id).map_err(|_| ServiceError::not_found(DOCTOR, id))?;
    if repo.get_doctor_by_id(doctor_id)?.is_none() {
        return Err(ServiceError::not_found(DOCTOR, id));
    }

    let updated = repo
        .update_doctor(doctor_id, &updates)
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::not_found(DOCTOR, id),
            err => {
                log::error!("Failed to update doctor {id}: {err}");
                ServiceError::from(err)
            }
        })?;

    log::info!("Doctor {id} updated");

    Ok(updated.into())
}

/// Deletes an existing doctor.
pub fn delete_doctor<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: DoctorReader + DoctorWriter + ?Sized,
{
    let doctor_id = DoctorId::new(id).map_err(|_| ServiceError::not_found(DOCTOR, id))?;
    if repo.get_doctor_by_id(doctor_id)?.is_none() {
        return Err(ServiceError::not_found(DOCTOR, id));
    }

    repo.delete_doctor(doctor_id).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::not_found(DOCTOR, id),
        err => {
            log::error!("Failed to delete doctor {id}: {err}");
            ServiceError::from(err)
        }
    })?;

    log::info!("Doctor {id} deleted");

    Ok(())
}
