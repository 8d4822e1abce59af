use crate::domain::specialty::NewSpecialty;
use crate::domain::types::SpecialtyId;
use crate::dto::specialty::SpecialtyDto;
use crate::forms::specialty::SpecialtyPayload;
use crate::repository::errors::RepositoryError;
use crate::repository::{SpecialtyReader, SpecialtyWriter};
use crate::services::{ServiceError, ServiceResult};

const SPECIALTY: &str = "Specialty";

/// Lists every specialty ordered by id.
pub fn list_specialties<R>(repo: &R) -> ServiceResult<Vec<SpecialtyDto>>
where
    R: SpecialtyReader + ?Sized,
{
    let specialties = repo.list_specialties().map_err(|err| {
        log::error!("Failed to list specialties: {err}");
        ServiceError::from(err)
    })?;

    Ok(specialties.into_iter().map(SpecialtyDto::from).collect())
}

/// Fetches a specialty or fails with `NotFound`.
pub fn get_specialty_by_id<R>(repo: &R, id: i32) -> ServiceResult<SpecialtyDto>
where
    R: SpecialtyReader + ?Sized,
{
    let specialty_id = SpecialtyId::new(id).map_err(|_| ServiceError::not_found(SPECIALTY, id))?;

    match repo.get_specialty_by_id(specialty_id)? {
        Some(specialty) => Ok(specialty.into()),
        None => {
            log::warn!("Specialty {id} not found");
            Err(ServiceError::not_found(SPECIALTY, id))
        }
    }
}

/// Fails with `NotFound` unless the specialty is stored.
pub fn ensure_specialty_exists<R>(repo: &R, id: SpecialtyId) -> ServiceResult<()>
where
    R: SpecialtyReader + ?Sized,
{
    let found = repo.specialty_exists(id).map_err(|err| {
        log::error!("Failed to check specialty {id}: {err}");
        ServiceError::from(err)
    })?;

    if !found {
        log::warn!("Specialty {id} does not exist");
        return Err(ServiceError::not_found(SPECIALTY, id));
    }
    Ok(())
}

fn parse_payload(payload: SpecialtyPayload) -> ServiceResult<NewSpecialty> {
    NewSpecialty::try_from(payload).map_err(|err| {
        log::error!("Invalid specialty payload: {err}");
        ServiceError::InvalidArgument("Specialty name must not be null or empty".to_string())
    })
}

pub fn create_specialty<R>(repo: &R, payload: SpecialtyPayload) -> ServiceResult<SpecialtyDto>
where
    R: SpecialtyWriter + ?Sized,
{
    let new_specialty = parse_payload(payload)?;

    let created = repo.create_specialty(&new_specialty).map_err(|err| {
        log::error!("Failed to save specialty: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Specialty {} created", created.id);

    Ok(created.into())
}

/// Renames an existing specialty. A missing id is reported before the payload
/// is validated.
pub fn update_specialty<R>(
    repo: &R,
    id: i32,
    payload: SpecialtyPayload,
) -> ServiceResult<SpecialtyDto>
where
    R: SpecialtyReader + SpecialtyWriter + ?Sized,
{
    let specialty_id = SpecialtyId::new(id).map_err(|_| ServiceError::not_found(SPECIALTY, id))?;
    if repo.get_specialty_by_id(specialty_id)?.is_none() {
        return Err(ServiceError::not_found(SPECIALTY, id));
    }

    let updates = parse_payload(payload)?;

    let updated = repo
        .update_specialty(specialty_id, &updates)
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::not_found(SPECIALTY, id),
            err => {
                log::error!("Failed to update specialty {id}: {err}");
                ServiceError::from(err)
            }
        })?;

    log::info!("Specialty {id} updated");

    Ok(updated.into())
}

pub fn delete_specialty<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: SpecialtyReader + SpecialtyWriter + ?Sized,
{
    let specialty_id = SpecialtyId::new(id).map_err(|_| ServiceError::not_found(SPECIALTY, id))?;
    if repo.get_specialty_by_id(specialty_id)?.is_none() {
        return Err(ServiceError::not_found(SPECIALTY, id));
    }

    repo.delete_specialty(specialty_id).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::not_found(SPECIALTY, id),
        err => ServiceError::from(err),
    })?;

    log::info!("Specialty {id} deleted");

    Ok(())
}
