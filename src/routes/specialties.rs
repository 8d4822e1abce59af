use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::response::{MESSAGE_GET, MESSAGE_POST, MESSAGE_PUT, ResponseEnvelope};
use crate::forms::specialty::SpecialtyPayload;
use crate::repository::DieselRepository;
use crate::routes::{error_response, respond};
use crate::services::specialties as specialties_service;

#[get("/specialties")]
pub async fn list_specialties(repo: web::Data<DieselRepository>) -> impl Responder {
    match specialties_service::list_specialties(repo.get_ref()) {
        Ok(specialties) => respond(
            StatusCode::OK,
            ResponseEnvelope::list(200, MESSAGE_GET, specialties),
        ),
        Err(err) => error_response(&err),
    }
}

#[get("/specialties/{specialty_id}")]
pub async fn show_specialty(
    specialty_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match specialties_service::get_specialty_by_id(repo.get_ref(), specialty_id.into_inner()) {
        Ok(specialty) => respond(
            StatusCode::OK,
            ResponseEnvelope::single(200, MESSAGE_GET, specialty),
        ),
        Err(err) => error_response(&err),
    }
}

#[post("/specialties")]
pub async fn create_specialty(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<SpecialtyPayload>,
) -> impl Responder {
    match specialties_service::create_specialty(repo.get_ref(), payload) {
        Ok(specialty) => respond(
            StatusCode::CREATED,
            ResponseEnvelope::plain(201, MESSAGE_POST, specialty),
        ),
        Err(err) => error_response(&err),
    }
}

#[put("/specialties/{specialty_id}")]
pub async fn update_specialty(
    specialty_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<SpecialtyPayload>,
) -> impl Responder {
    match specialties_service::update_specialty(
        repo.get_ref(),
        specialty_id.into_inner(),
        payload,
    ) {
        Ok(specialty) => respond(
            StatusCode::OK,
            ResponseEnvelope::plain(200, MESSAGE_PUT, specialty),
        ),
        Err(err) => error_response(&err),
    }
}

#[delete("/specialties/{specialty_id}")]
pub async fn delete_specialty(
    specialty_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match specialties_service::delete_specialty(repo.get_ref(), specialty_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
