use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::doctor::DoctorPageQuery;
use crate::dto::response::{MESSAGE_GET, MESSAGE_POST, MESSAGE_PUT, ResponseEnvelope};
use crate::forms::doctor::{DoctorPageParams, DoctorPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_response, respond};
use crate::services::{ServiceError, doctors as doctors_service};

#[get("/doctors/page")]
pub async fn doctors_page(
    repo: web::Data<DieselRepository>,
    params: web::Query<DoctorPageParams>,
) -> impl Responder {
    let query = match DoctorPageQuery::try_from(params.into_inner()) {
        Ok(query) => query,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    match doctors_service::list_doctors_page(repo.get_ref(), query) {
        Ok(page) => {
            let rows = page.content.len();
            respond(
                StatusCode::OK,
                ResponseEnvelope::new(200, MESSAGE_GET, Some(rows), Some(page)),
            )
        }
        Err(err) => error_response(&err),
    }
}

#[get("/doctors")]
pub async fn list_doctors(repo: web::Data<DieselRepository>) -> impl Responder {
    match doctors_service::list_doctors(repo.get_ref()) {
        Ok(doctors) => respond(StatusCode::OK, ResponseEnvelope::list(200, MESSAGE_GET, doctors)),
        Err(err) => error_response(&err),
    }
}

#[get("/doctors/with-specialty")]
pub async fn doctors_with_specialty(repo: web::Data<DieselRepository>) -> impl Responder {
    match doctors_service::list_doctors_with_specialty(repo.get_ref()) {
        Ok(rows) => respond(StatusCode::OK, ResponseEnvelope::list(200, MESSAGE_GET, rows)),
        Err(err) => error_response(&err),
    }
}

#[get("/doctors/{doctor_id}")]
pub async fn show_doctor(
    doctor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let doctor_id = doctor_id.into_inner();

    match doctors_service::get_doctor_by_id(repo.get_ref(), doctor_id) {
        Ok(Some(doctor)) => respond(
            StatusCode::OK,
            ResponseEnvelope::single(200, MESSAGE_GET, doctor),
        ),
        Ok(None) => error_response(&ServiceError::not_found("Doctor", doctor_id)),
        Err(err) => error_response(&err),
    }
}

#[get("/doctors/{doctor_id}/with-specialty")]
pub async fn doctor_with_specialty(
    doctor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let doctor_id = doctor_id.into_inner();

    match doctors_service::get_doctor_with_specialty_by_id(repo.get_ref(), doctor_id) {
        Ok(Some(row)) => respond(StatusCode::OK, ResponseEnvelope::single(200, MESSAGE_GET, row)),
        Ok(None) => error_response(&ServiceError::not_found("Doctor", doctor_id)),
        Err(err) => error_response(&err),
    }
}

#[post("/doctors")]
pub async fn create_doctor(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<DoctorPayload>,
) -> impl Responder {
    match doctors_service::create_doctor(repo.get_ref(), payload) {
        Ok(doctor) => respond(
            StatusCode::CREATED,
            ResponseEnvelope::plain(201, MESSAGE_POST, doctor),
        ),
        Err(err) => error_response(&err),
    }
}

#[put("/doctors/{doctor_id}")]
pub async fn update_doctor(
    doctor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<DoctorPayload>,
) -> impl Responder {
    match doctors_service::update_doctor(repo.get_ref(), doctor_id.into_inner(), payload) {
        Ok(doctor) => respond(StatusCode::OK, ResponseEnvelope::plain(200, MESSAGE_PUT, doctor)),
        Err(err) => error_response(&err),
    }
}

#[delete("/doctors/{doctor_id}")]
pub async fn delete_doctor(
    doctor_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match doctors_service::delete_doctor(repo.get_ref(), doctor_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
