//! HTTP handlers. Every response, failures included, is wrapped in a
//! [`ResponseEnvelope`].

use std::fmt::{Debug, Display};

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::dto::response::{MESSAGE_INTERNAL_ERROR, ResponseEnvelope};
use crate::services::ServiceError;

pub mod doctors;
pub mod specialties;

/// Registers every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(|err, req| bad_request(err, req)))
            .app_data(web::JsonConfig::default().error_handler(|err, req| bad_request(err, req)))
            .app_data(web::PathConfig::default().error_handler(|err, req| bad_request(err, req)))
            // Literal doctor paths must be registered before `/doctors/{id}`.
            .service(doctors::doctors_page)
            .service(doctors::doctors_with_specialty)
            .service(doctors::list_doctors)
            .service(doctors::doctor_with_specialty)
            .service(doctors::show_doctor)
            .service(doctors::create_doctor)
            .service(doctors::update_doctor)
            .service(doctors::delete_doctor)
            .service(specialties::list_specialties)
            .service(specialties::show_specialty)
            .service(specialties::create_specialty)
            .service(specialties::update_specialty)
            .service(specialties::delete_specialty),
    );
}

/// Wraps an extractor failure (query string, JSON body or path) in the
/// bad-request envelope.
fn bad_request<E>(err: E, req: &HttpRequest) -> actix_web::Error
where
    E: Debug + Display + 'static,
{
    log::warn!("Rejected request to {}: {err}", req.path());
    let response = error_response(&ServiceError::InvalidArgument(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub(crate) fn respond<T: Serialize>(
    status: StatusCode,
    envelope: ResponseEnvelope<T>,
) -> HttpResponse {
    HttpResponse::build(status).json(envelope)
}

/// Renders a service failure with the status and details its kind maps to.
pub(crate) fn error_response(err: &ServiceError) -> HttpResponse {
    let timestamp = Utc::now().naive_utc();

    let (status, message, details) = match err {
        ServiceError::InvalidArgument(message) => {
            log::warn!("Bad request: {message}");
            (
                StatusCode::BAD_REQUEST,
                message.clone(),
                json!({
                    "error": "Bad request",
                    "message": message,
                    "timestamp": timestamp,
                }),
            )
        }
        ServiceError::NotFound {
            resource,
            field,
            value,
        } => {
            log::warn!("{err}");
            (
                StatusCode::NOT_FOUND,
                err.to_string(),
                json!({
                    "resourceName": resource,
                    "fieldName": field,
                    "fieldValue": value,
                    "timestamp": timestamp,
                }),
            )
        }
        ServiceError::Internal(message) => {
            log::error!("Internal error: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                MESSAGE_INTERNAL_ERROR.to_string(),
                json!({
                    "error": MESSAGE_INTERNAL_ERROR,
                    "timestamp": timestamp,
                }),
            )
        }
    };

    respond(status, ResponseEnvelope::plain(status.as_u16(), message, details))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[actix_web::test]
    async fn not_found_carries_resource_details() {
        let response = error_response(&ServiceError::not_found("Doctor", 12));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], "404");
        assert_eq!(body["data"]["resourceName"], "Doctor");
        assert_eq!(body["data"]["fieldName"], "id");
        assert_eq!(body["data"]["fieldValue"], "12");
        assert!(body.get("totalrows").is_none());
    }

    #[actix_web::test]
    async fn internal_error_hides_cause() {
        let response = error_response(&ServiceError::Internal("disk I/O error".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], MESSAGE_INTERNAL_ERROR);
        assert!(body["data"].get("message").is_none());
    }
}
