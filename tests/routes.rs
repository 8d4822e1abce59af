use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use medicos_api::domain::doctor::NewDoctor;
use medicos_api::domain::specialty::NewSpecialty;
use medicos_api::domain::types::{DoctorName, SpecialtyName};
use medicos_api::repository::{DieselRepository, DoctorWriter, SpecialtyWriter};
use medicos_api::routes::configure;
use serde_json::{Value, json};

mod common;

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());
    let cardiology = repo
        .create_specialty(&NewSpecialty::new(SpecialtyName::new("Cardiology").unwrap()))
        .unwrap();
    for name in ["Dr. Juan", "Dr. Ana", "Dr. Luis"] {
        repo.create_doctor(&NewDoctor::new(DoctorName::new(name).unwrap(), cardiology.id))
            .unwrap();
    }
    repo
}

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_doctor_page_envelope() {
    let test_db = common::TestDb::new("test_doctor_page_envelope.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/doctors/page?size=2&sortBy=id&sortOrder=desc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], "200");
    assert_eq!(body["totalrows"], 2);
    assert_eq!(body["data"]["content"][0]["id"], 3);
    assert_eq!(body["data"]["content"][1]["id"], 2);
    assert_eq!(body["data"]["pageNumber"], 0);
    assert_eq!(body["data"]["pageSize"], 2);
    assert_eq!(body["data"]["first"], true);
    assert_eq!(body["data"]["last"], false);
    assert_eq!(body["data"]["empty"], false);
}

#[actix_web::test]
async fn test_doctor_page_name_filter() {
    let test_db = common::TestDb::new("test_doctor_page_name_filter.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/doctors/page?name=Ana&specialtyId=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["content"], json!([{"id": 2, "name": "Dr. Ana", "specialtyId": 1}]));
    assert_eq!(body["data"]["last"], true);
}

#[actix_web::test]
async fn test_doctor_page_rejects_unknown_sort_field() {
    let test_db = common::TestDb::new("test_doctor_page_bad_sort.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/doctors/page?sortBy=salary")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "400");
    assert_eq!(body["data"]["error"], "Bad request");
}

#[actix_web::test]
async fn test_doctor_page_rejects_zero_size() {
    let test_db = common::TestDb::new("test_doctor_page_zero_size.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/doctors/page?size=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_show_missing_doctor_is_not_found() {
    let test_db = common::TestDb::new("test_show_missing_doctor.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/doctors/77").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["resourceName"], "Doctor");
    assert_eq!(body["data"]["fieldValue"], "77");
}

#[actix_web::test]
async fn test_doctor_with_specialty() {
    let test_db = common::TestDb::new("test_doctor_with_specialty_route.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/doctors/1/with-specialty")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalrows"], 1);
    assert_eq!(body["data"]["doctorName"], "Dr. Juan");
    assert_eq!(body["data"]["specialtyName"], "Cardiology");

    let req = test::TestRequest::get()
        .uri("/api/doctors/with-specialty")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalrows"], 3);
}

#[actix_web::test]
async fn test_create_doctor_with_missing_specialty() {
    let test_db = common::TestDb::new("test_create_doctor_missing_specialty.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::post()
        .uri("/api/doctors")
        .set_json(json!({"name": "Dr. New", "specialtyId": 9}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["resourceName"], "Specialty");
}

#[actix_web::test]
async fn test_create_update_delete_doctor() {
    let test_db = common::TestDb::new("test_doctor_lifecycle.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::post()
        .uri("/api/doctors")
        .set_json(json!({"id": 500, "name": "Dr. New", "specialtyId": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 4);
    assert!(body.get("totalrows").is_none());

    let req = test::TestRequest::put()
        .uri("/api/doctors/4")
        .set_json(json!({"name": "Dr. Renamed", "specialtyId": 1}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["name"], "Dr. Renamed");

    let req = test::TestRequest::delete().uri("/api/doctors/4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/api/doctors/4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_specialty_endpoints() {
    let test_db = common::TestDb::new("test_specialty_endpoints.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::post()
        .uri("/api/specialties")
        .set_json(json!({"name": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/specialties")
        .set_json(json!({"name": "Dermatology"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/api/specialties").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalrows"], 2);
    assert_eq!(body["data"][1]["name"], "Dermatology");

    let req = test::TestRequest::get().uri("/api/specialties/40").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_query_is_enveloped() {
    let test_db = common::TestDb::new("test_malformed_query_envelope.db");
    let app = init_app!(seeded_repo(&test_db));

    for uri in ["/api/doctors/page?specialtyId=abc", "/api/doctors/page?page=x"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "400");
        assert_eq!(body["data"]["error"], "Bad request");
    }
}

#[actix_web::test]
async fn test_malformed_json_body_is_enveloped() {
    let test_db = common::TestDb::new("test_malformed_json_envelope.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::post()
        .uri("/api/doctors")
        .insert_header(("content-type", "application/json"))
        .set_payload("{bad")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "400");
    assert_eq!(body["data"]["error"], "Bad request");
}

#[actix_web::test]
async fn test_non_numeric_path_id_is_enveloped() {
    let test_db = common::TestDb::new("test_non_numeric_path_envelope.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/specialties/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "400");
}

#[actix_web::test]
async fn test_name_filter_is_matched_verbatim() {
    let test_db = common::TestDb::new("test_name_filter_verbatim.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/doctors/page?name=%20Ana")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["content"][0]["name"], "Dr. Ana");

    let req = test::TestRequest::get()
        .uri("/api/doctors/page?name=Ana%20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["empty"], true);
}
