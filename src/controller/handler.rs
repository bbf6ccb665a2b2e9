use crate::models::response::StatusResponse;
use crate::service::hasyx::{resolve_id_service, resolve_reference_service};
use crate::service::schema::{schema_drift_service, schema_sdl_service, schema_tables_service};
use crate::AppState;
use actix_web::web::{Data, Path};
use actix_web::{get, web, HttpResponse, Responder};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    static ref IDENT_RE: Regex = Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap();
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReferencePath {
    #[validate(regex(path = "IDENT_RE", message = "Schema must be a lowercase identifier"))]
    pub schema: String,
    #[validate(regex(path = "IDENT_RE", message = "Table must be a lowercase identifier"))]
    pub table: String,
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct IdPath {
    pub id: Uuid,
}

#[get("/schema.graphql")]
async fn schema_sdl_handler() -> impl Responder {
    schema_sdl_service().await
}

#[get("/schema/tables")]
async fn schema_tables_handler() -> impl Responder {
    schema_tables_service().await
}

#[get("/schema/drift")]
async fn schema_drift_handler(data: Data<AppState>) -> impl Responder {
    schema_drift_service(data).await
}

#[get("/hasyx/{id}")]
async fn resolve_id_handler(data: Data<AppState>, path: Path<IdPath>) -> impl Responder {
    resolve_id_service(data, path.id).await
}

#[get("/hasyx/{schema}/{table}/{id}")]
async fn resolve_reference_handler(
    data: Data<AppState>,
    path: Path<ReferencePath>,
) -> impl Responder {
    if let Err(err) = path.validate() {
        return HttpResponse::BadRequest().json(StatusResponse::failed(err.to_string()));
    }
    resolve_reference_service(data, &path.schema, &path.table, path.id).await
}

pub fn config(conf: &mut web::ServiceConfig) {
    let scope = web::scope("/api")
        .service(schema_sdl_handler)
        .service(schema_tables_handler)
        .service(schema_drift_handler)
        .service(resolve_reference_handler)
        .service(resolve_id_handler);

    conf.service(scope);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{call_and_read_body_json, call_service, init_service, TestRequest};
    use actix_web::App;

    #[test]
    fn reference_paths_must_be_identifiers() {
        let valid = ReferencePath {
            schema: "badma".to_string(),
            table: "in_clubs".to_string(),
            id: Uuid::nil(),
        };
        assert!(valid.validate().is_ok());

        let invalid = ReferencePath {
            schema: "Badma".to_string(),
            table: "clubs;drop".to_string(),
            id: Uuid::nil(),
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("schema"));
        assert!(fields.contains_key("table"));
    }

    #[actix_web::test]
    async fn schema_routes_need_no_state() {
        let app = init_service(App::new().configure(config)).await;

        let req = TestRequest::get().uri("/api/schema/tables").to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "Success");
        assert_eq!(body["data"].as_array().unwrap().len(), 25);

        let req = TestRequest::get().uri("/api/schema.graphql").to_request();
        let resp = call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
