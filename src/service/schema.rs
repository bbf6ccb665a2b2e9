use crate::graphql::{catalog, introspection, sdl};
use crate::models::response::{DataResponse, StatusResponse, TableSummary};
use crate::AppState;
use actix_web::web::Data;
use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use log::{error, info};
use serde::Serialize;

lazy_static! {
    static ref SCHEMA_SDL: Result<String, sdl::SdlError> = sdl::render(&catalog::tables());
}

#[derive(Debug, Serialize)]
pub struct DriftResponse {
    pub checked_at: DateTime<Utc>,
    pub clean: bool,
    pub report: introspection::DriftReport,
}

pub fn table_summaries() -> Vec<TableSummary> {
    catalog::tables()
        .into_iter()
        .map(|info| TableSummary {
            schema: info.schema,
            table: info.table,
            type_name: info.type_name,
            root_fields: info.root_fields(),
        })
        .collect()
}

pub async fn schema_sdl_service() -> HttpResponse {
    match SCHEMA_SDL.as_ref() {
        Ok(schema) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(schema.as_str()),
        Err(err) => {
            error!("An error occurred in the schema_sdl_service function. The error: {}", err);
            HttpResponse::InternalServerError().json(StatusResponse::failed("Could not build the schema"))
        }
    }
}

pub async fn schema_tables_service() -> HttpResponse {
    HttpResponse::Ok().json(DataResponse::success(table_summaries()))
}

pub async fn schema_drift_service(data: Data<AppState>) -> HttpResponse {
    let tables = catalog::tables();
    let schemas = introspection::schemas(&tables);
    match data.db.introspect_columns(&schemas).await {
        Ok(columns) => {
            let report = introspection::diff(&tables, &columns);
            let clean = report.is_clean();
            if !clean {
                info!("schema drift detected: {:?}", report);
            }
            HttpResponse::Ok().json(DataResponse::success(DriftResponse {
                checked_at: Utc::now(),
                clean,
                report,
            }))
        }
        Err(err) => {
            error!("An error occurred in the schema_drift_service function. The error: {}", err);
            HttpResponse::InternalServerError()
                .json(StatusResponse::failed("Could not introspect the database"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn summaries_list_root_fields() {
        let summaries = table_summaries();
        let games = summaries
            .iter()
            .find(|summary| summary.type_name == "badma_games")
            .unwrap();
        assert_eq!(games.schema, "badma");
        assert!(games.root_fields.contains(&"update_badma_games_many".to_string()));
        let hasyx = summaries
            .iter()
            .find(|summary| summary.type_name == "hasyx")
            .unwrap();
        assert_eq!(hasyx.root_fields, vec!["hasyx", "hasyx_aggregate", "hasyx_stream"]);
    }

    #[actix_web::test]
    async fn sdl_is_served_as_text() {
        let response = schema_sdl_service().await;
        assert!(response.status().is_success());
        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(std::str::from_utf8(&body).unwrap().contains("type query_root {"));
    }
}
