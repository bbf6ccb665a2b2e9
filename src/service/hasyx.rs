use crate::graphql::catalog::EntityKind;
use crate::graphql::client::{ClientError, HasuraClient};
use crate::graphql::hasyx::{self, Resolved};
use crate::graphql::operation::OperationError;
use crate::models::response::{DataResponse, StatusResponse};
use crate::repository::redis::StringCache;
use crate::AppState;
use actix_web::web::Data;
use actix_web::HttpResponse;
use log::{error, warn};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("could not encode resolved row: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn cache_key(kind: EntityKind, id: Uuid) -> String {
    let info = kind.info();
    format!("hasyx:{}:{}:{}", info.schema, info.table, id)
}

/// Resolves one reference through Hasura, consulting `cache` first.
/// Cache failures are logged and otherwise ignored.
async fn resolve_cached<C: StringCache + ?Sized>(
    cache: &C,
    hasura: &HasuraClient,
    ttl_seconds: usize,
    kind: EntityKind,
    id: Uuid,
) -> Result<Option<Value>, ResolveError> {
    let key = cache_key(kind, id);
    match cache.get_str(&key).await {
        Ok(Some(cached)) => match serde_json::from_str(&cached) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => warn!("discarding unreadable cache entry {}: {}", key, err),
        },
        Ok(None) => {}
        Err(err) => warn!("hasyx cache lookup for {} failed: {}", key, err),
    }

    let operation = hasyx::resolve(kind, id)?;
    let resolved: Option<Resolved> = hasura.execute(&operation).await?;
    let value = match resolved {
        Some(resolved) => serde_json::to_value(&resolved)?,
        None => return Ok(None),
    };
    if let Err(err) = cache.set_str(&key, &value.to_string(), ttl_seconds).await {
        warn!("could not cache {}: {}", key, err);
    }
    Ok(Some(value))
}

pub async fn resolve_reference_service(
    data: Data<AppState>,
    schema: &str,
    table: &str,
    id: Uuid,
) -> HttpResponse {
    let kind = match EntityKind::from_parts(schema, table) {
        Some(kind) => kind,
        None => {
            return HttpResponse::NotFound().json(StatusResponse::failed(format!(
                "{}.{} is not an entity table",
                schema, table
            )))
        }
    };
    let resolved = resolve_cached(
        &data.redis_db,
        &data.hasura,
        data.config.hasyx_cache_ttl,
        kind,
        id,
    )
    .await;
    match resolved {
        Ok(Some(value)) => HttpResponse::Ok().json(DataResponse::success(value)),
        Ok(None) => HttpResponse::NotFound().json(StatusResponse::failed(format!(
            "No {}.{} row with id {}",
            schema, table, id
        ))),
        Err(err) => {
            error!(
                "An error occurred in the resolve_reference_service function. The error: {}",
                err
            );
            HttpResponse::BadGateway().json(StatusResponse::failed("Could not resolve reference"))
        }
    }
}

/// Resolves every reference the `hasyx` view lists for `id`.
pub async fn resolve_id_service(data: Data<AppState>, id: Uuid) -> HttpResponse {
    let references = match data.db.find_hasyx(id).await {
        Ok(references) => references,
        Err(err) => {
            error!("An error occurred in the resolve_id_service function. The error: {}", err);
            return HttpResponse::InternalServerError()
                .json(StatusResponse::failed("Could not read the hasyx view"));
        }
    };
    if references.is_empty() {
        return HttpResponse::NotFound()
            .json(StatusResponse::failed(format!("No row with id {}", id)));
    }

    let mut resolved = Vec::with_capacity(references.len());
    for reference in references {
        let kind = match EntityKind::from_parts(&reference.schema, &reference.table_name) {
            Some(kind) => kind,
            None => {
                warn!(
                    "hasyx lists {}.{} which is not in the catalog",
                    reference.schema, reference.table_name
                );
                continue;
            }
        };
        let resolved_row = resolve_cached(
            &data.redis_db,
            &data.hasura,
            data.config.hasyx_cache_ttl,
            kind,
            id,
        )
        .await;
        match resolved_row {
            Ok(Some(value)) => resolved.push(value),
            Ok(None) => {}
            Err(err) => {
                error!(
                    "An error occurred in the resolve_id_service function. The error: {}",
                    err
                );
                return HttpResponse::BadGateway()
                    .json(StatusResponse::failed("Could not resolve reference"));
            }
        }
    }
    HttpResponse::Ok().json(DataResponse::success(resolved))
}
