use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use badma_schema::config::config::Config;
use badma_schema::controller;
use badma_schema::graphql::client::HasuraClient;
use badma_schema::models::response::StatusResponse;
use badma_schema::repository::database::Database;
use badma_schema::repository::redis::Redis;
use badma_schema::util::real_ip_key_extractor::RealIpKeyExtractor;
use badma_schema::AppState;
use log::info;
use std::io::{Error, ErrorKind};

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse::success("Everything is working as expected"))
}

async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(StatusResponse::failed("Resource not found")))
}

fn startup_error(err: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("./log-config.yml", Default::default()).map_err(startup_error)?;
    let config = Config::init().map_err(startup_error)?;
    let db = Database::new(&config).map_err(startup_error)?;
    let redis_db = Redis::new(&config).map_err(startup_error)?;
    let hasura = HasuraClient::new(config.hasura_graphql_url.clone(), config.credentials())
        .map_err(startup_error)?;
    let bind = (config.server_host.clone(), config.server_port);
    let app_data = web::Data::new(AppState {
        db,
        redis_db,
        hasura,
        trusted_reverse_proxy_ip: config.trusted_proxy_ip,
        config,
    });

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(5)
        .key_extractor(RealIpKeyExtractor)
        .finish()
        .ok_or_else(|| startup_error("invalid rate limiter configuration"))?;

    info!("listening on {}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(controller::handler::config)
            .service(health_check)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
            .wrap(Governor::new(&governor_conf))
    })
    .bind(bind)?
    .run()
    .await
}
