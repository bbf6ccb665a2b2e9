//! Typed Hasura GraphQL surface for the badma Postgres schema, plus the
//! small HTTP service that serves it.

pub mod config;
pub mod controller;
pub mod graphql;
pub mod models;
pub mod repository;
pub mod service;
pub mod util;

use crate::config::config::Config;
use crate::graphql::client::HasuraClient;
use crate::repository::database::Database;
use crate::repository::redis::Redis;
use std::net::IpAddr;

pub struct AppState {
    pub db: Database,
    pub redis_db: Redis,
    pub hasura: HasuraClient,
    pub config: Config,
    pub trusted_reverse_proxy_ip: IpAddr,
}
