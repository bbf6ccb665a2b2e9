use crate::graphql::client::Credentials;
use dotenv::dotenv;
use std::env;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_ca_file: Option<String>,
    pub redis_url: String,
    pub hasura_graphql_url: String,
    pub hasura_admin_secret: Option<String>,
    pub hasura_jwt: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub trusted_proxy_ip: IpAddr,
    pub hasyx_cache_ttl: usize,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn optional(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        dotenv().ok();
        Ok(Config {
            database_url: required("DATABASE_URL")?,
            database_ca_file: optional("DATABASE_CA_FILE"),
            redis_url: required("REDIS_URL")?,
            hasura_graphql_url: required("HASURA_GRAPHQL_URL")?,
            hasura_admin_secret: optional("HASURA_ADMIN_SECRET"),
            hasura_jwt: optional("HASURA_JWT"),
            server_host: optional("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: parsed("SERVER_PORT", 8080)?,
            trusted_proxy_ip: parsed("TRUSTED_PROXY_IP", IpAddr::from([127, 0, 0, 1]))?,
            // Seconds. 0 disables expiry.
            hasyx_cache_ttl: parsed("HASYX_CACHE_TTL", 300)?,
        })
    }

    /// The admin secret wins over a JWT; without either requests run as the
    /// anonymous role.
    pub fn credentials(&self) -> Credentials {
        match (&self.hasura_admin_secret, &self.hasura_jwt) {
            (Some(secret), _) => Credentials::AdminSecret(secret.clone()),
            (None, Some(token)) => Credentials::Bearer(token.clone()),
            (None, None) => Credentials::Anonymous,
        }
    }
}
