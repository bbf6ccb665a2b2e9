use crate::config::config::Config;
use crate::models::hasyx::Hasyx;
use crate::models::introspection::IntrospectedColumn;
use crate::models::schema::public::hasyx;
use deadpool::managed::Object;
use diesel::sql_types::{Array, Text};
use diesel::{ConnectionError, ConnectionResult, ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection, RunQueryDsl,
};
use log::error;
use openssl::ssl::{SslConnector, SslMethod};
use postgres_openssl::MakeTlsConnector;
use thiserror::Error;
use uuid::Uuid;

pub type DBPool = deadpool::managed::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

const INTROSPECT_COLUMNS: &str = "\
SELECT table_schema::text AS table_schema, \
       table_name::text AS table_name, \
       column_name::text AS column_name, \
       data_type::text AS data_type, \
       (is_nullable = 'YES') AS is_nullable \
FROM information_schema.columns \
WHERE table_schema = ANY($1) \
ORDER BY table_schema, table_name, ordinal_position";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("failed to create pool: {0}")]
    PoolBuild(String),
    #[error("could not get connection from pool: {0}")]
    Pool(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new(config: &Config) -> Result<Self, DatabaseError> {
        let ca_file = config.database_ca_file.clone();
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_setup(
            config.database_url.clone(),
            move |url| Box::pin(Self::establish(url.to_string(), ca_file.clone())),
        );
        let pool = Pool::builder(manager)
            .build()
            .map_err(|e| DatabaseError::PoolBuild(e.to_string()))?;
        Ok(Database { pool })
    }

    async fn establish(
        database_url: String,
        ca_file: Option<String>,
    ) -> ConnectionResult<AsyncPgConnection> {
        let bad_connection = |e: openssl::error::ErrorStack| ConnectionError::BadConnection(e.to_string());
        let mut builder = SslConnector::builder(SslMethod::tls()).map_err(bad_connection)?;
        if let Some(ca_file) = ca_file {
            builder.set_ca_file(ca_file).map_err(bad_connection)?;
        }
        let connector = MakeTlsConnector::new(builder.build());
        let (client, connection) = tokio_postgres::connect(&database_url, connector)
            .await
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {e}");
            }
        });
        AsyncPgConnection::try_from(client).await
    }

    async fn get_db_conn(
        &self,
    ) -> Result<Object<AsyncDieselConnectionManager<AsyncPgConnection>>, DatabaseError> {
        Ok(self.pool.get().await?)
    }

    /// Columns of every table and view in `schemas`, in ordinal order.
    pub async fn introspect_columns(
        &self,
        schemas: &[String],
    ) -> Result<Vec<IntrospectedColumn>, DatabaseError> {
        let mut conn = self.get_db_conn().await?;
        let columns = diesel::sql_query(INTROSPECT_COLUMNS)
            .bind::<Array<Text>, _>(schemas.to_vec())
            .load::<IntrospectedColumn>(&mut conn)
            .await
            .map_err(|err| {
                error!("An error occurred while introspecting schemas {:?}. The error: {}", schemas, err);
                err
            })?;
        Ok(columns)
    }

    /// Every `(schema, table)` the `hasyx` view lists for `id`.
    pub async fn find_hasyx(&self, row_id: Uuid) -> Result<Vec<Hasyx>, DatabaseError> {
        let mut conn = self.get_db_conn().await?;
        let rows = hasyx::table
            .filter(hasyx::id.eq(row_id))
            .order((hasyx::schema, hasyx::table_name))
            .select(Hasyx::as_select())
            .load::<Hasyx>(&mut conn)
            .await?;
        Ok(rows)
    }
}
