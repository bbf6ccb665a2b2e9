use crate::graphql::operation::{GraphqlRequest, Operation, OperationError};
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

static USER_AGENT: &str = env!("CARGO_PKG_NAME");

type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("graphql endpoint answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("graphql errors: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),
    #[error("response carries neither data nor errors")]
    MissingData,
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error("invalid credential header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("unexpected subscription message: {0}")]
    Protocol(String),
    #[error("subscription closed by server")]
    Closed,
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// How requests authenticate against Hasura.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    AdminSecret(String),
    Bearer(String),
    Anonymous,
}

impl Credentials {
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            Credentials::AdminSecret(secret) => {
                headers.insert(ADMIN_SECRET_HEADER, HeaderValue::from_str(secret)?);
            }
            Credentials::Bearer(token) => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {}", token))?,
                );
            }
            Credentials::Anonymous => {}
        }
        Ok(headers)
    }

    /// Headers as sent in the `connection_init` payload of a websocket.
    pub fn init_payload(&self) -> Map<String, Value> {
        let mut headers = Map::new();
        match self {
            Credentials::AdminSecret(secret) => {
                headers.insert(ADMIN_SECRET_HEADER.to_string(), Value::from(secret.as_str()));
            }
            Credentials::Bearer(token) => {
                headers.insert(
                    "Authorization".to_string(),
                    Value::from(format!("Bearer {}", token)),
                );
            }
            Credentials::Anonymous => {}
        }
        let mut payload = Map::new();
        payload.insert("headers".to_string(), Value::Object(headers));
        payload
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// Errors win over partial data.
    pub fn into_data(self) -> Result<Value> {
        match (self.data, self.errors) {
            (_, Some(errors)) if !errors.is_empty() => Err(ClientError::Graphql(errors)),
            (Some(data), _) => Ok(data),
            (None, _) => Err(ClientError::MissingData),
        }
    }
}

/// GraphQL-over-HTTP client for a Hasura endpoint.
#[derive(Clone)]
pub struct HasuraClient {
    http: Client,
    endpoint: String,
    credentials: Credentials,
}

impl HasuraClient {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(credentials.headers()?)
            .build()?;
        Ok(HasuraClient {
            http,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Posts a request and returns its `data` object.
    pub async fn send(&self, request: &GraphqlRequest) -> Result<Value> {
        debug!("POST {} operation {}", self.endpoint, request.operation_name);
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Hasura answered {} to operation {}: {}",
                status, request.operation_name, body
            );
            return Err(ClientError::Status { status, body });
        }
        response.json::<GraphqlResponse>().await?.into_data()
    }

    pub async fn execute<R>(&self, operation: &Operation<R>) -> Result<R> {
        let data = self.send(operation.request()).await?;
        Ok(operation.decode(&data)?)
    }
}

/// Canned Hasura endpoints for tests.
#[cfg(test)]
pub(crate) mod stub {
    use actix_web::http::StatusCode;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use serde_json::Value;

    /// Answers every request with `status` and `body`; returns the endpoint URL.
    pub async fn hasura(status: u16, body: Value) -> String {
        let server = HttpServer::new(move || {
            let body = body.clone();
            App::new().default_service(web::to(move || {
                let body = body.clone();
                async move {
                    HttpResponse::build(StatusCode::from_u16(status).unwrap()).json(body)
                }
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/v1/graphql", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::operation::{Arguments, OperationKind};
    use serde_json::json;

    fn users_operation() -> Operation<Vec<Value>> {
        let request = Arguments::new().document(OperationKind::Query, "users", "users", "{ id }");
        Operation::new(request, "users")
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [
                { "message": "field 'nope' not found in type: 'query_root'" },
                { "message": "permission denied", "extensions": { "code": "access-denied" } }
            ]
        }))
        .unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(
            err.to_string(),
            "graphql errors: field 'nope' not found in type: 'query_root'; permission denied"
        );
    }

    #[test]
    fn data_is_returned_when_there_are_no_errors() {
        let response: GraphqlResponse =
            serde_json::from_value(json!({ "data": { "users": [] } })).unwrap();
        assert_eq!(response.into_data().unwrap(), json!({ "users": [] }));
        let empty: GraphqlResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(empty.into_data(), Err(ClientError::MissingData)));
    }

    #[test]
    fn credentials_become_headers() {
        let headers = Credentials::AdminSecret("s3cret".to_string()).headers().unwrap();
        assert_eq!(headers.get(ADMIN_SECRET_HEADER).unwrap(), "s3cret");
        let headers = Credentials::Bearer("jwt".to_string()).headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer jwt");
        assert!(Credentials::Anonymous.headers().unwrap().is_empty());
        assert_eq!(
            Value::Object(Credentials::Bearer("jwt".to_string()).init_payload()),
            json!({ "headers": { "Authorization": "Bearer jwt" } })
        );
    }

    #[actix_web::test]
    async fn non_success_statuses_keep_the_body() {
        let endpoint = stub::hasura(500, json!({ "error": "upstream down" })).await;
        let client = HasuraClient::new(endpoint, Credentials::Anonymous).unwrap();
        match client.send(users_operation().request()).await {
            Err(ClientError::Status { status, body }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(body.contains("upstream down"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn live_errors_win_over_data() {
        let endpoint = stub::hasura(
            200,
            json!({
                "data": { "users": [] },
                "errors": [{ "message": "permission denied" }]
            }),
        )
        .await;
        let client = HasuraClient::new(endpoint, Credentials::Bearer("jwt".to_string())).unwrap();
        let err = client.execute(&users_operation()).await.unwrap_err();
        assert!(matches!(err, ClientError::Graphql(ref errors) if errors[0].message == "permission denied"));
    }

    #[actix_web::test]
    async fn execute_decodes_the_root_field() {
        let endpoint = stub::hasura(200, json!({ "data": { "users": [{ "id": 1 }, { "id": 2 }] } })).await;
        let client = HasuraClient::new(endpoint, Credentials::Anonymous).unwrap();
        let users = client.execute(&users_operation()).await.unwrap();
        assert_eq!(users, vec![json!({ "id": 1 }), json!({ "id": 2 })]);
    }
}
