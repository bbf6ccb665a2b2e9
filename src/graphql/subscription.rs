//! `graphql-transport-ws` client: one subscription per connection.

use crate::graphql::client::{ClientError, Credentials, GraphqlError, GraphqlResponse};
use crate::graphql::operation::{GraphqlRequest, Operation};
use futures::{SinkExt, StreamExt};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::SEC_WEBSOCKET_PROTOCOL;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub const PROTOCOL: &str = "graphql-transport-ws";

const SUBSCRIPTION_ID: &str = "1";

type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    ConnectionInit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Map<String, Value>>,
    },
    Subscribe {
        id: String,
        payload: GraphqlRequest,
    },
    Complete {
        id: String,
    },
    Ping {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Pong {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    ConnectionAck {
        #[serde(default)]
        payload: Option<Value>,
    },
    Next {
        id: String,
        payload: Value,
    },
    Error {
        id: String,
        payload: Vec<GraphqlError>,
    },
    Complete {
        id: String,
    },
    Ping {
        #[serde(default)]
        payload: Option<Value>,
    },
    Pong {
        #[serde(default)]
        payload: Option<Value>,
    },
}

/// `http(s)://host/v1/graphql` -> `ws(s)://host/v1/graphql`.
pub fn websocket_url(endpoint: &str) -> String {
    if let Some(rest) = endpoint.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = endpoint.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        endpoint.to_string()
    }
}

fn encode(message: &ClientMessage) -> Result<Message> {
    serde_json::to_string(message)
        .map(Message::Text)
        .map_err(|e| ClientError::Protocol(e.to_string()))
}

fn parse(text: &str) -> Result<ServerMessage> {
    serde_json::from_str(text).map_err(|e| ClientError::Protocol(format!("{}: {}", e, text)))
}

/// A running subscription yielding one decoded payload per `next` message.
#[derive(Debug)]
pub struct Subscription<R> {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
    operation: Operation<R>,
    done: bool,
}

/// Opens a connection, acknowledges the handshake and starts `operation`.
pub async fn subscribe<R>(
    endpoint: &str,
    credentials: &Credentials,
    operation: Operation<R>,
) -> Result<Subscription<R>> {
    let mut request = websocket_url(endpoint).into_client_request()?;
    request
        .headers_mut()
        .insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static(PROTOCOL));
    let (mut socket, _) = connect_async(request).await?;

    socket
        .send(encode(&ClientMessage::ConnectionInit {
            payload: Some(credentials.init_payload()),
        })?)
        .await?;

    loop {
        let message = socket.next().await.ok_or(ClientError::Closed)??;
        match message {
            Message::Text(text) => match parse(&text)? {
                ServerMessage::ConnectionAck { .. } => break,
                ServerMessage::Ping { .. } => {
                    socket.send(encode(&ClientMessage::Pong { payload: None })?).await?;
                }
                other => return Err(ClientError::Protocol(format!("{:?}", other))),
            },
            Message::Close(_) => return Err(ClientError::Closed),
            _ => {}
        }
    }

    debug!(
        "subscription {} acknowledged by {}",
        operation.request().operation_name,
        endpoint
    );
    socket
        .send(encode(&ClientMessage::Subscribe {
            id: SUBSCRIPTION_ID.to_string(),
            payload: operation.request().clone(),
        })?)
        .await?;

    Ok(Subscription {
        socket,
        operation,
        done: false,
    })
}

impl<R> Subscription<R> {
    /// Next payload, or `None` once the server completed the subscription.
    pub async fn next(&mut self) -> Option<Result<R>> {
        while !self.done {
            let message = match self.socket.next().await {
                Some(Ok(message)) => message,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };
            let text = match message {
                Message::Text(text) => text,
                Message::Close(_) => {
                    self.done = true;
                    return None;
                }
                _ => continue,
            };
            match parse(&text) {
                Ok(ServerMessage::Next { payload, .. }) => return Some(self.decode(payload)),
                Ok(ServerMessage::Error { payload, .. }) => {
                    self.done = true;
                    return Some(Err(ClientError::Graphql(payload)));
                }
                Ok(ServerMessage::Complete { .. }) => {
                    self.done = true;
                    return None;
                }
                Ok(ServerMessage::Ping { .. }) => {
                    if let Err(e) = self.pong().await {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
                Ok(other) => warn!("ignoring subscription message {:?}", other),
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    async fn pong(&mut self) -> Result<()> {
        self.socket
            .send(encode(&ClientMessage::Pong { payload: None })?)
            .await?;
        Ok(())
    }

    fn decode(&self, payload: Value) -> Result<R> {
        let response: GraphqlResponse =
            serde_json::from_value(payload).map_err(|e| ClientError::Protocol(e.to_string()))?;
        let data = response.into_data()?;
        Ok(self.operation.decode(&data)?)
    }

    /// Stops the subscription and closes the connection.
    pub async fn complete(mut self) -> Result<()> {
        if !self.done {
            self.socket
                .send(encode(&ClientMessage::Complete {
                    id: SUBSCRIPTION_ID.to_string(),
                })?)
                .await?;
        }
        self.socket.close(None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::client::ADMIN_SECRET_HEADER;
    use crate::graphql::operation::{Arguments, OperationKind};
    use serde_json::json;
    use std::future::Future;
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use tokio_tungstenite::accept_hdr_async;
    use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};

    type Peer = WebSocketStream<TcpStream>;

    /// Accepts one websocket connection on a local port and runs `script` on it.
    async fn peer<F, Fut>(script: F) -> (String, JoinHandle<()>)
    where
        F: FnOnce(Peer) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/v1/graphql", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let socket = accept_hdr_async(stream, |request: &Request, mut response: Response| {
                assert_eq!(request.headers()[SEC_WEBSOCKET_PROTOCOL], PROTOCOL);
                response
                    .headers_mut()
                    .insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static(PROTOCOL));
                Ok::<_, ErrorResponse>(response)
            })
            .await
            .unwrap();
            script(socket).await;
        });
        (endpoint, handle)
    }

    async fn receive(socket: &mut Peer) -> Value {
        loop {
            match socket.next().await.unwrap().unwrap() {
                Message::Text(text) => return serde_json::from_str(&text).unwrap(),
                Message::Close(_) => return json!({ "type": "close" }),
                _ => {}
            }
        }
    }

    async fn reply(socket: &mut Peer, message: Value) {
        socket.send(Message::Text(message.to_string())).await.unwrap();
    }

    /// Completes the handshake and checks the subscribe message.
    async fn accept_subscription(socket: &mut Peer) {
        assert_eq!(receive(socket).await["type"], "connection_init");
        reply(socket, json!({ "type": "connection_ack" })).await;
        let subscribe = receive(socket).await;
        assert_eq!(subscribe["type"], "subscribe");
        assert_eq!(subscribe["id"], SUBSCRIPTION_ID);
    }

    fn users() -> Operation<Vec<Value>> {
        let request =
            Arguments::new().document(OperationKind::Subscription, "users", "users", "{ id }");
        Operation::new(request, "users")
    }

    #[test]
    fn endpoints_switch_to_websocket_schemes() {
        assert_eq!(
            websocket_url("https://hasura.example.com/v1/graphql"),
            "wss://hasura.example.com/v1/graphql"
        );
        assert_eq!(websocket_url("http://localhost:8080/v1/graphql"), "ws://localhost:8080/v1/graphql");
        assert_eq!(websocket_url("ws://localhost/v1/graphql"), "ws://localhost/v1/graphql");
    }

    #[test]
    fn client_messages_are_tagged_by_type() {
        let init = ClientMessage::ConnectionInit { payload: None };
        assert_eq!(serde_json::to_value(&init).unwrap(), json!({ "type": "connection_init" }));
        let complete = ClientMessage::Complete { id: "1".to_string() };
        assert_eq!(
            serde_json::to_value(&complete).unwrap(),
            json!({ "type": "complete", "id": "1" })
        );
    }

    #[test]
    fn server_messages_parse() {
        assert_eq!(
            parse(r#"{"type":"connection_ack"}"#).unwrap(),
            ServerMessage::ConnectionAck { payload: None }
        );
        let next = parse(r#"{"type":"next","id":"1","payload":{"data":{"users":[]}}}"#).unwrap();
        assert_eq!(
            next,
            ServerMessage::Next {
                id: "1".to_string(),
                payload: json!({ "data": { "users": [] } })
            }
        );
        let error = parse(r#"{"type":"error","id":"1","payload":[{"message":"boom"}]}"#).unwrap();
        assert!(matches!(error, ServerMessage::Error { payload, .. } if payload[0].message == "boom"));
        assert!(parse("not json").is_err());
    }

    #[tokio::test]
    async fn session_waits_for_ack_and_answers_pings() {
        let (endpoint, server) = peer(|mut socket| async move {
            let init = receive(&mut socket).await;
            assert_eq!(init["type"], "connection_init");
            assert_eq!(init["payload"]["headers"][ADMIN_SECRET_HEADER], "s3cret");
            reply(&mut socket, json!({ "type": "ping" })).await;
            assert_eq!(receive(&mut socket).await["type"], "pong");
            reply(&mut socket, json!({ "type": "connection_ack" })).await;

            let subscribe = receive(&mut socket).await;
            assert_eq!(subscribe["type"], "subscribe");
            assert_eq!(subscribe["payload"]["operationName"], "users");
            reply(
                &mut socket,
                json!({ "type": "next", "id": "1", "payload": { "data": { "users": [{ "id": 7 }] } } }),
            )
            .await;
            reply(&mut socket, json!({ "type": "ping" })).await;
            assert_eq!(receive(&mut socket).await["type"], "pong");
            reply(&mut socket, json!({ "type": "complete", "id": "1" })).await;
        })
        .await;

        let credentials = Credentials::AdminSecret("s3cret".to_string());
        let mut subscription = subscribe(&endpoint, &credentials, users()).await.unwrap();
        let rows = subscription.next().await.unwrap().unwrap();
        assert_eq!(rows, vec![json!({ "id": 7 })]);
        assert!(subscription.next().await.is_none());
        assert!(subscription.next().await.is_none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn error_messages_end_the_subscription() {
        let (endpoint, server) = peer(|mut socket| async move {
            accept_subscription(&mut socket).await;
            reply(
                &mut socket,
                json!({ "type": "error", "id": "1", "payload": [{ "message": "boom" }] }),
            )
            .await;
        })
        .await;

        let mut subscription = subscribe(&endpoint, &Credentials::Anonymous, users()).await.unwrap();
        let err = subscription.next().await.unwrap().unwrap_err();
        assert!(matches!(err, ClientError::Graphql(ref errors) if errors[0].message == "boom"));
        assert!(subscription.next().await.is_none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn complete_is_sent_before_closing() {
        let (endpoint, server) = peer(|mut socket| async move {
            accept_subscription(&mut socket).await;
            assert_eq!(receive(&mut socket).await, json!({ "type": "complete", "id": "1" }));
            assert_eq!(receive(&mut socket).await["type"], "close");
        })
        .await;

        let subscription = subscribe(&endpoint, &Credentials::Anonymous, users()).await.unwrap();
        subscription.complete().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn closing_before_ack_fails_the_handshake() {
        let (endpoint, server) = peer(|mut socket| async move {
            assert_eq!(receive(&mut socket).await["type"], "connection_init");
            socket.close(None).await.unwrap();
        })
        .await;

        let err = subscribe(&endpoint, &Credentials::Anonymous, users()).await.unwrap_err();
        assert!(matches!(err, ClientError::Closed));
        server.await.unwrap();
    }
}
