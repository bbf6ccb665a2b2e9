use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A device registered for push delivery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::public::notification_permissions)]
pub struct NotificationPermission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider: String,
    pub device_token: String,
    pub device_info: Value,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::public::notification_messages)]
pub struct NotificationMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub data: Option<Value>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A single delivery attempt of a message to one device permission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::public::notifications)]
pub struct Notification {
    pub id: Uuid,
    pub message_id: Uuid,
    pub permission_id: Uuid,
    pub config: Option<Value>,
    pub status: String,
    pub error: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
