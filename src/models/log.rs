use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Before/after diff of one column of one row, keyed by `(_schema, _table, _id)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::logs::diffs)]
pub struct LogDiff {
    pub id: Uuid,
    pub _schema: String,
    pub _table: String,
    pub _column: String,
    pub _id: String,
    pub user_id: Option<Uuid>,
    pub _value: Option<String>,
    pub diff: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Point-in-time snapshot of a column value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::logs::states)]
pub struct LogState {
    pub id: Uuid,
    pub _schema: String,
    pub _table: String,
    pub _column: String,
    pub _id: String,
    pub state: Option<Value>,
    pub created_at: i64,
    pub updated_at: i64,
}
