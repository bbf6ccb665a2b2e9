use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `hasyx` view: which `(schema, table)` holds the row `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::public::hasyx)]
pub struct Hasyx {
    pub id: Uuid,
    pub schema: String,
    #[serde(rename = "table")]
    pub table_name: String,
}
