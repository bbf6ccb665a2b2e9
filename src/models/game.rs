use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A turn-based game. `fen` holds the current position, `side` the side to
/// move and `sides` the number of seats.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::games)]
pub struct Game {
    pub id: Uuid,
    pub user_id: Uuid,
    pub fen: String,
    pub status: String,
    pub side: i32,
    pub mode: String,
    pub sides: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::moves)]
pub struct Move {
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: Uuid,
    pub from: String,
    pub to: String,
    pub promotion: Option<String>,
    pub side: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Seat assignment of a user in a game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::joins)]
pub struct Join {
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: Uuid,
    pub side: i32,
    pub role: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A failed request recorded against a game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::errors)]
pub struct GameError {
    pub id: Uuid,
    pub game_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub error: String,
    pub context: Option<String>,
    pub request: Option<Value>,
    pub response: Option<Value>,
    pub created_at: i64,
    pub updated_at: i64,
}
