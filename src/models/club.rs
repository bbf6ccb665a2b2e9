use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::clubs)]
pub struct Club {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::in_clubs)]
pub struct InClub {
    pub id: Uuid,
    pub user_id: Uuid,
    pub club_id: Uuid,
    pub created_at: i64,
    pub updated_at: i64,
}

/// An item granted to a user. Ownership moves to a club once `club_id` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::items)]
pub struct Item {
    pub id: Uuid,
    pub user_id: Uuid,
    pub club_id: Option<Uuid>,
    pub item_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}
