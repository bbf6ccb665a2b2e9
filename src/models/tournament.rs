use bigdecimal::BigDecimal;
use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::tournaments)]
pub struct Tournament {
    pub id: Uuid,
    pub club_id: Option<Uuid>,
    pub status: String,
    pub mode: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::tournament_games)]
pub struct TournamentGame {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub game_id: Uuid,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::tournament_participants)]
pub struct TournamentParticipant {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub user_id: Uuid,
    pub role: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::badma::tournament_scores)]
pub struct TournamentScore {
    pub id: Uuid,
    pub tournament_participant_id: Uuid,
    pub score: BigDecimal,
    pub created_at: i64,
    pub updated_at: i64,
}
