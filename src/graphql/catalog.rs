use crate::graphql::hasyx;
use crate::graphql::table::{RelationshipInfo, TableInfo};
use crate::graphql::tables;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Declares the entity tables reachable from the `hasyx` view.
macro_rules! entity_catalog {
    ($($variant:ident => $module:ident),+ $(,)?) => {
        /// One variant per entity table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum EntityKind {
            $($variant,)+
        }

        impl EntityKind {
            pub const ALL: &'static [EntityKind] = &[$(EntityKind::$variant,)+];

            pub fn info(self) -> &'static TableInfo {
                match self {
                    $(EntityKind::$variant => &tables::$module::INFO,)+
                }
            }
        }

        /// A decoded row of any entity table.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum AnyRow {
            $($variant(tables::$module::Row),)+
        }

        impl AnyRow {
            pub fn decode(kind: EntityKind, value: Value) -> Result<AnyRow, serde_json::Error> {
                match kind {
                    $(
                        EntityKind::$variant => serde_json::from_value(value).map(AnyRow::$variant),
                    )+
                }
            }

            pub fn kind(&self) -> EntityKind {
                match self {
                    $(AnyRow::$variant(_) => EntityKind::$variant,)+
                }
            }

            pub fn id(&self) -> Uuid {
                match self {
                    $(AnyRow::$variant(row) => row.id,)+
                }
            }
        }

        /// Relationship filters of `hasyx_bool_exp`, one per entity.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct EntityFilters {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $module: Option<Box<tables::$module::BoolExp>>,
            )+
        }

        /// Relationship orderings of `hasyx_order_by`, one per entity.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct EntityOrdering {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $module: Option<Box<tables::$module::OrderBy>>,
            )+
        }

        /// Entity tables in declaration order.
        pub fn entities() -> Vec<&'static TableInfo> {
            vec![$(&tables::$module::INFO,)+]
        }

        /// `hasyx` relationships: each entity joined on `id`, named by its type name.
        pub const HASYX_RELATIONSHIPS: &[RelationshipInfo] = &[
            $(
                RelationshipInfo::object(
                    tables::$module::TYPE_NAME,
                    tables::$module::TYPE_NAME,
                    "id",
                ),
            )+
        ];
    };
}

entity_catalog! {
    Users => users,
    Accounts => accounts,
    NotificationPermissions => notification_permissions,
    NotificationMessages => notification_messages,
    Notifications => notifications,
    BadmaGames => badma_games,
    BadmaMoves => badma_moves,
    BadmaJoins => badma_joins,
    BadmaErrors => badma_errors,
    BadmaClubs => badma_clubs,
    BadmaInClubs => badma_in_clubs,
    BadmaItems => badma_items,
    BadmaTournaments => badma_tournaments,
    BadmaTournamentGames => badma_tournament_games,
    BadmaTournamentParticipants => badma_tournament_participants,
    BadmaTournamentScores => badma_tournament_scores,
    PaymentsProviders => payments_providers,
    PaymentsMethods => payments_methods,
    PaymentsPlans => payments_plans,
    PaymentsSubscriptions => payments_subscriptions,
    PaymentsOperations => payments_operations,
    PaymentsUserPaymentProviderMappings => payments_user_payment_provider_mappings,
    LogsDiffs => logs_diffs,
    LogsStates => logs_states,
}

impl EntityKind {
    /// Looks an entity up by the `(schema, table)` pair stored in `hasyx`.
    pub fn from_parts(schema: &str, table: &str) -> Option<EntityKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.info().schema == schema && kind.info().table == table)
    }

    pub fn from_type_name(type_name: &str) -> Option<EntityKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.info().type_name == type_name)
    }

    pub fn type_name(self) -> &'static str {
        self.info().type_name
    }
}

/// Every table the GraphQL schema exposes: the entities plus the `hasyx` view.
pub fn tables() -> Vec<&'static TableInfo> {
    let mut tables = entities();
    tables.push(&hasyx::INFO);
    tables
}

pub fn find(type_name: &str) -> Option<&'static TableInfo> {
    tables()
        .into_iter()
        .find(|info| info.type_name == type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::Game;
    use serde_json::json;

    #[test]
    fn entities_are_found_by_schema_and_table() {
        assert_eq!(
            EntityKind::from_parts("badma", "games"),
            Some(EntityKind::BadmaGames)
        );
        assert_eq!(
            EntityKind::from_parts("payments", "user_payment_provider_mappings"),
            Some(EntityKind::PaymentsUserPaymentProviderMappings)
        );
        assert_eq!(EntityKind::from_parts("public", "games"), None);
        assert_eq!(
            EntityKind::from_type_name("logs_states"),
            Some(EntityKind::LogsStates)
        );
    }

    #[test]
    fn type_names_are_unique() {
        let mut names: Vec<&str> = tables().iter().map(|info| info.type_name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, EntityKind::ALL.len() + 1);
    }

    #[test]
    fn rows_decode_into_their_entity() {
        let id = Uuid::new_v4();
        let game = Game {
            id,
            fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
            status: "await".to_string(),
            sides: 2,
            ..Default::default()
        };
        let row = AnyRow::decode(EntityKind::BadmaGames, serde_json::to_value(&game).unwrap())
            .unwrap();
        assert_eq!(row.kind(), EntityKind::BadmaGames);
        assert_eq!(row.id(), id);
        assert_eq!(row, AnyRow::BadmaGames(game));
        assert!(AnyRow::decode(EntityKind::Users, json!({ "id": "nope" })).is_err());
    }

    #[test]
    fn hasyx_relationships_cover_every_entity() {
        assert_eq!(HASYX_RELATIONSHIPS.len(), EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            let rel = hasyx::INFO.relationship(kind.type_name()).unwrap();
            assert_eq!(rel.target, kind.type_name());
            assert_eq!(rel.column, "id");
        }
    }
}
