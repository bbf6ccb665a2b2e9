//! GraphQL type families of every tracked table.
//!
//! Relationship targets refer to sibling modules by their GraphQL type name.

use crate::graphql::table::hasura_table;
use crate::models::club::{Club, InClub, Item};
use crate::models::game::{Game, GameError, Join, Move};
use crate::models::log::{LogDiff, LogState};
use crate::models::notification::{Notification, NotificationMessage, NotificationPermission};
use crate::models::payment::{
    PaymentMethod, PaymentOperation, PaymentPlan, PaymentProvider, PaymentSubscription,
    UserPaymentProviderMapping,
};
use crate::models::tournament::{
    Tournament, TournamentGame, TournamentParticipant, TournamentScore,
};
use crate::models::user::{Account, User};
#[allow(unused_imports)]
use bigdecimal::BigDecimal;

hasura_table! {
    users => User {
        schema: "public",
        table: "users",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            name: Option<String>,
            email: Option<String>,
            email_verified: Option<i64>,
            image: Option<String>,
            password: Option<String>,
            is_admin: Option<bool>,
            hasura_role: Option<String>,
            updated_at: i64,
        },
        numeric: { email_verified: i64, created_at: i64, updated_at: i64 },
        booleans: [is_admin],
        jsonb: [],
        objects: {},
        arrays: {
            accounts / accounts_aggregate: accounts via user_id,
            games / games_aggregate: badma_games via user_id,
            moves / moves_aggregate: badma_moves via user_id,
            joins / joins_aggregate: badma_joins via user_id,
            clubs / clubs_aggregate: badma_clubs via user_id,
            in_clubs / in_clubs_aggregate: badma_in_clubs via user_id,
            items / items_aggregate: badma_items via user_id,
            notification_permissions / notification_permissions_aggregate: notification_permissions via user_id,
            notification_messages / notification_messages_aggregate: notification_messages via user_id,
            payment_methods / payment_methods_aggregate: payments_methods via user_id,
            payment_subscriptions / payment_subscriptions_aggregate: payments_subscriptions via user_id,
            payment_operations / payment_operations_aggregate: payments_operations via user_id,
        },
        constraints: [users_pkey, users_email_key],
    }
}

hasura_table! {
    /// OAuth accounts linked to a user.
    accounts => Account {
        schema: "public",
        table: "accounts",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            provider: String,
            provider_account_id: String,
            refresh_token: Option<String>,
            access_token: Option<String>,
            expires_at: Option<i64>,
            token_type: Option<String>,
            scope: Option<String>,
            id_token: Option<String>,
            session_state: Option<String>,
            updated_at: i64,
        },
        numeric: { expires_at: i64, created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: { user: users via user_id },
        arrays: {},
        constraints: [accounts_pkey, accounts_provider_provider_account_id_key],
    }
}

hasura_table! {
    notification_permissions => NotificationPermission {
        schema: "public",
        table: "notification_permissions",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            provider: String,
            device_token: String,
            device_info: Value,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [device_info],
        objects: { user: users via user_id },
        arrays: {
            notifications / notifications_aggregate: notifications via permission_id,
        },
        constraints: [notification_permissions_pkey],
    }
}

hasura_table! {
    notification_messages => NotificationMessage {
        schema: "public",
        table: "notification_messages",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            title: String,
            body: String,
            data: Option<Value>,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [data],
        objects: { user: users via user_id },
        arrays: {
            notifications / notifications_aggregate: notifications via message_id,
        },
        constraints: [notification_messages_pkey],
    }
}

hasura_table! {
    /// Delivery of one message through one permission.
    notifications => Notification {
        schema: "public",
        table: "notifications",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            message_id: Uuid,
            permission_id: Uuid,
            config: Option<Value>,
            status: String,
            error: Option<String>,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [config],
        objects: {
            message: notification_messages via message_id,
            permission: notification_permissions via permission_id,
        },
        arrays: {},
        constraints: [notifications_pkey],
    }
}

hasura_table! {
    badma_games => Game {
        schema: "badma",
        table: "games",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            fen: String,
            status: String,
            side: i32,
            mode: String,
            sides: i32,
            updated_at: i64,
        },
        numeric: { side: i32, sides: i32, created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: { user: users via user_id },
        arrays: {
            moves / moves_aggregate: badma_moves via game_id,
            joins / joins_aggregate: badma_joins via game_id,
            errors / errors_aggregate: badma_errors via game_id,
        },
        constraints: [games_pkey],
    }
}

hasura_table! {
    badma_moves => Move {
        schema: "badma",
        table: "moves",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            game_id: Uuid,
            user_id: Uuid,
            from: String,
            to: String,
            promotion: Option<String>,
            side: i32,
            updated_at: i64,
        },
        numeric: { side: i32, created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            game: badma_games via game_id,
            user: users via user_id,
        },
        arrays: {},
        constraints: [moves_pkey],
    }
}

hasura_table! {
    badma_joins => Join {
        schema: "badma",
        table: "joins",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            game_id: Uuid,
            user_id: Uuid,
            side: i32,
            role: i32,
            updated_at: i64,
        },
        numeric: { side: i32, role: i32, created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            game: badma_games via game_id,
            user: users via user_id,
        },
        arrays: {},
        constraints: [joins_pkey],
    }
}

hasura_table! {
    badma_errors => GameError {
        schema: "badma",
        table: "errors",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            game_id: Option<Uuid>,
            user_id: Option<Uuid>,
            error: String,
            context: Option<String>,
            request: Option<Value>,
            response: Option<Value>,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [request, response],
        objects: {
            game: badma_games via game_id,
            user: users via user_id,
        },
        arrays: {},
        constraints: [errors_pkey],
    }
}

hasura_table! {
    badma_clubs => Club {
        schema: "badma",
        table: "clubs",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            title: String,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: { user: users via user_id },
        arrays: {
            in_clubs / in_clubs_aggregate: badma_in_clubs via club_id,
            items / items_aggregate: badma_items via club_id,
            tournaments / tournaments_aggregate: badma_tournaments via club_id,
        },
        constraints: [clubs_pkey],
    }
}

hasura_table! {
    /// Club membership.
    badma_in_clubs => InClub {
        schema: "badma",
        table: "in_clubs",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            club_id: Uuid,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            club: badma_clubs via club_id,
            user: users via user_id,
        },
        arrays: {},
        constraints: [in_clubs_pkey],
    }
}

hasura_table! {
    badma_items => Item {
        schema: "badma",
        table: "items",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            club_id: Option<Uuid>,
            item_id: String,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            club: badma_clubs via club_id,
            user: users via user_id,
        },
        arrays: {},
        constraints: [items_pkey],
    }
}

hasura_table! {
    badma_tournaments => Tournament {
        schema: "badma",
        table: "tournaments",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            club_id: Option<Uuid>,
            status: String,
            mode: String,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: { club: badma_clubs via club_id },
        arrays: {
            games / games_aggregate: badma_tournament_games via tournament_id,
            participants / participants_aggregate: badma_tournament_participants via tournament_id,
        },
        constraints: [tournaments_pkey],
    }
}

hasura_table! {
    badma_tournament_games => TournamentGame {
        schema: "badma",
        table: "tournament_games",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            tournament_id: Uuid,
            game_id: Uuid,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            game: badma_games via game_id,
            tournament: badma_tournaments via tournament_id,
        },
        arrays: {},
        constraints: [tournament_games_pkey],
    }
}

hasura_table! {
    badma_tournament_participants => TournamentParticipant {
        schema: "badma",
        table: "tournament_participants",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            tournament_id: Uuid,
            user_id: Uuid,
            role: i32,
            updated_at: i64,
        },
        numeric: { role: i32, created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            tournament: badma_tournaments via tournament_id,
            user: users via user_id,
        },
        arrays: {
            scores / scores_aggregate: badma_tournament_scores via tournament_participant_id,
        },
        constraints: [tournament_participants_pkey],
    }
}

hasura_table! {
    badma_tournament_scores => TournamentScore {
        schema: "badma",
        table: "tournament_scores",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            tournament_participant_id: Uuid,
            score: BigDecimal,
            updated_at: i64,
        },
        numeric: { score: BigDecimal, created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            tournament_participant: badma_tournament_participants via tournament_participant_id,
        },
        arrays: {},
        constraints: [tournament_scores_pkey],
    }
}

hasura_table! {
    payments_providers => PaymentProvider {
        schema: "payments",
        table: "providers",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            name: String,
            is_test_mode: bool,
            is_active: bool,
            config: Option<Value>,
            default_return_url: Option<String>,
            default_webhook_url: Option<String>,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [is_test_mode, is_active],
        jsonb: [config],
        objects: {},
        arrays: {
            methods / methods_aggregate: payments_methods via provider_id,
            subscriptions / subscriptions_aggregate: payments_subscriptions via provider_id,
            operations / operations_aggregate: payments_operations via provider_id,
            user_mappings / user_mappings_aggregate: payments_user_payment_provider_mappings via provider_id,
        },
        constraints: [providers_pkey],
    }
}

hasura_table! {
    /// A stored payment instrument of a user at one provider.
    payments_methods => PaymentMethod {
        schema: "payments",
        table: "methods",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            provider_id: Uuid,
            external_id: Option<String>,
            details: Option<Value>,
            is_default: bool,
            is_recurrent_ready: bool,
            recurrent_details: Option<Value>,
            expires_at: Option<i64>,
            status: String,
            updated_at: i64,
        },
        numeric: { expires_at: i64, created_at: i64, updated_at: i64 },
        booleans: [is_default, is_recurrent_ready],
        jsonb: [details, recurrent_details],
        objects: {
            provider: payments_providers via provider_id,
            user: users via user_id,
        },
        arrays: {
            subscriptions / subscriptions_aggregate: payments_subscriptions via method_id,
            operations / operations_aggregate: payments_operations via method_id,
        },
        constraints: [methods_pkey],
    }
}

hasura_table! {
    payments_plans => PaymentPlan {
        schema: "payments",
        table: "plans",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Option<Uuid>,
            name: String,
            description: Option<String>,
            price: BigDecimal,
            currency: String,
            interval: String,
            interval_count: i32,
            trial_period_days: i32,
            active: bool,
            features: Option<Value>,
            metadata: Option<Value>,
            updated_at: i64,
        },
        numeric: {
            price: BigDecimal,
            interval_count: i32,
            trial_period_days: i32,
            created_at: i64,
            updated_at: i64,
        },
        booleans: [active],
        jsonb: [features, metadata],
        objects: { user: users via user_id },
        arrays: {
            subscriptions / subscriptions_aggregate: payments_subscriptions via plan_id,
        },
        constraints: [plans_pkey],
    }
}

hasura_table! {
    payments_subscriptions => PaymentSubscription {
        schema: "payments",
        table: "subscriptions",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            method_id: Uuid,
            plan_id: Uuid,
            provider_id: Uuid,
            external_subscription_id: Option<String>,
            status: String,
            current_period_start: Option<i64>,
            current_period_end: Option<i64>,
            trial_ends_at: Option<i64>,
            cancel_at_period_end: bool,
            canceled_at: Option<i64>,
            ended_at: Option<i64>,
            billing_anchor_day: Option<i32>,
            next_billing_date: Option<i64>,
            last_billing_date: Option<i64>,
            billing_retry_count: i32,
            max_billing_retries: i32,
            metadata: Option<Value>,
            updated_at: i64,
        },
        numeric: {
            current_period_start: i64,
            current_period_end: i64,
            trial_ends_at: i64,
            canceled_at: i64,
            ended_at: i64,
            billing_anchor_day: i32,
            next_billing_date: i64,
            last_billing_date: i64,
            billing_retry_count: i32,
            max_billing_retries: i32,
            created_at: i64,
            updated_at: i64,
        },
        booleans: [cancel_at_period_end],
        jsonb: [metadata],
        objects: {
            method: payments_methods via method_id,
            plan: payments_plans via plan_id,
            provider: payments_providers via provider_id,
            user: users via user_id,
        },
        arrays: {
            operations / operations_aggregate: payments_operations via subscription_id,
        },
        constraints: [subscriptions_pkey],
    }
}

hasura_table! {
    /// A single charge or refund attempt.
    payments_operations => PaymentOperation {
        schema: "payments",
        table: "operations",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            method_id: Option<Uuid>,
            provider_id: Uuid,
            subscription_id: Option<Uuid>,
            external_operation_id: Option<String>,
            amount: BigDecimal,
            currency: String,
            status: String,
            description: Option<String>,
            provider_request_details: Option<Value>,
            provider_response_details: Option<Value>,
            error_message: Option<String>,
            initiated_at: i64,
            paid_at: Option<i64>,
            updated_at: i64,
        },
        numeric: {
            amount: BigDecimal,
            initiated_at: i64,
            paid_at: i64,
            created_at: i64,
            updated_at: i64,
        },
        booleans: [],
        jsonb: [provider_request_details, provider_response_details],
        objects: {
            method: payments_methods via method_id,
            provider: payments_providers via provider_id,
            subscription: payments_subscriptions via subscription_id,
            user: users via user_id,
        },
        arrays: {},
        constraints: [operations_pkey],
    }
}

hasura_table! {
    payments_user_payment_provider_mappings => UserPaymentProviderMapping {
        schema: "payments",
        table: "user_payment_provider_mappings",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            user_id: Uuid,
            provider_id: Uuid,
            provider_customer_id: String,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: {
            provider: payments_providers via provider_id,
            user: users via user_id,
        },
        arrays: {},
        constraints: [
            user_payment_provider_mappings_pkey,
            user_payment_provider_mappings_user_id_provider_id_key,
        ],
    }
}

hasura_table! {
    /// Column-level change history written by triggers.
    logs_diffs => LogDiff {
        schema: "logs",
        table: "diffs",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            _schema: String,
            _table: String,
            _column: String,
            _id: String,
            user_id: Option<Uuid>,
            _value: Option<String>,
            diff: Option<String>,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [],
        objects: { user: users via user_id },
        arrays: {},
        constraints: [diffs_pkey],
    }
}

hasura_table! {
    logs_states => LogState {
        schema: "logs",
        table: "states",
        managed: { id: Uuid, created_at: i64 },
        columns: {
            _schema: String,
            _table: String,
            _column: String,
            _id: String,
            state: Option<Value>,
            updated_at: i64,
        },
        numeric: { created_at: i64, updated_at: i64 },
        booleans: [],
        jsonb: [state],
        objects: {},
        arrays: {},
        constraints: [states_pkey],
    }
}
