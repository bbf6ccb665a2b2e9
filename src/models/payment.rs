use bigdecimal::BigDecimal;
use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A payment gateway configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::payments::providers)]
pub struct PaymentProvider {
    pub id: Uuid,
    pub name: String,
    pub is_test_mode: bool,
    pub is_active: bool,
    pub config: Option<Value>,
    pub default_return_url: Option<String>,
    pub default_webhook_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A stored payment method (card, wallet) bound at a provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::payments::methods)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider_id: Uuid,
    pub external_id: Option<String>,
    pub details: Option<Value>,
    pub is_default: bool,
    pub is_recurrent_ready: bool,
    pub recurrent_details: Option<Value>,
    pub expires_at: Option<i64>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Subscription plan. `interval` is one of `day`, `week`, `month`, `year`
/// and repeats every `interval_count` units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::payments::plans)]
pub struct PaymentPlan {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub currency: String,
    pub interval: String,
    pub interval_count: i32,
    pub trial_period_days: i32,
    pub active: bool,
    pub features: Option<Value>,
    pub metadata: Option<Value>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::payments::subscriptions)]
pub struct PaymentSubscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub method_id: Uuid,
    pub plan_id: Uuid,
    pub provider_id: Uuid,
    pub external_subscription_id: Option<String>,
    pub status: String,
    pub current_period_start: Option<i64>,
    pub current_period_end: Option<i64>,
    pub trial_ends_at: Option<i64>,
    pub cancel_at_period_end: bool,
    pub canceled_at: Option<i64>,
    pub ended_at: Option<i64>,
    pub billing_anchor_day: Option<i32>,
    pub next_billing_date: Option<i64>,
    pub last_billing_date: Option<i64>,
    pub billing_retry_count: i32,
    pub max_billing_retries: i32,
    pub metadata: Option<Value>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A single charge or refund attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::payments::operations)]
pub struct PaymentOperation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub method_id: Option<Uuid>,
    pub provider_id: Uuid,
    pub subscription_id: Option<Uuid>,
    pub external_operation_id: Option<String>,
    pub amount: BigDecimal,
    pub currency: String,
    pub status: String,
    pub description: Option<String>,
    pub provider_request_details: Option<Value>,
    pub provider_response_details: Option<Value>,
    pub error_message: Option<String>,
    pub initiated_at: i64,
    pub paid_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Queryable, Selectable)]
#[diesel(table_name = crate::models::schema::payments::user_payment_provider_mappings)]
pub struct UserPaymentProviderMapping {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider_id: Uuid,
    pub provider_customer_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}
