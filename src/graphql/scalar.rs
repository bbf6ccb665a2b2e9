use crate::graphql::comparison::{ComparisonExp, JsonbComparisonExp, StringComparisonExp};
use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use uuid::Uuid;

/// GraphQL scalars exposed by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Uuid,
    Bigint,
    Int,
    Numeric,
    String,
    Boolean,
    Jsonb,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 7] = [
        ScalarKind::Uuid,
        ScalarKind::Bigint,
        ScalarKind::Int,
        ScalarKind::Numeric,
        ScalarKind::String,
        ScalarKind::Boolean,
        ScalarKind::Jsonb,
    ];

    pub const fn graphql_name(self) -> &'static str {
        match self {
            ScalarKind::Uuid => "uuid",
            ScalarKind::Bigint => "bigint",
            ScalarKind::Int => "Int",
            ScalarKind::Numeric => "numeric",
            ScalarKind::String => "String",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Jsonb => "jsonb",
        }
    }

    /// Built-in GraphQL scalars need no `scalar` declaration.
    pub const fn is_builtin(self) -> bool {
        matches!(self, ScalarKind::Int | ScalarKind::String | ScalarKind::Boolean)
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ScalarKind::Bigint | ScalarKind::Int | ScalarKind::Numeric
        )
    }

    pub fn comparison_type(self) -> String {
        format!("{}_comparison_exp", self.graphql_name())
    }

    /// Maps `information_schema.columns.data_type` to a scalar.
    pub fn from_postgres(data_type: &str) -> Option<ScalarKind> {
        match data_type {
            "uuid" => Some(ScalarKind::Uuid),
            "bigint" => Some(ScalarKind::Bigint),
            "integer" => Some(ScalarKind::Int),
            "numeric" => Some(ScalarKind::Numeric),
            "text" | "character varying" => Some(ScalarKind::String),
            "boolean" => Some(ScalarKind::Boolean),
            "jsonb" => Some(ScalarKind::Jsonb),
            _ => None,
        }
    }
}

/// Rust representation of a column scalar.
///
/// `Value` is the non-null type used by inputs, `Comparison` the filter
/// expression used in `*_bool_exp`. `Option<T>` is the nullable form of `T`.
pub trait Scalar {
    const KIND: ScalarKind;
    const NULLABLE: bool = false;

    type Value: Serialize + DeserializeOwned + Clone + Debug + PartialEq;
    type Comparison: Serialize + DeserializeOwned + Clone + Debug + Default + PartialEq;
}

impl<T: Scalar> Scalar for Option<T> {
    const KIND: ScalarKind = T::KIND;
    const NULLABLE: bool = true;

    type Value = T::Value;
    type Comparison = T::Comparison;
}

macro_rules! scalar {
    ($ty:ty, $kind:ident, $comparison:ty) => {
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::$kind;

            type Value = $ty;
            type Comparison = $comparison;
        }
    };
}

scalar!(Uuid, Uuid, ComparisonExp<Uuid>);
scalar!(i64, Bigint, ComparisonExp<i64>);
scalar!(i32, Int, ComparisonExp<i32>);
scalar!(BigDecimal, Numeric, ComparisonExp<BigDecimal>);
scalar!(String, String, StringComparisonExp);
scalar!(bool, Boolean, ComparisonExp<bool>);
scalar!(Value, Jsonb, JsonbComparisonExp);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_scalars_keep_their_kind() {
        assert_eq!(<Option<i64> as Scalar>::KIND, ScalarKind::Bigint);
        assert!(<Option<i64> as Scalar>::NULLABLE);
        assert!(!<i64 as Scalar>::NULLABLE);
        assert_eq!(<Option<Value> as Scalar>::KIND, ScalarKind::Jsonb);
    }

    #[test]
    fn postgres_types_map_to_scalars() {
        assert_eq!(ScalarKind::from_postgres("character varying"), Some(ScalarKind::String));
        assert_eq!(ScalarKind::from_postgres("integer"), Some(ScalarKind::Int));
        assert_eq!(ScalarKind::from_postgres("timestamp with time zone"), None);
    }

    #[test]
    fn comparison_type_names_follow_scalar_names() {
        assert_eq!(ScalarKind::Jsonb.comparison_type(), "jsonb_comparison_exp");
        assert_eq!(ScalarKind::Int.comparison_type(), "Int_comparison_exp");
        assert!(ScalarKind::Bigint.is_numeric());
        assert!(!ScalarKind::Uuid.is_numeric());
    }
}
