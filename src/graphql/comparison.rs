use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `<scalar>_comparison_exp`: per-column filter on ordered scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExp<T> {
    #[serde(rename = "_eq", default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<T>,
    #[serde(rename = "_gt", default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<T>,
    #[serde(rename = "_gte", default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<T>,
    #[serde(rename = "_in", default, skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<T>>,
    #[serde(rename = "_is_null", default, skip_serializing_if = "Option::is_none")]
    pub is_null: Option<bool>,
    #[serde(rename = "_lt", default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<T>,
    #[serde(rename = "_lte", default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<T>,
    #[serde(rename = "_neq", default, skip_serializing_if = "Option::is_none")]
    pub neq: Option<T>,
    #[serde(rename = "_nin", default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<Vec<T>>,
}

impl<T> Default for ComparisonExp<T> {
    fn default() -> Self {
        ComparisonExp {
            eq: None,
            gt: None,
            gte: None,
            in_: None,
            is_null: None,
            lt: None,
            lte: None,
            neq: None,
            nin: None,
        }
    }
}

impl<T> ComparisonExp<T> {
    pub fn equals(value: T) -> Self {
        ComparisonExp {
            eq: Some(value),
            ..Default::default()
        }
    }

    pub fn not_equals(value: T) -> Self {
        ComparisonExp {
            neq: Some(value),
            ..Default::default()
        }
    }

    pub fn one_of(values: Vec<T>) -> Self {
        ComparisonExp {
            in_: Some(values),
            ..Default::default()
        }
    }

    pub fn between(from: T, to: T) -> Self {
        ComparisonExp {
            gte: Some(from),
            lte: Some(to),
            ..Default::default()
        }
    }

    pub fn null(is_null: bool) -> Self {
        ComparisonExp {
            is_null: Some(is_null),
            ..Default::default()
        }
    }
}

/// `String_comparison_exp`: ordered comparison plus pattern operators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringComparisonExp {
    #[serde(rename = "_eq", default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<String>,
    #[serde(rename = "_gt", default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<String>,
    #[serde(rename = "_gte", default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<String>,
    #[serde(rename = "_ilike", default, skip_serializing_if = "Option::is_none")]
    pub ilike: Option<String>,
    #[serde(rename = "_in", default, skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<String>>,
    #[serde(rename = "_iregex", default, skip_serializing_if = "Option::is_none")]
    pub iregex: Option<String>,
    #[serde(rename = "_is_null", default, skip_serializing_if = "Option::is_none")]
    pub is_null: Option<bool>,
    #[serde(rename = "_like", default, skip_serializing_if = "Option::is_none")]
    pub like: Option<String>,
    #[serde(rename = "_lt", default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    #[serde(rename = "_lte", default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<String>,
    #[serde(rename = "_neq", default, skip_serializing_if = "Option::is_none")]
    pub neq: Option<String>,
    #[serde(rename = "_nilike", default, skip_serializing_if = "Option::is_none")]
    pub nilike: Option<String>,
    #[serde(rename = "_nin", default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<Vec<String>>,
    #[serde(rename = "_niregex", default, skip_serializing_if = "Option::is_none")]
    pub niregex: Option<String>,
    #[serde(rename = "_nlike", default, skip_serializing_if = "Option::is_none")]
    pub nlike: Option<String>,
    #[serde(rename = "_nregex", default, skip_serializing_if = "Option::is_none")]
    pub nregex: Option<String>,
    #[serde(rename = "_nsimilar", default, skip_serializing_if = "Option::is_none")]
    pub nsimilar: Option<String>,
    #[serde(rename = "_regex", default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(rename = "_similar", default, skip_serializing_if = "Option::is_none")]
    pub similar: Option<String>,
}

impl StringComparisonExp {
    pub fn equals(value: impl Into<String>) -> Self {
        StringComparisonExp {
            eq: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StringComparisonExp {
            in_: Some(values.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Case-insensitive `LIKE`.
    pub fn ilike(pattern: impl Into<String>) -> Self {
        StringComparisonExp {
            ilike: Some(pattern.into()),
            ..Default::default()
        }
    }

    pub fn null(is_null: bool) -> Self {
        StringComparisonExp {
            is_null: Some(is_null),
            ..Default::default()
        }
    }
}

/// `jsonb_cast_exp`: compares a jsonb column after casting it to text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonbCastExp {
    #[serde(rename = "String", default, skip_serializing_if = "Option::is_none")]
    pub string: Option<StringComparisonExp>,
}

/// `jsonb_comparison_exp`. Containment and key-existence follow Postgres
/// `@>`, `<@`, `?`, `?|` and `?&`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonbComparisonExp {
    #[serde(rename = "_cast", default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<JsonbCastExp>,
    #[serde(rename = "_contained_in", default, skip_serializing_if = "Option::is_none")]
    pub contained_in: Option<Value>,
    #[serde(rename = "_contains", default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<Value>,
    #[serde(rename = "_eq", default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<Value>,
    #[serde(rename = "_gt", default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<Value>,
    #[serde(rename = "_gte", default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<Value>,
    #[serde(rename = "_has_key", default, skip_serializing_if = "Option::is_none")]
    pub has_key: Option<String>,
    #[serde(rename = "_has_keys_all", default, skip_serializing_if = "Option::is_none")]
    pub has_keys_all: Option<Vec<String>>,
    #[serde(rename = "_has_keys_any", default, skip_serializing_if = "Option::is_none")]
    pub has_keys_any: Option<Vec<String>>,
    #[serde(rename = "_in", default, skip_serializing_if = "Option::is_none")]
    pub in_: Option<Vec<Value>>,
    #[serde(rename = "_is_null", default, skip_serializing_if = "Option::is_none")]
    pub is_null: Option<bool>,
    #[serde(rename = "_lt", default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<Value>,
    #[serde(rename = "_lte", default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<Value>,
    #[serde(rename = "_neq", default, skip_serializing_if = "Option::is_none")]
    pub neq: Option<Value>,
    #[serde(rename = "_nin", default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<Vec<Value>>,
}

impl JsonbComparisonExp {
    pub fn contains(value: Value) -> Self {
        JsonbComparisonExp {
            contains: Some(value),
            ..Default::default()
        }
    }

    pub fn contained_in(value: Value) -> Self {
        JsonbComparisonExp {
            contained_in: Some(value),
            ..Default::default()
        }
    }

    pub fn has_key(key: impl Into<String>) -> Self {
        JsonbComparisonExp {
            has_key: Some(key.into()),
            ..Default::default()
        }
    }

    pub fn has_keys_any<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        JsonbComparisonExp {
            has_keys_any: Some(keys.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn has_keys_all<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        JsonbComparisonExp {
            has_keys_all: Some(keys.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn only_set_operators_are_serialized() {
        let exp = ComparisonExp::between(10_i64, 20_i64);
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({ "_gte": 10, "_lte": 20 })
        );
        let exp: ComparisonExp<Uuid> = ComparisonExp::null(true);
        assert_eq!(serde_json::to_value(&exp).unwrap(), json!({ "_is_null": true }));
    }

    #[test]
    fn string_operators_use_hasura_names() {
        let exp = StringComparisonExp::one_of(["active", "paused"]);
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({ "_in": ["active", "paused"] })
        );
        assert_eq!(
            serde_json::to_value(StringComparisonExp::ilike("%knight%")).unwrap(),
            json!({ "_ilike": "%knight%" })
        );
    }

    #[test]
    fn jsonb_operators_round_trip() {
        let raw = json!({
            "_contains": { "theme": "dark" },
            "_has_keys_any": ["push", "email"],
            "_cast": { "String": { "_like": "%dark%" } }
        });
        let exp: JsonbComparisonExp = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(exp.contains, Some(json!({ "theme": "dark" })));
        assert_eq!(
            exp.cast.as_ref().and_then(|c| c.string.as_ref()).and_then(|s| s.like.clone()),
            Some("%dark%".to_string())
        );
        assert_eq!(serde_json::to_value(&exp).unwrap(), raw);
    }
}
