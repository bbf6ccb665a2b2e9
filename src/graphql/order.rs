use serde::{Deserialize, Serialize};

/// `order_by`: column ordering with explicit null placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    AscNullsFirst,
    AscNullsLast,
    Desc,
    DescNullsFirst,
    DescNullsLast,
}

impl OrderDirection {
    pub const ALL: [OrderDirection; 6] = [
        OrderDirection::Asc,
        OrderDirection::AscNullsFirst,
        OrderDirection::AscNullsLast,
        OrderDirection::Desc,
        OrderDirection::DescNullsFirst,
        OrderDirection::DescNullsLast,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::AscNullsFirst => "asc_nulls_first",
            OrderDirection::AscNullsLast => "asc_nulls_last",
            OrderDirection::Desc => "desc",
            OrderDirection::DescNullsFirst => "desc_nulls_first",
            OrderDirection::DescNullsLast => "desc_nulls_last",
        }
    }
}

/// `cursor_ordering` of a stream subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CursorOrdering {
    Asc,
    Desc,
}

impl CursorOrdering {
    pub const ALL: [CursorOrdering; 2] = [CursorOrdering::Asc, CursorOrdering::Desc];

    pub const fn as_str(self) -> &'static str {
        match self {
            CursorOrdering::Asc => "ASC",
            CursorOrdering::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_names_match_as_str() {
        for direction in OrderDirection::ALL {
            assert_eq!(
                serde_json::to_value(direction).unwrap(),
                serde_json::Value::String(direction.as_str().to_string())
            );
        }
        for ordering in CursorOrdering::ALL {
            assert_eq!(
                serde_json::to_value(ordering).unwrap(),
                serde_json::Value::String(ordering.as_str().to_string())
            );
        }
    }
}
