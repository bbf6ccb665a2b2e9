//! The `hasyx` view: a polymorphic `(id, schema, table)` index over every
//! entity table, with one object relationship per entity joined on `id`.

use crate::graphql::catalog::{AnyRow, EntityFilters, EntityKind, EntityOrdering, HASYX_RELATIONSHIPS};
use crate::graphql::comparison::{ComparisonExp, StringComparisonExp};
use crate::graphql::operation::{Arguments, Operation, OperationError, OperationKind};
use crate::graphql::order::{CursorOrdering, OrderDirection};
use crate::graphql::scalar::ScalarKind;
use crate::graphql::table::{BoolExpression, ColumnInfo, HasuraSource, TableInfo};
use crate::models::hasyx::Hasyx;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const TYPE_NAME: &str = "hasyx";

pub type Row = Hasyx;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectColumn {
    id,
    schema,
    table,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolExp {
    #[serde(rename = "_and", default, skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<BoolExp>>,
    #[serde(rename = "_or", default, skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<BoolExp>>,
    #[serde(rename = "_not", default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<BoolExp>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ComparisonExp<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<StringComparisonExp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<StringComparisonExp>,
    #[serde(flatten)]
    pub entities: EntityFilters,
}

impl BoolExp {
    /// Matches the single view row pointing at `id` in `kind`'s table.
    pub fn reference(kind: EntityKind, id: Uuid) -> Self {
        let info = kind.info();
        BoolExp {
            id: Some(ComparisonExp::equals(id)),
            schema: Some(StringComparisonExp::equals(info.schema)),
            table: Some(StringComparisonExp::equals(info.table)),
            ..Default::default()
        }
    }
}

impl BoolExpression for BoolExp {
    fn all(expressions: Vec<Self>) -> Self {
        BoolExp {
            and: Some(expressions),
            ..Default::default()
        }
    }

    fn any(expressions: Vec<Self>) -> Self {
        BoolExp {
            or: Some(expressions),
            ..Default::default()
        }
    }

    fn negate(expression: Self) -> Self {
        BoolExp {
            not: Some(Box::new(expression)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<OrderDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<OrderDirection>,
    #[serde(flatten)]
    pub entities: EntityOrdering,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateFields {
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamCursorValueInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamCursorInput {
    pub initial_value: StreamCursorValueInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<CursorOrdering>,
}

pub static INFO: TableInfo = TableInfo {
    schema: "public",
    table: "hasyx",
    type_name: TYPE_NAME,
    columns: &[
        ColumnInfo::managed("id", ScalarKind::Uuid, false),
        ColumnInfo::managed("schema", ScalarKind::String, false),
        ColumnInfo::managed("table", ScalarKind::String, false),
    ],
    relationships: HASYX_RELATIONSHIPS,
    constraints: &[],
    numeric: &[],
    booleans: &[],
    jsonb: &[],
    update_args: &[],
    aggregate_fields: &["count"],
    aggregate_bool_exp_fields: &["count"],
    mutable: false,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct View;

impl HasuraSource for View {
    type Row = Row;
    type BoolExp = BoolExp;
    type OrderBy = OrderBy;
    type SelectColumn = SelectColumn;
    type AggregateFields = AggregateFields;
    type StreamCursorInput = StreamCursorInput;

    fn info() -> &'static TableInfo {
        &INFO
    }
}

/// A `hasyx` row together with the entity row it points at.
///
/// `row` is `None` when the view still lists a reference whose target is not
/// visible to the current role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved {
    pub reference: Hasyx,
    pub kind: EntityKind,
    pub row: Option<AnyRow>,
}

impl Resolved {
    fn decode(kind: EntityKind, mut value: Value) -> Result<Resolved, serde_json::Error> {
        let target = value
            .as_object_mut()
            .and_then(|object| object.remove(kind.type_name()))
            .unwrap_or(Value::Null);
        let reference: Hasyx = serde_json::from_value(value)?;
        let row = match target {
            Value::Null => None,
            target => Some(AnyRow::decode(kind, target)?),
        };
        Ok(Resolved {
            reference,
            kind,
            row,
        })
    }
}

/// Builds the query that follows one `hasyx` reference to its entity row.
pub fn resolve(kind: EntityKind, id: Uuid) -> Result<Operation<Option<Resolved>>, OperationError> {
    let info = kind.info();
    let mut args = Arguments::new();
    args.push("where", "hasyx_bool_exp", &BoolExp::reference(kind, id))?;
    args.push("limit", "Int", &1)?;
    let selection = format!(
        "{{ id schema table {} {} }}",
        info.type_name,
        info.selection()
    );
    let request = args.document(OperationKind::Query, TYPE_NAME, TYPE_NAME, &selection);
    Ok(Operation::with_decoder(request, TYPE_NAME, move |value| {
        let rows: Vec<Value> = serde_json::from_value(value)?;
        rows.into_iter()
            .next()
            .map(|row| Resolved::decode(kind, row))
            .transpose()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::tables::badma_games;
    use serde_json::json;

    #[test]
    fn reference_filter_matches_id_schema_and_table() {
        let id = Uuid::nil();
        let exp = BoolExp::reference(EntityKind::PaymentsPlans, id);
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({
                "id": { "_eq": id },
                "schema": { "_eq": "payments" },
                "table": { "_eq": "plans" }
            })
        );
    }

    #[test]
    fn entity_filters_flatten_into_the_view_filter() {
        let exp = BoolExp {
            entities: EntityFilters {
                badma_games: Some(Box::new(badma_games::BoolExp {
                    status: Some(StringComparisonExp::equals("finished")),
                    ..Default::default()
                })),
                ..Default::default()
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&exp).unwrap();
        assert_eq!(value, json!({ "badma_games": { "status": { "_eq": "finished" } } }));
        let back: BoolExp = serde_json::from_value(value).unwrap();
        assert_eq!(back, exp);
    }

    #[test]
    fn resolve_decodes_the_relationship_named_after_the_entity() {
        let id = Uuid::new_v4();
        let operation = resolve(EntityKind::BadmaClubs, id).unwrap();
        assert!(operation
            .request()
            .query
            .contains("badma_clubs { id created_at user_id title updated_at }"));

        let data = json!({
            "hasyx": [{
                "id": id,
                "schema": "badma",
                "table": "clubs",
                "badma_clubs": {
                    "id": id,
                    "user_id": Uuid::nil(),
                    "title": "Knights",
                    "created_at": 1,
                    "updated_at": 2
                }
            }]
        });
        let resolved = operation.decode(&data).unwrap().unwrap();
        assert_eq!(resolved.reference.table_name, "clubs");
        assert_eq!(resolved.kind, EntityKind::BadmaClubs);
        assert_eq!(resolved.row.map(|row| row.id()), Some(id));

        let empty = operation.decode(&json!({ "hasyx": [] })).unwrap();
        assert!(empty.is_none());
    }
}
