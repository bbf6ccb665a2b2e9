//! GraphQL SDL for the table catalog, built as an `async_graphql` dynamic
//! schema and exported with `Schema::sdl`.
//!
//! Resolvers are inert: the schema exists to describe what Hasura serves.
//! Type definitions come out sorted by name and root fields are registered in
//! name order, so the output does not depend on the order of `tables`.
//! Relationships whose target is not among `tables` are left out.

use crate::graphql::order::{CursorOrdering, OrderDirection};
use crate::graphql::scalar::ScalarKind;
use crate::graphql::table::{
    ColumnInfo, RelationshipInfo, RelationshipKind, RootField, TableInfo, NUMERIC_AGGREGATES,
};
use async_graphql::dynamic::{
    Enum, EnumItem, Field, FieldFuture, FieldValue, InputObject, InputValue, Object, Scalar,
    Schema, Subscription, SubscriptionField, SubscriptionFieldFuture, Type, TypeRef,
};
use async_graphql::Value;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Statistics whose fields are always `Float`; the rest keep the column type.
const FLOAT_AGGREGATES: [&str; 7] = [
    "avg",
    "stddev",
    "stddev_pop",
    "stddev_samp",
    "var_pop",
    "var_samp",
    "variance",
];

const QUERY_ROOT: &str = "query_root";
const MUTATION_ROOT: &str = "mutation_root";
const SUBSCRIPTION_ROOT: &str = "subscription_root";

#[derive(Error, Debug)]
pub enum SdlError {
    #[error("invalid schema: {0}")]
    Invalid(String),
}

fn field(name: impl Into<String>, ty: TypeRef) -> Field {
    Field::new(name, ty, |_| FieldFuture::new(async { Ok(None::<FieldValue>) }))
}

fn subscription_field(name: impl Into<String>, ty: TypeRef) -> SubscriptionField {
    SubscriptionField::new(name, ty, |_| {
        SubscriptionFieldFuture::new(async {
            Ok(futures::stream::empty::<async_graphql::Result<FieldValue>>())
        })
    })
}

fn object(name: impl Into<String>, fields: impl IntoIterator<Item = Field>) -> Type {
    fields.into_iter().fold(Object::new(name), Object::field).into()
}

fn input(name: impl Into<String>, fields: impl IntoIterator<Item = InputValue>) -> Type {
    fields
        .into_iter()
        .fold(InputObject::new(name), InputObject::field)
        .into()
}

fn enumeration<S: Into<String>>(name: impl Into<String>, items: impl IntoIterator<Item = S>) -> Type {
    items
        .into_iter()
        .fold(Enum::new(name), |ty, item| ty.item(EnumItem::new(item)))
        .into()
}

fn column_type(column: &ColumnInfo) -> TypeRef {
    if column.nullable {
        TypeRef::named(column.kind.graphql_name())
    } else {
        TypeRef::named_nn(column.kind.graphql_name())
    }
}

fn select_arguments(target: &str) -> Vec<InputValue> {
    vec![
        InputValue::new(
            "distinct_on",
            TypeRef::named_nn_list(format!("{}_select_column", target)),
        ),
        InputValue::new("limit", TypeRef::named(TypeRef::INT)),
        InputValue::new("offset", TypeRef::named(TypeRef::INT)),
        InputValue::new("order_by", TypeRef::named_nn_list(format!("{}_order_by", target))),
        InputValue::new("where", TypeRef::named(format!("{}_bool_exp", target))),
    ]
}

fn comparison(kind: ScalarKind) -> Type {
    let ty = kind.graphql_name();
    let mut fields = Vec::new();
    if kind == ScalarKind::Jsonb {
        fields.push(InputValue::new("_cast", TypeRef::named("jsonb_cast_exp")));
        fields.push(InputValue::new("_contained_in", TypeRef::named(ty)));
        fields.push(InputValue::new("_contains", TypeRef::named(ty)));
    }
    for op in ["_eq", "_gt", "_gte"] {
        fields.push(InputValue::new(op, TypeRef::named(ty)));
    }
    if kind == ScalarKind::Jsonb {
        fields.push(InputValue::new("_has_key", TypeRef::named(TypeRef::STRING)));
        fields.push(InputValue::new("_has_keys_all", TypeRef::named_nn_list(TypeRef::STRING)));
        fields.push(InputValue::new("_has_keys_any", TypeRef::named_nn_list(TypeRef::STRING)));
    }
    if kind == ScalarKind::String {
        fields.push(InputValue::new("_ilike", TypeRef::named(TypeRef::STRING)));
    }
    fields.push(InputValue::new("_in", TypeRef::named_nn_list(ty)));
    if kind == ScalarKind::String {
        fields.push(InputValue::new("_iregex", TypeRef::named(TypeRef::STRING)));
    }
    fields.push(InputValue::new("_is_null", TypeRef::named(TypeRef::BOOLEAN)));
    if kind == ScalarKind::String {
        fields.push(InputValue::new("_like", TypeRef::named(TypeRef::STRING)));
    }
    for op in ["_lt", "_lte", "_neq"] {
        fields.push(InputValue::new(op, TypeRef::named(ty)));
    }
    if kind == ScalarKind::String {
        fields.push(InputValue::new("_nilike", TypeRef::named(TypeRef::STRING)));
    }
    fields.push(InputValue::new("_nin", TypeRef::named_nn_list(ty)));
    if kind == ScalarKind::String {
        for op in ["_niregex", "_nlike", "_nregex", "_nsimilar", "_regex", "_similar"] {
            fields.push(InputValue::new(op, TypeRef::named(TypeRef::STRING)));
        }
    }
    input(kind.comparison_type(), fields)
}

fn common(types: &mut Vec<Type>) {
    for kind in ScalarKind::ALL.iter().filter(|kind| !kind.is_builtin()) {
        types.push(Scalar::new(kind.graphql_name()).into());
    }
    types.push(enumeration(
        "order_by",
        OrderDirection::ALL.iter().map(|direction| direction.as_str()),
    ));
    types.push(enumeration(
        "cursor_ordering",
        CursorOrdering::ALL.iter().map(|ordering| ordering.as_str()),
    ));
    for kind in ScalarKind::ALL {
        types.push(comparison(kind));
    }
    types.push(input(
        "jsonb_cast_exp",
        [InputValue::new("String", TypeRef::named("String_comparison_exp"))],
    ));
}

/// Per-table rendering; `known` holds the type names being rendered.
struct TableTypes<'a> {
    info: &'a TableInfo,
    known: &'a BTreeSet<&'static str>,
}

impl<'a> TableTypes<'a> {
    fn relationships(&self) -> impl Iterator<Item = &'a RelationshipInfo> + 'a {
        let known = self.known;
        self.info
            .relationships
            .iter()
            .filter(move |rel| known.contains(rel.target))
    }

    fn object_type(&self, types: &mut Vec<Type>) {
        let info = self.info;
        let mut fields: Vec<Field> = info
            .columns
            .iter()
            .map(|column| field(column.name, column_type(column)))
            .collect();
        for rel in self.relationships() {
            match rel.kind {
                RelationshipKind::Object => {
                    let nullable = !info.mutable
                        || info.column(rel.column).map_or(true, |column| column.nullable);
                    let ty = if nullable {
                        TypeRef::named(rel.target)
                    } else {
                        TypeRef::named_nn(rel.target)
                    };
                    fields.push(field(rel.name, ty));
                }
                RelationshipKind::Array => {
                    let rows = field(rel.name, TypeRef::named_nn_list_nn(rel.target));
                    fields.push(select_arguments(rel.target).into_iter().fold(rows, Field::argument));
                    if let Some(aggregate) = rel.aggregate {
                        let ty = TypeRef::named_nn(format!("{}_aggregate", rel.target));
                        fields.push(
                            select_arguments(rel.target)
                                .into_iter()
                                .fold(field(aggregate, ty), Field::argument),
                        );
                    }
                }
            }
        }
        types.push(object(info.type_name, fields));
    }

    fn filters(&self, types: &mut Vec<Type>) {
        let info = self.info;
        let bool_exp = info.type_of("bool_exp");
        let mut fields = vec![
            InputValue::new("_and", TypeRef::named_nn_list(bool_exp.as_str())),
            InputValue::new("_not", TypeRef::named(bool_exp.as_str())),
            InputValue::new("_or", TypeRef::named_nn_list(bool_exp.as_str())),
        ];
        fields.extend(info.columns.iter().map(|column| {
            InputValue::new(column.name, TypeRef::named(column.kind.comparison_type()))
        }));
        for rel in self.relationships() {
            fields.push(InputValue::new(
                rel.name,
                TypeRef::named(format!("{}_bool_exp", rel.target)),
            ));
            if let Some(aggregate) = rel.aggregate {
                fields.push(InputValue::new(
                    aggregate,
                    TypeRef::named(format!("{}_aggregate_bool_exp", rel.target)),
                ));
            }
        }
        types.push(input(bool_exp.as_str(), fields));

        let select_column = info.type_of("select_column");
        let mut aggregate_bool = Vec::new();
        for name in info.aggregate_bool_exp_fields {
            let ty = info.type_of(&format!("aggregate_bool_exp_{}", name));
            aggregate_bool.push(InputValue::new(*name, TypeRef::named(ty.as_str())));
            let (arguments, predicate) = if *name == "count" {
                (
                    TypeRef::named_nn_list(select_column.as_str()),
                    "Int_comparison_exp",
                )
            } else {
                let columns = format!("{}_{}_arguments_columns", select_column, ty);
                types.push(enumeration(columns.as_str(), info.booleans.iter().copied()));
                (TypeRef::named_nn(columns), "Boolean_comparison_exp")
            };
            types.push(input(
                ty,
                [
                    InputValue::new("arguments", arguments),
                    InputValue::new("distinct", TypeRef::named(TypeRef::BOOLEAN)),
                    InputValue::new("filter", TypeRef::named(bool_exp.as_str())),
                    InputValue::new("predicate", TypeRef::named_nn(predicate)),
                ],
            ));
        }
        types.push(input(info.type_of("aggregate_bool_exp"), aggregate_bool));
    }

    fn orderings(&self, types: &mut Vec<Type>) {
        let info = self.info;
        let order_by = || TypeRef::named("order_by");
        let mut fields: Vec<InputValue> = info
            .columns
            .iter()
            .map(|column| InputValue::new(column.name, order_by()))
            .collect();
        for rel in self.relationships() {
            match (rel.kind, rel.aggregate) {
                (RelationshipKind::Object, _) => fields.push(InputValue::new(
                    rel.name,
                    TypeRef::named(format!("{}_order_by", rel.target)),
                )),
                (RelationshipKind::Array, Some(aggregate)) => fields.push(InputValue::new(
                    aggregate,
                    TypeRef::named(format!("{}_aggregate_order_by", rel.target)),
                )),
                (RelationshipKind::Array, None) => {}
            }
        }
        types.push(input(info.type_of("order_by"), fields));

        let mut aggregate_order = Vec::new();
        if !info.numeric.is_empty() {
            for stat in NUMERIC_AGGREGATES {
                let name = info.type_of(&format!("{}_order_by", stat));
                aggregate_order.push(InputValue::new(stat, TypeRef::named(name.as_str())));
                types.push(input(
                    name,
                    info.numeric.iter().map(|column| InputValue::new(*column, order_by())),
                ));
            }
        }
        let count_at = aggregate_order.len().min(1);
        aggregate_order.insert(count_at, InputValue::new("count", order_by()));
        types.push(input(info.type_of("aggregate_order_by"), aggregate_order));
    }

    fn aggregates(&self, types: &mut Vec<Type>) {
        let info = self.info;
        types.push(object(
            info.type_of("aggregate"),
            [
                field("aggregate", TypeRef::named(info.type_of("aggregate_fields"))),
                field("nodes", TypeRef::named_nn_list_nn(info.type_name)),
            ],
        ));
        let mut fields = Vec::new();
        for stat in info.aggregate_fields {
            if *stat == "count" {
                fields.push(
                    field("count", TypeRef::named_nn(TypeRef::INT))
                        .argument(InputValue::new(
                            "columns",
                            TypeRef::named_nn_list(info.type_of("select_column")),
                        ))
                        .argument(InputValue::new("distinct", TypeRef::named(TypeRef::BOOLEAN))),
                );
                continue;
            }
            let name = info.type_of(&format!("{}_fields", stat));
            fields.push(field(*stat, TypeRef::named(name.as_str())));
            let float = FLOAT_AGGREGATES.contains(stat);
            types.push(object(
                name,
                info.numeric.iter().map(|column| {
                    let ty = match info.column(column) {
                        Some(column) if !float => column.kind.graphql_name(),
                        _ => TypeRef::FLOAT,
                    };
                    field(*column, TypeRef::named(ty))
                }),
            ));
        }
        types.push(object(info.type_of("aggregate_fields"), fields));
    }

    fn mutations(&self, types: &mut Vec<Type>) {
        let info = self.info;
        let bool_exp = info.type_of("bool_exp");
        types.push(enumeration(
            info.type_of("select_column"),
            info.columns.iter().map(|column| column.name),
        ));
        if !info.mutable {
            return;
        }
        let scalar_input = |column: &ColumnInfo| {
            InputValue::new(column.name, TypeRef::named(column.kind.graphql_name()))
        };
        types.push(enumeration(
            info.type_of("constraint"),
            info.constraints.iter().copied(),
        ));
        types.push(enumeration(
            info.type_of("update_column"),
            info.columns.iter().map(|column| column.name),
        ));
        types.push(input(
            info.type_of("insert_input"),
            info.columns.iter().map(scalar_input),
        ));
        types.push(input(
            info.type_of("set_input"),
            info.settable_columns().map(scalar_input),
        ));
        types.push(input(
            info.type_of("inc_input"),
            info.numeric.iter().map(|name| {
                let ty = info
                    .column(name)
                    .map_or(TypeRef::INT, |column| column.kind.graphql_name());
                InputValue::new(*name, TypeRef::named(ty))
            }),
        ));
        if !info.jsonb.is_empty() {
            let jsonb_inputs: [(&str, fn() -> TypeRef); 5] = [
                ("append_input", || TypeRef::named("jsonb")),
                ("prepend_input", || TypeRef::named("jsonb")),
                ("delete_key_input", || TypeRef::named(TypeRef::STRING)),
                ("delete_elem_input", || TypeRef::named(TypeRef::INT)),
                ("delete_at_path_input", || TypeRef::named_nn_list(TypeRef::STRING)),
            ];
            for (suffix, ty) in jsonb_inputs {
                types.push(input(
                    info.type_of(suffix),
                    info.jsonb.iter().map(|column| InputValue::new(*column, ty())),
                ));
            }
        }
        let mut updates: Vec<InputValue> = info
            .update_args
            .iter()
            .map(|arg| InputValue::new(arg.name, TypeRef::named(info.type_of(arg.suffix))))
            .collect();
        updates.push(InputValue::new("where", TypeRef::named_nn(bool_exp.as_str())));
        types.push(input(info.type_of("updates"), updates));
        types.push(input(
            info.type_of("pk_columns_input"),
            [InputValue::new("id", TypeRef::named_nn("uuid"))],
        ));
        types.push(input(
            info.type_of("on_conflict"),
            [
                InputValue::new("constraint", TypeRef::named_nn(info.type_of("constraint"))),
                InputValue::new(
                    "update_columns",
                    TypeRef::named_nn_list_nn(info.type_of("update_column")),
                )
                .default_value(Value::List(Vec::new())),
                InputValue::new("where", TypeRef::named(bool_exp.as_str())),
            ],
        ));
        types.push(object(
            info.type_of("mutation_response"),
            [
                field("affected_rows", TypeRef::named_nn(TypeRef::INT)),
                field("returning", TypeRef::named_nn_list_nn(info.type_name)),
            ],
        ));
    }

    fn streams(&self, types: &mut Vec<Type>) {
        let info = self.info;
        types.push(input(
            info.type_of("stream_cursor_input"),
            [
                InputValue::new(
                    "initial_value",
                    TypeRef::named_nn(info.type_of("stream_cursor_value_input")),
                ),
                InputValue::new("ordering", TypeRef::named("cursor_ordering")),
            ],
        ));
        types.push(input(
            info.type_of("stream_cursor_value_input"),
            info.columns.iter().map(|column| {
                InputValue::new(column.name, TypeRef::named(column.kind.graphql_name()))
            }),
        ));
    }
}

/// Arguments and result type of one root field, e.g. `users_by_pk(id: uuid!): users`.
fn root_field_shape(info: &TableInfo, root: RootField) -> (Vec<InputValue>, TypeRef) {
    let t = info.type_name;
    let typed = |suffix: &str| info.type_of(suffix);
    let update_args = || {
        info.update_args
            .iter()
            .map(|arg| InputValue::new(arg.name, TypeRef::named(info.type_of(arg.suffix))))
            .collect::<Vec<_>>()
    };
    let by_id = || vec![InputValue::new("id", TypeRef::named_nn("uuid"))];
    match root {
        RootField::Select => (select_arguments(t), TypeRef::named_nn_list_nn(t)),
        RootField::Aggregate => (select_arguments(t), TypeRef::named_nn(typed("aggregate"))),
        RootField::ByPk => (by_id(), TypeRef::named(t)),
        RootField::Stream => (
            vec![
                InputValue::new("batch_size", TypeRef::named_nn(TypeRef::INT)),
                InputValue::new("cursor", TypeRef::named_list_nn(typed("stream_cursor_input"))),
                InputValue::new("where", TypeRef::named(typed("bool_exp"))),
            ],
            TypeRef::named_nn_list_nn(t),
        ),
        RootField::Insert => (
            vec![
                InputValue::new("objects", TypeRef::named_nn_list_nn(typed("insert_input"))),
                InputValue::new("on_conflict", TypeRef::named(typed("on_conflict"))),
            ],
            TypeRef::named(typed("mutation_response")),
        ),
        RootField::InsertOne => (
            vec![
                InputValue::new("object", TypeRef::named_nn(typed("insert_input"))),
                InputValue::new("on_conflict", TypeRef::named(typed("on_conflict"))),
            ],
            TypeRef::named(t),
        ),
        RootField::Update => {
            let mut args = update_args();
            args.push(InputValue::new("where", TypeRef::named_nn(typed("bool_exp"))));
            (args, TypeRef::named(typed("mutation_response")))
        }
        RootField::UpdateByPk => {
            let mut args = update_args();
            args.push(InputValue::new(
                "pk_columns",
                TypeRef::named_nn(typed("pk_columns_input")),
            ));
            (args, TypeRef::named(t))
        }
        RootField::UpdateMany => (
            vec![InputValue::new("updates", TypeRef::named_nn_list_nn(typed("updates")))],
            TypeRef::named_list(typed("mutation_response")),
        ),
        RootField::Delete => (
            vec![InputValue::new("where", TypeRef::named_nn(typed("bool_exp")))],
            TypeRef::named(typed("mutation_response")),
        ),
        RootField::DeleteByPk => (by_id(), TypeRef::named(t)),
    }
}

/// Root fields of `roots` across `tables`, keyed and therefore sorted by name.
fn root_fields(
    tables: &[&TableInfo],
    roots: &[RootField],
) -> BTreeMap<String, (Vec<InputValue>, TypeRef)> {
    let mut fields = BTreeMap::new();
    for info in tables {
        for root in roots.iter().filter(|root| root.applies_to(info)) {
            fields.insert(info.root_field(*root), root_field_shape(info, *root));
        }
    }
    fields
}

fn root_object(name: &str, fields: BTreeMap<String, (Vec<InputValue>, TypeRef)>) -> Type {
    object(
        name,
        fields
            .into_iter()
            .map(|(name, (args, ty))| args.into_iter().fold(field(name, ty), Field::argument)),
    )
}

/// Builds the dynamic schema served for `tables`.
pub fn schema(tables: &[&TableInfo]) -> Result<Schema, SdlError> {
    let known: BTreeSet<&'static str> = tables.iter().map(|info| info.type_name).collect();
    let mut types = Vec::new();
    common(&mut types);
    for info in tables {
        let table = TableTypes { info, known: &known };
        table.object_type(&mut types);
        table.filters(&mut types);
        table.orderings(&mut types);
        table.aggregates(&mut types);
        table.mutations(&mut types);
        table.streams(&mut types);
    }

    types.push(root_object(QUERY_ROOT, root_fields(tables, &RootField::QUERY)));
    let mutations = root_fields(tables, &RootField::MUTATION);
    let mutation_root = if mutations.is_empty() {
        None
    } else {
        types.push(root_object(MUTATION_ROOT, mutations));
        Some(MUTATION_ROOT)
    };
    let subscription = root_fields(tables, &RootField::SUBSCRIPTION)
        .into_iter()
        .map(|(name, (args, ty))| {
            args.into_iter()
                .fold(subscription_field(name, ty), SubscriptionField::argument)
        })
        .fold(Subscription::new(SUBSCRIPTION_ROOT), Subscription::field);
    types.push(subscription.into());

    types
        .into_iter()
        .fold(
            Schema::build(QUERY_ROOT, mutation_root, Some(SUBSCRIPTION_ROOT)),
            |builder, ty| builder.register(ty),
        )
        .finish()
        .map_err(|err| SdlError::Invalid(format!("{:?}", err)))
}

/// Renders the complete SDL served for `tables`.
pub fn render(tables: &[&TableInfo]) -> Result<String, SdlError> {
    Ok(schema(tables)?.sdl())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::catalog;
    use crate::graphql::tables::{badma_clubs, payments_methods, payments_providers};

    fn rendered(tables: &[&TableInfo]) -> String {
        render(tables).unwrap().replace('\t', "  ")
    }

    fn block<'a>(sdl: &'a str, header: &str) -> &'a str {
        let start = sdl.find(header).unwrap_or_else(|| panic!("missing {}", header));
        let end = sdl[start..].find("\n}\n").map_or(sdl.len(), |end| start + end + 3);
        &sdl[start..end]
    }

    #[test]
    fn column_types_mark_non_null_columns() {
        let id = ColumnInfo::managed("id", ScalarKind::Uuid, false);
        let data = ColumnInfo::settable("data", ScalarKind::Jsonb, true);
        assert_eq!(column_type(&id).to_string(), "uuid!");
        assert_eq!(column_type(&data).to_string(), "jsonb");
    }

    #[test]
    fn tables_render_their_object_type() {
        let sdl = rendered(&catalog::tables());
        let clubs = block(&sdl, "type badma_clubs {");
        assert!(clubs.contains("  id: uuid!\n"));
        assert!(clubs.contains("  title: String!\n"));
        assert!(clubs.contains("  user: users!\n"));
        assert!(clubs.contains(
            "  tournaments_aggregate(distinct_on: [badma_tournaments_select_column!], limit: Int, offset: Int, order_by: [badma_tournaments_order_by!], where: badma_tournaments_bool_exp): badma_tournaments_aggregate!\n"
        ));
        assert!(sdl.contains("\nscalar jsonb\n"));
        assert!(sdl.contains("\ntype subscription_root {\n"));
    }

    #[test]
    fn relationships_outside_the_rendered_set_are_dropped() {
        let sdl = rendered(&[&badma_clubs::INFO]);
        let clubs = block(&sdl, "type badma_clubs {");
        assert!(clubs.contains("  user_id: uuid!\n"));
        assert!(!clubs.contains("user: users"));
        assert!(!clubs.contains("tournaments"));
        assert!(sdl.contains("  insert_badma_clubs_one(object: badma_clubs_insert_input!, on_conflict: badma_clubs_on_conflict): badma_clubs\n"));
    }

    #[test]
    fn boolean_aggregates_only_exist_for_boolean_columns() {
        let sdl = rendered(&[&badma_clubs::INFO, &payments_providers::INFO, &payments_methods::INFO]);
        assert!(!sdl.contains("badma_clubs_aggregate_bool_exp_bool_and"));
        let providers = block(&sdl, "input payments_providers_bool_exp {");
        assert!(providers.contains("  methods_aggregate: payments_methods_aggregate_bool_exp\n"));
        let methods = block(&sdl, "input payments_methods_aggregate_bool_exp_bool_and {");
        assert!(methods.contains(
            "arguments: payments_methods_select_column_payments_methods_aggregate_bool_exp_bool_and_arguments_columns!"
        ));
        assert!(methods.contains("predicate: Boolean_comparison_exp!"));
        let columns = block(
            &sdl,
            "enum payments_methods_select_column_payments_methods_aggregate_bool_exp_bool_and_arguments_columns {",
        );
        assert!(columns.contains("  is_default\n  is_recurrent_ready\n"));
    }

    #[test]
    fn jsonb_operators_follow_jsonb_columns() {
        let sdl = rendered(&[&badma_clubs::INFO, &payments_providers::INFO]);
        let updates = block(&sdl, "input payments_providers_updates {");
        assert!(updates.contains("_delete_at_path: payments_providers_delete_at_path_input"));
        assert!(updates.contains("where: payments_providers_bool_exp!"));
        assert!(!sdl.contains("badma_clubs_append_input"));
        let filter = block(&sdl, "input payments_providers_bool_exp {");
        assert!(filter.contains("  config: jsonb_comparison_exp\n"));
        let conflict = block(&sdl, "input payments_providers_on_conflict {");
        assert!(conflict.contains("update_columns: [payments_providers_update_column!]! = []"));
    }

    #[test]
    fn views_have_no_mutations() {
        let sdl = rendered(&catalog::tables());
        assert!(sdl.contains("type hasyx {"));
        assert!(sdl.contains("  badma_games: badma_games\n"));
        assert!(!sdl.contains("insert_hasyx"));
        assert!(!sdl.contains("hasyx_by_pk"));
        let mutation_root = block(&sdl, "type mutation_root {");
        assert!(mutation_root.contains("  update_users_many(updates: [users_updates!]!): [users_mutation_response]\n"));
    }

    #[test]
    fn root_fields_are_sorted() {
        let sdl = rendered(&catalog::tables());
        let query_root = block(&sdl, "type query_root {");
        let names: Vec<&str> = query_root
            .lines()
            .skip(1)
            .filter(|line| line.starts_with("  "))
            .map(|line| line.trim().split(['(', ':']).next().unwrap_or_default())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"badma_tournament_scores_aggregate"));
    }

    #[test]
    fn streams_take_a_cursor_list() {
        let sdl = rendered(&catalog::tables());
        let subscriptions = block(&sdl, "type subscription_root {");
        assert!(subscriptions.contains(
            "  badma_clubs_stream(batch_size: Int!, cursor: [badma_clubs_stream_cursor_input]!, where: badma_clubs_bool_exp): [badma_clubs!]!\n"
        ));
    }
}
