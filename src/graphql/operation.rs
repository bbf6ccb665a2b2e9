//! Typed builders for the query, mutation and subscription root fields.
//!
//! Each builder produces a [`GraphqlRequest`] that only declares variables
//! for the arguments actually supplied, together with a decoder for the
//! root field of the response `data`.

use crate::graphql::table::{
    Aggregate, HasuraSource, HasuraTable, MutationResponse, RootField, TableInfo,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("could not encode argument `{name}`: {source}")]
    Encode {
        name: String,
        source: serde_json::Error,
    },
    #[error("response data has no `{0}` field")]
    MissingField(String),
    #[error("could not decode `{field}`: {source}")]
    Decode {
        field: String,
        source: serde_json::Error,
    },
    #[error("`{0}` is not an argument of this field")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// Body of a GraphQL-over-HTTP request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(rename = "operationName")]
    pub operation_name: String,
    pub variables: Map<String, Value>,
}

struct Argument {
    name: String,
    graphql_type: String,
    value: Value,
}

/// Arguments of a root field, each bound to a variable of the same name.
#[derive(Default)]
pub struct Arguments {
    entries: Vec<Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Arguments::default()
    }

    pub fn push<V: Serialize + ?Sized>(
        &mut self,
        name: &str,
        graphql_type: impl Into<String>,
        value: &V,
    ) -> Result<(), OperationError> {
        let value = serde_json::to_value(value).map_err(|source| OperationError::Encode {
            name: name.to_string(),
            source,
        })?;
        self.entries.push(Argument {
            name: name.to_string(),
            graphql_type: graphql_type.into(),
            value,
        });
        Ok(())
    }

    pub fn push_opt<V: Serialize>(
        &mut self,
        name: &str,
        graphql_type: impl Into<String>,
        value: Option<&V>,
    ) -> Result<(), OperationError> {
        match value {
            Some(value) => self.push(name, graphql_type, value),
            None => Ok(()),
        }
    }

    /// Binds every key of a serialized input object as its own argument,
    /// e.g. the `_set`, `_inc` and `where` members of `<table>_updates`.
    fn push_members(
        &mut self,
        value: Value,
        type_of: impl Fn(&str) -> Option<String>,
    ) -> Result<(), OperationError> {
        if let Value::Object(members) = value {
            for (name, value) in members {
                let graphql_type = type_of(&name)
                    .ok_or_else(|| OperationError::UnknownArgument(name.clone()))?;
                self.entries.push(Argument {
                    name,
                    graphql_type,
                    value,
                });
            }
        }
        Ok(())
    }

    /// `kind name($a: A, ...) { root(a: $a, ...) selection }`.
    pub fn document(
        self,
        kind: OperationKind,
        operation_name: &str,
        root_field: &str,
        selection: &str,
    ) -> GraphqlRequest {
        let query = if self.entries.is_empty() {
            format!(
                "{} {} {{ {} {} }}",
                kind.as_str(),
                operation_name,
                root_field,
                selection
            )
        } else {
            let declarations: Vec<String> = self
                .entries
                .iter()
                .map(|arg| format!("${}: {}", arg.name, arg.graphql_type))
                .collect();
            let bindings: Vec<String> = self
                .entries
                .iter()
                .map(|arg| format!("{}: ${}", arg.name, arg.name))
                .collect();
            format!(
                "{} {}({}) {{ {}({}) {} }}",
                kind.as_str(),
                operation_name,
                declarations.join(", "),
                root_field,
                bindings.join(", "),
                selection
            )
        };
        let variables = self
            .entries
            .into_iter()
            .map(|arg| (arg.name, arg.value))
            .collect();
        GraphqlRequest {
            query,
            operation_name: operation_name.to_string(),
            variables,
        }
    }
}

type Decoder<R> = Box<dyn Fn(Value) -> Result<R, serde_json::Error> + Send + Sync>;

/// A request plus the decoder for its root field.
pub struct Operation<R> {
    request: GraphqlRequest,
    root_field: String,
    decoder: Decoder<R>,
}

impl<R> fmt::Debug for Operation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("request", &self.request)
            .field("root_field", &self.root_field)
            .finish_non_exhaustive()
    }
}

impl<R: DeserializeOwned + 'static> Operation<R> {
    pub fn new(request: GraphqlRequest, root_field: impl Into<String>) -> Self {
        Operation::with_decoder(request, root_field, serde_json::from_value)
    }
}

impl<R> Operation<R> {
    pub fn with_decoder<F>(request: GraphqlRequest, root_field: impl Into<String>, decoder: F) -> Self
    where
        F: Fn(Value) -> Result<R, serde_json::Error> + Send + Sync + 'static,
    {
        Operation {
            request,
            root_field: root_field.into(),
            decoder: Box::new(decoder),
        }
    }

    pub fn request(&self) -> &GraphqlRequest {
        &self.request
    }

    pub fn root_field(&self) -> &str {
        &self.root_field
    }

    /// Turns a query into the equivalent live subscription.
    pub fn live(mut self) -> Self {
        if let Some(rest) = self.request.query.strip_prefix("query ") {
            self.request.query = format!("subscription {}", rest);
        }
        self
    }

    /// Decodes the root field out of the response `data` object.
    pub fn decode(&self, data: &Value) -> Result<R, OperationError> {
        let field = data
            .get(&self.root_field)
            .cloned()
            .ok_or_else(|| OperationError::MissingField(self.root_field.clone()))?;
        (self.decoder)(field).map_err(|source| OperationError::Decode {
            field: self.root_field.clone(),
            source,
        })
    }
}

/// Arguments shared by `<table>` and `<table>_aggregate`.
pub struct SelectArgs<T: HasuraSource> {
    pub distinct_on: Option<Vec<T::SelectColumn>>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order_by: Option<Vec<T::OrderBy>>,
    pub r#where: Option<T::BoolExp>,
}

impl<T: HasuraSource> Default for SelectArgs<T> {
    fn default() -> Self {
        SelectArgs {
            distinct_on: None,
            limit: None,
            offset: None,
            order_by: None,
            r#where: None,
        }
    }
}

impl<T: HasuraSource> SelectArgs<T> {
    pub fn filter(mut self, filter: T::BoolExp) -> Self {
        self.r#where = Some(filter);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order_by(mut self, order_by: T::OrderBy) -> Self {
        self.order_by.get_or_insert_with(Vec::new).push(order_by);
        self
    }

    pub fn distinct_on(mut self, column: T::SelectColumn) -> Self {
        self.distinct_on.get_or_insert_with(Vec::new).push(column);
        self
    }

    fn arguments(&self, info: &TableInfo) -> Result<Arguments, OperationError> {
        let mut args = Arguments::new();
        args.push_opt(
            "distinct_on",
            format!("[{}!]", info.type_of("select_column")),
            self.distinct_on.as_ref(),
        )?;
        args.push_opt("limit", "Int", self.limit.as_ref())?;
        args.push_opt("offset", "Int", self.offset.as_ref())?;
        args.push_opt(
            "order_by",
            format!("[{}!]", info.type_of("order_by")),
            self.order_by.as_ref(),
        )?;
        args.push_opt("where", info.type_of("bool_exp"), self.r#where.as_ref())?;
        Ok(args)
    }
}

/// Arguments of `<table>_stream`.
pub struct StreamArgs<T: HasuraSource> {
    pub batch_size: u32,
    pub cursor: Vec<T::StreamCursorInput>,
    pub r#where: Option<T::BoolExp>,
}

impl<T: HasuraSource> StreamArgs<T> {
    pub fn new(batch_size: u32, cursor: T::StreamCursorInput) -> Self {
        StreamArgs {
            batch_size,
            cursor: vec![cursor],
            r#where: None,
        }
    }

    pub fn filter(mut self, filter: T::BoolExp) -> Self {
        self.r#where = Some(filter);
        self
    }
}

fn mutation_selection(info: &TableInfo) -> String {
    format!("{{ affected_rows returning {} }}", info.selection())
}

fn aggregate_selection(info: &TableInfo) -> String {
    format!(
        "{{ aggregate {} nodes {} }}",
        info.aggregate_selection(),
        info.selection()
    )
}

fn build<T: HasuraSource, R: DeserializeOwned + 'static>(
    kind: OperationKind,
    field: RootField,
    args: Arguments,
    selection: &str,
) -> Operation<R> {
    let root_field = T::info().root_field(field);
    let request = args.document(kind, &root_field, &root_field, selection);
    Operation::new(request, root_field)
}

/// `<table>(distinct_on, limit, offset, order_by, where)`.
pub fn select<T: HasuraSource>(args: SelectArgs<T>) -> Result<Operation<Vec<T::Row>>, OperationError> {
    let info = T::info();
    Ok(build::<T, _>(
        OperationKind::Query,
        RootField::Select,
        args.arguments(info)?,
        &info.selection(),
    ))
}

/// `<table>_aggregate(distinct_on, limit, offset, order_by, where)`.
pub fn aggregate<T: HasuraSource>(
    args: SelectArgs<T>,
) -> Result<Operation<Aggregate<T::AggregateFields, T::Row>>, OperationError> {
    let info = T::info();
    Ok(build::<T, _>(
        OperationKind::Query,
        RootField::Aggregate,
        args.arguments(info)?,
        &aggregate_selection(info),
    ))
}

/// `<table>_by_pk(id)`. Decodes to `None` when no row has that id.
pub fn by_pk<T: HasuraTable>(id: Uuid) -> Result<Operation<Option<T::Row>>, OperationError> {
    let info = T::info();
    let mut args = Arguments::new();
    args.push("id", "uuid!", &id)?;
    Ok(build::<T, _>(
        OperationKind::Query,
        RootField::ByPk,
        args,
        &info.selection(),
    ))
}

/// `<table>_stream(batch_size, cursor, where)`.
pub fn stream<T: HasuraSource>(args: StreamArgs<T>) -> Result<Operation<Vec<T::Row>>, OperationError> {
    let info = T::info();
    let mut arguments = Arguments::new();
    arguments.push("batch_size", "Int!", &args.batch_size)?;
    arguments.push(
        "cursor",
        format!("[{}]!", info.type_of("stream_cursor_input")),
        &args.cursor,
    )?;
    arguments.push_opt("where", info.type_of("bool_exp"), args.r#where.as_ref())?;
    Ok(build::<T, _>(
        OperationKind::Subscription,
        RootField::Stream,
        arguments,
        &info.selection(),
    ))
}

/// `insert_<table>(objects, on_conflict)`.
pub fn insert<T: HasuraTable>(
    objects: Vec<T::InsertInput>,
    on_conflict: Option<T::OnConflict>,
) -> Result<Operation<MutationResponse<T::Row>>, OperationError> {
    let info = T::info();
    let mut args = Arguments::new();
    args.push(
        "objects",
        format!("[{}!]!", info.type_of("insert_input")),
        &objects,
    )?;
    args.push_opt("on_conflict", info.type_of("on_conflict"), on_conflict.as_ref())?;
    Ok(build::<T, _>(
        OperationKind::Mutation,
        RootField::Insert,
        args,
        &mutation_selection(info),
    ))
}

/// `insert_<table>_one(object, on_conflict)`. Decodes to `None` when an
/// `on_conflict` clause skipped the row.
pub fn insert_one<T: HasuraTable>(
    object: T::InsertInput,
    on_conflict: Option<T::OnConflict>,
) -> Result<Operation<Option<T::Row>>, OperationError> {
    let info = T::info();
    let mut args = Arguments::new();
    args.push("object", format!("{}!", info.type_of("insert_input")), &object)?;
    args.push_opt("on_conflict", info.type_of("on_conflict"), on_conflict.as_ref())?;
    Ok(build::<T, _>(
        OperationKind::Mutation,
        RootField::InsertOne,
        args,
        &info.selection(),
    ))
}

fn update_arg_type(info: &TableInfo, name: &str) -> Option<String> {
    if name == "where" {
        return Some(format!("{}!", info.type_of("bool_exp")));
    }
    info.update_args
        .iter()
        .find(|arg| arg.name == name)
        .map(|arg| info.type_of(arg.suffix))
}

fn encode<V: Serialize>(name: &str, value: &V) -> Result<Value, OperationError> {
    serde_json::to_value(value).map_err(|source| OperationError::Encode {
        name: name.to_string(),
        source,
    })
}

/// `update_<table>(where, _set, _inc, ...)`, taking its arguments from a
/// `<table>_updates` value.
pub fn update<T: HasuraTable>(
    updates: T::Updates,
) -> Result<Operation<MutationResponse<T::Row>>, OperationError> {
    let info = T::info();
    let mut args = Arguments::new();
    args.push_members(encode("updates", &updates)?, |name| update_arg_type(info, name))?;
    Ok(build::<T, _>(
        OperationKind::Mutation,
        RootField::Update,
        args,
        &mutation_selection(info),
    ))
}

/// `update_<table>_by_pk(pk_columns, _set, _inc, ...)`. The `where` member
/// of `updates` is ignored.
pub fn update_by_pk<T: HasuraTable>(
    id: Uuid,
    updates: T::Updates,
) -> Result<Operation<Option<T::Row>>, OperationError> {
    let info = T::info();
    let mut members = encode("updates", &updates)?;
    if let Value::Object(map) = &mut members {
        map.remove("where");
    }
    let mut args = Arguments::new();
    args.push(
        "pk_columns",
        format!("{}!", info.type_of("pk_columns_input")),
        &T::pk(id),
    )?;
    args.push_members(members, |name| update_arg_type(info, name))?;
    Ok(build::<T, _>(
        OperationKind::Mutation,
        RootField::UpdateByPk,
        args,
        &info.selection(),
    ))
}

/// `update_<table>_many(updates)`: one mutation response per entry.
pub fn update_many<T: HasuraTable>(
    updates: Vec<T::Updates>,
) -> Result<Operation<Vec<Option<MutationResponse<T::Row>>>>, OperationError> {
    let info = T::info();
    let mut args = Arguments::new();
    args.push("updates", format!("[{}!]!", info.type_of("updates")), &updates)?;
    Ok(build::<T, _>(
        OperationKind::Mutation,
        RootField::UpdateMany,
        args,
        &mutation_selection(info),
    ))
}

/// `delete_<table>(where)`.
pub fn delete<T: HasuraTable>(
    filter: T::BoolExp,
) -> Result<Operation<MutationResponse<T::Row>>, OperationError> {
    let info = T::info();
    let mut args = Arguments::new();
    args.push("where", format!("{}!", info.type_of("bool_exp")), &filter)?;
    Ok(build::<T, _>(
        OperationKind::Mutation,
        RootField::Delete,
        args,
        &mutation_selection(info),
    ))
}

/// `delete_<table>_by_pk(id)`.
pub fn delete_by_pk<T: HasuraTable>(id: Uuid) -> Result<Operation<Option<T::Row>>, OperationError> {
    let info = T::info();
    let mut args = Arguments::new();
    args.push("id", "uuid!", &id)?;
    Ok(build::<T, _>(
        OperationKind::Mutation,
        RootField::DeleteByPk,
        args,
        &info.selection(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn documents_without_arguments_have_no_variable_list() {
        let request = Arguments::new().document(
            OperationKind::Query,
            "badma_clubs",
            "badma_clubs",
            "{ id }",
        );
        assert_eq!(request.query, "query badma_clubs { badma_clubs { id } }");
        assert!(request.variables.is_empty());
    }

    #[test]
    fn arguments_are_bound_to_variables_of_the_same_name() {
        let mut args = Arguments::new();
        args.push("limit", "Int", &5).unwrap();
        args.push_opt::<u32>("offset", "Int", None).unwrap();
        args.push("where", "users_bool_exp", &json!({})).unwrap();
        let request = args.document(OperationKind::Query, "users", "users", "{ id }");
        assert_eq!(
            request.query,
            "query users($limit: Int, $where: users_bool_exp) { users(limit: $limit, where: $where) { id } }"
        );
        assert_eq!(request.variables.get("limit"), Some(&json!(5)));
        assert!(!request.variables.contains_key("offset"));
    }

    #[test]
    fn live_turns_queries_into_subscriptions() {
        let request = Arguments::new().document(OperationKind::Query, "users", "users", "{ id }");
        let operation: Operation<Value> = Operation::new(request, "users");
        let operation = operation.live();
        assert!(operation.request().query.starts_with("subscription users "));
    }

    #[test]
    fn missing_root_field_is_reported() {
        let request = Arguments::new().document(OperationKind::Query, "users", "users", "{ id }");
        let operation: Operation<Value> = Operation::new(request, "users");
        assert!(matches!(
            operation.decode(&json!({ "accounts": [] })),
            Err(OperationError::MissingField(field)) if field == "users"
        ));
    }
}
