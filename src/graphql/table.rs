use crate::graphql::scalar::ScalarKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

/// Columns every mutable table fills on the server side.
pub const MANAGED_COLUMNS: [&str; 2] = ["id", "created_at"];

/// Numeric statistics of `<table>_aggregate_fields`, in schema order.
pub const NUMERIC_AGGREGATES: [&str; 10] = [
    "avg",
    "max",
    "min",
    "stddev",
    "stddev_pop",
    "stddev_samp",
    "sum",
    "var_pop",
    "var_samp",
    "variance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub kind: ScalarKind,
    pub nullable: bool,
    pub managed: bool,
}

impl ColumnInfo {
    pub const fn managed(name: &'static str, kind: ScalarKind, nullable: bool) -> Self {
        ColumnInfo {
            name,
            kind,
            nullable,
            managed: true,
        }
    }

    pub const fn settable(name: &'static str, kind: ScalarKind, nullable: bool) -> Self {
        ColumnInfo {
            name,
            kind,
            nullable,
            managed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Object,
    Array,
}

/// An object relationship joins `column` of this table to `id` of `target`;
/// an array relationship joins `id` of this table to `column` of `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationshipInfo {
    pub name: &'static str,
    pub aggregate: Option<&'static str>,
    pub target: &'static str,
    pub kind: RelationshipKind,
    pub column: &'static str,
}

impl RelationshipInfo {
    pub const fn object(name: &'static str, target: &'static str, column: &'static str) -> Self {
        RelationshipInfo {
            name,
            aggregate: None,
            target,
            kind: RelationshipKind::Object,
            column,
        }
    }

    pub const fn array(
        name: &'static str,
        aggregate: &'static str,
        target: &'static str,
        column: &'static str,
    ) -> Self {
        RelationshipInfo {
            name,
            aggregate: Some(aggregate),
            target,
            kind: RelationshipKind::Array,
            column,
        }
    }
}

/// An argument of `update_<table>` besides `where`, e.g. `_set: <table>_set_input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateArg {
    pub name: &'static str,
    pub suffix: &'static str,
}

impl UpdateArg {
    pub const SET: UpdateArg = UpdateArg {
        name: "_set",
        suffix: "set_input",
    };
    pub const INC: UpdateArg = UpdateArg {
        name: "_inc",
        suffix: "inc_input",
    };
    pub const APPEND: UpdateArg = UpdateArg {
        name: "_append",
        suffix: "append_input",
    };
    pub const PREPEND: UpdateArg = UpdateArg {
        name: "_prepend",
        suffix: "prepend_input",
    };
    pub const DELETE_KEY: UpdateArg = UpdateArg {
        name: "_delete_key",
        suffix: "delete_key_input",
    };
    pub const DELETE_ELEM: UpdateArg = UpdateArg {
        name: "_delete_elem",
        suffix: "delete_elem_input",
    };
    pub const DELETE_AT_PATH: UpdateArg = UpdateArg {
        name: "_delete_at_path",
        suffix: "delete_at_path_input",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootField {
    Select,
    Aggregate,
    ByPk,
    Stream,
    Insert,
    InsertOne,
    Update,
    UpdateByPk,
    UpdateMany,
    Delete,
    DeleteByPk,
}

impl RootField {
    pub const QUERY: [RootField; 3] = [RootField::Select, RootField::Aggregate, RootField::ByPk];
    pub const SUBSCRIPTION: [RootField; 4] = [
        RootField::Select,
        RootField::Aggregate,
        RootField::ByPk,
        RootField::Stream,
    ];
    pub const MUTATION: [RootField; 7] = [
        RootField::Insert,
        RootField::InsertOne,
        RootField::Update,
        RootField::UpdateByPk,
        RootField::UpdateMany,
        RootField::Delete,
        RootField::DeleteByPk,
    ];

    pub fn name(self, type_name: &str) -> String {
        match self {
            RootField::Select => type_name.to_string(),
            RootField::Aggregate => format!("{}_aggregate", type_name),
            RootField::ByPk => format!("{}_by_pk", type_name),
            RootField::Stream => format!("{}_stream", type_name),
            RootField::Insert => format!("insert_{}", type_name),
            RootField::InsertOne => format!("insert_{}_one", type_name),
            RootField::Update => format!("update_{}", type_name),
            RootField::UpdateByPk => format!("update_{}_by_pk", type_name),
            RootField::UpdateMany => format!("update_{}_many", type_name),
            RootField::Delete => format!("delete_{}", type_name),
            RootField::DeleteByPk => format!("delete_{}_by_pk", type_name),
        }
    }

    /// Only tracked tables with a primary key get `_by_pk` fields and mutations.
    pub fn applies_to(self, info: &TableInfo) -> bool {
        match self {
            RootField::Select | RootField::Aggregate | RootField::Stream => true,
            _ => info.mutable,
        }
    }
}

/// Everything the renderers and checks need to know about one table.
#[derive(Debug, Serialize)]
pub struct TableInfo {
    pub schema: &'static str,
    pub table: &'static str,
    pub type_name: &'static str,
    pub columns: &'static [ColumnInfo],
    pub relationships: &'static [RelationshipInfo],
    pub constraints: &'static [&'static str],
    pub numeric: &'static [&'static str],
    pub booleans: &'static [&'static str],
    pub jsonb: &'static [&'static str],
    pub update_args: &'static [UpdateArg],
    pub aggregate_fields: &'static [&'static str],
    pub aggregate_bool_exp_fields: &'static [&'static str],
    pub mutable: bool,
}

impl TableInfo {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn settable_columns(&self) -> impl Iterator<Item = &ColumnInfo> {
        self.columns.iter().filter(|column| !column.managed)
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnInfo> {
        self.columns.iter().filter(|column| column.kind.is_numeric())
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipInfo> {
        self.relationships.iter().find(|rel| rel.name == name)
    }

    /// `<type_name>_<suffix>`, e.g. `badma_games_bool_exp`.
    pub fn type_of(&self, suffix: &str) -> String {
        format!("{}_{}", self.type_name, suffix)
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }

    pub fn root_field(&self, field: RootField) -> String {
        field.name(self.type_name)
    }

    pub fn root_fields(&self) -> Vec<String> {
        RootField::QUERY
            .iter()
            .chain(RootField::SUBSCRIPTION.iter())
            .chain(RootField::MUTATION.iter())
            .filter(|field| field.applies_to(self))
            .map(|field| self.root_field(*field))
            .fold(Vec::new(), |mut fields, name| {
                if !fields.contains(&name) {
                    fields.push(name);
                }
                fields
            })
    }

    /// Selection set of every scalar column, e.g. `{ id created_at fen }`.
    pub fn selection(&self) -> String {
        let columns: Vec<&str> = self.columns.iter().map(|column| column.name).collect();
        format!("{{ {} }}", columns.join(" "))
    }

    /// Selection set of `<table>_aggregate_fields`.
    pub fn aggregate_selection(&self) -> String {
        let numeric = self.numeric.join(" ");
        let fields: Vec<String> = self
            .aggregate_fields
            .iter()
            .map(|field| {
                if *field == "count" {
                    field.to_string()
                } else {
                    format!("{} {{ {} }}", field, numeric)
                }
            })
            .collect();
        format!("{{ {} }}", fields.join(" "))
    }
}

/// `_and` / `_or` / `_not` combinators shared by every `*_bool_exp`.
pub trait BoolExpression: Serialize + DeserializeOwned + Default + Clone + Debug + 'static {
    fn all(expressions: Vec<Self>) -> Self;
    fn any(expressions: Vec<Self>) -> Self;
    fn negate(expression: Self) -> Self;
}

/// The read side of a table or view: what the query and subscription roots expose.
pub trait HasuraSource {
    type Row: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type BoolExp: BoolExpression;
    type OrderBy: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type SelectColumn: Serialize + DeserializeOwned + Copy + Debug + 'static;
    type AggregateFields: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type StreamCursorInput: Serialize + DeserializeOwned + Clone + Debug + 'static;

    fn info() -> &'static TableInfo;
}

/// The write side of a tracked table keyed by `id`.
pub trait HasuraTable: HasuraSource {
    type InsertInput: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type SetInput: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type IncInput: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type Updates: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type OnConflict: Serialize + DeserializeOwned + Clone + Debug + 'static;
    type PkColumns: Serialize + DeserializeOwned + Clone + Debug + 'static;

    fn pk(id: Uuid) -> Self::PkColumns;
}

/// `<table>_mutation_response`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct MutationResponse<R> {
    pub affected_rows: i64,
    #[serde(default)]
    pub returning: Vec<R>,
}

/// `<table>_aggregate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>, R: Deserialize<'de>"))]
pub struct Aggregate<A, R> {
    pub aggregate: Option<A>,
    #[serde(default)]
    pub nodes: Vec<R>,
}

/// Declares the GraphQL type family of one tracked table.
///
/// `managed` columns are filled by the server and left out of `_set_input`;
/// `numeric`, `booleans` and `jsonb` must list exactly the columns of that
/// kind. Targets of relationships are sibling modules.
macro_rules! hasura_table {
    (@jsonb []) => {
        pub const UPDATE_ARGS: &[$crate::graphql::table::UpdateArg] = &[
            $crate::graphql::table::UpdateArg::SET,
            $crate::graphql::table::UpdateArg::INC,
        ];

        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct Updates {
            #[serde(rename = "_set", default, skip_serializing_if = "Option::is_none")]
            pub set: Option<SetInput>,
            #[serde(rename = "_inc", default, skip_serializing_if = "Option::is_none")]
            pub inc: Option<IncInput>,
            #[serde(default)]
            pub r#where: BoolExp,
        }
    };
    (@jsonb [$($json:ident),+]) => {
        pub const UPDATE_ARGS: &[$crate::graphql::table::UpdateArg] = &[
            $crate::graphql::table::UpdateArg::SET,
            $crate::graphql::table::UpdateArg::INC,
            $crate::graphql::table::UpdateArg::APPEND,
            $crate::graphql::table::UpdateArg::PREPEND,
            $crate::graphql::table::UpdateArg::DELETE_KEY,
            $crate::graphql::table::UpdateArg::DELETE_ELEM,
            $crate::graphql::table::UpdateArg::DELETE_AT_PATH,
        ];

        /// Value appended to the existing jsonb value of each column.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct AppendInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $json: Option<Value>,
            )+
        }

        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct PrependInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $json: Option<Value>,
            )+
        }

        /// Top-level key removed from each column.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct DeleteKeyInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $json: Option<String>,
            )+
        }

        /// Array index removed from each column. Negative indexes count from the end.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct DeleteElemInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $json: Option<i32>,
            )+
        }

        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct DeleteAtPathInput {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $json: Option<Vec<String>>,
            )+
        }

        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct Updates {
            #[serde(rename = "_set", default, skip_serializing_if = "Option::is_none")]
            pub set: Option<SetInput>,
            #[serde(rename = "_inc", default, skip_serializing_if = "Option::is_none")]
            pub inc: Option<IncInput>,
            #[serde(rename = "_append", default, skip_serializing_if = "Option::is_none")]
            pub append: Option<AppendInput>,
            #[serde(rename = "_prepend", default, skip_serializing_if = "Option::is_none")]
            pub prepend: Option<PrependInput>,
            #[serde(rename = "_delete_key", default, skip_serializing_if = "Option::is_none")]
            pub delete_key: Option<DeleteKeyInput>,
            #[serde(rename = "_delete_elem", default, skip_serializing_if = "Option::is_none")]
            pub delete_elem: Option<DeleteElemInput>,
            #[serde(rename = "_delete_at_path", default, skip_serializing_if = "Option::is_none")]
            pub delete_at_path: Option<DeleteAtPathInput>,
            #[serde(default)]
            pub r#where: BoolExp,
        }
    };
    (@booleans []) => {
        pub const AGGREGATE_BOOL_EXP_FIELDS: &[&str] = &["count"];

        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct AggregateBoolExp {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub count: Option<AggregateBoolExpCount>,
        }
    };
    (@booleans [$($flag:ident),+]) => {
        pub const AGGREGATE_BOOL_EXP_FIELDS: &[&str] = &["bool_and", "bool_or", "count"];

        /// Boolean columns usable in `bool_and` / `bool_or`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum BoolColumn {
            $($flag,)+
        }

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct AggregateBoolExpBool {
            pub arguments: BoolColumn,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub distinct: Option<bool>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub filter: Option<Box<BoolExp>>,
            pub predicate: ComparisonExp<bool>,
        }

        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct AggregateBoolExp {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub bool_and: Option<AggregateBoolExpBool>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub bool_or: Option<AggregateBoolExpBool>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub count: Option<AggregateBoolExpCount>,
        }
    };
    (
        $(#[$attr:meta])*
        $module:ident => $row:ty {
            schema: $schema:literal,
            table: $table:literal,
            managed: { $($mcol:ident : $mty:ty),+ $(,)? },
            columns: { $($col:ident : $ty:ty),+ $(,)? },
            numeric: { $($num:ident : $nty:ty),+ $(,)? },
            booleans: [$($flag:ident),* $(,)?],
            jsonb: [$($json:ident),* $(,)?],
            objects: { $($obj:ident : $otarget:ident via $ocol:ident),* $(,)? },
            arrays: { $($arr:ident / $agg:ident : $atarget:ident via $acol:ident),* $(,)? },
            constraints: [$($constraint:ident),+ $(,)?] $(,)?
        }
    ) => {
        $(#[$attr])*
        pub mod $module {
            #![allow(non_camel_case_types)]

            use super::*;
            use $crate::graphql::comparison::ComparisonExp;
            use $crate::graphql::order::{CursorOrdering, OrderDirection};
            use $crate::graphql::scalar::Scalar;
            use $crate::graphql::table::{
                BoolExpression, ColumnInfo, HasuraSource, HasuraTable, RelationshipInfo,
                TableInfo,
            };
            use serde::{Deserialize, Serialize};
            #[allow(unused_imports)]
            use serde_json::Value;
            use uuid::Uuid;

            pub const TYPE_NAME: &str = stringify!($module);

            pub type Row = $row;

            pub const AGGREGATE_FIELDS: &[&str] = &[
                "avg", "count", "max", "min", "stddev", "stddev_pop", "stddev_samp", "sum",
                "var_pop", "var_samp", "variance",
            ];

            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub enum SelectColumn {
                $($mcol,)+
                $($col,)+
            }

            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub enum UpdateColumn {
                $($mcol,)+
                $($col,)+
            }

            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub enum Constraint {
                $($constraint,)+
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct BoolExp {
                #[serde(rename = "_and", default, skip_serializing_if = "Option::is_none")]
                pub and: Option<Vec<BoolExp>>,
                #[serde(rename = "_or", default, skip_serializing_if = "Option::is_none")]
                pub or: Option<Vec<BoolExp>>,
                #[serde(rename = "_not", default, skip_serializing_if = "Option::is_none")]
                pub not: Option<Box<BoolExp>>,
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $mcol: Option<<$mty as Scalar>::Comparison>,
                )+
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $col: Option<<$ty as Scalar>::Comparison>,
                )+
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $obj: Option<Box<super::$otarget::BoolExp>>,
                )*
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $arr: Option<Box<super::$atarget::BoolExp>>,
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $agg: Option<super::$atarget::AggregateBoolExp>,
                )*
            }

            impl BoolExp {
                pub fn by_id(id: Uuid) -> Self {
                    BoolExp {
                        id: Some(ComparisonExp::equals(id)),
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
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $mcol: Option<OrderDirection>,
                )+
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $col: Option<OrderDirection>,
                )+
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $obj: Option<Box<super::$otarget::OrderBy>>,
                )*
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $agg: Option<super::$atarget::AggregateOrderBy>,
                )*
            }

            /// Ordering by one numeric statistic of a related row set.
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct NumericOrderBy {
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $num: Option<OrderDirection>,
                )+
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct AggregateOrderBy {
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub avg: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub count: Option<OrderDirection>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub max: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub min: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub stddev: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub stddev_pop: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub stddev_samp: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub sum: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub var_pop: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub var_samp: Option<NumericOrderBy>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub variance: Option<NumericOrderBy>,
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct InsertInput {
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $mcol: Option<<$mty as Scalar>::Value>,
                )+
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $col: Option<<$ty as Scalar>::Value>,
                )+
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct SetInput {
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $col: Option<<$ty as Scalar>::Value>,
                )+
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct IncInput {
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $num: Option<$nty>,
                )+
            }

            $crate::graphql::table::hasura_table!(@jsonb [$($json),*]);

            $crate::graphql::table::hasura_table!(@booleans [$($flag),*]);

            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
            pub struct AggregateBoolExpCount {
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub arguments: Option<Vec<SelectColumn>>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub distinct: Option<bool>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub filter: Option<Box<BoolExp>>,
                pub predicate: ComparisonExp<i32>,
            }

            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
            pub struct PkColumnsInput {
                pub id: Uuid,
            }

            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
            pub struct OnConflict {
                pub constraint: Constraint,
                #[serde(default)]
                pub update_columns: Vec<UpdateColumn>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub r#where: Option<BoolExp>,
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct StreamCursorValueInput {
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $mcol: Option<<$mty as Scalar>::Value>,
                )+
                $(
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $col: Option<<$ty as Scalar>::Value>,
                )+
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct StreamCursorInput {
                pub initial_value: StreamCursorValueInput,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub ordering: Option<CursorOrdering>,
            }

            /// `avg`, `stddev*`, `var*` of every numeric column.
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct StatFields {
                $(
                    #[serde(default)]
                    pub $num: Option<f64>,
                )+
            }

            /// `max`, `min`, `sum` of every numeric column.
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct ValueFields {
                $(
                    #[serde(default)]
                    pub $num: Option<$nty>,
                )+
            }

            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct AggregateFields {
                #[serde(default)]
                pub avg: Option<StatFields>,
                pub count: i64,
                #[serde(default)]
                pub max: Option<ValueFields>,
                #[serde(default)]
                pub min: Option<ValueFields>,
                #[serde(default)]
                pub stddev: Option<StatFields>,
                #[serde(default)]
                pub stddev_pop: Option<StatFields>,
                #[serde(default)]
                pub stddev_samp: Option<StatFields>,
                #[serde(default)]
                pub sum: Option<ValueFields>,
                #[serde(default)]
                pub var_pop: Option<StatFields>,
                #[serde(default)]
                pub var_samp: Option<StatFields>,
                #[serde(default)]
                pub variance: Option<StatFields>,
            }

            pub static INFO: TableInfo = TableInfo {
                schema: $schema,
                table: $table,
                type_name: TYPE_NAME,
                columns: &[
                    $(
                        ColumnInfo::managed(
                            stringify!($mcol),
                            <$mty as Scalar>::KIND,
                            <$mty as Scalar>::NULLABLE,
                        ),
                    )+
                    $(
                        ColumnInfo::settable(
                            stringify!($col),
                            <$ty as Scalar>::KIND,
                            <$ty as Scalar>::NULLABLE,
                        ),
                    )+
                ],
                relationships: &[
                    $(
                        RelationshipInfo::object(
                            stringify!($obj),
                            super::$otarget::TYPE_NAME,
                            stringify!($ocol),
                        ),
                    )*
                    $(
                        RelationshipInfo::array(
                            stringify!($arr),
                            stringify!($agg),
                            super::$atarget::TYPE_NAME,
                            stringify!($acol),
                        ),
                    )*
                ],
                constraints: &[$(stringify!($constraint)),+],
                numeric: &[$(stringify!($num)),+],
                booleans: &[$(stringify!($flag)),*],
                jsonb: &[$(stringify!($json)),*],
                update_args: UPDATE_ARGS,
                aggregate_fields: AGGREGATE_FIELDS,
                aggregate_bool_exp_fields: AGGREGATE_BOOL_EXP_FIELDS,
                mutable: true,
            };

            /// Marker implementing the root-operation traits for this table.
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct Table;

            impl HasuraSource for Table {
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

            impl HasuraTable for Table {
                type InsertInput = InsertInput;
                type SetInput = SetInput;
                type IncInput = IncInput;
                type Updates = Updates;
                type OnConflict = OnConflict;
                type PkColumns = PkColumnsInput;

                fn pk(id: Uuid) -> PkColumnsInput {
                    PkColumnsInput { id }
                }
            }
        }
    };
}

pub(crate) use hasura_table;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_field_names_follow_hasura_conventions() {
        assert_eq!(RootField::Select.name("badma_games"), "badma_games");
        assert_eq!(RootField::InsertOne.name("users"), "insert_users_one");
        assert_eq!(RootField::UpdateMany.name("logs_diffs"), "update_logs_diffs_many");
        assert_eq!(RootField::DeleteByPk.name("accounts"), "delete_accounts_by_pk");
    }
}
