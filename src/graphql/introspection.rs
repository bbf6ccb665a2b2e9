use crate::graphql::scalar::ScalarKind;
use crate::graphql::table::TableInfo;
use crate::models::introspection::IntrospectedColumn;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindMismatch {
    pub table: String,
    pub column: String,
    pub expected: ScalarKind,
    /// Postgres `data_type` as reported by `information_schema`.
    pub found: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullabilityMismatch {
    pub table: String,
    pub column: String,
    pub expected: bool,
    pub found: bool,
}

/// Differences between the compiled catalog and the live database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    pub missing_tables: Vec<String>,
    pub missing_columns: Vec<ColumnRef>,
    pub unexpected_columns: Vec<ColumnRef>,
    pub kind_mismatches: Vec<KindMismatch>,
    pub nullability_mismatches: Vec<NullabilityMismatch>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.missing_tables.is_empty()
            && self.missing_columns.is_empty()
            && self.unexpected_columns.is_empty()
            && self.kind_mismatches.is_empty()
            && self.nullability_mismatches.is_empty()
    }
}

/// Distinct Postgres schemas the catalog lives in.
pub fn schemas(tables: &[&TableInfo]) -> Vec<String> {
    tables
        .iter()
        .map(|info| info.schema.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Compares `tables` with the introspected columns of their schemas.
///
/// Tables present in the database but absent from the catalog are ignored.
/// Nullability is not checked for views since Postgres reports every view
/// column as nullable.
pub fn diff(tables: &[&TableInfo], columns: &[IntrospectedColumn]) -> DriftReport {
    let mut live: BTreeMap<(&str, &str), Vec<&IntrospectedColumn>> = BTreeMap::new();
    for column in columns {
        live.entry((column.table_schema.as_str(), column.table_name.as_str()))
            .or_default()
            .push(column);
    }

    let mut report = DriftReport::default();
    for info in tables {
        let table = info.qualified_name();
        let live_columns = match live.get(&(info.schema, info.table)) {
            Some(live_columns) => live_columns,
            None => {
                report.missing_tables.push(table);
                continue;
            }
        };

        for expected in info.columns {
            let found = match live_columns.iter().find(|c| c.column_name == expected.name) {
                Some(found) => found,
                None => {
                    report.missing_columns.push(ColumnRef {
                        table: table.clone(),
                        column: expected.name.to_string(),
                    });
                    continue;
                }
            };
            if ScalarKind::from_postgres(&found.data_type) != Some(expected.kind) {
                report.kind_mismatches.push(KindMismatch {
                    table: table.clone(),
                    column: expected.name.to_string(),
                    expected: expected.kind,
                    found: found.data_type.clone(),
                });
            }
            if info.mutable && found.is_nullable != expected.nullable {
                report.nullability_mismatches.push(NullabilityMismatch {
                    table: table.clone(),
                    column: expected.name.to_string(),
                    expected: expected.nullable,
                    found: found.is_nullable,
                });
            }
        }

        for found in live_columns {
            if info.column(&found.column_name).is_none() {
                report.unexpected_columns.push(ColumnRef {
                    table: table.clone(),
                    column: found.column_name.clone(),
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::hasyx;
    use crate::graphql::tables::badma_clubs;

    fn column(table: &str, name: &str, data_type: &str, nullable: bool) -> IntrospectedColumn {
        let (schema, table) = table.split_once('.').unwrap();
        IntrospectedColumn {
            table_schema: schema.to_string(),
            table_name: table.to_string(),
            column_name: name.to_string(),
            data_type: data_type.to_string(),
            is_nullable: nullable,
        }
    }

    fn live_clubs() -> Vec<IntrospectedColumn> {
        vec![
            column("badma.clubs", "id", "uuid", false),
            column("badma.clubs", "created_at", "bigint", false),
            column("badma.clubs", "user_id", "uuid", false),
            column("badma.clubs", "title", "text", false),
            column("badma.clubs", "updated_at", "bigint", false),
        ]
    }

    #[test]
    fn matching_schema_is_clean() {
        let report = diff(&[&badma_clubs::INFO], &live_clubs());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn drift_is_reported_per_column() {
        let mut live = live_clubs();
        live.retain(|c| c.column_name != "title");
        live.push(column("badma.clubs", "motto", "text", true));
        live[2] = column("badma.clubs", "user_id", "text", true);

        let report = diff(&[&badma_clubs::INFO], &live);
        assert_eq!(
            report.missing_columns,
            vec![ColumnRef {
                table: "badma.clubs".to_string(),
                column: "title".to_string()
            }]
        );
        assert_eq!(report.unexpected_columns[0].column, "motto");
        assert_eq!(report.kind_mismatches[0].expected, ScalarKind::Uuid);
        assert_eq!(report.kind_mismatches[0].found, "text");
        assert_eq!(report.nullability_mismatches.len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn missing_tables_and_views() {
        let live = vec![
            column("public.hasyx", "id", "uuid", true),
            column("public.hasyx", "schema", "text", true),
            column("public.hasyx", "table", "text", true),
        ];
        let report = diff(&[&badma_clubs::INFO, &hasyx::INFO], &live);
        assert_eq!(report.missing_tables, vec!["badma.clubs".to_string()]);
        assert!(report.nullability_mismatches.is_empty());
        assert_eq!(schemas(&[&badma_clubs::INFO, &hasyx::INFO]), vec!["badma", "public"]);
    }
}
