use diesel::sql_types::{Bool, Text};
use diesel::QueryableByName;
use serde::{Deserialize, Serialize};

/// One row of `information_schema.columns`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, QueryableByName)]
pub struct IntrospectedColumn {
    #[diesel(sql_type = Text)]
    pub table_schema: String,
    #[diesel(sql_type = Text)]
    pub table_name: String,
    #[diesel(sql_type = Text)]
    pub column_name: String,
    #[diesel(sql_type = Text)]
    pub data_type: String,
    #[diesel(sql_type = Bool)]
    pub is_nullable: bool,
}
