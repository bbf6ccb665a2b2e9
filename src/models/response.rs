use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        StatusResponse {
            status: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        StatusResponse {
            status: "Failed".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        DataResponse {
            status: "Success".to_string(),
            data,
        }
    }
}

/// Catalog entry as exposed by `/api/schema/tables`.
#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub schema: &'static str,
    pub table: &'static str,
    #[serde(rename = "typeName")]
    pub type_name: &'static str,
    #[serde(rename = "rootFields")]
    pub root_fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelopes_use_capitalized_statuses() {
        assert_eq!(
            serde_json::to_value(StatusResponse::success("ok")).unwrap(),
            json!({ "status": "Success", "message": "ok" })
        );
        assert_eq!(StatusResponse::failed("no").status, "Failed");
        assert_eq!(
            serde_json::to_value(DataResponse::success(vec![1, 2])).unwrap(),
            json!({ "status": "Success", "data": [1, 2] })
        );
    }
}
