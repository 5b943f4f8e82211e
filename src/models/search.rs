use serde::{Deserialize, Serialize};

use super::IssueScheme;
use crate::query::QueryParams;

/// Paging and shaping options shared by both search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchParams {
    #[serde(rename = "startAt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u32>,

    #[serde(rename = "maxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<Vec<String>>,

    #[serde(rename = "validateQuery")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_query: Option<bool>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_at(mut self, start_at: u32) -> Self {
        self.start_at = Some(start_at);
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = Some(expand);
        self
    }

    pub fn validate_query(mut self, validate: bool) -> Self {
        self.validate_query = Some(validate);
        self
    }

    pub(crate) fn to_params(&self, jql: &str) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .add("jql", jql)
            .add_opt("startAt", self.start_at)
            .add_opt("maxResults", self.max_results)
            .add_opt("validateQuery", self.validate_query);
        if let Some(fields) = &self.fields {
            params.add_joined("fields", fields);
        }
        if let Some(expand) = &self.expand {
            params.add_joined("expand", expand);
        }
        params
    }
}

/// Request body for `POST search`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchPayloadScheme<'a> {
    pub jql: &'a str,
    #[serde(flatten)]
    pub params: &'a SearchParams,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueSearchScheme {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,

    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,

    #[serde(default)]
    pub total: u32,

    #[serde(default)]
    pub issues: Vec<IssueScheme>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,

    #[serde(rename = "warningMessages")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warning_messages: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

impl IssueSearchScheme {
    /// Offset of the next page, or `None` once every issue has been seen.
    pub fn next_start_at(&self) -> Option<u32> {
        if self.issues.is_empty() {
            return None;
        }

        let next = u32::try_from(self.issues.len())
            .ok()
            .and_then(|n| self.start_at.checked_add(n))?;
        if next >= self.total { None } else { Some(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_params_serialization() {
        let params = SearchParams::new().start_at(10).max_results(25);

        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["startAt"], 10);
        assert_eq!(json["maxResults"], 25);
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_search_payload_flattens_params() {
        let params = SearchParams::new()
            .max_results(50)
            .fields(vec!["summary".to_string(), "status".to_string()])
            .validate_query(true);
        let payload = SearchPayloadScheme {
            jql: "project = KP",
            params: &params,
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            json!({
                "jql": "project = KP",
                "maxResults": 50,
                "fields": ["summary", "status"],
                "validateQuery": true
            })
        );
    }

    #[test]
    fn test_search_params_to_query() {
        let params = SearchParams::new()
            .start_at(0)
            .max_results(50)
            .expand(vec!["changelog".to_string()]);

        assert_eq!(
            params.to_params("project = KP").encode(),
            "expand=changelog&jql=project+%3D+KP&maxResults=50&startAt=0"
        );
    }

    #[test]
    fn test_search_result_deserialization() {
        let json_data = json!({
            "expand": "names,schema",
            "startAt": 0,
            "maxResults": 1,
            "total": 3,
            "issues": [
                {
                    "id": "10000",
                    "key": "KP-1",
                    "self": "https://example.atlassian.net/rest/api/3/issue/10000",
                    "fields": {
                        "summary": "Test Issue",
                        "status": {
                            "id": "1",
                            "name": "To Do",
                            "statusCategory": {"id": 2, "key": "new", "name": "To Do"}
                        },
                        "created": "2024-01-01T00:00:00.000+0000"
                    }
                }
            ]
        });

        let result: IssueSearchScheme = serde_json::from_value(json_data).unwrap();

        assert_eq!(result.total, 3);
        assert_eq!(result.issues[0].key, "KP-1");
        assert_eq!(result.next_start_at(), Some(1));
    }

    #[test]
    fn test_next_start_at_on_last_page() {
        let result = IssueSearchScheme {
            start_at: 0,
            max_results: 50,
            total: 0,
            ..Default::default()
        };

        assert_eq!(result.next_start_at(), None);
    }

    #[test]
    fn test_next_start_at_stops_at_offset_limit() {
        // Given: a page whose offset is already at the top of the range
        let json_data = json!({
            "startAt": u32::MAX,
            "maxResults": 50,
            "total": u32::MAX,
            "issues": [{"id": "10000", "key": "KP-1"}]
        });
        let result: IssueSearchScheme = serde_json::from_value(json_data).unwrap();

        // When / Then
        assert_eq!(result.next_start_at(), None);
    }
}
