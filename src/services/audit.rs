use std::sync::Arc;

use crate::connector::{Connector, ResponseScheme};
use crate::datetime::format_jira_date;
use crate::error::Result;
use crate::models::{AuditRecordGetOptions, AuditRecordPageScheme};
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct AuditRecordService {
    base: ServiceBase,
}

impl AuditRecordService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// Lists audit records, newest first.
    ///
    /// The filter text goes out under an empty key, so a filter of `summary`
    /// produces `?=summary&...`.
    pub async fn get(
        &self,
        options: &AuditRecordGetOptions,
        offset: u32,
        limit: u32,
    ) -> Result<(AuditRecordPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add("offset", offset)
            .add("limit", limit)
            .add_non_empty("", &options.filter)
            .add_opt("from", options.from.as_ref().map(format_jira_date))
            .add_opt("to", options.to.as_ref().map(format_jira_date));

        let endpoint = self.base.endpoint("auditing/record", &params);
        self.base.get(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;
    use crate::error::Error;
    use chrono::NaiveDate;
    use serde_json::json;

    fn records() -> serde_json::Value {
        json!({
            "offset": 2000,
            "limit": 1000,
            "total": 1,
            "records": [{
                "id": 1,
                "summary": "User created",
                "remoteAddress": "192.168.1.1",
                "authorKey": "administrator",
                "created": "2014-03-19T18:45:42.967+0000",
                "category": "user management",
                "eventSource": "Jira Connect Plugin",
                "objectItem": {
                    "id": "user",
                    "name": "user",
                    "typeName": "USER",
                    "parentId": "1",
                    "parentName": "Jira Internal Directory"
                },
                "changedValues": [{
                    "fieldName": "email",
                    "changedFrom": "user@atlassian.com",
                    "changedTo": "newuser@atlassian.com"
                }]
            }]
        })
    }

    #[tokio::test]
    async fn test_get_builds_documented_endpoint() {
        // Given
        let mock = MockConnector::ok(records());
        let service = AuditRecordService::new(mock.clone(), "2").unwrap();
        let options = AuditRecordGetOptions::new()
            .filter("summary")
            .from_date(NaiveDate::from_ymd_opt(2015, 11, 17).unwrap())
            .to_date(NaiveDate::from_ymd_opt(2019, 11, 17).unwrap());

        // When
        let (page, response) = service.get(&options, 2000, 1000).await.unwrap();

        // Then
        assert_eq!(
            mock.last().endpoint,
            "rest/api/2/auditing/record?=summary&from=2015-11-17&limit=1000&offset=2000&to=2019-11-17"
        );
        assert_eq!(response.code, 200);
        assert_eq!(page.total, 1);
        assert_eq!(page.records[0].summary.as_deref(), Some("User created"));
    }

    #[tokio::test]
    async fn test_get_without_options_on_v3() {
        let mock = MockConnector::ok(records());
        let service = AuditRecordService::new(mock.clone(), "3").unwrap();

        service
            .get(&AuditRecordGetOptions::new(), 0, 50)
            .await
            .unwrap();

        assert_eq!(
            mock.last().endpoint,
            "rest/api/3/auditing/record?limit=50&offset=0"
        );
    }

    #[test]
    fn test_new_requires_version() {
        let result = AuditRecordService::new(MockConnector::ok(json!({})), "");
        assert!(matches!(result, Err(Error::NoVersionProvided)));
    }
}
