use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{CommentPageScheme, CommentPayloadScheme, CommentScheme};
use crate::query::QueryParams;

use super::ServiceBase;

/// Issue comments.
///
/// Bodies are plain text or wiki markup on version 2 and ADF documents on
/// version 3; [`CommentPayloadScheme`] accepts either.
#[derive(Clone)]
pub struct CommentService {
    base: ServiceBase,
}

impl CommentService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(
        &self,
        issue_key_or_id: &str,
        order_by: &str,
        expand: &[String],
        start_at: u32,
        max_results: u32,
    ) -> Result<(CommentPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_non_empty("orderBy", order_by)
            .add_joined("expand", expand);

        let endpoint = self.comment_endpoint(issue_key_or_id, None, &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn get(
        &self,
        issue_key_or_id: &str,
        comment_id: &str,
    ) -> Result<(CommentScheme, ResponseScheme)> {
        let endpoint =
            self.comment_endpoint(issue_key_or_id, Some(comment_id), &QueryParams::new())?;
        self.base.get(&endpoint).await
    }

    pub async fn add(
        &self,
        issue_key_or_id: &str,
        payload: &CommentPayloadScheme,
        expand: &[String],
    ) -> Result<(CommentScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.comment_endpoint(issue_key_or_id, None, &params)?;
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn update(
        &self,
        issue_key_or_id: &str,
        comment_id: &str,
        payload: &CommentPayloadScheme,
        expand: &[String],
    ) -> Result<(CommentScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.comment_endpoint(issue_key_or_id, Some(comment_id), &params)?;
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    pub async fn delete(&self, issue_key_or_id: &str, comment_id: &str) -> Result<ResponseScheme> {
        let endpoint =
            self.comment_endpoint(issue_key_or_id, Some(comment_id), &QueryParams::new())?;
        self.base.delete(&endpoint).await
    }

    fn comment_endpoint(
        &self,
        issue_key_or_id: &str,
        comment_id: Option<&str>,
        params: &QueryParams,
    ) -> Result<String> {
        if issue_key_or_id.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let path = match comment_id {
            Some("") => return Err(Error::NoCommentId),
            Some(id) => format!("issue/{}/comment/{}", issue_key_or_id, id),
            None => format!("issue/{}/comment", issue_key_or_id),
        };
        Ok(self.base.endpoint(&path, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;
    use crate::models::{AdfNode, CommentBody, VisibilityScheme};
    use serde_json::json;

    fn adf_comment() -> serde_json::Value {
        json!({
            "id": "10000",
            "self": "https://example.atlassian.net/rest/api/3/issue/10010/comment/10000",
            "author": {"accountId": "5b10a2844c20165700ede21g", "displayName": "Mia Krystof"},
            "body": {
                "type": "doc",
                "version": 1,
                "content": [{
                    "type": "paragraph",
                    "content": [{"type": "text", "text": "Lorem ipsum dolor sit amet"}]
                }]
            },
            "created": "2021-01-17T12:34:00.000+0000",
            "visibility": {"type": "role", "value": "Administrators"}
        })
    }

    #[tokio::test]
    async fn test_gets_v3() {
        // Given
        let mock = MockConnector::ok(json!({
            "startAt": 0,
            "maxResults": 50,
            "total": 1,
            "comments": [adf_comment()]
        }));
        let service = CommentService::new(mock.clone(), "3").unwrap();

        // When
        let (page, _) = service
            .gets("KP-2", "-created", &["renderedBody".to_string()], 0, 50)
            .await
            .unwrap();

        // Then
        assert_eq!(
            mock.last().endpoint,
            "rest/api/3/issue/KP-2/comment?expand=renderedBody&maxResults=50&orderBy=-created&startAt=0"
        );
        let body = page.comments[0].body.as_ref().unwrap();
        assert!(matches!(body, CommentBody::Adf(_)));
        assert_eq!(body.plain_text(), "Lorem ipsum dolor sit amet");
    }

    #[tokio::test]
    async fn test_get_v2_plain_text_body() {
        let mock = MockConnector::ok(json!({
            "id": "10000",
            "body": "h1. Release notes",
            "created": "2021-01-17T12:34:00.000+0000"
        }));
        let service = CommentService::new(mock.clone(), "2").unwrap();

        let (comment, _) = service.get("KP-2", "10000").await.unwrap();

        assert_eq!(mock.last().endpoint, "rest/api/2/issue/KP-2/comment/10000");
        assert_eq!(
            comment.body,
            Some(CommentBody::Text("h1. Release notes".to_string()))
        );
    }

    #[tokio::test]
    async fn test_add_adf_comment() {
        let mock = MockConnector::ok(adf_comment());
        let service = CommentService::new(mock.clone(), "3").unwrap();
        let payload = CommentPayloadScheme::new(AdfNode::from_plain_text("Looks good"))
            .visibility(VisibilityScheme::role("Administrators"));

        let (comment, _) = service.add("KP-2", &payload, &[]).await.unwrap();

        let call = mock.last();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.endpoint, "rest/api/3/issue/KP-2/comment");
        let sent = call.body.unwrap();
        assert_eq!(sent["body"]["type"], "doc");
        assert_eq!(sent["visibility"]["type"], "role");
        assert_eq!(comment.id, "10000");
    }

    #[tokio::test]
    async fn test_update_plain_text_comment() {
        let mock = MockConnector::ok(json!({"id": "10000", "body": "Edited"}));
        let service = CommentService::new(mock.clone(), "2").unwrap();
        let payload = CommentPayloadScheme::new("Edited");

        service
            .update("KP-2", "10000", &payload, &[])
            .await
            .unwrap();

        let call = mock.last();
        assert_eq!(call.method, Method::PUT);
        assert_eq!(call.body.unwrap(), json!({"body": "Edited"}));
    }

    #[tokio::test]
    async fn test_delete_and_sentinels() {
        let mock = MockConnector::no_content();
        let service = CommentService::new(mock.clone(), "3").unwrap();

        assert!(matches!(
            service.delete("KP-2", "").await,
            Err(Error::NoCommentId)
        ));
        assert!(matches!(
            service.get("", "10000").await,
            Err(Error::NoIssueKeyOrId)
        ));
        assert!(mock.calls().is_empty());

        service.delete("KP-2", "10000").await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
    }
}
