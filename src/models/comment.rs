use serde::{Deserialize, Serialize};

use super::{AdfNode, UserScheme};

/// Rich text body: an ADF document on version 3, wiki markup on version 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentBody {
    Adf(AdfNode),
    Text(String),
}

impl CommentBody {
    pub fn plain_text(&self) -> String {
        match self {
            CommentBody::Adf(node) => node.plain_text(),
            CommentBody::Text(text) => text.clone(),
        }
    }
}

impl From<AdfNode> for CommentBody {
    fn from(node: AdfNode) -> Self {
        CommentBody::Adf(node)
    }
}

impl From<&str> for CommentBody {
    fn from(text: &str) -> Self {
        CommentBody::Text(text.to_string())
    }
}

impl From<String> for CommentBody {
    fn from(text: String) -> Self {
        CommentBody::Text(text)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentPageScheme {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub comments: Vec<CommentScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentScheme {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<CommentBody>,
    #[serde(rename = "renderedBody")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_body: Option<String>,
    #[serde(rename = "updateAuthor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_author: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityScheme>,
    #[serde(rename = "jsdPublic")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsd_public: Option<bool>,
}

/// Restricts a comment or worklog to a group or project role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilityScheme {
    #[serde(rename = "type")]
    pub visibility_type: String,
    pub value: String,
}

impl VisibilityScheme {
    pub fn role(name: impl Into<String>) -> Self {
        Self {
            visibility_type: "role".to_string(),
            value: name.into(),
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self {
            visibility_type: "group".to_string(),
            value: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentPayloadScheme {
    pub body: CommentBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityScheme>,
}

impl CommentPayloadScheme {
    pub fn new(body: impl Into<CommentBody>) -> Self {
        Self {
            body: body.into(),
            visibility: None,
        }
    }

    pub fn visibility(mut self, visibility: VisibilityScheme) -> Self {
        self.visibility = Some(visibility);
        self
    }
}
