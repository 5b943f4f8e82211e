//! Atlassian Document Format.
//!
//! Version 3 of the REST API represents rich text (comment bodies, worklog
//! comments, descriptions) as an ADF tree instead of wiki markup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<AdfNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<AdfMark>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfMark {
    #[serde(rename = "type")]
    pub mark_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<serde_json::Value>,
}

impl AdfNode {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    /// Root `doc` node. Jira only accepts version 1.
    pub fn doc() -> Self {
        Self {
            version: Some(1),
            ..Self::new("doc")
        }
    }

    pub fn paragraph() -> Self {
        Self::new("paragraph")
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new("text")
        }
    }

    /// A `doc` with one paragraph per line of `text`.
    pub fn from_plain_text(text: &str) -> Self {
        let mut doc = Self::doc();
        for line in text.lines() {
            let mut paragraph = Self::paragraph();
            if !line.is_empty() {
                paragraph.append(Self::text(line));
            }
            doc.append(paragraph);
        }
        doc
    }

    pub fn with_content(mut self, node: AdfNode) -> Self {
        self.content.push(node);
        self
    }

    pub fn with_mark(mut self, mark_type: impl Into<String>) -> Self {
        self.marks.push(AdfMark {
            mark_type: mark_type.into(),
            attrs: None,
        });
        self
    }

    pub fn append(&mut self, node: AdfNode) {
        self.content.push(node);
    }

    /// Flattens the tree back into text, one line per block node.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.trim_end_matches('\n').to_string()
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.content {
            child.collect_text(out);
        }
        if matches!(
            self.node_type.as_str(),
            "paragraph" | "heading" | "codeBlock" | "listItem"
        ) {
            out.push('\n');
        }
    }
}
