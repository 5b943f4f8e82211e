use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommentBody, EntityPropertyScheme, UserScheme, VisibilityScheme};
use crate::datetime::format_jira_datetime;
use crate::query::QueryParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorklogPageScheme {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub worklogs: Vec<WorklogScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorklogScheme {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserScheme>,
    #[serde(rename = "updateAuthor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_author: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(rename = "timeSpent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(rename = "timeSpentSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<u64>,
    #[serde(rename = "issueId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityPropertyScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorklogPayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(rename = "timeSpent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(rename = "timeSpentSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<u64>,
}

impl WorklogPayloadScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(mut self, comment: impl Into<CommentBody>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn visibility(mut self, visibility: VisibilityScheme) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn started(mut self, started: DateTime<Utc>) -> Self {
        self.started = Some(format_jira_datetime(&started));
        self
    }

    /// Duration in Jira notation, e.g. `3h 20m`.
    pub fn time_spent(mut self, time_spent: impl Into<String>) -> Self {
        self.time_spent = Some(time_spent.into());
        self
    }

    pub fn time_spent_seconds(mut self, seconds: u64) -> Self {
        self.time_spent_seconds = Some(seconds);
        self
    }
}

/// Query options shared by the worklog add, update and delete calls.
#[derive(Debug, Clone, Default)]
pub struct WorklogOptions {
    pub notify: Option<bool>,
    /// One of `new`, `leave`, `manual` or `auto`.
    pub adjust_estimate: Option<String>,
    pub new_estimate: Option<String>,
    pub reduce_by: Option<String>,
    /// Only honoured on delete, as `increaseBy`.
    pub increase_by: Option<String>,
    pub expand: Vec<String>,
    pub override_editable_flag: Option<bool>,
}

impl WorklogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(mut self, notify: bool) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn adjust_estimate(mut self, mode: impl Into<String>) -> Self {
        self.adjust_estimate = Some(mode.into());
        self
    }

    pub fn new_estimate(mut self, estimate: impl Into<String>) -> Self {
        self.new_estimate = Some(estimate.into());
        self
    }

    pub fn reduce_by(mut self, reduce_by: impl Into<String>) -> Self {
        self.reduce_by = Some(reduce_by.into());
        self
    }

    pub fn increase_by(mut self, increase_by: impl Into<String>) -> Self {
        self.increase_by = Some(increase_by.into());
        self
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }

    pub fn override_editable_flag(mut self, flag: bool) -> Self {
        self.override_editable_flag = Some(flag);
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .add_opt("notifyUsers", self.notify)
            .add_opt("adjustEstimate", self.adjust_estimate.as_deref())
            .add_opt("newEstimate", self.new_estimate.as_deref())
            .add_opt("reduceBy", self.reduce_by.as_deref())
            .add_opt("increaseBy", self.increase_by.as_deref())
            .add_joined("expand", &self.expand)
            .add_opt("overrideEditableFlag", self.override_editable_flag);
        params
    }
}

/// Page of worklog ids changed since a given time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangedWorklogPageScheme {
    #[serde(default)]
    pub values: Vec<ChangedWorklogScheme>,
    #[serde(default)]
    pub since: i64,
    #[serde(default)]
    pub until: i64,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "nextPage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(rename = "lastPage")]
    #[serde(default)]
    pub last_page: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangedWorklogScheme {
    #[serde(rename = "worklogId")]
    pub worklog_id: u64,
    #[serde(rename = "updatedTime")]
    pub updated_time: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityPropertyScheme>,
}
