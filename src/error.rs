use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    // Required-parameter sentinels. Returned before any request is built.
    #[error("no version provided")]
    NoVersionProvided,

    #[error("no issue key provided")]
    NoIssueKeyOrId,

    #[error("no comment id provided")]
    NoCommentId,

    #[error("no worklog id provided")]
    NoWorklogId,

    #[error("no worklog ids provided")]
    NoWorklogIds,

    #[error("no filter id provided")]
    NoFilterId,

    #[error("no share scope provided")]
    NoShareScope,

    #[error("no share permission id provided")]
    NoPermissionId,

    #[error("no property key provided")]
    NoPropertyKey,

    #[error("no permission scheme id provided")]
    NoPermissionSchemeId,

    #[error("no permission grant id provided")]
    NoPermissionGrantId,

    #[error("no project category id provided")]
    NoProjectCategoryId,

    #[error("no workflow scheme id provided")]
    NoWorkflowSchemeId,

    #[error("no project id or key provided")]
    NoProjectIdOrKey,

    #[error("no dashboard id provided")]
    NoDashboardId,

    #[error("no application role key provided")]
    NoApplicationRoleKey,

    #[error("no account id provided")]
    NoAccountId,

    #[error("no transition id provided")]
    NoTransitionId,

    #[error("no priority id provided")]
    NoPriorityId,

    #[error("no resolution id provided")]
    NoResolutionId,

    #[error("no jql provided")]
    NoJql,

    #[error("no permission keys provided")]
    NoPermissionKeys,

    #[error("no watcher account id provided")]
    NoWatcherAccountId,
}

impl Error {
    /// Whether this error was produced by local parameter validation rather
    /// than by the transport or the server.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Error::NoVersionProvided
                | Error::NoIssueKeyOrId
                | Error::NoCommentId
                | Error::NoWorklogId
                | Error::NoWorklogIds
                | Error::NoFilterId
                | Error::NoShareScope
                | Error::NoPermissionId
                | Error::NoPropertyKey
                | Error::NoPermissionSchemeId
                | Error::NoPermissionGrantId
                | Error::NoProjectCategoryId
                | Error::NoWorkflowSchemeId
                | Error::NoProjectIdOrKey
                | Error::NoDashboardId
                | Error::NoApplicationRoleKey
                | Error::NoAccountId
                | Error::NoTransitionId
                | Error::NoPriorityId
                | Error::NoResolutionId
                | Error::NoJql
                | Error::NoPermissionKeys
                | Error::NoWatcherAccountId
        )
    }

    /// HTTP status carried by a server-side failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiError { status, .. } => Some(*status),
            Error::NotFound(_) => Some(404),
            Error::RateLimitExceeded => Some(429),
            Error::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
