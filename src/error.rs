//! Error types for tagnotes modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Commit {hash} has invalid timestamp (seconds={seconds}, offset={offset_minutes}m)")]
    InvalidTimestamp {
        hash: String,
        seconds: i64,
        offset_minutes: i32,
    },

    #[error(
        "Requested the tag {requested} position(s) behind the newest tag, but only {available} usable tag(s) exist"
    )]
    NotEnoughTags { requested: usize, available: usize },
}

/// Errors from issue key extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid issue prefix '{0}': only ASCII letters are allowed")]
    InvalidPrefix(String),

    #[error("Failed to compile issue key pattern: {0}")]
    BadPattern(#[source] regex_lite::Error),
}

/// Errors from the issue tracker client.
///
/// Everything here is fatal when raised during credential resolution or
/// session login. During per-issue collection the same errors are caught,
/// logged, and degrade that one issue to type "Unknown".
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("No username provided. Set JIRA_USER or enter one at the prompt")]
    MissingUsername,

    #[error("No password provided. Set JIRA_PASS or enter one at the prompt")]
    MissingPassword,

    #[error("Failed to read credentials from the terminal: {0}")]
    PromptFailed(#[source] dialoguer::Error),

    #[error("Failed to construct HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Tracker rejected credentials for user '{username}' (status {status})")]
    AuthenticationFailed { username: String, status: u16 },

    #[error("Tracker request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Issue {key} not found in tracker")]
    IssueNotFound { key: String },

    #[error("Tracker returned status {status} for {context}")]
    UnexpectedStatus { context: String, status: u16 },

    #[error("Could not decode tracker response: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}
