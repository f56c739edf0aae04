//! Run configuration and defaults.
//!
//! Everything the pipeline needs beyond credentials lives in [`Settings`],
//! built once from the CLI in `main` and passed down explicitly.

/// Base URL of the Jira instance queried for issue details.
pub const DEFAULT_TRACKER_URL: &str = "https://jira.example.com";

/// Issue key prefix scanned for in commit subjects.
pub const DEFAULT_ISSUE_PREFIX: &str = "TN";

/// How many tags back the release boundary sits by default.
pub const DEFAULT_TAGS_BACK: usize = 1;

/// Resolved configuration for one release-notes run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Boundary tag position behind the newest tag.
    pub tags_back: usize,
    /// Tracker base URL, without a trailing slash.
    pub tracker_url: String,
    /// Issue key prefix (ASCII letters only, matched case-insensitively).
    pub issue_prefix: String,
}

impl Settings {
    pub fn new(tags_back: usize, tracker_url: &str, issue_prefix: &str) -> Self {
        Self {
            tags_back,
            tracker_url: tracker_url.trim_end_matches('/').to_string(),
            issue_prefix: issue_prefix.to_string(),
        }
    }
}
