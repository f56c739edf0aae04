//! tagnotes - grouped release notes from git history and a Jira-style tracker.
//!
//! # Overview
//!
//! tagnotes locates the release boundary tag, collects commit subjects since
//! its timestamp, extracts issue keys from them, fetches each issue's type
//! and summary over one authenticated tracker session, and prints the result
//! grouped by issue type as markdown or HTML.

pub mod config;
pub mod error;
pub mod git;
pub mod issues;
pub mod notes;
pub mod tracker;

// Re-export commonly used types
pub use config::Settings;
pub use error::{ExtractError, GitError, TrackerError};
pub use git::tags::{TagRef, TagStrategy};
pub use issues::{IssueGroups, IssueRecord};
pub use tracker::{Credentials, IssueLookup, TrackerSession};
