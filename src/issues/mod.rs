//! Issue key extraction and grouping.

pub mod extract;
pub mod group;

pub use extract::{extract_issue_keys, truncate_key};
pub use group::{IssueGroups, IssueRecord, UNKNOWN_TYPE};
