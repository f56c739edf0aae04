//! Issue tracker client: credential resolution, one authenticated session,
//! and strictly sequential per-issue lookups.

pub mod auth;
pub mod client;

pub use auth::{Credentials, resolve_credentials};
pub use client::{IssueDetails, IssueLookup, TrackerSession, collect_issue_records};
