//! Jira REST client and sequential issue collection.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::TrackerError;
use crate::issues::extract::truncate_key;
use crate::issues::group::{IssueRecord, UNKNOWN_TYPE};

use super::auth::Credentials;

/// Type name and summary of one tracked issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetails {
    pub type_name: String,
    pub summary: String,
}

/// Issue payload subset of the Jira REST v2 API.
#[derive(Debug, Deserialize)]
struct IssueResponse {
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    summary: String,
    issuetype: IssueTypeField,
}

#[derive(Debug, Deserialize)]
struct IssueTypeField {
    name: String,
}

/// Lookup seam over the tracker.
///
/// This abstraction allows mocking issue lookups in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueLookup: Send + Sync {
    /// Fetch type name and summary for a single issue key.
    async fn fetch_issue(&self, key: &str) -> Result<IssueDetails, TrackerError>;
}

/// One authenticated tracker session, reused for every lookup in a run.
#[derive(Debug)]
pub struct TrackerSession {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl TrackerSession {
    /// Authenticate against the tracker and return a reusable session.
    ///
    /// Credentials are verified once against the current-user endpoint so a
    /// bad password fails the run up front instead of marking every issue
    /// "Unknown". No request timeout is configured.
    pub async fn login(base_url: &str, credentials: Credentials) -> Result<Self, TrackerError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(TrackerError::ClientBuild)?;
        let session = Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        };

        let url = format!("{}/rest/api/2/myself", session.base_url);
        let response = session
            .http
            .get(&url)
            .basic_auth(
                &session.credentials.username,
                Some(&session.credentials.password),
            )
            .send()
            .await
            .map_err(TrackerError::RequestFailed)?;

        match response.status() {
            status if status.is_success() => {
                debug!(user = %session.credentials.username, "Tracker session established");
                Ok(session)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(TrackerError::AuthenticationFailed {
                    username: session.credentials.username.clone(),
                    status: response.status().as_u16(),
                })
            }
            status => Err(TrackerError::UnexpectedStatus {
                context: "session check".to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

#[async_trait]
impl IssueLookup for TrackerSession {
    async fn fetch_issue(&self, key: &str) -> Result<IssueDetails, TrackerError> {
        let url = format!("{}/rest/api/2/issue/{}", self.base_url, key);
        let response = self
            .http
            .get(&url)
            .query(&[("fields", "issuetype,summary")])
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(TrackerError::RequestFailed)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(TrackerError::IssueNotFound {
                key: key.to_string(),
            }),
            status if !status.is_success() => Err(TrackerError::UnexpectedStatus {
                context: format!("issue {key}"),
                status: status.as_u16(),
            }),
            _ => {
                let body: IssueResponse = response
                    .json()
                    .await
                    .map_err(TrackerError::InvalidResponse)?;
                Ok(IssueDetails {
                    type_name: body.fields.issuetype.name,
                    summary: body.fields.summary,
                })
            }
        }
    }
}

/// Fetch details for every key, strictly one at a time.
///
/// Keys are normalized to their truncated lookup form first. A failed lookup
/// degrades that single issue to type "Unknown" with no summary and the run
/// continues; nothing is retried or escalated.
pub async fn collect_issue_records<L: IssueLookup>(
    lookup: &L,
    raw_keys: &[String],
) -> Vec<IssueRecord> {
    let mut records = Vec::with_capacity(raw_keys.len());
    for raw in raw_keys {
        let key = truncate_key(raw).to_string();
        println!("[INFO] fetching {key}");
        match lookup.fetch_issue(&key).await {
            Ok(details) => records.push(IssueRecord {
                key,
                type_name: details.type_name,
                summary: Some(details.summary),
            }),
            Err(e) => {
                eprintln!("Warning: could not fetch {key}: {e}. Marking as Unknown.");
                records.push(IssueRecord {
                    key,
                    type_name: UNKNOWN_TYPE.to_string(),
                    summary: None,
                });
            }
        }
    }
    records
}
