//! Commit subject collection since the release boundary.

use chrono::{DateTime, FixedOffset, TimeZone};
use git2::{Commit, Repository};

use crate::error::GitError;

/// Committer date of a commit, kept in the committer's own UTC offset.
pub fn commit_time(commit: &Commit<'_>) -> Result<DateTime<FixedOffset>, GitError> {
    let time = commit.time();
    let invalid = || GitError::InvalidTimestamp {
        hash: commit.id().to_string(),
        seconds: time.seconds(),
        offset_minutes: time.offset_minutes(),
    };

    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(invalid)?;
    offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .ok_or_else(invalid)
}

/// Collect the subject line of every commit reachable from HEAD whose
/// committer date is at or after `since`.
///
/// No author, branch, or merge filtering; the boundary is inclusive, so the
/// tagged boundary commit itself is part of the result.
pub fn subjects_since(
    repo: &Repository,
    since: DateTime<FixedOffset>,
) -> Result<Vec<String>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push_head().map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    let mut subjects = Vec::new();
    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        if commit_time(&commit)? < since {
            continue;
        }
        // Non-UTF-8 subjects contribute an empty line rather than failing the run.
        subjects.push(commit.summary().unwrap_or("").to_string());
    }

    Ok(subjects)
}
