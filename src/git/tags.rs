//! Tag enumeration and release boundary selection.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use git2::{Oid, Repository};
use tracing::{debug, warn};

use crate::error::GitError;

use super::commits::commit_time;

/// A resolved tag with the committer date of its target commit.
///
/// Immutable once resolved; produced here, consumed by the commit collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// How candidate tags are discovered.
///
/// Both strategies agree on well-formed repositories. `Ref` is the default;
/// `Log` only sees tags on commits reachable from HEAD and exists for
/// repository shapes where ref enumeration picks the wrong tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStrategy {
    Ref,
    Log,
}

/// Locate the release boundary tag.
///
/// Candidate tags are ordered by target-commit committer date descending and
/// the boundary is the tag `tags_back` positions behind the newest: with
/// three tags, `tags_back = 2` selects the oldest of the three.
pub fn locate_boundary_tag(
    repo: &Repository,
    tags_back: usize,
    strategy: TagStrategy,
) -> Result<TagRef, GitError> {
    let tags = match strategy {
        TagStrategy::Ref => tags_by_ref(repo)?,
        TagStrategy::Log => tags_by_log(repo)?,
    };

    let available = tags.len();
    tags.into_iter()
        .nth(tags_back)
        .ok_or(GitError::NotEnoughTags {
            requested: tags_back,
            available,
        })
}

/// All tags as (name, target commit OID) pairs, annotated tags peeled.
fn tag_targets(repo: &Repository) -> Result<Vec<(String, Oid)>, GitError> {
    let mut tags = Vec::new();

    repo.tag_foreach(|oid, name_bytes| {
        if let Ok(name_str) = std::str::from_utf8(name_bytes) {
            let name = name_str
                .strip_prefix("refs/tags/")
                .unwrap_or(name_str)
                .to_string();

            // Annotated tags point at a tag object; peel to the commit.
            let target = match repo.find_tag(oid) {
                Ok(tag_obj) => tag_obj.target_id(),
                Err(e) => {
                    debug!(
                        tag = %name,
                        error = %e,
                        "Could not resolve annotated tag, using raw OID. \
                         This is normal for lightweight tags."
                    );
                    oid
                }
            };

            tags.push((name, target));
        } else {
            warn!("Skipping tag with OID {} - name is not valid UTF-8", oid);
        }
        true // Continue iteration
    })
    .map_err(GitError::RevwalkError)?;

    Ok(tags)
}

/// Ref strategy: enumerate refs/tags and sort by target commit date.
fn tags_by_ref(repo: &Repository) -> Result<Vec<TagRef>, GitError> {
    let mut tags = Vec::new();

    for (name, target) in tag_targets(repo)? {
        let Ok(commit) = repo.find_commit(target) else {
            debug!(tag = %name, "Skipping tag that does not point at a commit");
            continue;
        };
        match commit_time(&commit) {
            Ok(timestamp) => tags.push(TagRef { name, timestamp }),
            Err(e) => warn!(tag = %name, error = %e, "Skipping tag with unusable commit time"),
        }
    }

    // Newest first; equal timestamps keep ref enumeration order.
    tags.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(tags)
}

/// Log strategy: walk commits from HEAD in time order and collect the tags
/// attached to visited commits.
fn tags_by_log(repo: &Repository) -> Result<Vec<TagRef>, GitError> {
    let mut tags_by_commit: HashMap<Oid, Vec<String>> = HashMap::new();
    for (name, target) in tag_targets(repo)? {
        tags_by_commit.entry(target).or_default().push(name);
    }

    let head = repo
        .head()
        .map_err(|e| GitError::ReferenceNotFound("HEAD".to_string(), e))?;
    let head_oid = head.target().ok_or_else(|| {
        GitError::ReferenceNotFound(
            "HEAD".to_string(),
            git2::Error::from_str("HEAD has no direct target"),
        )
    })?;

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(head_oid).map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    let mut tags = Vec::new();
    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let Some(names) = tags_by_commit.get(&oid) else {
            continue;
        };
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        match commit_time(&commit) {
            Ok(timestamp) => {
                for name in names {
                    tags.push(TagRef {
                        name: name.clone(),
                        timestamp,
                    });
                }
            }
            Err(e) => warn!(error = %e, "Skipping decorated commit with unusable time"),
        }
    }

    debug!(count = tags.len(), "Collected tags from HEAD log walk");
    Ok(tags)
}
