//! Integration tests for tag location and commit collection.

mod common;

use chrono::{FixedOffset, TimeZone};
use common::TestRepo;
use tagnotes::error::GitError;
use tagnotes::git::commits::subjects_since;
use tagnotes::git::tags::{TagStrategy, locate_boundary_tag};

const HOUR: i64 = 3600;

/// Three commits, each tagged, at 10h / 20h / 30h after the epoch.
fn repo_with_three_tags() -> TestRepo {
    let fixture = TestRepo::new();
    let first = fixture.commit_at("feat: first TN-1", 10 * HOUR);
    fixture.tag_lightweight("v1.0.0", first);
    let second = fixture.commit_at("fix: second TN-2", 20 * HOUR);
    fixture.tag_lightweight("v1.1.0", second);
    let third = fixture.commit_at("feat: third TN-3", 30 * HOUR);
    fixture.tag_lightweight("v1.2.0", third);
    fixture
}

#[test]
fn test_one_tag_back_selects_second_most_recent() {
    let fixture = repo_with_three_tags();
    let tag = locate_boundary_tag(&fixture.repo, 1, TagStrategy::Ref).expect("boundary tag");
    assert_eq!(tag.name, "v1.1.0");
    assert_eq!(tag.timestamp.timestamp(), 20 * HOUR);
}

#[test]
fn test_two_tags_back_selects_third_most_recent() {
    let fixture = repo_with_three_tags();
    let tag = locate_boundary_tag(&fixture.repo, 2, TagStrategy::Ref).expect("boundary tag");
    assert_eq!(tag.name, "v1.0.0");
    assert_eq!(tag.timestamp.timestamp(), 10 * HOUR);
}

#[test]
fn test_log_strategy_matches_ref_strategy() {
    let fixture = repo_with_three_tags();
    for tags_back in 1..=2 {
        let by_ref =
            locate_boundary_tag(&fixture.repo, tags_back, TagStrategy::Ref).expect("ref strategy");
        let by_log =
            locate_boundary_tag(&fixture.repo, tags_back, TagStrategy::Log).expect("log strategy");
        assert_eq!(by_ref, by_log, "strategies disagree at tags_back={tags_back}");
    }
}

#[test]
fn test_annotated_tags_resolve_to_target_commit_time() {
    let fixture = TestRepo::new();
    let first = fixture.commit_at("feat: first", 10 * HOUR);
    fixture.tag_annotated("v1.0.0", first, "release 1.0.0");
    let second = fixture.commit_at("feat: second", 20 * HOUR);
    fixture.tag_annotated("v1.1.0", second, "release 1.1.0");

    let tag = locate_boundary_tag(&fixture.repo, 1, TagStrategy::Ref).expect("boundary tag");
    assert_eq!(tag.name, "v1.0.0");
    assert_eq!(tag.timestamp.timestamp(), 10 * HOUR);
}

#[test]
fn test_not_enough_tags_is_a_typed_error() {
    let fixture = TestRepo::new();
    let only = fixture.commit_at("feat: only", 10 * HOUR);
    fixture.tag_lightweight("v1.0.0", only);

    let err = locate_boundary_tag(&fixture.repo, 1, TagStrategy::Ref).unwrap_err();
    match err {
        GitError::NotEnoughTags {
            requested,
            available,
        } => {
            assert_eq!(requested, 1);
            assert_eq!(available, 1);
        }
        other => panic!("Expected NotEnoughTags, got {:?}", other),
    }
}

#[test]
fn test_no_tags_at_all() {
    let fixture = TestRepo::new();
    fixture.commit_at("feat: untagged", 10 * HOUR);

    let err = locate_boundary_tag(&fixture.repo, 1, TagStrategy::Ref).unwrap_err();
    assert!(matches!(err, GitError::NotEnoughTags { available: 0, .. }));
}

#[test]
fn test_subjects_since_boundary_is_inclusive() {
    let fixture = repo_with_three_tags();
    let boundary = locate_boundary_tag(&fixture.repo, 1, TagStrategy::Ref).expect("boundary tag");
    let subjects = subjects_since(&fixture.repo, boundary.timestamp).expect("subjects");

    // The tagged boundary commit sits exactly on the timestamp and is kept.
    assert_eq!(
        subjects,
        vec![
            "feat: third TN-3".to_string(),
            "fix: second TN-2".to_string()
        ]
    );
}

#[test]
fn test_subjects_since_skips_older_commits() {
    let fixture = TestRepo::new();
    fixture.commit_at("old: before the boundary", 10 * HOUR);
    fixture.commit_at("new: after the boundary", 30 * HOUR);

    let boundary = FixedOffset::east_opt(0)
        .unwrap()
        .timestamp_opt(20 * HOUR, 0)
        .unwrap();
    let subjects = subjects_since(&fixture.repo, boundary).expect("subjects");

    assert_eq!(subjects, vec!["new: after the boundary".to_string()]);
}
