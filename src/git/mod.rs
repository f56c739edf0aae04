//! Git operations: tag location and commit collection via git2.

pub mod commits;
pub mod tags;
