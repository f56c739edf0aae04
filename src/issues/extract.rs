//! Issue key extraction from commit subjects.

use std::collections::HashSet;

use regex_lite::Regex;

use crate::error::ExtractError;

/// Keys are cut to this length before lookup. A key with more than four
/// digits collapses into a shorter, different key; lossy on purpose.
pub const KEY_TRUNCATE_LEN: usize = 9;

/// Scan a commit-subject block for `<prefix>-<digits>` keys.
///
/// Matching is case-insensitive but matches are returned as captured, so
/// `TN-1` and `tn-1` are distinct entries. Duplicates collapse; first-seen
/// order is preserved.
pub fn extract_issue_keys(text: &str, prefix: &str) -> Result<Vec<String>, ExtractError> {
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ExtractError::InvalidPrefix(prefix.to_string()));
    }

    let pattern = format!("(?i){prefix}-[0-9]+");
    let re = Regex::new(&pattern).map_err(ExtractError::BadPattern)?;

    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for m in re.find_iter(text) {
        let key = m.as_str().to_string();
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }

    Ok(keys)
}

/// Normalize a key to its fixed-length lookup form.
pub fn truncate_key(raw: &str) -> &str {
    // Keys are ASCII by construction, so byte slicing is safe.
    if raw.len() > KEY_TRUNCATE_LEN {
        &raw[..KEY_TRUNCATE_LEN]
    } else {
        raw
    }
}
