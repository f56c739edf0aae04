//! Grouping fetched issues by type.

/// Type name assigned when an issue lookup fails.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// A tracked issue with whatever detail the tracker returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub key: String,
    pub type_name: String,
    /// Absent when the lookup for this issue failed.
    pub summary: Option<String>,
}

/// Issues grouped by type name.
///
/// Groups appear in first-seen type order; records keep insertion order
/// within a group. Built by accumulation, consumed once by the renderers.
#[derive(Debug, Default)]
pub struct IssueGroups {
    groups: Vec<(String, Vec<IssueRecord>)>,
}

impl IssueGroups {
    pub fn from_records(records: impl IntoIterator<Item = IssueRecord>) -> Self {
        let mut groups = Self::default();
        for record in records {
            groups.push(record);
        }
        groups
    }

    pub fn push(&mut self, record: IssueRecord) {
        match self
            .groups
            .iter()
            .position(|(name, _)| *name == record.type_name)
        {
            Some(idx) => self.groups[idx].1.push(record),
            None => self.groups.push((record.type_name.clone(), vec![record])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IssueRecord])> {
        self.groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, type_name: &str) -> IssueRecord {
        IssueRecord {
            key: key.to_string(),
            type_name: type_name.to_string(),
            summary: Some(format!("summary for {key}")),
        }
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let groups = IssueGroups::from_records(vec![
            record("TN-1", "Task"),
            record("TN-2", "Bug"),
            record("TN-3", "Task"),
        ]);

        let names: Vec<&str> = groups.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Task", "Bug"]);
    }

    #[test]
    fn test_records_append_within_group() {
        let groups = IssueGroups::from_records(vec![
            record("TN-1", "Bug"),
            record("TN-2", "Bug"),
        ]);

        let (_, records) = groups.iter().next().unwrap();
        let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["TN-1", "TN-2"]);
    }

    #[test]
    fn test_empty() {
        assert!(IssueGroups::default().is_empty());
        assert!(!IssueGroups::from_records(vec![record("TN-1", "Bug")]).is_empty());
    }
}
