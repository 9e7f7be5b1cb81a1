//! Export issue counters.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::IssueType;

/// Counts locally recovered issues during one export run.
///
/// Every [`IssueType`] starts at zero. The export loop is sequential, so
/// plain counters are enough.
#[derive(Debug, Clone)]
pub struct IssueStats {
    counts: HashMap<IssueType, usize>,
}

impl IssueStats {
    /// Creates counters with every issue type at zero.
    pub fn new() -> Self {
        let counts = IssueType::iter().map(|issue| (issue, 0)).collect();
        IssueStats { counts }
    }

    /// Records one occurrence of `issue`.
    pub fn record(&mut self, issue: IssueType) {
        self.add(issue, 1);
    }

    /// Records `n` occurrences of `issue`.
    pub fn add(&mut self, issue: IssueType, n: usize) {
        *self.counts.entry(issue).or_insert(0) += n;
    }

    /// Occurrences of `issue` so far.
    pub fn count(&self, issue: IssueType) -> usize {
        self.counts.get(&issue).copied().unwrap_or(0)
    }

    /// Occurrences of all issues together.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Default for IssueStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_stats_start_at_zero() {
        let stats = IssueStats::new();
        for issue in IssueType::iter() {
            assert_eq!(stats.count(issue), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_issue_stats_record_and_add() {
        let mut stats = IssueStats::new();
        stats.record(IssueType::SkippedRecord);
        stats.record(IssueType::SkippedRecord);
        stats.add(IssueType::MalformedRank, 3);

        assert_eq!(stats.count(IssueType::SkippedRecord), 2);
        assert_eq!(stats.count(IssueType::MalformedRank), 3);
        assert_eq!(stats.count(IssueType::EmptyPage), 0);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_issue_stats_add_zero_is_noop() {
        let mut stats = IssueStats::new();
        stats.add(IssueType::EnrichmentFailed, 0);
        assert_eq!(stats.total(), 0);
    }
}
