//! Worklist statistics

use std::collections::BTreeMap;
use std::fmt;

use crate::model::CommitRecord;

/// Record counts grouped by category, then topic (both sorted)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stats {
    counts: BTreeMap<String, BTreeMap<String, usize>>,
}

impl Stats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a CommitRecord>) -> Self {
        let mut counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
        for record in records {
            *counts
                .entry(record.category.clone())
                .or_default()
                .entry(record.topic.clone())
                .or_default() += 1;
        }
        Self { counts }
    }

    /// Categories present in the worklist
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn category_total(&self, category: &str) -> usize {
        self.counts
            .get(category)
            .map(|topics| topics.values().sum())
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().flat_map(BTreeMap::values).sum()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, topics) in &self.counts {
            writeln!(f, "{category} ({})", self.category_total(category))?;
            for (topic, count) in topics {
                writeln!(f, "  {topic}: {count}")?;
            }
        }
        write!(f, "total: {}", self.total())
    }
}
