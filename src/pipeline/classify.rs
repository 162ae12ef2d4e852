//! Label-driven release-notes classification

use crate::model::{CommitMetadata, UNCATEGORIZED, UNTOPICED};

/// Label prefix naming the release-notes category
pub const CATEGORY_LABEL_PREFIX: &str = "release notes: ";

/// Label prefix naming the topic
pub const TOPIC_LABEL_PREFIX: &str = "topic: ";

/// Category and topic assigned to one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub topic: String,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            category: UNCATEGORIZED.to_string(),
            topic: UNTOPICED.to_string(),
        }
    }
}

/// Classify a commit from its pull request labels
///
/// Every label is scanned; when several labels name the same axis the
/// last one wins. An axis without a label keeps its default. Changed
/// files are not consulted.
pub fn classify(metadata: &CommitMetadata) -> Classification {
    let mut result = Classification::default();
    let mut categorized = false;
    let mut topiced = false;

    for label in &metadata.labels {
        if let Some(category) = label.strip_prefix(CATEGORY_LABEL_PREFIX) {
            result.category = category.to_string();
            categorized = true;
        }
        if let Some(topic) = label.strip_prefix(TOPIC_LABEL_PREFIX) {
            result.topic = topic.to_string();
            topiced = true;
        }
    }

    if categorized && topiced {
        return result;
    }

    // No file-based heuristics yet: unresolved axes stay at their defaults
    result
}
