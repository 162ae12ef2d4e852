//! Release-notes categories and topics

/// Category assigned when no `release notes:` label is present
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Topic assigned when no `topic:` label is present
pub const UNTOPICED: &str = "Untopiced";

/// Topics in the order they appear in rendered reports
pub const CANONICAL_TOPICS: [&str; 11] = [
    "bc_breaking",
    "deprecations",
    "new_features",
    "improvements",
    "bug_fixes",
    "performance",
    "docs",
    "devs",
    UNTOPICED,
    "not user facing",
    "security",
];

/// Normalize a topic name so `bug_fixes` and `bug fixes` compare equal
pub fn normalize_topic(topic: &str) -> String {
    topic.replace('_', " ")
}

/// Does a record's topic belong under the given canonical topic?
pub fn topic_matches(canonical: &str, topic: &str) -> bool {
    normalize_topic(canonical) == normalize_topic(topic)
}

/// The canonical topic a record's topic falls under, if any
pub fn canonical_topic(topic: &str) -> Option<&'static str> {
    CANONICAL_TOPICS
        .iter()
        .copied()
        .find(|canonical| topic_matches(canonical, topic))
}
