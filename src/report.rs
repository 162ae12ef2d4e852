//! Markdown rendering of a worklist
//!
//! One section per category, one subsection per canonical topic in fixed
//! order. Each commit is a bullet with its cleaned title and PR reference;
//! commits folded into another via `merge_into` share that commit's bullet.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::model::topic::{CANONICAL_TOPICS, canonical_topic, topic_matches};
use crate::model::CommitRecord;
use crate::worklist::Worklist;

/// Trailing ` (#1234)` pull request suffix of a commit subject
static PR_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \(#\d+\)\s*$").expect("Invalid PR suffix regex"));

/// Pull request number at the end of a PR page URL
static PR_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/pull/([0-9]+)/?$").expect("Invalid PR link regex"));

/// Guidance printed under each worksheet title
pub const WORKSHEET_INSTRUCTIONS: &str = "Edit category, topic, and merge_into in the worklist CSV, \
then re-export to refresh this worksheet.";

/// Commit subject without its trailing ` (#<digits>)` suffix
pub fn clean_title(title: &str) -> &str {
    PR_SUFFIX_REGEX
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map_or(title, |m| m.as_str())
}

/// `[#N](link)` for commits with a recognizable PR link, else the raw hash
pub fn reference(record: &CommitRecord) -> String {
    let number = record
        .pull_request_link
        .as_deref()
        .and_then(|link| Some((link, PR_LINK_REGEX.captures(link)?.get(1)?.as_str())));

    match number {
        Some((link, number)) => format!("[#{number}]({link})"),
        None => record.commit_hash.clone(),
    }
}

/// Render the section for one category
pub fn render_category(worklist: &Worklist, category: &str) -> String {
    let mut merged_into: HashMap<&str, Vec<&CommitRecord>> = HashMap::new();
    for record in worklist.records() {
        if let Some(target) = record.merge_into.as_deref().filter(|t| !t.is_empty()) {
            merged_into.entry(target).or_default().push(record);
        }
    }

    let in_category = worklist.filter(Some(category), None);
    let uncovered = in_category
        .iter()
        .filter(|record| canonical_topic(&record.topic).is_none())
        .count();
    if uncovered > 0 {
        warn!(
            %category,
            records = uncovered,
            "records with a non-canonical topic are left out of the report"
        );
    }

    let mut out = String::new();
    out.push_str(&format!("## {category}\n"));

    for topic in CANONICAL_TOPICS {
        out.push_str(&format!("\n### {topic}\n"));

        // exact spellings first, then `_`/space variants
        let (exact, variants): (Vec<&CommitRecord>, Vec<&CommitRecord>) = in_category
            .iter()
            .copied()
            .filter(|record| topic_matches(topic, &record.topic) && !record.is_merged())
            .partition(|record| record.topic == topic);

        let bullets: Vec<String> = exact
            .into_iter()
            .chain(variants)
            .map(|record| {
                let references: Vec<String> = merged_into
                    .get(record.commit_hash.as_str())
                    .into_iter()
                    .flatten()
                    .copied()
                    .chain(std::iter::once(record))
                    .map(reference)
                    .collect();
                format!("- {} ({})", clean_title(&record.title), references.join(", "))
            })
            .collect();

        if !bullets.is_empty() {
            out.push('\n');
            for bullet in bullets {
                out.push_str(&bullet);
                out.push('\n');
            }
        }
    }

    out
}

/// Render a complete worksheet file for one category
pub fn render_worksheet(worklist: &Worklist, category: &str) -> String {
    format!(
        "# Release Notes worksheet {category}\n\n{WORKSHEET_INSTRUCTIONS}\n\n{}",
        render_category(worklist, category)
    )
}
