//! CSV persistence for worklist records

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::WorklistError;
use crate::model::{CommitRecord, RECORD_FIELDS};

/// A worklist row as read from disk
///
/// Accepts the column names of worklists written by the earlier
/// script-based tool, ignores columns it does not know, and carries the
/// hand-edited `new_title` override.
#[derive(Debug, Deserialize)]
struct StoredRow {
    commit_hash: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    title: String,
    #[serde(default, alias = "pr_link")]
    pull_request_link: Option<String>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    labels: String,
    #[serde(default, alias = "accepter_1")]
    approver_1: String,
    #[serde(default, alias = "accepter_2")]
    approver_2: String,
    #[serde(default, alias = "accepter_3")]
    approver_3: String,
    #[serde(default)]
    merge_into: Option<String>,
    #[serde(default)]
    new_title: Option<String>,
}

impl From<StoredRow> for CommitRecord {
    fn from(row: StoredRow) -> Self {
        let title = match row.new_title {
            Some(new_title) if !new_title.is_empty() => new_title,
            _ => row.title,
        };

        Self {
            commit_hash: row.commit_hash,
            category: row.category,
            topic: row.topic,
            title,
            pull_request_link: row.pull_request_link.filter(|link| !link.is_empty()),
            author: row.author,
            labels: row.labels,
            approver_1: row.approver_1,
            approver_2: row.approver_2,
            approver_3: row.approver_3,
            merge_into: row.merge_into.filter(|target| !target.is_empty()),
        }
    }
}

/// Read all records from a worklist CSV
pub fn read_records(path: &Path) -> Result<Vec<CommitRecord>, WorklistError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize::<StoredRow>() {
        records.push(CommitRecord::from(row?));
    }

    Ok(records)
}

/// Write records to a worklist CSV, replacing any existing file
///
/// The header row is always written, even for an empty worklist.
pub fn write_records<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a CommitRecord>,
) -> Result<(), WorklistError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(RECORD_FIELDS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(hash: &str) -> CommitRecord {
        CommitRecord {
            commit_hash: hash.to_string(),
            category: "bug_fixes".to_string(),
            topic: "performance".to_string(),
            title: "Fix \"quoted\", comma-laden title (#42)".to_string(),
            pull_request_link: Some(
                "https://github.com/PaddlePaddle/Paddle/pull/42".to_string(),
            ),
            author: "zhangsan".to_string(),
            labels: "release notes: bug_fixes,topic: performance".to_string(),
            approver_1: "lisi".to_string(),
            approver_2: "wangwu".to_string(),
            approver_3: String::new(),
            merge_into: None,
        }
    }

    #[test]
    fn test_write_then_read_reproduces_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commitlist.csv");
        let records = vec![
            sample_record("aaa"),
            CommitRecord {
                pull_request_link: None,
                merge_into: Some("aaa".to_string()),
                ..sample_record("bbb")
            },
        ];

        write_records(&path, &records).unwrap();
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn test_header_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commitlist.csv");
        write_records(&path, &[sample_record("aaa")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "commit_hash,category,topic,title,pull_request_link,author,labels,approver_1,approver_2,approver_3,merge_into"
        );
    }

    #[test]
    fn test_empty_worklist_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commitlist.csv");
        write_records(&path, &Vec::<CommitRecord>::new()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(read_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_new_title_overrides_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commitlist.csv");
        fs::write(
            &path,
            "commit_hash,category,topic,title,new_title,notes\n\
             aaa,docs,docs,Old title (#1),Better title (#1),reviewed\n\
             bbb,docs,docs,Kept title,,\n",
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records[0].title, "Better title (#1)");
        assert_eq!(records[1].title, "Kept title");
        // columns missing from the file load empty
        assert_eq!(records[0].pull_request_link, None);
        assert_eq!(records[0].approver_1, "");
    }

    #[test]
    fn test_legacy_column_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commitlist.csv");
        fs::write(
            &path,
            "commit_hash,category,topic,title,pr_link,author,labels,accepter_1,accepter_2,accepter_3,merge_into\n\
             aaa,Uncategorized,Untopiced,Fix (#3),https://github.com/PaddlePaddle/Paddle/pull/3,zhangsan,,lisi,,,\n",
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(
            records[0].pull_request_link.as_deref(),
            Some("https://github.com/PaddlePaddle/Paddle/pull/3")
        );
        assert_eq!(records[0].approver_1, "lisi");
        assert_eq!(records[0].merge_into, None);
    }

    #[test]
    fn test_new_title_not_written_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commitlist.csv");
        fs::write(
            &path,
            "commit_hash,category,topic,title,new_title\naaa,docs,docs,Old,New\n",
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        write_records(&path, &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("new_title"));
        assert!(contents.contains(",New,"));
    }
}
