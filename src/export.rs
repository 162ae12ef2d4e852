//! Per-category exports of a worklist

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::report;
use crate::worklist::{Worklist, WorklistError, store};

/// File name for one category's export, e.g. `result_bug_fixes.md`
pub fn export_file_name(category: &str, extension: &str) -> String {
    let safe: String = category
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("result_{safe}.{extension}")
}

/// Write `result_<category>.csv` for every category in the worklist
///
/// Each file uses the worklist column layout. Returns the written paths.
pub fn export_csv_categories(
    worklist: &Worklist,
    export_dir: &Path,
) -> Result<Vec<PathBuf>, WorklistError> {
    let stats = worklist.stats();
    let mut written = Vec::new();

    for category in stats.categories() {
        info!(%category, "exporting CSV");
        let path = export_dir.join(export_file_name(category, "csv"));
        store::write_records(&path, worklist.filter(Some(category), None))?;
        written.push(path);
    }

    Ok(written)
}

/// Write `result_<category>.md` worksheets for every category
///
/// Returns the written paths.
pub fn export_markdown(
    worklist: &Worklist,
    export_dir: &Path,
) -> Result<Vec<PathBuf>, WorklistError> {
    fs::create_dir_all(export_dir)?;
    let stats = worklist.stats();
    let mut written = Vec::new();

    for category in stats.categories() {
        info!(%category, "exporting Markdown");
        let path = export_dir.join(export_file_name(category, "md"));
        fs::write(&path, report::render_worksheet(worklist, category))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommitRecord;

    fn sample_worklist() -> Worklist {
        let record = |hash: &str, category: &str| CommitRecord {
            commit_hash: hash.to_string(),
            category: category.to_string(),
            topic: "docs".to_string(),
            title: format!("change {hash}"),
            ..Default::default()
        };
        Worklist::from_records(
            "commitlist.csv",
            vec![record("a", "docs"), record("b", "performance"), record("c", "docs")],
        )
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("bug_fixes", "md"), "result_bug_fixes.md");
        assert_eq!(export_file_name("ci/cd", "csv"), "result_ci_cd.csv");
    }

    #[test]
    fn test_export_csv_categories() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().join("export");

        let written = export_csv_categories(&sample_worklist(), &export_dir).unwrap();
        assert_eq!(
            written,
            vec![
                export_dir.join("result_docs.csv"),
                export_dir.join("result_performance.csv"),
            ]
        );

        let docs = store::read_records(&written[0]).unwrap();
        let hashes: Vec<&str> = docs.iter().map(|r| r.commit_hash.as_str()).collect();
        assert_eq!(hashes, vec!["a", "c"]);
    }

    #[test]
    fn test_export_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().join("export");

        let written = export_markdown(&sample_worklist(), &export_dir).unwrap();
        assert_eq!(written.len(), 2);

        let docs = fs::read_to_string(export_dir.join("result_docs.md")).unwrap();
        assert!(docs.starts_with("# Release Notes worksheet docs"));
        assert!(docs.contains("- change a (a)\n- change c (c)\n"));
        assert!(!docs.contains("change b"));
    }
}
