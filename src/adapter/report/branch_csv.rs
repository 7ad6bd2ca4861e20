//! Branch Report CSV
//!
//! 未マージブランチレポートのCSVファイル出力

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::entities::branch_report::BranchReportRow;

/// Write the header and rows to `path`, returning the file size in bytes
pub fn write_branch_report(path: &Path, rows: &[BranchReportRow]) -> Result<u64> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;

    wtr.write_record(BranchReportRow::HEADER)?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }
    wtr.flush()
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    let size = fs::metadata(path)
        .with_context(|| format!("Failed to stat report file: {}", path.display()))?
        .len();
    Ok(size)
}

/// First `count` lines of a written report, header included
pub fn preview_lines(path: &Path, count: usize) -> Result<Vec<String>> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open report file: {}", path.display()))?;

    BufReader::new(file)
        .lines()
        .take(count)
        .map(|line| line.map_err(anyhow::Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::branch_report::{CommitInfo, Divergence};
    use tempfile::TempDir;

    fn row(repository: &str, branch: &str, ahead: u32) -> BranchReportRow {
        BranchReportRow::new(
            repository,
            repository,
            branch,
            Divergence { ahead, behind: 1 },
            CommitInfo {
                author_name: "Doe, Jane".to_string(),
                author_email: "jane@example.com".to_string(),
                date: "2024-12-25 10:00:00 +0100".to_string(),
            },
        )
    }

    #[test]
    fn test_write_branch_report() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("branch_report.csv");

        let size = write_branch_report(&path, &[row("api", "feature/login", 3)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(size, content.len() as u64);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "Repository,Path,Branch,Commits Ahead,Commits Behind,Last Author,Author Email,Last Commit Date"
        );
        assert_eq!(
            lines[1],
            "api,api,feature/login,3,1,\"Doe, Jane\",jane@example.com,2024-12-25 10:00:00 +0100"
        );
    }

    #[test]
    fn test_empty_report_has_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.csv");

        write_branch_report(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("report.csv");

        let err = write_branch_report(&path, &[]).unwrap_err();
        assert!(err.to_string().contains("Failed to create report file"));
    }

    #[test]
    fn test_preview_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.csv");
        let rows: Vec<_> = (1..=5).map(|i| row("api", &format!("b{}", i), i)).collect();
        write_branch_report(&path, &rows).unwrap();

        let preview = preview_lines(&path, 3).unwrap();

        assert_eq!(preview.len(), 3);
        assert!(preview[0].starts_with("Repository,"));
        assert!(preview[2].starts_with("api,api,b2,"));
    }
}
