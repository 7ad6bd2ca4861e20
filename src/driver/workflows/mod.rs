//! # Workflows
//!
//! ツールごとのワークフロー（依存性の組み立てと進捗表示）

pub mod branch_report;
pub mod extension_list;
pub mod extension_remove;
pub mod pull_all;
pub mod share_snapshot;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::error::OpsError;

pub use branch_report::BranchReportWorkflow;
pub use extension_list::ExtensionListWorkflow;
pub use extension_remove::ExtensionRemoveWorkflow;
pub use pull_all::PullAllWorkflow;
pub use share_snapshot::ShareSnapshotWorkflow;

/// 探索ディレクトリを検証して絶対パスにする
pub fn resolve_search_directory(directory: &Path) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(OpsError::DirectoryNotFound(directory.to_path_buf()).into());
    }
    directory
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", directory.display()))
}
