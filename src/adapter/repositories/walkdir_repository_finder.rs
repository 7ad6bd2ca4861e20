//! WalkDir Repository Finder
//!
//! RepositoryFinderのファイルシステム実装

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::ports::repository_finder::RepositoryFinder;

const GIT_DIR: &str = ".git";

/// `.git` ディレクトリを目印にリポジトリを探索する
pub struct WalkDirRepositoryFinder;

impl WalkDirRepositoryFinder {
    /// 新しいファインダーを作成
    pub fn new() -> Self {
        Self
    }

    fn find_repositories_internal(root: &Path) -> Vec<PathBuf> {
        let mut repositories = Vec::new();
        let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable path: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() && entry.file_name() == GIT_DIR {
                if let Some(repo) = entry.path().parent() {
                    repositories.push(repo.to_path_buf());
                }
                // .git の中身は走査しない
                walker.skip_current_dir();
            }
        }

        repositories.sort();
        info!(
            "Found {} repositories under {}",
            repositories.len(),
            root.display()
        );
        repositories
    }
}

#[async_trait]
impl RepositoryFinder for WalkDirRepositoryFinder {
    async fn find_repositories(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || Self::find_repositories_internal(&root))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))
    }
}

impl Default for WalkDirRepositoryFinder {
    fn default() -> Self {
        Self::new()
    }
}
