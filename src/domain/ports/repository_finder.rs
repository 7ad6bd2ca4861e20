//! # Repository Finder Port
//!
//! リポジトリルートの探索を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// リポジトリ探索
#[async_trait]
pub trait RepositoryFinder: Send + Sync {
    /// `root` 以下のリポジトリルートを再帰的に探す
    ///
    /// # Returns
    ///
    /// パス順にソートされたリポジトリルート
    async fn find_repositories(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
