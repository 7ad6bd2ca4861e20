//! # Discover Repositories Use Case
//!
//! リポジトリルート探索ユースケース

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::repository_finder::RepositoryFinder;

/// リポジトリルート探索ユースケース
///
/// 指定されたディレクトリ以下のリポジトリルートを発見する
pub struct DiscoverRepositoriesUseCase<F: RepositoryFinder> {
    finder: Arc<F>,
}

impl<F: RepositoryFinder> DiscoverRepositoriesUseCase<F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `finder` - リポジトリ探索の実装
    pub fn new(finder: Arc<F>) -> Self {
        Self { finder }
    }

    /// リポジトリルートを発見する
    ///
    /// # Arguments
    ///
    /// * `root` - 探索を開始するディレクトリ
    ///
    /// # Returns
    ///
    /// 発見されたリポジトリルートのリスト
    pub async fn execute(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.finder.find_repositories(root).await
    }
}
