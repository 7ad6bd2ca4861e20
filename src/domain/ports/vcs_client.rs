//! # Version Control Client Port
//!
//! バージョン管理CLIの操作を抽象化
//!
//! 全ての操作はリポジトリルートを明示的に受け取り、
//! プロセスのカレントディレクトリには依存しない

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::branch_report::{CommitInfo, Divergence};

/// バージョン管理クライアント
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VersionControlClient: Send + Sync {
    /// CLIが実行可能か確認する
    async fn ensure_available(&self) -> Result<()>;

    /// 設定済みリモート名（設定順）
    async fn remotes(&self, repo: &Path) -> Result<Vec<String>>;

    /// リモート追跡ブランチを更新する
    async fn fetch(&self, repo: &Path, remote: &str) -> Result<()>;

    /// `<remote>/HEAD` が指すブランチ名（リモート名なし）
    async fn symbolic_default_branch(&self, repo: &Path, remote: &str) -> Result<Option<String>>;

    /// リモートブランチ名の一覧（リモート名なし、`HEAD` を除く）
    async fn remote_branches(&self, repo: &Path, remote: &str) -> Result<Vec<String>>;

    /// `base...branch` の差分コミット数
    async fn ahead_behind(&self, repo: &Path, base: &str, branch: &str) -> Result<Divergence>;

    /// リビジョンの最終コミット情報
    async fn last_commit(&self, repo: &Path, rev: &str) -> Result<CommitInfo>;

    /// 追跡ファイルに未コミットの変更があるか
    async fn has_uncommitted_changes(&self, repo: &Path) -> Result<bool>;

    /// 未追跡ファイルがあるか
    async fn has_untracked_files(&self, repo: &Path) -> Result<bool>;

    /// 現在のブランチをリモートと同期する
    ///
    /// # Returns
    ///
    /// CLIの出力
    async fn pull(&self, repo: &Path, quiet: bool) -> Result<String>;
}
