//! # Branch Report Use Case
//!
//! 未マージブランチレポート生成ユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::branch_report::BranchReportRow;
use crate::domain::ports::vcs_client::VersionControlClient;
use crate::domain::services::default_branch::DefaultBranchResolver;
use crate::domain::services::repository_path::{relative_path, repository_name};

/// 優先して使うリモート名
pub const PREFERRED_REMOTE: &str = "origin";

/// スキップしたリポジトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRepository {
    pub path: PathBuf,
    pub reason: String,
}

/// レポート生成結果
#[derive(Debug, Clone, Default)]
pub struct BranchReport {
    /// ソート済みの未マージブランチ
    pub rows: Vec<BranchReportRow>,
    /// 走査したリポジトリ数
    pub repositories_scanned: usize,
    /// 行を生成できなかったリポジトリ
    pub skipped: Vec<SkippedRepository>,
}

/// 1リポジトリの走査結果
enum RepositoryScan {
    Rows(Vec<BranchReportRow>),
    Skipped(String),
}

/// 未マージブランチレポート生成ユースケース
pub struct BranchReportUseCase<V: VersionControlClient> {
    vcs: Arc<V>,
    candidates: Vec<String>,
}

impl<V: VersionControlClient> BranchReportUseCase<V> {
    /// # Arguments
    ///
    /// * `vcs` - バージョン管理クライアント
    /// * `candidates` - 基準ブランチの候補名（優先順）
    pub fn new(vcs: Arc<V>, candidates: Vec<String>) -> Self {
        Self { vcs, candidates }
    }

    /// 全リポジトリを走査してレポートを作る
    ///
    /// # Arguments
    ///
    /// * `root` - 探索ルート（Path列の基準）
    /// * `repositories` - リポジトリルート
    ///
    /// # Errors
    ///
    /// CLIが利用できない場合のみエラーを返す。リポジトリ単位の失敗は警告してスキップ
    pub async fn execute(&self, root: &Path, repositories: &[PathBuf]) -> Result<BranchReport> {
        self.vcs.ensure_available().await?;

        let mut report = BranchReport::default();

        for repo in repositories {
            report.repositories_scanned += 1;
            info!("Scanning {}", repo.display());

            match self.scan_repository(root, repo).await {
                Ok(RepositoryScan::Rows(rows)) => report.rows.extend(rows),
                Ok(RepositoryScan::Skipped(reason)) => {
                    warn!("Skipping {}: {}", repo.display(), reason);
                    report.skipped.push(SkippedRepository {
                        path: repo.clone(),
                        reason,
                    });
                }
                Err(e) => {
                    warn!("Skipping {}: {:#}", repo.display(), e);
                    report.skipped.push(SkippedRepository {
                        path: repo.clone(),
                        reason: format!("{:#}", e),
                    });
                }
            }
        }

        report.rows.sort();
        Ok(report)
    }

    async fn scan_repository(&self, root: &Path, repo: &Path) -> Result<RepositoryScan> {
        let remotes = self
            .vcs
            .remotes(repo)
            .await
            .context("Failed to list remotes")?;
        let Some(remote) = select_remote(&remotes) else {
            return Ok(RepositoryScan::Skipped("no remote configured".to_string()));
        };

        if let Err(e) = self.vcs.fetch(repo, remote).await {
            warn!(
                "Fetch from {} failed in {}, using existing refs: {:#}",
                remote,
                repo.display(),
                e
            );
        }

        let branches = self
            .vcs
            .remote_branches(repo, remote)
            .await
            .context("Failed to list remote branches")?;
        let symbolic = self
            .vcs
            .symbolic_default_branch(repo, remote)
            .await
            .unwrap_or_else(|e| {
                warn!("Could not read {}/HEAD in {}: {:#}", remote, repo.display(), e);
                None
            });

        let Some(default_branch) =
            DefaultBranchResolver::resolve(symbolic.as_deref(), &self.candidates, &branches)
        else {
            return Ok(RepositoryScan::Skipped(
                "default branch could not be determined".to_string(),
            ));
        };
        info!("{}: default branch {}/{}", repo.display(), remote, default_branch);

        let name = repository_name(repo);
        let path = relative_path(root, repo);
        let base = format!("{}/{}", remote, default_branch);

        let mut rows = Vec::new();
        for branch in branches.iter().filter(|b| **b != default_branch) {
            let rev = format!("{}/{}", remote, branch);

            let divergence = match self.vcs.ahead_behind(repo, &base, &rev).await {
                Ok(divergence) => divergence,
                Err(e) => {
                    warn!("Cannot compare {} with {} in {}: {:#}", rev, base, name, e);
                    continue;
                }
            };
            if divergence.is_merged() {
                continue;
            }

            let commit = match self.vcs.last_commit(repo, &rev).await {
                Ok(commit) => commit,
                Err(e) => {
                    warn!("Cannot read last commit of {} in {}: {:#}", rev, name, e);
                    continue;
                }
            };

            rows.push(BranchReportRow::new(&name, &path, branch, divergence, commit));
        }

        Ok(RepositoryScan::Rows(rows))
    }
}

/// `origin` があればそれを、なければ最初のリモートを使う
fn select_remote(remotes: &[String]) -> Option<&str> {
    remotes
        .iter()
        .find(|r| r.as_str() == PREFERRED_REMOTE)
        .or_else(|| remotes.first())
        .map(String::as_str)
}
