//! # Pull Repositories Use Case
//!
//! リポジトリ一括プルユースケース

use anyhow::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::dto::pull_options::PullOptions;
use crate::domain::entities::pull::{PullOutcome, PullSummary};
use crate::domain::ports::vcs_client::VersionControlClient;

/// リポジトリ一括プルユースケース
///
/// 1リポジトリの失敗で全体を中断しない
pub struct PullRepositoriesUseCase<V: VersionControlClient> {
    vcs: Arc<V>,
}

impl<V: VersionControlClient> PullRepositoriesUseCase<V> {
    pub fn new(vcs: Arc<V>) -> Self {
        Self { vcs }
    }

    /// 全リポジトリを順に同期する
    ///
    /// # Arguments
    ///
    /// * `repositories` - リポジトリルート
    /// * `options` - 動作フラグ
    /// * `on_outcome` - リポジトリごとの結果を受け取るコールバック
    ///
    /// # Errors
    ///
    /// CLIが利用できない場合のみエラーを返す
    pub async fn execute<F>(
        &self,
        repositories: &[PathBuf],
        options: &PullOptions,
        mut on_outcome: F,
    ) -> Result<PullSummary>
    where
        F: FnMut(&Path, &PullOutcome),
    {
        self.vcs.ensure_available().await?;

        let mut summary = PullSummary::default();
        for repo in repositories {
            let outcome = self.pull_repository(repo, options).await;
            summary.record(&outcome);
            on_outcome(repo, &outcome);
        }

        Ok(summary)
    }

    /// 1リポジトリを同期する
    pub async fn pull_repository(&self, repo: &Path, options: &PullOptions) -> PullOutcome {
        let remotes = match self.vcs.remotes(repo).await {
            Ok(remotes) => remotes,
            Err(e) => return failed(repo, e),
        };
        if remotes.is_empty() {
            warn!("No remote configured in {}, skipping", repo.display());
            return PullOutcome::SkippedNoRemote;
        }

        if !options.force {
            let modified = match self.vcs.has_uncommitted_changes(repo).await {
                Ok(modified) => modified,
                Err(e) => return failed(repo, e),
            };
            let untracked = match self.vcs.has_untracked_files(repo).await {
                Ok(untracked) => untracked,
                Err(e) => return failed(repo, e),
            };
            if modified || untracked {
                warn!("Local changes in {}, skipping", repo.display());
                return PullOutcome::SkippedLocalChanges {
                    modified,
                    untracked,
                };
            }
        }

        match self.vcs.pull(repo, options.quiet).await {
            Ok(output) => {
                info!("Pulled {}", repo.display());
                PullOutcome::Updated { output }
            }
            Err(e) => failed(repo, e),
        }
    }
}

fn failed(repo: &Path, error: anyhow::Error) -> PullOutcome {
    warn!("{}: {:#}", repo.display(), error);
    PullOutcome::Failed {
        reason: format!("{:#}", error),
    }
}
