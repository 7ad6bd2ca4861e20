//! Pull All Workflow
//!
//! 配下のリポジトリを一括プルするワークフロー

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::git::GitCliClient;
use crate::adapter::process::{CommandRunner, TokioCommandRunner};
use crate::adapter::repositories::walkdir_repository_finder::WalkDirRepositoryFinder;
use crate::application::dto::pull_options::PullOptions;
use crate::application::use_cases::discover_repositories::DiscoverRepositoriesUseCase;
use crate::application::use_cases::pull_repositories::PullRepositoriesUseCase;
use crate::domain::entities::pull::{PullOutcome, PullSummary};
use crate::domain::services::repository_path::relative_path;
use crate::driver::cli::PullAllArgs;

use super::resolve_search_directory;

/// Pull All Workflow
pub struct PullAllWorkflow<R: CommandRunner> {
    discover_use_case: DiscoverRepositoriesUseCase<WalkDirRepositoryFinder>,
    pull_use_case: PullRepositoriesUseCase<GitCliClient<R>>,
}

impl PullAllWorkflow<TokioCommandRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, Arc::new(TokioCommandRunner::new()))
    }
}

impl<R: CommandRunner> PullAllWorkflow<R> {
    pub fn with_runner(config: Config, runner: Arc<R>) -> Self {
        let finder = Arc::new(WalkDirRepositoryFinder::new());
        let vcs = Arc::new(GitCliClient::new(runner, config.git_path));
        Self {
            discover_use_case: DiscoverRepositoriesUseCase::new(finder),
            pull_use_case: PullRepositoriesUseCase::new(vcs),
        }
    }

    /// Execute the pull workflow
    ///
    /// Individual repository failures are counted, not returned as errors
    pub async fn execute(&self, args: PullAllArgs) -> Result<PullSummary> {
        let root = resolve_search_directory(&args.directory)?;
        let options = PullOptions {
            force: args.force,
            quiet: args.quiet,
            verbose: args.verbose,
        };

        let repositories = self.discover_use_case.execute(&root).await?;
        eprintln!(
            "✓ Found {} repositories under {}",
            repositories.len(),
            root.display()
        );

        let summary = self
            .pull_use_case
            .execute(&repositories, &options, |repo, outcome| {
                for line in outcome_lines(&root, repo, outcome, &options) {
                    eprintln!("{}", line);
                }
            })
            .await?;

        print_summary(&summary);
        Ok(summary)
    }
}

/// 1リポジトリ分の進捗行
///
/// `quiet` でなければ見出しとプル出力、`verbose` なら結果行も含める
fn outcome_lines(
    root: &Path,
    repo: &Path,
    outcome: &PullOutcome,
    options: &PullOptions,
) -> Vec<String> {
    if options.quiet && !options.verbose {
        return Vec::new();
    }

    let mut lines = vec![format!("→ {}", relative_path(root, repo))];
    match outcome {
        PullOutcome::Updated { output } => {
            if options.verbose {
                lines.push("  ✓ updated".to_string());
            }
            if !options.quiet {
                lines.extend(output.lines().map(|line| format!("    {}", line)));
            }
        }
        PullOutcome::SkippedNoRemote if options.verbose => {
            lines.push("  ⚠ skipped: no remote configured".to_string());
        }
        PullOutcome::SkippedLocalChanges {
            modified,
            untracked,
        } if options.verbose => {
            let reason = match (*modified, *untracked) {
                (true, true) => "uncommitted changes and untracked files",
                (true, false) => "uncommitted changes",
                _ => "untracked files",
            };
            lines.push(format!(
                "  ⚠ skipped: {} (use --force to pull anyway)",
                reason
            ));
        }
        PullOutcome::Failed { reason } if options.verbose => {
            lines.push(format!("  ✗ failed: {}", reason));
        }
        _ => {}
    }
    lines
}

fn print_summary(summary: &PullSummary) {
    println!("Repositories found:        {}", summary.found);
    println!("Updated:                   {}", summary.updated);
    println!("Skipped (local changes):   {}", summary.skipped_local_changes);
    println!("Skipped (no remote):       {}", summary.skipped_no_remote);
    println!("Errors:                    {}", summary.failed);
}
