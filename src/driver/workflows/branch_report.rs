//! Branch Report Workflow
//!
//! 未マージブランチレポートのワークフロー

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::git::GitCliClient;
use crate::adapter::process::{CommandRunner, TokioCommandRunner};
use crate::adapter::report::{preview_lines, write_branch_report};
use crate::adapter::repositories::walkdir_repository_finder::WalkDirRepositoryFinder;
use crate::application::use_cases::branch_report::{BranchReport, BranchReportUseCase};
use crate::application::use_cases::discover_repositories::DiscoverRepositoriesUseCase;
use crate::domain::services::repository_path::relative_path;
use crate::driver::cli::BranchReportArgs;

use super::resolve_search_directory;

/// Branch Report Workflow
pub struct BranchReportWorkflow<R: CommandRunner> {
    config: Config,
    discover_use_case: DiscoverRepositoriesUseCase<WalkDirRepositoryFinder>,
    report_use_case: BranchReportUseCase<GitCliClient<R>>,
}

impl BranchReportWorkflow<TokioCommandRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, Arc::new(TokioCommandRunner::new()))
    }
}

impl<R: CommandRunner> BranchReportWorkflow<R> {
    pub fn with_runner(config: Config, runner: Arc<R>) -> Self {
        let finder = Arc::new(WalkDirRepositoryFinder::new());
        let vcs = Arc::new(GitCliClient::new(runner, config.git_path.clone()));
        Self {
            discover_use_case: DiscoverRepositoriesUseCase::new(finder),
            report_use_case: BranchReportUseCase::new(
                vcs,
                config.default_branch_candidates.clone(),
            ),
            config,
        }
    }

    /// Execute the report workflow
    pub async fn execute(&self, args: BranchReportArgs) -> Result<BranchReport> {
        let root = resolve_search_directory(&args.directory)?;
        let output = args
            .output
            .unwrap_or_else(|| PathBuf::from(&self.config.report_file));

        let repositories = self.discover_use_case.execute(&root).await?;
        eprintln!(
            "✓ Found {} repositories under {}",
            repositories.len(),
            root.display()
        );

        let report = self.report_use_case.execute(&root, &repositories).await?;
        for skipped in &report.skipped {
            eprintln!(
                "⚠ Skipped {}: {}",
                relative_path(&root, &skipped.path),
                skipped.reason
            );
        }

        let size = write_branch_report(&output, &report.rows)?;

        eprintln!("✓ Repositories scanned: {}", report.repositories_scanned);
        eprintln!("  Repositories skipped: {}", report.skipped.len());
        eprintln!("  Unmerged branches: {}", report.rows.len());
        eprintln!("✓ Report written to {} ({} bytes)", output.display(), size);

        // ヘッダー行 + 先頭 preview_rows 行
        let preview = preview_lines(&output, self.config.preview_rows + 1)?;
        eprintln!();
        eprintln!("Preview:");
        for line in preview {
            eprintln!("  {}", line);
        }

        Ok(report)
    }
}
