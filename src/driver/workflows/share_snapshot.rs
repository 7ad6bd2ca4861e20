//! Share Snapshot Workflow
//!
//! ファイル共有スナップショットのワークフロー

use anyhow::Result;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::adapter::azure::AzCliClient;
use crate::adapter::config::Config;
use crate::adapter::process::{CommandRunner, TokioCommandRunner};
use crate::application::dto::snapshot_request::SnapshotRequest;
use crate::application::use_cases::snapshot_share::SnapshotShareUseCase;
use crate::domain::entities::share::ShareRef;
use crate::driver::cli::SnapshotArgs;

/// Share Snapshot Workflow
pub struct ShareSnapshotWorkflow<R: CommandRunner> {
    config: Config,
    snapshot_use_case: SnapshotShareUseCase<AzCliClient<R>>,
}

impl ShareSnapshotWorkflow<TokioCommandRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, Arc::new(TokioCommandRunner::new()))
    }
}

impl<R: CommandRunner> ShareSnapshotWorkflow<R> {
    /// Create a workflow that runs `az` through the given runner
    pub fn with_runner(config: Config, runner: Arc<R>) -> Self {
        let client = Arc::new(AzCliClient::new(runner, config.az_path.clone()));
        Self {
            snapshot_use_case: SnapshotShareUseCase::new(client),
            config,
        }
    }

    /// Execute the snapshot workflow and return the snapshot identifier
    pub async fn execute(&self, args: SnapshotArgs) -> Result<String> {
        let share = ShareRef::new(args.resource_group, args.account, args.share_name);
        let request = SnapshotRequest::new(share)
            .with_duration(args.duration_minutes)
            .with_start_skew(self.config.sas_start_skew_minutes)
            .with_metadata(args.metadata);

        info!("Snapshot request: {:?}", request);
        eprintln!(
            "→ Snapshotting share {} in {}/{}",
            request.share.name, request.share.resource_group, request.share.account
        );

        let result = self.snapshot_use_case.execute(&request, Utc::now()).await?;

        eprintln!(
            "✓ SAS token valid {} .. {}",
            result.window.start_param(),
            result.window.expiry_param()
        );
        eprintln!("✓ Snapshot created");
        println!("{}", result.snapshot_id);

        Ok(result.snapshot_id)
    }
}
