//! Extension Remove Workflow
//!
//! VM拡張機能削除のワークフロー

use anyhow::Result;
use std::sync::Arc;

use crate::adapter::azure::AzCliClient;
use crate::adapter::config::Config;
use crate::adapter::process::{CommandRunner, TokioCommandRunner};
use crate::application::use_cases::remove_extension::RemoveExtensionUseCase;
use crate::driver::cli::ExtensionRemoveArgs;

/// Extension Remove Workflow
pub struct ExtensionRemoveWorkflow<R: CommandRunner> {
    remove_use_case: RemoveExtensionUseCase<AzCliClient<R>>,
}

impl ExtensionRemoveWorkflow<TokioCommandRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, Arc::new(TokioCommandRunner::new()))
    }
}

impl<R: CommandRunner> ExtensionRemoveWorkflow<R> {
    pub fn with_runner(config: Config, runner: Arc<R>) -> Self {
        let client = Arc::new(AzCliClient::new(runner, config.az_path));
        Self {
            remove_use_case: RemoveExtensionUseCase::new(client, config.default_extension),
        }
    }

    /// Delete the extension and return its name
    pub async fn execute(&self, args: ExtensionRemoveArgs) -> Result<String> {
        eprintln!("→ Removing extension from {}", args.vm_id);

        let extension = self
            .remove_use_case
            .execute(&args.vm_id, args.extension.as_deref())
            .await?;

        println!("✓ Removed extension {} from {}", extension, args.vm_id);
        Ok(extension)
    }
}
