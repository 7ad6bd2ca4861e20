//! Extension List Workflow
//!
//! サブスクリプション横断の拡張機能一覧ワークフロー。
//! 進捗は標準エラー、結果は標準出力（または `--output` のファイル）に書く。

use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::sync::Arc;

use crate::adapter::azure::AzCliClient;
use crate::adapter::config::Config;
use crate::adapter::process::{CommandRunner, TokioCommandRunner};
use crate::adapter::report::write_extension_matches;
use crate::application::use_cases::list_extensions::{ExtensionScan, ListExtensionsUseCase};
use crate::domain::services::subscription_list::SubscriptionList;
use crate::driver::cli::ExtensionListArgs;

/// Extension List Workflow
pub struct ExtensionListWorkflow<R: CommandRunner> {
    config: Config,
    list_use_case: ListExtensionsUseCase<AzCliClient<R>>,
}

impl ExtensionListWorkflow<TokioCommandRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, Arc::new(TokioCommandRunner::new()))
    }
}

impl<R: CommandRunner> ExtensionListWorkflow<R> {
    pub fn with_runner(config: Config, runner: Arc<R>) -> Self {
        let client = Arc::new(AzCliClient::new(runner, config.az_path.clone()));
        Self {
            list_use_case: ListExtensionsUseCase::new(client),
            config,
        }
    }

    /// Execute the listing workflow
    pub async fn execute(&self, args: ExtensionListArgs) -> Result<ExtensionScan> {
        let content = fs::read_to_string(&args.subscriptions).with_context(|| {
            format!(
                "Failed to read subscriptions file: {}",
                args.subscriptions.display()
            )
        })?;
        let subscriptions = SubscriptionList::parse(&content);
        if subscriptions.is_empty() {
            bail!(
                "No subscription IDs found in {}",
                args.subscriptions.display()
            );
        }

        let extension = args
            .extension
            .clone()
            .unwrap_or_else(|| self.config.default_extension.clone());
        eprintln!(
            "✓ Loaded {} subscriptions from {}",
            subscriptions.len(),
            args.subscriptions.display()
        );
        eprintln!("→ Searching for extension {}", extension);

        let scan = self.list_use_case.execute(&subscriptions, &extension).await?;

        match &args.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_extension_matches(BufWriter::new(file), &scan.matches, args.format)?;
                eprintln!("✓ Wrote {} rows to {}", scan.matches.len(), path.display());
            }
            None => {
                write_extension_matches(io::stdout().lock(), &scan.matches, args.format)?;
            }
        }

        print_summary(&scan);
        Ok(scan)
    }
}

fn print_summary(scan: &ExtensionScan) {
    eprintln!(
        "✓ Subscriptions processed: {}",
        scan.subscriptions_processed
    );
    if scan.subscriptions_skipped > 0 {
        eprintln!("⚠ Subscriptions skipped: {}", scan.subscriptions_skipped);
    }
    eprintln!("✓ VMs scanned: {}", scan.vms_scanned);
    if scan.vms_failed > 0 {
        eprintln!("⚠ VMs that could not be queried: {}", scan.vms_failed);
    }
    eprintln!("✓ Matches: {}", scan.matches.len());
}
