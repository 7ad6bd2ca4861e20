//! vm-extension-list
//!
//! 拡張機能を持つVMをサブスクリプション横断で一覧

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;

use opskit::adapter::config::Config;
use opskit::driver::cli::{self, ExtensionListArgs};
use opskit::driver::ExtensionListWorkflow;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    cli::init_logging();

    let args: ExtensionListArgs = cli::parse_args();

    // Load configuration
    let config = Config::load(&args.config)?;

    ExtensionListWorkflow::new(config).execute(args).await?;
    Ok(())
}
