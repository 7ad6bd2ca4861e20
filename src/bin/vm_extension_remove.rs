//! vm-extension-remove
//!
//! VM拡張機能を削除

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;

use opskit::adapter::config::Config;
use opskit::driver::cli::{self, ExtensionRemoveArgs};
use opskit::driver::ExtensionRemoveWorkflow;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    cli::init_logging();

    let args: ExtensionRemoveArgs = cli::parse_args();

    // Load configuration
    let config = Config::load(&args.config)?;

    ExtensionRemoveWorkflow::new(config).execute(args).await?;
    Ok(())
}
