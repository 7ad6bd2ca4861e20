//! share-snapshot
//!
//! Azure Files の共有スナップショットを作成

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;

use opskit::adapter::config::Config;
use opskit::driver::cli::{self, SnapshotArgs};
use opskit::driver::ShareSnapshotWorkflow;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    cli::init_logging();

    let args: SnapshotArgs = cli::parse_args();

    // Load configuration
    let config = Config::load(&args.config)?;

    ShareSnapshotWorkflow::new(config).execute(args).await?;
    Ok(())
}
