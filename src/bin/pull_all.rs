//! pull-all
//!
//! 配下の全リポジトリをプル

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;

use opskit::adapter::config::Config;
use opskit::driver::cli::{self, PullAllArgs};
use opskit::driver::PullAllWorkflow;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    cli::init_logging();

    let args: PullAllArgs = cli::parse_args();

    // Load configuration
    let config = Config::load(&args.config)?;

    PullAllWorkflow::new(config).execute(args).await?;
    Ok(())
}
