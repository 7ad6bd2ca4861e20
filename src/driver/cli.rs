//! CLI Argument Parsing
//!
//! 各ツールのCLI引数解析

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::adapter::config::DEFAULT_CONFIG_PATH;
use crate::adapter::report::ReportFormat;
use crate::application::dto::snapshot_request::DEFAULT_DURATION_MINUTES;
use crate::domain::entities::share::MetadataPair;

/// ファイル共有のスナップショットを作成するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "share-snapshot", version)]
#[command(about = "Create a snapshot of an Azure Files share using a short-lived SAS token", long_about = None)]
pub struct SnapshotArgs {
    /// Resource group of the storage account
    #[arg(short = 'g', long)]
    pub resource_group: String,

    /// Storage account name
    #[arg(short, long)]
    pub account: String,

    /// File share name
    #[arg(short = 'n', long)]
    pub share_name: String,

    /// Validity of the SAS token in minutes
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_DURATION_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub duration_minutes: u32,

    /// Snapshot metadata as key=value (repeatable)
    #[arg(long, value_name = "KEY=VALUE")]
    pub metadata: Vec<MetadataPair>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

/// サブスクリプション横断でVM拡張機能を一覧するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "vm-extension-list", version)]
#[command(about = "List VMs carrying a given extension across subscriptions", long_about = None)]
pub struct ExtensionListArgs {
    /// File with one subscription ID per line (# comments allowed)
    #[arg(short, long)]
    pub subscriptions: PathBuf,

    /// Extension name (defaults to the configured extension)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

/// VM拡張機能を削除するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "vm-extension-remove", version)]
#[command(about = "Remove an extension from a virtual machine", long_about = None)]
pub struct ExtensionRemoveArgs {
    /// Full resource ID of the virtual machine
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub vm_id: String,

    /// Extension name (defaults to the configured extension)
    pub extension: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

/// 未マージブランチのレポートを作成するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "branch-report", version)]
#[command(about = "Report remote branches not merged into the default branch", long_about = None)]
pub struct BranchReportArgs {
    /// CSV output file (defaults to the configured report file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to search for repositories
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

/// 配下の全リポジトリをプルするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "pull-all", version)]
#[command(about = "Pull every git repository under a directory", long_about = None)]
pub struct PullAllArgs {
    /// Pull even when there are local changes
    #[arg(short, long)]
    pub force: bool,

    /// Pass --quiet to git pull
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the status of every repository
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to search for repositories
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

/// 引数を解析する
///
/// 使い方の誤りは終了コード1、`--help` と `--version` は0で終了する
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        std::process::exit(code)
    })
}

/// ロガーを初期化する（`RUST_LOG` 未設定時は warn 以上）
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
