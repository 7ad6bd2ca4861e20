//! # Use Cases
//!
//! ツールごとのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SnapshotShareUseCase**: ファイル共有のスナップショット作成
//! - **ListExtensionsUseCase**: VM拡張機能の一覧
//! - **RemoveExtensionUseCase**: VM拡張機能の削除
//! - **DiscoverRepositoriesUseCase**: リポジトリルートの探索
//! - **BranchReportUseCase**: 未マージブランチレポートの生成
//! - **PullRepositoriesUseCase**: リポジトリの一括プル

pub mod branch_report;
pub mod discover_repositories;
pub mod list_extensions;
pub mod pull_repositories;
pub mod remove_extension;
pub mod snapshot_share;
