//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **AccessWindow / SasToken**: SASトークンの有効期間とトークン
//! - **ShareRef / MetadataPair**: ファイル共有とスナップショットのメタデータ
//! - **VirtualMachine / ExtensionMatch**: VMと拡張機能
//! - **BranchReportRow**: 未マージブランチレポートの行
//! - **PullOutcome / PullSummary**: 一括プルの結果

pub mod access_window;
pub mod branch_report;
pub mod pull;
pub mod share;
pub mod vm_extension;
