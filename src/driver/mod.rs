//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出して各ツールのフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - 進捗は標準エラー、結果は標準出力に出す
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース、ロガー初期化
//! - **workflows**: ツールごとのオーケストレーション

pub mod cli;
pub mod workflows;

pub use workflows::{
    BranchReportWorkflow, ExtensionListWorkflow, ExtensionRemoveWorkflow, PullAllWorkflow,
    ShareSnapshotWorkflow,
};
