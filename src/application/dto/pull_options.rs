//! # Pull Options DTO
//!
//! 一括プルの動作フラグ

/// 一括プルのオプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullOptions {
    /// ローカル変更があってもプルする
    pub force: bool,
    /// プルの出力を抑制する
    pub quiet: bool,
    /// リポジトリごとの詳細を表示する
    pub verbose: bool,
}
