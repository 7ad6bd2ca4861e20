//! # Report Writers
//!
//! レポート（CSV・テーブル）の出力

pub mod branch_csv;
pub mod extension_table;

pub use branch_csv::{preview_lines, write_branch_report};
pub use extension_table::{write_extension_matches, ReportFormat};
