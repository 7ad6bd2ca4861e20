//! Adapter Layer
//!
//! 外部システム（`az`, `git`, ファイルシステム）との統合

pub mod azure;
pub mod config;
pub mod git;
pub mod process;
pub mod report;
pub mod repositories;
