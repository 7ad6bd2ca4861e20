//! # Git Adapter
//!
//! `git` CLIによるバージョン管理操作

pub mod git_cli_client;
pub mod parse;

pub use git_cli_client::GitCliClient;
