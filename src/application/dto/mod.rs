//! # Data Transfer Objects
//!
//! Use Caseへの入力

pub mod pull_options;
pub mod snapshot_request;
