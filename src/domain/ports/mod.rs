//! # Domain Ports
//!
//! 外部コラボレーターのtrait定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - Use Caseはtraitにのみ依存し、テストではフェイクに差し替える

pub mod cloud_client;
pub mod repository_finder;
pub mod vcs_client;
