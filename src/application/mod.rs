//! # Application Layer
//!
//! ツールごとのビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - ポート（trait）に依存（`az` / `git` の実装には依存しない）
//! - 外部コマンドは1つずつ順番に待機する
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **use_cases**: ユースケース

pub mod dto;
pub mod use_cases;
