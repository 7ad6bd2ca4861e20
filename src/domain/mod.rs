//! # Domain Layer
//!
//! このモジュールは運用ツールの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部CLI（`az`, `git`）について何も知らない
//! - 外部コマンドはポート（trait）経由でのみ呼び出す
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティとバリューオブジェクト
//! - **ports**: 外部コラボレーターのtrait定義
//! - **services**: Domain Service（ポリシー）
//! - **error**: 型付きエラー

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
