//! # opskit
//!
//! `az` と `git` をラップする運用ツール集
//!
//! - `share-snapshot`: 短命のSASでAzure Filesの共有スナップショットを作成
//! - `vm-extension-list`: サブスクリプション横断で拡張機能を持つVMを一覧
//! - `vm-extension-remove`: VM拡張機能を削除
//! - `branch-report`: 未マージのリモートブランチをCSVに出力
//! - `pull-all`: 配下のリポジトリを一括プル
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、ポート（trait）、純粋なポリシー
//! - **Application層**: ツールごとのユースケース
//! - **Adapter層**: 外部CLI・ファイルシステムとの統合
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部プロセス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
