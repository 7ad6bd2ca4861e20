//! # Domain Services
//!
//! 外部依存のない純粋なポリシー
//!
//! - **DefaultBranchResolver**: 基準ブランチの決定
//! - **SubscriptionList**: サブスクリプションIDファイルの解釈
//! - **repository_path**: リポジトリの表示名と相対パス

pub mod default_branch;
pub mod repository_path;
pub mod subscription_list;
