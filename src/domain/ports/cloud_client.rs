//! # Cloud Resource Client Port
//!
//! クラウドリソースCLIの操作を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::access_window::{AccessWindow, SasToken};
use crate::domain::entities::share::{MetadataPair, ShareRef};
use crate::domain::entities::vm_extension::{VirtualMachine, VmExtension};

/// クラウドリソースクライアント
///
/// 認証済みのクラウドCLIが提供する操作ごとに1メソッド
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CloudResourceClient: Send + Sync {
    /// CLIが実行可能か確認する
    ///
    /// # Errors
    ///
    /// CLIが見つからない場合は `OpsError::ToolNotFound`
    async fn ensure_available(&self) -> Result<()>;

    /// アクティブなサブスクリプションを切り替える
    async fn set_subscription(&self, subscription: &str) -> Result<()>;

    /// 現在のサブスクリプションのVM一覧
    async fn list_vms(&self) -> Result<Vec<VirtualMachine>>;

    /// VMに指定の拡張機能がインストールされていれば返す
    ///
    /// # Returns
    ///
    /// 未インストールの場合は `Ok(None)`（エラーではない）
    async fn find_vm_extension(
        &self,
        vm: &VirtualMachine,
        extension: &str,
    ) -> Result<Option<VmExtension>>;

    /// VMから拡張機能を削除する
    async fn delete_vm_extension(&self, vm_id: &str, extension: &str) -> Result<()>;

    /// ファイル共有が存在するか
    async fn share_exists(&self, share: &ShareRef) -> Result<bool>;

    /// 読み取り専用・HTTPSのみのアカウントSASを生成する
    ///
    /// # Returns
    ///
    /// CLIが返した生のトークン文字列（未正規化）
    async fn generate_account_sas(&self, account: &str, window: &AccessWindow) -> Result<String>;

    /// ファイル共有のスナップショットを作成する
    ///
    /// # Returns
    ///
    /// スナップショット識別子（空の場合あり）
    async fn snapshot_share(
        &self,
        share: &ShareRef,
        sas: &SasToken,
        metadata: &[MetadataPair],
    ) -> Result<String>;
}
