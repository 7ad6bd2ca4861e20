//! # Remove Extension Use Case
//!
//! VM拡張機能削除ユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::domain::ports::cloud_client::CloudResourceClient;

/// VM拡張機能削除ユースケース
///
/// 削除要求は1回だけ発行し、リトライしない
pub struct RemoveExtensionUseCase<C: CloudResourceClient> {
    client: Arc<C>,
    default_extension: String,
}

impl<C: CloudResourceClient> RemoveExtensionUseCase<C> {
    /// # Arguments
    ///
    /// * `client` - クラウドリソースクライアント
    /// * `default_extension` - 拡張機能名が省略された場合に使う名前
    pub fn new(client: Arc<C>, default_extension: impl Into<String>) -> Self {
        Self {
            client,
            default_extension: default_extension.into(),
        }
    }

    /// 拡張機能を削除する
    ///
    /// # Returns
    ///
    /// 削除した拡張機能名
    pub async fn execute(&self, vm_id: &str, extension: Option<&str>) -> Result<String> {
        let extension = extension
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.default_extension)
            .to_string();

        self.client.ensure_available().await?;

        info!("Deleting extension {} from {}", extension, vm_id);
        self.client
            .delete_vm_extension(vm_id, &extension)
            .await
            .with_context(|| format!("Failed to remove extension {} from {}", extension, vm_id))?;

        Ok(extension)
    }
}
