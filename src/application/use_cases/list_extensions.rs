//! # List Extensions Use Case
//!
//! サブスクリプション横断のVM拡張機能一覧ユースケース

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::entities::vm_extension::ExtensionMatch;
use crate::domain::ports::cloud_client::CloudResourceClient;

/// 走査結果
#[derive(Debug, Clone, Default)]
pub struct ExtensionScan {
    /// 拡張機能が見つかったVM
    pub matches: Vec<ExtensionMatch>,
    /// 走査できたサブスクリプション数
    pub subscriptions_processed: usize,
    /// 切り替えまたはVM一覧取得に失敗したサブスクリプション数
    pub subscriptions_skipped: usize,
    /// 走査したVM数
    pub vms_scanned: usize,
    /// 拡張機能の照会に失敗したVM数
    pub vms_failed: usize,
}

/// VM拡張機能一覧ユースケース
///
/// サブスクリプション・VM単位の失敗は警告としてスキップし、走査を続ける
pub struct ListExtensionsUseCase<C: CloudResourceClient> {
    client: Arc<C>,
}

impl<C: CloudResourceClient> ListExtensionsUseCase<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// 全サブスクリプションを走査する
    ///
    /// # Arguments
    ///
    /// * `subscriptions` - サブスクリプションID
    /// * `extension` - 探す拡張機能名
    ///
    /// # Errors
    ///
    /// CLIが利用できない場合のみエラーを返す
    pub async fn execute(
        &self,
        subscriptions: &[String],
        extension: &str,
    ) -> Result<ExtensionScan> {
        self.client.ensure_available().await?;

        let mut scan = ExtensionScan::default();

        for subscription in subscriptions {
            if let Err(e) = self.client.set_subscription(subscription).await {
                warn!("Skipping subscription {}: {:#}", subscription, e);
                scan.subscriptions_skipped += 1;
                continue;
            }

            let vms = match self.client.list_vms().await {
                Ok(vms) => vms,
                Err(e) => {
                    warn!("Failed to list VMs in subscription {}: {:#}", subscription, e);
                    scan.subscriptions_skipped += 1;
                    continue;
                }
            };

            info!("Subscription {}: {} VMs", subscription, vms.len());
            scan.subscriptions_processed += 1;

            for vm in &vms {
                scan.vms_scanned += 1;
                match self.client.find_vm_extension(vm, extension).await {
                    Ok(Some(found)) => {
                        info!("{} has {} ({})", vm.name, found.name, found.version);
                        scan.matches.push(ExtensionMatch::new(subscription, vm, found));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!(
                            "Failed to query extensions on {}/{}: {:#}",
                            vm.resource_group, vm.name, e
                        );
                        scan.vms_failed += 1;
                    }
                }
            }
        }

        Ok(scan)
    }
}
