//! # Snapshot Share Use Case
//!
//! ファイル共有スナップショット作成ユースケース

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

use crate::application::dto::snapshot_request::SnapshotRequest;
use crate::domain::entities::access_window::{AccessWindow, SasToken};
use crate::domain::error::OpsError;
use crate::domain::ports::cloud_client::CloudResourceClient;

/// スナップショット作成結果
#[derive(Debug, Clone)]
pub struct SnapshotResult {
    /// 作成されたスナップショットの識別子
    pub snapshot_id: String,
    /// 使用したSASの有効期間
    pub window: AccessWindow,
}

/// ファイル共有スナップショット作成ユースケース
///
/// 共有の存在確認、SAS生成、スナップショット作成を順に行う。
/// 同じ要求でも呼び出すたびに別のスナップショットが作られる
pub struct SnapshotShareUseCase<C: CloudResourceClient> {
    client: Arc<C>,
}

impl<C: CloudResourceClient> SnapshotShareUseCase<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// スナップショットを作成する
    ///
    /// # Arguments
    ///
    /// * `request` - スナップショット作成要求
    /// * `now` - 有効期間の基準時刻
    ///
    /// # Errors
    ///
    /// いずれかの段階で失敗した場合、以降の外部呼び出しを行わずにエラーを返す
    pub async fn execute(
        &self,
        request: &SnapshotRequest,
        now: DateTime<Utc>,
    ) -> Result<SnapshotResult> {
        if request.duration_minutes == 0 {
            bail!("duration must be a positive number of minutes");
        }

        let share = &request.share;
        self.client.ensure_available().await?;

        let exists = self
            .client
            .share_exists(share)
            .await
            .context("Failed to check whether the file share exists")?;
        if !exists {
            return Err(OpsError::ShareNotFound {
                resource_group: share.resource_group.clone(),
                account: share.account.clone(),
                share: share.name.clone(),
            }
            .into());
        }

        let window =
            AccessWindow::starting_at(now, request.duration_minutes, request.start_skew_minutes);
        info!(
            "Requesting SAS for {} valid {} .. {}",
            share.account,
            window.start_param(),
            window.expiry_param()
        );

        let raw_token = self
            .client
            .generate_account_sas(&share.account, &window)
            .await
            .context("Failed to generate SAS token")?;
        let token = SasToken::normalize(&raw_token)
            .ok_or_else(|| OpsError::EmptySasToken(share.account.clone()))?;

        let snapshot_id = self
            .client
            .snapshot_share(share, &token, &request.metadata)
            .await
            .context("Failed to create share snapshot")?;
        let snapshot_id = snapshot_id.trim().to_string();
        if snapshot_id.is_empty() {
            return Err(OpsError::EmptySnapshotId(share.name.clone()).into());
        }

        Ok(SnapshotResult {
            snapshot_id,
            window,
        })
    }
}
