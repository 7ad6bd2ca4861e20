//! # Snapshot Request DTO
//!
//! スナップショット作成要求のData Transfer Object

use crate::domain::entities::access_window::DEFAULT_START_SKEW_MINUTES;
use crate::domain::entities::share::{MetadataPair, ShareRef};

/// 既定のSAS有効期間（分）
pub const DEFAULT_DURATION_MINUTES: u32 = 15;

/// スナップショット作成要求
#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    /// 対象のファイル共有
    pub share: ShareRef,
    /// SASの有効期間（分、正の整数）
    pub duration_minutes: u32,
    /// 開始時刻のさかのぼり（分）
    pub start_skew_minutes: u32,
    /// スナップショットに付与するメタデータ
    pub metadata: Vec<MetadataPair>,
}

impl SnapshotRequest {
    /// 既定値で要求を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use opskit::application::dto::snapshot_request::SnapshotRequest;
    /// use opskit::domain::entities::share::ShareRef;
    ///
    /// let request = SnapshotRequest::new(ShareRef::new("rg-data", "stdata", "exports"));
    ///
    /// assert_eq!(request.duration_minutes, 15);
    /// assert_eq!(request.start_skew_minutes, 5);
    /// assert!(request.metadata.is_empty());
    /// ```
    pub fn new(share: ShareRef) -> Self {
        Self {
            share,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            start_skew_minutes: DEFAULT_START_SKEW_MINUTES,
            metadata: Vec::new(),
        }
    }

    pub fn with_duration(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn with_start_skew(mut self, start_skew_minutes: u32) -> Self {
        self.start_skew_minutes = start_skew_minutes;
        self
    }

    pub fn with_metadata(mut self, metadata: Vec<MetadataPair>) -> Self {
        self.metadata = metadata;
        self
    }
}
