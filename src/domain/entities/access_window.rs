//! # Access Window / SAS Token
//!
//! SASトークンの有効期間とトークン文字列のバリューオブジェクト

use chrono::{DateTime, Duration, Utc};

/// 開始時刻をさかのぼらせる分数（クロックスキュー対策）
pub const DEFAULT_START_SKEW_MINUTES: u32 = 5;

/// SAS の `--start` / `--expiry` に渡す書式（秒まで保持する）
pub const SAS_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// SASトークンの有効期間
///
/// `[now - skew, now + duration]` を表す
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessWindow {
    start: DateTime<Utc>,
    expiry: DateTime<Utc>,
}

impl AccessWindow {
    /// 呼び出し時刻から有効期間を計算
    ///
    /// # Arguments
    ///
    /// * `now` - 呼び出し時刻
    /// * `duration_minutes` - 有効期間（分）
    /// * `start_skew_minutes` - 開始時刻を過去にずらす分数
    pub fn starting_at(now: DateTime<Utc>, duration_minutes: u32, start_skew_minutes: u32) -> Self {
        Self {
            start: now - Duration::minutes(i64::from(start_skew_minutes)),
            expiry: now + Duration::minutes(i64::from(duration_minutes)),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    pub fn start_param(&self) -> String {
        self.start.format(SAS_TIME_FORMAT).to_string()
    }

    pub fn expiry_param(&self) -> String {
        self.expiry.format(SAS_TIME_FORMAT).to_string()
    }
}

/// 正規化済みSASトークン（常に `?` で始まる）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SasToken(String);

impl SasToken {
    /// CLI出力からトークンを正規化
    ///
    /// 前後の空白と引用符を除去し、先頭に `?` を付与する。
    /// 空の場合は `None`
    ///
    /// # 例
    ///
    /// ```
    /// use opskit::domain::entities::access_window::SasToken;
    ///
    /// let token = SasToken::normalize("se=2024&sp=r&sig=abc\n").unwrap();
    /// assert_eq!(token.as_query(), "?se=2024&sp=r&sig=abc");
    ///
    /// assert!(SasToken::normalize("  \"\"  ").is_none());
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().trim_matches('"').trim();
        let body = trimmed.trim_start_matches('?');
        if body.is_empty() {
            return None;
        }
        Some(Self(format!("?{}", body)))
    }

    /// `?` 付きのクエリ文字列
    pub fn as_query(&self) -> &str {
        &self.0
    }
}
