//! # Subscription List
//!
//! サブスクリプションIDファイルの解釈

/// サブスクリプションIDファイルのパーサー
pub struct SubscriptionList;

impl SubscriptionList {
    /// 1行1件のIDを抽出する
    ///
    /// 空行と `#` で始まるコメント行は無視する
    ///
    /// # 例
    ///
    /// ```
    /// use opskit::domain::services::subscription_list::SubscriptionList;
    ///
    /// let ids = SubscriptionList::parse("# prod\nsub-a\n\n  sub-b  \n");
    /// assert_eq!(ids, vec!["sub-a", "sub-b"]);
    /// ```
    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}
