//! # Default Branch Resolution
//!
//! 基準ブランチの決定ポリシー

/// 候補ブランチ名の既定値（優先順）
pub const DEFAULT_BRANCH_CANDIDATES: [&str; 3] = ["main", "master", "develop"];

/// 基準ブランチ決定サービス
pub struct DefaultBranchResolver;

impl DefaultBranchResolver {
    /// 基準ブランチを決定する
    ///
    /// 1. リモートのシンボリック参照（`<remote>/HEAD`）。リモートに存在する場合のみ
    /// 2. `candidates` のうちリモートに存在する最初のもの
    /// 3. リモートブランチのうち辞書順で最初のもの
    ///
    /// # Arguments
    ///
    /// * `symbolic` - シンボリック参照が指すブランチ名（リモート名なし）
    /// * `candidates` - 優先候補
    /// * `remote_branches` - リモートブランチ名の一覧（リモート名なし）
    ///
    /// # Returns
    ///
    /// 決定できない場合は `None`
    pub fn resolve(
        symbolic: Option<&str>,
        candidates: &[String],
        remote_branches: &[String],
    ) -> Option<String> {
        // 既定ブランチ名の変更後も `<remote>/HEAD` は削除済みのブランチを指し続ける
        if let Some(branch) = symbolic
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .filter(|b| remote_branches.iter().any(|r| r.as_str() == *b))
        {
            return Some(branch.to_string());
        }

        if let Some(candidate) = candidates
            .iter()
            .find(|candidate| remote_branches.contains(candidate))
        {
            return Some(candidate.clone());
        }

        remote_branches.iter().min().cloned()
    }
}
