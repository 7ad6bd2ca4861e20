//! # Branch Report Entities
//!
//! 未マージブランチレポートの行と関連バリューオブジェクト

/// 基準ブランチに対するコミットの差分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Divergence {
    /// ブランチにのみ存在するコミット数
    pub ahead: u32,
    /// 基準ブランチにのみ存在するコミット数
    pub behind: u32,
}

impl Divergence {
    /// 基準ブランチに完全にマージ済みか
    pub fn is_merged(&self) -> bool {
        self.ahead == 0
    }
}

/// 最終コミットの情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub author_name: String,
    pub author_email: String,
    pub date: String,
}

/// レポートの1行
///
/// フィールドの宣言順がそのままソート順になる（Repository, Path, Branch）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BranchReportRow {
    pub repository: String,
    pub path: String,
    pub branch: String,
    pub ahead: u32,
    pub behind: u32,
    pub author_name: String,
    pub author_email: String,
    pub last_commit_date: String,
}

impl BranchReportRow {
    pub const HEADER: [&'static str; 8] = [
        "Repository",
        "Path",
        "Branch",
        "Commits Ahead",
        "Commits Behind",
        "Last Author",
        "Author Email",
        "Last Commit Date",
    ];

    pub fn new(
        repository: &str,
        path: &str,
        branch: &str,
        divergence: Divergence,
        commit: CommitInfo,
    ) -> Self {
        Self {
            repository: repository.to_string(),
            path: path.to_string(),
            branch: branch.to_string(),
            ahead: divergence.ahead,
            behind: divergence.behind,
            author_name: commit.author_name,
            author_email: commit.author_email,
            last_commit_date: commit.date,
        }
    }

    pub fn to_record(&self) -> [String; 8] {
        [
            self.repository.clone(),
            self.path.clone(),
            self.branch.clone(),
            self.ahead.to_string(),
            self.behind.to_string(),
            self.author_name.clone(),
            self.author_email.clone(),
            self.last_commit_date.clone(),
        ]
    }
}
