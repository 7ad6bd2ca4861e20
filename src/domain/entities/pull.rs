//! # Pull Outcome
//!
//! 一括プルの結果と集計

/// 1リポジトリの同期結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOutcome {
    /// プル成功
    Updated { output: String },
    /// リモート未設定のためスキップ
    SkippedNoRemote,
    /// ローカル変更があるためスキップ
    SkippedLocalChanges { modified: bool, untracked: bool },
    /// その他の失敗
    Failed { reason: String },
}

/// 実行全体の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PullSummary {
    pub found: usize,
    pub updated: usize,
    pub skipped_local_changes: usize,
    pub skipped_no_remote: usize,
    pub failed: usize,
}

impl PullSummary {
    pub fn record(&mut self, outcome: &PullOutcome) {
        self.found += 1;
        match outcome {
            PullOutcome::Updated { .. } => self.updated += 1,
            PullOutcome::SkippedNoRemote => self.skipped_no_remote += 1,
            PullOutcome::SkippedLocalChanges { .. } => self.skipped_local_changes += 1,
            PullOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut summary = PullSummary::default();
        summary.record(&PullOutcome::Updated {
            output: "Already up to date.".to_string(),
        });
        summary.record(&PullOutcome::SkippedNoRemote);
        summary.record(&PullOutcome::SkippedLocalChanges {
            modified: true,
            untracked: false,
        });
        summary.record(&PullOutcome::Failed {
            reason: "boom".to_string(),
        });
        summary.record(&PullOutcome::Updated {
            output: String::new(),
        });

        assert_eq!(
            summary,
            PullSummary {
                found: 5,
                updated: 2,
                skipped_local_changes: 1,
                skipped_no_remote: 1,
                failed: 1,
            }
        );
    }
}
