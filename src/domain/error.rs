//! # Domain Errors
//!
//! 運用ツール共通のエラー分類

use std::path::PathBuf;
use thiserror::Error;

/// 外部コマンドや入力検証で発生する型付きエラー
#[derive(Debug, Error)]
pub enum OpsError {
    /// 必要な外部CLIが見つからない
    #[error("required tool '{0}' was not found on PATH")]
    ToolNotFound(String),

    #[error(
        "file share '{share}' not found in storage account '{account}' (resource group '{resource_group}')"
    )]
    ShareNotFound {
        resource_group: String,
        account: String,
        share: String,
    },

    #[error("storage account '{0}' returned an empty SAS token")]
    EmptySasToken(String),

    #[error("snapshot of share '{0}' returned no snapshot identifier")]
    EmptySnapshotId(String),

    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// 外部コマンドが非ゼロで終了した
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("invalid metadata '{0}', expected key=value")]
    InvalidMetadata(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_not_found_message() {
        let err = OpsError::ShareNotFound {
            resource_group: "rg-prod".to_string(),
            account: "stprod".to_string(),
            share: "data".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "file share 'data' not found in storage account 'stprod' (resource group 'rg-prod')"
        );
    }

    #[test]
    fn test_command_failed_message() {
        let err = OpsError::CommandFailed {
            command: "git pull".to_string(),
            status: "exit status 1".to_string(),
            stderr: "fatal: no upstream".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "`git pull` failed (exit status 1): fatal: no upstream"
        );
    }

    #[test]
    fn test_directory_not_found_message() {
        let err = OpsError::DirectoryNotFound(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "directory does not exist: /nope");
    }
}
