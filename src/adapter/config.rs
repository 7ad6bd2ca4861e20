//! Configuration
//!
//! JSON設定ファイルの読み込み。ファイルが存在しない場合は既定値を使う。

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::entities::access_window::DEFAULT_START_SKEW_MINUTES;
use crate::domain::entities::vm_extension::DEFAULT_EXTENSION_NAME;
use crate::domain::services::default_branch::DEFAULT_BRANCH_CANDIDATES;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/opskit/config.json";

const DEFAULT_REPORT_FILE: &str = "branch_report.csv";
const DEFAULT_PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Azure CLI executable
    pub az_path: String,
    /// git executable
    pub git_path: String,

    pub default_extension: String,
    pub default_branch_candidates: Vec<String>,
    pub report_file: String,

    /// SASの開始時刻を現在時刻からずらす分数（時計のずれ対策）
    pub sas_start_skew_minutes: u32,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            az_path: "az".to_string(),
            git_path: "git".to_string(),
            default_extension: DEFAULT_EXTENSION_NAME.to_string(),
            default_branch_candidates: DEFAULT_BRANCH_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            report_file: DEFAULT_REPORT_FILE.to_string(),
            sas_start_skew_minutes: DEFAULT_START_SKEW_MINUTES,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let path = PathBuf::from(shellexpand::tilde(path).as_ref());
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.az_path, "az");
        assert_eq!(
            config.default_branch_candidates,
            vec!["main", "master", "develop"]
        );
        assert_eq!(config.sas_start_skew_minutes, 5);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{"git_path": "/usr/local/bin/git", "default_branch_candidates": ["trunk"]}"#,
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.git_path, "/usr/local/bin/git");
        assert_eq!(config.default_branch_candidates, vec!["trunk"]);
        assert_eq!(config.default_extension, "OmsAgentForLinux");
        assert_eq!(config.report_file, "branch_report.csv");
    }

    #[test]
    fn test_invalid_json_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}
