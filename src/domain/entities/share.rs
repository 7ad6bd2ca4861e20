//! # File Share
//!
//! ファイル共有の識別子とスナップショットのメタデータ

use std::fmt;
use std::str::FromStr;

use crate::domain::error::OpsError;

/// ストレージアカウント内のファイル共有
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRef {
    pub resource_group: String,
    pub account: String,
    pub name: String,
}

impl ShareRef {
    pub fn new(
        resource_group: impl Into<String>,
        account: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            resource_group: resource_group.into(),
            account: account.into(),
            name: name.into(),
        }
    }
}

/// スナップショットに付与する `key=value` メタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataPair {
    pub key: String,
    pub value: String,
}

impl FromStr for MetadataPair {
    type Err = OpsError;

    /// 最初の `=` で分割する。値側に `=` を含んでもよい
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok(Self {
                key: key.trim().to_string(),
                value: value.to_string(),
            }),
            _ => Err(OpsError::InvalidMetadata(s.to_string())),
        }
    }
}

impl fmt::Display for MetadataPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_pair() {
        let pair: MetadataPair = "owner=platform".parse().unwrap();
        assert_eq!(pair.key, "owner");
        assert_eq!(pair.value, "platform");
        assert_eq!(pair.to_string(), "owner=platform");
    }

    #[test]
    fn test_parse_metadata_value_with_equals() {
        let pair: MetadataPair = "query=a=b".parse().unwrap();
        assert_eq!(pair.key, "query");
        assert_eq!(pair.value, "a=b");
    }

    #[test]
    fn test_parse_metadata_empty_value() {
        let pair: MetadataPair = "reason=".parse().unwrap();
        assert_eq!(pair.value, "");
    }

    #[test]
    fn test_parse_metadata_invalid() {
        assert!("novalue".parse::<MetadataPair>().is_err());
        assert!("=value".parse::<MetadataPair>().is_err());
        assert!("".parse::<MetadataPair>().is_err());
    }
}
