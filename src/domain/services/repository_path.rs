//! # Repository Path
//!
//! 探索ルートを基準にしたリポジトリの表示名

use std::path::Path;

/// リポジトリのディレクトリ名
pub fn repository_name(repo: &Path) -> String {
    repo.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| repo.display().to_string())
}

/// 探索ルートからの相対パス（ルート自身は `.`）
pub fn relative_path(root: &Path, repo: &Path) -> String {
    match repo.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => repo.display().to_string(),
    }
}
