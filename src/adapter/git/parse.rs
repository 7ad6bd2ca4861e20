//! Git Output Parsing
//!
//! `git` の標準出力の解釈

use anyhow::{bail, Context, Result};

use crate::domain::entities::branch_report::{CommitInfo, Divergence};

/// Field separator used in `git log --format`
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Format string for [`parse_commit_line`]
pub const LAST_COMMIT_FORMAT: &str = "--format=%an%x1f%ae%x1f%ci";

/// Non-empty trimmed lines
pub fn parse_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `rev-list --left-right --count base...branch`
///
/// Left side counts commits only on `base` (behind), right side counts
/// commits only on `branch` (ahead).
pub fn parse_divergence(output: &str) -> Result<Divergence> {
    let mut parts = output.split_whitespace();
    let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("unexpected rev-list output: {:?}", output.trim());
    };

    let behind = left
        .parse::<u32>()
        .with_context(|| format!("invalid behind count: {}", left))?;
    let ahead = right
        .parse::<u32>()
        .with_context(|| format!("invalid ahead count: {}", right))?;

    Ok(Divergence { ahead, behind })
}

/// Parse one line produced with [`LAST_COMMIT_FORMAT`]
pub fn parse_commit_line(output: &str) -> Result<CommitInfo> {
    let line = output.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, email, date] = fields.as_slice() else {
        bail!("unexpected log output: {:?}", line);
    };

    Ok(CommitInfo {
        author_name: name.to_string(),
        author_email: email.to_string(),
        date: date.to_string(),
    })
}

/// Parse `for-each-ref --format=%(refname:short) refs/remotes/<remote>`
///
/// Strips the remote prefix and drops the `HEAD` pointer, which shows up
/// either as `<remote>/HEAD` or as the bare `<remote>` alias.
pub fn parse_remote_branches(output: &str, remote: &str) -> Vec<String> {
    let prefix = format!("{}/", remote);
    parse_lines(output)
        .into_iter()
        .filter(|name| name != remote)
        .filter_map(|name| name.strip_prefix(&prefix).map(str::to_string))
        .filter(|branch| branch != "HEAD")
        .collect()
}

/// Strip `<remote>/` from a `symbolic-ref --short` result
pub fn parse_symbolic_ref(output: &str, remote: &str) -> Option<String> {
    let name = output.trim();
    let prefix = format!("{}/", remote);
    let branch = name.strip_prefix(&prefix).unwrap_or(name);
    if branch.is_empty() || branch == "HEAD" {
        None
    } else {
        Some(branch.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_divergence() {
        let divergence = parse_divergence("4\t17\n").unwrap();
        assert_eq!(divergence.behind, 4);
        assert_eq!(divergence.ahead, 17);
    }

    #[test]
    fn test_parse_divergence_invalid() {
        assert!(parse_divergence("").is_err());
        assert!(parse_divergence("3").is_err());
        assert!(parse_divergence("a\tb").is_err());
        assert!(parse_divergence("1\t2\t3").is_err());
    }

    #[test]
    fn test_parse_commit_line() {
        let commit =
            parse_commit_line("Jane Doe\u{1f}jane@example.com\u{1f}2024-12-25 10:00:00 +0100\n")
                .unwrap();
        assert_eq!(commit.author_name, "Jane Doe");
        assert_eq!(commit.author_email, "jane@example.com");
        assert_eq!(commit.date, "2024-12-25 10:00:00 +0100");
    }

    #[test]
    fn test_parse_commit_line_keeps_commas_in_name() {
        let commit = parse_commit_line("Doe, Jane\u{1f}jane@example.com\u{1f}2024-01-01").unwrap();
        assert_eq!(commit.author_name, "Doe, Jane");
    }

    #[test]
    fn test_parse_commit_line_invalid() {
        assert!(parse_commit_line("").is_err());
        assert!(parse_commit_line("only name").is_err());
    }

    #[test]
    fn test_parse_remote_branches() {
        let output = "origin\norigin/HEAD\norigin/develop\norigin/feature/login\nupstream/main\n";
        let branches = parse_remote_branches(output, "origin");
        assert_eq!(branches, vec!["develop", "feature/login"]);
    }

    #[test]
    fn test_parse_symbolic_ref() {
        assert_eq!(
            parse_symbolic_ref("origin/main\n", "origin").as_deref(),
            Some("main")
        );
        assert_eq!(
            parse_symbolic_ref("origin/release/2.x", "origin").as_deref(),
            Some("release/2.x")
        );
        assert_eq!(parse_symbolic_ref("", "origin"), None);
    }

    #[test]
    fn test_parse_lines() {
        assert_eq!(parse_lines("origin\n\n  fork \n"), vec!["origin", "fork"]);
        assert!(parse_lines("").is_empty());
    }
}
