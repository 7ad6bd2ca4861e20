//! Git CLI Client
//!
//! VersionControlClientの `git` 実装
//!
//! Every call passes the repository root with `git -C <repo>`, so the
//! process working directory is never changed.

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::parse::{
    parse_commit_line, parse_divergence, parse_lines, parse_remote_branches, parse_symbolic_ref,
    LAST_COMMIT_FORMAT,
};
use crate::adapter::process::{CommandOutput, CommandRunner, CommandSpec};
use crate::domain::entities::branch_report::{CommitInfo, Divergence};
use crate::domain::ports::vcs_client::VersionControlClient;

/// `git` backed implementation of [`VersionControlClient`]
pub struct GitCliClient<R: CommandRunner> {
    runner: Arc<R>,
    program: String,
}

impl<R: CommandRunner> GitCliClient<R> {
    pub fn new(runner: Arc<R>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    fn command<I, S>(&self, repo: &Path, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut command = CommandSpec::new(
            self.program.clone(),
            ["-C".to_string(), repo.to_string_lossy().into_owned()],
        );
        command.args.extend(args.into_iter().map(Into::into));
        command.env("GIT_TERMINAL_PROMPT", "0")
    }

    async fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        self.runner.run(command).await
    }

    async fn run_checked(&self, command: CommandSpec) -> Result<CommandOutput> {
        let output = self.run(&command).await?;
        output.check(&command)
    }
}

#[async_trait]
impl<R: CommandRunner> VersionControlClient for GitCliClient<R> {
    async fn ensure_available(&self) -> Result<()> {
        let command = CommandSpec::new(self.program.clone(), ["--version"]);
        self.run_checked(command).await.map(|_| ())
    }

    async fn remotes(&self, repo: &Path) -> Result<Vec<String>> {
        let output = self.run_checked(self.command(repo, ["remote"])).await?;
        Ok(parse_lines(&output.stdout))
    }

    async fn fetch(&self, repo: &Path, remote: &str) -> Result<()> {
        self.run_checked(self.command(repo, ["fetch", "--prune", remote]))
            .await
            .map(|_| ())
    }

    async fn symbolic_default_branch(&self, repo: &Path, remote: &str) -> Result<Option<String>> {
        let head = format!("refs/remotes/{}/HEAD", remote);
        let output = self
            .run(&self.command(repo, ["symbolic-ref", "--quiet", "--short", head.as_str()]))
            .await?;

        // 未設定の場合は非ゼロで終了する
        if !output.is_success() {
            return Ok(None);
        }
        Ok(parse_symbolic_ref(&output.stdout, remote))
    }

    async fn remote_branches(&self, repo: &Path, remote: &str) -> Result<Vec<String>> {
        let refs = format!("refs/remotes/{}", remote);
        let output = self
            .run_checked(self.command(
                repo,
                ["for-each-ref", "--format=%(refname:short)", refs.as_str()],
            ))
            .await?;
        Ok(parse_remote_branches(&output.stdout, remote))
    }

    async fn ahead_behind(&self, repo: &Path, base: &str, branch: &str) -> Result<Divergence> {
        let range = format!("{}...{}", base, branch);
        // `--` でリビジョン指定とパス指定を区別する
        let output = self
            .run_checked(self.command(
                repo,
                ["rev-list", "--left-right", "--count", range.as_str(), "--"],
            ))
            .await?;
        parse_divergence(&output.stdout)
    }

    async fn last_commit(&self, repo: &Path, rev: &str) -> Result<CommitInfo> {
        let output = self
            .run_checked(self.command(repo, ["log", "-1", LAST_COMMIT_FORMAT, rev, "--"]))
            .await?;
        parse_commit_line(&output.stdout)
    }

    async fn has_uncommitted_changes(&self, repo: &Path) -> Result<bool> {
        // stat情報が古いと diff-index が誤検知するため先に更新する
        let _ = self
            .run(&self.command(repo, ["update-index", "-q", "--refresh"]))
            .await?;

        let command = self.command(repo, ["diff-index", "--quiet", "HEAD", "--"]);
        let output = self.run(&command).await?;
        match output.status {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => output.check(&command).map(|_| false),
        }
    }

    async fn has_untracked_files(&self, repo: &Path) -> Result<bool> {
        let output = self
            .run_checked(self.command(repo, ["ls-files", "--others", "--exclude-standard"]))
            .await?;
        Ok(!output.stdout.trim().is_empty())
    }

    async fn pull(&self, repo: &Path, quiet: bool) -> Result<String> {
        let mut command = self.command(repo, ["pull"]);
        if quiet {
            command = command.arg("--quiet");
        }

        let output = self.run_checked(command).await?;
        Ok(output.stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::process::runner::MockCommandRunner;

    fn client(mock: MockCommandRunner) -> GitCliClient<MockCommandRunner> {
        GitCliClient::new(Arc::new(mock), "git")
    }

    fn args_after_repo(cmd: &CommandSpec) -> Vec<String> {
        cmd.args[2..].to_vec()
    }

    #[tokio::test]
    async fn test_commands_target_repository_explicitly() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| {
                cmd.program == "git"
                    && cmd.args[..3] == ["-C", "/src/api", "remote"]
                    && cmd.env.contains(&("GIT_TERMINAL_PROMPT".to_string(), "0".to_string()))
            })
            .returning(|_| Ok(CommandOutput::success("origin\nfork\n")));

        let remotes = client(mock).remotes(Path::new("/src/api")).await.unwrap();
        assert_eq!(remotes, vec!["origin", "fork"]);
    }

    #[tokio::test]
    async fn test_ahead_behind_uses_symmetric_range() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| {
                args_after_repo(cmd)
                    == [
                        "rev-list",
                        "--left-right",
                        "--count",
                        "origin/main...origin/feature",
                        "--",
                    ]
            })
            .returning(|_| Ok(CommandOutput::success("2\t5\n")));

        let divergence = client(mock)
            .ahead_behind(Path::new("/src/api"), "origin/main", "origin/feature")
            .await
            .unwrap();

        assert_eq!(divergence, Divergence { ahead: 5, behind: 2 });
    }

    #[tokio::test]
    async fn test_symbolic_default_branch_missing() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| args_after_repo(cmd)[0] == "symbolic-ref")
            .returning(|_| Ok(CommandOutput::failure(1, "")));

        let branch = client(mock)
            .symbolic_default_branch(Path::new("/src/api"), "origin")
            .await
            .unwrap();

        assert!(branch.is_none());
    }

    #[tokio::test]
    async fn test_symbolic_default_branch_present() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| {
                args_after_repo(cmd)
                    == ["symbolic-ref", "--quiet", "--short", "refs/remotes/origin/HEAD"]
            })
            .returning(|_| Ok(CommandOutput::success("origin/trunk\n")));

        let branch = client(mock)
            .symbolic_default_branch(Path::new("/src/api"), "origin")
            .await
            .unwrap();

        assert_eq!(branch.as_deref(), Some("trunk"));
    }

    #[tokio::test]
    async fn test_uncommitted_changes_by_exit_status() {
        for (status, expected) in [(0, false), (1, true)] {
            let mut mock = MockCommandRunner::new();
            mock.expect_run()
                .withf(|cmd| args_after_repo(cmd)[0] == "update-index")
                .returning(|_| Ok(CommandOutput::success("")));
            mock.expect_run()
                .withf(|cmd| args_after_repo(cmd)[0] == "diff-index")
                .returning(move |_| {
                    Ok(CommandOutput {
                        status: Some(status),
                        ..Default::default()
                    })
                });

            let modified = client(mock)
                .has_uncommitted_changes(Path::new("/src/api"))
                .await
                .unwrap();
            assert_eq!(modified, expected);
        }
    }

    #[tokio::test]
    async fn test_uncommitted_changes_without_head_is_error() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| args_after_repo(cmd)[0] == "update-index")
            .returning(|_| Ok(CommandOutput::success("")));
        mock.expect_run()
            .withf(|cmd| args_after_repo(cmd)[0] == "diff-index")
            .returning(|_| Ok(CommandOutput::failure(128, "fatal: bad revision 'HEAD'")));

        let result = client(mock)
            .has_uncommitted_changes(Path::new("/src/new"))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_untracked_files() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| args_after_repo(cmd) == ["ls-files", "--others", "--exclude-standard"])
            .returning(|_| Ok(CommandOutput::success("notes.txt\n")));

        assert!(client(mock)
            .has_untracked_files(Path::new("/src/api"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_pull_quiet_flag() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| args_after_repo(cmd) == ["pull", "--quiet"])
            .times(1)
            .returning(|_| Ok(CommandOutput::success("")));

        client(mock).pull(Path::new("/src/api"), true).await.unwrap();
    }

    #[tokio::test]
    async fn test_pull_failure() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run().returning(|_| {
            Ok(CommandOutput::failure(
                1,
                "error: Your local changes to the following files would be overwritten by merge",
            ))
        });

        let err = client(mock)
            .pull(Path::new("/src/api"), false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("would be overwritten"));
    }

    #[tokio::test]
    async fn test_last_commit() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .withf(|cmd| {
                args_after_repo(cmd) == ["log", "-1", LAST_COMMIT_FORMAT, "origin/wip", "--"]
            })
            .returning(|_| {
                Ok(CommandOutput::success(
                    "Bob\u{1f}bob@example.com\u{1f}2024-11-02 08:30:00 +0000\n",
                ))
            });

        let commit = client(mock)
            .last_commit(Path::new("/src/api"), "origin/wip")
            .await
            .unwrap();

        assert_eq!(commit.author_email, "bob@example.com");
    }
}
