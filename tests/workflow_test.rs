//! Workflow tests for opskit
//!
//! Drive the workflows through the public API with a scripted command runner.

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use opskit::adapter::config::Config;
use opskit::adapter::process::{CommandOutput, CommandRunner, CommandSpec};
use opskit::driver::cli::{BranchReportArgs, ExtensionRemoveArgs};
use opskit::driver::{BranchReportWorkflow, ExtensionRemoveWorkflow};

/// Records every command and answers with a fixed responder
struct ScriptedRunner {
    calls: Mutex<Vec<CommandSpec>>,
    respond: fn(&CommandSpec) -> CommandOutput,
}

impl ScriptedRunner {
    fn new(respond: fn(&CommandSpec) -> CommandOutput) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            respond,
        }
    }

    fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(command.clone());
        Ok((self.respond)(command))
    }
}

const VM_ID: &str =
    "/subscriptions/0000/resourceGroups/rg-web/providers/Microsoft.Compute/virtualMachines/vm-web-01";

#[tokio::test]
async fn test_remover_defaults_to_well_known_agent() {
    let runner = Arc::new(ScriptedRunner::new(|_| CommandOutput::success("")));
    let workflow = ExtensionRemoveWorkflow::with_runner(Config::default(), runner.clone());

    let args = ExtensionRemoveArgs::parse_from(["vm-extension-remove", VM_ID]);
    let removed = workflow.execute(args).await.unwrap();

    assert_eq!(removed, "OmsAgentForLinux");
    let calls = runner.calls();
    let delete = calls.last().unwrap();
    assert_eq!(delete.program, "az");
    assert_eq!(
        delete.args,
        vec![
            "vm".to_string(),
            "extension".to_string(),
            "delete".to_string(),
            "--ids".to_string(),
            format!("{}/extensions/OmsAgentForLinux", VM_ID),
        ]
    );
    assert_eq!(
        calls.iter().filter(|c| c.args.first().map(String::as_str) == Some("vm")).count(),
        1
    );
}

#[tokio::test]
async fn test_remover_uses_configured_default_and_program() {
    let runner = Arc::new(ScriptedRunner::new(|_| CommandOutput::success("")));
    let config = Config {
        az_path: "/opt/az/bin/az".to_string(),
        default_extension: "AzureMonitorLinuxAgent".to_string(),
        ..Config::default()
    };
    let workflow = ExtensionRemoveWorkflow::with_runner(config, runner.clone());

    let args = ExtensionRemoveArgs::parse_from(["vm-extension-remove", VM_ID]);
    workflow.execute(args).await.unwrap();

    let calls = runner.calls();
    assert!(calls.iter().all(|c| c.program == "/opt/az/bin/az"));
    assert!(calls
        .last()
        .unwrap()
        .args
        .last()
        .unwrap()
        .ends_with("/extensions/AzureMonitorLinuxAgent"));
}

#[tokio::test]
async fn test_remover_failure_is_fatal() {
    let runner = Arc::new(ScriptedRunner::new(|cmd| {
        if cmd.args.first().map(String::as_str) == Some("vm") {
            CommandOutput::failure(1, "ERROR: (ResourceNotFound) extension not found")
        } else {
            CommandOutput::success("")
        }
    }));
    let workflow = ExtensionRemoveWorkflow::with_runner(Config::default(), runner.clone());

    let args = ExtensionRemoveArgs::parse_from(["vm-extension-remove", VM_ID, "CustomScript"]);
    let err = workflow.execute(args).await.unwrap_err();

    assert!(format!("{:#}", err).contains("ResourceNotFound"));
    // 再試行しない
    let deletes = runner
        .calls()
        .iter()
        .filter(|c| c.args.first().map(String::as_str) == Some("vm"))
        .count();
    assert_eq!(deletes, 1);
}

#[tokio::test]
async fn test_branch_report_skips_repository_without_remote() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("scratch/.git")).unwrap();
    let output = temp.path().join("report.csv");

    let runner = Arc::new(ScriptedRunner::new(|cmd| {
        if cmd.args.get(2).map(String::as_str) == Some("remote") {
            CommandOutput::success("")
        } else {
            CommandOutput::success("git version 2.43.0\n")
        }
    }));
    let workflow = BranchReportWorkflow::with_runner(Config::default(), runner.clone());

    let args = BranchReportArgs::parse_from([
        "branch-report",
        "--output",
        output.to_str().unwrap(),
        temp.path().to_str().unwrap(),
    ]);
    let report = workflow.execute(args).await.unwrap();

    assert_eq!(report.repositories_scanned, 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.rows.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 1);
    // fetch は行わない
    assert!(!runner
        .calls()
        .iter()
        .any(|c| c.args.get(2).map(String::as_str) == Some("fetch")));
}
