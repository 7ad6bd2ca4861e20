//! Azure CLI Client
//!
//! CloudResourceClientの `az` 実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::models::{AzExists, AzShareSnapshot, AzVm, AzVmExtension};
use crate::adapter::process::{CommandOutput, CommandRunner, CommandSpec};
use crate::domain::entities::access_window::{AccessWindow, SasToken};
use crate::domain::entities::share::{MetadataPair, ShareRef};
use crate::domain::entities::vm_extension::{VirtualMachine, VmExtension};
use crate::domain::ports::cloud_client::CloudResourceClient;

const VM_LIST_QUERY: &str = "[].{name:name, resourceGroup:resourceGroup, location:location}";

/// `az` backed implementation of [`CloudResourceClient`]
pub struct AzCliClient<R: CommandRunner> {
    runner: Arc<R>,
    program: String,
}

impl<R: CommandRunner> AzCliClient<R> {
    pub fn new(runner: Arc<R>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    fn command<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(self.program.clone(), args)
    }

    async fn run_checked(&self, command: CommandSpec) -> Result<CommandOutput> {
        let output = self.runner.run(&command).await?;
        output.check(&command)
    }

    async fn run_json<T: DeserializeOwned>(&self, command: CommandSpec) -> Result<T> {
        let display = command.to_string();
        let output = self.run_checked(command).await?;
        serde_json::from_str(&output.stdout)
            .with_context(|| format!("Failed to parse JSON output of `{}`", display))
    }
}

/// `<vm_id>/extensions/<name>`
pub fn extension_resource_id(vm_id: &str, extension: &str) -> String {
    format!("{}/extensions/{}", vm_id.trim().trim_end_matches('/'), extension)
}

#[async_trait]
impl<R: CommandRunner> CloudResourceClient for AzCliClient<R> {
    async fn ensure_available(&self) -> Result<()> {
        self.run_checked(self.command(["version", "--output", "none"]))
            .await
            .map(|_| ())
    }

    async fn set_subscription(&self, subscription: &str) -> Result<()> {
        self.run_checked(self.command(["account", "set", "--subscription", subscription]))
            .await
            .map(|_| ())
    }

    async fn list_vms(&self) -> Result<Vec<VirtualMachine>> {
        let vms: Vec<AzVm> = self
            .run_json(self.command(["vm", "list", "--query", VM_LIST_QUERY, "--output", "json"]))
            .await?;
        Ok(vms.into_iter().map(Into::into).collect())
    }

    async fn find_vm_extension(
        &self,
        vm: &VirtualMachine,
        extension: &str,
    ) -> Result<Option<VmExtension>> {
        let extensions: Vec<AzVmExtension> = self
            .run_json(self.command([
                "vm",
                "extension",
                "list",
                "--resource-group",
                vm.resource_group.as_str(),
                "--vm-name",
                vm.name.as_str(),
                "--output",
                "json",
            ]))
            .await?;

        debug!("{} has {} extensions", vm.name, extensions.len());
        Ok(extensions
            .into_iter()
            .find(|ext| ext.name.eq_ignore_ascii_case(extension))
            .map(Into::into))
    }

    async fn delete_vm_extension(&self, vm_id: &str, extension: &str) -> Result<()> {
        let id = extension_resource_id(vm_id, extension);
        self.run_checked(self.command(["vm", "extension", "delete", "--ids", id.as_str()]))
            .await
            .map(|_| ())
    }

    async fn share_exists(&self, share: &ShareRef) -> Result<bool> {
        let exists: AzExists = self
            .run_json(self.command([
                "storage",
                "share-rm",
                "exists",
                "--resource-group",
                share.resource_group.as_str(),
                "--storage-account",
                share.account.as_str(),
                "--name",
                share.name.as_str(),
                "--output",
                "json",
            ]))
            .await?;
        Ok(exists.exists)
    }

    async fn generate_account_sas(&self, account: &str, window: &AccessWindow) -> Result<String> {
        let start = window.start_param();
        let expiry = window.expiry_param();
        let output = self
            .run_checked(self.command([
                "storage",
                "account",
                "generate-sas",
                "--account-name",
                account,
                "--services",
                "f",
                "--resource-types",
                "sco",
                "--permissions",
                "r",
                "--https-only",
                "--start",
                start.as_str(),
                "--expiry",
                expiry.as_str(),
                "--output",
                "tsv",
            ]))
            .await?;
        Ok(output.stdout)
    }

    async fn snapshot_share(
        &self,
        share: &ShareRef,
        sas: &SasToken,
        metadata: &[MetadataPair],
    ) -> Result<String> {
        let mut command = self.command([
            "storage",
            "share",
            "snapshot",
            "--name",
            share.name.as_str(),
            "--account-name",
            share.account.as_str(),
            "--sas-token",
            sas.as_query(),
        ]);
        if !metadata.is_empty() {
            command = command.arg("--metadata");
            for pair in metadata {
                command = command.arg(pair.to_string());
            }
        }
        command = command.arg("--output").arg("json");

        let snapshot: AzShareSnapshot = self.run_json(command).await?;
        Ok(snapshot.snapshot.unwrap_or_default())
    }
}
