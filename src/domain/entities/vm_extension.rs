//! # VM Extension Entities
//!
//! 仮想マシンと拡張機能のエンティティ

/// 削除対象の既定拡張機能名
pub const DEFAULT_EXTENSION_NAME: &str = "OmsAgentForLinux";

/// サブスクリプション内の仮想マシン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualMachine {
    pub name: String,
    pub resource_group: String,
    pub location: String,
}

/// VMにインストール済みの拡張機能
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmExtension {
    pub name: String,
    pub version: String,
    pub provisioning_state: String,
}

/// 拡張機能が見つかったVMの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMatch {
    pub subscription: String,
    pub resource_group: String,
    pub vm_name: String,
    pub location: String,
    pub extension: String,
    pub version: String,
    pub provisioning_state: String,
}

impl ExtensionMatch {
    pub const HEADER: [&'static str; 7] = [
        "Subscription",
        "ResourceGroup",
        "VMName",
        "Location",
        "Extension",
        "Version",
        "ProvisioningState",
    ];

    pub fn new(subscription: &str, vm: &VirtualMachine, extension: VmExtension) -> Self {
        Self {
            subscription: subscription.to_string(),
            resource_group: vm.resource_group.clone(),
            vm_name: vm.name.clone(),
            location: vm.location.clone(),
            extension: extension.name,
            version: extension.version,
            provisioning_state: extension.provisioning_state,
        }
    }

    /// ヘッダー順のフィールド
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.subscription,
            &self.resource_group,
            &self.vm_name,
            &self.location,
            &self.extension,
            &self.version,
            &self.provisioning_state,
        ]
    }
}
