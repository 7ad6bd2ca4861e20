//! Azure CLI Output Models
//!
//! `az ... --output json` の出力モデル

use serde::Deserialize;

use crate::domain::entities::vm_extension::{VirtualMachine, VmExtension};

/// Row of `az vm list --query "[].{name:name, resourceGroup:resourceGroup, location:location}"`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzVm {
    pub name: String,
    pub resource_group: String,
    #[serde(default)]
    pub location: String,
}

impl From<AzVm> for VirtualMachine {
    fn from(vm: AzVm) -> Self {
        Self {
            name: vm.name,
            resource_group: vm.resource_group,
            location: vm.location,
        }
    }
}

/// Row of `az vm extension list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzVmExtension {
    pub name: String,
    #[serde(default)]
    pub type_handler_version: Option<String>,
    #[serde(default)]
    pub provisioning_state: Option<String>,
}

impl From<AzVmExtension> for VmExtension {
    fn from(ext: AzVmExtension) -> Self {
        Self {
            name: ext.name,
            version: ext.type_handler_version.unwrap_or_default(),
            provisioning_state: ext.provisioning_state.unwrap_or_default(),
        }
    }
}

/// Output of `az storage share-rm exists`
#[derive(Debug, Clone, Deserialize)]
pub struct AzExists {
    pub exists: bool,
}

/// Output of `az storage share snapshot`
#[derive(Debug, Clone, Deserialize)]
pub struct AzShareSnapshot {
    #[serde(default)]
    pub snapshot: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vm_list() {
        let json = r#"[
            {"name": "vm-web-01", "resourceGroup": "RG-WEB", "location": "westeurope"},
            {"name": "vm-db-01", "resourceGroup": "rg-db", "location": "northeurope"}
        ]"#;

        let vms: Vec<AzVm> = serde_json::from_str(json).unwrap();
        let vms: Vec<VirtualMachine> = vms.into_iter().map(Into::into).collect();

        assert_eq!(vms.len(), 2);
        assert_eq!(vms[0].resource_group, "RG-WEB");
        assert_eq!(vms[1].location, "northeurope");
    }

    #[test]
    fn test_parse_extension_with_missing_fields() {
        let json = r#"[{"name": "CustomScript", "typeHandlerVersion": "2.1", "publisher": "Microsoft.Azure.Extensions"},
                       {"name": "OmsAgentForLinux"}]"#;

        let exts: Vec<AzVmExtension> = serde_json::from_str(json).unwrap();
        let oms: VmExtension = exts[1].clone().into();

        assert_eq!(exts[0].type_handler_version.as_deref(), Some("2.1"));
        assert_eq!(oms.version, "");
        assert_eq!(oms.provisioning_state, "");
    }

    #[test]
    fn test_parse_snapshot() {
        let json = r#"{"etag": "\"0x8DC\"", "lastModified": "2024-12-25T10:00:01+00:00", "snapshot": "2024-12-25T10:00:01.0000000Z"}"#;
        let snapshot: AzShareSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(
            snapshot.snapshot.as_deref(),
            Some("2024-12-25T10:00:01.0000000Z")
        );
    }
}
