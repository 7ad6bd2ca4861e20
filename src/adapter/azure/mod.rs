//! # Azure Adapter
//!
//! Azure CLI (`az`) によるクラウドリソース操作

pub mod az_cli_client;
pub mod models;

pub use az_cli_client::AzCliClient;
