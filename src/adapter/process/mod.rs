//! External Process Modules
//!
//! 外部コマンド実行のアダプター

pub mod runner;

pub use runner::{CommandOutput, CommandRunner, CommandSpec, TokioCommandRunner};
