//! Repository Discovery
//!
//! RepositoryFinderトレイトの実装

pub mod walkdir_repository_finder;

pub use walkdir_repository_finder::WalkDirRepositoryFinder;
