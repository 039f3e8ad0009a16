mod commit;
mod git;
mod repository_config;
mod store;
mod validation;
mod web_urls;

#[cfg(feature = "cli")]
pub mod cli;

pub mod consts;

pub use commit::{Commit, CommitFile};
pub use git::{CommandExecutor, GitExecutor, is_hierarchical_url, remote_head};
pub use repository_config::{ConfigSection, RepositoryConfig, RepositoryHost};
pub use store::{ConfigStore, HierarchicalConfig, PendingConfig, StoreError, StoreErrorKind};
pub use validation::ErrorCollection;
