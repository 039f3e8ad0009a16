//! CLI context that gets instantiated for every command and passed around
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{ConfigSection, HierarchicalConfig, RepositoryConfig};

#[derive(Debug)]
pub struct CliContext {
    pub config_file: PathBuf,
    pub store: HierarchicalConfig,
    pub repository: RepositoryConfig,
}

impl CliContext {
    pub fn new(config_file: &Path) -> Result<Self> {
        let store = HierarchicalConfig::load(config_file)?;
        let mut repository = RepositoryConfig::new();
        repository.populate_from_config(&store, ConfigSection::Repository);
        repository.populate_from_config(&store, ConfigSection::WebRepository);

        Ok(Self {
            config_file: config_file.to_path_buf(),
            store,
            repository,
        })
    }

    pub fn save(&self) -> Result<()> {
        self.store.write(&self.config_file)?;
        Ok(())
    }

    /// Directory git commands run from: next to the config file, or the cwd if it has none
    pub fn working_directory(&self) -> Result<PathBuf> {
        match self.config_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
            _ => Ok(std::env::current_dir()?),
        }
    }
}
