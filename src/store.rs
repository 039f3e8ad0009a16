//! Key-value configuration stores.
//!
//! Keys are flat dotted names such as `repository.github.branch`. The persisted store maps
//! each dot to a nested TOML table, the pending store keeps the names as-is.
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use fs_err as fs;
use toml_edit::{DocumentMut, Item, Table, TableLike, Value};

/// The narrow view of a configuration container that the repository config needs
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to access configuration at `{}`", path.display())]
#[non_exhaustive]
pub struct StoreError {
    path: PathBuf,
    #[source]
    source: Box<StoreErrorKind>,
}

impl StoreError {
    fn new(path: impl AsRef<Path>, kind: impl Into<StoreErrorKind>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            source: Box::new(kind.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> &StoreErrorKind {
        &self.source
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreErrorKind {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml_edit::TomlError),
}

/// Persisted build configuration, stored as a TOML document.
/// Anything in the document that isn't touched through [`ConfigStore`] is kept as written.
#[derive(Debug, Clone, Default)]
pub struct HierarchicalConfig {
    doc: DocumentMut,
}

impl HierarchicalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the config at `path`. A file that doesn't exist yet is an empty config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No configuration at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| StoreError::new(path, e))?;
        content.parse::<Self>().map_err(|e| StoreError::new(path, e))
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        log::debug!("Writing configuration to {}", path.display());
        fs::write(path, self.doc.to_string()).map_err(|e| StoreError::new(path, e))
    }

    fn lookup(&self, key: &str) -> Option<&Item> {
        let mut parts = key.split('.');
        let last = parts.next_back()?;
        let mut table: &dyn TableLike = self.doc.as_table();
        for part in parts {
            table = table.get(part)?.as_table_like()?;
        }
        table.get(last)
    }

    fn parent_mut(&mut self, key: &str, create: bool) -> Option<(&mut dyn TableLike, String)> {
        let mut parts: Vec<&str> = key.split('.').collect();
        let last = parts.pop()?.to_string();
        let mut table: &mut dyn TableLike = self.doc.as_table_mut();
        for part in parts {
            let item = if create {
                let item = table.entry(part).or_insert_with(implicit_table);
                // A scalar sitting where a table is needed gets replaced
                if !item.is_table_like() {
                    *item = implicit_table();
                }
                item
            } else {
                table.get_mut(part)?
            };
            table = item.as_table_like_mut()?;
        }
        Some((table, last))
    }
}

fn implicit_table() -> Item {
    let mut table = Table::new();
    table.set_implicit(true);
    Item::Table(table)
}

fn scalar_text(item: &Item) -> Option<String> {
    match item.as_value()? {
        Value::String(s) => Some(s.value().clone()),
        Value::Integer(i) => Some(i.value().to_string()),
        Value::Float(f) => Some(f.value().to_string()),
        Value::Boolean(b) => Some(b.value().to_string()),
        _ => None,
    }
}

impl ConfigStore for HierarchicalConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.lookup(key).and_then(scalar_text)
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some((table, last)) = self.parent_mut(key, true) {
            table.insert(&last, toml_edit::value(value));
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some((table, last)) = self.parent_mut(key, false) {
            table.remove(&last);
        }
    }
}

impl FromStr for HierarchicalConfig {
    type Err = toml_edit::TomlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { doc: s.parse()? })
    }
}

impl fmt::Display for HierarchicalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.doc)
    }
}

/// Values collected from a form that haven't been committed to the build configuration yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingConfig {
    values: BTreeMap<String, String>,
}

impl PendingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ConfigStore for PendingConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
