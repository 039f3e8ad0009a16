use anyhow::Result;

use crate::cli::CliContext;
use crate::{ConfigSection, ErrorCollection, PendingConfig, RepositoryConfig};

/// Values given on the command line for one section. Fields left out keep their saved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionUpdate {
    Repository {
        url: Option<String>,
        branch: Option<String>,
    },
    WebRepository {
        url: Option<String>,
    },
}

impl SectionUpdate {
    pub fn section(&self) -> ConfigSection {
        match self {
            Self::Repository { .. } => ConfigSection::Repository,
            Self::WebRepository { .. } => ConfigSection::WebRepository,
        }
    }

    fn apply(&self, config: &mut RepositoryConfig) {
        match self {
            Self::Repository { url, branch } => {
                if let Some(url) = url {
                    config.set_repository_url(url);
                }
                if let Some(branch) = branch {
                    config.set_branch(branch);
                }
            }
            Self::WebRepository { url } => match url.as_deref().map(str::trim) {
                Some("") => config.clear_web_repository_url(),
                Some(url) => config.set_web_repository_url(url),
                None => (),
            },
        }
    }
}

/// Runs the edit the same way the build configuration screen does: apply the values, fill in
/// defaults, validate, and only then commit to the config file.
/// Returns the validation errors; when there are any, nothing is written.
pub fn configure(context: &mut CliContext, update: &SectionUpdate) -> Result<ErrorCollection> {
    let section = update.section();
    let mut updated = context.repository.clone();
    update.apply(&mut updated);

    let mut pending = PendingConfig::new();
    updated.to_configuration(&mut pending, section);
    updated.add_default_values(&mut pending, section);

    let mut errors = ErrorCollection::new();
    updated.validate(&mut errors, &pending, section);
    if errors.has_any_errors() {
        return Ok(errors);
    }

    updated.populate_from_config(&pending, section);
    updated.to_configuration(&mut context.store, section);
    context.repository = updated;
    context.save()?;
    log::debug!(
        "Saved {} to {}",
        section.keys().join(", "),
        context.config_file.display()
    );

    Ok(errors)
}
