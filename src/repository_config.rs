use std::fmt;

use serde::Serialize;

use crate::commit::{Commit, CommitFile};
use crate::consts::{
    BRANCH_MISSING, DEFAULT_BRANCH, GIT_BRANCH, GIT_REPO_URL, GITHUB_HOST, INVALID_URL,
    REPO_URL_MISSING, UNKNOWN_HOST, WEB_REPO_URL,
};
use crate::git::is_hierarchical_url;
use crate::store::ConfigStore;
use crate::validation::ErrorCollection;
use crate::web_urls;

/// Which part of the repository configuration an operation works on.
/// The build configuration screens edit the two separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    /// Clone URL and branch
    Repository,
    /// URL of the repository's web page
    WebRepository,
}

impl ConfigSection {
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Self::Repository => &[GIT_REPO_URL, GIT_BRANCH],
            Self::WebRepository => &[WEB_REPO_URL],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum RepositoryHost {
    GitHub,
    Unknown,
}

impl RepositoryHost {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => GITHUB_HOST,
            Self::Unknown => UNKNOWN_HOST,
        }
    }
}

impl From<RepositoryHost> for &'static str {
    fn from(host: RepositoryHost) -> Self {
        host.as_str()
    }
}

impl fmt::Display for RepositoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a build gets its sources from: a GitHub repository, the branch to build, and
/// optionally the repository's web page used to link commits and files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConfig {
    repository_url: Option<String>,
    branch: Option<String>,
    web_repository_url: Option<String>,
}

impl RepositoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the fields of `section` from a stored configuration.
    /// Keys that are missing leave the field unset; nothing is validated here.
    pub fn populate_from_config(&mut self, config: &dyn ConfigStore, section: ConfigSection) {
        match section {
            ConfigSection::Repository => {
                self.repository_url = config.get(GIT_REPO_URL);
                self.branch = config.get(GIT_BRANCH);
            }
            ConfigSection::WebRepository => {
                self.web_repository_url = config.get(WEB_REPO_URL);
            }
        }
        log::debug!("Restored {section:?} configuration: {:?}", self);
    }

    /// Writes the fields of `section` into `config`, clearing the keys of unset fields.
    pub fn to_configuration<'a, S: ConfigStore>(
        &self,
        config: &'a mut S,
        section: ConfigSection,
    ) -> &'a mut S {
        match section {
            ConfigSection::Repository => {
                write_field(config, GIT_REPO_URL, self.repository_url.as_deref());
                write_field(config, GIT_BRANCH, self.branch.as_deref());
            }
            ConfigSection::WebRepository => {
                write_field(config, WEB_REPO_URL, self.web_repository_url.as_deref());
            }
        }
        config
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    pub fn set_repository_url(&mut self, repository_url: &str) {
        self.repository_url = Some(repository_url.trim().to_string());
    }

    pub fn clear_repository_url(&mut self) {
        self.repository_url = None;
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn set_branch(&mut self, branch: &str) {
        self.branch = Some(branch.to_string());
    }

    pub fn web_repository_url(&self) -> Option<&str> {
        self.web_repository_url.as_deref()
    }

    pub fn set_web_repository_url(&mut self, web_repository_url: &str) {
        self.web_repository_url = Some(web_repository_url.trim().to_string());
    }

    pub fn clear_web_repository_url(&mut self) {
        self.web_repository_url = None;
    }

    /// Only GitHub is supported, so any configured repository lives there
    pub fn host(&self) -> RepositoryHost {
        match self.repository_url {
            Some(_) => RepositoryHost::GitHub,
            None => RepositoryHost::Unknown,
        }
    }

    pub fn has_web_based_repository_access(&self) -> bool {
        self.web_repository_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty() && url.contains(GITHUB_HOST))
    }

    /// Checks the values a user is about to save, adding one error per offending field.
    pub fn validate<'a>(
        &self,
        errors: &'a mut ErrorCollection,
        pending: &dyn ConfigStore,
        section: ConfigSection,
    ) -> &'a mut ErrorCollection {
        match section {
            ConfigSection::Repository => {
                validate_mandatory_field(pending, errors, GIT_REPO_URL, REPO_URL_MISSING);
                validate_mandatory_field(pending, errors, GIT_BRANCH, BRANCH_MISSING);
            }
            ConfigSection::WebRepository => {
                // Blank means not set; anything else is checked exactly as given
                if let Some(url) = pending.get(WEB_REPO_URL) {
                    if !url.trim().is_empty() && !is_hierarchical_url(&url) {
                        errors.add_error(WEB_REPO_URL, INVALID_URL);
                    }
                }
            }
        }
        log::debug!(
            "Validated {section:?} configuration: {} error(s)",
            errors.total_errors()
        );
        errors
    }

    /// Pre-fills a new plan's form. Values the user already entered are kept.
    pub fn add_default_values(&self, pending: &mut dyn ConfigStore, section: ConfigSection) {
        match section {
            ConfigSection::Repository => {
                if pending.get(GIT_BRANCH).is_none_or(|b| b.is_empty()) {
                    pending.set(GIT_BRANCH, DEFAULT_BRANCH);
                }
            }
            ConfigSection::WebRepository => {}
        }
    }

    /// The following return `None` when no web repository URL is configured.
    /// A trailing `/` on the web repository URL is not repeated in the link.
    pub fn web_repository_url_for_file(&self, file: &CommitFile) -> Option<String> {
        self.web_base().map(|url| web_urls::file_url(url, file))
    }

    pub fn web_repository_url_for_commit(&self, commit: &Commit) -> Option<String> {
        self.web_base().map(|url| web_urls::commit_url(url, commit))
    }

    pub fn web_repository_url_for_revision(&self, file: &CommitFile) -> Option<String> {
        self.web_repository_url_for_file(file)
    }

    pub fn web_repository_url_for_diff(&self, file: &CommitFile) -> Option<String> {
        self.web_base().map(|url| web_urls::diff_url(url, file))
    }

    fn web_base(&self) -> Option<&str> {
        self.web_repository_url.as_deref().filter(|url| !url.is_empty())
    }
}

fn write_field<S: ConfigStore + ?Sized>(config: &mut S, key: &str, value: Option<&str>) {
    match value {
        Some(v) => config.set(key, v),
        None => config.remove(key),
    }
}

fn validate_mandatory_field(
    pending: &dyn ConfigStore,
    errors: &mut ErrorCollection,
    key: &str,
    message: &str,
) {
    if pending.get(key).is_none_or(|v| v.is_empty()) {
        errors.add_error(key, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{HierarchicalConfig, PendingConfig};

    const WEB_URL: &str = "https://github.com/andypols/git-bamboo-plugin";
    const REVISION: &str = "71b2bf41fb82a12ca3d4d34bd62568d9167dc6d6";
    const FILE_NAME: &str = "src/main/java/uk/co/pols/bamboo/gitplugin/GitRepository.java";

    fn assert_has_error(errors: &ErrorCollection, field: &str, message: &str) {
        assert!(errors.has_any_errors());
        assert_eq!(errors.total_errors(), 1);
        assert_eq!(errors.field_error(field), Some(message));
    }

    fn commit_file() -> CommitFile {
        CommitFile::new(REVISION, FILE_NAME)
    }

    fn validate(pending: &PendingConfig, section: ConfigSection) -> ErrorCollection {
        let mut errors = ErrorCollection::new();
        RepositoryConfig::new().validate(&mut errors, pending, section);
        errors
    }

    #[test]
    fn requires_the_repository_url() {
        let pending = PendingConfig::new().with(GIT_BRANCH, "TheBranch");
        let errors = validate(&pending, ConfigSection::Repository);
        assert_has_error(&errors, GIT_REPO_URL, "Please specify where the repository is located");
    }

    #[test]
    fn requires_the_branch() {
        let pending = PendingConfig::new().with(GIT_REPO_URL, "The Rep Url");
        let errors = validate(&pending, ConfigSection::Repository);
        assert_has_error(&errors, GIT_BRANCH, "Please specify which branch you want to build");
    }

    #[test]
    fn empty_values_count_as_missing() {
        let pending = PendingConfig::new()
            .with(GIT_REPO_URL, "")
            .with(GIT_BRANCH, "master");
        let errors = validate(&pending, ConfigSection::Repository);
        assert_has_error(&errors, GIT_REPO_URL, "Please specify where the repository is located");
    }

    #[test]
    fn reports_multiple_errors_at_same_time() {
        let errors = validate(&PendingConfig::new(), ConfigSection::Repository);

        assert!(errors.has_any_errors());
        assert_eq!(errors.total_errors(), 2);
        assert_eq!(
            errors.field_error(GIT_REPO_URL),
            Some("Please specify where the repository is located")
        );
        assert_eq!(
            errors.field_error(GIT_BRANCH),
            Some("Please specify which branch you want to build")
        );
    }

    #[test]
    fn accepts_a_repository_and_branch() {
        let pending = PendingConfig::new()
            .with(GIT_REPO_URL, "The Rep Url")
            .with(GIT_BRANCH, "The Branch")
            .with(WEB_REPO_URL, "https://github.com/andypols/git-bamboo-plugin/tree/master");
        let errors = validate(&pending, ConfigSection::Repository);
        assert!(!errors.has_any_errors());
    }

    #[test]
    fn web_url_must_be_well_formed() {
        let pending = PendingConfig::new()
            .with(GIT_BRANCH, "TheBranch")
            .with(GIT_REPO_URL, "The Rep Url")
            .with(WEB_REPO_URL, "An Invalid Url");
        let errors = validate(&pending, ConfigSection::WebRepository);
        assert_has_error(&errors, WEB_REPO_URL, "This is not a valid url");
    }

    #[test]
    fn blank_or_missing_web_url_is_fine() {
        for pending in [
            PendingConfig::new(),
            PendingConfig::new().with(WEB_REPO_URL, ""),
            PendingConfig::new().with(WEB_REPO_URL, "   "),
        ] {
            let errors = validate(&pending, ConfigSection::WebRepository);
            assert!(!errors.has_any_errors(), "{pending:?}");
        }
    }

    #[test]
    fn padded_web_url_is_not_valid() {
        let pending = PendingConfig::new()
            .with(WEB_REPO_URL, " https://github.com/andypols/git-bamboo-plugin ");
        let errors = validate(&pending, ConfigSection::WebRepository);
        assert_has_error(&errors, WEB_REPO_URL, "This is not a valid url");
    }

    #[test]
    fn sections_only_check_their_own_fields() {
        // repository fields are missing, but the web section doesn't look at them
        let pending = PendingConfig::new().with(WEB_REPO_URL, WEB_URL);
        assert!(!validate(&pending, ConfigSection::WebRepository).has_any_errors());

        let pending = PendingConfig::new()
            .with(GIT_REPO_URL, "url")
            .with(GIT_BRANCH, "b")
            .with(WEB_REPO_URL, "An Invalid Url");
        assert!(!validate(&pending, ConfigSection::Repository).has_any_errors());
    }

    #[test]
    fn saves_the_repository_settings() {
        let mut config = RepositoryConfig::new();
        config.set_repository_url("TheTopSecretBuildRepoUrl");
        config.set_branch("TheBranch");

        let mut store = HierarchicalConfig::new();
        config.to_configuration(&mut store, ConfigSection::Repository);

        assert_eq!(store.get(GIT_REPO_URL).as_deref(), Some("TheTopSecretBuildRepoUrl"));
        assert_eq!(store.get(GIT_BRANCH).as_deref(), Some("TheBranch"));
        assert_eq!(store.get(WEB_REPO_URL), None);
    }

    #[test]
    fn saves_the_web_repository_settings() {
        let mut config = RepositoryConfig::new();
        config.set_web_repository_url("TheRepoWebUrl");

        let mut store = HierarchicalConfig::new();
        let store = config.to_configuration(&mut store, ConfigSection::WebRepository);

        assert_eq!(store.get(WEB_REPO_URL).as_deref(), Some("TheRepoWebUrl"));
        assert_eq!(store.get(GIT_REPO_URL), None);
    }

    #[test]
    fn unset_fields_clear_stored_values() {
        let mut store = HierarchicalConfig::new();
        store.set(GIT_BRANCH, "stale");

        let mut config = RepositoryConfig::new();
        config.set_repository_url("url");
        config.to_configuration(&mut store, ConfigSection::Repository);

        assert_eq!(store.get(GIT_BRANCH), None);
    }

    #[test]
    fn loads_the_repository_settings() {
        let mut store = HierarchicalConfig::new();
        store.set(GIT_REPO_URL, "TheTopSecretBuildRepoUrl");
        store.set(GIT_BRANCH, "TheSpecialBranch");
        store.set(WEB_REPO_URL, "WebRepositoryUrl");

        let mut config = RepositoryConfig::new();
        config.populate_from_config(&store, ConfigSection::Repository);

        assert_eq!(config.branch(), Some("TheSpecialBranch"));
        assert_eq!(config.repository_url(), Some("TheTopSecretBuildRepoUrl"));
        assert_eq!(config.web_repository_url(), None);
    }

    #[test]
    fn loads_the_web_repository_settings() {
        let mut store = HierarchicalConfig::new();
        store.set(WEB_REPO_URL, "WebRepositoryUrl");

        let mut config = RepositoryConfig::new();
        config.populate_from_config(&store, ConfigSection::WebRepository);

        assert_eq!(config.web_repository_url(), Some("WebRepositoryUrl"));
        assert_eq!(config.repository_url(), None);
    }

    #[test]
    fn survives_a_save_and_restore() {
        let mut original = RepositoryConfig::new();
        original.set_repository_url("git@github.com:andypols/git-bamboo-plugin.git");
        original.set_branch("release/1.x");
        original.set_web_repository_url(WEB_URL);

        for section in [ConfigSection::Repository, ConfigSection::WebRepository] {
            let mut store = HierarchicalConfig::new();
            original.to_configuration(&mut store, section);
            let reparsed: HierarchicalConfig = store.to_string().parse().unwrap();

            let mut restored = RepositoryConfig::new();
            restored.populate_from_config(&reparsed, section);
            match section {
                ConfigSection::Repository => {
                    assert_eq!(restored.repository_url(), original.repository_url());
                    assert_eq!(restored.branch(), original.branch());
                }
                ConfigSection::WebRepository => {
                    assert_eq!(restored.web_repository_url(), original.web_repository_url());
                }
            }
        }
    }

    #[test]
    fn defaults_to_the_master_branch_on_new_plans() {
        let mut pending = PendingConfig::new();
        RepositoryConfig::new().add_default_values(&mut pending, ConfigSection::Repository);
        assert_eq!(pending.get(GIT_BRANCH).as_deref(), Some("master"));
    }

    #[test]
    fn defaults_keep_the_users_branch() {
        let mut pending = PendingConfig::new().with(GIT_BRANCH, "develop");
        RepositoryConfig::new().add_default_values(&mut pending, ConfigSection::Repository);
        assert_eq!(pending.get(GIT_BRANCH).as_deref(), Some("develop"));
    }

    #[test]
    fn no_defaults_for_the_web_repository() {
        let mut pending = PendingConfig::new();
        RepositoryConfig::new().add_default_values(&mut pending, ConfigSection::WebRepository);
        assert_eq!(pending, PendingConfig::new());
    }

    #[test]
    fn trims_white_space_off_the_urls() {
        let mut config = RepositoryConfig::new();
        config.set_repository_url(" git@github.com:andypols/git-bamboo-plugin.git  ");
        config.set_web_repository_url(" https://github.com/andypols/git-bamboo-plugin/tree/master  ");

        assert_eq!(
            config.repository_url(),
            Some("git@github.com:andypols/git-bamboo-plugin.git")
        );
        assert_eq!(
            config.web_repository_url(),
            Some("https://github.com/andypols/git-bamboo-plugin/tree/master")
        );
    }

    #[test]
    fn host_is_github_once_a_repository_is_set() {
        let mut config = RepositoryConfig::new();
        assert_eq!(config.host(), RepositoryHost::Unknown);
        assert_eq!(config.host().as_str(), "unknownHost");

        config.set_repository_url("git@github.com:andypols/git-bamboo-plugin.git");
        assert_eq!(config.host().to_string(), "github.com");

        config.clear_repository_url();
        assert_eq!(config.host(), RepositoryHost::Unknown);
    }

    #[test]
    fn web_based_access_needs_a_github_web_url() {
        let mut config = RepositoryConfig::new();
        assert!(!config.has_web_based_repository_access());

        config.set_web_repository_url("   ");
        assert!(!config.has_web_based_repository_access());

        config.set_web_repository_url("https://some.private.repo.com/andypols/git-bamboo-plugin/tree/master");
        assert!(!config.has_web_based_repository_access());

        config.set_web_repository_url(" https://github.com/andypols/git-bamboo-plugin/tree/master  ");
        assert!(config.has_web_based_repository_access());

        config.clear_web_repository_url();
        assert!(!config.has_web_based_repository_access());
    }

    #[test]
    fn derives_the_commit_url() {
        let mut config = RepositoryConfig::new();
        config.set_web_repository_url(WEB_URL);

        assert_eq!(
            config.web_repository_url_for_commit(&Commit::new(vec![commit_file()])),
            Some(format!("{WEB_URL}/commit/{REVISION}"))
        );
        assert_eq!(
            config.web_repository_url_for_commit(&Commit::default()),
            Some(format!("{WEB_URL}/commit/UNKNOWN"))
        );
    }

    #[test]
    fn derives_the_file_url() {
        let mut config = RepositoryConfig::new();
        config.set_web_repository_url(WEB_URL);

        let expected = format!("{WEB_URL}/blob/{REVISION}/{FILE_NAME}");
        assert_eq!(config.web_repository_url_for_file(&commit_file()), Some(expected.clone()));
        assert_eq!(config.web_repository_url_for_revision(&commit_file()), Some(expected.clone()));

        config.set_web_repository_url(&format!("{WEB_URL}/"));
        assert_eq!(config.web_repository_url_for_file(&commit_file()), Some(expected));
    }

    #[test]
    fn links_to_the_commit_diff_page() {
        let mut config = RepositoryConfig::new();
        config.set_web_repository_url(WEB_URL);

        assert_eq!(
            config.web_repository_url_for_diff(&commit_file()),
            Some(format!("{WEB_URL}/commit/{REVISION}"))
        );
    }

    #[test]
    fn no_links_without_a_web_url() {
        let config = RepositoryConfig::new();
        assert_eq!(config.web_repository_url_for_file(&commit_file()), None);
        assert_eq!(config.web_repository_url_for_diff(&commit_file()), None);
        assert_eq!(config.web_repository_url_for_commit(&Commit::default()), None);
    }

    #[test]
    fn serializes_for_display() {
        let mut config = RepositoryConfig::new();
        config.set_repository_url("git@github.com:andypols/git-bamboo-plugin.git");
        config.set_branch("master");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["repositoryUrl"], "git@github.com:andypols/git-bamboo-plugin.git");
        assert_eq!(json["branch"], "master");
        assert!(json["webRepositoryUrl"].is_null());
        assert_eq!(serde_json::to_value(config.host()).unwrap(), "github.com");
    }
}
