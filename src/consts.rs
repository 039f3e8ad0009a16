pub const CONFIG_FILENAME: &str = "gitsource.toml";

pub const REPO_PREFIX: &str = "repository.github.";
pub const GIT_REPO_URL: &str = "repository.github.repositoryUrl";
pub const GIT_BRANCH: &str = "repository.github.branch";
pub const WEB_REPO_URL: &str = "repository.github.webRepositoryUrl";

pub const DEFAULT_BRANCH: &str = "master";

pub const GITHUB_HOST: &str = "github.com";
// Same sentinel the CI host uses for repositories it can't place
pub const UNKNOWN_HOST: &str = "unknownHost";
pub(crate) const UNKNOWN_COMMIT: &str = "UNKNOWN";

pub(crate) const REPO_URL_MISSING: &str = "Please specify where the repository is located";
pub(crate) const BRANCH_MISSING: &str = "Please specify which branch you want to build";
pub(crate) const INVALID_URL: &str = "This is not a valid url";
