use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::{CommandExecutor, Commit, CommitFile, RepositoryConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteHead {
    pub revision: String,
    pub link: Option<String>,
}

/// Resolves the configured branch on the configured repository
pub fn resolve(
    repository: &RepositoryConfig,
    executor: &dyn CommandExecutor,
    working_directory: &Path,
) -> Result<RemoteHead> {
    let (Some(url), Some(branch)) = (repository.repository_url(), repository.branch()) else {
        return Err(anyhow!(
            "The repository is not configured, run `gitsource configure repository` first"
        ));
    };

    let revision = crate::remote_head(executor, url, branch, working_directory)
        .with_context(|| format!("Failed to query {url}"))?
        .ok_or_else(|| anyhow!("Branch `{branch}` not found on {url}"))?;

    let link = if repository.has_web_based_repository_access() {
        // The commit link only needs a revision, the path is not part of it
        let commit = Commit::new(vec![CommitFile::new(revision.as_str(), "")]);
        repository.web_repository_url_for_commit(&commit)
    } else {
        None
    };

    Ok(RemoteHead { revision, link })
}
