use anyhow::{Result, bail};

use crate::{Commit, CommitFile, RepositoryConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Commit(Commit),
    File(CommitFile),
    Revision(CommitFile),
    Diff(CommitFile),
}

pub fn web_link(repository: &RepositoryConfig, target: &LinkTarget) -> Result<String> {
    if !repository.has_web_based_repository_access() {
        bail!("No GitHub web repository URL is configured, run `gitsource configure web-repository --url <URL>` first");
    }

    let link = match target {
        LinkTarget::Commit(commit) => repository.web_repository_url_for_commit(commit),
        LinkTarget::File(file) => repository.web_repository_url_for_file(file),
        LinkTarget::Revision(file) => repository.web_repository_url_for_revision(file),
        LinkTarget::Diff(file) => repository.web_repository_url_for_diff(file),
    };
    // web based access implies a web url
    match link {
        Some(link) => Ok(link),
        None => bail!("No web repository URL is configured"),
    }
}
