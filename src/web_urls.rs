//! Links into the GitHub web UI, derived from the repository page URL
//! (e.g. `https://github.com/andypols/git-bamboo-plugin`).
//! Trailing `/` on that URL are dropped before a path is appended, so
//! `https://github.com/o/r/` and `https://github.com/o/r` give the same links.
use crate::commit::{Commit, CommitFile};
use crate::consts::UNKNOWN_COMMIT;

fn base(web_url: &str) -> &str {
    web_url.trim_end_matches('/')
}

/// `{web_url}/blob/{revision}/{path}`
pub fn file_url(web_url: &str, file: &CommitFile) -> String {
    format!("{}/blob/{}/{}", base(web_url), file.revision(), file.name())
}

/// A commit is identified by the revision of its first file.
/// Commits without files link to `{web_url}/commit/UNKNOWN`.
pub fn commit_url(web_url: &str, commit: &Commit) -> String {
    let id = commit
        .files()
        .first()
        .map(CommitFile::revision)
        .unwrap_or(UNKNOWN_COMMIT);
    format!("{}/commit/{id}", base(web_url))
}

// GitHub anchors each diff by the file's position in the commit (`#diff-<n>`), which a
// single file doesn't know, so this lands on the commit page.
pub fn diff_url(web_url: &str, file: &CommitFile) -> String {
    format!("{}/commit/{}", base(web_url), file.revision())
}
