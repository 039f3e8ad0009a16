use std::path::Path;

use crate::git::CommandExecutor;

/// Looks up the commit `branch` points to on the remote, without cloning.
/// Returns `None` if the remote has no such branch.
pub fn remote_head(
    executor: &dyn CommandExecutor,
    repository_url: &str,
    branch: &str,
    working_directory: &Path,
) -> Result<Option<String>, std::io::Error> {
    let reference = format!("refs/heads/{branch}");
    log::debug!("Resolving {reference} on {repository_url}");
    // `--` so a url starting with `-` can't be taken as an option
    let output = executor.execute(
        &["git", "ls-remote", "--", repository_url, &reference],
        working_directory,
    )?;

    // Each line is `<oid>\t<ref>`
    Ok(output.lines().find_map(|line| {
        let mut parts = line.split_whitespace();
        let oid = parts.next()?;
        (parts.next()? == reference).then(|| oid.to_string())
    }))
}
