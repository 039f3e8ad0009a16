use anyhow::{Result, anyhow};

use crate::CommitFile;

pub fn write_err(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = format!("{err}");

    let mut cause = err.source();
    while let Some(e) = cause {
        out += &format!("\nReason: {e}");
        cause = e.source();
    }

    out
}

/// Parses `REVISION:PATH`, splitting on the first colon
pub fn parse_commit_file(s: &str) -> Result<CommitFile> {
    let (revision, path) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("Expected REVISION:PATH, got `{s}`"))?;
    if revision.is_empty() || path.is_empty() {
        return Err(anyhow!("Expected REVISION:PATH, got `{s}`"));
    }
    Ok(CommitFile::new(revision, path))
}
