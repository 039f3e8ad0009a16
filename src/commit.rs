/// A file touched by a commit, identified by the revision it was changed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFile {
    revision: String,
    name: String,
}

impl CommitFile {
    pub fn new(revision: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            revision: revision.into(),
            name: name.into(),
        }
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    files: Vec<CommitFile>,
}

impl Commit {
    pub fn new(files: Vec<CommitFile>) -> Self {
        Self { files }
    }

    /// Files in the order they were reported for the commit
    pub fn files(&self) -> &[CommitFile] {
        &self.files
    }
}
