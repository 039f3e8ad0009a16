use serde::Serialize;

use crate::{RepositoryConfig, RepositoryHost};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowResponse<'a> {
    #[serde(flatten)]
    repository: &'a RepositoryConfig,
    host: RepositoryHost,
    web_based_repository_access: bool,
}

pub fn render(repository: &RepositoryConfig, is_json_output: bool) -> Result<String, serde_json::Error> {
    if is_json_output {
        let response = ShowResponse {
            repository,
            host: repository.host(),
            web_based_repository_access: repository.has_web_based_repository_access(),
        };
        return serde_json::to_string_pretty(&response);
    }

    let unset = "<not set>";
    Ok(format!(
        "Repository URL: {}\nBranch: {}\nWeb repository URL: {}\nHost: {}\nWeb based access: {}",
        repository.repository_url().unwrap_or(unset),
        repository.branch().unwrap_or(unset),
        repository.web_repository_url().unwrap_or(unset),
        repository.host(),
        if repository.has_web_based_repository_access() {
            "enabled"
        } else {
            "disabled"
        },
    ))
}
