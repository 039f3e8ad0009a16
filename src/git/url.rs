use url::Url;

/// Whether `s` is an absolute URL with a scheme, an authority and a path,
/// e.g. `https://github.com/owner/repo`.
pub fn is_hierarchical_url(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }

    match Url::parse(s) {
        Ok(url) => !url.cannot_be_a_base() && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_web_urls() {
        assert!(is_hierarchical_url(
            "https://github.com/andypols/git-bamboo-plugin/tree/master"
        ));
        assert!(is_hierarchical_url("http://git.example.org:8080/repo"));
    }

    #[test]
    fn rejects_things_that_are_not_hierarchical() {
        for s in [
            "",
            "An Invalid Url",
            "github.com/andypols/git-bamboo-plugin",
            "mailto:someone@example.com",
            "https://github.com/with space",
        ] {
            assert!(!is_hierarchical_url(s), "{s} should be rejected");
        }
    }
}
