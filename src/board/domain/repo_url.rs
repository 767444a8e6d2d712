//! GitHub repository reference attached to a board.
//!
//! The accepted shape is `[http[s]://][www.]github.com/<owner>/<repo>[/]`
//! where `<owner>` is drawn from `[A-Za-z0-9-]` and `<repo>` from
//! `[A-Za-z0-9-_.]`. Accepted values are normalized to
//! `https://github.com/<owner>/<repo>`. Validation is purely syntactic.

use super::BoardDomainError;
use std::fmt;

const HOST: &str = "github.com";
const CANONICAL_PREFIX: &str = "https://github.com/";

/// A validated, normalized GitHub repository URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHubRepoUrl(String);

impl GitHubRepoUrl {
    /// Validates and normalizes a repository URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidRepoUrl`] when the trimmed input
    /// does not name exactly one owner and one repository on `github.com`.
    pub fn parse(raw: &str) -> Result<Self, BoardDomainError> {
        let invalid = || BoardDomainError::InvalidRepoUrl(raw.to_owned());
        let trimmed = raw.trim();

        let without_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        let without_www = without_scheme
            .strip_prefix("www.")
            .unwrap_or(without_scheme);
        let raw_path = without_www
            .strip_prefix(HOST)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(invalid)?;
        let path = raw_path.strip_suffix('/').unwrap_or(raw_path);

        let (owner, repo) = path.split_once('/').ok_or_else(invalid)?;
        if !is_valid_owner(owner) || !is_valid_repo(repo) {
            return Err(invalid());
        }

        Ok(Self(format!("{CANONICAL_PREFIX}{owner}/{repo}")))
    }

    /// Returns the normalized URL as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the repository owner segment.
    #[must_use]
    pub fn owner(&self) -> &str {
        self.segments().0
    }

    /// Returns the repository name segment.
    #[must_use]
    pub fn repo(&self) -> &str {
        self.segments().1
    }

    fn segments(&self) -> (&str, &str) {
        self.0
            .strip_prefix(CANONICAL_PREFIX)
            .and_then(|path| path.split_once('/'))
            .unwrap_or_default()
    }
}

/// Validates a raw repository URL and returns its normalized form.
///
/// # Errors
///
/// Returns [`BoardDomainError::InvalidRepoUrl`] for any input that does not
/// match the accepted repository URL shape.
pub fn validate_repo_url(url: &str) -> Result<GitHubRepoUrl, BoardDomainError> {
    GitHubRepoUrl::parse(url)
}

fn is_valid_owner(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

fn is_valid_repo(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
}

impl AsRef<str> for GitHubRepoUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GitHubRepoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
