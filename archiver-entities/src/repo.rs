use std::{fmt, str::FromStr};
use thiserror::Error;

/// The `namespace/name` path of a GitLab project.
///
/// Parsed from clone URLs (`https://…`, `ssh://…`), SCP-style
/// references (`git@host:group/name.git`), host-prefixed paths
/// (`gitlab.com/group/name`) or plain paths (`group/name`).
/// Nested groups are kept (`group/subgroup/name`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid repository reference '{0}'")]
pub struct RepoPathParseError(pub String);

fn strip_host(reference: &str) -> &str {
    if let Some((_, after_scheme)) = reference.split_once("://") {
        // Drops `[user@]host[:port]`
        return after_scheme
            .split_once('/')
            .map(|(_, path)| path)
            .unwrap_or_default();
    }
    if let Some(colon) = reference.find(':') {
        let before_slash = reference.find('/').map_or(true, |slash| colon < slash);
        if before_slash {
            return &reference[colon + 1..];
        }
    }
    match reference.split_once('/') {
        Some((host, path)) if host.contains('.') && path.contains('/') => path,
        _ => reference,
    }
}

impl FromStr for RepoPath {
    type Err = RepoPathParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RepoPathParseError(s.to_owned());
        let mut path = strip_host(s.trim());
        if let Some((project, _)) = path.split_once("/-/") {
            // Web URLs like `…/group/name/-/tree/main`
            path = project;
        }
        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let segments: Vec<_> = path.split('/').collect();
        if segments.len() < 2
            || segments
                .iter()
                .any(|s| s.is_empty() || s.chars().any(char::is_whitespace))
        {
            return Err(err());
        }
        Ok(Self(path.to_owned()))
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
