use crate::{
    entities::{AccessLevel, EmailAddress, ProjectId, RepoPath, RepoPathParseError},
    gateways,
};
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    RepoPath(#[from] RepoPathParseError),
    #[error("Failed to retrieve project ID of {path}: {source}")]
    ProjectLookup {
        path: RepoPath,
        source: gateways::Error,
    },
    #[error("Failed to retrieve members of project {project_id}: {source}")]
    Members {
        project_id: ProjectId,
        source: gateways::Error,
    },
    #[error("Failed to archive project {project_id}: {source}")]
    Archive {
        project_id: ProjectId,
        source: gateways::Error,
    },
    #[error("Failed to fetch the API token: {0}")]
    ApiToken(gateways::Error),
    #[error("Email prefix of {email} does not contain a dot for splitting")]
    UnparseableIdentity { email: EmailAddress },
    #[error("No matching GitLab username found for {email}")]
    NoMatchingUsername { email: EmailAddress },
    #[error(
        "Ambiguous GitLab username for {email}: {}",
        .candidates.iter().join(", ")
    )]
    AmbiguousUsername {
        email: EmailAddress,
        candidates: Vec<String>,
    },
    #[error("User {username} has access level {access_level} but at least {required} is required")]
    InsufficientAccess {
        username: String,
        access_level: AccessLevel,
        required: AccessLevel,
    },
}

impl Error {
    /// Failures caused by the caller's identity or role rather than by GitLab.
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Self::UnparseableIdentity { .. }
                | Self::NoMatchingUsername { .. }
                | Self::AmbiguousUsername { .. }
                | Self::InsufficientAccess { .. }
        )
    }
}
