use super::{fetch_project_roster, prelude::*, resolve_username, DEFAULT_MEMBERS_PER_PAGE};

#[derive(Debug, Clone)]
pub struct ArchiveParams {
    /// The caller needs at least this role on the project.
    pub min_access_level: AccessLevel,
    pub members_per_page: u32,
    /// Check everything but don't archive.
    pub dry_run: bool,
}

impl Default for ArchiveParams {
    fn default() -> Self {
        Self {
            min_access_level: AccessLevel::Developer,
            members_per_page: DEFAULT_MEMBERS_PER_PAGE,
            dry_run: false,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub path         : RepoPath,
    pub project_id   : ProjectId,
    pub username     : String,
    pub access_level : AccessLevel,
    /// `false` for dry runs.
    pub archived     : bool,
}

/// Archives the project behind `reference` if `caller` is allowed to.
pub fn archive_repository<G>(
    gateway: &G,
    caller: &EmailAddress,
    reference: &str,
    params: &ArchiveParams,
) -> Result<ArchiveOutcome>
where
    G: GitLabGateway + ?Sized,
{
    let path: RepoPath = reference.parse()?;
    log::debug!("Repository {reference} resolves to path {path}");

    let project_id = gateway.project_id(&path).map_err(|source| {
        if source.is_not_found() {
            log::warn!("Project {path} does not exist or is not visible");
        } else {
            log::warn!("Failed to retrieve project ID of {path}: {source}");
        }
        Error::ProjectLookup {
            path: path.clone(),
            source,
        }
    })?;
    log::info!("Project {path} has ID {project_id}");

    let roster = fetch_project_roster(gateway, project_id, params.members_per_page)?;
    let username = resolve_username(caller, roster.usernames()).map_err(|err| {
        log::warn!("Could not resolve GitLab username of {caller}: {err}");
        err
    })?;
    let access_level = roster
        .access_level(&username)
        .ok_or_else(|| Error::NoMatchingUsername {
            email: caller.clone(),
        })?;
    log::info!("User {username} has access level {access_level} on {path}");

    if !access_level.satisfies(params.min_access_level) {
        return Err(Error::InsufficientAccess {
            username,
            access_level,
            required: params.min_access_level,
        });
    }

    if params.dry_run {
        log::info!("Dry run: not archiving project {project_id}");
    } else {
        gateway
            .archive_project(project_id)
            .map_err(|source| Error::Archive { project_id, source })?;
        log::info!("Archived project {path} ({project_id})");
    }

    Ok(ArchiveOutcome {
        path,
        project_id,
        username,
        access_level,
        archived: !params.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn alice() -> EmailAddress {
        "alice@example.com".parse().unwrap()
    }

    fn archive(gitlab: &MockGitLab, reference: &str) -> Result<ArchiveOutcome> {
        archive_repository(gitlab, &alice(), reference, &ArchiveParams::default())
    }

    #[test]
    fn archive_if_access_level_is_sufficient() {
        let gitlab = MockGitLab::default()
            .with_project("group/proj", 42)
            .with_member("alice_example.com", AccessLevel::Maintainer);
        let outcome = archive(&gitlab, "gitlab.com/group/proj\n").unwrap();
        assert_eq!(
            outcome,
            ArchiveOutcome {
                path: "group/proj".parse().unwrap(),
                project_id: ProjectId::new(42),
                username: "alice_example.com".into(),
                access_level: AccessLevel::Maintainer,
                archived: true,
            }
        );
        assert_eq!(gitlab.archived_projects(), vec![ProjectId::new(42)]);
    }

    #[test]
    fn exact_threshold_is_sufficient() {
        let gitlab = MockGitLab::default()
            .with_project("group/proj", 42)
            .with_member("alice_example.com", AccessLevel::Developer);
        assert!(archive(&gitlab, "https://gitlab.com/group/proj.git").is_ok());
        assert_eq!(gitlab.archived_projects(), vec![ProjectId::new(42)]);
    }

    #[test]
    fn do_not_archive_with_insufficient_access() {
        let gitlab = MockGitLab::default()
            .with_project("group/proj", 42)
            .with_member("alice_example.com", AccessLevel::Reporter);
        let err = archive(&gitlab, "git@gitlab.com:group/proj.git").unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientAccess {
                access_level: AccessLevel::Reporter,
                required: AccessLevel::Developer,
                ..
            }
        ));
        assert!(err.is_access_denied());
        assert!(gitlab.archived_projects().is_empty());
    }

    #[test]
    fn custom_threshold() {
        let gitlab = MockGitLab::default()
            .with_project("group/proj", 42)
            .with_member("alice_example.com", AccessLevel::Developer);
        let params = ArchiveParams {
            min_access_level: AccessLevel::Maintainer,
            ..Default::default()
        };
        let err = archive_repository(&gitlab, &alice(), "group/proj", &params).unwrap_err();
        assert!(matches!(err, Error::InsufficientAccess { .. }));
        assert!(gitlab.archived_projects().is_empty());
    }

    #[test]
    fn dry_run_does_not_archive() {
        let gitlab = MockGitLab::default()
            .with_project("group/proj", 42)
            .with_member("alice_example.com", AccessLevel::Owner);
        let params = ArchiveParams {
            dry_run: true,
            ..Default::default()
        };
        let outcome = archive_repository(&gitlab, &alice(), "group/proj", &params).unwrap();
        assert!(!outcome.archived);
        assert!(gitlab.archived_projects().is_empty());
    }

    #[test]
    fn unknown_project() {
        let gitlab = MockGitLab::default();
        let err = archive(&gitlab, "group/missing").unwrap_err();
        match err {
            Error::ProjectLookup { path, source } => {
                assert_eq!(path.as_str(), "group/missing");
                assert!(source.is_not_found());
            }
            err => panic!("unexpected error: {err}"),
        }
        assert!(gitlab.requested_pages().is_empty());
    }

    #[test]
    fn invalid_reference() {
        let gitlab = MockGitLab::default();
        let err = archive(&gitlab, "not-a-path").unwrap_err();
        assert!(matches!(err, Error::RepoPath(_)));
    }

    #[test]
    fn caller_is_not_a_member() {
        let gitlab = MockGitLab::default()
            .with_project("group/proj", 42)
            .with_member("bob", AccessLevel::Owner);
        let caller: EmailAddress = "alice.smith@example.com".parse().unwrap();
        let err = archive_repository(&gitlab, &caller, "group/proj", &ArchiveParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::NoMatchingUsername { .. }));
        assert!(gitlab.archived_projects().is_empty());
    }

    #[test]
    fn archive_request_fails() {
        let gitlab = MockGitLab::default()
            .with_project("group/proj", 42)
            .with_member("alice_example.com", AccessLevel::Owner)
            .with_archive_status(403);
        let err = archive(&gitlab, "group/proj").unwrap_err();
        assert!(matches!(
            err,
            Error::Archive {
                source: gateways::Error::Status { status: 403, .. },
                ..
            }
        ));
    }
}
