pub mod prelude {
    pub use super::{MockGitLab, MockSecretStore};
    pub use crate::{
        gateways::{self, gitlab::GitLabGateway, secret::SecretStore},
        usecases::{prelude::*, *},
    };

    pub fn many_members(count: usize) -> Vec<Member> {
        (0..count)
            .map(|i| Member {
                username: format!("user{i:03}"),
                access_level: AccessLevel::Developer,
            })
            .collect()
    }
}

use self::prelude::*;
use std::{cell::RefCell, collections::HashMap};

/// In-memory stand-in for the GitLab API that records every request.
#[derive(Default)]
pub struct MockGitLab {
    projects: HashMap<String, ProjectId>,
    /// `None` stands for a record GitLab returns but that isn't a valid member.
    members: Vec<Option<Member>>,
    failing_members_page: Option<u32>,
    archive_status: Option<u16>,
    requested_pages: RefCell<Vec<u32>>,
    archived: RefCell<Vec<ProjectId>>,
}

impl MockGitLab {
    pub fn with_project(mut self, path: &str, id: u64) -> Self {
        self.projects.insert(path.to_owned(), ProjectId::new(id));
        self
    }

    pub fn with_member(mut self, username: &str, access_level: AccessLevel) -> Self {
        self.members.push(Some(Member {
            username: username.to_owned(),
            access_level,
        }));
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members.extend(members.into_iter().map(Some));
        self
    }

    /// Adds a member record with an access level that can't be decoded.
    pub fn with_skipped_member(mut self) -> Self {
        self.members.push(None);
        self
    }

    pub fn with_failing_members_page(mut self, page: u32) -> Self {
        self.failing_members_page = Some(page);
        self
    }

    /// Let archive requests fail with the given status.
    pub fn with_archive_status(mut self, status: u16) -> Self {
        self.archive_status = Some(status);
        self
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.borrow().clone()
    }

    pub fn archived_projects(&self) -> Vec<ProjectId> {
        self.archived.borrow().clone()
    }
}

impl GitLabGateway for MockGitLab {
    fn project_id(&self, path: &RepoPath) -> gateways::Result<ProjectId> {
        self.projects
            .get(path.as_str())
            .copied()
            .ok_or_else(|| gateways::Error::Status {
                status: 404,
                body: r#"{"message":"404 Project Not Found"}"#.into(),
            })
    }

    fn project_members(
        &self,
        _: ProjectId,
        page: u32,
        per_page: u32,
    ) -> gateways::Result<MemberPage> {
        self.requested_pages.borrow_mut().push(page);
        if self.failing_members_page == Some(page) {
            return Err(gateways::Error::Status {
                status: 500,
                body: "Internal Server Error".into(),
            });
        }
        let per_page = per_page as usize;
        let records = self
            .members
            .iter()
            .skip((page as usize - 1) * per_page)
            .take(per_page);
        let mut page = MemberPage::default();
        for record in records {
            match record {
                Some(member) => page.members.push(member.clone()),
                None => page.skipped += 1,
            }
        }
        Ok(page)
    }

    fn archive_project(&self, project_id: ProjectId) -> gateways::Result<()> {
        if let Some(status) = self.archive_status {
            return Err(gateways::Error::Status {
                status,
                body: r#"{"message":"403 Forbidden"}"#.into(),
            });
        }
        self.archived.borrow_mut().push(project_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockSecretStore {
    secrets: HashMap<String, String>,
}

impl MockSecretStore {
    pub fn with_secret(name: &str, value: &str) -> Self {
        let mut secrets = HashMap::new();
        secrets.insert(name.to_owned(), value.to_owned());
        Self { secrets }
    }
}

impl SecretStore for MockSecretStore {
    fn fetch_secret(&self, name: &str) -> gateways::Result<String> {
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| gateways::Error::Secret {
                name: name.to_owned(),
                reason: "parameter not found".into(),
            })
    }
}
