use super::Result;
use crate::entities::*;

/// One page of the member list of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPage {
    pub members: Vec<Member>,
    /// Records on this page that could not be turned into a [`Member`],
    /// e.g. because of an unknown access level.
    pub skipped: usize,
}

impl MemberPage {
    /// Number of records GitLab returned for this page.
    pub fn len(&self) -> usize {
        self.members.len() + self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Member>> for MemberPage {
    fn from(members: Vec<Member>) -> Self {
        Self {
            members,
            skipped: 0,
        }
    }
}

/// Project operations of the GitLab REST API (`/api/v4`).
pub trait GitLabGateway {
    /// Looks up the numeric id of the project at `path`.
    fn project_id(&self, path: &RepoPath) -> Result<ProjectId>;

    /// Loads a single page of the project members, including members
    /// inherited from parent groups. Pages start at 1; an empty page
    /// means there are no more members.
    fn project_members(&self, project_id: ProjectId, page: u32, per_page: u32)
        -> Result<MemberPage>;

    fn archive_project(&self, project_id: ProjectId) -> Result<()>;
}
