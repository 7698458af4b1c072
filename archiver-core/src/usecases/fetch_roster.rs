use super::prelude::*;

pub const DEFAULT_MEMBERS_PER_PAGE: u32 = 100;

/// Loads all members of a project page by page.
///
/// Stops at the first empty page or after a page with fewer than
/// `per_page` records. Skipped records count towards the page size.
/// A failing page aborts the whole fetch.
pub fn fetch_project_roster<G>(gateway: &G, project_id: ProjectId, per_page: u32) -> Result<Roster>
where
    G: GitLabGateway + ?Sized,
{
    let per_page = per_page.max(1);
    let mut roster = Roster::new();
    let mut page = 1;
    loop {
        let member_page = gateway
            .project_members(project_id, page, per_page)
            .map_err(|source| Error::Members { project_id, source })?;
        if member_page.is_empty() {
            break;
        }
        let count = member_page.len();
        log::debug!("Page {page} of project {project_id} contains {count} members");
        if member_page.skipped > 0 {
            log::warn!(
                "Skipped {} members on page {page} of project {project_id}",
                member_page.skipped
            );
        }
        roster.extend(member_page.members);
        if count < per_page as usize {
            break;
        }
        page += 1;
    }
    log::debug!("Project {project_id} has {} members", roster.len());
    Ok(roster)
}
