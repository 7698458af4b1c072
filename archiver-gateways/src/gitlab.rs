use archiver_core::{
    entities::*,
    gateways::{
        gitlab::{GitLabGateway, MemberPage},
        Error, Result,
    },
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    StatusCode,
};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://gitlab.com/api/v4";

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";
const USER_AGENT: &str = "gitlab-archiver";

/// Characters that stay unencoded in a project path segment.
/// Everything else, including `/`, is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for the GitLab REST API.
#[derive(Debug, Clone)]
pub struct GitLab {
    client: Client,
    api_base_url: String,
    token: ApiToken,
}

impl GitLab {
    pub fn new(api_base_url: &str, token: ApiToken) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            token,
        })
    }

    fn project_url(&self, path: &RepoPath) -> String {
        format!(
            "{}/projects/{}",
            self.api_base_url,
            utf8_percent_encode(path.as_str(), PATH_SEGMENT)
        )
    }

    fn members_url(&self, project_id: ProjectId) -> String {
        format!("{}/projects/{project_id}/members/all", self.api_base_url)
    }

    fn archive_url(&self, project_id: ProjectId) -> String {
        format!("{}/projects/{project_id}/archive", self.api_base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(TOKEN_HEADER, self.token.expose())
    }
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct MemberRecord {
    username: String,
    access_level: AccessLevelPrimitive,
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Transport(err.into())
}

/// Returns the body of a response with the expected status.
fn read_body(response: Response, expected: impl Fn(StatusCode) -> bool) -> Result<String> {
    let status = response.status();
    let body = response.text().map_err(transport_error)?;
    if expected(status) {
        Ok(body)
    } else {
        log::debug!("GitLab responded with {status}: {body}");
        Err(Error::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn parse_project_id(body: &str) -> Result<ProjectId> {
    let ProjectRecord { id } =
        serde_json::from_str(body).map_err(|err| Error::Decode(err.into()))?;
    Ok(ProjectId::new(id))
}

/// Members with an unknown access level are skipped but still counted.
fn parse_members(body: &str) -> Result<MemberPage> {
    let records: Vec<MemberRecord> =
        serde_json::from_str(body).map_err(|err| Error::Decode(err.into()))?;
    let mut page = MemberPage::default();
    for MemberRecord {
        username,
        access_level,
    } in records
    {
        match AccessLevel::try_from(access_level) {
            Ok(access_level) => page.members.push(Member {
                username,
                access_level,
            }),
            Err(err) => {
                log::warn!("Ignoring member {username}: {err}");
                page.skipped += 1;
            }
        }
    }
    Ok(page)
}

impl GitLabGateway for GitLab {
    fn project_id(&self, path: &RepoPath) -> Result<ProjectId> {
        let response = self
            .authorized(self.client.get(self.project_url(path)))
            .send()
            .map_err(transport_error)?;
        let body = read_body(response, |status| status.is_success())?;
        parse_project_id(&body)
    }

    fn project_members(
        &self,
        project_id: ProjectId,
        page: u32,
        per_page: u32,
    ) -> Result<MemberPage> {
        let response = self
            .authorized(self.client.get(self.members_url(project_id)))
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .map_err(transport_error)?;
        let body = read_body(response, |status| status.is_success())?;
        parse_members(&body)
    }

    fn archive_project(&self, project_id: ProjectId) -> Result<()> {
        let response = self
            .authorized(self.client.post(self.archive_url(project_id)))
            .send()
            .map_err(transport_error)?;
        read_body(response, |status| status == StatusCode::CREATED)?;
        Ok(())
    }
}
