use anyhow::{anyhow, Context, Result};
use archiver_core::{entities::AccessLevel, usecases::DEFAULT_MEMBERS_PER_PAGE};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "gitlab-archiver.toml";

const ENV_NAME_API_BASE_URL: &str = "GITLAB_API_BASE_URL";
const ENV_NAME_TOKEN: &str = "GITLAB_TOKEN";

const MAX_MEMBERS_PER_PAGE: u32 = 100;

#[derive(Debug)]
pub struct Config {
    pub gitlab: GitLab,
    pub token: TokenSource,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config: raw::Config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                let cfg_string = fs::read_to_string(file_path).with_context(|| {
                    format!("Could not read configuration file {}", file_path.display())
                })?;
                toml::from_str(&cfg_string)?
            }
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                Ok(cfg_string) => {
                    log::info!("Load {DEFAULT_CONFIG_FILE_NAME}");
                    toml::from_str(&cfg_string)?
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::debug!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    raw::Config::default()
                }
                Err(err) => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = env::var(ENV_NAME_API_BASE_URL) {
            self.gitlab.api_base_url = api_base_url;
        }
        if env::var_os(ENV_NAME_TOKEN).is_some() {
            log::info!("Read API token from {ENV_NAME_TOKEN}");
            self.token = TokenSource::Env {
                variable: ENV_NAME_TOKEN.to_owned(),
            };
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitLab {
    /// Base URL of the REST API, e.g. `https://gitlab.com/api/v4`.
    pub api_base_url: String,
    pub members_per_page: u32,
    pub min_access_level: AccessLevel,
}

/// Where the GitLab API token comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// AWS Systems Manager Parameter Store
    Ssm {
        parameter_name: String,
        region: String,
    },
    Env {
        variable: String,
    },
}

impl TryFrom<raw::AccessLevel> for AccessLevel {
    type Error = anyhow::Error;
    fn try_from(from: raw::AccessLevel) -> Result<Self> {
        let level: AccessLevel = match from {
            raw::AccessLevel::Name(name) => name
                .parse()
                .map_err(|_| anyhow!("Unknown access level '{name}'"))?,
            raw::AccessLevel::Primitive(value) => AccessLevel::try_from(value)?,
        };
        Ok(level)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { gitlab, token } = from;

        let raw::GitLab {
            api_base_url,
            members_per_page,
            min_access_level,
        } = gitlab.unwrap_or_default();
        let defaults = raw::GitLab::default();

        let api_base_url = api_base_url
            .or(defaults.api_base_url)
            .ok_or_else(|| anyhow!("Missing GitLab API base URL"))?;
        if api_base_url.trim().is_empty() {
            return Err(anyhow!("The GitLab API base URL must not be empty"));
        }

        let members_per_page = members_per_page
            .or(defaults.members_per_page)
            .unwrap_or(DEFAULT_MEMBERS_PER_PAGE);
        if !(1..=MAX_MEMBERS_PER_PAGE).contains(&members_per_page) {
            return Err(anyhow!(
                "Members per page must be between 1 and {MAX_MEMBERS_PER_PAGE}"
            ));
        }

        let min_access_level = match min_access_level.or(defaults.min_access_level) {
            Some(level) => AccessLevel::try_from(level)?,
            None => AccessLevel::default(),
        };

        let gitlab = GitLab {
            api_base_url,
            members_per_page,
            min_access_level,
        };

        let raw::Token { source, ssm, env } = token.unwrap_or_default();
        let source = source.unwrap_or(raw::TokenSource::Ssm);
        let toml_name = source.toml_name();
        let token = match source {
            raw::TokenSource::Ssm => {
                let raw::Ssm {
                    parameter_name,
                    region,
                } = ssm.ok_or_else(|| anyhow!("Missing '{toml_name}' token configuration"))?;
                TokenSource::Ssm {
                    parameter_name,
                    region,
                }
            }
            raw::TokenSource::Env => {
                let raw::Env { variable } =
                    env.ok_or_else(|| anyhow!("Missing '{toml_name}' token configuration"))?;
                TokenSource::Env { variable }
            }
        };

        Ok(Self { gitlab, token })
    }
}
