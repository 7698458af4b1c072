use crate::config;
use anyhow::Result;
use archiver_core::{entities::ApiToken, usecases::fetch_api_token};
use archiver_gateways::{env::EnvSecretStore, gitlab::GitLab, ssm::SsmParameterStore};

pub fn api_token(cfg: &config::TokenSource) -> Result<ApiToken> {
    let token = match cfg {
        config::TokenSource::Ssm {
            parameter_name,
            region,
        } => {
            log::info!("Use SSM parameter {parameter_name} ({region}) as API token");
            let store = SsmParameterStore::new(region.as_str())?;
            fetch_api_token(&store, parameter_name)?
        }
        config::TokenSource::Env { variable } => {
            log::info!("Use environment variable {variable} as API token");
            fetch_api_token(&EnvSecretStore, variable)?
        }
    };
    Ok(token)
}

pub fn gitlab_gateway(cfg: &config::GitLab, token: ApiToken) -> Result<GitLab> {
    log::debug!("Use GitLab API at {}", cfg.api_base_url);
    GitLab::new(&cfg.api_base_url, token)
}
