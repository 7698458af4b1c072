use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("gitlab-archiver.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub gitlab: Option<GitLab>,
    pub token: Option<Token>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitLab {
    pub api_base_url: Option<String>,
    pub members_per_page: Option<u32>,
    pub min_access_level: Option<AccessLevel>,
}

impl Default for GitLab {
    fn default() -> Self {
        Config::default().gitlab.expect("GitLab configuration")
    }
}

/// Either the name (`"developer"`) or the numeric value (`30`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AccessLevel {
    Name(String),
    Primitive(u8),
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Token {
    pub source: Option<TokenSource>,
    pub ssm: Option<Ssm>,
    pub env: Option<Env>,
}

impl Default for Token {
    fn default() -> Self {
        Config::default().token.expect("Token configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenSource {
    Ssm,
    Env,
}

impl TokenSource {
    pub const fn toml_name(self) -> &'static str {
        match self {
            Self::Ssm => "ssm",
            Self::Env => "env",
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ssm {
    pub parameter_name: String,
    pub region: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Env {
    pub variable: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.gitlab.is_some());
        assert!(cfg.token.is_some());
    }

    #[test]
    fn default_token_config() {
        let cfg = Token::default();
        assert_eq!(cfg.source, Some(TokenSource::Ssm));
        assert!(cfg.ssm.is_some());
        assert!(cfg.env.is_some());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string =
            fs::read_to_string("src/config/gitlab-archiver.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        let gitlab = cfg.gitlab.unwrap();
        assert_eq!(gitlab.min_access_level, Some(AccessLevel::Primitive(40)));
        assert_eq!(cfg.token.unwrap().source, Some(TokenSource::Env));
    }

    #[test]
    fn parse_access_level_name() {
        let cfg: GitLab = toml::from_str(r#"min-access-level = "maintainer""#).unwrap();
        assert_eq!(
            cfg.min_access_level,
            Some(AccessLevel::Name("maintainer".into()))
        );
    }
}
