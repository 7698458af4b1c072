use super::prelude::*;
use crate::gateways::{self, secret::SecretStore};

pub fn fetch_api_token<S>(store: &S, name: &str) -> Result<ApiToken>
where
    S: SecretStore + ?Sized,
{
    log::debug!("Fetching API token '{name}'");
    let secret = store.fetch_secret(name).map_err(Error::ApiToken)?;
    let token = ApiToken::new(secret.trim());
    if token.is_empty() {
        return Err(Error::ApiToken(gateways::Error::Secret {
            name: name.to_owned(),
            reason: "the value is empty".into(),
        }));
    }
    Ok(token)
}
