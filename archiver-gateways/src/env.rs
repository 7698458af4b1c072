use archiver_core::gateways::{secret::SecretStore, Error, Result};
use std::env;

/// Reads secrets from environment variables.
///
/// The secret name is the name of the variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn fetch_secret(&self, name: &str) -> Result<String> {
        env::var(name).map_err(|err| Error::Secret {
            name: name.to_owned(),
            reason: err.to_string(),
        })
    }
}
