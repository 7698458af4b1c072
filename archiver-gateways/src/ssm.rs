use archiver_core::gateways::{secret::SecretStore, Error, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::{error::DisplayErrorContext, Client};
use tokio::runtime::{Builder, Runtime};

/// Secrets stored as parameters in the AWS Systems Manager Parameter Store.
///
/// Credentials are resolved by the default AWS provider chain.
/// The SDK is async, so requests are driven by a private
/// single-threaded runtime and block the caller.
pub struct SsmParameterStore {
    client: Client,
    runtime: Runtime,
}

impl SsmParameterStore {
    pub fn new(region: impl Into<String>) -> anyhow::Result<Self> {
        let region = region.into();
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.clone()))
                .load(),
        );
        log::debug!("Using SSM parameter store in region {region}");
        let client = Client::new(&config);
        Ok(Self { client, runtime })
    }
}

impl SecretStore for SsmParameterStore {
    fn fetch_secret(&self, name: &str) -> Result<String> {
        let secret_error = |reason: String| Error::Secret {
            name: name.to_owned(),
            reason,
        };
        let request = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send();
        let output = self
            .runtime
            .block_on(request)
            .map_err(|err| secret_error(DisplayErrorContext(&err).to_string()))?;
        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(ToOwned::to_owned)
            .ok_or_else(|| secret_error("the parameter has no value".into()))
    }
}
