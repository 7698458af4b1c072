use super::Result;

pub trait SecretStore {
    /// Reads the decrypted value of the secret `name`.
    fn fetch_secret(&self, name: &str) -> Result<String>;
}
