mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::{ConfigError, API_KEY_ENV, BASE_URL_ENV};
pub use types::{CatalogConfig, Config, StorageConfig};
