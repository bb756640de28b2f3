//! Global account credentials for the remote registry.

use serde::{Deserialize, Serialize};

/// Registry base URL used when `configure` is run without `--registry-url`.
pub const DEFAULT_REGISTRY_URL: &str = "https://api.depot.dev";

/// Per-user registry credentials, stored in the global configuration file.
///
/// Read-only to the rest of the system after `configure` writes it. Always
/// passed in explicitly; nothing in the client reads it from a fixed path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Opaque account identifier assigned by the registry.
    pub account_id: String,
    /// Email address the account is registered under.
    pub email: String,
    /// Plaintext account password.
    pub password: String,
    /// Base URL of the registry API.
    pub registry_url: String,
}
