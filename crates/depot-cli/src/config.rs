//! Global credentials file — read/write `~/.depot/credentials.toml`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use depot_core::credentials::Credentials;

/// Return the default path for the global credentials file
/// (`~/.depot/credentials.toml`).
#[must_use]
pub fn default_credentials_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_owned());
    PathBuf::from(home).join(".depot").join("credentials.toml")
}

/// Write `credentials` to `path`, creating parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn save_credentials(credentials: &Credentials, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(credentials)?)?;
    Ok(())
}

/// Load and deserialize [`Credentials`] from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialized.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn credentials_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        let credentials = Credentials {
            account_id: "1234".to_owned(),
            email: "me@test.com".to_owned(),
            password: "password".to_owned(),
            registry_url: "https://api.depot.dev".to_owned(),
        };
        save_credentials(&credentials, &path).unwrap();
        let loaded = load_credentials(&path).unwrap();
        assert_eq!(loaded.account_id, "1234");
        assert_eq!(loaded.registry_url, "https://api.depot.dev");
    }
}
