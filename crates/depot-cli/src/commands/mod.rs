//! CLI subcommand implementations.

pub mod bump;
pub mod configure;
pub mod init;
pub mod install;
pub mod package;
pub mod tokens;
pub mod upload;
pub mod values;

use log::debug;

use depot_client::auth::{Authenticator, SessionToken};
use depot_core::credentials::Credentials;
use depot_core::store::{ManifestStore, MANIFEST_FILE};

use crate::config;

/// The manifest store for the current directory, or a reported miss when no
/// project has been initialized here.
pub(crate) fn project_store() -> Option<ManifestStore> {
    let store = ManifestStore::new(MANIFEST_FILE);
    if store.exists() {
        Some(store)
    } else {
        println!("No package found - run `depot init` first");
        None
    }
}

/// The stored global credentials, or a reported miss when `configure` has
/// not been run.
pub(crate) fn global_credentials() -> Option<Credentials> {
    let path = config::default_credentials_path();
    match config::load_credentials(&path) {
        Ok(credentials) => Some(credentials),
        Err(cause) => {
            debug!("loading {}: {cause}", path.display());
            println!("Global config not found - run `depot configure` first");
            None
        }
    }
}

/// Validate the credentials against the registry, reporting a failure.
pub(crate) async fn login(credentials: &Credentials) -> Option<SessionToken> {
    match Authenticator::new(credentials.clone()).login().await {
        Ok(token) => Some(token),
        Err(cause) => {
            println!("{cause}");
            None
        }
    }
}
