//! `depot configure` — store and validate the account credentials.

use anyhow::Result;

use depot_client::auth::Authenticator;
use depot_core::credentials::Credentials;

use crate::config::{default_credentials_path, save_credentials};

/// Run `depot configure` — validate the credential triple against the
/// registry, then write the global credentials file.
///
/// # Errors
///
/// Returns an error if the credentials file cannot be written.
pub async fn run_configure(
    account_id: &str,
    email: &str,
    password: &str,
    registry_url: &str,
) -> Result<()> {
    let credentials = Credentials {
        account_id: account_id.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        registry_url: registry_url.to_owned(),
    };

    // Refuse to persist credentials the registry rejects.
    if Authenticator::new(credentials.clone()).login().await.is_err() {
        println!("Invalid credentials");
        return Ok(());
    }

    let path = default_credentials_path();
    save_credentials(&credentials, &path)?;
    println!("Successfully updated config file at {}", path.display());
    Ok(())
}
