//! `depot create-token` / `depot delete-token` — access-token lifecycle.

use anyhow::Result;

use depot_client::directory::Directory;
use depot_client::tokens::TokenLifecycle;

use crate::commands::{global_credentials, login};

/// Run `depot create-token <package> <email> [--write-access]`.
///
/// # Errors
///
/// Reports every registry failure as output; only internal failures
/// propagate.
pub async fn run_create_token(package_name: &str, email: &str, write_access: bool) -> Result<()> {
    let Some(credentials) = global_credentials() else {
        return Ok(());
    };
    let Some(bearer) = login(&credentials).await else {
        return Ok(());
    };

    println!("Attempting to create an access token for user {email} and package {package_name}...");

    let directory = Directory::new(&credentials.registry_url, bearer.clone());
    let package = match directory.resolve_package(package_name).await {
        Ok(package) => package,
        Err(cause) => {
            println!("{cause}");
            return Ok(());
        }
    };
    let user = match directory.resolve_user(email).await {
        Ok(user) => user,
        Err(cause) => {
            println!("{cause}");
            return Ok(());
        }
    };

    let lifecycle = TokenLifecycle::new(&credentials, bearer);
    match lifecycle.create(&package, &user, write_access).await {
        Ok(()) => println!("Access token created"),
        Err(cause) => println!("Failed to create access token: {cause}"),
    }
    Ok(())
}

/// Run `depot delete-token <package> <email>`.
///
/// The ownership invariant is enforced before any delete request goes out:
/// the account owner's own token is refused locally.
///
/// # Errors
///
/// Reports every registry failure as output; only internal failures
/// propagate.
pub async fn run_delete_token(package_name: &str, email: &str) -> Result<()> {
    let Some(credentials) = global_credentials() else {
        return Ok(());
    };
    let Some(bearer) = login(&credentials).await else {
        return Ok(());
    };

    println!("Attempting to delete the access token for user {email} and package {package_name}...");

    let directory = Directory::new(&credentials.registry_url, bearer.clone());
    let package = match directory.resolve_package(package_name).await {
        Ok(package) => package,
        Err(cause) => {
            println!("{cause}");
            return Ok(());
        }
    };
    let user = match directory.resolve_user(email).await {
        Ok(user) => user,
        Err(cause) => {
            println!("{cause}");
            return Ok(());
        }
    };
    let token = match directory.resolve_token(&package, &user).await {
        Ok(token) => token,
        Err(cause) => {
            println!("{cause}");
            return Ok(());
        }
    };

    let lifecycle = TokenLifecycle::new(&credentials, bearer);
    match lifecycle.delete(&token).await {
        Ok(()) => println!("Access token deleted"),
        Err(cause) => println!("Failed to delete access token: {cause}"),
    }
    Ok(())
}
