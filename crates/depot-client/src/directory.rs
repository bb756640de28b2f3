//! Authenticated listing and resolution of remote registry entities.

use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use depot_core::entities::{find_package, find_token, find_user, Package, Token, User};

use crate::auth::SessionToken;
use crate::error::ClientError;

/// Lists remote packages, users, and tokens, and resolves human-readable
/// identifiers to the matching records.
///
/// Every listing degrades to an empty result when the registry is
/// unreachable or answers with a non-200 status; callers cannot distinguish
/// "does not exist" from "fetch failed".
#[derive(Debug, Clone)]
pub struct Directory {
    base_url: String,
    bearer: SessionToken,
    http: reqwest::Client,
}

impl Directory {
    /// Create a directory over `registry_url`, authenticated by `bearer`.
    #[must_use]
    pub fn new(registry_url: &str, bearer: SessionToken) -> Self {
        Self {
            base_url: registry_url.trim_end_matches('/').to_owned(),
            bearer,
            http: reqwest::Client::new(),
        }
    }

    /// All packages visible to this account.
    pub async fn list_packages(&self) -> Vec<Package> {
        self.fetch_collection("packages").await
    }

    /// All sub-users registered under this account.
    pub async fn list_users(&self) -> Vec<User> {
        self.fetch_collection("subusers").await
    }

    /// All access tokens issued for this account's packages.
    pub async fn list_tokens(&self) -> Vec<Token> {
        self.fetch_collection("tokens").await
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, segment: &str) -> Vec<T> {
        match self.try_fetch(segment).await {
            Ok(records) => records,
            Err(cause) => {
                warn!("listing /{segment}/ failed, treating as empty: {cause}");
                Vec::new()
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(&self, segment: &str) -> Result<Vec<T>, ClientError> {
        let url = format!("{}/{segment}/", self.base_url);
        debug!("listing {url}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.bearer.as_str())
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Resolve a package name to its registry record. First exact match wins.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::PackageNotFound`] if no fetched package has
    /// that name.
    pub async fn resolve_package(&self, name: &str) -> Result<Package, ClientError> {
        let packages = self.list_packages().await;
        find_package(&packages, name)
            .cloned()
            .ok_or_else(|| ClientError::PackageNotFound(name.to_owned()))
    }

    /// Resolve a user email to its registry record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UserNotFound`] if no fetched user has that
    /// email.
    pub async fn resolve_user(&self, email: &str) -> Result<User, ClientError> {
        let users = self.list_users().await;
        find_user(&users, email)
            .cloned()
            .ok_or_else(|| ClientError::UserNotFound(email.to_owned()))
    }

    /// Resolve the access token scoping `user`'s access to `package`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenNotFound`] if no fetched token references
    /// both.
    pub async fn resolve_token(&self, package: &Package, user: &User) -> Result<Token, ClientError> {
        let tokens = self.list_tokens().await;
        find_token(&tokens, package, user)
            .cloned()
            .ok_or(ClientError::TokenNotFound)
    }
}
