//! Access-token creation and deletion.

use log::debug;
use reqwest::StatusCode;

use depot_core::credentials::Credentials;
use depot_core::entities::{Package, Token, User};

use crate::auth::SessionToken;
use crate::error::ClientError;

/// Creates and deletes access tokens, enforcing the ownership invariant.
#[derive(Debug, Clone)]
pub struct TokenLifecycle {
    base_url: String,
    account_id: String,
    bearer: SessionToken,
    http: reqwest::Client,
}

impl TokenLifecycle {
    /// Create a token lifecycle for the authenticated account.
    #[must_use]
    pub fn new(credentials: &Credentials, bearer: SessionToken) -> Self {
        Self {
            base_url: credentials.registry_url.trim_end_matches('/').to_owned(),
            account_id: credentials.account_id.clone(),
            bearer,
            http: reqwest::Client::new(),
        }
    }

    /// Create an access token for `user` on `package`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnexpectedStatus`] if the registry answers
    /// with anything other than 201.
    pub async fn create(
        &self,
        package: &Package,
        user: &User,
        write_access: bool,
    ) -> Result<(), ClientError> {
        debug!("creating access token for {user} on {package}");

        let response = self
            .http
            .post(format!("{}/tokens/", self.base_url))
            .bearer_auth(self.bearer.as_str())
            .json(&serde_json::json!({
                "user": user.hash_id,
                "package": package.uuid,
                "write_access": write_access,
            }))
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    /// Delete an access token.
    ///
    /// The ownership check runs before anything touches the network: a token
    /// whose user ref is the account owner is rejected locally.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OwnershipViolation`] for the owner's own
    /// token, or [`ClientError::UnexpectedStatus`] if the registry answers
    /// with anything other than 204.
    pub async fn delete(&self, token: &Token) -> Result<(), ClientError> {
        if token.is_owned_by(&self.account_id) {
            return Err(ClientError::OwnershipViolation);
        }

        debug!("deleting access token {}", token.uuid);

        let response = self
            .http
            .delete(format!("{}/tokens/{}/", self.base_url, token.uuid))
            .bearer_auth(self.bearer.as_str())
            .send()
            .await?;

        if response.status() != StatusCode::NO_CONTENT {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
