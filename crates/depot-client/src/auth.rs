//! Credential validation against the registry's login endpoint.

use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use depot_core::credentials::Credentials;

use crate::error::ClientError;

/// A short-lived bearer token issued for the current session.
#[derive(Debug, Clone)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw bearer token value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token value, as sent in the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    profile: Profile,
}

#[derive(Deserialize)]
struct Profile {
    hash_id: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// Validates the stored account credentials and obtains a session token.
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
    http: reqwest::Client,
}

impl Authenticator {
    /// Create an authenticator for the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: reqwest::Client::new(),
        }
    }

    /// The registry base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.credentials.registry_url.trim_end_matches('/')
    }

    /// Verify the (account id, email, password) triple and return a session
    /// bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidCredentials`] for every failure: bad
    /// password, an account id that does not match the authenticated
    /// profile, or an unreachable registry. The caller is never told which
    /// sub-check failed; the discarded cause is logged at debug level.
    pub async fn login(&self) -> Result<SessionToken, ClientError> {
        match self.try_login().await {
            Ok(token) => Ok(token),
            Err(cause) => {
                debug!("login for {} failed: {cause}", self.credentials.email);
                Err(ClientError::InvalidCredentials)
            }
        }
    }

    async fn try_login(&self) -> Result<SessionToken, ClientError> {
        let body = serde_json::json!({
            "email": self.credentials.email,
            "password": self.credentials.password,
        });

        let response = self
            .http
            .post(format!("{}/auth/login/", self.base_url()))
            .json(&body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let login: LoginResponse = response.json().await?;
        if login.profile.hash_id != self.credentials.account_id {
            return Err(ClientError::InvalidCredentials);
        }

        // The login endpoint authenticates; the bearer token comes from a
        // second token-issuing call with the same credentials.
        let response = self
            .http
            .post(format!("{}/auth/token/", self.base_url()))
            .json(&body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let issued: TokenResponse = response.json().await?;
        Ok(SessionToken(issued.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_trailing_slash() {
        let auth = Authenticator::new(Credentials {
            account_id: "1234".to_owned(),
            email: "me@test.com".to_owned(),
            password: "password".to_owned(),
            registry_url: "https://api.depot.dev/".to_owned(),
        });
        assert_eq!(auth.base_url(), "https://api.depot.dev");
    }

    #[test]
    fn login_response_deserialises() {
        let body = serde_json::json!({"profile": {"hash_id": "1234"}});
        let r: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(r.profile.hash_id, "1234");
    }
}
