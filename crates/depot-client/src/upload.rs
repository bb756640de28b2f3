//! Uploads built distribution files to the registry.

use std::path::Path;

use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use depot_core::credentials::Credentials;

use crate::error::ClientError;

/// Uploads distribution files to the account-scoped upload endpoint using
/// basic authentication.
#[derive(Debug, Clone)]
pub struct Uploader {
    credentials: Credentials,
    http: reqwest::Client,
}

impl Uploader {
    /// Create an uploader for the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}/",
            self.credentials.registry_url.trim_end_matches('/'),
            self.credentials.account_id
        )
    }

    /// Upload one file, tagged with the package name and version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the file cannot be read, or
    /// [`ClientError::UnexpectedStatus`] if the registry answers with
    /// anything other than 201.
    pub async fn upload_file(
        &self,
        name: &str,
        version: &str,
        path: &Path,
    ) -> Result<(), ClientError> {
        let file_name = path
            .file_name()
            .map_or_else(|| "package".to_owned(), |n| n.to_string_lossy().into_owned());
        let bytes = std::fs::read(path)?;

        debug!("uploading {file_name} to {}", self.upload_url());

        let form = Form::new()
            .text("name", name.to_owned())
            .text("version", version.to_owned())
            .part("content", Part::bytes(bytes).file_name(file_name));

        let response = self
            .http
            .post(self.upload_url())
            .basic_auth(&self.credentials.email, Some(&self.credentials.password))
            .multipart(form)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
