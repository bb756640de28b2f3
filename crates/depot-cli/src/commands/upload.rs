//! `depot upload` — send built distribution files to the registry.

use std::path::PathBuf;

use anyhow::Result;

use depot_client::upload::Uploader;

use crate::commands::{global_credentials, login, project_store};

/// Directory the build toolchain writes distribution files into.
const DIST_DIR: &str = "dist";

/// Run `depot upload [--ignore-errors]` — upload every file under `dist/`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub async fn run_upload(ignore_errors: bool) -> Result<()> {
    let Some(store) = project_store() else {
        return Ok(());
    };
    let Some(credentials) = global_credentials() else {
        return Ok(());
    };
    if login(&credentials).await.is_none() {
        return Ok(());
    }

    let manifest = store.load()?;
    let (Some(name), Some(version)) = (manifest.name(), manifest.version()) else {
        println!("The manifest must set `name` and `version` before uploading");
        return Ok(());
    };

    let mut files: Vec<PathBuf> = match std::fs::read_dir(DIST_DIR) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();

    if files.is_empty() {
        println!("Nothing to upload. Run `depot package` first to build a package");
        return Ok(());
    }

    let uploader = Uploader::new(credentials);
    let mut uploaded = 0_u32;
    for file in &files {
        println!("Attempting to upload file {} to the registry", file.display());
        match uploader.upload_file(name, version, file).await {
            Ok(()) => {
                println!("File {} uploaded successfully", file.display());
                uploaded += 1;
            }
            Err(cause) => {
                println!("File {} failed to upload: {cause}", file.display());
                if !ignore_errors {
                    return Ok(());
                }
                println!("Skipping to the next file...");
            }
        }
    }

    if uploaded == 0 {
        println!("No files uploaded");
    } else {
        println!("Uploaded {uploaded} files successfully");
    }
    Ok(())
}
