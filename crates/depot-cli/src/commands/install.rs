//! `depot install` / `depot uninstall` — run the external package manager
//! and keep the dependency array in sync.

use anyhow::Result;

use crate::commands::{global_credentials, login, project_store};
use crate::installer::{InstallSync, PackageOutcome, Pip};
use crate::mutator::ManifestMutator;

fn report(outcomes: &[PackageOutcome], verb: &str, success: impl Fn(&str) -> String) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(()) => println!("{}", success(&outcome.package)),
            Err(cause) => println!("Error {verb} package {}: {cause}", outcome.package),
        }
    }
}

/// Run `depot install <packages>...`.
///
/// # Errors
///
/// Returns an error if recording an installed package in the manifest fails.
pub async fn run_install(packages: &[String], ignore_errors: bool) -> Result<()> {
    let Some(store) = project_store() else {
        return Ok(());
    };
    let Some(credentials) = global_credentials() else {
        return Ok(());
    };
    if login(&credentials).await.is_none() {
        return Ok(());
    }

    let mutator = ManifestMutator::new(&store);
    let sync = InstallSync::new(&Pip, &mutator);
    let outcomes = sync.install(packages, &credentials, ignore_errors)?;
    report(&outcomes, "installing", |package| {
        format!("Installed package {package} and added it to the manifest")
    });
    Ok(())
}

/// Run `depot uninstall <packages>...`.
///
/// Uninstalling needs no registry access, so the global credentials are not
/// required here.
///
/// # Errors
///
/// Returns an error if updating the manifest fails.
pub fn run_uninstall(packages: &[String], ignore_errors: bool, skip_prompts: bool) -> Result<()> {
    let Some(store) = project_store() else {
        return Ok(());
    };

    let mutator = ManifestMutator::new(&store);
    let sync = InstallSync::new(&Pip, &mutator);
    let outcomes = sync.uninstall(packages, ignore_errors, skip_prompts)?;
    report(&outcomes, "uninstalling", |package| {
        format!("Successfully uninstalled {package}")
    });
    Ok(())
}
