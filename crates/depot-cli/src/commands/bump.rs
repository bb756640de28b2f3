//! `depot bump` — increment the manifest version or set it explicitly.

use anyhow::Result;

use depot_core::version::{bump, BumpKind};

use crate::commands::project_store;

/// Run `depot bump [version] [--major|--minor]`.
///
/// With no arguments, bumps the patch component. An explicit version is
/// stored verbatim and cannot be combined with the flags.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or persisted.
pub fn run_bump(version: Option<&str>, major: bool, minor: bool) -> Result<()> {
    let Some(store) = project_store() else {
        return Ok(());
    };

    if version.is_some() && (major || minor) {
        println!("Cannot use the version argument with either the --minor or --major arguments");
        return Ok(());
    }

    let mut manifest = store.load()?;

    let next = match version {
        Some(explicit) => explicit.to_owned(),
        None => {
            let kind = if major {
                BumpKind::Major
            } else if minor {
                BumpKind::Minor
            } else {
                BumpKind::Patch
            };
            let current = manifest.version().unwrap_or_default().to_owned();
            match bump(&current, kind) {
                Ok(next) => next,
                Err(cause) => {
                    println!("Cannot automatically bump the version: {cause}");
                    return Ok(());
                }
            }
        }
    };

    manifest.set_version(&next);
    store.save(&manifest)?;
    println!("Updated version to {next}");
    Ok(())
}
