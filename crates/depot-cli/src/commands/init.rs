//! `depot init` — create a new project manifest in the current directory.

use anyhow::Result;

use depot_core::manifest::Manifest;
use depot_core::store::{ManifestStore, MANIFEST_FILE};

use crate::prompt::Confirm;

/// Run `depot init <name>` — write a fresh manifest, prompting before
/// overwriting an existing one unless `--overwrite` was given.
///
/// # Errors
///
/// Returns an error if the manifest file cannot be written.
pub fn run_init(name: &str, overwrite: bool, confirm: &dyn Confirm) -> Result<()> {
    let store = ManifestStore::new(MANIFEST_FILE);

    if store.exists()
        && !overwrite
        && !confirm.confirm("A package already exists at this location. Overwrite?")
    {
        println!("Operation cancelled by user");
        return Ok(());
    }

    store.save(&Manifest::new(name))?;
    println!("Created manifest file `{MANIFEST_FILE}`");
    Ok(())
}
