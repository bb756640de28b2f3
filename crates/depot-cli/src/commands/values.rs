//! `depot set` / `depot add` / `depot remove` — manifest key edits.

use anyhow::Result;

use depot_core::manifest::Value;

use crate::commands::project_store;
use crate::mutator::{ManifestMutator, MutateError, SetOutcome};
use crate::prompt::Confirm;

/// Parse a CLI value argument: anything that parses as an integer is stored
/// as one, everything else as a string.
fn parse_value(raw: &str) -> Value {
    raw.parse::<i64>()
        .map_or_else(|_| Value::String(raw.to_owned()), Value::Integer)
}

/// Run `depot set <key> <value>`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or persisted.
pub fn run_set(key: &str, value: &str, confirm: &dyn Confirm) -> Result<()> {
    let Some(store) = project_store() else {
        return Ok(());
    };

    let mutator = ManifestMutator::new(&store);
    match mutator.set(key, parse_value(value), confirm)? {
        SetOutcome::Applied => println!("Successfully added key \"{key}\" with value \"{value}\""),
        SetOutcome::Cancelled => println!("Operation cancelled by user"),
    }
    Ok(())
}

/// Run `depot add <key> <value>`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or persisted.
pub fn run_add(key: &str, value: &str) -> Result<()> {
    let Some(store) = project_store() else {
        return Ok(());
    };

    let mutator = ManifestMutator::new(&store);
    match mutator.append(key, value) {
        Ok(()) => println!("Successfully added key \"{key}\" with value \"{value}\""),
        Err(MutateError::Manifest(cause)) => println!("{cause}"),
        Err(MutateError::Store(cause)) => return Err(cause.into()),
    }
    Ok(())
}

/// Run `depot remove <key> <value>`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or persisted.
pub fn run_remove(key: &str, value: &str) -> Result<()> {
    let Some(store) = project_store() else {
        return Ok(());
    };

    let mutator = ManifestMutator::new(&store);
    match mutator.remove(key, value) {
        Ok(()) => println!("Successfully removed value \"{value}\" from key \"{key}\""),
        Err(MutateError::Manifest(cause)) => println!("{cause}"),
        Err(MutateError::Store(cause)) => return Err(cause.into()),
    }
    Ok(())
}
