//! Applies idempotent, type-safe edits to the project manifest.

use thiserror::Error;

use depot_core::manifest::{ManifestError, Value};
use depot_core::store::{ManifestStore, StoreError};

use crate::prompt::Confirm;

/// Errors from a manifest mutation.
#[derive(Debug, Error)]
pub enum MutateError {
    /// The mutation violated a manifest type invariant.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    /// The manifest could not be loaded or persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a `set` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value was written and persisted.
    Applied,
    /// The user declined the array-overwrite confirmation; nothing changed.
    Cancelled,
}

/// Load-mutate-persist wrapper over the manifest store.
///
/// Every operation reloads the document from disk, applies one edit, and
/// persists immediately. Nothing is batched and no document is cached across
/// calls.
#[derive(Debug)]
pub struct ManifestMutator<'a> {
    store: &'a ManifestStore,
}

impl<'a> ManifestMutator<'a> {
    /// Create a mutator over `store`.
    #[must_use]
    pub fn new(store: &'a ManifestStore) -> Self {
        Self { store }
    }

    /// Set `key` to `value`.
    ///
    /// Replacing an array-valued key with a scalar requires confirmation;
    /// a decline aborts with [`SetOutcome::Cancelled`] and no side effect.
    ///
    /// # Errors
    ///
    /// Returns [`MutateError::Store`] if the manifest cannot be loaded or
    /// persisted.
    pub fn set(
        &self,
        key: &str,
        value: Value,
        confirm: &dyn Confirm,
    ) -> Result<SetOutcome, MutateError> {
        let mut manifest = self.store.load()?;

        if matches!(manifest.get(key), Some(Value::Array(_))) {
            let prompt = format!("The key `{key}` currently holds an array. Overwrite it?");
            if !confirm.confirm(&prompt) {
                return Ok(SetOutcome::Cancelled);
            }
        }

        manifest.insert(key, value);
        self.store.save(&manifest)?;
        Ok(SetOutcome::Applied)
    }

    /// Add `value` to the array at `key`.
    ///
    /// The document is persisted even when the value was already present
    /// (the idempotent no-op still rewrites the file).
    ///
    /// # Errors
    ///
    /// Returns [`MutateError::Manifest`] if the key holds a scalar, or
    /// [`MutateError::Store`] on load/persist failure.
    pub fn append(&self, key: &str, value: &str) -> Result<(), MutateError> {
        let mut manifest = self.store.load()?;
        manifest.append(key, value)?;
        self.store.save(&manifest)?;
        Ok(())
    }

    /// Remove `value` from the array at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MutateError::Manifest`] if the key holds a scalar or the
    /// value is absent (the file is left untouched), or
    /// [`MutateError::Store`] on load/persist failure.
    pub fn remove(&self, key: &str, value: &str) -> Result<(), MutateError> {
        let mut manifest = self.store.load()?;
        manifest.remove(key, value)?;
        self.store.save(&manifest)?;
        Ok(())
    }
}
