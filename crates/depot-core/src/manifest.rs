//! The project manifest document and its typed mutation operations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a manifest mutation violates a type invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    /// The key holds a scalar, so array operations are not allowed on it.
    #[error("cannot modify key `{key}` because it is not an array")]
    NotAnArray {
        /// The offending manifest key.
        key: String,
    },
    /// The value to remove is not present in the array.
    #[error("value `{value}` is not present in `{key}`")]
    ValueNotFound {
        /// The manifest key that was searched.
        key: String,
        /// The missing value.
        value: String,
    },
}

/// A single manifest value: a string, an integer, or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A plain string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// An array of string values with set semantics.
    Array(Vec<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Array(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// The local project manifest: a string-keyed document holding the package
/// name, version, dependency array, and arbitrary additional settings.
///
/// Serializes transparently as a TOML table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, Value>,
}

/// Version assigned to freshly initialized manifests.
pub const INITIAL_VERSION: &str = "0.1.0";

impl Manifest {
    /// Create the initial manifest for a new project.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("name".to_owned(), Value::String(name.to_owned()));
        entries.insert(
            "version".to_owned(),
            Value::String(INITIAL_VERSION.to_owned()),
        );
        Self { entries }
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Set `key` to `value` unconditionally, replacing any existing value.
    ///
    /// The array-overwrite confirmation policy lives in the caller; this is
    /// the raw write.
    pub fn insert(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_owned(), value);
    }

    /// Add `value` to the array at `key`, creating the array if the key is
    /// absent. Adding a value that is already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::NotAnArray`] if the key holds a scalar.
    pub fn append(&mut self, key: &str, value: &str) -> Result<(), ManifestError> {
        match self.entries.get_mut(key) {
            None => {
                self.entries
                    .insert(key.to_owned(), Value::Array(vec![value.to_owned()]));
                Ok(())
            }
            Some(Value::Array(items)) => {
                if !items.iter().any(|item| item == value) {
                    items.push(value.to_owned());
                }
                Ok(())
            }
            Some(_) => Err(ManifestError::NotAnArray {
                key: key.to_owned(),
            }),
        }
    }

    /// Remove the single matching `value` from the array at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::NotAnArray`] if the key holds a scalar, or
    /// [`ManifestError::ValueNotFound`] if the value (or the key itself) is
    /// absent. The document is unchanged on error.
    pub fn remove(&mut self, key: &str, value: &str) -> Result<(), ManifestError> {
        match self.entries.get_mut(key) {
            Some(Value::Array(items)) => {
                let index = items.iter().position(|item| item == value).ok_or_else(|| {
                    ManifestError::ValueNotFound {
                        key: key.to_owned(),
                        value: value.to_owned(),
                    }
                })?;
                items.remove(index);
                Ok(())
            }
            Some(_) => Err(ManifestError::NotAnArray {
                key: key.to_owned(),
            }),
            None => Err(ManifestError::ValueNotFound {
                key: key.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    /// The package name, if set to a string value.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self.entries.get("name") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The package version, if set to a string value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self.entries.get("version") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Replace the package version. The value is stored verbatim; semver
    /// validity is only enforced when bumping automatically.
    pub fn set_version(&mut self, version: &str) {
        self.entries
            .insert("version".to_owned(), Value::String(version.to_owned()));
    }
}
