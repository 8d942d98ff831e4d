//! Style table errors.

use std::path::PathBuf;

use thiserror::Error;

use super::key::StyleKey;
use super::value::ValueKind;

/// Error returned when defining, building, loading or reading a style table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// A key was defined twice while building a table.
    #[error("style key '{key}' is already defined")]
    DuplicateKey { key: StyleKey },

    /// A value of the wrong shape was defined for a key.
    #[error("style key '{key}' holds {expected} values, got {found}")]
    TypeMismatch {
        key: StyleKey,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A name that is not part of the closed key set.
    #[error("unknown style key '{name}'")]
    UnknownKey { name: String },

    /// A table was built before every key was defined.
    #[error("style keys left undefined: {}", join_keys(keys))]
    MissingKeys { keys: Vec<StyleKey> },

    /// A gradient or shadow disagrees with the component keys it is made of.
    #[error("style key '{key}' does not match its component keys")]
    InconsistentComposite { key: StyleKey },

    /// A color channel outside [0, 1], or not a finite number.
    #[error("color channel '{channel}' = {value} is outside [0, 1]")]
    ChannelOutOfRange { channel: &'static str, value: f64 },

    /// A value that fails validation for the key it was defined under.
    #[error("invalid value for style key '{key}': {reason}")]
    InvalidValue { key: StyleKey, reason: String },

    /// The process-wide table was installed more than once.
    #[error("a style table is already installed")]
    AlreadyInstalled,

    /// A stylesheet file could not be read.
    #[error("failed to read stylesheet {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// A stylesheet document is malformed.
    #[error("stylesheet parse error: {message}")]
    Parse { message: String },

    /// A table could not be encoded to YAML or JSON.
    #[error("failed to encode style table: {message}")]
    Encode { message: String },
}

fn join_keys(keys: &[StyleKey]) -> String {
    keys.iter()
        .map(|key| key.name())
        .collect::<Vec<_>>()
        .join(", ")
}
