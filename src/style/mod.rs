//! Style keys and the values they hold.
//!
//! This module provides the vocabulary of the style table:
//!
//! - [`StyleKey`]: the closed set of key names, grouped into [`Section`]s
//! - [`StyleValue`]: a tagged value per shape ([`ValueKind`])
//! - [`Token`]: a key with its value type fixed at compile time, see [`tokens`]
//! - [`StyleError`]: errors from defining, building and loading tables

mod error;
mod key;
mod token;
mod value;

pub use error::StyleError;
pub use key::{tokens, Composite, Section, StyleKey};
pub use token::{Token, TokenValue};
pub use value::{GradientSpec, Offset, ShadowSpec, StyleValue, ValueKind};

#[cfg(test)]
pub(crate) use key::read_every_token;
