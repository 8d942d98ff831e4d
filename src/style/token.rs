//! Typed keys.
//!
//! A [`Token<T>`] pairs a [`StyleKey`] with the Rust type its value reads
//! as. Tokens are only created by the key declarations in this crate, so a
//! consumer cannot ask for a corner radius as a color: that request does
//! not type-check.

use std::fmt;
use std::marker::PhantomData;

use crate::color::ColorValue;

use super::key::StyleKey;
use super::value::{GradientSpec, Offset, ShadowSpec, StyleValue};

/// A style key whose value type is fixed at compile time.
pub struct Token<T> {
    key: StyleKey,
    _value: PhantomData<fn() -> T>,
}

impl<T> Token<T> {
    pub(crate) const fn new(key: StyleKey) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }

    pub const fn key(&self) -> StyleKey {
        self.key
    }
}

impl<T> Clone for Token<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Token<T> {}

impl<T> fmt::Debug for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&self.key).finish()
    }
}

/// Rust types a style value can be read as.
pub trait TokenValue: Sized {
    /// Extracts the typed value, or `None` when the shape differs.
    fn from_style_value(value: &StyleValue) -> Option<Self>;
}

impl TokenValue for ColorValue {
    fn from_style_value(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl TokenValue for GradientSpec {
    fn from_style_value(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Gradient(g) => Some(*g),
            _ => None,
        }
    }
}

impl TokenValue for ShadowSpec {
    fn from_style_value(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Shadow(s) => Some(*s),
            _ => None,
        }
    }
}

impl TokenValue for Offset {
    fn from_style_value(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Offset(o) => Some(*o),
            _ => None,
        }
    }
}

/// Scalars, levels and dimensions all read as plain numbers.
impl TokenValue for f64 {
    fn from_style_value(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Scalar(v) | StyleValue::Level(v) | StyleValue::Dimension(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::tokens;

    #[test]
    fn test_token_key() {
        assert_eq!(
            tokens::INSPECTOR_WELL_CORNER_RADIUS.key(),
            StyleKey::InspectorWellCornerRadius
        );
    }

    #[test]
    fn test_f64_reads_scalar_and_dimension() {
        assert_eq!(f64::from_style_value(&StyleValue::Scalar(2.5)), Some(2.5));
        assert_eq!(f64::from_style_value(&StyleValue::Level(0.53)), Some(0.53));
        assert_eq!(f64::from_style_value(&StyleValue::Dimension(4.0)), Some(4.0));
        assert_eq!(
            f64::from_style_value(&StyleValue::Offset(Offset::new(0.0, 1.0))),
            None
        );
    }

    #[test]
    fn test_debug_names_key() {
        let debug = format!("{:?}", tokens::INSPECTOR_LABEL_TEXT_COLOR);
        assert_eq!(debug, "Token(InspectorLabelTextColor)");
    }
}
