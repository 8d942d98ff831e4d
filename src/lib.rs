//! # Inspector Style - typed style tokens for inspector panel chrome
//!
//! Inspector panels draw wells, text wells, option wheels and backgrounds
//! from a fixed set of visual constants: gray levels, HSV and RGB colors,
//! gradients, shadows, blur radii and corner radii. This crate keeps those
//! constants in a [`StyleTokenTable`], a write-once table keyed by the
//! closed [`StyleKey`] enumeration.
//!
//! ## Reading styles
//!
//! Typed [`tokens`] fix the value type of each key at compile time:
//!
//! ```rust
//! use inspector_style::{style_table, tokens, ColorValue, GrayAlpha};
//!
//! let table = style_table();
//!
//! let radius: f64 = table.get(tokens::INSPECTOR_WELL_CORNER_RADIUS);
//! assert_eq!(radius, 4.0);
//!
//! let start: ColorValue = table.get(tokens::INSPECTOR_WELL_BORDER_GRADIENT_START_GRAY_ALPHA);
//! assert_eq!(start, ColorValue::Gray(GrayAlpha { gray: 0.31, alpha: 1.0 }));
//! ```
//!
//! Untyped access by key or by name returns a [`StyleValue`]:
//!
//! ```rust
//! use inspector_style::{StyleKey, StyleTokenTable, StyleValue};
//!
//! let table = StyleTokenTable::builtin();
//! assert_eq!(table.lookup(StyleKey::InspectorWellCornerRadius), &StyleValue::Dimension(4.0));
//! assert!(table.lookup_name("NoSuchKey").is_err());
//! ```
//!
//! ## Custom tables
//!
//! Tables are built with a [`StyleTokenTableBuilder`] or loaded from a YAML
//! stylesheet (see [`stylesheet`]), then optionally made process-wide with
//! [`install`] before the first [`style_table`] call:
//!
//! ```rust
//! use inspector_style::{StyleTokenTable, tokens};
//!
//! let table = StyleTokenTable::from_yaml_str(r#"
//! extends: default
//! InspectorWell:
//!   InspectorWellCornerRadius: 6
//! "#).unwrap();
//! assert_eq!(table.get(tokens::INSPECTOR_WELL_CORNER_RADIUS), 6.0);
//! ```

pub mod color;
pub mod style;
pub mod stylesheet;
pub mod table;
pub mod theme;

pub use color::{rgb_to_ansi256, ColorValue, GrayAlpha, Hsva, LinearRgba};
pub use style::{
    tokens, Composite, GradientSpec, Offset, Section, ShadowSpec, StyleError, StyleKey,
    StyleValue, Token, TokenValue, ValueKind,
};
pub use stylesheet::parse_stylesheet;
pub use table::{install, is_installed, style_table, StyleTokenTable, StyleTokenTableBuilder};
pub use theme::{content_shadow, detect_color_mode, set_mode_detector, ColorMode};
