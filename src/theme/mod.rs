//! Appearance-dependent style selection.
//!
//! - [`ColorMode`]: light or dark background
//! - [`content_shadow`]: the engraving shadow for content on a background
//! - [`detect_color_mode`] / [`set_mode_detector`]: system appearance lookup

mod adaptive;

pub use adaptive::{content_shadow, detect_color_mode, set_mode_detector, ColorMode};
