//! Content shadows that depend on the background's color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use crate::color::ColorValue;
use crate::style::tokens;
use crate::table::StyleTokenTable;

/// Whether a background is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// Shadow color for content drawn over a background of the given mode.
///
/// Light content on a dark background gets a dark shadow, dark content on a
/// light background a light one.
///
/// # Example
///
/// ```rust
/// use inspector_style::{content_shadow, ColorMode, ColorValue, GrayAlpha, StyleTokenTable};
///
/// let shadow = content_shadow(StyleTokenTable::builtin(), ColorMode::Light);
/// assert_eq!(shadow, ColorValue::from(GrayAlpha::new(1.0, 0.5).unwrap()));
/// ```
pub fn content_shadow(table: &StyleTokenTable, background: ColorMode) -> ColorValue {
    match background {
        ColorMode::Dark => table.get(tokens::LIGHT_CONTENT_ON_DARK_BACKGROUND_SHADOW_GRAY_ALPHA),
        ColorMode::Light => table.get(tokens::DARK_CONTENT_ON_LIGHT_BACKGROUND_SHADOW_GRAY_ALPHA),
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine whether the system appearance
/// is light or dark.
///
/// This is useful for testing or when the host application knows better.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// The current system appearance, according to the installed detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
