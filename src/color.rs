//! Color values used by style tokens.
//!
//! Three color models appear in the inspector chrome:
//!
//! - [`GrayAlpha`]: a single luminance channel plus opacity
//! - [`Hsva`]: hue, saturation and value plus opacity, hue as a fraction of a turn
//! - [`LinearRgba`]: red, green and blue plus opacity
//!
//! All channels are `f64` in `[0, 1]` and are kept at full precision. The
//! `to_*` conversions at the bottom of [`ColorValue`] exist for external
//! renderers and terminal previews; nothing in the table quantizes values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::StyleError;

fn check_channel(channel: &'static str, value: f64) -> Result<f64, StyleError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(StyleError::ChannelOutOfRange { channel, value })
    }
}

/// A gray level paired with an opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrayAlpha {
    pub gray: f64,
    pub alpha: f64,
}

impl GrayAlpha {
    /// Creates a gray color, rejecting channels outside `[0, 1]`.
    pub fn new(gray: f64, alpha: f64) -> Result<Self, StyleError> {
        Ok(Self {
            gray: check_channel("gray", gray)?,
            alpha: check_channel("alpha", alpha)?,
        })
    }

    /// Creates a gray color without range checks, for compile-time constants.
    pub const fn new_unchecked(gray: f64, alpha: f64) -> Self {
        Self { gray, alpha }
    }
}

/// A hue/saturation/value color with opacity.
///
/// `hue` is a fraction of a full turn, so 213° is stored as `213.0 / 360.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    pub alpha: f64,
}

impl Hsva {
    /// Creates an HSV color, rejecting channels outside `[0, 1]`.
    pub fn new(hue: f64, saturation: f64, value: f64, alpha: f64) -> Result<Self, StyleError> {
        Ok(Self {
            hue: check_channel("hue", hue)?,
            saturation: check_channel("saturation", saturation)?,
            value: check_channel("value", value)?,
            alpha: check_channel("alpha", alpha)?,
        })
    }

    /// Creates an HSV color from a hue in degrees (`0..=360`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use inspector_style::Hsva;
    ///
    /// let color = Hsva::from_degrees(180.0, 0.5, 1.0, 1.0).unwrap();
    /// assert_eq!(color.hue, 0.5);
    /// ```
    pub fn from_degrees(
        hue_degrees: f64,
        saturation: f64,
        value: f64,
        alpha: f64,
    ) -> Result<Self, StyleError> {
        Self::new(hue_degrees / 360.0, saturation, value, alpha)
    }

    /// Creates an HSV color without range checks, for compile-time constants.
    pub const fn new_unchecked(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }

    /// Returns the hue in degrees.
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }

    /// Converts to RGB using the six-sector hexcone model.
    pub fn to_linear_rgba(&self) -> LinearRgba {
        let h = self.hue * 6.0;
        let c = self.value * self.saturation;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = self.value - c;

        let (r, g, b) = match h as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        LinearRgba::new_unchecked(r + m, g + m, b + m, self.alpha)
    }
}

/// A red/green/blue color with opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl LinearRgba {
    /// Creates an RGB color, rejecting channels outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self, StyleError> {
        Ok(Self {
            r: check_channel("r", r)?,
            g: check_channel("g", g)?,
            b: check_channel("b", b)?,
            a: check_channel("a", a)?,
        })
    }

    /// Creates an RGB color from 8-bit channels and an opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Result<Self, StyleError> {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            a,
        )
    }

    /// Creates an RGB color without range checks, for compile-time constants.
    pub const fn new_unchecked(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
    pub fn lerp(&self, other: &LinearRgba, t: f64) -> LinearRgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        LinearRgba::new_unchecked(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

/// A color in any of the supported color models.
///
/// Serializes untagged, so a gray color is written as `{gray, alpha}`, an
/// HSV color as `{hue, saturation, value, alpha}` and an RGB color as
/// `{r, g, b, a}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Gray(GrayAlpha),
    Hsv(Hsva),
    Rgb(LinearRgba),
}

impl ColorValue {
    /// Returns every channel with its name, in declaration order.
    pub fn channels(&self) -> Vec<(&'static str, f64)> {
        match self {
            ColorValue::Gray(c) => vec![("gray", c.gray), ("alpha", c.alpha)],
            ColorValue::Hsv(c) => vec![
                ("hue", c.hue),
                ("saturation", c.saturation),
                ("value", c.value),
                ("alpha", c.alpha),
            ],
            ColorValue::Rgb(c) => vec![("r", c.r), ("g", c.g), ("b", c.b), ("a", c.a)],
        }
    }

    /// Checks that every channel lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), StyleError> {
        for (channel, value) in self.channels() {
            check_channel(channel, value)?;
        }
        Ok(())
    }

    /// Returns the opacity channel.
    pub fn alpha(&self) -> f64 {
        match self {
            ColorValue::Gray(c) => c.alpha,
            ColorValue::Hsv(c) => c.alpha,
            ColorValue::Rgb(c) => c.a,
        }
    }

    /// Converts to RGB. Gray levels map to equal red, green and blue.
    pub fn to_linear_rgba(&self) -> LinearRgba {
        match self {
            ColorValue::Gray(c) => LinearRgba::new_unchecked(c.gray, c.gray, c.gray, c.alpha),
            ColorValue::Hsv(c) => c.to_linear_rgba(),
            ColorValue::Rgb(c) => *c,
        }
    }

    /// Rounds to 8-bit RGBA channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let rgba = self.to_linear_rgba();
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(rgba.r),
            quantize(rgba.g),
            quantize(rgba.b),
            quantize(rgba.a),
        ]
    }

    /// Nearest ANSI 256-color palette entry, ignoring opacity.
    pub fn to_console_color(&self) -> console::Color {
        let [r, g, b, _] = self.to_rgba8();
        console::Color::Color256(rgb_to_ansi256((r, g, b)))
    }
}

impl From<GrayAlpha> for ColorValue {
    fn from(color: GrayAlpha) -> Self {
        ColorValue::Gray(color)
    }
}

impl From<Hsva> for ColorValue {
    fn from(color: Hsva) -> Self {
        ColorValue::Hsv(color)
    }
}

impl From<LinearRgba> for ColorValue {
    fn from(color: LinearRgba) -> Self {
        ColorValue::Rgb(color)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Gray(c) => write!(f, "gray({}, {})", c.gray, c.alpha),
            ColorValue::Hsv(c) => write!(
                f,
                "hsv({:.1}°, {}, {}, {})",
                c.hue_degrees(),
                c.saturation,
                c.value,
                c.alpha
            ),
            ColorValue::Rgb(c) => write!(f, "rgb({:.4}, {:.4}, {:.4}, {})", c.r, c.g, c.b, c.a),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Equal channels use the 24-step gray ramp, everything else the 6x6x6 cube.
///
/// # Example
///
/// ```rust
/// use inspector_style::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
