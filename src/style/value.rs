//! Typed style values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{ColorValue, LinearRgba};

use super::error::StyleError;
use super::key::StyleKey;

/// The shape of value a key holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Color,
    Gradient,
    Shadow,
    /// Unitless number such as an exponent.
    Scalar,
    /// Gray level in `[0, 1]`.
    Level,
    /// Length in points, never negative.
    Dimension,
    Offset,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Color => "color",
            ValueKind::Gradient => "gradient",
            ValueKind::Shadow => "shadow",
            ValueKind::Scalar => "scalar",
            ValueKind::Level => "level",
            ValueKind::Dimension => "dimension",
            ValueKind::Offset => "offset",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A displacement in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

/// Endpoints of a vertical linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientSpec {
    pub top: ColorValue,
    pub bottom: ColorValue,
}

impl GradientSpec {
    pub const fn new(top: ColorValue, bottom: ColorValue) -> Self {
        Self { top, bottom }
    }

    /// Color at position `t`, where `0` is the top and `1` the bottom.
    ///
    /// Interpolates in RGB; `t` is clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> LinearRgba {
        self.top
            .to_linear_rgba()
            .lerp(&self.bottom.to_linear_rgba(), t)
    }

    /// Like [`sample`](Self::sample), with the position raised to `power`
    /// first. Powers above one keep the top color longer.
    pub fn sample_powered(&self, t: f64, power: f64) -> LinearRgba {
        self.sample(t.clamp(0.0, 1.0).powf(power))
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.top, self.bottom)
    }
}

/// A drop or inner shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowSpec {
    pub color: ColorValue,
    pub blur: f64,
    pub offset: Offset,
}

impl ShadowSpec {
    pub const fn new(color: ColorValue, blur: f64, offset: Offset) -> Self {
        Self {
            color,
            blur,
            offset,
        }
    }
}

impl fmt::Display for ShadowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} blur {} offset {}",
            self.color, self.blur, self.offset
        )
    }
}

/// The value stored under a style key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Color(ColorValue),
    Gradient(GradientSpec),
    Shadow(ShadowSpec),
    Scalar(f64),
    Level(f64),
    Dimension(f64),
    Offset(Offset),
}

impl StyleValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            StyleValue::Color(_) => ValueKind::Color,
            StyleValue::Gradient(_) => ValueKind::Gradient,
            StyleValue::Shadow(_) => ValueKind::Shadow,
            StyleValue::Scalar(_) => ValueKind::Scalar,
            StyleValue::Level(_) => ValueKind::Level,
            StyleValue::Dimension(_) => ValueKind::Dimension,
            StyleValue::Offset(_) => ValueKind::Offset,
        }
    }

    /// Every color carried by this value, including gradient stops and
    /// shadow colors.
    pub fn colors(&self) -> Vec<ColorValue> {
        match self {
            StyleValue::Color(c) => vec![*c],
            StyleValue::Gradient(g) => vec![g.top, g.bottom],
            StyleValue::Shadow(s) => vec![s.color],
            _ => Vec::new(),
        }
    }

    /// Checks channel ranges and numeric constraints.
    ///
    /// Returns a human-readable reason on failure; callers attach the key.
    pub(crate) fn check(&self) -> Result<(), String> {
        for color in self.colors() {
            color.validate().map_err(|err| err.to_string())?;
        }
        match self {
            StyleValue::Scalar(v) if !v.is_finite() => Err(format!("scalar {} is not finite", v)),
            StyleValue::Level(v) if !v.is_finite() || !(0.0..=1.0).contains(v) => {
                Err(format!("level {} is outside [0, 1]", v))
            }
            StyleValue::Dimension(v) if !v.is_finite() || *v < 0.0 => {
                Err(format!("dimension {} must be a non-negative number", v))
            }
            StyleValue::Shadow(s) if !s.blur.is_finite() || s.blur < 0.0 => {
                Err(format!("shadow blur {} must be a non-negative number", s.blur))
            }
            StyleValue::Offset(o) if !o.dx.is_finite() || !o.dy.is_finite() => {
                Err(format!("offset {} is not finite", o))
            }
            StyleValue::Shadow(s) if !s.offset.dx.is_finite() || !s.offset.dy.is_finite() => {
                Err(format!("shadow offset {} is not finite", s.offset))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn validate_for(&self, key: StyleKey) -> Result<(), StyleError> {
        self.check()
            .map_err(|reason| StyleError::InvalidValue { key, reason })
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Color(c) => write!(f, "{}", c),
            StyleValue::Gradient(g) => write!(f, "{}", g),
            StyleValue::Shadow(s) => write!(f, "{}", s),
            StyleValue::Scalar(v) | StyleValue::Level(v) => write!(f, "{}", v),
            StyleValue::Dimension(v) => write!(f, "{}pt", v),
            StyleValue::Offset(o) => write!(f, "{}", o),
        }
    }
}

impl From<ColorValue> for StyleValue {
    fn from(color: ColorValue) -> Self {
        StyleValue::Color(color)
    }
}

impl From<GradientSpec> for StyleValue {
    fn from(gradient: GradientSpec) -> Self {
        StyleValue::Gradient(gradient)
    }
}

impl From<ShadowSpec> for StyleValue {
    fn from(shadow: ShadowSpec) -> Self {
        StyleValue::Shadow(shadow)
    }
}

impl From<Offset> for StyleValue {
    fn from(offset: Offset) -> Self {
        StyleValue::Offset(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::GrayAlpha;

    fn gray(v: f64) -> ColorValue {
        GrayAlpha::new_unchecked(v, 1.0).into()
    }

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(StyleValue::Scalar(0.5).kind(), ValueKind::Scalar);
        assert_eq!(StyleValue::Dimension(4.0).kind(), ValueKind::Dimension);
        assert_eq!(
            StyleValue::from(Offset::new(0.0, 1.0)).kind(),
            ValueKind::Offset
        );
        assert_eq!(
            StyleValue::from(GradientSpec::new(gray(0.0), gray(1.0))).kind(),
            ValueKind::Gradient
        );
    }

    #[test]
    fn test_gradient_sample() {
        let gradient = GradientSpec::new(gray(0.0), gray(1.0));
        assert_eq!(gradient.sample(0.0).r, 0.0);
        assert_eq!(gradient.sample(0.5).g, 0.5);
        assert_eq!(gradient.sample(2.0).b, 1.0);
    }

    #[test]
    fn test_gradient_sample_powered() {
        let gradient = GradientSpec::new(gray(0.0), gray(1.0));
        assert!((gradient.sample_powered(0.5, 2.0).r - 0.25).abs() < 1e-12);
        assert_eq!(gradient.sample_powered(1.0, 2.5).r, 1.0);
    }

    #[test]
    fn test_check_rejects_negative_dimension() {
        assert!(StyleValue::Dimension(-1.0).check().is_err());
        assert!(StyleValue::Dimension(0.0).check().is_ok());
    }

    #[test]
    fn test_check_bounds_levels() {
        assert!(StyleValue::Level(0.0).check().is_ok());
        assert!(StyleValue::Level(1.0).check().is_ok());
        assert!(StyleValue::Level(1.01).check().is_err());
        assert!(StyleValue::Level(-0.5).check().is_err());
        assert!(StyleValue::Level(f64::NAN).check().is_err());
        // Scalars carry no range.
        assert!(StyleValue::Scalar(7.0).check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_shadow() {
        let shadow = ShadowSpec::new(gray(0.0), -3.0, Offset::new(0.0, 1.0));
        assert!(StyleValue::from(shadow).check().is_err());

        let bright = ShadowSpec::new(
            GrayAlpha::new_unchecked(1.5, 1.0).into(),
            3.0,
            Offset::new(0.0, 1.0),
        );
        let reason = StyleValue::from(bright).check().unwrap_err();
        assert!(reason.contains("gray"));
    }

    #[test]
    fn test_display() {
        assert_eq!(StyleValue::Dimension(4.0).to_string(), "4pt");
        assert_eq!(StyleValue::from(Offset::new(0.0, 1.0)).to_string(), "(0, 1)");
        assert_eq!(
            StyleValue::from(GradientSpec::new(gray(0.31), gray(0.48))).to_string(),
            "gray(0.31, 1) -> gray(0.48, 1)"
        );
    }
}
