//! Built-in inspector styles.

use once_cell::sync::Lazy;

use crate::color::{ColorValue, GrayAlpha, Hsva, LinearRgba};
use crate::style::{GradientSpec, Offset, ShadowSpec, StyleError, StyleKey, StyleValue};

use super::{StyleTokenTable, StyleTokenTableBuilder};

const fn gray(gray: f64, alpha: f64) -> ColorValue {
    ColorValue::Gray(GrayAlpha::new_unchecked(gray, alpha))
}

const fn hsv(hue: f64, saturation: f64, value: f64, alpha: f64) -> ColorValue {
    ColorValue::Hsv(Hsva::new_unchecked(hue, saturation, value, alpha))
}

const fn rgb(r: f64, g: f64, b: f64, a: f64) -> ColorValue {
    ColorValue::Rgb(LinearRgba::new_unchecked(r, g, b, a))
}

// Inspector well
const WELL_BORDER_GRADIENT_START: ColorValue = gray(0.31, 1.0);
const WELL_BORDER_GRADIENT_END: ColorValue = gray(0.48, 1.0);
const WELL_INNER_SHADOW_COLOR: ColorValue = gray(0.0, 0.4);
const WELL_INNER_SHADOW_BLUR: f64 = 3.0;
const WELL_INNER_SHADOW_OFFSET: Offset = Offset::new(0.0, 1.0);
const WELL_OUTER_SHADOW_COLOR: ColorValue = gray(1.0, 0.5);
const WELL_CORNER_RADIUS: f64 = 4.0;

// Inspector text well
const TEXT_WELL_NORMAL_TOP: ColorValue = hsv(213.0 / 360.0, 0.10, 1.00, 1.0);
const TEXT_WELL_NORMAL_BOTTOM: ColorValue = hsv(210.0 / 360.0, 0.02, 1.00, 1.0);
const TEXT_WELL_HIGHLIGHTED_TOP: ColorValue = hsv(213.0 / 360.0, 0.08, 0.58, 1.0);
const TEXT_WELL_HIGHLIGHTED_BOTTOM: ColorValue = hsv(210.0 / 360.0, 0.05, 0.63, 1.0);
const TEXT_WELL_TEXT: ColorValue = hsv(213.0 / 360.0, 0.50, 0.40, 1.0);
const TEXT_WELL_HIGHLIGHTED_TEXT: ColorValue = hsv(213.0 / 360.0, 0.50, 0.30, 1.0);

// Inspector background
const BACKGROUND_TOP: ColorValue = rgb(228.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0, 1.0);
const BACKGROUND_BOTTOM: ColorValue = rgb(197.0 / 255.0, 200.0 / 255.0, 207.0 / 255.0, 1.0);

/// Builds the built-in table.
pub(crate) static BUILTIN: Lazy<StyleTokenTable> = Lazy::new(|| {
    builtin_builder()
        .and_then(StyleTokenTableBuilder::build)
        .unwrap_or_else(|err| panic!("built-in style table is invalid: {}", err))
});

fn builtin_builder() -> Result<StyleTokenTableBuilder, StyleError> {
    use StyleKey::*;

    let mut b = StyleTokenTableBuilder::new();

    b.define(InspectorWellBorderGradientStartGrayAlpha, WELL_BORDER_GRADIENT_START)?
        .define(InspectorWellBorderGradientEndGrayAlpha, WELL_BORDER_GRADIENT_END)?
        .define(InspectorWellInnerShadowGrayAlpha, WELL_INNER_SHADOW_COLOR)?
        .define(
            InspectorWellInnerShadowBlur,
            StyleValue::Dimension(WELL_INNER_SHADOW_BLUR),
        )?
        .define(InspectorWellInnerShadowOffset, WELL_INNER_SHADOW_OFFSET)?
        .define(InspectorWellOuterShadowGrayAlpha, WELL_OUTER_SHADOW_COLOR)?
        .define(
            InspectorWellCornerRadius,
            StyleValue::Dimension(WELL_CORNER_RADIUS),
        )?
        .define(
            InspectorWellBorderGradient,
            GradientSpec::new(WELL_BORDER_GRADIENT_START, WELL_BORDER_GRADIENT_END),
        )?
        .define(
            InspectorWellInnerShadow,
            ShadowSpec::new(
                WELL_INNER_SHADOW_COLOR,
                WELL_INNER_SHADOW_BLUR,
                WELL_INNER_SHADOW_OFFSET,
            ),
        )?;

    b.define(InspectorTextWellNormalGradientTopColor, TEXT_WELL_NORMAL_TOP)?
        .define(InspectorTextWellNormalGradientBottomColor, TEXT_WELL_NORMAL_BOTTOM)?
        .define(InspectorTextWellHighlightedGradientTopColor, TEXT_WELL_HIGHLIGHTED_TOP)?
        .define(
            InspectorTextWellHighlightedGradientBottomColor,
            TEXT_WELL_HIGHLIGHTED_BOTTOM,
        )?
        .define(
            InspectorTextWellNormalGradient,
            GradientSpec::new(TEXT_WELL_NORMAL_TOP, TEXT_WELL_NORMAL_BOTTOM),
        )?
        .define(
            InspectorTextWellHighlightedGradient,
            GradientSpec::new(TEXT_WELL_HIGHLIGHTED_TOP, TEXT_WELL_HIGHLIGHTED_BOTTOM),
        )?
        .define(InspectorTextWellTextColor, TEXT_WELL_TEXT)?
        .define(InspectorTextWellHighlightedTextColor, TEXT_WELL_HIGHLIGHTED_TEXT)?;

    b.define(InspectorBackgroundTopColor, BACKGROUND_TOP)?
        .define(InspectorBackgroundBottomColor, BACKGROUND_BOTTOM)?
        .define(
            InspectorBackgroundGradient,
            GradientSpec::new(BACKGROUND_TOP, BACKGROUND_BOTTOM),
        )?;

    b.define(InspectorOptionWheelEdgeGradientGray, StyleValue::Level(0.53))?
        .define(InspectorOptionWheelMiddleGradientGray, StyleValue::Level(1.0))?
        .define(InspectorOptionWheelGradientPower, StyleValue::Scalar(2.5))?;

    b.define(LightContentOnDarkBackgroundShadowGrayAlpha, gray(0.0, 0.5))?
        .define(DarkContentOnLightBackgroundShadowGrayAlpha, gray(1.0, 0.5))?;

    b.define(InspectorLabelTextColor, hsv(212.0 / 360.0, 0.5, 0.35, 1.0))?;

    b.define(
        BarButtonItemDisabledTextGrayForColoredButtons,
        StyleValue::Level(0.9),
    )?;

    Ok(b)
}
