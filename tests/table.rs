//! Integration tests for the built-in style table.

use inspector_style::{
    tokens, ColorValue, GrayAlpha, Hsva, LinearRgba, Offset, StyleError, StyleKey,
    StyleTokenTable, StyleValue,
};
use proptest::prelude::*;

#[test]
fn test_corner_radius() {
    let table = StyleTokenTable::builtin();
    assert_eq!(
        table.lookup(StyleKey::InspectorWellCornerRadius),
        &StyleValue::Dimension(4.0)
    );
}

#[test]
fn test_border_gradient_start() {
    let table = StyleTokenTable::builtin();
    assert_eq!(
        table.lookup(StyleKey::InspectorWellBorderGradientStartGrayAlpha),
        &StyleValue::Color(ColorValue::Gray(GrayAlpha {
            gray: 0.31,
            alpha: 1.0
        }))
    );
}

#[test]
fn test_every_color_channel_in_unit_range() {
    for (key, value) in StyleTokenTable::builtin().iter() {
        for color in value.colors() {
            for (channel, v) in color.channels() {
                assert!(
                    (0.0..=1.0).contains(&v),
                    "{}.{} = {} is outside [0, 1]",
                    key,
                    channel,
                    v
                );
            }
        }
    }
}

#[test]
fn test_lookup_is_idempotent() {
    let table = StyleTokenTable::builtin();
    for key in StyleKey::ALL {
        assert_eq!(table.lookup(*key), table.lookup(*key));
    }
}

#[test]
fn test_lookup_returns_defined_values() {
    let mut builder = StyleTokenTable::builder();
    let mut defined = Vec::new();
    for (key, value) in StyleTokenTable::builtin().iter() {
        if key.is_composite() {
            continue;
        }
        // Shift every number slightly so the test does not just echo the defaults.
        let value = match *value {
            StyleValue::Dimension(v) => StyleValue::Dimension(v + 1.0),
            StyleValue::Scalar(v) => StyleValue::Scalar(v / 2.0),
            StyleValue::Level(v) => StyleValue::Level(v / 2.0),
            StyleValue::Offset(o) => StyleValue::Offset(Offset::new(o.dx + 1.0, o.dy)),
            other => other,
        };
        builder.define(key, value).unwrap();
        defined.push((key, value));
    }
    let table = builder.build().unwrap();

    for (key, value) in defined {
        assert_eq!(table.lookup(key), &value);
    }
}

#[test]
fn test_derived_gradient_follows_components() {
    let table = StyleTokenTable::builtin();
    let gradient = table.get(tokens::INSPECTOR_BACKGROUND_GRADIENT);
    assert_eq!(gradient.top, table.get(tokens::INSPECTOR_BACKGROUND_TOP_COLOR));
    assert_eq!(
        gradient.bottom,
        table.get(tokens::INSPECTOR_BACKGROUND_BOTTOM_COLOR)
    );
    assert_eq!(
        gradient.top,
        ColorValue::Rgb(LinearRgba::from_rgb8(228, 231, 235, 1.0).unwrap())
    );
}

#[test]
fn test_text_well_colors_convert_to_rgb() {
    let table = StyleTokenTable::builtin();
    let text = table.get(tokens::INSPECTOR_TEXT_WELL_TEXT_COLOR);
    assert_eq!(
        text,
        ColorValue::Hsv(Hsva::from_degrees(213.0, 0.5, 0.4, 1.0).unwrap())
    );
    let [r, g, b, a] = text.to_rgba8();
    assert!(b > g && g > r, "text color should be blue-ish: {:?}", (r, g, b));
    assert_eq!(a, 255);
}

#[test]
fn test_duplicate_define_fails() {
    let mut builder = StyleTokenTable::builder();
    builder
        .define(StyleKey::InspectorOptionWheelGradientPower, StyleValue::Scalar(2.5))
        .unwrap();
    assert_eq!(
        builder
            .define(StyleKey::InspectorOptionWheelGradientPower, StyleValue::Scalar(2.5))
            .unwrap_err(),
        StyleError::DuplicateKey {
            key: StyleKey::InspectorOptionWheelGradientPower
        }
    );
}

proptest! {
    #[test]
    fn prop_unknown_names_fail(name in "[A-Za-z]{1,40}") {
        let table = StyleTokenTable::builtin();
        match name.parse::<StyleKey>() {
            Ok(key) => prop_assert_eq!(table.lookup_name(&name), Ok(table.lookup(key))),
            Err(_) => prop_assert_eq!(
                table.lookup_name(&name),
                Err(StyleError::UnknownKey { name: name.clone() })
            ),
        }
    }

    #[test]
    fn prop_gray_definitions_roundtrip(gray in 0.0f64..=1.0, alpha in 0.0f64..=1.0) {
        let color = ColorValue::from(GrayAlpha::new(gray, alpha).unwrap());
        let mut builder = StyleTokenTable::builder();
        builder.define(StyleKey::InspectorWellOuterShadowGrayAlpha, color).unwrap();
        builder.inherit(StyleTokenTable::builtin());
        let table = builder.build().unwrap();
        prop_assert_eq!(table.get(tokens::INSPECTOR_WELL_OUTER_SHADOW_GRAY_ALPHA), color);
    }
}
