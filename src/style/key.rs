//! The closed set of style keys.
//!
//! Every key is declared once in the `style_keys!` invocation below, which
//! generates the [`StyleKey`] enum, its metadata (name, [`ValueKind`],
//! [`Section`]) and the typed [`tokens`] constants. Keeping all of these in
//! one declaration means a key's kind and its token type cannot drift apart.

use std::fmt;
use std::str::FromStr;

use super::error::StyleError;
use super::value::ValueKind;

/// The widget a group of keys styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    InspectorWell,
    InspectorTextWell,
    InspectorBackground,
    OptionWheel,
    Drawing,
    Inspector,
    BarButtonItem,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::InspectorWell,
        Section::InspectorTextWell,
        Section::InspectorBackground,
        Section::OptionWheel,
        Section::Drawing,
        Section::Inspector,
        Section::BarButtonItem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::InspectorWell => "InspectorWell",
            Section::InspectorTextWell => "InspectorTextWell",
            Section::InspectorBackground => "InspectorBackground",
            Section::OptionWheel => "OptionWheel",
            Section::Drawing => "Drawing",
            Section::Inspector => "Inspector",
            Section::BarButtonItem => "BarButtonItem",
        }
    }

    /// Keys in this section, in declaration order.
    pub fn keys(self) -> impl Iterator<Item = StyleKey> {
        StyleKey::ALL
            .iter()
            .copied()
            .filter(move |key| key.section() == self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown section '{}'", s))
    }
}

macro_rules! style_keys {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $token:ident: $section:ident, $kind:ident, $ty:ty;
    )*) => {
        /// Symbolic name of a style token.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleKey {
            $( $(#[$meta])* $variant, )*
        }

        impl StyleKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [StyleKey] = &[ $( StyleKey::$variant, )* ];

            pub const COUNT: usize = Self::ALL.len();

            /// Stable string name, as used in stylesheets.
            pub fn name(self) -> &'static str {
                match self {
                    $( StyleKey::$variant => stringify!($variant), )*
                }
            }

            /// The shape of value this key holds.
            pub fn kind(self) -> ValueKind {
                match self {
                    $( StyleKey::$variant => ValueKind::$kind, )*
                }
            }

            pub fn section(self) -> Section {
                match self {
                    $( StyleKey::$variant => Section::$section, )*
                }
            }

            /// Position in [`StyleKey::ALL`].
            pub fn index(self) -> usize {
                self as usize
            }
        }

        /// Typed accessors, one per [`StyleKey`].
        ///
        /// ```rust
        /// use inspector_style::{style_table, tokens};
        ///
        /// let radius: f64 = style_table().get(tokens::INSPECTOR_WELL_CORNER_RADIUS);
        /// assert_eq!(radius, 4.0);
        /// ```
        pub mod tokens {
            #![allow(unused_imports)]
            use super::StyleKey;
            use crate::color::ColorValue;
            use crate::style::token::Token;
            use crate::style::value::{GradientSpec, Offset, ShadowSpec};

            $( pub const $token: Token<$ty> = Token::new(StyleKey::$variant); )*
        }

        /// Reads every token through its typed accessor.
        #[cfg(test)]
        pub(crate) fn read_every_token(table: &crate::table::StyleTokenTable) -> usize {
            let mut count = 0;
            $(
                let _ = table.get(tokens::$token);
                count += 1;
            )*
            count
        }
    };
}

style_keys! {
    InspectorWellBorderGradientStartGrayAlpha => INSPECTOR_WELL_BORDER_GRADIENT_START_GRAY_ALPHA:
        InspectorWell, Color, ColorValue;
    InspectorWellBorderGradientEndGrayAlpha => INSPECTOR_WELL_BORDER_GRADIENT_END_GRAY_ALPHA:
        InspectorWell, Color, ColorValue;
    InspectorWellInnerShadowGrayAlpha => INSPECTOR_WELL_INNER_SHADOW_GRAY_ALPHA:
        InspectorWell, Color, ColorValue;
    InspectorWellInnerShadowBlur => INSPECTOR_WELL_INNER_SHADOW_BLUR:
        InspectorWell, Dimension, f64;
    InspectorWellInnerShadowOffset => INSPECTOR_WELL_INNER_SHADOW_OFFSET:
        InspectorWell, Offset, Offset;
    InspectorWellOuterShadowGrayAlpha => INSPECTOR_WELL_OUTER_SHADOW_GRAY_ALPHA:
        InspectorWell, Color, ColorValue;
    InspectorWellCornerRadius => INSPECTOR_WELL_CORNER_RADIUS:
        InspectorWell, Dimension, f64;
    /// Border gradient built from the start and end gray levels.
    InspectorWellBorderGradient => INSPECTOR_WELL_BORDER_GRADIENT:
        InspectorWell, Gradient, GradientSpec;
    /// Inner shadow built from its color, blur and offset keys.
    InspectorWellInnerShadow => INSPECTOR_WELL_INNER_SHADOW:
        InspectorWell, Shadow, ShadowSpec;

    InspectorTextWellNormalGradientTopColor => INSPECTOR_TEXT_WELL_NORMAL_GRADIENT_TOP_COLOR:
        InspectorTextWell, Color, ColorValue;
    InspectorTextWellNormalGradientBottomColor => INSPECTOR_TEXT_WELL_NORMAL_GRADIENT_BOTTOM_COLOR:
        InspectorTextWell, Color, ColorValue;
    InspectorTextWellHighlightedGradientTopColor => INSPECTOR_TEXT_WELL_HIGHLIGHTED_GRADIENT_TOP_COLOR:
        InspectorTextWell, Color, ColorValue;
    InspectorTextWellHighlightedGradientBottomColor => INSPECTOR_TEXT_WELL_HIGHLIGHTED_GRADIENT_BOTTOM_COLOR:
        InspectorTextWell, Color, ColorValue;
    InspectorTextWellNormalGradient => INSPECTOR_TEXT_WELL_NORMAL_GRADIENT:
        InspectorTextWell, Gradient, GradientSpec;
    InspectorTextWellHighlightedGradient => INSPECTOR_TEXT_WELL_HIGHLIGHTED_GRADIENT:
        InspectorTextWell, Gradient, GradientSpec;
    InspectorTextWellTextColor => INSPECTOR_TEXT_WELL_TEXT_COLOR:
        InspectorTextWell, Color, ColorValue;
    InspectorTextWellHighlightedTextColor => INSPECTOR_TEXT_WELL_HIGHLIGHTED_TEXT_COLOR:
        InspectorTextWell, Color, ColorValue;

    InspectorBackgroundTopColor => INSPECTOR_BACKGROUND_TOP_COLOR:
        InspectorBackground, Color, ColorValue;
    InspectorBackgroundBottomColor => INSPECTOR_BACKGROUND_BOTTOM_COLOR:
        InspectorBackground, Color, ColorValue;
    InspectorBackgroundGradient => INSPECTOR_BACKGROUND_GRADIENT:
        InspectorBackground, Gradient, GradientSpec;

    InspectorOptionWheelEdgeGradientGray => INSPECTOR_OPTION_WHEEL_EDGE_GRADIENT_GRAY:
        OptionWheel, Level, f64;
    InspectorOptionWheelMiddleGradientGray => INSPECTOR_OPTION_WHEEL_MIDDLE_GRADIENT_GRAY:
        OptionWheel, Level, f64;
    /// Exponent applied to the wheel's edge-to-middle gradient position.
    InspectorOptionWheelGradientPower => INSPECTOR_OPTION_WHEEL_GRADIENT_POWER:
        OptionWheel, Scalar, f64;

    LightContentOnDarkBackgroundShadowGrayAlpha => LIGHT_CONTENT_ON_DARK_BACKGROUND_SHADOW_GRAY_ALPHA:
        Drawing, Color, ColorValue;
    DarkContentOnLightBackgroundShadowGrayAlpha => DARK_CONTENT_ON_LIGHT_BACKGROUND_SHADOW_GRAY_ALPHA:
        Drawing, Color, ColorValue;

    /// Also used by toggle and segmented-control buttons that show labels.
    InspectorLabelTextColor => INSPECTOR_LABEL_TEXT_COLOR:
        Inspector, Color, ColorValue;

    /// Lighter than the default disabled gray, for colored buttons.
    BarButtonItemDisabledTextGrayForColoredButtons => BAR_BUTTON_ITEM_DISABLED_TEXT_GRAY_FOR_COLORED_BUTTONS:
        BarButtonItem, Level, f64;
}

/// How a composite key is assembled from other keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    Gradient {
        top: StyleKey,
        bottom: StyleKey,
    },
    Shadow {
        color: StyleKey,
        blur: StyleKey,
        offset: StyleKey,
    },
}

impl Composite {
    /// The component keys, in field order.
    pub fn components(&self) -> Vec<StyleKey> {
        match *self {
            Composite::Gradient { top, bottom } => vec![top, bottom],
            Composite::Shadow {
                color,
                blur,
                offset,
            } => vec![color, blur, offset],
        }
    }
}

impl StyleKey {
    /// For gradient and shadow keys, the keys they are made of.
    pub fn composite(self) -> Option<Composite> {
        use StyleKey::*;

        match self {
            InspectorWellBorderGradient => Some(Composite::Gradient {
                top: InspectorWellBorderGradientStartGrayAlpha,
                bottom: InspectorWellBorderGradientEndGrayAlpha,
            }),
            InspectorWellInnerShadow => Some(Composite::Shadow {
                color: InspectorWellInnerShadowGrayAlpha,
                blur: InspectorWellInnerShadowBlur,
                offset: InspectorWellInnerShadowOffset,
            }),
            InspectorTextWellNormalGradient => Some(Composite::Gradient {
                top: InspectorTextWellNormalGradientTopColor,
                bottom: InspectorTextWellNormalGradientBottomColor,
            }),
            InspectorTextWellHighlightedGradient => Some(Composite::Gradient {
                top: InspectorTextWellHighlightedGradientTopColor,
                bottom: InspectorTextWellHighlightedGradientBottomColor,
            }),
            InspectorBackgroundGradient => Some(Composite::Gradient {
                top: InspectorBackgroundTopColor,
                bottom: InspectorBackgroundBottomColor,
            }),
            _ => None,
        }
    }

    pub fn is_composite(self) -> bool {
        self.composite().is_some()
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKey {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKey::ALL
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| StyleError::UnknownKey {
                name: s.to_string(),
            })
    }
}
