//! YAML stylesheets.
//!
//! A stylesheet is a mapping of section names to `{key: value}` mappings.
//! Section names group keys for the reader; any name is accepted, and a key
//! may be defined in at most one section.
//!
//! ```yaml
//! extends: default
//!
//! InspectorWell:
//!   InspectorWellCornerRadius: 6
//!   InspectorWellInnerShadowOffset: { dx: 0, dy: 2 }
//!   InspectorWellBorderGradientStartGrayAlpha: { gray: 0.25, alpha: 1.0 }
//!
//! InspectorTextWell:
//!   InspectorTextWellTextColor: { hue_degrees: 213, saturation: 0.5, value: 0.4, alpha: 1 }
//! ```
//!
//! # Value forms
//!
//! | Form | Kind |
//! |------|------|
//! | `4`, `0.53` | scalar, level or dimension, following the key |
//! | `{gray, alpha}` | gray color |
//! | `{hue, saturation, value, alpha}` | HSV color, `hue` as a fraction of a turn |
//! | `{hue_degrees, saturation, value, alpha}` | HSV color, hue in degrees |
//! | `{r, g, b, a}` | RGB color |
//! | `{dx, dy}` | offset |
//! | `{top, bottom}` | gradient of two colors |
//! | `{color, blur, offset}` | shadow |
//!
//! A key listed twice, in the same section or in different ones, is a
//! [`StyleError::DuplicateKey`].
//!
//! `extends: default` fills every key the stylesheet leaves out from the
//! built-in table. Gradients and shadows may be omitted in any case; they
//! are derived from their component keys when the table is built.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use log::{debug, trace, warn};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_yaml::Value;

use crate::color::{ColorValue, GrayAlpha, Hsva, LinearRgba};
use crate::style::{
    GradientSpec, Offset, Section, ShadowSpec, StyleError, StyleKey, StyleValue, ValueKind,
};
use crate::table::{StyleTokenTable, StyleTokenTableBuilder};

/// Top-level key that makes a stylesheet inherit from another table.
pub const EXTENDS_KEY: &str = "extends";

/// The only table a stylesheet can inherit from.
pub const DEFAULT_BASE: &str = "default";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Gray {
        gray: f64,
        alpha: f64,
    },
    Hsv {
        hue: Option<f64>,
        hue_degrees: Option<f64>,
        saturation: f64,
        value: f64,
        alpha: f64,
    },
    Rgb {
        r: f64,
        g: f64,
        b: f64,
        a: f64,
    },
    Offset {
        dx: f64,
        dy: f64,
    },
    Gradient {
        top: Box<RawValue>,
        bottom: Box<RawValue>,
    },
    Shadow {
        color: Box<RawValue>,
        blur: f64,
        offset: Box<RawValue>,
    },
}

impl RawValue {
    fn kind(&self) -> ValueKind {
        match self {
            RawValue::Number(_) => ValueKind::Scalar,
            RawValue::Gray { .. } | RawValue::Hsv { .. } | RawValue::Rgb { .. } => ValueKind::Color,
            RawValue::Offset { .. } => ValueKind::Offset,
            RawValue::Gradient { .. } => ValueKind::Gradient,
            RawValue::Shadow { .. } => ValueKind::Shadow,
        }
    }

    fn into_value(self, key: StyleKey) -> Result<StyleValue, StyleError> {
        let mismatch = |found: ValueKind| StyleError::TypeMismatch {
            key,
            expected: key.kind(),
            found,
        };

        match (key.kind(), self) {
            (ValueKind::Scalar, RawValue::Number(v)) => Ok(StyleValue::Scalar(v)),
            (ValueKind::Level, RawValue::Number(v)) => Ok(StyleValue::Level(v)),
            (ValueKind::Dimension, RawValue::Number(v)) => Ok(StyleValue::Dimension(v)),
            (ValueKind::Color, raw) => raw.into_color(key).map(StyleValue::Color),
            (ValueKind::Offset, raw) => raw.into_offset(key).map(StyleValue::Offset),
            (ValueKind::Gradient, RawValue::Gradient { top, bottom }) => Ok(GradientSpec::new(
                (*top).into_color(key)?,
                (*bottom).into_color(key)?,
            )
            .into()),
            (
                ValueKind::Shadow,
                RawValue::Shadow {
                    color,
                    blur,
                    offset,
                },
            ) => Ok(ShadowSpec::new((*color).into_color(key)?, blur, (*offset).into_offset(key)?).into()),
            (_, raw) => Err(mismatch(raw.kind())),
        }
    }

    fn into_color(self, key: StyleKey) -> Result<ColorValue, StyleError> {
        let invalid = |err: StyleError| StyleError::InvalidValue {
            key,
            reason: err.to_string(),
        };

        match self {
            RawValue::Gray { gray, alpha } => {
                GrayAlpha::new(gray, alpha).map(ColorValue::from).map_err(invalid)
            }
            RawValue::Hsv {
                hue,
                hue_degrees,
                saturation,
                value,
                alpha,
            } => {
                let hue = match (hue, hue_degrees) {
                    (Some(hue), None) => hue,
                    (None, Some(degrees)) => degrees / 360.0,
                    _ => {
                        return Err(StyleError::InvalidValue {
                            key,
                            reason: "an HSV color needs exactly one of 'hue' and 'hue_degrees'"
                                .to_string(),
                        })
                    }
                };
                Hsva::new(hue, saturation, value, alpha)
                    .map(ColorValue::from)
                    .map_err(invalid)
            }
            RawValue::Rgb { r, g, b, a } => LinearRgba::new(r, g, b, a)
                .map(ColorValue::from)
                .map_err(invalid),
            other => Err(StyleError::TypeMismatch {
                key,
                expected: ValueKind::Color,
                found: other.kind(),
            }),
        }
    }

    fn into_offset(self, key: StyleKey) -> Result<Offset, StyleError> {
        match self {
            RawValue::Offset { dx, dy } => Ok(Offset::new(dx, dy)),
            other => Err(StyleError::TypeMismatch {
                key,
                expected: ValueKind::Offset,
                found: other.kind(),
            }),
        }
    }
}

/// Mapping entries in document order.
///
/// Unlike `serde_yaml::Mapping`, repeated keys are kept, so a key listed
/// twice in one section reaches the builder and fails as a duplicate.
struct Entries<V>(Vec<(Value, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Entries(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}

/// The value under a top-level name: either the `extends` base or a section.
enum SectionBody {
    Base(String),
    Keys(Vec<(Value, Value)>),
}

impl<'de> Deserialize<'de> for SectionBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionBodyVisitor;

        impl<'de> Visitor<'de> for SectionBodyVisitor {
            type Value = SectionBody;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of style keys or a base table name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(SectionBody::Base(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(SectionBody::Keys(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let Entries(entries) =
                    Entries::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(SectionBody::Keys(entries))
            }
        }

        deserializer.deserialize_any(SectionBodyVisitor)
    }
}

fn parse_error(message: impl std::fmt::Display) -> StyleError {
    StyleError::Parse {
        message: message.to_string(),
    }
}

/// Parses a stylesheet into a builder, without building it.
///
/// Use this to add definitions in code before calling
/// [`StyleTokenTableBuilder::build`]; otherwise
/// [`StyleTokenTable::from_yaml_str`] parses and builds in one step.
pub fn parse_stylesheet(source: &str) -> Result<StyleTokenTableBuilder, StyleError> {
    let Entries(sections): Entries<SectionBody> =
        serde_yaml::from_str(source).map_err(parse_error)?;

    let mut builder = StyleTokenTableBuilder::new();
    let mut extends_default = false;

    for (name, body) in sections {
        let name = name
            .as_str()
            .ok_or_else(|| parse_error("section names must be strings"))?;

        if name == EXTENDS_KEY {
            match body {
                SectionBody::Base(base) if base == DEFAULT_BASE => extends_default = true,
                _ => {
                    return Err(parse_error(format!(
                        "'{}' only accepts '{}'",
                        EXTENDS_KEY, DEFAULT_BASE
                    )))
                }
            }
            continue;
        }

        let entries = match body {
            SectionBody::Keys(entries) => entries,
            SectionBody::Base(_) => {
                return Err(parse_error(format!(
                    "section '{}' must be a mapping of style keys",
                    name
                )))
            }
        };
        let declared_section = name.parse::<Section>().ok();

        for (key_name, raw) in entries {
            let key_name = key_name
                .as_str()
                .ok_or_else(|| parse_error(format!("keys in section '{}' must be strings", name)))?;
            let key: StyleKey = key_name.parse()?;

            if let Some(section) = declared_section {
                if section != key.section() {
                    warn!(
                        "{} belongs to section {} but is listed under {}",
                        key,
                        key.section(),
                        section
                    );
                }
            }

            let raw: RawValue = serde_yaml::from_value(raw)
                .map_err(|err| parse_error(format!("{}: {}", key, err)))?;
            trace!("stylesheet entry {} in section {}", key, name);
            builder.define(key, raw.into_value(key)?)?;
        }
    }

    if extends_default {
        let inherited = builder.inherit(StyleTokenTable::builtin());
        debug!("stylesheet inherits {} keys from the default table", inherited);
    }

    Ok(builder)
}

impl StyleTokenTable {
    /// Parses and builds a stylesheet.
    pub fn from_yaml_str(source: &str) -> Result<StyleTokenTable, StyleError> {
        parse_stylesheet(source)?.build()
    }

    /// Reads, parses and builds a stylesheet file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<StyleTokenTable, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| StyleError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        debug!("loading stylesheet {}", path.display());
        Self::from_yaml_str(&source)
    }

    /// Encodes the table as a stylesheet that [`from_yaml_str`](Self::from_yaml_str)
    /// reads back.
    pub fn to_yaml(&self) -> Result<String, StyleError> {
        serde_yaml::to_string(self).map_err(|err| StyleError::Encode {
            message: err.to_string(),
        })
    }

    /// Encodes the table as pretty-printed JSON with the stylesheet layout.
    pub fn to_json(&self) -> Result<String, StyleError> {
        serde_json::to_string_pretty(self).map_err(|err| StyleError::Encode {
            message: err.to_string(),
        })
    }
}
