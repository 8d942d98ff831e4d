//! The style token table.
//!
//! A table goes through two states:
//!
//! 1. **Collecting**: a [`StyleTokenTableBuilder`] receives definitions. Each
//!    key may be defined once, with a value of the key's [`ValueKind`].
//! 2. **Ready**: [`StyleTokenTableBuilder::build`] checks that every key is
//!    defined and that gradients and shadows agree with their component keys,
//!    then returns an immutable [`StyleTokenTable`].
//!
//! There is no way back from a built table to a builder, and a built table
//! has no mutating methods. Because every key of the closed set is present,
//! [`StyleTokenTable::lookup`] cannot fail.
//!
//! # Example
//!
//! ```rust
//! use inspector_style::{StyleKey, StyleTokenTable, StyleValue, tokens};
//!
//! let table = StyleTokenTable::builtin();
//! assert_eq!(
//!     table.lookup(StyleKey::InspectorWellCornerRadius),
//!     &StyleValue::Dimension(4.0)
//! );
//!
//! let shadow = table.get(tokens::INSPECTOR_WELL_INNER_SHADOW);
//! assert_eq!(shadow.blur, 3.0);
//! ```

mod defaults;
mod global;

pub use global::{install, is_installed, style_table};

use log::{debug, trace};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::style::{
    Composite, GradientSpec, Section, ShadowSpec, StyleError, StyleKey, StyleValue, Token,
    TokenValue,
};

/// Collects definitions for a [`StyleTokenTable`].
#[derive(Debug, Clone)]
pub struct StyleTokenTableBuilder {
    values: Vec<Option<StyleValue>>,
}

impl StyleTokenTableBuilder {
    /// Creates a builder with no keys defined.
    pub fn new() -> Self {
        Self {
            values: vec![None; StyleKey::COUNT],
        }
    }

    /// Defines `key`.
    ///
    /// Fails with [`StyleError::DuplicateKey`] if `key` already has a value,
    /// with [`StyleError::TypeMismatch`] if the value has the wrong shape, and
    /// with [`StyleError::InvalidValue`] if a channel or number is out of range.
    pub fn define<V: Into<StyleValue>>(
        &mut self,
        key: StyleKey,
        value: V,
    ) -> Result<&mut Self, StyleError> {
        let value = value.into();
        if self.is_defined(key) {
            return Err(StyleError::DuplicateKey { key });
        }
        if value.kind() != key.kind() {
            return Err(StyleError::TypeMismatch {
                key,
                expected: key.kind(),
                found: value.kind(),
            });
        }
        value.validate_for(key)?;

        trace!("define {} = {}", key, value);
        self.values[key.index()] = Some(value);
        Ok(self)
    }

    pub fn is_defined(&self, key: StyleKey) -> bool {
        self.values[key.index()].is_some()
    }

    /// Copies every undefined non-composite key from `base`.
    ///
    /// Composite keys are left alone so that [`build`](Self::build) derives
    /// them from the merged components. Returns the number of keys copied.
    pub fn inherit(&mut self, base: &StyleTokenTable) -> usize {
        let mut copied = 0;
        for key in StyleKey::ALL.iter().copied() {
            if key.is_composite() || self.is_defined(key) {
                continue;
            }
            self.values[key.index()] = Some(*base.lookup(key));
            copied += 1;
        }
        debug!("inherited {} style keys", copied);
        copied
    }

    /// Finishes the table.
    ///
    /// Undefined composite keys are first derived from their components.
    /// Fails with [`StyleError::MissingKeys`] if any key is still undefined,
    /// and with [`StyleError::InconsistentComposite`] if an explicitly
    /// defined gradient or shadow disagrees with its components.
    pub fn build(mut self) -> Result<StyleTokenTable, StyleError> {
        for key in StyleKey::ALL.iter().copied() {
            if self.is_defined(key) {
                continue;
            }
            if let Some(composite) = key.composite() {
                let derived = compose(composite, |k| self.values[k.index()]);
                if derived.is_some() {
                    trace!("derived {} from its components", key);
                }
                self.values[key.index()] = derived;
            }
        }

        let missing: Vec<StyleKey> = StyleKey::ALL
            .iter()
            .copied()
            .filter(|key| !self.is_defined(*key))
            .collect();
        if !missing.is_empty() {
            return Err(StyleError::MissingKeys { keys: missing });
        }

        let values: Vec<StyleValue> = self.values.into_iter().flatten().collect();

        for key in StyleKey::ALL.iter().copied() {
            if let Some(composite) = key.composite() {
                let expected = compose(composite, |k| Some(values[k.index()]));
                if expected.as_ref() != Some(&values[key.index()]) {
                    return Err(StyleError::InconsistentComposite { key });
                }
            }
        }

        debug!("built style table with {} tokens", values.len());
        Ok(StyleTokenTable { values })
    }
}

impl Default for StyleTokenTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles a composite value, or `None` if a component is missing or of
/// the wrong shape.
fn compose(
    composite: Composite,
    value_of: impl Fn(StyleKey) -> Option<StyleValue>,
) -> Option<StyleValue> {
    match composite {
        Composite::Gradient { top, bottom } => match (value_of(top)?, value_of(bottom)?) {
            (StyleValue::Color(top), StyleValue::Color(bottom)) => {
                Some(GradientSpec::new(top, bottom).into())
            }
            _ => None,
        },
        Composite::Shadow {
            color,
            blur,
            offset,
        } => match (value_of(color)?, value_of(blur)?, value_of(offset)?) {
            (StyleValue::Color(color), StyleValue::Dimension(blur), StyleValue::Offset(offset)) => {
                Some(ShadowSpec::new(color, blur, offset).into())
            }
            _ => None,
        },
    }
}

/// An immutable table holding a value for every [`StyleKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTokenTable {
    values: Vec<StyleValue>,
}

impl StyleTokenTable {
    pub fn builder() -> StyleTokenTableBuilder {
        StyleTokenTableBuilder::new()
    }

    /// The built-in inspector styles.
    pub fn builtin() -> &'static StyleTokenTable {
        &defaults::BUILTIN
    }

    /// Returns the value stored under `key`.
    pub fn lookup(&self, key: StyleKey) -> &StyleValue {
        &self.values[key.index()]
    }

    /// Returns the value stored under the key named `name`.
    ///
    /// Fails with [`StyleError::UnknownKey`] if no key has that name.
    pub fn lookup_name(&self, name: &str) -> Result<&StyleValue, StyleError> {
        let key: StyleKey = name.parse()?;
        Ok(self.lookup(key))
    }

    /// Returns the value behind a typed token.
    pub fn get<T: TokenValue>(&self, token: Token<T>) -> T {
        let key = token.key();
        match T::from_style_value(self.lookup(key)) {
            Some(value) => value,
            // define() rejects values whose kind differs from the key's, and
            // each token's type is declared alongside that kind.
            None => unreachable!("style key {} holds a {} value", key, key.kind()),
        }
    }

    /// Every key with its value, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        StyleKey::ALL.iter().copied().zip(self.values.iter())
    }

    /// The keys of one section with their values.
    pub fn section(&self, section: Section) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.iter().filter(move |(key, _)| key.section() == section)
    }
}

/// Serializes as a map of section name to `{key: value}`.
///
/// Composite keys are omitted: a table loaded from this output derives them
/// from the components again.
impl Serialize for StyleTokenTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Section::ALL.len()))?;
        for section in Section::ALL.iter().copied() {
            map.serialize_entry(
                section.name(),
                &SectionEntries {
                    table: self,
                    section,
                },
            )?;
        }
        map.end()
    }
}

struct SectionEntries<'a> {
    table: &'a StyleTokenTable,
    section: Section,
}

impl Serialize for SectionEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.table.section(self.section) {
            if !key.is_composite() {
                map.serialize_entry(key.name(), value)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorValue, GrayAlpha};
    use crate::style::{tokens, Offset, ValueKind};

    fn gray(v: f64, a: f64) -> ColorValue {
        GrayAlpha::new_unchecked(v, a).into()
    }

    fn full_builder() -> StyleTokenTableBuilder {
        let mut builder = StyleTokenTable::builder();
        builder.inherit(StyleTokenTable::builtin());
        builder
    }

    #[test]
    fn test_define_duplicate_key() {
        let mut builder = StyleTokenTable::builder();
        builder
            .define(StyleKey::InspectorWellCornerRadius, StyleValue::Dimension(4.0))
            .unwrap();
        let err = builder
            .define(StyleKey::InspectorWellCornerRadius, StyleValue::Dimension(5.0))
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::DuplicateKey {
                key: StyleKey::InspectorWellCornerRadius
            }
        );
    }

    #[test]
    fn test_define_type_mismatch() {
        let mut builder = StyleTokenTable::builder();
        let err = builder
            .define(StyleKey::InspectorWellCornerRadius, gray(0.5, 1.0))
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::TypeMismatch {
                key: StyleKey::InspectorWellCornerRadius,
                expected: ValueKind::Dimension,
                found: ValueKind::Color,
            }
        );
        assert!(!builder.is_defined(StyleKey::InspectorWellCornerRadius));
    }

    #[test]
    fn test_define_scalar_for_dimension_is_mismatch() {
        let mut builder = StyleTokenTable::builder();
        assert!(matches!(
            builder.define(StyleKey::InspectorWellCornerRadius, StyleValue::Scalar(4.0)),
            Err(StyleError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_define_rejects_level_outside_unit_range() {
        let mut builder = StyleTokenTable::builder();
        let key = StyleKey::InspectorOptionWheelEdgeGradientGray;
        assert!(matches!(
            builder.define(key, StyleValue::Level(1.5)),
            Err(StyleError::InvalidValue { key: k, .. }) if k == key
        ));
        assert!(matches!(
            builder.define(key, StyleValue::Scalar(0.5)),
            Err(StyleError::TypeMismatch { .. })
        ));
        assert!(!builder.is_defined(key));
        builder.define(key, StyleValue::Level(0.5)).unwrap();
    }

    #[test]
    fn test_define_rejects_out_of_range_channel() {
        let mut builder = StyleTokenTable::builder();
        let err = builder
            .define(StyleKey::InspectorLabelTextColor, gray(0.5, 2.0))
            .unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidValue {
                key: StyleKey::InspectorLabelTextColor,
                ..
            }
        ));
    }

    #[test]
    fn test_build_reports_missing_keys() {
        let mut builder = StyleTokenTable::builder();
        builder
            .define(StyleKey::InspectorWellCornerRadius, StyleValue::Dimension(4.0))
            .unwrap();
        match builder.build() {
            Err(StyleError::MissingKeys { keys }) => {
                assert!(!keys.contains(&StyleKey::InspectorWellCornerRadius));
                assert!(keys.contains(&StyleKey::InspectorLabelTextColor));
                // Composites whose components are missing are reported too.
                assert!(keys.contains(&StyleKey::InspectorBackgroundGradient));
            }
            other => panic!("expected MissingKeys, got {:?}", other),
        }
    }

    #[test]
    fn test_build_derives_composites() {
        let mut builder = StyleTokenTable::builder();
        builder
            .define(StyleKey::InspectorWellInnerShadowBlur, StyleValue::Dimension(6.0))
            .unwrap();
        builder.inherit(StyleTokenTable::builtin());
        let table = builder.build().unwrap();

        let shadow = table.get(tokens::INSPECTOR_WELL_INNER_SHADOW);
        assert_eq!(shadow.blur, 6.0);
        assert_eq!(shadow.offset, Offset::new(0.0, 1.0));
        assert_eq!(shadow.color, gray(0.0, 0.4));
    }

    #[test]
    fn test_build_rejects_inconsistent_composite() {
        let mut builder = full_builder();
        builder
            .define(
                StyleKey::InspectorWellBorderGradient,
                GradientSpec::new(gray(0.0, 1.0), gray(1.0, 1.0)),
            )
            .unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            StyleError::InconsistentComposite {
                key: StyleKey::InspectorWellBorderGradient
            }
        );
    }

    #[test]
    fn test_build_accepts_consistent_composite() {
        let mut builder = full_builder();
        builder
            .define(
                StyleKey::InspectorWellBorderGradient,
                GradientSpec::new(gray(0.31, 1.0), gray(0.48, 1.0)),
            )
            .unwrap();
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_inherit_skips_defined_and_composite_keys() {
        let mut builder = StyleTokenTable::builder();
        builder
            .define(StyleKey::InspectorWellCornerRadius, StyleValue::Dimension(8.0))
            .unwrap();
        let composites = StyleKey::ALL.iter().filter(|k| k.is_composite()).count();
        let copied = builder.inherit(StyleTokenTable::builtin());
        assert_eq!(copied, StyleKey::COUNT - composites - 1);

        let table = builder.build().unwrap();
        assert_eq!(table.get(tokens::INSPECTOR_WELL_CORNER_RADIUS), 8.0);
    }

    #[test]
    fn test_lookup_name() {
        let table = StyleTokenTable::builtin();
        assert_eq!(
            table.lookup_name("InspectorWellCornerRadius"),
            Ok(&StyleValue::Dimension(4.0))
        );
        assert_eq!(
            table.lookup_name("kOUIInspectorWellCornerRadius"),
            Err(StyleError::UnknownKey {
                name: "kOUIInspectorWellCornerRadius".to_string()
            })
        );
    }

    #[test]
    fn test_every_token_reads_through_its_type() {
        let count = crate::style::read_every_token(StyleTokenTable::builtin());
        assert_eq!(count, StyleKey::COUNT);
    }

    #[test]
    fn test_section_iteration() {
        let table = StyleTokenTable::builtin();
        let keys: Vec<StyleKey> = table.section(Section::Drawing).map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                StyleKey::LightContentOnDarkBackgroundShadowGrayAlpha,
                StyleKey::DarkContentOnLightBackgroundShadowGrayAlpha,
            ]
        );
    }

    #[test]
    fn test_serialize_omits_composites() {
        let json = serde_json::to_value(StyleTokenTable::builtin()).unwrap();
        let well = &json["InspectorWell"];
        assert_eq!(well["InspectorWellCornerRadius"], serde_json::json!(4.0));
        assert_eq!(
            well["InspectorWellInnerShadowOffset"],
            serde_json::json!({"dx": 0.0, "dy": 1.0})
        );
        assert!(well.get("InspectorWellBorderGradient").is_none());
    }
}
