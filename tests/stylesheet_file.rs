//! Loading stylesheets from disk.

use std::fs;

use inspector_style::{tokens, StyleError, StyleKey, StyleTokenTable};
use tempfile::TempDir;

#[test]
fn test_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("compact.yaml");
    fs::write(
        &path,
        r#"
extends: default

InspectorWell:
  InspectorWellCornerRadius: 2
  InspectorWellInnerShadowBlur: 1

OptionWheel:
  InspectorOptionWheelGradientPower: 3
"#,
    )
    .unwrap();

    let table = StyleTokenTable::from_yaml_file(&path).unwrap();
    assert_eq!(table.get(tokens::INSPECTOR_WELL_CORNER_RADIUS), 2.0);
    assert_eq!(table.get(tokens::INSPECTOR_WELL_INNER_SHADOW).blur, 1.0);
    assert_eq!(table.get(tokens::INSPECTOR_OPTION_WHEEL_GRADIENT_POWER), 3.0);
}

#[test]
fn test_exported_file_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("builtin.yaml");
    fs::write(&path, StyleTokenTable::builtin().to_yaml().unwrap()).unwrap();

    let table = StyleTokenTable::from_yaml_file(&path).unwrap();
    assert_eq!(&table, StyleTokenTable::builtin());
}

#[test]
fn test_incomplete_file_lists_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.yaml");
    fs::write(&path, "InspectorWell:\n  InspectorWellCornerRadius: 4\n").unwrap();

    match StyleTokenTable::from_yaml_file(&path) {
        Err(StyleError::MissingKeys { keys }) => {
            assert!(!keys.contains(&StyleKey::InspectorWellCornerRadius));
            assert!(keys.contains(&StyleKey::BarButtonItemDisabledTextGrayForColoredButtons));
        }
        other => panic!("expected MissingKeys, got {:?}", other),
    }
}
