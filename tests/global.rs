//! Tests for the process-wide table.
//!
//! Installation is one-way for the whole process, so the lifecycle is
//! exercised in a single test.

use inspector_style::{install, is_installed, style_table, tokens, StyleError, StyleTokenTable};

#[test]
fn test_install_then_read() {
    assert!(!is_installed());

    let custom = StyleTokenTable::from_yaml_str(
        "extends: default\nInspectorWell:\n  InspectorWellCornerRadius: 10\n",
    )
    .unwrap();
    install(custom.clone()).unwrap();
    assert!(is_installed());

    assert_eq!(style_table(), &custom);
    assert_eq!(style_table().get(tokens::INSPECTOR_WELL_CORNER_RADIUS), 10.0);

    assert_eq!(
        install(StyleTokenTable::builtin().clone()),
        Err(StyleError::AlreadyInstalled)
    );
    assert_eq!(style_table().get(tokens::INSPECTOR_WELL_CORNER_RADIUS), 10.0);

    let readers: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| style_table().get(tokens::INSPECTOR_WELL_CORNER_RADIUS)))
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), 10.0);
    }
}
