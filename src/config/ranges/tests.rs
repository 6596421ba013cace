use super::*;

#[test]
fn test_tangut_defaults() {
    let config = RangeConfig::tangut();
    assert_eq!(config.name, "tangut");
    assert_eq!(config.display_name, "Tangut");
    assert_eq!(config.character_ranges.len(), 2);
    assert_eq!(config.component_ranges.len(), 2);
    assert!(config.is_character('\u{17000}'));
    assert!(config.is_character('\u{187FF}'));
    assert!(config.is_character('\u{18D1E}'));
    assert!(!config.is_character('\u{18D1F}'));
    assert!(config.is_component('\u{18800}'));
    assert!(config.is_component('\u{18DFF}'));
    assert!(!config.is_component('\u{17000}'));
    assert!(!config.is_component('A'));
}

#[test]
fn test_tangut_ranges_are_disjoint() {
    assert!(RangeConfig::tangut().check_disjoint().is_ok());
}

#[test]
fn test_range_display_and_chars() {
    let range = CodePointRange::new(0x18D00, 0x18D02);
    assert_eq!(range.to_string(), "18D00-18D02");
    assert_eq!(
        range.chars().collect::<Vec<_>>(),
        vec!['\u{18D00}', '\u{18D01}', '\u{18D02}']
    );
}

#[test]
fn test_range_chars_skip_surrogates() {
    let range = CodePointRange::new(0xD7FF, 0xE000);
    assert_eq!(range.chars().count(), 2);
}

#[test]
fn test_parse_toml() {
    let config = RangeConfig::parse_toml(
        r#"
# Tangut ranges
[ranges]
name = "tangut-lite"
display_name = "Tangut (lite)"
characters = ["17000-17003", "U+18D00"]
components = ["18800-188FF"]
"#,
    )
    .unwrap();
    assert_eq!(config.name, "tangut-lite");
    assert_eq!(config.display_name, "Tangut (lite)");
    assert_eq!(
        config.character_ranges,
        vec![
            CodePointRange::new(0x17000, 0x17003),
            CodePointRange::new(0x18D00, 0x18D00),
        ]
    );
    assert_eq!(config.component_ranges, vec![CodePointRange::new(0x18800, 0x188FF)]);
}

#[test]
fn test_parse_toml_defaults_names() {
    let config =
        RangeConfig::parse_toml("[ranges]\ncharacters = [\"4E00-4E0F\"]\ncomponents = [\"2E80-2E8F\"]\n")
            .unwrap();
    assert_eq!(config.name, "custom");
    assert_eq!(config.display_name, "custom");
}

#[test]
fn test_parse_toml_ignores_other_sections() {
    let config = RangeConfig::parse_toml(
        "[other]\ncharacters = [\"zz\"]\n[ranges]\ncharacters = [\"41\"]\ncomponents = [\"42\"]\n",
    )
    .unwrap();
    assert_eq!(config.character_ranges, vec![CodePointRange::new(0x41, 0x41)]);
}

#[test]
fn test_parse_toml_missing_components() {
    let err = RangeConfig::parse_toml("[ranges]\ncharacters = [\"41\"]\n").unwrap_err();
    assert_eq!(err, ConfigError::MissingKey("components"));
}

#[test]
fn test_parse_toml_bad_range() {
    let err = RangeConfig::parse_toml("[ranges]\ncharacters = [\"17000-zz\"]\ncomponents = []\n")
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::BadRange {
            line: 2,
            text: "17000-zz".to_string(),
        }
    );
}

#[test]
fn test_parse_toml_inverted_range() {
    let err = RangeConfig::parse_toml("[ranges]\ncharacters = [\"17FFF-17000\"]\ncomponents = []\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvertedRange { line: 2, .. }));
}

#[test]
fn test_parse_toml_not_an_array() {
    let err =
        RangeConfig::parse_toml("[ranges]\ncharacters = \"17000\"\ncomponents = []\n").unwrap_err();
    assert!(matches!(err, ConfigError::BadRange { line: 2, .. }));
}

#[test]
fn test_parse_toml_rejects_overlap() {
    let err = RangeConfig::parse_toml(
        "[ranges]\ncharacters = [\"17000-18900\"]\ncomponents = [\"18800-18AFF\"]\n",
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::Overlap {
            character: "17000-18900".to_string(),
            component: "18800-18AFF".to_string(),
        }
    );
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.toml");
    std::fs::write(
        &path,
        "[ranges]\nname = \"tangut\"\ncharacters = [\"17000-187FF\", \"18D00-18D1E\"]\ncomponents = [\"18800-18AFF\", \"18D80-18DFF\"]\n",
    )
    .unwrap();
    let config = RangeConfig::load(&path).unwrap();
    assert_eq!(config.character_ranges, RangeConfig::tangut().character_ranges);
    assert_eq!(config.component_ranges, RangeConfig::tangut().component_ranges);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RangeConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().starts_with("cannot read"));
}

#[test]
fn test_resolve_without_path_is_builtin() {
    assert_eq!(RangeConfig::resolve(None).unwrap(), RangeConfig::tangut());
}
