//! Integration tests for export consistency and re-import.

use proptest::prelude::*;
use wex_theme::{
    export_component_delta, export_css_sheet, export_json_tree, flatten_json_tree, json_tree,
    parse_css_tokens, parse_json_tree, ColorMode, Overrides, ThemeEditor, TokenRegistry,
};

// ============================================================================
// Fixtures
// ============================================================================

fn overrides(pairs: &[(&str, &str, ColorMode)]) -> Overrides {
    let mut overrides = Overrides::new();
    for (name, value, mode) in pairs {
        let map = match mode {
            ColorMode::Light => &mut overrides.light,
            ColorMode::Dark => &mut overrides.dark,
        };
        map.insert(name.to_string(), value.to_string());
    }
    overrides
}

fn rebranded() -> Overrides {
    overrides(&[
        ("--wex-palette-blue-500", "210 80% 60%", ColorMode::Light),
        ("--wex-palette-purple-500", "280 60% 55%", ColorMode::Dark),
        ("--wex-primary", "var(--wex-palette-purple-700)", ColorMode::Light),
        ("--wex-primary", "purple-300", ColorMode::Dark),
        ("--wex-radius", "var(--wex-radius-lg)", ColorMode::Light),
        ("--wex-brand-red", "350 80% 45%", ColorMode::Light),
        ("--wex-component-button-radius", "var(--wex-radius-full)", ColorMode::Light),
        ("--wex-component-card-default-bg", "var(--wex-muted)", ColorMode::Dark),
    ])
}

// ============================================================================
// Consistency between artifacts
// ============================================================================

#[test]
fn css_sheet_and_json_tree_agree() {
    let registry = TokenRegistry::builtin();
    for state in [Overrides::new(), rebranded()] {
        let from_css = parse_css_tokens(&export_css_sheet(registry, &state)).unwrap();
        let from_json = flatten_json_tree(&json_tree(registry, &state));
        assert_eq!(from_css, from_json);
    }
}

#[test]
fn component_delta_agrees_with_sheet() {
    let registry = TokenRegistry::builtin();
    let state = rebranded();
    let sheet = parse_css_tokens(&export_css_sheet(registry, &state)).unwrap();
    let delta = parse_css_tokens(&export_component_delta(registry, &state)).unwrap();

    assert_eq!(delta.light.len(), 1);
    for (name, value) in &delta.light {
        assert_eq!(sheet.value(name, ColorMode::Light), Some(value.as_str()), "{}", name);
    }
    for (name, value) in &delta.dark {
        assert_eq!(sheet.value(name, ColorMode::Dark), Some(value.as_str()), "{}", name);
    }
    assert_eq!(
        delta.value("--wex-component-card-default-bg", ColorMode::Dark),
        Some("var(--wex-muted)")
    );
}

#[test]
fn empty_state_has_no_component_changes() {
    let delta = export_component_delta(TokenRegistry::builtin(), &Overrides::new());
    assert!(delta.contains("NO CHANGES"));
    assert!(!delta.contains(":root"));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn rebrand_primary_to_purple() {
    let mut editor = ThemeEditor::new(TokenRegistry::builtin());
    editor.set_token("--wex-primary", "var(--wex-palette-purple-700)");

    let css = editor.export_css_sheet();
    assert!(css.contains("  --wex-primary: var(--wex-palette-purple-700);\n"));

    let tree: serde_json::Value = serde_json::from_str(&editor.export_json_tree()).unwrap();
    assert_eq!(tree["primary"]["DEFAULT"]["value"], "var(--wex-palette-purple-700)");
}

#[test]
fn card_radius_override() {
    let mut editor = ThemeEditor::new(TokenRegistry::builtin());
    editor.set_token("--wex-component-card-radius", "var(--wex-radius-xl)");

    assert_eq!(
        editor.resolve("--wex-component-card-radius").as_deref(),
        Some("--wex-radius-xl")
    );
    let delta = editor.export_component_delta();
    assert!(delta.contains(":root {\n  /* card */\n  --wex-component-card-radius: var(--wex-radius-xl);\n}"));
    assert!(delta.contains("No dark-mode component overrides"));
}

#[test]
fn reset_returns_to_defaults() {
    let registry = TokenRegistry::builtin();
    let mut editor = ThemeEditor::new(registry);
    for (name, value, mode) in [
        ("--wex-primary", "red-700", ColorMode::Light),
        ("--wex-palette-slate-500", "0 0% 50%", ColorMode::Dark),
    ] {
        editor.set_token_for(name, value, mode);
    }
    editor.reset_all();

    assert!(!editor.has_overrides());
    assert_eq!(editor.export_css_sheet(), export_css_sheet(registry, &Overrides::new()));
}

// ============================================================================
// Re-import
// ============================================================================

fn assert_reimport_reproduces(state: Overrides) -> Result<(), TestCaseError> {
    let registry = TokenRegistry::builtin();
    let css = export_css_sheet(registry, &state);
    let json = export_json_tree(registry, &state);

    let mut from_css = ThemeEditor::new(registry);
    from_css.import_css(&css).unwrap();
    prop_assert_eq!(from_css.export_css_sheet(), css.clone());
    prop_assert_eq!(from_css.export_json_tree(), json.clone());

    let mut from_json = ThemeEditor::new(registry);
    from_json.import_json(&json).unwrap();
    prop_assert_eq!(from_json.export_css_sheet(), css);
    prop_assert_eq!(from_json.export_json_tree(), json);
    Ok(())
}

#[test]
fn reimport_rebranded_theme() {
    assert_reimport_reproduces(rebranded()).unwrap();
}

#[test]
fn reimport_padded_and_kind_sensitive_values() {
    assert_reimport_reproduces(overrides(&[
        ("--wex-font-size-base", " 14px", ColorMode::Light),
        ("--wex-palette-green-500", " 160 50% 45% ", ColorMode::Dark),
        ("--wex-component-card-radius", "blue-700", ColorMode::Light),
        ("--wex-font-sans", "black", ColorMode::Dark),
        ("--wex-card", "var(--wex-primary) var(--wex-palette-red-500)", ColorMode::Light),
    ]))
    .unwrap();
}

#[test]
fn import_saved_json_file() {
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let mut editor = ThemeEditor::new(TokenRegistry::builtin());
    editor.set_token("--wex-link", "green-700");
    editor.write_artifacts(temp_dir.path()).unwrap();

    let json = std::fs::read_to_string(temp_dir.path().join("tokens.json")).unwrap();
    let parsed = parse_json_tree(&json).unwrap();
    assert_eq!(
        parsed.value("--wex-link", ColorMode::Light),
        Some("var(--wex-palette-green-700)")
    );
}

fn token_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--wex-primary".to_string()),
        Just("--wex-background".to_string()),
        Just("--wex-brand-navy".to_string()),
        Just("--wex-radius".to_string()),
        Just("--wex-radius-sm".to_string()),
        Just("--wex-font-sans".to_string()),
        Just("--wex-font-size-base".to_string()),
        Just("--wex-component-card-radius".to_string()),
        Just("--wex-component-button-radius".to_string()),
        Just("--wex-component-badge-success-bg".to_string()),
        Just("--wex-palette-blue-500".to_string()),
        Just("--wex-palette-green-200".to_string()),
        Just("--wex-palette-white".to_string()),
    ]
}

fn token_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("var(--wex-palette-purple-700)".to_string()),
        Just("amber-300".to_string()),
        Just("black".to_string()),
        Just("var(--wex-radius-xl)".to_string()),
        Just("var(--wex-primary)".to_string()),
        Just("14px".to_string()),
        Just(" 14px".to_string()),
        Just("pink-500".to_string()),
        Just("--wex-palette-red-900".to_string()),
        Just("var(--wex-primary) var(--wex-palette-red-500)".to_string()),
        Just("210 80% 60%".to_string()),
        Just("0 0% 100%".to_string()),
        (0u16..=360, 0u8..=100, 0u8..=100).prop_map(|(h, s, l)| format!("{} {}% {}%", h, s, l)),
    ]
}

fn state() -> impl Strategy<Value = Overrides> {
    prop::collection::vec((token_name(), token_value(), any::<bool>()), 0..8).prop_map(|edits| {
        let mut overrides = Overrides::new();
        for (name, value, dark) in edits {
            if dark {
                overrides.dark.insert(name, value);
            } else {
                overrides.light.insert(name, value);
            }
        }
        overrides
    })
}

proptest! {
    #[test]
    fn prop_reimport_reproduces_exports(state in state()) {
        assert_reimport_reproduces(state)?;
    }
}
