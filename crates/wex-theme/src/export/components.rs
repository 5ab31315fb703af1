//! The component override layer (`components-bridge.css`).
//!
//! Only component slots the user actually changed are listed, grouped by
//! component. Dark-mode entries go in a `prefers-color-scheme: dark` media
//! block, and only when they differ from the light value.

use std::collections::{BTreeMap, HashMap};

use wex_tokens::{css_value, ColorMode, ComponentSlot, Overrides, TokenRegistry, COMPONENT_PREFIX};

use super::{push_declaration, ResolvedSheet, ResolvedToken};

const HEADER: &str = "/* WEX component overrides */\n";

type Groups<'s> = BTreeMap<String, Vec<(&'s str, String)>>;

/// Renders the component delta stylesheet.
pub fn export_component_delta(registry: &TokenRegistry, overrides: &Overrides) -> String {
    let sheet = ResolvedSheet::new(registry, overrides);
    render_component_delta(&sheet, overrides)
}

pub(crate) fn render_component_delta(sheet: &ResolvedSheet<'_>, overrides: &Overrides) -> String {
    let resolved: HashMap<&str, &ResolvedToken<'_>> = sheet
        .tokens()
        .iter()
        .map(|t| (t.token.name(), t))
        .collect();
    let value_of = |name: &str, raw: &str, mode: ColorMode| -> String {
        match resolved.get(name) {
            Some(token) => token.value(mode).to_string(),
            None => css_value(raw),
        }
    };

    let mut light: Groups<'_> = BTreeMap::new();
    for (name, raw) in component_overrides(overrides, ColorMode::Light) {
        light
            .entry(component_of(name))
            .or_default()
            .push((name, value_of(name, raw, ColorMode::Light)));
    }

    let mut dark: Groups<'_> = BTreeMap::new();
    let mut any_dark = false;
    for (name, raw) in component_overrides(overrides, ColorMode::Dark) {
        any_dark = true;
        let dark_value = value_of(name, raw, ColorMode::Dark);
        let light_value = match overrides.get(name, ColorMode::Light) {
            Some(light_raw) => value_of(name, light_raw, ColorMode::Light),
            None => value_of(name, raw, ColorMode::Light),
        };
        if dark_value != light_value {
            dark.entry(component_of(name))
                .or_default()
                .push((name, dark_value));
        }
    }

    let mut out = String::from(HEADER);
    if light.is_empty() && !any_dark {
        out.push_str("/* NO CHANGES: no component tokens differ from the defaults. */\n");
        return out;
    }
    out.push_str("/* Generated by wex-theme. Only changed component tokens are listed. */\n\n");

    if light.is_empty() {
        out.push_str("/* No light-mode component overrides. */\n");
    } else {
        out.push_str(":root {\n");
        render_groups(&mut out, &light, "  ");
        out.push_str("}\n");
    }
    out.push('\n');

    if dark.is_empty() {
        out.push_str("/* No dark-mode component overrides differ from light mode. */\n");
    } else {
        out.push_str("@media (prefers-color-scheme: dark) {\n");
        out.push_str("  :root {\n");
        render_groups(&mut out, &dark, "    ");
        out.push_str("  }\n");
        out.push_str("}\n");
    }

    out
}

fn component_overrides(
    overrides: &Overrides,
    mode: ColorMode,
) -> impl Iterator<Item = (&str, &str)> {
    overrides
        .for_mode(mode)
        .iter()
        .filter(|(name, _)| name.starts_with(COMPONENT_PREFIX))
        .map(|(name, value)| (name.as_str(), value.as_str()))
}

fn component_of(name: &str) -> String {
    match ComponentSlot::parse(name) {
        Some(slot) => slot.component,
        None => name.trim_start_matches(COMPONENT_PREFIX).to_string(),
    }
}

fn render_groups(out: &mut String, groups: &Groups<'_>, indent: &str) {
    let mut first = true;
    for (component, entries) in groups {
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(indent);
        out.push_str("/* ");
        out.push_str(component);
        out.push_str(" */\n");
        for (name, value) in entries {
            push_declaration(out, indent, name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(pairs: &[(&str, &str, ColorMode)]) -> String {
        let mut overrides = Overrides::new();
        for (name, value, mode) in pairs {
            let map = match mode {
                ColorMode::Light => &mut overrides.light,
                ColorMode::Dark => &mut overrides.dark,
            };
            map.insert(name.to_string(), value.to_string());
        }
        export_component_delta(TokenRegistry::builtin(), &overrides)
    }

    #[test]
    fn test_no_changes_stub() {
        let css = delta(&[("--wex-primary", "purple-700", ColorMode::Light)]);
        assert!(css.contains("NO CHANGES"));
        assert!(!css.contains(":root"));
    }

    #[test]
    fn test_groups_by_component() {
        let css = delta(&[
            ("--wex-component-card-radius", "var(--wex-radius-xl)", ColorMode::Light),
            ("--wex-component-button-primary-bg", "purple-700", ColorMode::Light),
            ("--wex-component-button-radius", "var(--wex-radius-full)", ColorMode::Light),
        ]);
        assert!(css.contains(
            ":root {\n  /* button */\n  --wex-component-button-primary-bg: var(--wex-palette-purple-700);\n"
        ));
        assert!(css.contains("  /* card */\n  --wex-component-card-radius: var(--wex-radius-xl);\n"));
        assert!(css.contains("/* No dark-mode component overrides differ from light mode. */"));
        assert!(!css.contains("@media"));
    }

    #[test]
    fn test_dark_entries_only_when_different() {
        let css = delta(&[
            ("--wex-component-badge-success-bg", "green-200", ColorMode::Light),
            ("--wex-component-badge-success-bg", "var(--wex-palette-green-800)", ColorMode::Dark),
            ("--wex-component-card-radius", "var(--wex-radius-sm)", ColorMode::Light),
            ("--wex-component-card-radius", "--wex-radius-sm", ColorMode::Dark),
        ]);
        let media = &css[css.find("@media (prefers-color-scheme: dark)").unwrap()..];
        assert!(media.contains("    /* badge */\n    --wex-component-badge-success-bg: var(--wex-palette-green-800);\n"));
        assert!(!media.contains("card"));
    }

    #[test]
    fn test_dark_only_override() {
        let css = delta(&[("--wex-component-alert-info-bg", "cyan-800", ColorMode::Dark)]);
        assert!(!css.contains("NO CHANGES"));
        assert!(css.contains("/* No light-mode component overrides. */"));
        assert!(css.contains("--wex-component-alert-info-bg: var(--wex-palette-cyan-800);"));
    }
}
