//! The layered token stylesheet (`tokens.css`).
//!
//! ```css
//! :root {
//!   /* Surfaces */
//!   --wex-background: var(--wex-palette-white);
//!   ...
//!
//!   /* Palette */
//!   --wex-palette-blue-50: 217 91% 97%;
//!   ...
//! }
//!
//! .dark {
//!   /* Surfaces */
//!   --wex-background: var(--wex-palette-slate-900);
//!   ...
//! }
//! ```

use wex_tokens::{Category, ColorMode, Overrides, TokenRegistry};

use super::{push_declaration, ResolvedSheet};

const INDENT: &str = "  ";

/// Renders the full token stylesheet.
pub fn export_css_sheet(registry: &TokenRegistry, overrides: &Overrides) -> String {
    let sheet = ResolvedSheet::new(registry, overrides);
    render_css_sheet(&sheet)
}

pub(crate) fn render_css_sheet(sheet: &ResolvedSheet<'_>) -> String {
    let mut out = String::new();
    out.push_str("/* WEX design tokens */\n");
    out.push_str("/* Generated by wex-theme. Light values in :root, dark values in .dark. */\n\n");

    out.push_str(":root {\n");
    let mut first = true;
    for category in Category::ALL {
        let tokens: Vec<_> = sheet.in_category(category).collect();
        if tokens.is_empty() {
            continue;
        }
        section_header(&mut out, category.title(), &mut first);
        for token in tokens {
            push_declaration(&mut out, INDENT, token.token.name(), &token.light);
        }
    }
    section_header(&mut out, "Palette", &mut first);
    for (name, value) in sheet.palette(ColorMode::Light).entries() {
        push_declaration(&mut out, INDENT, name, value);
    }
    out.push_str("}\n\n");

    out.push_str(".dark {\n");
    let mut first = true;
    for category in Category::ALL {
        let tokens: Vec<_> = sheet
            .in_category(category)
            .filter(|t| t.in_dark_block())
            .collect();
        if tokens.is_empty() {
            continue;
        }
        section_header(&mut out, category.title(), &mut first);
        for token in tokens {
            push_declaration(&mut out, INDENT, token.token.name(), &token.dark);
        }
    }
    let palette: Vec<_> = sheet.dark_palette_changes().collect();
    if !palette.is_empty() {
        section_header(&mut out, "Palette", &mut first);
        for (name, value) in palette {
            push_declaration(&mut out, INDENT, name, value);
        }
    }
    out.push_str("}\n");

    out
}

fn section_header(out: &mut String, title: &str, first: &mut bool) {
    if !*first {
        out.push('\n');
    }
    *first = false;
    out.push_str(INDENT);
    out.push_str("/* ");
    out.push_str(title);
    out.push_str(" */\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block<'s>(css: &'s str, selector: &str) -> &'s str {
        let start = css.find(&format!("{} {{", selector)).unwrap();
        let end = start + css[start..].find("\n}").unwrap() + 1;
        &css[start..end]
    }

    #[test]
    fn test_defaults_only_sheet() {
        let css = export_css_sheet(TokenRegistry::builtin(), &Overrides::new());
        let root = block(&css, ":root");
        assert!(root.contains("  /* Typography */\n"));
        assert!(root.contains("  --wex-primary: var(--wex-palette-blue-700);\n"));
        assert!(root.contains("  --wex-radius: var(--wex-radius-md);\n"));
        assert!(root.contains("  --wex-radius-lg: 8px;\n"));
        assert!(root.contains("  --wex-palette-blue-500: 217 91% 45%;\n"));
        assert!(root.contains("  --wex-palette-white: 0 0% 100%;\n"));

        let dark = block(&css, ".dark");
        assert!(dark.contains("  --wex-primary: var(--wex-palette-blue-400);\n"));
        assert!(!dark.contains("--wex-font-sans"));
        assert!(!dark.contains("/* Palette */"));
    }

    #[test]
    fn test_categories_in_order() {
        let css = export_css_sheet(TokenRegistry::builtin(), &Overrides::new());
        let surfaces = css.find("/* Surfaces */").unwrap();
        let radius = css.find("/* Radius */").unwrap();
        let palette = css.find("/* Palette */").unwrap();
        assert!(surfaces < radius && radius < palette);
    }

    #[test]
    fn test_override_reaches_sheet() {
        let mut overrides = Overrides::new();
        overrides.light.insert(
            "--wex-primary".to_string(),
            "var(--wex-palette-purple-700)".to_string(),
        );
        overrides
            .light
            .insert("--wex-palette-blue-500".to_string(), "210 80% 60%".to_string());

        let css = export_css_sheet(TokenRegistry::builtin(), &overrides);
        let root = block(&css, ":root");
        assert!(root.contains("  --wex-primary: var(--wex-palette-purple-700);\n"));
        assert!(root.contains("  --wex-palette-blue-900: 210 80% 20%;\n"));

        // Light ramp moved, dark ramp didn't: the dark block carries the family.
        let dark = block(&css, ".dark");
        assert!(dark.contains("  --wex-palette-blue-900: 217 91% 20%;\n"));
    }

    #[test]
    fn test_values_keep_their_kind() {
        let mut overrides = Overrides::new();
        for (name, value) in [
            ("--wex-component-card-radius", "blue-700"),
            ("--wex-font-sans", "black"),
            ("--wex-font-size-base", " 14px "),
        ] {
            overrides.light.insert(name.to_string(), value.to_string());
        }

        let css = export_css_sheet(TokenRegistry::builtin(), &overrides);
        let root = block(&css, ":root");
        assert!(root.contains("  --wex-component-card-radius: blue-700;\n"));
        assert!(root.contains("  --wex-font-sans: black;\n"));
        assert!(root.contains("  --wex-font-size-base: 14px;\n"));
        assert!(!css.contains("--wex-component-card-radius: var(--wex-palette-blue-700)"));
    }
}
