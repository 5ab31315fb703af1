//! The built-in WEX token catalog.
//!
//! Declaration order matters: exporters walk tokens in this order within each
//! category, and component lookups return tokens in this order.

use super::definition::{Category, TokenDef, TokenKind};

fn other(name: &str, category: Category, value: &str) -> TokenDef {
    TokenDef::new(name, TokenKind::Other, category, value)
}

fn size(name: &str, category: Category, value: &str) -> TokenDef {
    TokenDef::new(name, TokenKind::Size, category, value)
}

fn literal(name: &str, category: Category, light: &str, dark: &str) -> TokenDef {
    let def = TokenDef::new(name, TokenKind::Color, category, light);
    if dark == light {
        def
    } else {
        def.dark(dark)
    }
}

fn palette(name: &str, category: Category, light: &str, dark: &str) -> TokenDef {
    TokenDef::palette(name, category, light, dark)
}

/// Radius slot defaulting to a step of the radius scale.
fn radius_slot(name: &str, step: &str) -> TokenDef {
    let target = format!("--wex-radius-{}", step);
    TokenDef::new(name, TokenKind::Size, Category::Component, format!("var({})", target))
        .references(target)
}

/// Component color slot that defaults to a semantic token.
fn semantic_slot(name: &str, target: &str) -> TokenDef {
    TokenDef::new(name, TokenKind::Color, Category::Component, format!("var({})", target))
}

pub(crate) fn builtin_definitions() -> Vec<TokenDef> {
    use Category::*;

    vec![
        // Typography
        other("--wex-font-sans", Typography, "Inter, ui-sans-serif, system-ui, sans-serif"),
        other("--wex-font-mono", Typography, "\"JetBrains Mono\", ui-monospace, monospace"),
        size("--wex-font-size-base", Typography, "16px"),
        other("--wex-line-height-base", Typography, "1.5"),
        other("--wex-font-weight-heading", Typography, "600"),
        // Surfaces
        palette("--wex-background", Surface, "white", "slate-900"),
        palette("--wex-foreground", Surface, "slate-900", "slate-50"),
        palette("--wex-card", Surface, "white", "slate-800"),
        palette("--wex-card-foreground", Surface, "slate-900", "slate-50"),
        palette("--wex-popover", Surface, "white", "slate-800"),
        palette("--wex-popover-foreground", Surface, "slate-900", "slate-50"),
        palette("--wex-muted", Surface, "slate-100", "slate-800"),
        palette("--wex-muted-foreground", Surface, "slate-500", "slate-400"),
        palette("--wex-border", Surface, "slate-200", "slate-700"),
        palette("--wex-input", Surface, "slate-300", "slate-600"),
        palette("--wex-ring", Surface, "blue-500", "blue-400"),
        // Text
        palette("--wex-text-primary", Text, "slate-900", "slate-50"),
        palette("--wex-text-secondary", Text, "slate-600", "slate-300"),
        palette("--wex-text-disabled", Text, "slate-400", "slate-500"),
        palette("--wex-text-inverse", Text, "white", "slate-900"),
        // Brand
        literal("--wex-brand-red", Brand, "355 87% 51%", "355 87% 51%"),
        literal("--wex-brand-navy", Brand, "226 71% 24%", "226 60% 70%"),
        // Primary
        palette("--wex-primary", Primary, "blue-700", "blue-400"),
        palette("--wex-primary-foreground", Primary, "white", "slate-900"),
        palette("--wex-primary-hover", Primary, "blue-800", "blue-300"),
        palette("--wex-secondary", Primary, "slate-100", "slate-800"),
        palette("--wex-secondary-foreground", Primary, "slate-900", "slate-50"),
        palette("--wex-accent", Primary, "blue-50", "slate-800"),
        palette("--wex-accent-foreground", Primary, "blue-900", "blue-100"),
        // Links
        palette("--wex-link", Link, "blue-700", "blue-300"),
        palette("--wex-link-hover", Link, "blue-900", "blue-200"),
        palette("--wex-link-visited", Link, "purple-700", "purple-300"),
        // Destructive
        palette("--wex-destructive", Destructive, "red-600", "red-500"),
        palette("--wex-destructive-foreground", Destructive, "white", "white"),
        palette("--wex-destructive-subtle", Destructive, "red-50", "red-900"),
        // Success
        palette("--wex-success", Success, "green-700", "green-500"),
        palette("--wex-success-foreground", Success, "white", "slate-900"),
        palette("--wex-success-subtle", Success, "green-50", "green-900"),
        // Warning
        palette("--wex-warning", Warning, "amber-600", "amber-400"),
        palette("--wex-warning-foreground", Warning, "slate-900", "slate-900"),
        palette("--wex-warning-subtle", Warning, "amber-50", "amber-900"),
        // Info
        palette("--wex-info", Info, "cyan-700", "cyan-400"),
        palette("--wex-info-foreground", Info, "white", "slate-900"),
        palette("--wex-info-subtle", Info, "cyan-50", "cyan-900"),
        // Highlight
        palette("--wex-highlight", Highlight, "amber-100", "amber-800"),
        palette("--wex-highlight-foreground", Highlight, "slate-900", "amber-50"),
        // Radius scale
        size("--wex-radius-sm", Radius, "4px"),
        size("--wex-radius-md", Radius, "6px"),
        size("--wex-radius-lg", Radius, "8px"),
        size("--wex-radius-xl", Radius, "12px"),
        size("--wex-radius-full", Radius, "9999px"),
        size("--wex-radius", Radius, "var(--wex-radius-md)").references("--wex-radius-md"),
        // Charts
        palette("--wex-chart-1", Chart, "blue-600", "blue-400"),
        palette("--wex-chart-2", Chart, "green-600", "green-400"),
        palette("--wex-chart-3", Chart, "amber-500", "amber-400"),
        palette("--wex-chart-4", Chart, "purple-600", "purple-400"),
        palette("--wex-chart-5", Chart, "cyan-600", "cyan-400"),
        // Button
        semantic_slot("--wex-component-button-primary-bg", "--wex-primary"),
        semantic_slot("--wex-component-button-primary-fg", "--wex-primary-foreground"),
        semantic_slot("--wex-component-button-primary-hover", "--wex-primary-hover"),
        semantic_slot("--wex-component-button-secondary-bg", "--wex-secondary"),
        semantic_slot("--wex-component-button-secondary-fg", "--wex-secondary-foreground"),
        semantic_slot("--wex-component-button-destructive-bg", "--wex-destructive"),
        semantic_slot("--wex-component-button-destructive-fg", "--wex-destructive-foreground"),
        palette("--wex-component-button-neutral-bg", Component, "slate-100", "slate-800"),
        palette("--wex-component-button-neutral-fg", Component, "slate-900", "slate-50"),
        radius_slot("--wex-component-button-radius", "md"),
        // Card
        semantic_slot("--wex-component-card-default-bg", "--wex-card"),
        semantic_slot("--wex-component-card-default-fg", "--wex-card-foreground"),
        semantic_slot("--wex-component-card-default-border", "--wex-border"),
        radius_slot("--wex-component-card-radius", "lg"),
        // Input
        semantic_slot("--wex-component-input-default-bg", "--wex-background"),
        semantic_slot("--wex-component-input-default-border", "--wex-input"),
        semantic_slot("--wex-component-input-default-focus-ring", "--wex-ring"),
        palette("--wex-component-input-error-border", Component, "red-600", "red-400"),
        radius_slot("--wex-component-input-radius", "md"),
        // Badge
        palette("--wex-component-badge-neutral-bg", Component, "slate-100", "slate-800"),
        palette("--wex-component-badge-neutral-fg", Component, "slate-700", "slate-200"),
        palette("--wex-component-badge-success-bg", Component, "green-100", "green-900"),
        palette("--wex-component-badge-success-fg", Component, "green-800", "green-100"),
        palette("--wex-component-badge-warning-bg", Component, "amber-100", "amber-900"),
        palette("--wex-component-badge-warning-fg", Component, "amber-800", "amber-100"),
        palette("--wex-component-badge-destructive-bg", Component, "red-100", "red-900"),
        palette("--wex-component-badge-destructive-fg", Component, "red-800", "red-100"),
        palette("--wex-component-badge-info-bg", Component, "cyan-100", "cyan-900"),
        palette("--wex-component-badge-info-fg", Component, "cyan-800", "cyan-100"),
        radius_slot("--wex-component-badge-radius", "full"),
        // Alert
        palette("--wex-component-alert-info-bg", Component, "cyan-50", "cyan-900"),
        palette("--wex-component-alert-info-fg", Component, "cyan-900", "cyan-50"),
        palette("--wex-component-alert-info-border", Component, "cyan-200", "cyan-700"),
        palette("--wex-component-alert-warning-bg", Component, "amber-50", "amber-900"),
        palette("--wex-component-alert-warning-fg", Component, "amber-900", "amber-50"),
        palette("--wex-component-alert-warning-border", Component, "amber-200", "amber-700"),
        palette("--wex-component-alert-destructive-bg", Component, "red-50", "red-900"),
        palette("--wex-component-alert-destructive-fg", Component, "red-900", "red-50"),
        palette("--wex-component-alert-destructive-border", Component, "red-200", "red-700"),
        radius_slot("--wex-component-alert-radius", "lg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_prefixed() {
        let defs = builtin_definitions();
        let mut seen = HashSet::new();
        for def in &defs {
            assert!(def.name.starts_with("--wex-"), "{}", def.name);
            assert!(seen.insert(def.name.clone()), "duplicate {}", def.name);
        }
    }

    #[test]
    fn test_component_slots_are_component_category() {
        for def in builtin_definitions() {
            if def.name.starts_with("--wex-component-") {
                assert_eq!(def.category, Category::Component, "{}", def.name);
            }
        }
    }

    #[test]
    fn test_radius_slots_reference_scale() {
        let defs = builtin_definitions();
        let slot = defs
            .iter()
            .find(|d| d.name == "--wex-component-button-radius")
            .unwrap();
        assert_eq!(slot.kind, TokenKind::Size);
        assert_eq!(slot.light, "var(--wex-radius-md)");
        assert_eq!(slot.references.as_deref(), Some("--wex-radius-md"));
    }
}
