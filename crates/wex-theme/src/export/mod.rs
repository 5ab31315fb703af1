//! Theme artifacts.
//!
//! Four serializers turn a registry plus an override snapshot into text:
//!
//! | Function | Artifact | Depends on overrides |
//! |----------|----------|----------------------|
//! | [`export_css_sheet`] | `tokens.css` | yes |
//! | [`export_semantic_bridge`] | `shadcn-bridge.css` | no |
//! | [`export_component_delta`] | `components-bridge.css` | yes |
//! | [`export_json_tree`] | `tokens.json` | yes |
//!
//! The override-dependent artifacts are all built from one [`ResolvedSheet`],
//! so a token carries the same value string in every file that mentions it.

mod bridge;
mod components;
mod css;
mod json;

pub use bridge::{export_semantic_bridge, BRIDGE_MAPPINGS};
pub use components::export_component_delta;
pub use css::export_css_sheet;
pub use json::{export_json_tree, flatten_json_tree, json_tree, DARK_KEY, DEFAULT_KEY};

pub(crate) use components::render_component_delta;
pub(crate) use css::render_css_sheet;
pub(crate) use json::build_tree;

use wex_tokens::{
    css_value_for, derive_palette, resolve_value, Category, ColorMode, DerivedPalette, Overrides,
    Token, TokenRegistry,
};

/// One token with its stylesheet value in both modes.
#[derive(Debug, Clone)]
pub struct ResolvedToken<'a> {
    /// The registry entry.
    pub token: &'a Token,
    /// Light-mode stylesheet value.
    pub light: String,
    /// Dark-mode stylesheet value.
    pub dark: String,
}

impl ResolvedToken<'_> {
    /// Value for a mode.
    pub fn value(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// True if the token belongs in the dark block: its source defines a dark
    /// variant, or overrides made the two modes diverge.
    pub fn in_dark_block(&self) -> bool {
        self.token.has_dark_variant() || self.light != self.dark
    }
}

/// Every token and palette entry resolved against one override snapshot.
#[derive(Debug, Clone)]
pub struct ResolvedSheet<'a> {
    tokens: Vec<ResolvedToken<'a>>,
    light_palette: DerivedPalette,
    dark_palette: DerivedPalette,
}

impl<'a> ResolvedSheet<'a> {
    /// Resolves the whole registry.
    pub fn new(registry: &'a TokenRegistry, overrides: &Overrides) -> Self {
        let tokens = registry
            .iter()
            .map(|token| ResolvedToken {
                token,
                light: css_value_for(token, &resolve_value(token, overrides, ColorMode::Light)),
                dark: css_value_for(token, &resolve_value(token, overrides, ColorMode::Dark)),
            })
            .collect();

        Self {
            tokens,
            light_palette: derive_palette(overrides.for_mode(ColorMode::Light)),
            dark_palette: derive_palette(overrides.for_mode(ColorMode::Dark)),
        }
    }

    /// All tokens in registry order.
    pub fn tokens(&self) -> &[ResolvedToken<'a>] {
        &self.tokens
    }

    /// Tokens of one category, in registry order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ResolvedToken<'a>> {
        self.tokens
            .iter()
            .filter(move |t| t.token.category() == category)
    }

    /// The derived palette for a mode.
    pub fn palette(&self, mode: ColorMode) -> &DerivedPalette {
        match mode {
            ColorMode::Light => &self.light_palette,
            ColorMode::Dark => &self.dark_palette,
        }
    }

    /// Dark palette entries whose value differs from the light palette.
    pub fn dark_palette_changes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dark_palette
            .entries()
            .filter(move |(name, value)| self.light_palette.get(name) != Some(*value))
    }

    /// `(name, value)` pairs of the `:root` block: tokens, then the palette.
    pub fn light_entries(&self) -> Vec<(&str, &str)> {
        self.tokens
            .iter()
            .map(|t| (t.token.name(), t.light.as_str()))
            .chain(self.light_palette.entries())
            .collect()
    }

    /// `(name, value)` pairs of the dark block: diverging tokens, then
    /// diverging palette entries.
    pub fn dark_entries(&self) -> Vec<(&str, &str)> {
        self.tokens
            .iter()
            .filter(|t| t.in_dark_block())
            .map(|t| (t.token.name(), t.dark.as_str()))
            .chain(self.dark_palette_changes())
            .collect()
    }
}

/// Appends `  --name: value;` to a block.
pub(crate) fn push_declaration(out: &mut String, indent: &str, name: &str, value: &str) {
    out.push_str(indent);
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
}
