//! Reading exported artifacts back.
//!
//! [`parse_css_tokens`] and [`parse_json_tree`] turn a `tokens.css`,
//! `components-bridge.css` or `tokens.json` file into [`ParsedTokens`]:
//! custom property declarations split by mode. Applying them to an editor
//! session is [`ThemeEditor::import_css`](crate::ThemeEditor::import_css)'s
//! job.

mod css;
mod json;

pub use css::parse_css_tokens;
pub use json::parse_json_tree;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wex_tokens::ColorMode;

/// Custom property declarations read from an artifact.
///
/// `dark` holds only what the dark block declares. Like the CSS cascade,
/// a name missing from `dark` takes its light value in dark mode; see
/// [`effective`](Self::effective).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedTokens {
    /// Declarations from `:root` (or the top level of a JSON tree).
    pub light: BTreeMap<String, String>,
    /// Declarations from `.dark`, a dark media query, or `$dark`.
    pub dark: BTreeMap<String, String>,
}

impl ParsedTokens {
    /// True if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// The value a name takes in a mode, with dark falling back to light.
    pub fn value(&self, name: &str, mode: ColorMode) -> Option<&str> {
        let light = self.light.get(name);
        match mode {
            ColorMode::Light => light,
            ColorMode::Dark => self.dark.get(name).or(light),
        }
        .map(String::as_str)
    }

    /// Every name with its value in a mode, dark overlaid on light.
    pub fn effective(&self, mode: ColorMode) -> BTreeMap<&str, &str> {
        let mut values: BTreeMap<&str, &str> = self
            .light
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if mode == ColorMode::Dark {
            values.extend(self.dark.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        values
    }
}
