//! Effective token values.
//!
//! [`resolve_value`] walks a fixed precedence chain for one token and mode:
//! explicit override, then the mode's upstream reference, then the mode's
//! default. Radius tokens and everything else extract different things from
//! each step:
//!
//! | Token | From an override | From a reference | From the default |
//! |-------|------------------|------------------|------------------|
//! | radius | radius token name, else raw | radius token name | embedded `var(--*-radius-*)` name, else raw |
//! | other | `hue-shade` / `white` / `black`, else raw | short form | raw |
//!
//! The result is a *short form*: `blue-700` rather than
//! `var(--wex-palette-blue-700)`. Short forms are fixed points, so storing a
//! resolved value back as an override changes nothing. Use
//! [`css_value_for`] to turn a resolved value into stylesheet text.
//!
//! Resolution never fails. Values of no recognized shape pass through.
//!
//! ```rust
//! use wex_tokens::{resolve_value, ColorMode, OverrideStore, TokenRegistry};
//!
//! let registry = TokenRegistry::builtin();
//! let primary = registry.get("--wex-primary").unwrap();
//!
//! let mut store = OverrideStore::new();
//! assert_eq!(resolve_value(primary, store.overrides(), ColorMode::Light), "blue-700");
//!
//! store.set_token("--wex-primary", "var(--wex-palette-purple-700)", ColorMode::Light);
//! assert_eq!(resolve_value(primary, store.overrides(), ColorMode::Light), "purple-700");
//! ```

use std::collections::HashSet;

use crate::colorspace::{contrast_ratio, Hsl};
use crate::mode::ColorMode;
use crate::overrides::Overrides;
use crate::palette::derive_palette;
use crate::token::{embedded_radius_var, Token, TokenKind, TokenRef, TokenRegistry, RADIUS_PREFIX};

/// Computes a token's effective value for a mode.
pub fn resolve_value(token: &Token, overrides: &Overrides, mode: ColorMode) -> String {
    let defaults = token.for_mode(mode);
    let override_value = overrides.get(token.name(), mode);

    if token.is_radius() {
        if let Some(raw) = override_value {
            return match TokenRef::parse(raw) {
                TokenRef::Radius(name) => name,
                _ => raw.to_string(),
            };
        }
        if let Some(TokenRef::Radius(name)) = defaults.reference {
            if name.starts_with(RADIUS_PREFIX) {
                return name.clone();
            }
        }
        if let TokenRef::Radius(name) = defaults.parsed {
            return name.clone();
        }
        return match embedded_radius_var(defaults.value) {
            Some(name) => name.to_string(),
            None => defaults.value.to_string(),
        };
    }

    if let Some(raw) = override_value {
        return match TokenRef::parse(raw) {
            reference @ (TokenRef::Palette(_) | TokenRef::Neutral(_)) => reference.short_form(),
            _ => raw.to_string(),
        };
    }
    if let Some(reference) = defaults.reference {
        return reference.short_form();
    }
    defaults.value.to_string()
}

/// Stylesheet text for a value `resolve_value` returned for `token`.
///
/// Only shapes that fit the token's kind expand back into `var()`: palette
/// and neutral short forms for color tokens, radius names for the rest. A
/// radius slot overridden with `blue-700` or a font named `black` comes back
/// as written. Values are trimmed.
pub fn css_value_for(token: &Token, resolved: &str) -> String {
    let reference = TokenRef::parse(resolved);
    let expand = match reference {
        TokenRef::Palette(_) | TokenRef::Neutral(_) => token.kind() == TokenKind::Color,
        TokenRef::Radius(_) => token.kind() != TokenKind::Color,
        TokenRef::Semantic(_) | TokenRef::Literal(_) => true,
    };
    if expand {
        reference.css_value()
    } else {
        resolved.trim().to_string()
    }
}

/// Follows a token through semantic and palette references to a concrete color.
///
/// `name` may be a registry token or a palette token. Palette values come
/// from the ramps derived from `overrides` for the same mode. Returns `None`
/// for unknown names, non-color values, and reference loops.
pub fn concrete_color(
    registry: &TokenRegistry,
    overrides: &Overrides,
    name: &str,
    mode: ColorMode,
) -> Option<Hsl> {
    let palette = derive_palette(overrides.for_mode(mode));
    let mut visited = HashSet::new();
    let mut current = name.to_string();

    loop {
        if !visited.insert(current.clone()) {
            tracing::debug!(token = name, %mode, "reference loop while resolving color");
            return None;
        }
        if let Some(value) = palette.get(&current) {
            return Hsl::parse(value);
        }

        let token = registry.get(&current)?;
        let resolved = resolve_value(token, overrides, mode);
        match TokenRef::parse(&resolved) {
            TokenRef::Literal(raw) => return Hsl::parse(&raw),
            TokenRef::Radius(_) => return None,
            reference => current = reference.target()?,
        }
    }
}

/// WCAG contrast ratio between two tokens' concrete colors.
pub fn token_contrast(
    registry: &TokenRegistry,
    overrides: &Overrides,
    foreground: &str,
    background: &str,
    mode: ColorMode,
) -> Option<f64> {
    let fg = concrete_color(registry, overrides, foreground, mode)?;
    let bg = concrete_color(registry, overrides, background, mode)?;
    Some(contrast_ratio(fg.to_rgb(), bg.to_rgb()))
}
