//! Classified token values.
//!
//! Token defaults, references and overrides are all plain strings, but the
//! resolver only cares about a handful of shapes. [`TokenRef::parse`]
//! classifies a string once so the rest of the crate can match on variants:
//!
//! | Input | Variant |
//! |-------|---------|
//! | `var(--wex-palette-green-700)`, `green-700` | [`TokenRef::Palette`] (catalog hues only) |
//! | `var(--wex-palette-white)`, `white` | [`TokenRef::Neutral`] |
//! | `var(--wex-radius-lg)`, `--wex-radius-lg` | [`TokenRef::Radius`] |
//! | `var(--wex-primary)` | [`TokenRef::Semantic`] |
//! | `217 91% 45%`, `8px`, anything else | [`TokenRef::Literal`] |
//!
//! The short form of a palette reference (`green-700`) is what the resolver
//! hands back; [`TokenRef::css_value`] turns any reference back into the
//! expression that goes into a stylesheet.

use std::fmt;

use crate::palette::{palette_hue, Neutral, Shade, PALETTE_PREFIX};

/// Name prefix of the radius scale tokens.
pub const RADIUS_PREFIX: &str = "--wex-radius-";

/// A `{hue}-{shade}` palette reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteRef {
    /// Family name (`"green"`).
    pub hue: String,
    /// Ramp step.
    pub shade: Shade,
}

impl PaletteRef {
    /// Parses the short form `hue-shade`. The hue must be a catalog family.
    pub fn parse_short(s: &str) -> Option<Self> {
        let (hue, shade) = s.rsplit_once('-')?;
        palette_hue(hue)?;
        let shade = shade.parse::<Shade>().ok()?;
        Some(Self {
            hue: hue.to_string(),
            shade,
        })
    }

    /// Full token name (`--wex-palette-green-700`).
    pub fn token_name(&self) -> String {
        format!("{}{}-{}", PALETTE_PREFIX, self.hue, self.shade)
    }
}

impl fmt::Display for PaletteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.hue, self.shade)
    }
}

/// A token value classified by shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenRef {
    /// Points at a shade of a palette family.
    Palette(PaletteRef),
    /// Points at the white or black palette entry.
    Neutral(Neutral),
    /// Points at a radius token; holds the full custom property name.
    Radius(String),
    /// A `var(--…)` pointing at some other token; holds the raw string.
    Semantic(String),
    /// A raw value; holds the raw string.
    Literal(String),
}

impl TokenRef {
    /// Classifies a raw value. Never fails: unrecognized input is a literal.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Some(name) = var_target(trimmed) {
            if let Some(rest) = palette_suffix(name) {
                if let Some(neutral) = Neutral::from_name(rest) {
                    return TokenRef::Neutral(neutral);
                }
                if let Some(palette) = PaletteRef::parse_short(rest) {
                    return TokenRef::Palette(palette);
                }
            }
            if is_radius_var(name) {
                return TokenRef::Radius(name.to_string());
            }
            return TokenRef::Semantic(raw.to_string());
        }

        if let Some(neutral) = Neutral::from_name(trimmed) {
            return TokenRef::Neutral(neutral);
        }
        if let Some(palette) = PaletteRef::parse_short(trimmed) {
            return TokenRef::Palette(palette);
        }
        if trimmed.starts_with(RADIUS_PREFIX) && trimmed.len() > RADIUS_PREFIX.len() {
            return TokenRef::Radius(trimmed.to_string());
        }

        TokenRef::Literal(raw.to_string())
    }

    /// The value the resolver reports for this reference.
    ///
    /// Palette references collapse to `hue-shade`, neutrals to `white` /
    /// `black`, radius references to the radius token name; semantic and
    /// literal values come back verbatim.
    pub fn short_form(&self) -> String {
        match self {
            TokenRef::Palette(p) => p.to_string(),
            TokenRef::Neutral(n) => n.name().to_string(),
            TokenRef::Radius(name) => name.clone(),
            TokenRef::Semantic(raw) | TokenRef::Literal(raw) => raw.clone(),
        }
    }

    /// The stylesheet expression for this reference.
    ///
    /// Raw values come back trimmed, as a stylesheet parser would read them.
    pub fn css_value(&self) -> String {
        match self {
            TokenRef::Palette(p) => format!("var({})", p.token_name()),
            TokenRef::Neutral(n) => format!("var({})", n.token_name()),
            TokenRef::Radius(name) => format!("var({})", name),
            TokenRef::Semantic(raw) | TokenRef::Literal(raw) => raw.trim().to_string(),
        }
    }

    /// Name of the token this value points at, if any.
    pub fn target(&self) -> Option<String> {
        match self {
            TokenRef::Palette(p) => Some(p.token_name()),
            TokenRef::Neutral(n) => Some(n.token_name()),
            TokenRef::Radius(name) => Some(name.clone()),
            TokenRef::Semantic(raw) => var_target(raw.trim()).map(str::to_string),
            TokenRef::Literal(_) => None,
        }
    }

    /// True for radius references.
    pub fn is_radius(&self) -> bool {
        matches!(self, TokenRef::Radius(_))
    }
}

/// Extracts `--name` from `var(--name)` or `var(--name, fallback)`.
///
/// The whole string must be one `var()` expression: `var(--a) var(--b)` and
/// `var(--a, 1px) + 2px` are not references.
fn var_target(s: &str) -> Option<&str> {
    let inner = s.strip_prefix("var(")?.strip_suffix(')')?;
    let (name, fallback) = match inner.split_once(',') {
        Some((name, fallback)) => (name.trim(), fallback),
        None => (inner.trim(), ""),
    };
    if !is_custom_property_name(name) || !is_balanced(fallback) {
        return None;
    }
    Some(name)
}

fn is_custom_property_name(name: &str) -> bool {
    match name.strip_prefix("--") {
        Some(rest) => {
            !rest.is_empty()
                && !rest
                    .chars()
                    .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | ','))
        }
        None => false,
    }
}

/// True if parentheses never close more than they open and all end closed.
fn is_balanced(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Remainder after `-palette-` in a `--*-palette-*` custom property name.
fn palette_suffix(name: &str) -> Option<&str> {
    let idx = name.find("-palette-")?;
    Some(&name[idx + "-palette-".len()..])
}

/// Matches the `--*-radius-*` custom property shape.
fn is_radius_var(name: &str) -> bool {
    match name.find("-radius-") {
        Some(idx) => idx + "-radius-".len() < name.len(),
        None => false,
    }
}

/// First `var(--*-radius-*)` target found anywhere in `s`.
pub(crate) fn embedded_radius_var(s: &str) -> Option<&str> {
    s.match_indices("var(").find_map(|(idx, _)| {
        let rest = &s[idx + "var(".len()..];
        let end = rest.find([',', ')'])?;
        let name = rest[..end].trim();
        (name.starts_with("--") && is_radius_var(name)).then_some(name)
    })
}

/// Maps a resolved value back to its stylesheet expression.
///
/// This is the single place where resolver output becomes exported text, so
/// every artifact emits the same string for the same token.
pub fn css_value(resolved: &str) -> String {
    TokenRef::parse(resolved).css_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(hue: &str, shade: Shade) -> TokenRef {
        TokenRef::Palette(PaletteRef {
            hue: hue.to_string(),
            shade,
        })
    }

    #[test]
    fn test_parse_palette_var() {
        assert_eq!(
            TokenRef::parse("var(--wex-palette-green-700)"),
            palette("green", Shade::S700)
        );
    }

    #[test]
    fn test_parse_palette_short_form() {
        assert_eq!(TokenRef::parse("blue-50"), palette("blue", Shade::S50));
    }

    #[test]
    fn test_full_palette_name_is_literal() {
        assert_eq!(
            TokenRef::parse("--wex-palette-red-900"),
            TokenRef::Literal("--wex-palette-red-900".to_string())
        );
    }

    #[test]
    fn test_unknown_hue_is_not_palette() {
        assert_eq!(TokenRef::parse("pink-500"), TokenRef::Literal("pink-500".to_string()));
        assert_eq!(
            TokenRef::parse("var(--wex-palette-pink-500)"),
            TokenRef::Semantic("var(--wex-palette-pink-500)".to_string())
        );
        assert_eq!(css_value("pink-500"), "pink-500");
    }

    #[test]
    fn test_parse_palette_foreign_prefix() {
        assert_eq!(
            TokenRef::parse("var(--acme-palette-cyan-300)"),
            palette("cyan", Shade::S300)
        );
    }

    #[test]
    fn test_parse_neutrals() {
        assert_eq!(TokenRef::parse("var(--wex-palette-white)"), TokenRef::Neutral(Neutral::White));
        assert_eq!(TokenRef::parse("black"), TokenRef::Neutral(Neutral::Black));
    }

    #[test]
    fn test_parse_radius() {
        assert_eq!(
            TokenRef::parse("var(--wex-radius-lg)"),
            TokenRef::Radius("--wex-radius-lg".to_string())
        );
        assert_eq!(
            TokenRef::parse("--wex-radius-sm"),
            TokenRef::Radius("--wex-radius-sm".to_string())
        );
    }

    #[test]
    fn test_component_radius_var_is_semantic() {
        assert_eq!(
            TokenRef::parse("var(--wex-component-button-radius)"),
            TokenRef::Semantic("var(--wex-component-button-radius)".to_string())
        );
    }

    #[test]
    fn test_parse_semantic_and_literal() {
        assert_eq!(
            TokenRef::parse("var(--wex-primary)"),
            TokenRef::Semantic("var(--wex-primary)".to_string())
        );
        assert_eq!(
            TokenRef::parse("217 91% 45%"),
            TokenRef::Literal("217 91% 45%".to_string())
        );
        assert_eq!(TokenRef::parse("8px"), TokenRef::Literal("8px".to_string()));
        assert_eq!(TokenRef::parse("pink-550"), TokenRef::Literal("pink-550".to_string()));
        assert_eq!(TokenRef::parse("var(--)"), TokenRef::Literal("var(--)".to_string()));

        let pair = "var(--wex-primary) var(--wex-palette-red-500)";
        assert_eq!(TokenRef::parse(pair), TokenRef::Literal(pair.to_string()));
        assert_eq!(css_value(pair), pair);

        let sum = "var(--wex-radius-sm, 2px) + var(--x)";
        assert_eq!(TokenRef::parse(sum), TokenRef::Literal(sum.to_string()));
        assert_eq!(
            TokenRef::parse("var(--wex-primary, var(--wex-ring))"),
            TokenRef::Semantic("var(--wex-primary, var(--wex-ring))".to_string())
        );
    }

    #[test]
    fn test_short_form_and_css_value() {
        let r = TokenRef::parse("var(--wex-palette-green-700)");
        assert_eq!(r.short_form(), "green-700");
        assert_eq!(r.css_value(), "var(--wex-palette-green-700)");

        let r = TokenRef::parse("var(--wex-radius-lg)");
        assert_eq!(r.short_form(), "--wex-radius-lg");
        assert_eq!(r.css_value(), "var(--wex-radius-lg)");

        assert_eq!(css_value("white"), "var(--wex-palette-white)");
        assert_eq!(css_value("0 0% 100%"), "0 0% 100%");
        assert_eq!(css_value("var(--wex-primary)"), "var(--wex-primary)");
        assert_eq!(css_value(" 14px "), "14px");
    }

    #[test]
    fn test_short_form_is_fixed_point() {
        for raw in [
            "var(--wex-palette-green-700)",
            "var(--wex-palette-black)",
            "var(--wex-radius-md)",
            "var(--wex-primary)",
            "12px",
        ] {
            let once = TokenRef::parse(raw).short_form();
            let twice = TokenRef::parse(&once).short_form();
            assert_eq!(once, twice, "input {}", raw);
        }
    }

    #[test]
    fn test_embedded_radius_var() {
        assert_eq!(
            embedded_radius_var("calc(var(--wex-radius-md) + 2px)"),
            Some("--wex-radius-md")
        );
        assert_eq!(embedded_radius_var("var(--wex-primary) var(--x-radius-sm, 2px)"), Some("--x-radius-sm"));
        assert_eq!(embedded_radius_var("var(--wex-radius)"), None);
        assert_eq!(embedded_radius_var("6px"), None);
    }

    #[test]
    fn test_target() {
        assert_eq!(
            TokenRef::parse("var(--wex-primary, red)").target().as_deref(),
            Some("--wex-primary")
        );
        assert_eq!(
            TokenRef::parse("amber-100").target().as_deref(),
            Some("--wex-palette-amber-100")
        );
        assert_eq!(TokenRef::parse("4px").target(), None);
    }
}
