//! Token definitions.
//!
//! A [`TokenDef`] is the authoring form of a token, the shape used in the
//! built-in catalog and in YAML catalog files:
//!
//! ```yaml
//! - name: --wex-primary
//!   type: color
//!   category: primary
//!   light: var(--wex-palette-blue-700)
//!   dark: var(--wex-palette-blue-400)
//!   references: blue-700
//!   dark_references: blue-400
//! ```
//!
//! A [`Token`] is the registry form: the same data with every default and
//! reference classified into a [`TokenRef`] once, and the dark→light fallback
//! encoded in [`Token::for_mode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::reference::TokenRef;
use crate::mode::ColorMode;

/// Broad value type of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Color,
    Size,
    Other,
}

impl TokenKind {
    /// Lowercase name, as written to the JSON tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Size => "size",
            TokenKind::Other => "other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping tag; exporters emit one comment-headed section per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Typography,
    Surface,
    Text,
    Brand,
    Primary,
    Link,
    Destructive,
    Success,
    Warning,
    Info,
    Highlight,
    Radius,
    Chart,
    #[serde(alias = "component-slot")]
    Component,
}

impl Category {
    /// All categories in export order.
    pub const ALL: [Category; 14] = [
        Category::Typography,
        Category::Surface,
        Category::Text,
        Category::Brand,
        Category::Primary,
        Category::Link,
        Category::Destructive,
        Category::Success,
        Category::Warning,
        Category::Info,
        Category::Highlight,
        Category::Radius,
        Category::Chart,
        Category::Component,
    ];

    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Typography => "typography",
            Category::Surface => "surface",
            Category::Text => "text",
            Category::Brand => "brand",
            Category::Primary => "primary",
            Category::Link => "link",
            Category::Destructive => "destructive",
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::Highlight => "highlight",
            Category::Radius => "radius",
            Category::Chart => "chart",
            Category::Component => "component",
        }
    }

    /// Section title used in stylesheet comment headers.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Typography => "Typography",
            Category::Surface => "Surfaces",
            Category::Text => "Text",
            Category::Brand => "Brand",
            Category::Primary => "Primary",
            Category::Link => "Links",
            Category::Destructive => "Destructive",
            Category::Success => "Success",
            Category::Warning => "Warning",
            Category::Info => "Info",
            Category::Highlight => "Highlight",
            Category::Radius => "Radius",
            Category::Chart => "Charts",
            Category::Component => "Component slots",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "component-slot" {
            return Ok(Category::Component);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown token category '{}'", s))
    }
}

/// Authoring form of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDef {
    /// Custom property name, `--wex-…`.
    pub name: String,
    /// Value type.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Grouping tag.
    pub category: Category,
    /// Light-mode default.
    pub light: String,
    /// Dark-mode default; falls back to `light`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    /// Upstream token the light default derives from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
    /// Upstream token the dark default derives from; falls back to `references`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_references: Option<String>,
}

impl TokenDef {
    /// Starts a definition with a light default.
    pub fn new(
        name: impl Into<String>,
        kind: TokenKind,
        category: Category,
        light: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            category,
            light: light.into(),
            dark: None,
            references: None,
            dark_references: None,
        }
    }

    /// Color token defaulting to a palette shade in each mode.
    ///
    /// `light` and `dark` are short forms (`"blue-700"`, `"white"`); both the
    /// default and the reference are filled in.
    pub fn palette(
        name: impl Into<String>,
        category: Category,
        light: &str,
        dark: &str,
    ) -> Self {
        let light_ref = TokenRef::parse(light);
        let mut def = Self::new(name, TokenKind::Color, category, light_ref.css_value());
        def.references = Some(light.to_string());
        if dark != light {
            def.dark = Some(TokenRef::parse(dark).css_value());
            def.dark_references = Some(dark.to_string());
        }
        def
    }

    /// Sets the dark default.
    pub fn dark(mut self, value: impl Into<String>) -> Self {
        self.dark = Some(value.into());
        self
    }

    /// Sets the light reference.
    pub fn references(mut self, target: impl Into<String>) -> Self {
        self.references = Some(target.into());
        self
    }

    /// Sets the dark reference.
    pub fn dark_references(mut self, target: impl Into<String>) -> Self {
        self.dark_references = Some(target.into());
        self
    }
}

/// Defaults for one mode, with the dark→light fallback already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeDefaults<'a> {
    /// Raw default string.
    pub value: &'a str,
    /// The default, classified.
    pub parsed: &'a TokenRef,
    /// Upstream reference, if any.
    pub reference: Option<&'a TokenRef>,
}

/// Registry form of a token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    name: String,
    kind: TokenKind,
    category: Category,
    light: String,
    light_parsed: TokenRef,
    dark: Option<(String, TokenRef)>,
    references: Option<TokenRef>,
    dark_references: Option<TokenRef>,
}

impl Token {
    /// Classifies a definition.
    pub fn from_def(def: TokenDef) -> Self {
        let light_parsed = TokenRef::parse(&def.light);
        let dark = def.dark.map(|d| {
            let parsed = TokenRef::parse(&d);
            (d, parsed)
        });
        Self {
            name: def.name,
            kind: def.kind,
            category: def.category,
            light: def.light,
            light_parsed,
            dark,
            references: def.references.as_deref().map(TokenRef::parse),
            dark_references: def.dark_references.as_deref().map(TokenRef::parse),
        }
    }

    /// Custom property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value type.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Grouping tag.
    pub fn category(&self) -> Category {
        self.category
    }

    /// True for size tokens whose name mentions `radius`.
    pub fn is_radius(&self) -> bool {
        self.kind == TokenKind::Size && self.name.contains("radius")
    }

    /// Defaults for a mode.
    ///
    /// Dark falls back to light for the value and, independently, for the
    /// reference.
    pub fn for_mode(&self, mode: ColorMode) -> ModeDefaults<'_> {
        let (value, parsed) = match (mode, &self.dark) {
            (ColorMode::Dark, Some((raw, parsed))) => (raw.as_str(), parsed),
            _ => (self.light.as_str(), &self.light_parsed),
        };
        let reference = match mode {
            ColorMode::Dark => self.dark_references.as_ref().or(self.references.as_ref()),
            ColorMode::Light => self.references.as_ref(),
        };
        ModeDefaults {
            value,
            parsed,
            reference,
        }
    }

    /// True when the dark defaults differ from the light ones.
    pub fn has_dark_variant(&self) -> bool {
        let light = self.for_mode(ColorMode::Light);
        let dark = self.for_mode(ColorMode::Dark);
        light.value != dark.value || light.reference != dark.reference
    }

    /// All references this token carries (light, then dark).
    pub(crate) fn reference_slots_mut(&mut self) -> [&mut Option<TokenRef>; 2] {
        [&mut self.references, &mut self.dark_references]
    }

    /// Converts back to the authoring form.
    pub fn to_def(&self) -> TokenDef {
        TokenDef {
            name: self.name.clone(),
            kind: self.kind,
            category: self.category,
            light: self.light.clone(),
            dark: self.dark.as_ref().map(|(raw, _)| raw.clone()),
            references: self.references.as_ref().map(TokenRef::short_form),
            dark_references: self.dark_references.as_ref().map(TokenRef::short_form),
        }
    }
}
