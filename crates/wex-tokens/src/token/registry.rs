//! The token catalog.
//!
//! [`TokenRegistry`] holds every design token in declaration order. It is
//! immutable once built and safe to share across threads; the built-in WEX
//! catalog is constructed once on first use via [`TokenRegistry::builtin`].
//!
//! # Reference Checking
//!
//! A token's `references` must point at something that exists: a palette
//! shade of a known family, a neutral, or another token in the catalog.
//! [`TokenRegistry::new`] drops references that point nowhere (logging a
//! warning) so resolution falls back to the literal default.
//! [`TokenRegistry::try_new`] and [`TokenRegistry::validate`] report them
//! instead, together with duplicate names and semantic reference cycles.
//!
//! # Custom Catalogs
//!
//! ```rust
//! use wex_tokens::{Category, TokenRegistry};
//!
//! let registry = TokenRegistry::from_yaml(r#"
//! - name: --wex-radius-md
//!   type: size
//!   category: radius
//!   light: 6px
//! - name: --wex-primary
//!   type: color
//!   category: primary
//!   light: var(--wex-palette-blue-700)
//!   references: blue-700
//! "#).unwrap();
//!
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.tokens(Some(Category::Radius)).len(), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;

use super::catalog::builtin_definitions;
use super::component::Component;
use super::definition::{Category, Token, TokenDef};
use super::reference::{PaletteRef, TokenRef};
use crate::error::{RegistryError, Result, TokenError};
use crate::mode::ColorMode;
use crate::palette::{palette_hue, Neutral, PALETTE_PREFIX};

static BUILTIN: Lazy<TokenRegistry> = Lazy::new(|| TokenRegistry::new(builtin_definitions()));

/// Immutable, ordered collection of tokens.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    index: HashMap<String, usize>,
}

impl TokenRegistry {
    /// The built-in WEX catalog.
    pub fn builtin() -> &'static TokenRegistry {
        &BUILTIN
    }

    /// Builds a registry, repairing what it can.
    ///
    /// Later duplicates are ignored and dangling references are dropped; both
    /// are logged at `warn` level.
    pub fn new(defs: Vec<TokenDef>) -> Self {
        let mut registry = Self::collect(defs);

        let known: HashSet<String> = registry.index.keys().cloned().collect();
        for token in &mut registry.tokens {
            let name = token.name().to_string();
            for slot in token.reference_slots_mut() {
                let dangling = slot
                    .as_ref()
                    .map(|r| !is_known_target(r, &known))
                    .unwrap_or(false);
                if dangling {
                    tracing::warn!(
                        token = %name,
                        reference = ?slot,
                        "dropping reference to unknown token"
                    );
                    *slot = None;
                }
            }
        }

        tracing::debug!(tokens = registry.len(), "token registry built");
        registry
    }

    /// Builds a registry, rejecting any inconsistency.
    pub fn try_new(defs: Vec<TokenDef>) -> Result<Self> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();
        for def in &defs {
            if !def.name.starts_with("--") {
                return Err(TokenError::InvalidDefinition {
                    name: def.name.clone(),
                    message: "token names must be custom properties starting with '--'"
                        .to_string(),
                });
            }
            if !seen.insert(def.name.clone()) {
                errors.push(RegistryError::DuplicateToken(def.name.clone()));
            }
        }

        let registry = Self::collect(defs);
        if let Err(mut found) = registry.validate() {
            errors.append(&mut found);
        }

        if errors.is_empty() {
            Ok(registry)
        } else {
            Err(TokenError::Registry(errors))
        }
    }

    /// Parses a YAML list of token definitions.
    ///
    /// Lenient like [`new`](Self::new); call [`validate`](Self::validate) to
    /// surface problems.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let defs: Vec<TokenDef> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(defs))
    }

    /// Loads a YAML catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content).map_err(|e| e.with_path(path))
    }

    /// Serializes the catalog back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        let defs: Vec<TokenDef> = self.tokens.iter().map(Token::to_def).collect();
        Ok(serde_yaml::to_string(&defs)?)
    }

    fn collect(defs: Vec<TokenDef>) -> Self {
        let mut tokens = Vec::with_capacity(defs.len());
        let mut index = HashMap::with_capacity(defs.len());
        for def in defs {
            if index.contains_key(&def.name) {
                tracing::warn!(token = %def.name, "ignoring duplicate token definition");
                continue;
            }
            index.insert(def.name.clone(), tokens.len());
            tokens.push(Token::from_def(def));
        }
        Self { tokens, index }
    }

    /// Looks up a token by name.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.index.get(name).map(|&i| &self.tokens[i])
    }

    /// True if the catalog defines `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in declaration order, optionally filtered by category.
    pub fn tokens(&self, category: Option<Category>) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|t| category.map_or(true, |c| t.category() == c))
            .collect()
    }

    /// Every token whose name carries the component's prefix, in declaration order.
    pub fn component_tokens(&self, component: Component) -> Vec<&Token> {
        let prefix = component.prefix();
        self.tokens
            .iter()
            .filter(|t| t.name().starts_with(&prefix))
            .collect()
    }

    /// Checks references and semantic chains.
    pub fn validate(&self) -> std::result::Result<(), Vec<RegistryError>> {
        let known: HashSet<String> = self.index.keys().cloned().collect();
        let mut errors = Vec::new();

        for token in &self.tokens {
            for mode in ColorMode::ALL {
                let defaults = token.for_mode(mode);
                if let Some(reference) = defaults.reference {
                    if !is_known_target(reference, &known) {
                        let error = RegistryError::UnknownReference {
                            token: token.name().to_string(),
                            target: reference
                                .target()
                                .unwrap_or_else(|| reference.short_form()),
                        };
                        if !errors.contains(&error) {
                            errors.push(error);
                        }
                    }
                }
            }
        }

        for token in &self.tokens {
            for mode in ColorMode::ALL {
                if let Some(path) = self.find_cycle(token, mode) {
                    let error = RegistryError::CycleDetected { path };
                    if !errors.contains(&error) {
                        errors.push(error);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Follows semantic defaults from `start`; returns the loop if one exists.
    fn find_cycle(&self, start: &Token, mode: ColorMode) -> Option<Vec<String>> {
        let mut path = vec![start.name().to_string()];
        let mut current = start;
        loop {
            let target = match current.for_mode(mode).parsed {
                TokenRef::Semantic(_) => current.for_mode(mode).parsed.target()?,
                _ => return None,
            };
            path.push(target.clone());
            if target == start.name() {
                return Some(path);
            }
            if path[..path.len() - 1].contains(&target) {
                // Loop that doesn't include `start`; reported from its own members.
                return None;
            }
            current = self.get(&target)?;
        }
    }
}

/// True if `name` is a palette shade of a known family or a neutral.
pub fn is_palette_token(name: &str) -> bool {
    match name.strip_prefix(PALETTE_PREFIX) {
        Some(rest) => {
            Neutral::from_name(rest).is_some()
                || PaletteRef::parse_short(rest).is_some_and(|p| palette_hue(&p.hue).is_some())
        }
        None => false,
    }
}

fn is_known_target(reference: &TokenRef, known: &HashSet<String>) -> bool {
    match reference {
        TokenRef::Palette(p) => palette_hue(&p.hue).is_some(),
        TokenRef::Neutral(_) => true,
        TokenRef::Radius(_) | TokenRef::Semantic(_) => reference
            .target()
            .map(|t| known.contains(&t))
            .unwrap_or(false),
        TokenRef::Literal(_) => false,
    }
}
