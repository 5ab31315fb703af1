//! # WEX Tokens - Design Token Engine
//!
//! `wex-tokens` holds the WEX design-token catalog and the rules for turning a
//! set of user overrides into effective token values, for light and dark mode.
//!
//! This crate is the engine behind the `wex-theme` exporters, but can be used
//! on its own for live previews and contrast checks.
//!
//! ## Core Concepts
//!
//! - [`TokenRegistry`]: Immutable catalog of tokens, built-in or loaded from YAML
//! - [`Token`]: One CSS custom property with light/dark defaults and references
//! - [`OverrideStore`]: The user's edits, keyed by token name and [`ColorMode`]
//! - [`resolve_value`]: Effective value of a token under a set of overrides
//! - [`generate_ramp`]: 50–900 palette ramp from a single seed color
//! - [`Hsl`]: HSL triplet parsing and WCAG contrast math
//!
//! ## Quick Start
//!
//! ```rust
//! use wex_tokens::{css_value_for, resolve_value, ColorMode, OverrideStore, TokenRegistry};
//!
//! let registry = TokenRegistry::builtin();
//! let mut store = OverrideStore::new();
//! store.set_token("--wex-primary", "var(--wex-palette-green-700)", ColorMode::Light);
//!
//! let primary = registry.get("--wex-primary").unwrap();
//! let resolved = resolve_value(primary, store.overrides(), ColorMode::Light);
//! assert_eq!(resolved, "green-700");
//! assert_eq!(css_value_for(primary, &resolved), "var(--wex-palette-green-700)");
//! ```
//!
//! ## Palette Ramps
//!
//! Every palette family is a ten-step ramp derived from a hue and saturation
//! with a fixed lightness curve. Overriding the 500 shade re-seeds the whole
//! ramp:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use wex_tokens::{generate_ramp, Shade};
//!
//! let mut overrides = BTreeMap::new();
//! overrides.insert("--wex-palette-blue-500".to_string(), "210 80% 60%".to_string());
//!
//! let ramp = generate_ramp("blue", 217.0, 91.0, &overrides);
//! assert_eq!(ramp.get(Shade::S500), Some("210 80% 60%"));
//! assert_eq!(ramp.get(Shade::S50), Some("210 80% 97%"));
//! ```
//!
//! ## Custom Catalogs
//!
//! The built-in catalog covers the WEX semantic and component tokens. Other
//! catalogs load from YAML with [`TokenRegistry::from_yaml`] or
//! [`TokenRegistry::from_file`]; [`TokenRegistry::try_new`] rejects dangling
//! references and reference cycles.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (registry warnings, palette fallbacks)
//! and never installs a subscriber.

pub mod colorspace;
mod error;
mod mode;
mod overrides;
pub mod palette;
mod resolve;
pub mod token;

// Error types
pub use error::{RegistryError, Result, TokenError};

// Mode exports
pub use mode::{detect_color_mode, set_mode_detector, ColorMode};

// Color exports
pub use colorspace::{contrast_ratio, contrast_ratio_hsl, ContrastGrade, Hsl, Rgb};

// Palette exports
pub use palette::{
    derive_palette, generate_ramp, palette_hue, palette_token_name, DerivedPalette, Neutral,
    PaletteHue, PaletteRamp, RampEntry, Shade, PALETTE_HUES, PALETTE_PREFIX,
};

// Token exports
pub use token::{
    css_value, is_palette_token, Category, Component, ComponentSlot, ModeDefaults, PaletteRef,
    Token, TokenDef, TokenKind, TokenRef, TokenRegistry, COMPONENT_PREFIX, RADIUS_PREFIX,
};

// Override exports
pub use overrides::{ModeOverrides, OverrideStore, Overrides, SharedOverrideStore};

// Resolver exports
pub use resolve::{concrete_color, css_value_for, resolve_value, token_contrast};
