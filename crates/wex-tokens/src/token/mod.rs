//! Design tokens and the catalog that holds them.
//!
//! A token is a named CSS custom property (`--wex-primary`) with a light-mode
//! default, an optional dark-mode default, and optional upstream references
//! recording which palette shade or radius step the default derives from.
//!
//! ## Layers
//!
//! The catalog is layered the same way a stylesheet is:
//!
//! - **Palette** (`--wex-palette-blue-700`): generated ramps, see [`crate::palette`]
//! - **Semantic** (`--wex-primary`, `--wex-border`): point at palette shades
//! - **Component slots** (`--wex-component-button-primary-bg`): point at
//!   semantic tokens or palette shades
//!
//! ## Parsing Once
//!
//! Defaults and references are classified into [`TokenRef`] variants when a
//! [`Token`] is built, so resolution is a match over variants rather than
//! repeated string inspection.

mod catalog;
mod component;
mod definition;
mod reference;
mod registry;

pub use component::{Component, ComponentSlot, COMPONENT_PREFIX};
pub use definition::{Category, ModeDefaults, Token, TokenDef, TokenKind};
pub use reference::{css_value, PaletteRef, TokenRef, RADIUS_PREFIX};
pub(crate) use reference::embedded_radius_var;
pub use registry::{is_palette_token, TokenRegistry};
