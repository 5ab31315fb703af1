//! # WEX Theme - Theme Export and Re-import
//!
//! `wex-theme` turns a WEX token catalog plus a user's overrides into the
//! files a web app loads, and reads those files back into an editing session.
//!
//! The token engine itself lives in [`wex_tokens`] and is re-exported here,
//! so most applications only depend on this crate.
//!
//! ## Core Concepts
//!
//! - [`ThemeEditor`]: An editing session: catalog, overrides and edit mode
//! - [`export_css_sheet`]: `:root` / `.dark` token stylesheet with the derived palette
//! - [`export_semantic_bridge`]: Static shadcn/ui variable mapping
//! - [`export_component_delta`]: Only the component slots the user changed
//! - [`export_json_tree`]: Nested JSON tree with the same values as the stylesheet
//! - [`parse_css_tokens`] / [`parse_json_tree`]: Read exports back
//!
//! ## Quick Start
//!
//! ```rust
//! use wex_theme::{ColorMode, ThemeEditor, TokenRegistry};
//!
//! let mut editor = ThemeEditor::new(TokenRegistry::builtin());
//! editor.set_token("--wex-palette-blue-500", "210 80% 60%");
//! editor.set_token("--wex-component-button-radius", "var(--wex-radius-full)");
//!
//! let css = editor.export_css_sheet();
//! assert!(css.contains("--wex-palette-blue-900: 210 80% 20%;"));
//!
//! let delta = editor.export_component_delta();
//! assert!(delta.contains("--wex-component-button-radius: var(--wex-radius-full);"));
//! ```
//!
//! ## Round Trips
//!
//! Exports can be imported into a fresh session, which then produces the same
//! exports. Only values that differ from what the session already resolves
//! to become overrides:
//!
//! ```rust
//! use wex_theme::{ThemeEditor, TokenRegistry};
//!
//! let mut original = ThemeEditor::new(TokenRegistry::builtin());
//! original.set_token("--wex-primary", "var(--wex-palette-purple-700)");
//! let css = original.export_css_sheet();
//!
//! let mut restored = ThemeEditor::new(TokenRegistry::builtin());
//! restored.import_css(&css).unwrap();
//! assert_eq!(restored.export_css_sheet(), css);
//! ```

mod editor;
pub mod export;
pub mod import;

pub use editor::{ExportArtifact, ThemeEditor};

pub use export::{
    export_component_delta, export_css_sheet, export_json_tree, export_semantic_bridge,
    flatten_json_tree, json_tree, ResolvedSheet, ResolvedToken, BRIDGE_MAPPINGS,
};

pub use import::{parse_css_tokens, parse_json_tree, ParsedTokens};

// Token engine re-exports
pub use wex_tokens;
pub use wex_tokens::{
    css_value, css_value_for, detect_color_mode, generate_ramp, resolve_value, set_mode_detector, Category,
    ColorMode, Hsl, OverrideStore, Overrides, Shade, SharedOverrideStore, Token, TokenDef,
    TokenError, TokenKind, TokenRegistry,
};
