//! Theme editing sessions.
//!
//! A [`ThemeEditor`] is what a theme-builder UI holds: the catalog it edits,
//! the user's overrides, and the mode being edited. Every read goes through
//! the same resolver, so a preview swatch and the exported files agree.
//!
//! ```rust
//! use wex_theme::{ColorMode, ThemeEditor, TokenRegistry};
//!
//! let mut editor = ThemeEditor::new(TokenRegistry::builtin());
//! editor.set_token("--wex-primary", "var(--wex-palette-purple-700)");
//! assert_eq!(editor.resolve("--wex-primary").as_deref(), Some("purple-700"));
//!
//! editor.set_mode(ColorMode::Dark);
//! assert_eq!(editor.resolve("--wex-primary").as_deref(), Some("blue-400"));
//!
//! let files = editor.artifacts();
//! assert_eq!(files[0].file_name, "tokens.css");
//! ```

use std::path::{Path, PathBuf};

use wex_tokens::{
    concrete_color, css_value_for, derive_palette, detect_color_mode, generate_ramp, is_palette_token,
    palette_hue, resolve_value, token_contrast, ColorMode, Hsl, OverrideStore, Overrides,
    PaletteRamp, Shade, TokenError, TokenRegistry, PALETTE_PREFIX,
};

use crate::export::{
    build_tree, export_semantic_bridge, render_component_delta, render_css_sheet, ResolvedSheet,
};
use crate::import::{parse_css_tokens, parse_json_tree, ParsedTokens};

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name.
    pub file_name: &'static str,
    /// File contents.
    pub contents: String,
}

/// An editing session over a token catalog.
#[derive(Debug, Clone)]
pub struct ThemeEditor<'r> {
    registry: &'r TokenRegistry,
    store: OverrideStore,
    mode: ColorMode,
}

impl<'r> ThemeEditor<'r> {
    /// Starts an empty session in light mode.
    pub fn new(registry: &'r TokenRegistry) -> Self {
        Self {
            registry,
            store: OverrideStore::new(),
            mode: ColorMode::Light,
        }
    }

    /// Starts an empty session in the OS's preferred mode.
    pub fn with_detected_mode(registry: &'r TokenRegistry) -> Self {
        Self::new(registry).mode(detect_color_mode())
    }

    /// Sets the edit mode (builder form).
    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Resumes a saved session.
    pub fn with_overrides(registry: &'r TokenRegistry, overrides: Overrides) -> Self {
        Self {
            registry,
            store: OverrideStore::from_overrides(overrides),
            mode: ColorMode::Light,
        }
    }

    /// The catalog being edited.
    pub fn registry(&self) -> &'r TokenRegistry {
        self.registry
    }

    /// The mode edits and reads apply to.
    pub fn current_mode(&self) -> ColorMode {
        self.mode
    }

    /// Switches the edit mode.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    // ─── Overrides ──────────────────────────────────────────────────────────

    /// Overrides a token in the current mode.
    pub fn set_token(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.store.set_token(name, value, self.mode);
    }

    /// Overrides a token in a specific mode.
    pub fn set_token_for(&mut self, name: impl Into<String>, value: impl Into<String>, mode: ColorMode) {
        self.store.set_token(name, value, mode);
    }

    /// Drops every override in both modes.
    pub fn reset_all(&mut self) {
        self.store.reset_all();
    }

    /// True if the session has any override.
    pub fn has_overrides(&self) -> bool {
        self.store.has_overrides()
    }

    /// Borrowed view of the overrides.
    pub fn overrides(&self) -> &Overrides {
        self.store.overrides()
    }

    /// Copy of the overrides, for saving the session.
    pub fn get_all_overrides(&self) -> Overrides {
        self.store.get_all_overrides()
    }

    // ─── Reads ──────────────────────────────────────────────────────────────

    /// Resolved value of a registry token in the current mode.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.resolve_for(name, self.mode)
    }

    /// Resolved value of a registry token in a mode.
    pub fn resolve_for(&self, name: &str, mode: ColorMode) -> Option<String> {
        let token = self.registry.get(name)?;
        Some(resolve_value(token, self.store.overrides(), mode))
    }

    /// The ramp of a palette family under the current mode's overrides.
    pub fn generate_ramp(&self, color: &str) -> Option<PaletteRamp> {
        let hue = palette_hue(color)?;
        Some(generate_ramp(
            hue.name,
            hue.hue,
            hue.saturation,
            self.store.overrides().for_mode(self.mode),
        ))
    }

    /// Concrete color of a token or palette entry in the current mode.
    pub fn concrete_color(&self, name: &str) -> Option<Hsl> {
        concrete_color(self.registry, self.store.overrides(), name, self.mode)
    }

    /// WCAG contrast ratio between two tokens in the current mode.
    pub fn contrast(&self, foreground: &str, background: &str) -> Option<f64> {
        token_contrast(
            self.registry,
            self.store.overrides(),
            foreground,
            background,
            self.mode,
        )
    }

    // ─── Export ─────────────────────────────────────────────────────────────

    /// `tokens.css`.
    pub fn export_css_sheet(&self) -> String {
        render_css_sheet(&self.sheet())
    }

    /// `shadcn-bridge.css`.
    pub fn export_semantic_bridge(&self) -> String {
        export_semantic_bridge()
    }

    /// `components-bridge.css`.
    pub fn export_component_delta(&self) -> String {
        render_component_delta(&self.sheet(), self.store.overrides())
    }

    /// `tokens.json`.
    pub fn export_json_tree(&self) -> String {
        format!("{:#}", build_tree(&self.sheet()))
    }

    /// All four artifacts, resolved once.
    pub fn artifacts(&self) -> Vec<ExportArtifact> {
        let sheet = self.sheet();
        vec![
            ExportArtifact {
                file_name: "tokens.css",
                contents: render_css_sheet(&sheet),
            },
            ExportArtifact {
                file_name: "shadcn-bridge.css",
                contents: export_semantic_bridge(),
            },
            ExportArtifact {
                file_name: "components-bridge.css",
                contents: render_component_delta(&sheet, self.store.overrides()),
            },
            ExportArtifact {
                file_name: "tokens.json",
                contents: format!("{:#}", build_tree(&sheet)),
            },
        ]
    }

    /// Writes every artifact into `dir`, returning the written paths.
    pub fn write_artifacts<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>, TokenError> {
        let dir = dir.as_ref();
        let mut written = Vec::new();
        for artifact in self.artifacts() {
            let path = dir.join(artifact.file_name);
            std::fs::write(&path, artifact.contents).map_err(|e| TokenError::Io {
                path: path.clone(),
                source: e,
            })?;
            written.push(path);
        }
        tracing::debug!(dir = %dir.display(), files = written.len(), "wrote theme artifacts");
        Ok(written)
    }

    fn sheet(&self) -> ResolvedSheet<'r> {
        ResolvedSheet::new(self.registry, self.store.overrides())
    }

    // ─── Import ─────────────────────────────────────────────────────────────

    /// Applies a `tokens.css` or `components-bridge.css` export.
    ///
    /// Returns the number of overrides stored.
    pub fn import_css(&mut self, css: &str) -> Result<usize, TokenError> {
        let parsed = parse_css_tokens(css)?;
        Ok(self.apply(&parsed))
    }

    /// Applies a `tokens.json` export.
    ///
    /// Returns the number of overrides stored.
    pub fn import_json(&mut self, json: &str) -> Result<usize, TokenError> {
        let parsed = parse_json_tree(json)?;
        Ok(self.apply(&parsed))
    }

    /// Stores an override wherever an imported value differs from what the
    /// session already resolves to.
    ///
    /// Palette seeds (500) go first so the other shades are compared against
    /// the regenerated ramps.
    pub fn apply(&mut self, parsed: &ParsedTokens) -> usize {
        let mut stored = 0;
        for mode in ColorMode::ALL {
            let values = parsed.effective(mode);

            let seed_suffix = format!("-{}", Shade::S500);
            for (name, value) in values.iter().filter(|(name, _)| {
                is_palette_token(name) && name.ends_with(&seed_suffix)
            }) {
                stored += self.import_palette_value(name, value, mode);
            }
            for (name, value) in values.iter().filter(|(name, _)| {
                is_palette_token(name) && !name.ends_with(&seed_suffix)
            }) {
                stored += self.import_palette_value(name, value, mode);
            }

            for (name, value) in &values {
                let value = value.trim();
                let Some(token) = self.registry.get(name) else {
                    if !name.starts_with(PALETTE_PREFIX) {
                        tracing::trace!(token = %name, "ignoring name outside the catalog");
                    }
                    continue;
                };
                let resolved = resolve_value(token, self.store.overrides(), mode);
                let current = css_value_for(token, &resolved);
                if current != value {
                    self.store.set_token(*name, value, mode);
                    stored += 1;
                }
            }
        }
        tracing::debug!(stored, "imported theme overrides");
        stored
    }

    fn import_palette_value(&mut self, name: &str, value: &str, mode: ColorMode) -> usize {
        let value = value.trim();
        let palette = derive_palette(self.store.overrides().for_mode(mode));
        if palette.get(name) == Some(value) {
            return 0;
        }
        self.store.set_token(name, value, mode);
        1
    }
}
