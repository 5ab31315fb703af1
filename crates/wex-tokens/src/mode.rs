//! Light/dark color mode.
//!
//! Every token carries a light default and an optional dark default, and
//! every override is stored against one mode. [`ColorMode`] is the key for
//! both.
//!
//! [`detect_color_mode`] queries the OS for the user's preferred scheme so an
//! editor session can start in the mode the user is looking at. Override it
//! for testing with [`set_mode_detector`]:
//!
//! ```rust
//! use wex_tokens::{detect_color_mode, set_mode_detector, ColorMode};
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The mode a token value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light mode (`:root`).
    Light,
    /// Dark mode (`.dark` / `prefers-color-scheme: dark`).
    Dark,
}

impl ColorMode {
    /// Both modes, light first.
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    /// Lowercase name (`"light"` / `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{}'", other)),
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`detect_color_mode`].
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Detects the user's preferred color mode.
///
/// Falls back to [`ColorMode::Light`] when the OS gives no answer.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}
