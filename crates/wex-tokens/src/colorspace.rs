//! HSL color values and WCAG contrast math.
//!
//! Design tokens store colors as bare CSS HSL triplets (`"217 91% 45%"`), the
//! form that slots into `hsl(var(--token))` in a stylesheet. This module owns
//! that format: parsing, canonical formatting, and conversion to sRGB for
//! luminance and contrast calculations.
//!
//! # Triplet Format
//!
//! | Input | Parsed |
//! |-------|--------|
//! | `210 80% 60%` | `Hsl { h: 210, s: 80, l: 60 }` |
//! | `210, 80%, 60%` | same (commas tolerated) |
//! | `hsl(210 80% 60%)` | same (function wrapper tolerated) |
//! | `210 80 60` | same (`%` optional) |
//!
//! Formatting always produces the canonical `H S% L%` form, so parsing the
//! output of [`Hsl`]'s `Display` gives back the same value.
//!
//! # Contrast
//!
//! [`relative_luminance`] and [`contrast_ratio`] implement the WCAG 2.x
//! definitions exactly: sRGB gamma expansion, channel weights
//! 0.2126/0.7152/0.0722, and `(L1 + 0.05) / (L2 + 0.05)` with `L1 >= L2`.
//!
//! ```rust
//! use wex_tokens::colorspace::{contrast_ratio_hsl, ContrastGrade};
//!
//! let ratio = contrast_ratio_hsl("0 0% 100%", "0 0% 0%").unwrap();
//! assert!((ratio - 21.0).abs() < 0.01);
//! assert_eq!(ContrastGrade::from_ratio(ratio), ContrastGrade::Aaa);
//! ```

use std::fmt;

// ─── RGB type ───────────────────────────────────────────────────────────────

/// A simple 8-bit sRGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── HSL type ───────────────────────────────────────────────────────────────

/// An HSL color as stored in design tokens.
///
/// - `h`: hue in degrees, `0.0..=360.0`
/// - `s`: saturation percentage, `0.0..=100.0`
/// - `l`: lightness percentage, `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation percentage.
    pub s: f64,
    /// Lightness percentage.
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL value without range checks.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parses an HSL triplet string.
    ///
    /// Returns `None` when the input is malformed or a component is out of
    /// range. Callers treat `None` as "not usable as a color".
    pub fn parse(raw: &str) -> Option<Self> {
        let mut s = raw.trim();
        if let Some(inner) = s.strip_prefix("hsl(").and_then(|r| r.strip_suffix(')')) {
            s = inner.trim();
        }

        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            return None;
        }

        let h = parse_component(parts[0].strip_suffix("deg").unwrap_or(parts[0]))?;
        let sat = parse_component(parts[1].strip_suffix('%').unwrap_or(parts[1]))?;
        let l = parse_component(parts[2].strip_suffix('%').unwrap_or(parts[2]))?;

        if !(0.0..=360.0).contains(&h) || !(0.0..=100.0).contains(&sat) || !(0.0..=100.0).contains(&l)
        {
            return None;
        }
        Some(Self { h, s: sat, l })
    }

    /// Returns a copy with a different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Converts to 8-bit sRGB.
    pub fn to_rgb(&self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = (self.h % 360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f64| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb(channel(r1), channel(g1), channel(b1))
    }
}

fn parse_component(s: &str) -> Option<f64> {
    let value = s.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

// ─── Luminance & contrast ───────────────────────────────────────────────────

/// WCAG relative luminance of an sRGB color (0.0 for black, 1.0 for white).
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(color.0);
    let g = srgb_to_linear(color.1);
    let b = srgb_to_linear(color.2);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`.
///
/// Symmetric: the lighter color is always the numerator.
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let lum_fg = relative_luminance(fg);
    let lum_bg = relative_luminance(bg);
    let lighter = lum_fg.max(lum_bg);
    let darker = lum_fg.min(lum_bg);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two HSL triplet strings.
///
/// Returns `None` if either side does not parse.
pub fn contrast_ratio_hsl(fg: &str, bg: &str) -> Option<f64> {
    let fg = Hsl::parse(fg)?;
    let bg = Hsl::parse(bg)?;
    Some(contrast_ratio(fg.to_rgb(), bg.to_rgb()))
}

/// WCAG conformance bucket for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContrastGrade {
    /// Below 3:1.
    Fail,
    /// At least 3:1 (large text only).
    AaLarge,
    /// At least 4.5:1.
    Aa,
    /// At least 7:1.
    Aaa,
}

impl ContrastGrade {
    /// Buckets a ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            ContrastGrade::Aaa
        } else if ratio >= 4.5 {
            ContrastGrade::Aa
        } else if ratio >= 3.0 {
            ContrastGrade::AaLarge
        } else {
            ContrastGrade::Fail
        }
    }

    /// Short label used in accessibility summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ContrastGrade::Fail => "fail",
            ContrastGrade::AaLarge => "AA large",
            ContrastGrade::Aa => "AA",
            ContrastGrade::Aaa => "AAA",
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =====================================================================
    // Parsing
    // =====================================================================

    #[test]
    fn test_parse_canonical() {
        assert_eq!(Hsl::parse("210 80% 60%"), Some(Hsl::new(210.0, 80.0, 60.0)));
    }

    #[test]
    fn test_parse_lenient_forms() {
        let expected = Some(Hsl::new(210.0, 80.0, 60.0));
        assert_eq!(Hsl::parse("210, 80%, 60%"), expected);
        assert_eq!(Hsl::parse("hsl(210 80% 60%)"), expected);
        assert_eq!(Hsl::parse("  210 80 60  "), expected);
        assert_eq!(Hsl::parse("210deg 80% 60%"), expected);
    }

    #[test]
    fn test_parse_decimals() {
        assert_eq!(Hsl::parse("217.5 91% 45.5%"), Some(Hsl::new(217.5, 91.0, 45.5)));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(Hsl::parse(""), None);
        assert_eq!(Hsl::parse("210 80%"), None);
        assert_eq!(Hsl::parse("210 80% 60% 1"), None);
        assert_eq!(Hsl::parse("blue"), None);
        assert_eq!(Hsl::parse("var(--wex-palette-blue-500)"), None);
        assert_eq!(Hsl::parse("NaN 80% 60%"), None);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(Hsl::parse("400 80% 60%"), None);
        assert_eq!(Hsl::parse("210 120% 60%"), None);
        assert_eq!(Hsl::parse("210 80% -5%"), None);
    }

    #[test]
    fn test_format_canonical() {
        assert_eq!(Hsl::new(210.0, 80.0, 60.0).to_string(), "210 80% 60%");
        assert_eq!(Hsl::new(38.0, 92.0, 97.5).to_string(), "38 92% 97.5%");
    }

    // =====================================================================
    // Conversion
    // =====================================================================

    #[test]
    fn test_to_rgb_primaries() {
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Rgb(255, 255, 255));
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_rgb(), Rgb(0, 0, 0));
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Rgb(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb(0, 0, 255));
        assert_eq!(Hsl::new(360.0, 100.0, 50.0).to_rgb(), Rgb(255, 0, 0));
    }

    // =====================================================================
    // Contrast
    // =====================================================================

    #[test]
    fn test_white_on_black_is_21() {
        let ratio = contrast_ratio_hsl("0 0% 100%", "0 0% 0%").unwrap();
        assert!((ratio - 21.0).abs() < 0.01, "got {}", ratio);
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = contrast_ratio(Rgb(30, 64, 175), Rgb(255, 255, 255));
        let b = contrast_ratio(Rgb(255, 255, 255), Rgb(30, 64, 175));
        assert_eq!(a, b);
    }

    #[test]
    fn test_contrast_unparseable() {
        assert_eq!(contrast_ratio_hsl("white", "0 0% 0%"), None);
    }

    #[test]
    fn test_grade_buckets() {
        assert_eq!(ContrastGrade::from_ratio(21.0), ContrastGrade::Aaa);
        assert_eq!(ContrastGrade::from_ratio(4.5), ContrastGrade::Aa);
        assert_eq!(ContrastGrade::from_ratio(3.2), ContrastGrade::AaLarge);
        assert_eq!(ContrastGrade::from_ratio(1.0), ContrastGrade::Fail);
        assert_eq!(ContrastGrade::Aa.label(), "AA");
    }

    proptest! {
        #[test]
        fn test_self_contrast_is_one(h in 0u16..=360, s in 0u8..=100, l in 0u8..=100) {
            let color = Hsl::new(h as f64, s as f64, l as f64).to_string();
            let ratio = contrast_ratio_hsl(&color, &color).unwrap();
            prop_assert!((ratio - 1.0).abs() < 1e-9);
        }

        #[test]
        fn test_format_then_parse_is_identity(h in 0u16..=360, s in 0u8..=100, l in 0u8..=100) {
            let hsl = Hsl::new(h as f64, s as f64, l as f64);
            prop_assert_eq!(Hsl::parse(&hsl.to_string()), Some(hsl));
        }

        #[test]
        fn test_parse_never_panics(s in "\\PC*") {
            let _ = Hsl::parse(&s);
        }
    }
}
