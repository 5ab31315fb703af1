//! Palette ramp generation.
//!
//! Each palette hue is a family of ten tokens, `--wex-palette-{hue}-{shade}`
//! for shades 50 through 900. A family shares one hue and saturation; the
//! lightness of each shade comes from a fixed curve:
//!
//! | Shade | 50 | 100 | 200 | 300 | 400 | 500 | 600 | 700 | 800 | 900 |
//! |-------|----|-----|-----|-----|-----|-----|-----|-----|-----|-----|
//! | L (%) | 97 | 93  | 85  | 72  | 56  | 45  | 38  | 32  | 26  | 20  |
//!
//! # Overrides
//!
//! The 500 shade is the seed of the ramp. Overriding it with a parseable HSL
//! triplet moves the whole family to the override's hue and saturation; the
//! other shades keep their curve lightness. Overrides on any other shade are
//! used verbatim and do not affect their siblings.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use wex_tokens::palette::{generate_ramp, Shade};
//!
//! let mut overrides = BTreeMap::new();
//! overrides.insert("--wex-palette-blue-500".to_string(), "210 80% 60%".to_string());
//!
//! let ramp = generate_ramp("blue", 217.0, 91.0, &overrides);
//! assert_eq!(ramp.get(Shade::S500), Some("210 80% 60%"));
//! assert_eq!(ramp.get(Shade::S50), Some("210 80% 97%"));
//! assert_eq!(ramp.get(Shade::S900), Some("210 80% 20%"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::colorspace::Hsl;

/// Name prefix shared by every palette token.
pub const PALETTE_PREFIX: &str = "--wex-palette-";

// ─── Shades ─────────────────────────────────────────────────────────────────

/// One step of a palette ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    /// All shades, lightest first.
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// Numeric shade (`50`, `100`, … `900`).
    pub fn value(&self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }

    /// Inverse of [`value`](Self::value).
    pub fn from_value(value: u16) -> Option<Self> {
        Shade::ALL.into_iter().find(|s| s.value() == value)
    }

    /// Lightness percentage from the ramp curve.
    pub fn default_lightness(&self) -> f64 {
        match self {
            Shade::S50 => 97.0,
            Shade::S100 => 93.0,
            Shade::S200 => 85.0,
            Shade::S300 => 72.0,
            Shade::S400 => 56.0,
            Shade::S500 => 45.0,
            Shade::S600 => 38.0,
            Shade::S700 => 32.0,
            Shade::S800 => 26.0,
            Shade::S900 => 20.0,
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Shade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .ok()
            .and_then(Shade::from_value)
            .ok_or_else(|| format!("invalid palette shade '{}'", s))
    }
}

// ─── Hue catalog ────────────────────────────────────────────────────────────

/// Seed hue and saturation for one palette family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteHue {
    /// Family name (`"blue"`).
    pub name: &'static str,
    /// Seed hue in degrees.
    pub hue: f64,
    /// Seed saturation percentage.
    pub saturation: f64,
}

/// The palette families every theme carries, in export order.
pub const PALETTE_HUES: &[PaletteHue] = &[
    PaletteHue { name: "blue", hue: 217.0, saturation: 91.0 },
    PaletteHue { name: "green", hue: 142.0, saturation: 71.0 },
    PaletteHue { name: "amber", hue: 38.0, saturation: 92.0 },
    PaletteHue { name: "red", hue: 0.0, saturation: 84.0 },
    PaletteHue { name: "slate", hue: 215.0, saturation: 20.0 },
    PaletteHue { name: "cyan", hue: 189.0, saturation: 94.0 },
    PaletteHue { name: "purple", hue: 271.0, saturation: 81.0 },
];

/// Looks up a palette family by name.
pub fn palette_hue(name: &str) -> Option<&'static PaletteHue> {
    PALETTE_HUES.iter().find(|h| h.name == name)
}

/// Neutral palette entries that sit outside the ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Neutral {
    White,
    Black,
}

impl Neutral {
    /// Both neutrals, white first.
    pub const ALL: [Neutral; 2] = [Neutral::White, Neutral::Black];

    /// Short form (`"white"` / `"black"`).
    pub fn name(&self) -> &'static str {
        match self {
            Neutral::White => "white",
            Neutral::Black => "black",
        }
    }

    /// Parses the short form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "white" => Some(Neutral::White),
            "black" => Some(Neutral::Black),
            _ => None,
        }
    }

    /// Default HSL triplet.
    pub fn default_value(&self) -> &'static str {
        match self {
            Neutral::White => "0 0% 100%",
            Neutral::Black => "0 0% 0%",
        }
    }

    /// Full token name (`--wex-palette-white`).
    pub fn token_name(&self) -> String {
        format!("{}{}", PALETTE_PREFIX, self.name())
    }
}

impl fmt::Display for Neutral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full token name for a shade of a palette family.
pub fn palette_token_name(color: &str, shade: Shade) -> String {
    format!("{}{}-{}", PALETTE_PREFIX, color, shade)
}

// ─── Ramp generation ────────────────────────────────────────────────────────

/// One generated shade.
#[derive(Debug, Clone, PartialEq)]
pub struct RampEntry {
    /// Which step of the ramp.
    pub shade: Shade,
    /// Full token name.
    pub name: String,
    /// HSL triplet (or the verbatim override).
    pub value: String,
}

/// The ten shades of one palette family, lightest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRamp {
    color: String,
    entries: Vec<RampEntry>,
}

impl PaletteRamp {
    /// Family name.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Value of one shade.
    pub fn get(&self, shade: Shade) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.shade == shade)
            .map(|e| e.value.as_str())
    }

    /// Entries in shade order.
    pub fn entries(&self) -> &[RampEntry] {
        &self.entries
    }

    /// Token name → value.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), e.value.clone()))
            .collect()
    }
}

/// Generates the ramp for one palette family.
///
/// `overrides` is the override map for a single mode, keyed by full token
/// name. Deterministic: the same inputs always give the same ramp.
pub fn generate_ramp(
    color_name: &str,
    base_hue: f64,
    base_saturation: f64,
    overrides: &BTreeMap<String, String>,
) -> PaletteRamp {
    let mut hue = base_hue;
    let mut saturation = base_saturation;

    if let Some(seed) = overrides.get(&palette_token_name(color_name, Shade::S500)) {
        match Hsl::parse(seed) {
            Some(parsed) => {
                hue = parsed.h;
                saturation = parsed.s;
            }
            None => {
                tracing::debug!(
                    color = color_name,
                    value = %seed,
                    "500 override is not an HSL triplet; ramp keeps its base hue"
                );
            }
        }
    }

    let entries = Shade::ALL
        .into_iter()
        .map(|shade| {
            let name = palette_token_name(color_name, shade);
            let value = match overrides.get(&name) {
                Some(explicit) => explicit.trim().to_string(),
                None => Hsl::new(hue, saturation, shade.default_lightness()).to_string(),
            };
            RampEntry { shade, name, value }
        })
        .collect();

    PaletteRamp {
        color: color_name.to_string(),
        entries,
    }
}

/// Every palette family plus the neutrals, for one mode's overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPalette {
    ramps: Vec<PaletteRamp>,
    neutrals: Vec<(Neutral, String, String)>,
}

impl DerivedPalette {
    /// Ramps in [`PALETTE_HUES`] order.
    pub fn ramps(&self) -> &[PaletteRamp] {
        &self.ramps
    }

    /// All `(token name, value)` pairs: ramps first, then white and black.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ramps
            .iter()
            .flat_map(|r| r.entries().iter().map(|e| (e.name.as_str(), e.value.as_str())))
            .chain(
                self.neutrals
                    .iter()
                    .map(|(_, name, value)| (name.as_str(), value.as_str())),
            )
    }

    /// Looks up a palette token's value by full name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// Runs [`generate_ramp`] for every catalog hue and appends the neutrals.
pub fn derive_palette(overrides: &BTreeMap<String, String>) -> DerivedPalette {
    let ramps = PALETTE_HUES
        .iter()
        .map(|h| generate_ramp(h.name, h.hue, h.saturation, overrides))
        .collect();

    let neutrals = Neutral::ALL
        .into_iter()
        .map(|n| {
            let name = n.token_name();
            let value = overrides
                .get(&name)
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| n.default_value().to_string());
            (n, name, value)
        })
        .collect();

    DerivedPalette { ramps, neutrals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn lightness(ramp: &PaletteRamp, shade: Shade) -> f64 {
        Hsl::parse(ramp.get(shade).unwrap()).unwrap().l
    }

    #[test]
    fn test_shade_round_trip() {
        for shade in Shade::ALL {
            assert_eq!(shade.to_string().parse::<Shade>(), Ok(shade));
        }
        assert!("550".parse::<Shade>().is_err());
        assert!("abc".parse::<Shade>().is_err());
    }

    #[test]
    fn test_default_ramp_uses_curve() {
        let ramp = generate_ramp("blue", 217.0, 91.0, &BTreeMap::new());
        assert_eq!(ramp.entries().len(), 10);
        assert_eq!(ramp.get(Shade::S500), Some("217 91% 45%"));
        assert_eq!(ramp.get(Shade::S50), Some("217 91% 97%"));
        assert_eq!(ramp.get(Shade::S900), Some("217 91% 20%"));
        assert_eq!(ramp.entries()[0].name, "--wex-palette-blue-50");
    }

    #[test]
    fn test_500_override_cascades() {
        let ov = overrides(&[("--wex-palette-blue-500", "210 80% 60%")]);
        let ramp = generate_ramp("blue", 217.0, 91.0, &ov);

        for entry in ramp.entries() {
            let hsl = Hsl::parse(&entry.value).unwrap();
            assert_eq!(hsl.h, 210.0);
            assert_eq!(hsl.s, 80.0);
        }
        assert_eq!(lightness(&ramp, Shade::S500), 60.0);
        assert_eq!(lightness(&ramp, Shade::S50), 97.0);
        assert_eq!(lightness(&ramp, Shade::S900), 20.0);
    }

    #[test]
    fn test_unparseable_500_falls_back() {
        let ov = overrides(&[("--wex-palette-green-500", "var(--brand)")]);
        let ramp = generate_ramp("green", 142.0, 71.0, &ov);
        assert_eq!(ramp.get(Shade::S500), Some("var(--brand)"));
        assert_eq!(ramp.get(Shade::S400), Some("142 71% 56%"));
    }

    #[test]
    fn test_non_500_override_is_isolated() {
        let ov = overrides(&[("--wex-palette-red-200", "10 50% 80%")]);
        let ramp = generate_ramp("red", 0.0, 84.0, &ov);
        assert_eq!(ramp.get(Shade::S200), Some("10 50% 80%"));
        assert_eq!(ramp.get(Shade::S100), Some("0 84% 93%"));
        assert_eq!(ramp.get(Shade::S500), Some("0 84% 45%"));
    }

    #[test]
    fn test_explicit_values_are_trimmed() {
        let ov = overrides(&[("--wex-palette-red-200", " 10 50% 80% ")]);
        let ramp = generate_ramp("red", 0.0, 84.0, &ov);
        assert_eq!(ramp.get(Shade::S200), Some("10 50% 80%"));
    }

    #[test]
    fn test_explicit_shade_wins_over_cascade() {
        let ov = overrides(&[
            ("--wex-palette-blue-500", "210 80% 60%"),
            ("--wex-palette-blue-700", "0 0% 10%"),
        ]);
        let ramp = generate_ramp("blue", 217.0, 91.0, &ov);
        assert_eq!(ramp.get(Shade::S700), Some("0 0% 10%"));
        assert_eq!(ramp.get(Shade::S600), Some("210 80% 38%"));
    }

    #[test]
    fn test_overrides_for_other_families_ignored() {
        let ov = overrides(&[("--wex-palette-red-500", "10 50% 50%")]);
        let ramp = generate_ramp("blue", 217.0, 91.0, &ov);
        assert_eq!(ramp.get(Shade::S500), Some("217 91% 45%"));
    }

    #[test]
    fn test_derive_palette_covers_catalog() {
        let palette = derive_palette(&BTreeMap::new());
        assert_eq!(palette.ramps().len(), PALETTE_HUES.len());
        assert_eq!(palette.entries().count(), PALETTE_HUES.len() * 10 + 2);
        assert_eq!(palette.get("--wex-palette-white"), Some("0 0% 100%"));
        assert_eq!(palette.get("--wex-palette-amber-500"), Some("38 92% 45%"));
    }

    #[test]
    fn test_derive_palette_neutral_override() {
        let ov = overrides(&[("--wex-palette-black", "222 47% 11%")]);
        let palette = derive_palette(&ov);
        assert_eq!(palette.get("--wex-palette-black"), Some("222 47% 11%"));
    }

    proptest! {
        #[test]
        fn test_ramp_is_deterministic(h in 0u16..=360, s in 0u8..=100) {
            let a = generate_ramp("blue", h as f64, s as f64, &BTreeMap::new());
            let b = generate_ramp("blue", h as f64, s as f64, &BTreeMap::new());
            prop_assert_eq!(&a, &b);
            let expected = Hsl::new(h as f64, s as f64, 45.0).to_string();
            prop_assert_eq!(a.get(Shade::S500), Some(expected.as_str()));
        }
    }
}
