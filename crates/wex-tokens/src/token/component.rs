//! Component slot naming.
//!
//! Component tokens follow `--wex-component-{component}-{variant}-{property}`:
//!
//! - `--wex-component-button-primary-bg` → button / primary / bg
//! - `--wex-component-badge-neutral-fg` → badge / default / fg
//! - `--wex-component-card-radius` → card / (none) / radius
//!
//! The `neutral` variant is reported as `default`.

use std::fmt;
use std::str::FromStr;

/// Name prefix shared by every component slot token.
pub const COMPONENT_PREFIX: &str = "--wex-component-";

/// Components that carry slot tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    Button,
    Card,
    Input,
    Badge,
    Alert,
}

impl Component {
    /// All components in catalog order.
    pub const ALL: [Component; 5] = [
        Component::Button,
        Component::Card,
        Component::Input,
        Component::Badge,
        Component::Alert,
    ];

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Button => "button",
            Component::Card => "card",
            Component::Input => "input",
            Component::Badge => "badge",
            Component::Alert => "alert",
        }
    }

    /// Token name prefix for this component (`--wex-component-button-`).
    pub fn prefix(&self) -> String {
        format!("{}{}-", COMPONENT_PREFIX, self.as_str())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("unknown component '{}'", s))
    }
}

/// A component token name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSlot {
    /// Component segment as written (`"button"`).
    pub component: String,
    /// Variant, with `neutral` normalized to `default`.
    pub variant: Option<String>,
    /// Property segment(s) (`"bg"`, `"focus-ring"`).
    pub property: String,
}

impl ComponentSlot {
    /// Splits a component token name. Returns `None` for other tokens.
    pub fn parse(name: &str) -> Option<Self> {
        let rest = name.strip_prefix(COMPONENT_PREFIX)?;
        let mut parts = rest.split('-').filter(|p| !p.is_empty());
        let component = parts.next()?.to_string();
        let tail: Vec<&str> = parts.collect();

        let (variant, property) = match tail.as_slice() {
            [] => return None,
            [property] => (None, property.to_string()),
            [variant, property @ ..] => {
                let variant = if *variant == "neutral" {
                    "default".to_string()
                } else {
                    variant.to_string()
                };
                (Some(variant), property.join("-"))
            }
        };

        Some(Self {
            component,
            variant,
            property,
        })
    }

    /// The component, when it is one of the known ones.
    pub fn known_component(&self) -> Option<Component> {
        self.component.parse().ok()
    }
}
