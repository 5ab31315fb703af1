//! The shadcn/ui semantic bridge (`shadcn-bridge.css`).
//!
//! Maps the variable names shadcn/ui components read onto WEX tokens. The
//! mapping is static: it contains only `var()` references, so switching the
//! WEX tokens to dark mode switches the bridge with them.

use super::push_declaration;

/// `(shadcn variable, WEX token)` pairs, in output order.
pub const BRIDGE_MAPPINGS: &[(&str, &str)] = &[
    ("--background", "--wex-background"),
    ("--foreground", "--wex-foreground"),
    ("--card", "--wex-card"),
    ("--card-foreground", "--wex-card-foreground"),
    ("--popover", "--wex-popover"),
    ("--popover-foreground", "--wex-popover-foreground"),
    ("--primary", "--wex-primary"),
    ("--primary-foreground", "--wex-primary-foreground"),
    ("--secondary", "--wex-secondary"),
    ("--secondary-foreground", "--wex-secondary-foreground"),
    ("--muted", "--wex-muted"),
    ("--muted-foreground", "--wex-muted-foreground"),
    ("--accent", "--wex-accent"),
    ("--accent-foreground", "--wex-accent-foreground"),
    ("--destructive", "--wex-destructive"),
    ("--destructive-foreground", "--wex-destructive-foreground"),
    ("--border", "--wex-border"),
    ("--input", "--wex-input"),
    ("--ring", "--wex-ring"),
    ("--radius", "--wex-radius"),
    ("--chart-1", "--wex-chart-1"),
    ("--chart-2", "--wex-chart-2"),
    ("--chart-3", "--wex-chart-3"),
    ("--chart-4", "--wex-chart-4"),
    ("--chart-5", "--wex-chart-5"),
];

/// Renders the bridge stylesheet. Independent of overrides.
pub fn export_semantic_bridge() -> String {
    let mut out = String::new();
    out.push_str("/* shadcn/ui semantic bridge */\n");
    out.push_str("/* Maps shadcn theme variables onto WEX tokens. Load after tokens.css. */\n\n");
    out.push_str(":root {\n");
    for (alias, target) in BRIDGE_MAPPINGS {
        push_declaration(&mut out, "  ", alias, &format!("var({})", target));
    }
    out.push_str("}\n");
    out
}
