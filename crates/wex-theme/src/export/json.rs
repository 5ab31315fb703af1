//! The nested JSON token tree (`tokens.json`).
//!
//! Token names lose their `--wex-` prefix and split on dashes into a path:
//!
//! ```json
//! {
//!   "primary": {
//!     "DEFAULT": { "value": "var(--wex-palette-blue-700)", "type": "color" },
//!     "foreground": { "value": "var(--wex-palette-white)", "type": "color" }
//!   },
//!   "$dark": {
//!     "primary": {
//!       "DEFAULT": { "value": "var(--wex-palette-blue-400)", "type": "color" }
//!     }
//!   }
//! }
//! ```
//!
//! A node that is both a token and a parent of other tokens keeps its own
//! leaf under `DEFAULT`. Names outside the `--wex-` namespace are kept whole
//! as top-level keys. The tree holds exactly the entries of the CSS sheet:
//! everything from `:root` at the top, the `.dark` block under `$dark`.

use serde_json::{Map, Value};
use wex_tokens::{Overrides, TokenRegistry};

use super::ResolvedSheet;
use crate::import::ParsedTokens;

/// Reserved key holding the dark-mode tree.
pub const DARK_KEY: &str = "$dark";

/// Reserved key holding a leaf whose node also has children.
pub const DEFAULT_KEY: &str = "DEFAULT";

const WEX_PREFIX: &str = "--wex-";
const PALETTE_TYPE: &str = "color";

/// Builds the token tree.
pub fn json_tree(registry: &TokenRegistry, overrides: &Overrides) -> Value {
    let sheet = ResolvedSheet::new(registry, overrides);
    build_tree(&sheet)
}

/// Renders the token tree as pretty-printed JSON.
pub fn export_json_tree(registry: &TokenRegistry, overrides: &Overrides) -> String {
    format!("{:#}", json_tree(registry, overrides))
}

pub(crate) fn build_tree(sheet: &ResolvedSheet<'_>) -> Value {
    let mut root = Map::new();
    for token in sheet.tokens() {
        insert_leaf(&mut root, token.token.name(), &token.light, token.token.kind().as_str());
    }
    for (name, value) in sheet.palette(wex_tokens::ColorMode::Light).entries() {
        insert_leaf(&mut root, name, value, PALETTE_TYPE);
    }

    let mut dark = Map::new();
    for token in sheet.tokens().iter().filter(|t| t.in_dark_block()) {
        insert_leaf(&mut dark, token.token.name(), &token.dark, token.token.kind().as_str());
    }
    for (name, value) in sheet.dark_palette_changes() {
        insert_leaf(&mut dark, name, value, PALETTE_TYPE);
    }

    root.insert(DARK_KEY.to_string(), Value::Object(dark));
    Value::Object(root)
}

fn leaf(value: &str, kind: &str) -> Value {
    let mut map = Map::new();
    map.insert("value".to_string(), Value::String(value.to_string()));
    map.insert("type".to_string(), Value::String(kind.to_string()));
    Value::Object(map)
}

fn is_leaf(node: &Value) -> bool {
    match node {
        Value::Object(map) => {
            map.get("value").is_some_and(Value::is_string)
                && map.get("type").is_some_and(Value::is_string)
        }
        _ => false,
    }
}

fn path_of(name: &str) -> Vec<&str> {
    match name.strip_prefix(WEX_PREFIX) {
        Some(rest) => rest.split('-').collect(),
        None => vec![name],
    }
}

fn insert_leaf(root: &mut Map<String, Value>, name: &str, value: &str, kind: &str) {
    let path = path_of(name);
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        let entry = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if is_leaf(entry) {
            let mut wrapper = Map::new();
            wrapper.insert(DEFAULT_KEY.to_string(), entry.take());
            *entry = Value::Object(wrapper);
        }
        node = match entry {
            Value::Object(map) => map,
            _ => return,
        };
    }

    let new_leaf = leaf(value, kind);
    let is_branch = node
        .get(*last)
        .is_some_and(|n| n.is_object() && !is_leaf(n));
    if is_branch {
        if let Some(Value::Object(children)) = node.get_mut(*last) {
            children.insert(DEFAULT_KEY.to_string(), new_leaf);
        }
    } else {
        node.insert(last.to_string(), new_leaf);
    }
}

/// Flattens a token tree back into `(name, value)` pairs per mode.
///
/// The inverse of [`json_tree`]: the result holds exactly the declarations
/// of the CSS sheet for the same state.
pub fn flatten_json_tree(tree: &Value) -> ParsedTokens {
    let mut parsed = ParsedTokens::default();
    let Value::Object(root) = tree else {
        return parsed;
    };

    for (key, node) in root {
        if key == DARK_KEY {
            if let Value::Object(dark) = node {
                for (key, node) in dark {
                    collect(node, &mut vec![key.as_str()], &mut parsed.dark);
                }
            }
        } else {
            collect(node, &mut vec![key.as_str()], &mut parsed.light);
        }
    }
    parsed
}

fn collect<'v>(
    node: &'v Value,
    path: &mut Vec<&'v str>,
    out: &mut std::collections::BTreeMap<String, String>,
) {
    if is_leaf(node) {
        if let Some(Value::String(value)) = node.get("value") {
            out.insert(name_of(path), value.clone());
        }
        return;
    }
    let Value::Object(map) = node else {
        return;
    };
    for (key, child) in map {
        if key == DEFAULT_KEY {
            collect(child, path, out);
        } else {
            path.push(key.as_str());
            collect(child, path, out);
            path.pop();
        }
    }
}

fn name_of(path: &[&str]) -> String {
    match path {
        [single] if single.starts_with("--") => single.to_string(),
        _ => format!("{}{}", WEX_PREFIX, path.join("-")),
    }
}
