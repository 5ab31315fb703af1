use serde_json::Value;
use wex_tokens::TokenError;

use super::ParsedTokens;
use crate::export::flatten_json_tree;

/// Reads a `tokens.json` export.
pub fn parse_json_tree(json: &str) -> Result<ParsedTokens, TokenError> {
    let tree: Value = serde_json::from_str(json)?;
    if !tree.is_object() {
        return Err(TokenError::Json {
            path: None,
            message: "token tree must be a JSON object".to_string(),
        });
    }
    Ok(flatten_json_tree(&tree))
}
