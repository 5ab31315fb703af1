//! Custom property extraction from stylesheets.
//!
//! Built on `cssparser`. Recognized scopes:
//!
//! | Rule | Mode |
//! |------|------|
//! | `:root { ... }` | light |
//! | `.dark { ... }`, `:root.dark { ... }` | dark |
//!
//! Selectors must match exactly: `.dark .card` or `:root, .x` are skipped.
//! | `@media (prefers-color-scheme: dark) { :root { ... } }` | dark |
//! | `@media (prefers-color-scheme: light) { :root { ... } }` | light |
//!
//! Only custom property declarations (`--name: value`) are read, and their
//! values are kept as written (trimmed). Other selectors, at-rules and
//! ordinary properties are skipped. Later declarations win.

use std::collections::BTreeMap;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, ParseErrorKind, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};
use wex_tokens::{ColorMode, TokenError};

use super::ParsedTokens;

/// Reads every custom property declared in a light or dark scope.
///
/// Fails only when the stylesheet cannot be tokenized into rules; rules the
/// importer doesn't understand are skipped.
pub fn parse_css_tokens(css: &str) -> Result<ParsedTokens, TokenError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut collector = TokenCollector {
        parsed: ParsedTokens::default(),
        current_mode: None,
    };

    let rule_list_parser = cssparser::StyleSheetParser::new(&mut parser, &mut collector);
    for result in rule_list_parser {
        if let Err((error, rule)) = result {
            match error.kind {
                ParseErrorKind::Custom(()) => {
                    tracing::trace!(rule = rule.trim(), "skipping rule without token declarations");
                }
                ParseErrorKind::Basic(kind) => {
                    return Err(TokenError::Css {
                        path: None,
                        line: error.location.line + 1,
                        column: error.location.column,
                        message: format!("{:?}", kind),
                    });
                }
            }
        }
    }

    tracing::debug!(
        light = collector.parsed.light.len(),
        dark = collector.parsed.dark.len(),
        "parsed token declarations from CSS"
    );
    Ok(collector.parsed)
}

struct TokenCollector {
    parsed: ParsedTokens,
    current_mode: Option<ColorMode>,
}

impl TokenCollector {
    fn store(&mut self, mode: ColorMode, declarations: Vec<(String, String)>) {
        let target: &mut BTreeMap<String, String> = match mode {
            ColorMode::Light => &mut self.parsed.light,
            ColorMode::Dark => &mut self.parsed.dark,
        };
        target.extend(declarations);
    }
}

impl<'i> QualifiedRuleParser<'i> for TokenCollector {
    type Prelude = ColorMode;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let mut selector = String::new();
        loop {
            let token = match input.next_including_whitespace() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            let marker = match token {
                Token::WhiteSpace(_) => {
                    selector.push(' ');
                    continue;
                }
                Token::Colon => ':',
                Token::Delim('.') => '.',
                _ => return Err(input.new_custom_error::<(), ()>(())),
            };
            let name = match input.expect_ident() {
                Ok(name) => name.to_ascii_lowercase(),
                Err(_) => return Err(input.new_custom_error::<(), ()>(())),
            };
            selector.push(marker);
            selector.push_str(&name);
        }

        match (selector.trim(), self.current_mode) {
            (".dark" | ":root.dark" | ".dark:root", _) => Ok(ColorMode::Dark),
            (":root", Some(mode)) => Ok(mode),
            (":root", None) => Ok(ColorMode::Light),
            _ => Err(input.new_custom_error::<(), ()>(())),
        }
    }

    fn parse_block<'t>(
        &mut self,
        mode: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = CustomPropertyParser;
        let rule_parser = RuleBodyParser::new(input, &mut decl_parser);
        let declarations: Vec<(String, String)> = rule_parser.flatten().collect();
        self.store(mode, declarations);
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for TokenCollector {
    type Prelude = ColorMode;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if !name.eq_ignore_ascii_case("media") {
            return Err(input.new_custom_error::<(), ()>(()));
        }

        let mut found_mode: Option<ColorMode> = None;
        loop {
            match input.next() {
                Ok(Token::ParenthesisBlock) => {
                    let nested = input.parse_nested_block(|input| {
                        input.expect_ident_matching("prefers-color-scheme")?;
                        input.expect_colon()?;
                        let value = input.expect_ident()?;
                        match value.as_ref() {
                            "dark" => Ok(ColorMode::Dark),
                            "light" => Ok(ColorMode::Light),
                            _ => Err(input.new_custom_error::<(), ()>(())),
                        }
                    });
                    if let Ok(mode) = nested {
                        found_mode = Some(mode);
                    }
                }
                Err(_) => break,
                Ok(_) => {}
            }
        }

        found_mode.ok_or_else(|| input.new_custom_error::<(), ()>(()))
    }

    fn parse_block<'t>(
        &mut self,
        mode: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let old_mode = self.current_mode;
        self.current_mode = Some(mode);

        let list_parser = cssparser::StyleSheetParser::new(input, self);
        for _ in list_parser {}

        self.current_mode = old_mode;
        Ok(())
    }
}

/// Reads `--name: value` declarations, skipping everything else.
struct CustomPropertyParser;

impl<'i> DeclarationParser<'i> for CustomPropertyParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        if !name.starts_with("--") {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let value = input.slice_from(start).trim().to_string();
        Ok((name.as_ref().to_string(), value))
    }
}

impl<'i> AtRuleParser<'i> for CustomPropertyParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for CustomPropertyParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for CustomPropertyParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
