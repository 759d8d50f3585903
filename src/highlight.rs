//! Syntax Highlighting
//!
//! Wraps syntect with:
//! - the default grammars plus a registered GraphQL grammar
//! - inline-styled `<span>` output, without a wrapping `<pre>`, so the
//!   caller decides the enclosing `pre`/`code` markup
//! - pretty-printed JSON for API results

use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::{SyntaxDefinition, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::models::GreetingPayload;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "InspiredGitHub";

const GRAPHQL_SYNTAX: &str = r#"%YAML 1.2
---
name: GraphQL
file_extensions: [graphql, gql]
scope: source.graphql
contexts:
  main:
    - match: '#.*$'
      scope: comment.line.number-sign.graphql
    - match: '"'
      scope: punctuation.definition.string.begin.graphql
      push: string
    - match: '\b(type|input|enum|union|interface|implements|extend|schema|directive|scalar|fragment|query|mutation|subscription|on)\b'
      scope: keyword.other.graphql
    - match: '\b(true|false|null)\b'
      scope: constant.language.graphql
    - match: '-?\b\d+(\.\d+)?\b'
      scope: constant.numeric.graphql
    - match: '@[a-zA-Z_]\w*'
      scope: entity.name.tag.directive.graphql
    - match: '\b(ID|String|Int|Float|Boolean|Date)\b'
      scope: support.type.builtin.graphql
    - match: '[a-zA-Z_]\w*(?=\s*:)'
      scope: entity.other.attribute-name.graphql
    - match: '\$[a-zA-Z_]\w*'
      scope: variable.other.graphql
    - match: '[!{}()\[\]:=|]'
      scope: punctuation.separator.graphql
  string:
    - meta_scope: string.quoted.double.graphql
    - match: '\\.'
      scope: constant.character.escape.graphql
    - match: '"'
      scope: punctuation.definition.string.end.graphql
      pop: true
"#;

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(build_syntax_set)
}

fn build_syntax_set() -> SyntaxSet {
    let defaults = SyntaxSet::load_defaults_newlines();
    match SyntaxDefinition::load_from_str(GRAPHQL_SYNTAX, true, None) {
        Ok(graphql) => {
            let mut builder = defaults.into_builder();
            builder.add(graphql);
            builder.build()
        }
        Err(e) => {
            log::error!("[Highlight] GraphQL grammar rejected: {}", e);
            defaults
        }
    }
}

fn get_theme() -> Option<&'static Theme> {
    let themes = &THEME_SET.get_or_init(ThemeSet::load_defaults).themes;
    themes.get(THEME_NAME).or_else(|| themes.values().next())
}

/// Highlight `code` as `lang` (extension or name, e.g. "rust", "graphql").
/// Returns the contents of a `<code>` element.
pub fn highlight_code(code: &str, lang: &str) -> String {
    let ss = get_syntax_set();
    let Some(theme) = get_theme() else {
        return escape_html(code);
    };

    let syntax = ss
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlight_lines(code, ss, syntax, theme).unwrap_or_else(|e| {
        log::warn!("[Highlight] {} failed: {}", lang, e);
        escape_html(code)
    })
}

fn highlight_lines(
    code: &str,
    ss: &SyntaxSet,
    syntax: &SyntaxReference,
    theme: &Theme,
) -> Result<String, syntect::Error> {
    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut html = String::new();
    for line in LinesWithEndings::from(code) {
        let regions = highlighter.highlight_line(line, ss)?;
        html.push_str(&styled_line_to_highlighted_html(&regions, IncludeBackground::No)?);
    }
    Ok(html)
}

/// Pretty-print (two-space indent) and highlight an API result
pub fn highlight_json(payload: &GreetingPayload) -> String {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => highlight_code(&text, "json"),
        Err(e) => escape_html(&e.to_string()),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
