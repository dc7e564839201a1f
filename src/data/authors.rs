//! Author list parser using Pest
//!
//! The `Authors` column stores a serialized list literal such as
//! `['A. Smith', 'B. Lee']`. It is parsed with a strict grammar: only string
//! literals, commas and brackets are accepted, anything else is rejected.

use pest::error::LineColLocation;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "data/author_list.pest"]
struct AuthorListParser;

/// Author list parse errors
#[derive(Error, Debug)]
pub enum AuthorParseError {
    /// Pest parsing error
    #[error("Parse error: {0}")]
    PestError(#[from] pest::error::Error<Rule>),
}

impl AuthorParseError {
    /// One-line description suitable for warnings
    pub fn reason(&self) -> String {
        match self {
            AuthorParseError::PestError(e) => {
                let column = match e.line_col {
                    LineColLocation::Pos((_, col)) => col,
                    LineColLocation::Span((_, col), _) => col,
                };
                format!("{} at column {}", e.variant.message(), column)
            }
        }
    }
}

/// Parse a serialized list of author names.
///
/// Names are returned trimmed, in source order. Empty names are kept out.
pub fn parse_author_list(input: &str) -> Result<Vec<String>, AuthorParseError> {
    let pairs = AuthorListParser::parse(Rule::list, input)?;

    let mut names = Vec::new();
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::single_inner | Rule::double_inner => {
                let name = unescape(pair.as_str());
                let name = name.trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(names)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
