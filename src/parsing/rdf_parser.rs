//! N-Triples line parser producing ground triples.
//!
//! Subjects and predicates are IRIs in angle brackets; objects are IRIs or
//! literals. Datatype annotations (`"23.5"^^<...#decimal>`) and language tags
//! (`"hello"@en`) are stripped down to the lexical value; the store compares
//! constants by value only.

use std::fs;
use std::path::Path;

use crate::core::{Term, Triple};
use crate::error::{Error, Result};

/// Parses one line of N-Triples into a ground triple. Blank lines and `#`
/// comment lines yield `Ok(None)`.
pub fn parse_triple_line(line: &str) -> Result<Option<Triple>> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // Remove the statement-terminating dot if present
    let trimmed = trimmed.trim_end_matches('.').trim();

    let (subject, remaining) = parse_uri(trimmed, "subject")?;
    let (predicate, remaining) = parse_uri(remaining, "predicate")?;
    let (object, remaining) = parse_object(remaining)?;

    if !remaining.trim().is_empty() {
        return Err(Error::Parse(format!(
            "trailing tokens after object: {}",
            remaining.trim()
        )));
    }

    Ok(Some(Triple::new(
        Term::constant(&subject),
        Term::constant(&predicate),
        Term::constant(&object),
    )))
}

/// Parses a whole N-Triples document, skipping blank and comment lines.
pub fn parse_triples(text: &str) -> Result<Vec<Triple>> {
    let mut triples = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let parsed = parse_triple_line(line).map_err(|e| match e {
            Error::Parse(msg) => Error::Parse(format!("line {}: {}", number + 1, msg)),
            other => other,
        })?;
        if let Some(triple) = parsed {
            triples.push(triple);
        }
    }
    Ok(triples)
}

/// Reads and parses an N-Triples file.
pub fn parse_triples_file(path: &Path) -> Result<Vec<Triple>> {
    let text = fs::read_to_string(path)?;
    parse_triples(&text)
}

/// Parses a URI enclosed in angle brackets.
pub(crate) fn parse_uri<'a>(input: &'a str, field_name: &str) -> Result<(String, &'a str)> {
    let input = input.trim_start();

    if !input.starts_with('<') {
        return Err(Error::Parse(format!(
            "expected '<' for {} URI, got: {}",
            field_name, input
        )));
    }

    let end_idx = input
        .find('>')
        .ok_or_else(|| Error::Parse(format!("missing closing '>' for {} URI", field_name)))?;

    let uri = input[1..end_idx].to_string();
    let remaining = input[end_idx + 1..].trim_start();

    Ok((uri, remaining))
}

/// Parses an object position: a URI, a plain literal, a typed literal or a
/// language-tagged literal.
fn parse_object(input: &str) -> Result<(String, &str)> {
    let input = input.trim_start();

    if input.starts_with('<') {
        return parse_uri(input, "object");
    }

    if input.starts_with('"') {
        return parse_literal(input);
    }

    Err(Error::Parse(format!("invalid object format: {}", input)))
}

/// Parses a quoted literal with optional `^^<datatype>` or `@lang` suffix,
/// returning just the lexical value.
pub(crate) fn parse_literal(input: &str) -> Result<(String, &str)> {
    let input = input.trim_start();

    if !input.starts_with('"') {
        return Err(Error::Parse("literal must start with '\"'".to_string()));
    }

    // Find the closing quote, skipping escaped quotes
    let bytes = input.as_bytes();
    let mut end_idx = 1;
    while end_idx < bytes.len() {
        if bytes[end_idx] == b'"' && bytes[end_idx - 1] != b'\\' {
            break;
        }
        end_idx += 1;
    }
    if end_idx >= bytes.len() {
        return Err(Error::Parse("missing closing quote for literal".to_string()));
    }

    let value = input[1..end_idx].replace("\\\"", "\"").replace("\\\\", "\\");
    let after_quote = input[end_idx + 1..].trim_start();

    if let Some(rest) = after_quote.strip_prefix("^^") {
        // Typed literal: drop the datatype, keep the lexical value
        let (_datatype, remaining) = parse_uri(rest.trim_start(), "datatype")?;
        Ok((value, remaining))
    } else if let Some(rest) = after_quote.strip_prefix('@') {
        // Language-tagged literal: drop the tag
        let tag_end = rest
            .find(|c: char| c.is_whitespace() || c == '.')
            .unwrap_or(rest.len());
        Ok((value, rest[tag_end..].trim_start()))
    } else {
        Ok((value, after_quote))
    }
}
