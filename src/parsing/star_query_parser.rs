//! Parser for star-query files: one or more restricted SPARQL `SELECT`
//! queries, each a flat basic graph pattern.
//!
//! Supported shape:
//!
//! ```text
//! SELECT ?x ?y WHERE { ?x <http://example.org#knows> ?y . ?x <http://example.org#age> "25" . }
//! SELECT * WHERE { <http://example.org#Alice> <http://example.org#knows> ?z . }
//! ```
//!
//! No prefixes, filters, optionals or nested groups; each pattern slot is an
//! IRI, a literal or a variable. Queries are named `query_1`, `query_2`, … in
//! file order.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::core::{StarQuery, Term, Triple};
use crate::error::{Error, Result};
use crate::parsing::rdf_parser::{parse_literal, parse_uri};

/// Regex-driven parser for the star-query syntax.
pub struct StarQueryParser {
    select_regex: Regex,
}

impl StarQueryParser {
    /// Compiles the query-shape regex.
    pub fn new() -> Result<Self> {
        Ok(StarQueryParser {
            select_regex: Regex::new(
                r"(?s)SELECT\s+(?P<vars>\*|(?:\?\w+\s*)+)\s*WHERE\s*\{(?P<body>[^}]*)\}",
            )
            .map_err(|e| Error::Parse(e.to_string()))?,
        })
    }

    /// Parses every query in `text`, in order of appearance.
    pub fn parse(&self, text: &str) -> Result<Vec<StarQuery>> {
        let mut queries = Vec::new();

        for (index, captures) in self.select_regex.captures_iter(text).enumerate() {
            let body = captures.name("body").map_or("", |m| m.as_str());
            let patterns = parse_patterns(body)?;

            let vars = captures.name("vars").map_or("*", |m| m.as_str()).trim();
            let answer_variables = if vars == "*" {
                pattern_variables(&patterns)
            } else {
                vars.split_whitespace()
                    .map(|v| v.trim_start_matches('?').to_string())
                    .collect()
            };

            queries.push(StarQuery::new(
                &format!("query_{}", index + 1),
                patterns,
                answer_variables,
            ));
        }

        if queries.is_empty() && !text.trim().is_empty() {
            return Err(Error::Parse("no SELECT query found in input".to_string()));
        }
        Ok(queries)
    }

    /// Reads and parses a query file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<StarQuery>> {
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }
}

/// Tokenizes a basic graph pattern body into terms, then groups them into
/// triples. Dots between patterns are separators; dots inside IRIs and
/// literals are untouched because tokens are parsed delimiter-aware rather
/// than split on punctuation.
fn parse_patterns(body: &str) -> Result<Vec<Triple>> {
    let mut terms = Vec::new();
    let mut rest = body.trim_start();

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('.') {
            rest = after.trim_start();
        } else if rest.starts_with('<') {
            let (uri, remaining) = parse_uri(rest, "pattern")?;
            terms.push(Term::constant(&uri));
            rest = remaining;
        } else if rest.starts_with('"') {
            let (value, remaining) = parse_literal(rest)?;
            terms.push(Term::constant(&value));
            rest = remaining;
        } else if let Some(after) = rest.strip_prefix('?') {
            let name_end = after
                .find(|c: char| !c.is_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            if name_end == 0 {
                return Err(Error::Parse("empty variable name".to_string()));
            }
            terms.push(Term::variable(&after[..name_end]));
            rest = after[name_end..].trim_start();
        } else {
            return Err(Error::Parse(format!("unexpected token in pattern: {}", rest)));
        }
    }

    if terms.len() % 3 != 0 {
        return Err(Error::Parse(format!(
            "graph pattern has {} terms, expected a multiple of three",
            terms.len()
        )));
    }

    Ok(terms
        .chunks_exact(3)
        .map(|chunk| Triple::new(chunk[0].clone(), chunk[1].clone(), chunk[2].clone()))
        .collect())
}

/// Every distinct variable appearing in the patterns, in first-seen order.
fn pattern_variables(patterns: &[Triple]) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();
    for pattern in patterns {
        for term in pattern.terms() {
            if let Term::Variable(name) = term {
                if !variables.contains(name) {
                    variables.push(name.clone());
                }
            }
        }
    }
    variables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_query() {
        let parser = StarQueryParser::new().unwrap();
        let queries = parser
            .parse("SELECT ?x WHERE { ?x <http://example.org#knows> <http://example.org#Bob> . }")
            .unwrap();

        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].name, "query_1");
        assert_eq!(queries[0].answer_variables, vec!["x".to_string()]);
        assert_eq!(queries[0].patterns.len(), 1);
        assert_eq!(queries[0].patterns[0].subject, Term::variable("x"));
        assert_eq!(
            queries[0].patterns[0].object,
            Term::constant("http://example.org#Bob")
        );
    }

    #[test]
    fn test_parse_multiple_patterns_and_queries() {
        let parser = StarQueryParser::new().unwrap();
        let text = "\
            SELECT ?x ?y WHERE { ?x <http://example.org#knows> ?y . ?x <http://example.org#age> \"25\" . }\n\
            SELECT ?z WHERE { <http://example.org#Alice> <http://example.org#knows> ?z . }\n";
        let queries = parser.parse(text).unwrap();

        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].patterns.len(), 2);
        assert_eq!(queries[0].answer_variables, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(queries[1].name, "query_2");
    }

    #[test]
    fn test_select_star_collects_pattern_variables() {
        let parser = StarQueryParser::new().unwrap();
        let queries = parser
            .parse("SELECT * WHERE { ?s <http://example.org#p> ?o . }")
            .unwrap();

        assert_eq!(queries[0].answer_variables, vec!["s".to_string(), "o".to_string()]);
    }

    #[test]
    fn test_literal_object_with_dot_inside() {
        let parser = StarQueryParser::new().unwrap();
        let queries = parser
            .parse("SELECT ?x WHERE { ?x <http://example.org#score> \"3.14\" . }")
            .unwrap();

        assert_eq!(queries[0].patterns[0].object, Term::constant("3.14"));
    }

    #[test]
    fn test_rejects_incomplete_pattern() {
        let parser = StarQueryParser::new().unwrap();
        let result = parser.parse("SELECT ?x WHERE { ?x <http://example.org#p> . }");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_text_without_query() {
        let parser = StarQueryParser::new().unwrap();
        assert!(parser.parse("this is not a query").is_err());
        assert!(parser.parse("").unwrap().is_empty());
    }
}
