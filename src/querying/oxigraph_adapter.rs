//! Oxigraph-based reference engine adapter.
//!
//! The verification harness needs a second, independent evaluation of each
//! star query. This adapter loads the fact set into an in-memory Oxigraph
//! store, renders the star query as a SPARQL `SELECT *` (so both engines
//! report full bindings, not just answer variables) and converts the solutions
//! back into [`Substitution`]s.
//!
//! Core terms are opaque strings; the IRI-versus-literal distinction Oxigraph
//! needs is recovered here with a scheme heuristic and stays confined to this
//! adapter.

use std::fmt;

use oxigraph::model::{GraphName, Literal, NamedNode, Quad, Term as OxTerm};
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;

use crate::core::{StarQuery, Substitution, Term, Triple};

/// Error raised while loading data into or querying the reference engine.
#[derive(Debug)]
pub struct OxigraphError(String);

impl fmt::Display for OxigraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oxigraph error: {}", self.0)
    }
}

impl std::error::Error for OxigraphError {}

impl From<oxigraph::store::StorageError> for OxigraphError {
    fn from(err: oxigraph::store::StorageError) -> Self {
        OxigraphError(err.to_string())
    }
}

impl From<oxigraph::sparql::QueryEvaluationError> for OxigraphError {
    fn from(err: oxigraph::sparql::QueryEvaluationError) -> Self {
        OxigraphError(err.to_string())
    }
}

impl From<oxigraph::model::IriParseError> for OxigraphError {
    fn from(err: oxigraph::model::IriParseError) -> Self {
        OxigraphError(err.to_string())
    }
}

impl From<OxigraphError> for crate::Error {
    fn from(err: OxigraphError) -> Self {
        crate::Error::Query(err.to_string())
    }
}

/// Adapter executing star queries with Oxigraph as the engine.
#[derive(Debug, Default)]
pub struct OxigraphAdapter;

impl OxigraphAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Loads `facts` into a fresh Oxigraph store, runs `query` as SPARQL and
    /// returns the solutions as substitutions over plain lexical values.
    pub fn execute_star_query(
        &self,
        facts: &[Triple],
        query: &StarQuery,
    ) -> Result<Vec<Substitution>, OxigraphError> {
        let store = Store::new()?;
        for fact in facts {
            store.insert(&to_quad(fact)?)?;
        }

        let sparql = to_sparql(query);
        let evaluator = SparqlEvaluator::new();
        let parsed_query =
            evaluator.parse_query(&sparql).map_err(|e| OxigraphError(e.to_string()))?;
        let results = parsed_query.on_store(&store).execute()?;

        let mut bindings = Vec::new();
        if let QueryResults::Solutions(solutions) = results {
            for solution in solutions {
                let solution = solution?;
                let mut substitution = Substitution::new();
                for (variable, term) in solution.iter() {
                    substitution.bind(variable.as_str(), &plain_value(term));
                }
                bindings.push(substitution);
            }
        }
        Ok(bindings)
    }
}

/// Renders a star query as a SPARQL `SELECT *` over its patterns.
pub fn to_sparql(query: &StarQuery) -> String {
    let patterns: Vec<String> = query
        .patterns
        .iter()
        .map(|pattern| {
            format!(
                "{} {} {} .",
                render_term(&pattern.subject),
                render_term(&pattern.predicate),
                render_term(&pattern.object)
            )
        })
        .collect();
    format!("SELECT * WHERE {{ {} }}", patterns.join(" "))
}

fn render_term(term: &Term) -> String {
    match term {
        Term::Variable(name) => format!("?{}", name),
        Term::Constant(value) => {
            if looks_like_iri(value) {
                format!("<{}>", value)
            } else {
                format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
            }
        }
    }
}

/// A constant is treated as an IRI when it starts with a URI scheme and
/// contains nothing a scheme or IRI body would not.
fn looks_like_iri(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_alphabetic())
        && value.contains(':')
        && !value.contains(char::is_whitespace)
        && !value.contains('"')
}

fn to_quad(fact: &Triple) -> Result<Quad, OxigraphError> {
    let (Some(subject), Some(predicate), Some(object)) = (
        fact.subject.as_constant(),
        fact.predicate.as_constant(),
        fact.object.as_constant(),
    ) else {
        return Err(OxigraphError(format!("non-ground fact {}", fact)));
    };

    let subject = NamedNode::new(subject)?;
    let predicate = NamedNode::new(predicate)?;
    let object: OxTerm = if looks_like_iri(object) {
        NamedNode::new(object)?.into()
    } else {
        Literal::new_simple_literal(object).into()
    };
    Ok(Quad::new(subject, predicate, object, GraphName::DefaultGraph))
}

/// Strips a solution term down to the lexical value the HexaStore side uses.
fn plain_value(term: &OxTerm) -> String {
    match term {
        OxTerm::NamedNode(node) => node.as_str().to_string(),
        OxTerm::BlankNode(node) => node.as_str().to_string(),
        OxTerm::Literal(literal) => literal.value().to_string(),
        _ => term.to_string(),
    }
}
