//! Core data structures for the HexaStore engine

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An RDF term: either a constant (IRI or literal, compared by value) or a
/// variable placeholder that only ever appears in queries.
///
/// The two cases are a tagged variant on purpose: code that dispatches on a
/// term has to handle both, and a forgotten case is a compile error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    /// An IRI or literal lexical value
    Constant(String),
    /// A query variable, stored without the leading `?`
    Variable(String),
}

impl Term {
    /// Creates a constant term from a lexical value.
    pub fn constant(value: &str) -> Self {
        Term::Constant(value.to_string())
    }

    /// Creates a variable term. A leading `?` is accepted and stripped.
    pub fn variable(name: &str) -> Self {
        Term::Variable(name.trim_start_matches('?').to_string())
    }

    /// Returns true for the `Variable` case.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Returns true for the `Constant` case.
    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant(_))
    }

    /// The constant's lexical value, or `None` for a variable.
    pub fn as_constant(&self) -> Option<&str> {
        match self {
            Term::Constant(value) => Some(value),
            Term::Variable(_) => None,
        }
    }

    /// The variable's name, or `None` for a constant.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Constant(_) => None,
            Term::Variable(name) => Some(name),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(value) => write!(f, "{}", value),
            Term::Variable(name) => write!(f, "?{}", name),
        }
    }
}

/// An ordered (subject, predicate, object) tuple of terms.
///
/// A triple does double duty: with all three positions constant it is a stored
/// fact (a *ground* triple), with one or more variables it is a triple pattern
/// used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject position
    pub subject: Term,
    /// Predicate position
    pub predicate: Term,
    /// Object position
    pub object: Term,
}

impl Triple {
    /// Creates a triple from three terms.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self { subject, predicate, object }
    }

    /// True when all three positions are constants, i.e. the triple is a
    /// storable fact rather than a pattern.
    pub fn is_ground(&self) -> bool {
        self.subject.is_constant() && self.predicate.is_constant() && self.object.is_constant()
    }

    /// The three positions in (subject, predicate, object) order.
    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

/// A star query: a name, an ordered conjunction of triple patterns (typically
/// sharing one central variable, though nothing enforces that) and the
/// variables the caller declared interest in.
///
/// The evaluator returns bindings for *every* variable appearing in any
/// pattern; `answer_variables` only drives caller-side projection via
/// [`Substitution::project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarQuery {
    /// Label identifying the query, e.g. in verification reports
    pub name: String,
    /// The conjunction of triple patterns, evaluated in this order
    pub patterns: Vec<Triple>,
    /// Variables the caller wants projected, without the leading `?`
    pub answer_variables: Vec<String>,
}

impl StarQuery {
    /// Creates a star query.
    pub fn new(name: &str, patterns: Vec<Triple>, answer_variables: Vec<String>) -> Self {
        Self { name: name.to_string(), patterns, answer_variables }
    }
}

impl fmt::Display for StarQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.name)?;
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pattern)?;
        }
        write!(f, "]")
    }
}

/// One consistent binding of query variables to constant values.
///
/// Keys are variable names, values the bound constants' lexical values.
/// Substitutions are immutable once returned from matching; `merge` is the
/// pure join primitive the star-query evaluator is built on.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Substitution {
    bindings: BTreeMap<String, String>,
}

impl Substitution {
    /// Creates an empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `variable` to `value`. Returns false (and leaves the binding
    /// untouched) if the variable is already bound to a different value;
    /// re-binding to the same value is accepted. This is how the self-join
    /// case (one variable in two pattern positions) is enforced.
    pub fn bind(&mut self, variable: &str, value: &str) -> bool {
        match self.bindings.get(variable) {
            Some(existing) => existing == value,
            None => {
                self.bindings.insert(variable.to_string(), value.to_string());
                true
            }
        }
    }

    /// The value bound to `variable`, if any.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.bindings.get(variable).map(|s| s.as_str())
    }

    /// True when the two substitutions agree on every shared variable.
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.bindings
            .iter()
            .all(|(variable, value)| other.get(variable).map_or(true, |v| v == value))
    }

    /// Merges two substitutions into their union, or `None` when they bind a
    /// shared variable to different values.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if !self.is_compatible_with(other) {
            return None;
        }
        let mut merged = self.clone();
        for (variable, value) in &other.bindings {
            merged.bindings.insert(variable.clone(), value.clone());
        }
        Some(merged)
    }

    /// Restricts the substitution to the given variables. Variables that are
    /// not bound are simply absent from the result.
    pub fn project(&self, variables: &[String]) -> Self {
        let bindings = self
            .bindings
            .iter()
            .filter(|(variable, _)| variables.contains(variable))
            .map(|(variable, value)| (variable.clone(), value.clone()))
            .collect();
        Self { bindings }
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over (variable, value) pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (variable, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "?{} -> {}", variable, value)?;
        }
        write!(f, "}}")
    }
}
