//! # HexaStore
//!
//! An in-memory triple store for RDF-shaped data. Facts are dictionary-encoded
//! into dense integer codes and replicated across six orderings of the
//! (subject, predicate, object) positions, so that a triple pattern with any
//! combination of bound and wildcard positions can be answered with an ordered
//! prefix scan instead of a full pass over the data.
//!
//! On top of single-pattern matching, the crate evaluates *star queries*:
//! conjunctions of triple patterns sharing variables, joined by merging
//! compatible substitutions.
//!
//! ## Features
//!
//! - Dictionary encoding of RDF terms into dense `u32` codes
//! - Six-way permutation index (spo, sop, pso, pos, osp, ops)
//! - Substitution-based nested-loop join for star queries
//! - N-Triples and star-query (restricted SPARQL `SELECT`) parsers
//! - Result verification against Oxigraph as a reference engine
//!
//! ## Example
//!
//! ```rust
//! use hexastore::core::{Term, Triple};
//! use hexastore::storage::hexastore::HexaStore;
//!
//! fn example() -> hexastore::Result<()> {
//!     let mut store = HexaStore::new();
//!     store.add(&Triple::new(
//!         Term::constant("http://example.org#Alice"),
//!         Term::constant("http://example.org#knows"),
//!         Term::constant("http://example.org#Bob"),
//!     ))?;
//!
//!     let pattern = Triple::new(
//!         Term::constant("http://example.org#Alice"),
//!         Term::constant("http://example.org#knows"),
//!         Term::variable("x"),
//!     );
//!     for binding in store.match_pattern(&pattern) {
//!         println!("?x = {}", binding.get("x").unwrap_or("unbound"));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

/// Core data structures: terms, triples, star queries, substitutions
pub mod core;

/// Parsers for the N-Triples data format and the star-query syntax
pub mod parsing;

/// Star-query evaluation and verification against a reference engine
pub mod querying;

/// The HexaStore façade and its dictionary / permutation-index internals
pub mod storage;

pub mod error {
    //! Error types and result definitions

    use std::fmt;

    /// Result type alias for HexaStore operations
    pub type Result<T> = std::result::Result<T, Error>;

    /// Main error type for HexaStore
    #[derive(Debug)]
    pub enum Error {
        /// Caller error: an argument violated an operation's contract,
        /// e.g. a non-ground triple passed to `add`
        InvalidArgument(String),
        /// Malformed input at an ingestion boundary (data or query text)
        Parse(String),
        /// Failure reported by the reference query engine during verification
        Query(String),
        /// IO error
        Io(std::io::Error),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
                Error::Parse(msg) => write!(f, "Parse error: {}", msg),
                Error::Query(msg) => write!(f, "Query error: {}", msg),
                Error::Io(err) => write!(f, "IO error: {}", err),
            }
        }
    }

    impl std::error::Error for Error {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Error::Io(err) => Some(err),
                _ => None,
            }
        }
    }

    impl From<std::io::Error> for Error {
        fn from(err: std::io::Error) -> Self {
            Error::Io(err)
        }
    }
}

// Re-export commonly used types
pub use error::{Error, Result};
