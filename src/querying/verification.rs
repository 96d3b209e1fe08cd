//! Correctness verification: run the same facts and star queries through the
//! HexaStore and through Oxigraph, then diff the substitution sets ignoring
//! order.

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::{StarQuery, Substitution, Triple};
use crate::error::Result;
use crate::parsing::rdf_parser;
use crate::querying::oxigraph_adapter::OxigraphAdapter;
use crate::storage::hexastore::HexaStore;

/// Harness holding both engines' inputs: the HexaStore under test and the
/// fact list the reference engine is reloaded from per query.
#[derive(Debug, Default)]
pub struct Verification {
    store: HexaStore,
    reference: OxigraphAdapter,
    facts: Vec<Triple>,
}

/// Verdict for one query: its name, whether both engines agreed, and how many
/// substitutions the HexaStore produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The query's label
    pub query_name: String,
    /// Whether both engines produced the same substitution set
    pub correct: bool,
    /// Number of substitutions the HexaStore produced
    pub result_count: usize,
}

impl Verification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an N-Triples file and loads the facts into both engines' view.
    pub fn load_data(&mut self, path: &Path) -> Result<()> {
        let triples = rdf_parser::parse_triples_file(path)?;
        self.load_triples(triples)
    }

    /// Loads already-parsed facts into both engines' view.
    pub fn load_triples(&mut self, triples: Vec<Triple>) -> Result<()> {
        self.store.add_all(&triples)?;
        self.facts.extend(triples);
        Ok(())
    }

    /// True when HexaStore and the reference engine produce the same
    /// substitution set for `query`, order ignored.
    pub fn verify(&self, query: &StarQuery) -> Result<bool> {
        Ok(self.verdict_for(query)?.correct)
    }

    /// Verifies every query, returning one verdict per query.
    pub fn verify_all(&self, queries: &[StarQuery]) -> Result<Vec<Verdict>> {
        let mut verdicts = Vec::with_capacity(queries.len());
        for query in queries {
            verdicts.push(self.verdict_for(query)?);
        }
        Ok(verdicts)
    }

    fn verdict_for(&self, query: &StarQuery) -> Result<Verdict> {
        let hexastore_results = self.evaluate_hexastore(query);
        let reference_results = self.reference.execute_star_query(&self.facts, query)?;
        Ok(Verdict {
            query_name: query.name.clone(),
            correct: compare_results(&hexastore_results, &reference_results),
            result_count: hexastore_results.len(),
        })
    }

    /// The engine under test.
    pub fn evaluate_hexastore(&self, query: &StarQuery) -> Vec<Substitution> {
        self.store.match_query(query)
    }

    /// The store under test, e.g. for inspecting `size()` after loading.
    pub fn store(&self) -> &HexaStore {
        &self.store
    }
}

/// Set equality over substitutions, ignoring order and duplicates.
fn compare_results(left: &[Substitution], right: &[Substitution]) -> bool {
    let left: BTreeSet<&Substitution> = left.iter().collect();
    let right: BTreeSet<&Substitution> = right.iter().collect();
    left == right
}
