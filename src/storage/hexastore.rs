//! The HexaStore façade: a fact-oriented interface over one dictionary and
//! one six-way permutation index.

use crate::core::{StarQuery, Substitution, Term, Triple};
use crate::error::{Error, Result};
use crate::querying::evaluator;
use crate::storage::indexing::dictionary::Dictionary;
use crate::storage::indexing::hexa_index::TripleIndex;

/// In-memory, append-only triple store.
///
/// Owns the authoritative fact count. `add` is idempotent: re-adding an
/// identical fact neither changes `size()` nor produces duplicate index
/// entries. The store is single-writer by construction (`&mut self` for
/// mutation, `&self` for queries); interleaving writes and reads across
/// threads needs external synchronization.
#[derive(Debug, Default)]
pub struct HexaStore {
    dictionary: Dictionary,
    index: TripleIndex,
    size: u64,
}

impl HexaStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { dictionary: Dictionary::new(), index: TripleIndex::new(), size: 0 }
    }

    /// Inserts a ground triple. Returns `Ok(true)` when the fact was new and
    /// `Ok(false)` when it was already stored. A triple with a variable in any
    /// position is a caller error.
    pub fn add(&mut self, triple: &Triple) -> Result<bool> {
        let (Some(subject), Some(predicate), Some(object)) = (
            triple.subject.as_constant(),
            triple.predicate.as_constant(),
            triple.object.as_constant(),
        ) else {
            return Err(Error::InvalidArgument(format!(
                "cannot store non-ground triple {}",
                triple
            )));
        };

        let [s, p, o] = self.dictionary.encode_triple(subject, predicate, object);
        let inserted = self.index.add_triple(s, p, o);
        if inserted {
            self.size += 1;
        }
        Ok(inserted)
    }

    /// Inserts every triple in the collection. Returns whether at least one
    /// was newly inserted; an empty collection inserts nothing and reports
    /// `Ok(false)`. Fails on the first non-ground triple.
    pub fn add_all<'a, I>(&mut self, triples: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let mut any_inserted = false;
        for triple in triples {
            if self.add(triple)? {
                any_inserted = true;
            }
        }
        Ok(any_inserted)
    }

    /// Number of distinct facts currently stored.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// True when no fact is stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Decodes and returns every stored fact. No ordering guarantee.
    pub fn atoms(&self) -> Vec<Triple> {
        let mut atoms = Vec::with_capacity(self.index.len());
        for (s, p, o) in self.index.get_all_triples() {
            // Codes taken from the index are always dictionary-resident.
            let [Some(subject), Some(predicate), Some(object)] =
                self.dictionary.decode_triple([s, p, o])
            else {
                continue;
            };
            atoms.push(Triple::new(
                Term::constant(subject),
                Term::constant(predicate),
                Term::constant(object),
            ));
        }
        atoms
    }

    /// Matches a single triple pattern, producing one substitution per
    /// matching fact. Each substitution binds exactly the variables present in
    /// the pattern. A pattern constant that was never stored yields no matches
    /// without being an error, and a variable occupying two positions only
    /// matches facts where both positions hold the same value.
    pub fn match_pattern(&self, pattern: &Triple) -> Vec<Substitution> {
        let mut ids = [None, None, None];
        for (slot, term) in ids.iter_mut().zip(pattern.terms()) {
            if let Term::Constant(value) = term {
                match self.dictionary.lookup(value) {
                    Some(id) => *slot = Some(id),
                    // Unknown constant: nothing stored can match.
                    None => return Vec::new(),
                }
            }
        }

        let matches = self.index.find_matches(ids[0], ids[1], ids[2]);
        let mut results = Vec::with_capacity(matches.len());

        'next_triple: for (s, p, o) in matches {
            let mut substitution = Substitution::new();
            for (term, id) in pattern.terms().into_iter().zip([s, p, o]) {
                if let Term::Variable(name) = term {
                    let Some(value) = self.dictionary.decode(id) else {
                        continue 'next_triple;
                    };
                    if !substitution.bind(name, value) {
                        // Self-join: the variable is already bound to a
                        // different value in this triple.
                        continue 'next_triple;
                    }
                }
            }
            results.push(substitution);
        }
        results
    }

    /// Evaluates a star query against the store. See
    /// [`crate::querying::evaluator`] for the join algorithm.
    pub fn match_query(&self, query: &StarQuery) -> Vec<Substitution> {
        evaluator::evaluate(self, query)
    }

    /// Read access to the term dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
