//! Star-query evaluation: a left-deep nested-loop join over substitutions.
//!
//! Patterns are evaluated in the order the query gives them, with no
//! selectivity-based reordering. Each pattern's matches are computed
//! independently of the running result set, then combined with it by merging
//! compatible substitutions. The join step costs
//! `O(|running| * |pattern matches|)` merge attempts per pattern; only the
//! underlying single-pattern match benefits from the permutation index. That
//! is acceptable for the modest fan-out of typical star queries but is a known
//! scaling limit.

use crate::core::{StarQuery, Substitution};
use crate::storage::hexastore::HexaStore;

/// Evaluates a star query against the store.
///
/// Returns bindings for every variable appearing in any pattern; projecting
/// down to the query's answer variables is the caller's job (see
/// [`Substitution::project`]). A query with zero patterns returns zero
/// substitutions: the empty conjunction matches nothing here, not everything,
/// which is a deliberate convention. Once an intermediate join comes up empty
/// the evaluation stops early, since no later pattern can restore results.
pub fn evaluate(store: &HexaStore, query: &StarQuery) -> Vec<Substitution> {
    let mut patterns = query.patterns.iter();
    let Some(first) = patterns.next() else {
        return Vec::new();
    };

    let mut combined = store.match_pattern(first);
    for pattern in patterns {
        if combined.is_empty() {
            break;
        }
        let matches = store.match_pattern(pattern);
        combined = join(&combined, &matches);
    }
    combined
}

/// Joins two substitution sets by merging every compatible pair.
///
/// Pure and store-independent, so it can be exercised with synthetic
/// substitutions.
pub fn join(left: &[Substitution], right: &[Substitution]) -> Vec<Substitution> {
    let mut merged = Vec::new();
    for existing in left {
        for candidate in right {
            if let Some(result) = existing.merge(candidate) {
                merged.push(result);
            }
        }
    }
    merged
}
