use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Bijective mapping between RDF term values and dense `u32` codes.
///
/// Codes are assigned in first-seen order starting at 0 and are never reused
/// or reassigned for the lifetime of the dictionary, so after encoding `n`
/// distinct values the assigned codes are exactly `0..n`. Codes are
/// process-local and not portable across store instances.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Dictionary {
    term_to_id: HashMap<String, u32>,
    id_to_term: Vec<String>,
    next_id: u32,
}

impl Dictionary {
    pub fn new() -> Self {
        Self { term_to_id: HashMap::new(), id_to_term: Vec::new(), next_id: 0 }
    }

    /// Returns the code for `value`, allocating the next unused code on first
    /// sight. Encoding the same value twice yields the same code.
    pub fn encode(&mut self, value: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(value) {
            id
        } else {
            let id = self.next_id;
            self.term_to_id.insert(value.to_string(), id);
            self.id_to_term.push(value.to_string());
            self.next_id += 1;
            id
        }
    }

    /// Looks up the code for `value` without allocating one. Pattern matching
    /// uses this so that a constant that was never stored simply yields no
    /// matches instead of growing the dictionary.
    pub fn lookup(&self, value: &str) -> Option<u32> {
        self.term_to_id.get(value).copied()
    }

    /// Returns the value assigned to `id`. An unassigned code is a soft
    /// absence, not an error.
    pub fn decode(&self, id: u32) -> Option<&str> {
        self.id_to_term.get(id as usize).map(|s| s.as_str())
    }

    /// Encodes the three positions of a triple independently, growing the
    /// dictionary for each previously-unseen value.
    pub fn encode_triple(&mut self, subject: &str, predicate: &str, object: &str) -> [u32; 3] {
        [self.encode(subject), self.encode(predicate), self.encode(object)]
    }

    /// Decodes the three positions independently; any position may come back
    /// `None` if its code was never assigned.
    pub fn decode_triple(&self, triple: [u32; 3]) -> [Option<&str>; 3] {
        [self.decode(triple[0]), self.decode(triple[1]), self.decode(triple[2])]
    }

    /// Number of distinct values encoded so far.
    pub fn len(&self) -> usize {
        self.id_to_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_term.is_empty()
    }
}
