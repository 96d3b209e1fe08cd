use std::collections::BTreeSet;

/// Six-way permutation index over dictionary-encoded triples.
///
/// A single ordering such as (s, p, o) only answers a pattern efficiently when
/// a *prefix* of that ordering is bound; a pattern binding only the object
/// would degrade to a full scan. Keeping all six permutations guarantees that
/// whatever subset of positions a pattern binds, one ordering has exactly
/// those positions as a contiguous prefix, so every lookup is an ordered range
/// scan with no residual filtering.
///
/// The six sets are one logical relation with six physical access paths.
/// Mutation goes through [`TripleIndex::add_triple`] only, which updates all
/// six, so the orderings cannot diverge.
#[derive(Debug, Default)]
pub struct TripleIndex {
    spo: BTreeSet<(u32, u32, u32)>,
    sop: BTreeSet<(u32, u32, u32)>,
    pso: BTreeSet<(u32, u32, u32)>,
    pos: BTreeSet<(u32, u32, u32)>,
    osp: BTreeSet<(u32, u32, u32)>,
    ops: BTreeSet<(u32, u32, u32)>,
}

impl TripleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the encoded triple under all six orderings. Returns whether the
    /// triple was not present before; the set semantics make re-insertion a
    /// no-op across all orderings at once.
    pub fn add_triple(&mut self, s: u32, p: u32, o: u32) -> bool {
        let inserted = self.spo.insert((s, p, o));
        self.sop.insert((s, o, p));
        self.pso.insert((p, s, o));
        self.pos.insert((p, o, s));
        self.osp.insert((o, s, p));
        self.ops.insert((o, p, s));
        inserted
    }

    /// True when the fully-bound triple is stored.
    pub fn contains(&self, s: u32, p: u32, o: u32) -> bool {
        self.spo.contains(&(s, p, o))
    }

    /// Returns every stored triple matching the non-wildcard positions, in
    /// canonical (s, p, o) shape. `None` is the wildcard. Each arm picks the
    /// ordering whose prefix covers exactly the bound positions.
    pub fn find_matches(
        &self,
        s: Option<u32>,
        p: Option<u32>,
        o: Option<u32>,
    ) -> Vec<(u32, u32, u32)> {
        match (s, p, o) {
            (Some(s), Some(p), Some(o)) => {
                if self.contains(s, p, o) {
                    vec![(s, p, o)]
                } else {
                    Vec::new()
                }
            }
            (Some(s), Some(p), None) => self
                .spo
                .range((s, p, u32::MIN)..=(s, p, u32::MAX))
                .copied()
                .collect(),
            (Some(s), None, Some(o)) => self
                .sop
                .range((s, o, u32::MIN)..=(s, o, u32::MAX))
                .map(|&(s, o, p)| (s, p, o))
                .collect(),
            (None, Some(p), Some(o)) => self
                .pos
                .range((p, o, u32::MIN)..=(p, o, u32::MAX))
                .map(|&(p, o, s)| (s, p, o))
                .collect(),
            (Some(s), None, None) => self
                .spo
                .range((s, u32::MIN, u32::MIN)..=(s, u32::MAX, u32::MAX))
                .copied()
                .collect(),
            (None, Some(p), None) => self
                .pso
                .range((p, u32::MIN, u32::MIN)..=(p, u32::MAX, u32::MAX))
                .map(|&(p, s, o)| (s, p, o))
                .collect(),
            (None, None, Some(o)) => self
                .osp
                .range((o, u32::MIN, u32::MIN)..=(o, u32::MAX, u32::MAX))
                .map(|&(o, s, p)| (s, p, o))
                .collect(),
            (None, None, None) => self.spo.iter().copied().collect(),
        }
    }

    /// Every stored triple exactly once, taken from the spo ordering.
    pub fn get_all_triples(&self) -> Vec<(u32, u32, u32)> {
        self.spo.iter().copied().collect()
    }

    /// Number of distinct stored triples.
    pub fn len(&self) -> usize {
        self.spo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spo.is_empty()
    }
}
