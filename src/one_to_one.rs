//! One-to-one pair map: each key on either side has exactly one partner.

use crate::error::LinkError;
use crate::link_table::LinkTable;
use core::hash::Hash;

/// Bidirectional map where every primary has exactly one secondary and
/// vice versa. Linking a key displaces whatever link it held before, and
/// the displaced partner is detached on both sides rather than left with
/// a stale entry.
#[derive(Clone, Debug)]
pub struct OneToOne<P, S> {
    table: LinkTable<P, S>,
}

impl<P, S> OneToOne<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            table: LinkTable::new(),
        }
    }

    /// Links `p` to `s`. Any existing link of `p` and any existing link
    /// of `s` is removed first, pruning the displaced partner.
    pub fn add_pair(&mut self, p: P, s: S) {
        self.table.detach_forward(&p);
        self.table.detach_reverse(&s);
        self.table.bind_forward(p.clone(), s.clone());
        self.table.bind_reverse(s, p);
        self.table.debug_audit_sync();
    }

    /// Remove-then-re-add. Coincides with [`add_pair`](Self::add_pair)
    /// for this variant, since linking already displaces both keys' old
    /// links.
    pub fn set_pair(&mut self, p: P, s: S) {
        self.add_pair(p, s);
    }

    /// The secondary linked to `p`, or `KeyNotFound`.
    pub fn get_secondary(&self, p: &P) -> Result<&S, LinkError> {
        self.table.forward_single(p)
    }

    /// The primary linked to `s`, or `KeyNotFound`.
    pub fn get_primary(&self, s: &S) -> Result<&P, LinkError> {
        self.table.reverse_single(s)
    }

    pub fn remove_pair(&mut self, p: &P, s: &S) -> Result<(), LinkError> {
        self.table.remove_pair(p, s)
    }

    pub fn remove_primary(&mut self, p: &P) -> Result<(), LinkError> {
        self.table.remove_forward(p)
    }

    pub fn remove_secondary(&mut self, s: &S) -> Result<(), LinkError> {
        self.table.remove_reverse(s)
    }

    pub fn contains_pair(&self, p: &P, s: &S) -> Result<bool, LinkError> {
        self.table.contains_pair(p, s)
    }

    pub fn contains_primary(&self, p: &P) -> bool {
        self.table.contains_forward(p)
    }

    pub fn contains_secondary(&self, s: &S) -> bool {
        self.table.contains_reverse(s)
    }

    /// Fresh, insertion-ordered copy of the primary key set.
    pub fn primary_keys(&self) -> Vec<P> {
        self.table.forward_keys()
    }

    /// Fresh, insertion-ordered copy of the secondary key set.
    pub fn secondary_keys(&self) -> Vec<S> {
        self.table.reverse_keys()
    }

    pub fn pair_count(&self) -> usize {
        self.table.pair_count()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All linked pairs in primary insertion order, cloned.
    pub fn pairs(&self) -> impl Iterator<Item = (P, S)> + '_ {
        self.table.pairs()
    }
}

impl<P, S> Default for OneToOne<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
