//! One-to-many pair map: a primary owns an ordered list of secondaries,
//! each secondary belongs to exactly one primary.

use crate::error::LinkError;
use crate::link_table::LinkTable;
use core::hash::Hash;

/// Bidirectional map where a primary may own any number of secondaries
/// while each secondary is bound to a single primary. Reassigning a
/// secondary detaches it from its former primary first, so no stale
/// forward entry survives the move.
#[derive(Clone, Debug)]
pub struct OneToMany<P, S> {
    table: LinkTable<P, S>,
}

impl<P, S> OneToMany<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            table: LinkTable::new(),
        }
    }

    /// Appends `s` to `p`'s list and binds `s`'s sole primary to `p`.
    /// If `s` was already linked, to `p` itself or to another primary,
    /// that old pair is detached first; re-adding an existing pair
    /// therefore moves `s` to the tail of `p`'s list.
    pub fn add_pair(&mut self, p: P, s: S) {
        self.table.detach_reverse(&s);
        self.table.push_forward(p.clone(), s.clone());
        self.table.bind_reverse(s, p);
        self.table.debug_audit_sync();
    }

    /// Remove-then-re-add. Coincides with [`add_pair`](Self::add_pair)
    /// for this variant, since linking already detaches the secondary's
    /// old pair.
    pub fn set_pair(&mut self, p: P, s: S) {
        self.add_pair(p, s);
    }

    /// The primary owning `s`, or `KeyNotFound`.
    pub fn get_primary(&self, s: &S) -> Result<&P, LinkError> {
        self.table.reverse_single(s)
    }

    /// Independent copy of `p`'s secondary list, in insertion order.
    pub fn get_secondary_list(&self, p: &P) -> Result<Vec<S>, LinkError> {
        self.table.forward_list(p)
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

impl<P, S> Default for OneToMany<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
