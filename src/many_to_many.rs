//! Many-to-many pair map: arbitrary links between registered keys.

use crate::error::LinkError;
use crate::link_table::LinkTable;
use core::hash::Hash;

/// Bidirectional map with no cardinality restriction. Unlike the other
/// variants, keys must be registered before their first link on either
/// axis; linking never creates entries and never overwrites.
///
/// A key whose last link is removed is pruned together with its entry,
/// so it must be registered again before re-linking.
#[derive(Clone, Debug)]
pub struct ManyToMany<P, S> {
    table: LinkTable<P, S>,
}

impl<P, S> ManyToMany<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            table: LinkTable::new(),
        }
    }

    /// Creates an empty entry for `p` so it can be linked. Returns false
    /// if `p` already has an entry. A registered but unlinked key is not
    /// yet "contained" (see [`contains_primary`](Self::contains_primary)).
    pub fn register_primary(&mut self, p: P) -> bool {
        self.table.register_forward(p)
    }

    /// Creates an empty entry for `s`. Returns false if `s` already has
    /// an entry.
    pub fn register_secondary(&mut self, s: S) -> bool {
        self.table.register_reverse(s)
    }

    /// Links `p` to `s`. Pure addition: fails with `KeyNotFound` if
    /// either key is unregistered, `DuplicatePair` if the pair is already
    /// linked on both sides, and `OutOfSync` if it is linked on exactly
    /// one side.
    pub fn add_pair(&mut self, p: P, s: S) -> Result<(), LinkError> {
        let fwd = self
            .table
            .forward_membership(&p, &s)
            .ok_or(LinkError::KeyNotFound)?;
        let rev = self
            .table
            .reverse_membership(&s, &p)
            .ok_or(LinkError::KeyNotFound)?;
        match (fwd, rev) {
            (true, true) => Err(LinkError::DuplicatePair),
            (false, false) => {
                self.table.push_forward(p.clone(), s.clone());
                self.table.push_reverse(s, p);
                self.table.debug_audit_sync();
                Ok(())
            }
            _ => Err(LinkError::OutOfSync),
        }
    }

    /// Remove-then-re-add if the pair is linked, plain add otherwise.
    ///
    /// If the pair was a key's only link, the removal prunes that key's
    /// entry and the re-add fails with `KeyNotFound`; register the key
    /// again before retrying.
    pub fn set_pair(&mut self, p: P, s: S) -> Result<(), LinkError> {
        if self.table.contains_pair(&p, &s)? {
            self.table.remove_pair(&p, &s)?;
        }
        self.add_pair(p, s)
    }

    /// Independent copy of `s`'s primary list, in insertion order.
    pub fn get_primary_list(&self, s: &S) -> Result<Vec<P>, LinkError> {
        self.table.reverse_list(s)
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

    /// True iff `p` has at least one link; a registered but unlinked key
    /// reads as not contained.
    pub fn contains_primary(&self, p: &P) -> bool {
        self.table.contains_forward(p)
    }

    pub fn contains_secondary(&self, s: &S) -> bool {
        self.table.contains_reverse(s)
    }

    /// Fresh, insertion-ordered copy of the primary key set, registered
    /// but unlinked keys included.
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

impl<P, S> Default for ManyToMany<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
