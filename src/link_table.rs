//! LinkTable: structural layer keeping the two key tables in lockstep.
//!
//! Both tables are insertion-ordered. For any primary `p` and secondary
//! `s`, `s` is in `forward[p]` exactly when `p` is in `reverse[s]`; a
//! one-sided membership is the out-of-sync defect state. Keys whose list
//! empties are pruned from their table in the same operation, so apart
//! from explicitly registered many-to-many keys, no key maps to an empty
//! list.

use crate::error::LinkError;
use core::hash::Hash;
use indexmap::map::Entry;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub(crate) struct LinkTable<P, S> {
    forward: IndexMap<P, Vec<S>>,
    reverse: IndexMap<S, Vec<P>>,
}

impl<P, S> LinkTable<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
        }
    }

    /// Both sides agree the pair is linked: `Ok(true)`. Both sides agree
    /// it is not (including either key being absent entirely): `Ok(false)`.
    /// Exactly one side lists it: `Err(OutOfSync)`.
    pub(crate) fn contains_pair(&self, p: &P, s: &S) -> Result<bool, LinkError> {
        let fwd = self.forward.get(p).map_or(false, |list| list.contains(s));
        let rev = self.reverse.get(s).map_or(false, |list| list.contains(p));
        match (fwd, rev) {
            (true, true) => Ok(true),
            (false, false) => Ok(false),
            _ => Err(LinkError::OutOfSync),
        }
    }

    /// Key present and mapped to at least one partner. A registered but
    /// unlinked key reads as not contained.
    pub(crate) fn contains_forward(&self, p: &P) -> bool {
        self.forward.get(p).map_or(false, |list| !list.is_empty())
    }

    pub(crate) fn contains_reverse(&self, s: &S) -> bool {
        self.reverse.get(s).map_or(false, |list| !list.is_empty())
    }

    /// Fresh copy of the primary key set, insertion-ordered.
    pub(crate) fn forward_keys(&self) -> Vec<P> {
        self.forward.keys().cloned().collect()
    }

    pub(crate) fn reverse_keys(&self) -> Vec<S> {
        self.reverse.keys().cloned().collect()
    }

    pub(crate) fn pair_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pair_count() == 0
    }

    /// All linked pairs, primaries in insertion order, each primary's
    /// secondaries in their per-primary order. Cloned, nothing aliased.
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (P, S)> + '_ {
        self.forward
            .iter()
            .flat_map(|(p, list)| list.iter().map(move |s| (p.clone(), s.clone())))
    }

    /// Removes a linked pair from both sides, pruning either key whose
    /// list empties. `PairNotFound` if the pair is not linked; a
    /// one-sided membership surfaces as `OutOfSync` from the presence
    /// check before anything is mutated.
    pub(crate) fn remove_pair(&mut self, p: &P, s: &S) -> Result<(), LinkError> {
        if !self.contains_pair(p, s)? {
            return Err(LinkError::PairNotFound);
        }
        self.unlink(p, s);
        self.debug_audit_sync();
        Ok(())
    }

    /// Removes every pair involving `p`. `KeyNotFound` if `p` is absent.
    pub(crate) fn remove_forward(&mut self, p: &P) -> Result<(), LinkError> {
        // Removal mutates the list being walked; iterate a copy.
        let snapshot = match self.forward.get(p) {
            Some(list) => list.clone(),
            None => return Err(LinkError::KeyNotFound),
        };
        for s in &snapshot {
            self.remove_pair(p, s)?;
        }
        Ok(())
    }

    pub(crate) fn remove_reverse(&mut self, s: &S) -> Result<(), LinkError> {
        let snapshot = match self.reverse.get(s) {
            Some(list) => list.clone(),
            None => return Err(LinkError::KeyNotFound),
        };
        for p in &snapshot {
            self.remove_pair(p, s)?;
        }
        Ok(())
    }

    // ---- insertion primitives composed by the variants ----
    //
    // Each writes a single side; the calling policy is responsible for
    // leaving the tables symmetric before returning to its caller.

    /// Replaces `p`'s links with the single secondary `s`. An existing
    /// entry keeps its position in the key order.
    pub(crate) fn bind_forward(&mut self, p: P, s: S) {
        self.forward.insert(p, vec![s]);
    }

    pub(crate) fn bind_reverse(&mut self, s: S, p: P) {
        self.reverse.insert(s, vec![p]);
    }

    /// Appends `s` to `p`'s list, creating the entry on first use.
    pub(crate) fn push_forward(&mut self, p: P, s: S) {
        self.forward.entry(p).or_default().push(s);
    }

    pub(crate) fn push_reverse(&mut self, s: S, p: P) {
        self.reverse.entry(s).or_default().push(p);
    }

    /// Fully detaches every pair involving `p`, pruning as usual. No-op
    /// if `p` has no links.
    pub(crate) fn detach_forward(&mut self, p: &P) {
        let snapshot = match self.forward.get(p) {
            Some(list) => list.clone(),
            None => return,
        };
        for s in &snapshot {
            self.unlink(p, s);
        }
    }

    pub(crate) fn detach_reverse(&mut self, s: &S) {
        let snapshot = match self.reverse.get(s) {
            Some(list) => list.clone(),
            None => return,
        };
        for p in &snapshot {
            self.unlink(p, s);
        }
    }

    // ---- registration (many-to-many only) ----

    /// Creates an empty entry for `p`. Returns false if `p` already has
    /// one.
    pub(crate) fn register_forward(&mut self, p: P) -> bool {
        match self.forward.entry(p) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(Vec::new());
                true
            }
        }
    }

    pub(crate) fn register_reverse(&mut self, s: S) -> bool {
        match self.reverse.entry(s) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(Vec::new());
                true
            }
        }
    }

    /// `Some(linked)` when `p` is registered, `None` when unknown.
    pub(crate) fn forward_membership(&self, p: &P, s: &S) -> Option<bool> {
        self.forward.get(p).map(|list| list.contains(s))
    }

    pub(crate) fn reverse_membership(&self, s: &S, p: &P) -> Option<bool> {
        self.reverse.get(s).map(|list| list.contains(p))
    }

    // ---- getters surfaced by the variants ----

    /// Independent copy of `p`'s secondary list.
    pub(crate) fn forward_list(&self, p: &P) -> Result<Vec<S>, LinkError> {
        self.forward.get(p).cloned().ok_or(LinkError::KeyNotFound)
    }

    pub(crate) fn reverse_list(&self, s: &S) -> Result<Vec<P>, LinkError> {
        self.reverse.get(s).cloned().ok_or(LinkError::KeyNotFound)
    }

    /// The sole secondary of `p`. An empty list reads the same as an
    /// absent key.
    pub(crate) fn forward_single(&self, p: &P) -> Result<&S, LinkError> {
        self.forward
            .get(p)
            .and_then(|list| list.first())
            .ok_or(LinkError::KeyNotFound)
    }

    pub(crate) fn reverse_single(&self, s: &S) -> Result<&P, LinkError> {
        self.reverse
            .get(s)
            .and_then(|list| list.first())
            .ok_or(LinkError::KeyNotFound)
    }

    /// Removes the pair from whichever sides list it, pruning emptied
    /// keys. Callers have already established the pair is linked (or are
    /// detaching a displaced link they know about).
    fn unlink(&mut self, p: &P, s: &S) {
        if let Some(list) = self.forward.get_mut(p) {
            list.retain(|x| x != s);
            if list.is_empty() {
                self.forward.shift_remove(p);
            }
        }
        if let Some(list) = self.reverse.get_mut(s) {
            list.retain(|x| x != p);
            if list.is_empty() {
                self.reverse.shift_remove(s);
            }
        }
    }

    /// Debug builds: walk both tables and panic on any one-sided
    /// membership. Compiles to nothing in release builds. Variants call
    /// this after every complete mutation.
    #[inline]
    pub(crate) fn debug_audit_sync(&self) {
        #[cfg(debug_assertions)]
        {
            for (p, list) in &self.forward {
                for s in list {
                    let mirrored = self.reverse.get(s).map_or(false, |back| back.contains(p));
                    assert!(mirrored, "pair tables out of sync: forward link has no reverse twin");
                }
            }
            for (s, list) in &self.reverse {
                for p in list {
                    let mirrored = self.forward.get(p).map_or(false, |fwd| fwd.contains(s));
                    assert!(mirrored, "pair tables out of sync: reverse link has no forward twin");
                }
            }
        }
    }
}

impl<P, S> Default for LinkTable<P, S>
where
    P: Clone + Eq + Hash,
    S: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
