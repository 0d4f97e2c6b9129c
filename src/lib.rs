//! pair-map: bidirectional maps relating a primary key type to a
//! secondary key type, queryable from either side.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep two mirrored key tables in lockstep so each association
//!   can be resolved from either side, with cardinality policies layered
//!   on a single invariant-preserving core.
//! - Layers:
//!   - LinkTable<P, S>: structural layer owning both insertion-ordered
//!     tables. Implements pair removal with empty-entry pruning, bulk
//!     removal over a snapshot, existence checks, key enumeration, and
//!     the single-side insertion primitives the variants compose.
//!   - OneToOne / OneToMany / ManyToMany: public variants wrapping the
//!     table. Each contributes its insertion policy and typed getters;
//!     everything else is shared.
//!
//! Symmetry invariant
//! - For any primary `p` and secondary `s`, `s` is listed under `p` in
//!   the forward table exactly when `p` is listed under `s` in the
//!   reverse table. A one-sided membership is the out-of-sync defect
//!   state, surfaced as `LinkError::OutOfSync` and never swallowed.
//! - Only `link_table` can touch the two tables, so a one-sided mutation
//!   cannot be written outside that module. A debug-only audit re-walks
//!   both tables after each complete mutation and panics on violation;
//!   it compiles to nothing in release builds.
//!
//! Constraints
//! - Single-threaded and synchronous. Mutators take `&mut self`, so a
//!   half-updated table is never observable within a thread. Callers
//!   that need cross-thread mutation wrap the whole container in one
//!   lock; the two tables form a single logical unit.
//! - Keys are owned values on both sides (`Clone + Eq + Hash`). Key
//!   enumeration preserves insertion order, and removals shift rather
//!   than swap so surviving keys keep their order.
//! - Accessors return independent copies (or plain borrows of single
//!   keys); nothing aliases internal list storage.
//!
//! Failure model
//! - Expected absences in `contains_*` checks return plain booleans.
//!   Lookups and removals on missing keys or pairs fail with
//!   `KeyNotFound`/`PairNotFound`; many-to-many re-links fail with
//!   `DuplicatePair`. All errors are immediate, nothing is retried.
//!
//! Notes and non-goals
//! - No persistence, no wire format, no background work.
//! - Many-to-many keys must be registered before their first link;
//!   the other variants create entries lazily.
//! - One-to-one and one-to-many linking displaces existing links of the
//!   keys involved and detaches the displaced pair on both sides.

mod error;
mod link_table;
mod many_to_many;
mod one_to_many;
mod one_to_one;

// Public surface
pub use error::LinkError;
pub use many_to_many::ManyToMany;
pub use one_to_many::OneToMany;
pub use one_to_one::OneToOne;
