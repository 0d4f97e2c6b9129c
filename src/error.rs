//! Error type shared by all pair-map variants.

use thiserror::Error;

/// Failure modes of pair-map operations.
///
/// Every failure is immediate and synchronous. Nothing is retried or
/// recovered internally; callers that expect absence should probe with
/// `contains_pair`/`contains_primary`/`contains_secondary` first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum LinkError {
    /// A lookup or removal referenced a key absent from its table.
    #[error("key not found")]
    KeyNotFound,
    /// `remove_pair` was called for a pair that is not linked.
    #[error("pair not found")]
    PairNotFound,
    /// Many-to-many `add_pair` was called for a pair already linked.
    #[error("pair already linked")]
    DuplicatePair,
    /// The forward and reverse tables disagree about a pair's membership.
    ///
    /// This reports a defect in whatever code maintained the tables, not
    /// bad caller input. It is propagated, never swallowed.
    #[error("pair tables out of sync")]
    OutOfSync,
}
