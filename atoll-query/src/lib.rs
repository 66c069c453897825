//! Predicate query engine over versioned container snapshots.
//!
//! Queries are immutable trees built bottom-up from comparison leaves
//! ([`Predicate::compare`]) and AND/OR nodes ([`Predicate::combine`]).
//! Applying a tree to a snapshot walks the target scope once and materializes
//! matches as a [`ViewResult`] of typed, deduplicated references.

pub mod error;
pub mod evaluator;
pub mod predicate;
pub mod view;

pub use error::{QueryError, QueryResult};
pub use evaluator::{QueryEvaluator, QueryScope};
pub use predicate::{CombineOp, CompareOp, Predicate, TargetKind};
pub use view::{ReferenceSet, ViewFlags, ViewResult};
