use atoll_container::{ContainerError, Datum, SnapshotError};

use crate::predicate::TargetKind;

pub type QueryResult<T> = std::result::Result<T, QueryError>;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Operand type disagrees with the predicate's target kind. Raised at
    /// construction time, never deferred to evaluation.
    #[error("Operand {operand} ({dtype}) is not valid for {target} predicates",
            dtype = .operand.data_type())]
    TypeMismatch { target: TargetKind, operand: Datum },
    /// Stale or invalid snapshot at evaluation time; the whole `apply` call
    /// fails and no partial view is returned.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Container(#[from] ContainerError),
}
