use crate::snapshot::SnapshotError;
use crate::value::DataType;

pub type ContainerResult<T> = std::result::Result<T, ContainerError>;

#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("Object already exists at {0}")]
    DuplicateMember(String),
    #[error("No object at {0}")]
    UnknownPath(String),
    #[error("Object at {0} is not a group")]
    NotAGroup(String),
    #[error("Object at {0} is not a dataset")]
    NotADataset(String),
    #[error("No attribute {name} on object {path}")]
    UnknownAttribute { path: String, name: String },
    #[error("Version {0} is already committed")]
    VersionCommitted(u64),
    #[error("Version {version} does not follow latest committed version {latest}")]
    VersionOrder { version: u64, latest: u64 },
    #[error("Dataset type {dtype} is not valid for dataset elements")]
    InvalidElementType { dtype: DataType },
    #[error("Data length {actual} does not match shape element count {expected}")]
    ShapeMismatch { expected: u64, actual: u64 },
    #[error("Chunk shape rank {chunk_rank} does not match dataset rank {rank}")]
    ChunkRankMismatch { chunk_rank: usize, rank: usize },
    #[error("Reference belongs to container {reference}, not {snapshot}")]
    ForeignReference { reference: String, snapshot: String },
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
