//! Versioned array container model.
//!
//! This crate hosts the data model the storage and query layers operate
//! against: typed scalar values and dense arrays, a group/dataset/attribute
//! tree, physical storage layout metadata backed by an append-only byte
//! arena, and transactional versioned snapshots. Each module focuses on a
//! single concern; higher layers compose them into storage reports and
//! query views.

pub mod array;
pub mod byte_source;
pub mod container;
pub mod error;
pub mod layout;
pub mod reference;
pub mod snapshot;
pub mod traverse;
pub mod value;

pub use array::ArrayData;
pub use byte_source::{ByteSource, FileByteSource, MemoryByteSource};
pub use container::{
    Attribute, Container, ContainerId, ContainerState, Dataset, Group, Object, Resolved,
    Transaction,
};
pub use error::{ContainerError, ContainerResult};
pub use layout::{ChunkLocation, StorageLayout};
pub use reference::{AttributeReference, ObjectReference, Reference, RegionReference};
pub use snapshot::{Snapshot, SnapshotError};
pub use value::{DataType, Datum};
