//! Typed references into a container.
//!
//! References are value types: equality and hashing are structural, and every
//! reference carries the identity of its owning container so references from
//! different containers never collide. A reference stores only what the
//! container needs to resolve it later, possibly against a later snapshot of
//! the same lineage.

use std::collections::BTreeSet;

use crate::container::ContainerId;

/// Reference to a whole object (dataset or group) by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ObjectReference {
    pub container: ContainerId,
    pub path: String,
}

/// Reference to one attribute of an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AttributeReference {
    pub container: ContainerId,
    pub path: String,
    pub attribute: String,
}

/// Reference to a sub-selection of a dataset's elements.
///
/// The selection is the set of matching element coordinates; scattered
/// matches within one dataset coalesce into a single region reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RegionReference {
    pub container: ContainerId,
    pub path: String,
    pub selection: BTreeSet<Vec<u64>>,
}

impl RegionReference {
    /// Number of elements in the selection.
    pub fn num_points(&self) -> usize {
        self.selection.len()
    }
}

/// Any reference kind, as accepted by [`crate::Container::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Object(ObjectReference),
    Attribute(AttributeReference),
    Region(RegionReference),
}

impl Reference {
    pub fn container(&self) -> &ContainerId {
        match self {
            Reference::Object(r) => &r.container,
            Reference::Attribute(r) => &r.container,
            Reference::Region(r) => &r.container,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Reference::Object(r) => &r.path,
            Reference::Attribute(r) => &r.path,
            Reference::Region(r) => &r.path,
        }
    }
}

impl From<ObjectReference> for Reference {
    fn from(r: ObjectReference) -> Self {
        Reference::Object(r)
    }
}

impl From<AttributeReference> for Reference {
    fn from(r: AttributeReference) -> Self {
        Reference::Attribute(r)
    }
}

impl From<RegionReference> for Reference {
    fn from(r: RegionReference) -> Self {
        Reference::Region(r)
    }
}
