use std::hash::Hash;

use atoll_container::{AttributeReference, ObjectReference, RegionReference};
use indexmap::IndexSet;

bitflags::bitflags! {
    /// Which reference kinds a view holds. Derived from the sets themselves;
    /// see [`ViewResult::recompute_flags`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewFlags: u32 {
        const OBJECTS    = 0b001;
        const REGIONS    = 0b010;
        const ATTRIBUTES = 0b100;
    }
}

/// Deduplicated reference collection with stable iteration order.
///
/// Inserting a structurally equal reference twice is a no-op.
#[derive(Debug, Clone)]
pub struct ReferenceSet<T: Hash + Eq>(IndexSet<T>);

impl<T: Hash + Eq> Default for ReferenceSet<T> {
    fn default() -> Self {
        Self(IndexSet::new())
    }
}

impl<T: Hash + Eq> ReferenceSet<T> {
    pub fn insert(&mut self, reference: T) -> bool {
        self.0.insert(reference)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, reference: &T) -> bool {
        self.0.contains(reference)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

/// The materialized output of applying a query: typed reference sets plus a
/// flags bitmask saying which sets are non-empty.
#[derive(Debug, Clone, Default)]
pub struct ViewResult {
    objects: ReferenceSet<ObjectReference>,
    attributes: ReferenceSet<AttributeReference>,
    regions: ReferenceSet<RegionReference>,
    flags: ViewFlags,
}

impl Default for ViewFlags {
    fn default() -> Self {
        ViewFlags::empty()
    }
}

impl ViewResult {
    pub fn insert_object(&mut self, reference: ObjectReference) -> bool {
        let inserted = self.objects.insert(reference);
        self.recompute_flags();
        inserted
    }

    pub fn insert_attribute(&mut self, reference: AttributeReference) -> bool {
        let inserted = self.attributes.insert(reference);
        self.recompute_flags();
        inserted
    }

    pub fn insert_region(&mut self, reference: RegionReference) -> bool {
        let inserted = self.regions.insert(reference);
        self.recompute_flags();
        inserted
    }

    /// Union another view into this one. References carry their owning
    /// container identity, so results from different containers never merge.
    pub fn merge(&mut self, other: ViewResult) {
        for reference in other.objects.0 {
            self.objects.insert(reference);
        }
        for reference in other.attributes.0 {
            self.attributes.insert(reference);
        }
        for reference in other.regions.0 {
            self.regions.insert(reference);
        }
        self.recompute_flags();
    }

    pub fn objects(&self) -> &ReferenceSet<ObjectReference> {
        &self.objects
    }

    pub fn attributes(&self) -> &ReferenceSet<AttributeReference> {
        &self.attributes
    }

    pub fn regions(&self) -> &ReferenceSet<RegionReference> {
        &self.regions
    }

    pub fn flags(&self) -> ViewFlags {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Rebuild the flags wholesale from the sets. Flags are a derived field;
    /// recomputing after every mutation keeps them from drifting.
    fn recompute_flags(&mut self) {
        let mut flags = ViewFlags::empty();
        flags.set(ViewFlags::OBJECTS, !self.objects.is_empty());
        flags.set(ViewFlags::REGIONS, !self.regions.is_empty());
        flags.set(ViewFlags::ATTRIBUTES, !self.attributes.is_empty());
        self.flags = flags;
    }
}
