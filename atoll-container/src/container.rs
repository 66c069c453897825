use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::array::ArrayData;
use crate::byte_source::MemoryByteSource;
use crate::error::{ContainerError, ContainerResult};
use crate::layout::{ChunkLocation, StorageLayout};
use crate::reference::Reference;
use crate::snapshot::{Snapshot, SnapshotError};
use crate::value::{DataType, Datum};

/// Identity of one container, carried by every reference it produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ContainerId {
    pub name: String,
    pub uuid: Uuid,
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub value: Datum,
}

/// Dataset metadata plus its committed elements.
///
/// `layout` records where the element bytes landed in the container arena;
/// a dataset created without data keeps `StorageLayout::Empty` and no
/// elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub dtype: DataType,
    pub shape: Vec<u64>,
    pub layout: StorageLayout,
    pub data: Option<ArrayData>,
    pub attributes: IndexMap<String, Attribute>,
}

impl Dataset {
    /// Logical element count implied by the shape (1 for scalars).
    pub fn element_count(&self) -> u64 {
        self.shape.iter().product()
    }

    /// Row-major coordinates of flat index `i`.
    pub fn coords_of(&self, i: u64) -> Vec<u64> {
        coords_from_flat(&self.shape, i)
    }

    pub fn element(&self, coords: &[u64]) -> Option<Datum> {
        let data = self.data.as_ref()?;
        let flat = flat_from_coords(&self.shape, coords)?;
        data.get(flat as usize)
    }

    /// All committed elements as `(coordinates, value)` pairs, row-major.
    pub fn elements(&self) -> impl Iterator<Item = (Vec<u64>, Datum)> + '_ {
        self.data.iter().flat_map(move |data| {
            (0..data.len() as u64)
                .map(move |i| (self.coords_of(i), data.get(i as usize).expect("index in range")))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub attributes: IndexMap<String, Attribute>,
    pub members: IndexMap<String, Object>,
}

impl Group {
    pub fn member(&self, name: &str) -> Option<&Object> {
        self.members.get(name)
    }
}

/// Closed set of object kinds; traversal matches on this instead of any
/// runtime introspection.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Dataset(Arc<Dataset>),
    Group(Group),
}

impl Object {
    pub fn attributes(&self) -> &IndexMap<String, Attribute> {
        match self {
            Object::Dataset(d) => &d.attributes,
            Object::Group(g) => &g.attributes,
        }
    }

    pub fn as_dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            Object::Dataset(d) => Some(d),
            Object::Group(_) => None,
        }
    }
}

/// One immutable committed version of a container's object tree.
#[derive(Debug)]
pub struct ContainerState {
    pub version: u64,
    pub root: Group,
}

impl ContainerState {
    pub fn object_at(&self, path: &str) -> Option<&Object> {
        let mut current = match path.strip_prefix('/') {
            Some(rest) => rest,
            None => path,
        };
        if current.is_empty() {
            return None;
        }
        let mut group = &self.root;
        loop {
            match current.split_once('/') {
                Some((head, rest)) => match group.member(head)? {
                    Object::Group(g) => {
                        group = g;
                        current = rest;
                    }
                    Object::Dataset(_) => return None,
                },
                None => return group.member(current),
            }
        }
    }

    pub fn dataset_at(&self, path: &str) -> ContainerResult<&Arc<Dataset>> {
        match self.object_at(path) {
            Some(Object::Dataset(d)) => Ok(d),
            Some(Object::Group(_)) => Err(ContainerError::NotADataset(path.to_string())),
            None => Err(ContainerError::UnknownPath(path.to_string())),
        }
    }
}

/// The result of dereferencing a [`Reference`] against a snapshot.
#[derive(Debug, Clone)]
pub enum Resolved {
    Object { path: String, object: Object },
    Attribute { value: Datum },
    Region { values: Vec<Datum> },
}

struct Inner {
    arena: Vec<u8>,
    versions: BTreeMap<u64, Arc<ContainerState>>,
    active_tokens: HashSet<u64>,
    next_token: u64,
}

/// A versioned array container backed by an append-only byte arena.
///
/// Writes go through [`Container::begin_transaction`]; committed versions are
/// immutable and read through [`Snapshot`]s. The container never releases a
/// snapshot on the caller's behalf.
pub struct Container {
    id: ContainerId,
    inner: RwLock<Inner>,
}

impl Container {
    /// Create a container whose version 1 is an empty committed state.
    pub fn create(name: impl Into<String>) -> Arc<Container> {
        let mut versions = BTreeMap::new();
        versions.insert(
            1,
            Arc::new(ContainerState {
                version: 1,
                root: Group::default(),
            }),
        );
        Arc::new(Container {
            id: ContainerId {
                name: name.into(),
                uuid: Uuid::new_v4(),
            },
            inner: RwLock::new(Inner {
                arena: Vec::new(),
                versions,
                active_tokens: HashSet::new(),
                next_token: 1,
            }),
        })
    }

    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    pub fn latest_version(&self) -> u64 {
        let inner = self.inner.read();
        inner.versions.keys().next_back().copied().unwrap_or(0)
    }

    /// Acquire a read snapshot of a committed version.
    pub fn acquire_snapshot(self: &Arc<Self>, version: u64) -> Result<Snapshot, SnapshotError> {
        let mut inner = self.inner.write();
        if !inner.versions.contains_key(&version) {
            return Err(SnapshotError::SnapshotUnavailable {
                container: self.id.name.clone(),
                version,
            });
        }
        let token = inner.next_token;
        inner.next_token += 1;
        inner.active_tokens.insert(token);
        debug!(container = %self.id, version, token, "acquired snapshot");
        Ok(Snapshot {
            container: self.clone(),
            version,
            token,
        })
    }

    /// Retire a snapshot token. Later uses of the snapshot fail with
    /// [`SnapshotError::SnapshotUnavailable`].
    pub fn release_snapshot(&self, snapshot: Snapshot) {
        let mut inner = self.inner.write();
        inner.active_tokens.remove(&snapshot.token);
        debug!(container = %self.id, version = snapshot.version, token = snapshot.token, "released snapshot");
    }

    pub(crate) fn state_for(
        &self,
        snapshot: &Snapshot,
    ) -> Result<Arc<ContainerState>, SnapshotError> {
        let inner = self.inner.read();
        if !inner.active_tokens.contains(&snapshot.token) {
            return Err(SnapshotError::SnapshotUnavailable {
                container: self.id.name.clone(),
                version: snapshot.version,
            });
        }
        inner
            .versions
            .get(&snapshot.version)
            .cloned()
            .ok_or_else(|| SnapshotError::SnapshotUnavailable {
                container: self.id.name.clone(),
                version: snapshot.version,
            })
    }

    /// Consistent read view of the backing byte stream.
    pub fn byte_source(&self) -> MemoryByteSource {
        MemoryByteSource::new(self.inner.read().arena.clone())
    }

    pub fn arena_len(&self) -> u64 {
        self.inner.read().arena.len() as u64
    }

    /// Start a transaction that will commit as `version`.
    pub fn begin_transaction(self: &Arc<Self>, version: u64) -> ContainerResult<Transaction> {
        let inner = self.inner.read();
        if inner.versions.contains_key(&version) {
            return Err(ContainerError::VersionCommitted(version));
        }
        Ok(Transaction {
            container: self.clone(),
            version,
            ops: Vec::new(),
        })
    }

    /// Dereference a query-produced reference against a live snapshot of this
    /// container.
    pub fn resolve(&self, reference: &Reference, snapshot: &Snapshot) -> ContainerResult<Resolved> {
        if reference.container() != &self.id {
            return Err(ContainerError::ForeignReference {
                reference: reference.container().name.clone(),
                snapshot: self.id.name.clone(),
            });
        }
        let state = snapshot.state()?;
        match reference {
            Reference::Object(r) => match state.object_at(&r.path) {
                Some(object) => Ok(Resolved::Object {
                    path: r.path.clone(),
                    object: object.clone(),
                }),
                None => Err(ContainerError::UnknownPath(r.path.clone())),
            },
            Reference::Attribute(r) => {
                let object = state
                    .object_at(&r.path)
                    .ok_or_else(|| ContainerError::UnknownPath(r.path.clone()))?;
                let attribute = object.attributes().get(&r.attribute).ok_or_else(|| {
                    ContainerError::UnknownAttribute {
                        path: r.path.clone(),
                        name: r.attribute.clone(),
                    }
                })?;
                Ok(Resolved::Attribute {
                    value: attribute.value.clone(),
                })
            }
            Reference::Region(r) => {
                let dataset = state.dataset_at(&r.path)?;
                let values = r
                    .selection
                    .iter()
                    .filter_map(|coords| dataset.element(coords))
                    .collect();
                Ok(Resolved::Region { values })
            }
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container").field("id", &self.id).finish()
    }
}

enum Op {
    CreateGroup {
        path: String,
    },
    CreateDataset {
        path: String,
        data: ArrayData,
        shape: Vec<u64>,
        chunk_shape: Option<Vec<u64>>,
    },
    CreateEmptyDataset {
        path: String,
        dtype: DataType,
        shape: Vec<u64>,
    },
    CreateAttribute {
        path: String,
        name: String,
        value: Datum,
    },
    CreateLink {
        path: String,
        target: String,
    },
}

/// Buffered writes that become one new committed version.
///
/// Operations are validated cheaply when recorded and replayed onto a clone
/// of the latest tree at commit, so a dropped transaction leaves no trace.
pub struct Transaction {
    container: Arc<Container>,
    version: u64,
    ops: Vec<Op>,
}

impl Transaction {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn create_group(&mut self, path: impl Into<String>) {
        self.ops.push(Op::CreateGroup { path: path.into() });
    }

    /// Create a dataset with allocated storage. A `chunk_shape` selects
    /// chunked layout; otherwise the elements land in one contiguous extent.
    pub fn create_dataset(
        &mut self,
        path: impl Into<String>,
        data: impl Into<ArrayData>,
        shape: Vec<u64>,
        chunk_shape: Option<Vec<u64>>,
    ) -> ContainerResult<()> {
        let data = data.into();
        let count: u64 = shape.iter().product();
        if data.len() as u64 != count {
            return Err(ContainerError::ShapeMismatch {
                expected: count,
                actual: data.len() as u64,
            });
        }
        if let Some(chunk_shape) = &chunk_shape {
            if chunk_shape.len() != shape.len() {
                return Err(ContainerError::ChunkRankMismatch {
                    chunk_rank: chunk_shape.len(),
                    rank: shape.len(),
                });
            }
        }
        self.ops.push(Op::CreateDataset {
            path: path.into(),
            data,
            shape,
            chunk_shape,
        });
        Ok(())
    }

    /// Create a dataset without allocating storage.
    pub fn create_empty_dataset(
        &mut self,
        path: impl Into<String>,
        dtype: DataType,
        shape: Vec<u64>,
    ) -> ContainerResult<()> {
        if !dtype.is_numeric() {
            return Err(ContainerError::InvalidElementType { dtype });
        }
        self.ops.push(Op::CreateEmptyDataset {
            path: path.into(),
            dtype,
            shape,
        });
        Ok(())
    }

    pub fn create_attribute(
        &mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Datum>,
    ) {
        self.ops.push(Op::CreateAttribute {
            path: path.into(),
            name: name.into(),
            value: value.into(),
        });
    }

    /// Alias an existing object under a new link name. Dataset links share
    /// the underlying dataset.
    pub fn create_link(&mut self, path: impl Into<String>, target: impl Into<String>) {
        self.ops.push(Op::CreateLink {
            path: path.into(),
            target: target.into(),
        });
    }

    /// Publish the buffered writes as this transaction's version.
    pub fn commit(self) -> ContainerResult<u64> {
        let container = self.container;
        let mut inner = container.inner.write();
        if inner.versions.contains_key(&self.version) {
            return Err(ContainerError::VersionCommitted(self.version));
        }
        let latest = inner.versions.keys().next_back().copied().unwrap_or(0);
        if self.version <= latest {
            return Err(ContainerError::VersionOrder {
                version: self.version,
                latest,
            });
        }

        let mut root = inner
            .versions
            .values()
            .next_back()
            .map(|state| state.root.clone())
            .unwrap_or_default();

        for op in self.ops {
            apply_op(&mut root, &mut inner.arena, op)?;
        }

        debug!(container = %container.id, version = self.version, "committed transaction");
        inner.versions.insert(
            self.version,
            Arc::new(ContainerState {
                version: self.version,
                root,
            }),
        );
        Ok(self.version)
    }
}

fn apply_op(root: &mut Group, arena: &mut Vec<u8>, op: Op) -> ContainerResult<()> {
    match op {
        Op::CreateGroup { path } => {
            let (group, name) = parent_group_mut(root, &path)?;
            insert_member(group, &path, name, Object::Group(Group::default()))
        }
        Op::CreateDataset {
            path,
            data,
            shape,
            chunk_shape,
        } => {
            let layout = write_data(arena, &data, &shape, chunk_shape.as_deref());
            let dataset = Dataset {
                dtype: data.data_type(),
                shape,
                layout,
                data: Some(data),
                attributes: IndexMap::new(),
            };
            let (group, name) = parent_group_mut(root, &path)?;
            insert_member(group, &path, name, Object::Dataset(Arc::new(dataset)))
        }
        Op::CreateEmptyDataset { path, dtype, shape } => {
            let dataset = Dataset {
                dtype,
                shape,
                layout: StorageLayout::Empty,
                data: None,
                attributes: IndexMap::new(),
            };
            let (group, name) = parent_group_mut(root, &path)?;
            insert_member(group, &path, name, Object::Dataset(Arc::new(dataset)))
        }
        Op::CreateAttribute { path, name, value } => {
            let object = object_at_mut(root, &path)?;
            let attributes = match object {
                Object::Dataset(d) => &mut Arc::make_mut(d).attributes,
                Object::Group(g) => &mut g.attributes,
            };
            attributes.insert(name, Attribute { value });
            Ok(())
        }
        Op::CreateLink { path, target } => {
            let object = object_at_mut(root, &target)?.clone();
            let (group, name) = parent_group_mut(root, &path)?;
            insert_member(group, &path, name, object)
        }
    }
}

/// Append a dataset's element bytes to the arena and describe where they went.
fn write_data(
    arena: &mut Vec<u8>,
    data: &ArrayData,
    shape: &[u64],
    chunk_shape: Option<&[u64]>,
) -> StorageLayout {
    match chunk_shape {
        None => {
            let offset = arena.len() as u64;
            let bytes = data.encode_range(0, data.len());
            let size = bytes.len() as u64;
            arena.extend_from_slice(&bytes);
            StorageLayout::Contiguous { offset, size }
        }
        Some(chunk_shape) => {
            let mut chunks = Vec::new();
            for_each_chunk_origin(shape, chunk_shape, |origin| {
                let extent: Vec<u64> = origin
                    .iter()
                    .zip(chunk_shape)
                    .zip(shape)
                    .map(|((o, c), s)| (*c).min(s - o))
                    .collect();
                let offset = arena.len() as u64;
                let mut bytes = Vec::new();
                for_each_coord(&extent, |local| {
                    let global: Vec<u64> =
                        origin.iter().zip(local).map(|(o, l)| o + l).collect();
                    let flat = flat_from_coords(shape, &global).expect("coords within shape");
                    if let Some(datum) = data.get(flat as usize) {
                        datum.encode(&mut bytes);
                    }
                });
                let size = bytes.len() as u64;
                arena.extend_from_slice(&bytes);
                chunks.push(ChunkLocation {
                    logical_offset: origin.to_vec(),
                    offset,
                    size,
                });
            });
            StorageLayout::Chunked {
                chunk_shape: chunk_shape.to_vec(),
                chunks,
            }
        }
    }
}

fn insert_member(
    group: &mut Group,
    path: &str,
    name: &str,
    object: Object,
) -> ContainerResult<()> {
    if group.members.contains_key(name) {
        return Err(ContainerError::DuplicateMember(path.to_string()));
    }
    group.members.insert(name.to_string(), object);
    Ok(())
}

fn path_segments(path: &str) -> Vec<&str> {
    path.trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

fn parent_group_mut<'g, 'p>(
    root: &'g mut Group,
    path: &'p str,
) -> ContainerResult<(&'g mut Group, &'p str)> {
    let segments = path_segments(path);
    let (name, parents) = segments
        .split_last()
        .ok_or_else(|| ContainerError::UnknownPath(path.to_string()))?;
    let mut group = root;
    for segment in parents {
        group = match group.members.get_mut(*segment) {
            Some(Object::Group(g)) => g,
            Some(Object::Dataset(_)) => {
                return Err(ContainerError::NotAGroup(path.to_string()))
            }
            None => return Err(ContainerError::UnknownPath(path.to_string())),
        };
    }
    Ok((group, name))
}

fn object_at_mut<'g>(root: &'g mut Group, path: &str) -> ContainerResult<&'g mut Object> {
    let (group, name) = parent_group_mut(root, path)?;
    group
        .members
        .get_mut(name)
        .ok_or_else(|| ContainerError::UnknownPath(path.to_string()))
}

pub(crate) fn coords_from_flat(shape: &[u64], mut i: u64) -> Vec<u64> {
    let mut coords = vec![0u64; shape.len()];
    for d in (0..shape.len()).rev() {
        coords[d] = i % shape[d];
        i /= shape[d];
    }
    coords
}

pub(crate) fn flat_from_coords(shape: &[u64], coords: &[u64]) -> Option<u64> {
    if coords.len() != shape.len() {
        return None;
    }
    let mut flat = 0u64;
    for (c, s) in coords.iter().zip(shape) {
        if c >= s {
            return None;
        }
        flat = flat * s + c;
    }
    Some(flat)
}

/// Row-major iteration over every coordinate inside `extent`. An empty
/// extent (scalar) visits the empty coordinate once.
fn for_each_coord(extent: &[u64], mut f: impl FnMut(&[u64])) {
    if extent.iter().any(|e| *e == 0) {
        return;
    }
    let mut coord = vec![0u64; extent.len()];
    loop {
        f(&coord);
        let mut d = extent.len();
        loop {
            if d == 0 {
                return;
            }
            d -= 1;
            coord[d] += 1;
            if coord[d] < extent[d] {
                break;
            }
            coord[d] = 0;
        }
    }
}

/// Row-major iteration over chunk origins of the chunk grid.
fn for_each_chunk_origin(shape: &[u64], chunk_shape: &[u64], mut f: impl FnMut(&[u64])) {
    let grid: Vec<u64> = shape
        .iter()
        .zip(chunk_shape)
        .map(|(s, c)| s.div_ceil(*c))
        .collect();
    for_each_coord(&grid, |grid_coord| {
        let origin: Vec<u64> = grid_coord
            .iter()
            .zip(chunk_shape)
            .map(|(g, c)| g * c)
            .collect();
        f(&origin);
    });
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn committed(name: &str) -> (Arc<Container>, Snapshot) {
        let container = Container::create(name);
        let mut tx = container.begin_transaction(2).unwrap();
        tx.create_dataset("/pressure", (20..30).collect::<Vec<i32>>(), vec![10], None)
            .unwrap();
        tx.create_attribute("/pressure", "SensorID", "1234-567-89");
        tx.create_group("/readings");
        tx.create_dataset(
            "/readings/grid",
            (0..24).collect::<Vec<i32>>(),
            vec![4, 6],
            Some(vec![2, 4]),
        )
        .unwrap();
        tx.commit().unwrap();
        let snapshot = container.acquire_snapshot(2).unwrap();
        (container, snapshot)
    }

    #[test]
    fn commit_publishes_an_immutable_version() {
        let (container, snapshot) = committed("c1");
        let state = snapshot.state().unwrap();
        assert_eq!(state.version, 2);
        let dataset = state.dataset_at("/pressure").unwrap();
        assert_eq!(dataset.element(&[5]), Some(Datum::Int32(25)));

        // Version 1 is still the empty root.
        let v1 = container.acquire_snapshot(1).unwrap();
        assert!(v1.state().unwrap().object_at("/pressure").is_none());
    }

    #[test]
    fn released_snapshot_is_unavailable() {
        let (container, snapshot) = committed("c2");
        let stale = snapshot.clone();
        container.release_snapshot(snapshot);
        assert!(matches!(
            stale.state(),
            Err(SnapshotError::SnapshotUnavailable { .. })
        ));

        // Reacquiring the same version works.
        let fresh = container.acquire_snapshot(2).unwrap();
        assert!(fresh.state().is_ok());
    }

    #[test]
    fn acquiring_uncommitted_version_fails() {
        let container = Container::create("c3");
        assert!(matches!(
            container.acquire_snapshot(9),
            Err(SnapshotError::SnapshotUnavailable { .. })
        ));
    }

    #[test]
    fn commit_rejects_replayed_versions() {
        let (container, _snapshot) = committed("c4");
        assert!(matches!(
            container.begin_transaction(2),
            Err(ContainerError::VersionCommitted(2))
        ));
        let tx = container.begin_transaction(5).unwrap();
        tx.commit().unwrap();
        // A later transaction cannot commit below the new latest.
        let tx = container.begin_transaction(4).unwrap();
        assert!(matches!(
            tx.commit(),
            Err(ContainerError::VersionOrder { .. })
        ));
    }

    #[test]
    fn chunked_dataset_splits_into_partial_edge_chunks() {
        let (_container, snapshot) = committed("c5");
        let state = snapshot.state().unwrap();
        let dataset = state.dataset_at("/readings/grid").unwrap();
        match &dataset.layout {
            StorageLayout::Chunked { chunks, .. } => {
                // 4x6 elements in 2x4 chunks: 2x2 grid, right column partial.
                assert_eq!(chunks.len(), 4);
                assert_eq!(chunks[0].logical_offset, vec![0, 0]);
                assert_eq!(chunks[1].logical_offset, vec![0, 4]);
                assert_eq!(chunks[0].size, 2 * 4 * 4);
                assert_eq!(chunks[1].size, 2 * 2 * 4);
            }
            other => panic!("expected chunked layout, got {:?}", other),
        }
    }

    #[test]
    fn links_share_the_target_dataset() {
        let (container, _snapshot) = committed("c6");
        let mut tx = container.begin_transaction(3).unwrap();
        tx.create_link("/p_alias", "/pressure");
        tx.commit().unwrap();

        let snapshot = container.acquire_snapshot(3).unwrap();
        let state = snapshot.state().unwrap();
        let a = state.dataset_at("/pressure").unwrap();
        let b = state.dataset_at("/p_alias").unwrap();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn resolve_rejects_foreign_references() {
        let (_container_a, snapshot_a) = committed("a");
        let (container_b, _snapshot_b) = committed("b");
        let reference = Reference::Object(crate::reference::ObjectReference {
            container: snapshot_a.container_id().clone(),
            path: "/pressure".to_string(),
        });
        assert!(matches!(
            container_b.resolve(&reference, &snapshot_a),
            Err(ContainerError::ForeignReference { .. })
        ));
    }

    #[test]
    fn region_resolution_returns_selected_values() {
        let (container, snapshot) = committed("c7");
        let reference = Reference::Region(crate::reference::RegionReference {
            container: container.id().clone(),
            path: "/pressure".to_string(),
            selection: BTreeSet::from([vec![1], vec![3]]),
        });
        match container.resolve(&reference, &snapshot).unwrap() {
            Resolved::Region { values } => {
                assert_eq!(values, vec![Datum::Int32(21), Datum::Int32(23)]);
            }
            other => panic!("expected region, got {:?}", other),
        }
    }
}
