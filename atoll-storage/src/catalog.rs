use atoll_container::{Dataset, StorageLayout};
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::extent::Extent;

/// List the physical extents backing a dataset, ordered by `order`.
///
/// A dataset with no allocated storage yields an empty list; that is not an
/// error. `StorageError::LayoutUnavailable` is reserved for layout metadata
/// this reader cannot interpret. Pure read: repeated calls against the same
/// committed dataset return identical extents.
pub fn list_extents(dataset: &Dataset) -> StorageResult<Vec<Extent>> {
    match &dataset.layout {
        StorageLayout::Empty => Ok(Vec::new()),
        StorageLayout::Contiguous { offset, size } => Ok(vec![Extent {
            order: 0,
            logical_addr: Vec::new(),
            file_addr: *offset,
            size: *size,
            checksum: None,
        }]),
        StorageLayout::Chunked { chunks, .. } => {
            let extents = chunks
                .iter()
                .enumerate()
                .map(|(order, chunk)| Extent {
                    order,
                    logical_addr: chunk.logical_offset.clone(),
                    file_addr: chunk.offset,
                    size: chunk.size,
                    checksum: None,
                })
                .collect::<Vec<_>>();
            debug!(chunks = extents.len(), "listed chunked extents");
            Ok(extents)
        }
        StorageLayout::Opaque { class } => {
            Err(StorageError::LayoutUnavailable { class: *class })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use atoll_container::{Container, DataType, Datum};

    use super::*;

    fn fixture() -> Arc<atoll_container::ContainerState> {
        let container = Container::create("catalog");
        let mut tx = container.begin_transaction(2).unwrap();
        tx.create_dataset(
            "/cont",
            (0..200).map(|v| v as f64).collect::<Vec<f64>>(),
            vec![10, 20],
            None,
        )
        .unwrap();
        tx.create_dataset(
            "/chunk",
            (0..43 * 37).map(|v| v as f64).collect::<Vec<f64>>(),
            vec![43, 37],
            Some(vec![9, 12]),
        )
        .unwrap();
        tx.create_empty_dataset("/empty", DataType::Int32, vec![5, 10])
            .unwrap();
        tx.create_dataset("/scalar", vec![1000u16], vec![], None)
            .unwrap();
        tx.commit().unwrap();
        let snapshot = container.acquire_snapshot(2).unwrap();
        snapshot.state().unwrap()
    }

    #[test]
    fn contiguous_storage_yields_one_extent() {
        let state = fixture();
        let extents = list_extents(state.dataset_at("/cont").unwrap()).unwrap();
        assert_eq!(extents.len(), 1);
        assert_eq!(extents[0].order, 0);
        assert!(extents[0].logical_addr.is_empty());
        assert_eq!(extents[0].size, 200 * 8);
    }

    #[test]
    fn chunked_orders_are_dense_and_ranges_disjoint() {
        let state = fixture();
        let extents = list_extents(state.dataset_at("/chunk").unwrap()).unwrap();
        // 43x37 in 9x12 chunks: a 5x4 chunk grid.
        assert_eq!(extents.len(), 20);
        for (i, extent) in extents.iter().enumerate() {
            assert_eq!(extent.order, i);
        }
        let mut ranges: Vec<(u64, u64)> = extents
            .iter()
            .map(|e| (e.file_addr, e.file_addr + e.size))
            .collect();
        ranges.sort();
        for pair in ranges.windows(2) {
            assert!(pair[0].1 <= pair[1].0, "extents overlap: {:?}", pair);
        }
    }

    #[test]
    fn listing_is_stable_across_calls() {
        let state = fixture();
        let dataset = state.dataset_at("/chunk").unwrap();
        assert_eq!(list_extents(dataset).unwrap(), list_extents(dataset).unwrap());
    }

    #[test]
    fn empty_dataset_yields_no_extents() {
        let state = fixture();
        let extents = list_extents(state.dataset_at("/empty").unwrap()).unwrap();
        assert!(extents.is_empty());
    }

    #[test]
    fn scalar_dataset_is_one_small_extent() {
        let state = fixture();
        let dataset = state.dataset_at("/scalar").unwrap();
        assert_eq!(dataset.element(&[]), Some(Datum::UInt16(1000)));
        let extents = list_extents(dataset).unwrap();
        assert_eq!(extents.len(), 1);
        assert_eq!(extents[0].size, 2);
    }

    #[test]
    fn opaque_layout_is_unavailable_not_empty() {
        let dataset = Dataset {
            dtype: DataType::Float64,
            shape: vec![4],
            layout: StorageLayout::Opaque { class: 7 },
            data: None,
            attributes: Default::default(),
        };
        assert!(matches!(
            list_extents(&dataset),
            Err(StorageError::LayoutUnavailable { class: 7 })
        ));
    }
}
