use std::io::Write;
use std::sync::Arc;

use atoll_container::{ByteSource, Container, FileByteSource, Snapshot};
use atoll_storage::{list_extents, ChecksumAlgorithm, ChecksumAnnotator, StorageError};

fn chunked_container() -> (Arc<Container>, Snapshot) {
    let container = Container::create("stinfo.h5");
    let mut tx = container.begin_transaction(2).unwrap();
    tx.create_dataset(
        "/cont",
        (0..50).map(|v| v as f64).collect::<Vec<f64>>(),
        vec![50],
        None,
    )
    .unwrap();
    tx.create_dataset(
        "/chunk",
        (0..30).collect::<Vec<i64>>(),
        vec![5, 6],
        Some(vec![2, 3]),
    )
    .unwrap();
    tx.commit().unwrap();
    let snapshot = container.acquire_snapshot(2).unwrap();
    (container, snapshot)
}

#[test]
fn extents_stay_within_the_backing_stream() {
    let (container, snapshot) = chunked_container();
    let state = snapshot.state().unwrap();
    let stream_len = container.arena_len();

    for path in ["/cont", "/chunk"] {
        for extent in list_extents(state.dataset_at(path).unwrap()).unwrap() {
            assert!(extent.file_addr + extent.size <= stream_len);
        }
    }
}

#[test]
fn file_backed_source_digests_match_the_arena() {
    let (container, snapshot) = chunked_container();
    let state = snapshot.state().unwrap();
    let extents = list_extents(state.dataset_at("/chunk").unwrap()).unwrap();

    // Spill the backing stream to a real file.
    let mut arena = container.byte_source();
    let bytes = arena.read_at(0, container.arena_len()).unwrap();
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&bytes).unwrap();

    let annotator = ChecksumAnnotator::new(ChecksumAlgorithm::Sha3_256);
    let mut file_source = FileByteSource::open(tmp.path()).unwrap();
    for extent in &extents {
        let from_file = annotator.annotate(&mut file_source, extent).unwrap();
        let from_arena = annotator.annotate(&mut arena, extent).unwrap();
        assert_eq!(from_file, from_arena);
    }
}

#[test]
fn truncated_file_fails_with_a_short_read() {
    let (container, snapshot) = chunked_container();
    let state = snapshot.state().unwrap();
    let extents = list_extents(state.dataset_at("/chunk").unwrap()).unwrap();
    let last = extents.last().unwrap();

    let mut arena = container.byte_source();
    let bytes = arena.read_at(0, container.arena_len()).unwrap();
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    // Drop the final byte of the stream.
    tmp.write_all(&bytes[..bytes.len() - 1]).unwrap();

    let annotator = ChecksumAnnotator::new(ChecksumAlgorithm::Sha3_256);
    let mut file_source = FileByteSource::open(tmp.path()).unwrap();
    let err = annotator.annotate(&mut file_source, last).unwrap_err();
    assert!(matches!(err, StorageError::ShortRead { got, wanted, .. } if got == wanted - 1));

    // Other extents of the same file still checksum fine.
    assert!(annotator.annotate(&mut file_source, &extents[0]).is_ok());
}
