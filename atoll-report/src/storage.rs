use std::collections::BTreeMap;

use atoll_container::{traverse, Snapshot, SnapshotError};
use atoll_storage::{list_extents, Checksum, ChecksumAlgorithm, ChecksumAnnotator, StorageError};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

impl ReportFormat {
    /// Lenient parse for config values; anything unrecognized falls back to
    /// plain text.
    pub fn from_config(value: &str) -> ReportFormat {
        match value {
            "json" => ReportFormat::Json,
            _ => ReportFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StorageReportOptions {
    /// Compute a content digest per extent with this algorithm.
    pub checksum: Option<ChecksumAlgorithm>,
}

/// Plain-text storage report: one line per byte stream.
///
/// A dataset whose layout cannot be read, or whose checksum fails, gets an
/// inline notice; neither aborts the rest of the walk. Only an unavailable
/// snapshot is fatal.
pub fn storage_report_lines(
    snapshot: &Snapshot,
    options: &StorageReportOptions,
) -> Result<Vec<String>, SnapshotError> {
    let state = snapshot.state()?;
    let mut source = snapshot.container().byte_source();
    let annotator = options.checksum.map(ChecksumAnnotator::new);

    let mut lines = Vec::new();
    for (path, dataset) in traverse::datasets(&state.root) {
        let extents = match list_extents(&dataset) {
            Ok(extents) => extents,
            Err(err) => {
                warn!(dataset = %path, error = %err, "skipping dataset in storage report");
                lines.push(format!("Caught error for {}: {}", path, err));
                continue;
            }
        };
        if extents.is_empty() {
            lines.push(format!("Dataset: {} is empty", path));
            continue;
        }
        for extent in extents {
            let cksum_str = match annotate(annotator.as_ref(), &mut source, &extent) {
                Ok(Some(checksum)) => {
                    format!(", {}: {}", checksum.algorithm, checksum.digest)
                }
                Ok(None) => String::new(),
                Err(err) => {
                    lines.push(format!("Caught error for {}: {}", path, err));
                    continue;
                }
            };
            lines.push(format!(
                "Dataset: {}, byte stream #{}, logical address {}, at byte {} of size {} bytes{}",
                path,
                extent.order,
                extent.logical_addr_display(),
                extent.file_addr,
                extent.size,
                cksum_str
            ));
        }
    }
    Ok(lines)
}

#[derive(Debug, serde::Serialize)]
struct ByteStreamRecord {
    offset: u64,
    size: u64,
    order: usize,
    dspace_address: Vec<u64>,
    uuid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    cksum: Option<Checksum>,
}

#[derive(Debug, Default, serde::Serialize)]
struct DatasetRecord {
    #[serde(rename = "byteStreams")]
    byte_streams: Vec<ByteStreamRecord>,
}

/// JSON storage report: `{file_name: {dataset: {"byteStreams": [...]}}}`.
///
/// Datasets whose layout lookup fails are omitted (with a warning), matching
/// the plain report's skip-and-continue behavior.
pub fn storage_report_json(
    snapshot: &Snapshot,
    options: &StorageReportOptions,
) -> Result<serde_json::Value, SnapshotError> {
    let state = snapshot.state()?;
    let mut source = snapshot.container().byte_source();
    let annotator = options.checksum.map(ChecksumAnnotator::new);

    let mut datasets = BTreeMap::new();
    for (path, dataset) in traverse::datasets(&state.root) {
        let extents = match list_extents(&dataset) {
            Ok(extents) => extents,
            Err(err) => {
                warn!(dataset = %path, error = %err, "skipping dataset in storage report");
                continue;
            }
        };
        let mut record = DatasetRecord::default();
        for extent in extents {
            let cksum = annotate(annotator.as_ref(), &mut source, &extent).unwrap_or_else(|err| {
                warn!(dataset = %path, error = %err, "checksum unavailable");
                None
            });
            record.byte_streams.push(ByteStreamRecord {
                offset: extent.file_addr,
                size: extent.size,
                order: extent.order,
                dspace_address: extent.logical_addr.clone(),
                uuid: Uuid::new_v4(),
                cksum,
            });
        }
        datasets.insert(path, record);
    }

    let file_name = snapshot.container_id().name.clone();
    let report = BTreeMap::from([(file_name, datasets)]);
    Ok(serde_json::to_value(report).expect("report serialization is infallible"))
}

fn annotate(
    annotator: Option<&ChecksumAnnotator>,
    source: &mut atoll_container::MemoryByteSource,
    extent: &atoll_storage::Extent,
) -> Result<Option<Checksum>, StorageError> {
    match annotator {
        Some(annotator) => annotator.annotate(source, extent).map(Some),
        None => Ok(None),
    }
}
