//! Create a demo container with contiguous, chunked, empty, and scalar
//! datasets, then print its storage report.
//!
//! `ATOLL_REPORT_FORMAT=json` switches to the JSON report and
//! `ATOLL_CHECKSUM=true` adds a content digest per byte stream.

use atoll_container::{Container, DataType};
use atoll_report::{
    storage_report_json, storage_report_lines, ReportFormat, StorageReportOptions,
};
use atoll_storage::ChecksumAlgorithm;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let container = Container::create("storage-demo.h5");
    let mut tx = container.begin_transaction(2)?;
    tx.create_dataset(
        "/cont",
        (0..10 * 20).map(|v| v as f64 / 7.0).collect::<Vec<f64>>(),
        vec![10, 20],
        None,
    )?;
    tx.create_dataset(
        "/chunk",
        (0..43 * 37).map(|v| v as f64 / 3.0).collect::<Vec<f64>>(),
        vec![43, 37],
        Some(vec![9, 12]),
    )?;
    tx.create_empty_dataset("/empty", DataType::Int32, vec![5, 10])?;
    tx.create_dataset("/scalar", vec![1000u16], vec![], None)?;
    tx.commit()?;

    let snapshot = container.acquire_snapshot(2)?;
    let options = StorageReportOptions {
        checksum: atoll_config::CONFIG
            .checksum
            .then_some(ChecksumAlgorithm::default()),
    };

    match ReportFormat::from_config(&atoll_config::CONFIG.report_format) {
        ReportFormat::Plain => {
            for line in storage_report_lines(&snapshot, &options)? {
                println!("{}", line);
            }
        }
        ReportFormat::Json => {
            let report = storage_report_json(&snapshot, &options)?;
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    container.release_snapshot(snapshot);
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| atoll_config::CONFIG.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
