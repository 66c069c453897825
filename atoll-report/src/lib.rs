//! Report rendering for storage catalogs and query views.
//!
//! Thin formatting layer over `atoll-storage` and `atoll-query`: it walks a
//! snapshot, lists extents per dataset, and renders plain-text lines or a
//! JSON document. Item-level failures (an unreadable layout, a short read
//! during checksumming) become inline notices; the walk always continues.

pub mod storage;
pub mod view;

pub use storage::{storage_report_json, storage_report_lines, ReportFormat, StorageReportOptions};
pub use view::view_report_lines;
