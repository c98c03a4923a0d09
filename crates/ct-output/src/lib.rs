//! `ct-output` — what happens to resampled traces.
//!
//! Two modes, selected by the caller:
//!
//! | Mode       | Entry point           | Result                                   |
//! |------------|-----------------------|------------------------------------------|
//! | limits     | [`compute_limits`]    | global x/y/time bounds + vehicle count   |
//! | generate   | [`export_dataset`]    | one `<id>.txt` per vehicle via a writer  |
//!
//! Dataset backends implement [`DatasetWriter`]; [`CsvDatasetWriter`] is the
//! space-delimited text backend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{CsvDatasetWriter, export_dataset};
//!
//! let mut writer = CsvDatasetWriter::new(Path::new("/tmp/crawdad_processed"))?;
//! let vehicles = export_dataset(&fleet, &mut writer)?;
//! ```

pub mod csv;
pub mod dataset;
pub mod error;
pub mod limits;
pub mod row;
pub mod writer;


pub use crate::csv::CsvDatasetWriter;
pub use dataset::{export_dataset, global_min_time};
pub use error::{OutputError, OutputResult};
pub use limits::{Limits, compute_limits};
pub use row::DatasetRow;
pub use writer::DatasetWriter;
