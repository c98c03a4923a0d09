//! `ct-trace` — per-vehicle trace loading, filtering, and resampling.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`fleet`]      | `Fleet<T>` (vehicle arena with insertion-ordered ids)     |
//! | [`filter`]     | `LocationState`, `TraceFilter`, `filter_trace`            |
//! | [`resample`]   | `Resampler`, `synthetic_count`                            |
//! | [`pipeline`]   | `PipelineConfig`, `PipelineBuilder`, `run`                |
//! | [`loader`]     | `scan_directory`, `load_trace_file`, `load_trace_reader`  |
//! | [`error`]      | `TraceError`, `TraceResult<T>`                            |
//!
//! # Data flow (summary)
//!
//! ```text
//! raw fixes per vehicle ─ sort by time ─ TraceFilter ─ Resampler ─ OutputPoints
//! ```
//!
//! Each vehicle is processed independently.  Vehicles that end up with no
//! accepted fixes are dropped from the resulting fleet.

pub mod error;
pub mod filter;
pub mod fleet;
pub mod loader;
pub mod pipeline;
pub mod resample;


pub use error::{TraceError, TraceResult};
pub use filter::{LocationState, TraceFilter, filter_trace};
pub use fleet::Fleet;
pub use loader::{load_trace_file, load_trace_reader, scan_directory, vehicle_name};
pub use pipeline::{PipelineBuilder, PipelineConfig, process_vehicle, run};
pub use resample::{Resampler, synthetic_count};
