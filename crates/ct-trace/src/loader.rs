//! Trace file loader.
//!
//! # File format
//!
//! One file per cab, named `new_<cab>.txt`.  One space-delimited row per GPS
//! fix, no header:
//!
//! ```text
//! 37.75134 -122.39488 0 1213084687
//! 37.75136 -122.39527 0 1213084659
//! ```
//!
//! | Column | Meaning                         |
//! |--------|---------------------------------|
//! | 0      | latitude (degrees)              |
//! | 1      | longitude (degrees)             |
//! | 2      | occupancy flag (ignored)        |
//! | 3      | Unix timestamp (whole seconds)  |
//!
//! Rows need not be in time order.  A malformed row fails the whole load.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use serde::de::IgnoredAny;

use ct_core::{Fix, Timestamp};

use crate::{Fleet, TraceError, TraceResult};

const FILE_PREFIX: &str = "new_";
const FILE_SUFFIX: &str = ".txt";

// ── Record ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TraceRecord {
    latitude:   f64,
    longitude:  f64,
    _occupancy: IgnoredAny,
    unix_secs:  i64,
}

impl TraceRecord {
    /// `None` when the timestamp overflows once scaled to milliseconds.
    fn into_fix(self) -> Option<Fix> {
        let time = Timestamp::from_unix_secs(self.unix_secs)?;
        Some(Fix::new(self.latitude, self.longitude, time))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// The vehicle name encoded in a trace file name, or `None` if the file is
/// not a trace.
///
/// `new_abboip.txt` → `abboip`.
pub fn vehicle_name(file_name: &str) -> Option<&str> {
    file_name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)
}

/// Load every trace file in `dir` into a fleet.
///
/// Files are visited in name order so vehicle ids are stable across runs.
/// Non-trace files and subdirectories are skipped.
pub fn scan_directory(dir: &Path) -> TraceResult<Fleet<Vec<Fix>>> {
    let mut traces: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str().and_then(vehicle_name) else {
            continue;
        };
        traces.push((name.to_owned(), entry.path()));
    }
    traces.sort();

    let mut fleet: Fleet<Vec<Fix>> = Fleet::new();
    for (name, path) in traces {
        info!("processing {}", path.display());
        let fixes = load_trace_file(&path)?;
        fleet.entry(&name).extend(fixes);
    }
    Ok(fleet)
}

/// Load one trace file.
pub fn load_trace_file(path: &Path) -> TraceResult<Vec<Fix>> {
    let file = File::open(path)?;
    load_trace_reader(file, &path.display().to_string())
}

/// Like [`load_trace_file`] but accepts any `Read` source.  `label` names the
/// source in parse errors.
pub fn load_trace_reader<R: Read>(reader: R, label: &str) -> TraceResult<Vec<Fix>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_reader(reader);

    let parse_error = |message: String| TraceError::Parse { file: label.to_owned(), message };

    csv_reader
        .deserialize::<TraceRecord>()
        .map(|result| {
            let record = result.map_err(|e| parse_error(e.to_string()))?;
            let secs = record.unix_secs;
            record
                .into_fix()
                .ok_or_else(|| parse_error(format!("timestamp {secs}s is out of range")))
        })
        .collect()
}
