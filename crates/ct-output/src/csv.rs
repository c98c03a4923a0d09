//! Space-delimited text backend.
//!
//! Creates one `<id>.txt` per vehicle in the output directory, one row per
//! point, no header:
//!
//! ```text
//! -0.00102 0.00053 0.000
//! -0.00101 0.00054 1.000
//! ```
//!
//! Coordinates carry 5 decimals; elapsed time is in seconds with millisecond
//! precision.

use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::debug;

use ct_core::VehicleId;

use crate::writer::DatasetWriter;
use crate::{DatasetRow, OutputResult};

pub struct CsvDatasetWriter {
    dir:      PathBuf,
    files:    usize,
    finished: bool,
}

impl CsvDatasetWriter {
    /// Use `dir` for output, creating it (and any parents) if missing.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), files: 0, finished: false })
    }

    /// Number of vehicle files written so far.
    pub fn files_written(&self) -> usize {
        self.files
    }

    pub fn path_for(&self, id: VehicleId) -> PathBuf {
        self.dir.join(format!("{}.txt", id.0))
    }
}

impl DatasetWriter for CsvDatasetWriter {
    fn write_vehicle(&mut self, id: VehicleId, rows: &[DatasetRow]) -> OutputResult<()> {
        let mut out = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_path(self.path_for(id))?;

        for row in rows {
            out.write_record(&[
                format!("{:.5}", row.x),
                format!("{:.5}", row.y),
                format!("{:.3}", row.elapsed_secs()),
            ])?;
        }
        out.flush()?;
        self.files += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        // Files are flushed per vehicle; nothing is left open here.
        self.finished = true;
        debug!("{} vehicle files in {}", self.files, self.dir.display());
        Ok(())
    }
}
