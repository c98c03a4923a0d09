//! Plain data row types written by dataset backends.

/// One output point with its time made relative to the dataset start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRow {
    pub x:          f64,
    pub y:          f64,
    /// Milliseconds since the earliest point of any vehicle.  Never negative.
    pub elapsed_ms: i64,
}

impl DatasetRow {
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1_000.0
    }
}
