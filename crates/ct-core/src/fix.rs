//! Raw observations and resampled output points.

use crate::{GeoPoint, Timestamp};

/// One raw, timestamped GPS observation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    pub point: GeoPoint,
    pub time:  Timestamp,
}

impl Fix {
    #[inline]
    pub fn new(lat: f64, lon: f64, time: Timestamp) -> Self {
        Self { point: GeoPoint::new(lat, lon), time }
    }

    /// Same timestamp, different position.
    #[inline]
    pub fn at(self, point: GeoPoint) -> Self {
        Self { point, time: self.time }
    }
}

/// A resampled point ready for output.
///
/// `x`/`y` are either raw latitude/longitude or coordinates in a remapped
/// target frame, depending on how the resampler was configured.  `time` is
/// always absolute; writers normalize it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputPoint {
    pub x:    f64,
    pub y:    f64,
    pub time: Timestamp,
}
