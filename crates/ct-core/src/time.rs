//! Time model.
//!
//! Timestamps are absolute Unix times in integer milliseconds.  Input traces
//! carry whole seconds, which are scaled on load; keeping milliseconds as the
//! canonical unit makes cadence arithmetic exact.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// Absolute time in milliseconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// `None` if `secs` does not fit once scaled to milliseconds.
    #[inline]
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        secs.checked_mul(1_000).map(Timestamp)
    }

    #[inline]
    pub fn millis(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    /// Milliseconds elapsed from `earlier` to `self`; negative if `earlier`
    /// is actually later.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<Cadence> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: Cadence) -> Timestamp {
        Timestamp(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.since(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Cadence ───────────────────────────────────────────────────────────────────

/// Target interval between consecutive resampled points.  Always positive.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cadence(i64);

impl Cadence {
    pub fn from_millis(ms: i64) -> CoreResult<Self> {
        if ms <= 0 {
            return Err(CoreError::Config(format!("cadence must be positive, got {ms}ms")));
        }
        Ok(Cadence(ms))
    }

    #[inline]
    pub fn millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── TimeWindow ────────────────────────────────────────────────────────────────

/// Optional inclusive `[min, max]` bounds on fix timestamps.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub min: Option<Timestamp>,
    pub max: Option<Timestamp>,
}

impl TimeWindow {
    pub const UNBOUNDED: TimeWindow = TimeWindow { min: None, max: None };

    pub fn new(min: Option<Timestamp>, max: Option<Timestamp>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.min.is_none_or(|min| t >= min) && self.max.is_none_or(|max| t <= max)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(CoreError::Config(format!(
                    "time window is empty: min {min} is after max {max}"
                )));
            }
        }
        Ok(())
    }
}
