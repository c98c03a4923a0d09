//! Gap-filling resampler.
//!
//! # Algorithm
//!
//! For consecutive kept fixes `prev`, `cur` with `gap = cur.time - prev.time`
//! and cadence `Δt`:
//!
//! ```text
//! n    = max(floor(gap / Δt), 0)
//! n    = n - 1           if n > 0   (cur itself fills the last slot)
//! step = distance(prev, cur) / n
//! ```
//!
//! `n` synthetic points are then emitted, each `Δt` after and `step` metres
//! beyond the previous one along the initial `bearing(prev, cur)`.  Steps
//! chain off the previous synthetic point rather than re-aiming at `cur`,
//! so long gaps drift slightly off the true geodesic.  Output values depend
//! on this; keep it.

use ct_core::{Cadence, Fix, GeoPoint, OutputPoint, Remapper, Timestamp};

/// Number of synthetic points to insert in a gap of `gap_ms` milliseconds.
///
/// Zero for gaps shorter than two cadence intervals and for zero or negative
/// gaps.
#[inline]
pub fn synthetic_count(gap_ms: i64, cadence: Cadence) -> usize {
    let n = (gap_ms / cadence.millis()).max(0);
    if n > 0 { (n - 1) as usize } else { 0 }
}

/// Turns a filtered, time-ordered trace into output points.
///
/// Without a cadence every fix maps to exactly one output point.  Without a
/// remapper output points carry raw latitude/longitude.
#[derive(Copy, Clone, Debug, Default)]
pub struct Resampler {
    cadence: Option<Cadence>,
    remap:   Option<Remapper>,
}

impl Resampler {
    pub fn new(cadence: Option<Cadence>, remap: Option<Remapper>) -> Self {
        Self { cadence, remap }
    }

    pub fn resample(&self, fixes: &[Fix]) -> Vec<OutputPoint> {
        let mut out = Vec::with_capacity(fixes.len());
        let mut prev: Option<Fix> = None;

        for &cur in fixes {
            if let (Some(prev), Some(cadence)) = (prev, self.cadence) {
                self.fill_gap(prev, cur, cadence, &mut out);
            }
            out.push(self.emit(cur.point, cur.time));
            prev = Some(cur);
        }

        out
    }

    fn fill_gap(&self, prev: Fix, cur: Fix, cadence: Cadence, out: &mut Vec<OutputPoint>) {
        let n = synthetic_count(cur.time - prev.time, cadence);
        if n == 0 {
            return;
        }

        let bearing = prev.point.bearing_deg(cur.point);
        let step = prev.point.distance_m(cur.point) / n as f64;

        let mut running = prev;
        for _ in 0..n {
            let next = Fix {
                point: running.point.destination(bearing, step),
                time:  running.time + cadence,
            };
            out.push(self.emit(next.point, next.time));
            running = next;
        }
    }

    #[inline]
    fn emit(&self, point: GeoPoint, time: Timestamp) -> OutputPoint {
        let (x, y) = match &self.remap {
            Some(remap) => remap.apply(point),
            None => (point.lat, point.lon),
        };
        OutputPoint { x, y, time }
    }
}
