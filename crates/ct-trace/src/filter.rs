//! Region and time-window filtering.
//!
//! Fixes outside the time window are discarded.  Fixes outside the region are
//! discarded until the vehicle has been seen inside it at least once; after
//! that they are pinned to the last in-region position (keeping their own
//! timestamp), so the resampler never sees a jump out of the region and back.

use ct_core::{BoundingBox, Fix, GeoPoint, TimeWindow};

/// Per-vehicle filter state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LocationState {
    NoGoodLocationYet,
    /// Position of the most recent fix that was genuinely inside the region.
    HasGoodLocation(GeoPoint),
}

/// Streaming filter for one vehicle.  Feed fixes in ascending time order.
#[derive(Clone, Debug)]
pub struct TraceFilter {
    region: BoundingBox,
    window: TimeWindow,
    state:  LocationState,
}

impl TraceFilter {
    pub fn new(region: BoundingBox, window: TimeWindow) -> Self {
        Self { region, window, state: LocationState::NoGoodLocationYet }
    }

    #[inline]
    pub fn state(&self) -> LocationState {
        self.state
    }

    /// Returns the fix to keep, possibly re-anchored, or `None` to drop it.
    pub fn accept(&mut self, fix: Fix) -> Option<Fix> {
        if !self.window.contains(fix.time) {
            return None;
        }

        if self.region.contains(fix.point) {
            self.state = LocationState::HasGoodLocation(fix.point);
            return Some(fix);
        }

        // Substituted fixes never update the last good location.
        match self.state {
            LocationState::NoGoodLocationYet => None,
            LocationState::HasGoodLocation(last) => Some(fix.at(last)),
        }
    }
}

/// Run a fresh [`TraceFilter`] over an already time-sorted trace.
pub fn filter_trace(fixes: &[Fix], region: BoundingBox, window: TimeWindow) -> Vec<Fix> {
    let mut filter = TraceFilter::new(region, window);
    fixes.iter().filter_map(|&fix| filter.accept(fix)).collect()
}
