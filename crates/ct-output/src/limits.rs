//! Global bounds over every vehicle's output ("limits" mode).

use std::fmt;

use ct_core::{OutputPoint, Timestamp};
use ct_trace::Fleet;

/// Min/max of `x`, `y` and time across all points of all vehicles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub vehicles: usize,
    pub x_min:    f64,
    pub x_max:    f64,
    pub y_min:    f64,
    pub y_max:    f64,
    pub time_min: Timestamp,
    pub time_max: Timestamp,
}

impl Limits {
    fn from_point(p: &OutputPoint) -> Self {
        Self {
            vehicles: 0,
            x_min:    p.x,
            x_max:    p.x,
            y_min:    p.y,
            y_max:    p.y,
            time_min: p.time,
            time_max: p.time,
        }
    }

    fn extend(&mut self, p: &OutputPoint) {
        self.x_min = self.x_min.min(p.x);
        self.x_max = self.x_max.max(p.x);
        self.y_min = self.y_min.min(p.y);
        self.y_max = self.y_max.max(p.y);
        self.time_min = self.time_min.min(p.time);
        self.time_max = self.time_max.max(p.time);
    }
}

/// Reduce a processed fleet to its bounds.  `None` when there are no points.
pub fn compute_limits(fleet: &Fleet<Vec<OutputPoint>>) -> Option<Limits> {
    let mut points = fleet.values().flatten();
    let mut limits = Limits::from_point(points.next()?);
    for p in points {
        limits.extend(p);
    }
    limits.vehicles = fleet.len();
    Some(limits)
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total traces: {}", self.vehicles)?;
        writeln!(f, "Limits ->")?;
        writeln!(f, "\tlat: [{},{}]", self.x_min, self.x_max)?;
        writeln!(f, "\tlng: [{},{}]", self.y_min, self.y_max)?;
        write!(f, "\ttime: [{},{}]", self.time_min.as_secs_f64(), self.time_max.as_secs_f64())
    }
}
