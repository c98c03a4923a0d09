//! Geographic coordinate type and geodesic utilities.
//!
//! All geodesic calculations run on the WGS-84 ellipsoid using Karney's
//! algorithm (via the `geo` crate's `Geodesic` metric space).  `distance_m`,
//! `bearing_deg` and `destination` are mutually consistent: stepping from `a`
//! along `a.bearing_deg(b)` for `a.distance_m(b)` metres lands on `b`.

use ::geo::{Bearing, Destination, Distance, Geodesic, Point};

use crate::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `geo` points are `(x, y)` = `(lon, lat)`.
    #[inline]
    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    #[inline]
    fn from_point(p: Point<f64>) -> Self {
        Self::new(p.y(), p.x())
    }

    /// Geodesic distance in metres on the WGS-84 ellipsoid.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        Geodesic::distance(self.to_point(), other.to_point())
    }

    /// Initial compass bearing from `self` towards `other`, in degrees within
    /// `[0, 360)`.  0° is north, 90° east.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let bearing = Geodesic::bearing(self.to_point(), other.to_point());
        if bearing < 0.0 { bearing + 360.0 } else { bearing }
    }

    /// The point reached by travelling `distance_m` metres from `self` along
    /// the geodesic that starts with bearing `bearing_deg`.
    pub fn destination(self, bearing_deg: f64, distance_m: f64) -> GeoPoint {
        GeoPoint::from_point(Geodesic::destination(self.to_point(), bearing_deg, distance_m))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// An axis-aligned latitude/longitude rectangle.
///
/// Used both as a filtering region and as the source or target domain of a
/// [`Remapper`](crate::Remapper).  A target domain is not necessarily
/// geographic; its "lat"/"lon" axes are simply the first and second output
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lon_min: f64,
    pub lat_max: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Build a box from its south-west and north-east corners.
    pub const fn from_corners(min: (f64, f64), max: (f64, f64)) -> Self {
        Self { lat_min: min.0, lon_min: min.1, lat_max: max.0, lon_max: max.1 }
    }

    /// Inclusive containment: points on the edge are inside.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.lat_min
            && p.lat <= self.lat_max
            && p.lon >= self.lon_min
            && p.lon <= self.lon_max
    }

    /// Reject boxes with zero, negative, or non-finite span on either axis.
    pub fn validate(&self) -> CoreResult<()> {
        let lat_span = self.lat_max - self.lat_min;
        let lon_span = self.lon_max - self.lon_min;
        if !(lat_span.is_finite() && lat_span > 0.0 && lon_span.is_finite() && lon_span > 0.0) {
            return Err(CoreError::Config(format!(
                "bounding box must have positive span on both axes, got {self}"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}
