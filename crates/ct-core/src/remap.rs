//! Affine box-to-box coordinate remapping.
//!
//! Each axis is mapped independently with
//!
//! ```text
//! slope     = (dst_max - dst_min) / (src_max - src_min)
//! intercept = (src_max * dst_min - dst_max * src_min) / (src_max - src_min)
//! out       = value * slope + intercept
//! ```
//!
//! There is no clamping: values outside the source interval extrapolate
//! linearly past the target interval.

use crate::{BoundingBox, CoreError, CoreResult, GeoPoint};

/// Map `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// The caller must ensure `src_min != src_max`; [`AxisMap::new`] is the
/// checked alternative.
#[inline]
pub fn remap(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    let span = src_max - src_min;
    let slope = (dst_max - dst_min) / span;
    let intercept = (src_max * dst_min - dst_max * src_min) / span;
    value * slope + intercept
}

// ── AxisMap ───────────────────────────────────────────────────────────────────

/// Precomputed slope/intercept for one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisMap {
    pub slope:     f64,
    pub intercept: f64,
}

impl AxisMap {
    /// Derive the map from its source and target intervals.
    ///
    /// Both intervals must be non-degenerate so that the map is invertible.
    pub fn new(src: (f64, f64), dst: (f64, f64)) -> CoreResult<Self> {
        let (src_min, src_max) = src;
        let (dst_min, dst_max) = dst;
        let src_span = src_max - src_min;
        let dst_span = dst_max - dst_min;
        if src_span == 0.0 || dst_span == 0.0 || !src_span.is_finite() || !dst_span.is_finite() {
            return Err(CoreError::Config(format!(
                "cannot remap [{src_min}, {src_max}] onto [{dst_min}, {dst_max}]: degenerate interval"
            )));
        }
        Ok(Self {
            slope:     dst_span / src_span,
            intercept: (src_max * dst_min - dst_max * src_min) / src_span,
        })
    }

    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        value * self.slope + self.intercept
    }

    /// The map that undoes `self`.  Slope is never zero for a map built by
    /// [`AxisMap::new`].
    pub fn inverse(self) -> AxisMap {
        AxisMap {
            slope:     1.0 / self.slope,
            intercept: -self.intercept / self.slope,
        }
    }
}

// ── Remapper ──────────────────────────────────────────────────────────────────

/// Maps geographic points from a source box into a target box.
///
/// Stateless once built; cheap to copy.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Remapper {
    source: BoundingBox,
    target: BoundingBox,
    lat:    AxisMap,
    lon:    AxisMap,
}

impl Remapper {
    pub fn new(source: BoundingBox, target: BoundingBox) -> CoreResult<Self> {
        let lat = AxisMap::new((source.lat_min, source.lat_max), (target.lat_min, target.lat_max))?;
        let lon = AxisMap::new((source.lon_min, source.lon_max), (target.lon_min, target.lon_max))?;
        Ok(Self { source, target, lat, lon })
    }

    #[inline]
    pub fn source(&self) -> BoundingBox {
        self.source
    }

    #[inline]
    pub fn target(&self) -> BoundingBox {
        self.target
    }

    /// Remap a point, returning `(x, y)` in the target frame where `x` comes
    /// from latitude and `y` from longitude.
    #[inline]
    pub fn apply(&self, p: GeoPoint) -> (f64, f64) {
        (self.lat.apply(p.lat), self.lon.apply(p.lon))
    }

    /// The remapper from `target` back to `source`.
    pub fn inverse(&self) -> Remapper {
        Remapper {
            source: self.target,
            target: self.source,
            lat:    self.lat.inverse(),
            lon:    self.lon.inverse(),
        }
    }
}
