//! Fixed regions of the CRAWDAD San Francisco cab dataset.
//!
//! `SF_REGION` doubles as the filter region and the source domain of the
//! remap into `CARLA_DOMAIN`, the simulator's local frame.

use crate::{BoundingBox, CoreResult, Remapper};

/// Downtown San Francisco.
pub const SF_REGION: BoundingBox = BoundingBox::from_corners((37.675, -122.48), (37.825, -122.35));

/// The CARLA map extent the traces are replayed in.
pub const CARLA_DOMAIN: BoundingBox = BoundingBox::from_corners(
    (-0.0018703476525843143, -0.0013416497968137264),
    (0.0018795838113874197, 0.002198888687416911),
);

/// `SF_REGION` → `CARLA_DOMAIN`.
pub fn sf_to_carla() -> CoreResult<Remapper> {
    Remapper::new(SF_REGION, CARLA_DOMAIN)
}
