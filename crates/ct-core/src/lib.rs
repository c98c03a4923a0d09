//! `ct-core` — foundational types for the `cabtrace` taxi trace tools.
//!
//! This crate is a dependency of every other `ct-*` crate.  It has no `ct-*`
//! dependencies and minimal external ones (`geo` for ellipsoidal geodesics and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `BoundingBox`, distance/bearing/destination |
//! | [`remap`]       | `remap`, `AxisMap`, `Remapper` (box-to-box affine map) |
//! | [`time`]        | `Timestamp`, `Cadence`, `TimeWindow`                  |
//! | [`fix`]         | `Fix` (raw observation), `OutputPoint`                |
//! | [`ids`]         | `VehicleId`                                           |
//! | [`regions`]     | San Francisco source region, CARLA target domain      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod fix;
pub mod geo;
pub mod ids;
pub mod regions;
pub mod remap;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use fix::{Fix, OutputPoint};
pub use crate::geo::{BoundingBox, GeoPoint};
pub use ids::VehicleId;
pub use remap::{AxisMap, Remapper, remap};
pub use time::{Cadence, TimeWindow, Timestamp};
