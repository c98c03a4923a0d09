//! Typed vehicle identifier.

use std::fmt;

/// Dense, 0-based index of a vehicle in a fleet, assigned at first encounter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl TryFrom<usize> for VehicleId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VehicleId, Self::Error> {
        u32::try_from(n).map(VehicleId)
    }
}
