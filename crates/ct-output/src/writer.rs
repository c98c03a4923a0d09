//! The `DatasetWriter` trait implemented by dataset backends.

use ct_core::VehicleId;

use crate::{DatasetRow, OutputResult};

pub trait DatasetWriter {
    /// Write every row for one vehicle.  Called once per vehicle, in id order.
    fn write_vehicle(&mut self, id: VehicleId, rows: &[DatasetRow]) -> OutputResult<()>;

    /// Flush anything still buffered.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
