//! Dataset export ("generate" mode).

use log::info;

use ct_core::{OutputPoint, Timestamp};
use ct_trace::Fleet;

use crate::{DatasetRow, DatasetWriter, OutputResult};

/// Earliest timestamp across every vehicle, or `None` for an empty fleet.
pub fn global_min_time(fleet: &Fleet<Vec<OutputPoint>>) -> Option<Timestamp> {
    fleet.values().flatten().map(|p| p.time).min()
}

/// Write every vehicle through `writer` with times relative to the global
/// minimum, so the earliest row in the whole dataset is at 0.
///
/// Vehicles are numbered by their fleet id (0-based, fleet order).  Returns
/// the number of vehicles written.
pub fn export_dataset<W: DatasetWriter>(
    fleet:  &Fleet<Vec<OutputPoint>>,
    writer: &mut W,
) -> OutputResult<usize> {
    let Some(origin) = global_min_time(fleet) else {
        writer.finish()?;
        return Ok(0);
    };

    let mut written = 0;
    for (id, _, points) in fleet.iter() {
        let rows: Vec<DatasetRow> = points
            .iter()
            .map(|p| DatasetRow { x: p.x, y: p.y, elapsed_ms: p.time - origin })
            .collect();
        writer.write_vehicle(id, &rows)?;
        written += 1;
    }
    writer.finish()?;

    info!("exported {written} vehicles, t0 = {}s", origin.as_secs_f64());
    Ok(written)
}
