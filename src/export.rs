//! Export adapters for computed plans
//!
//! Formats finished projections for downstream consumers (spreadsheets,
//! document generation). Everything here is presentation only; no figure is
//! recomputed.

use std::io::Write;

use crate::plan::PlanProjection;
use crate::projection::YearlyContribution;

/// Write a contribution schedule as CSV, one row per year.
pub fn write_schedule_csv<W: Write>(
    writer: W,
    schedule: &[YearlyContribution],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in schedule {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render a full plan projection as pretty-printed JSON.
pub fn plan_projection_json(projection: &PlanProjection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(projection)
}
