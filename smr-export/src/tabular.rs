//! The `(month, total_volume, delta_volume)` CSV export.

use crate::models::MonthVolumeRow;
use smr_data::volume::{MonthlyVolume, VolumeDelta};
use std::io::Write;

/// Pair the volume series with its deltas into export rows. Deltas are
/// aligned to the later month of each transition, so the first row's
/// delta cell stays empty.
pub fn volume_rows(volumes: &[MonthlyVolume], deltas: &[VolumeDelta]) -> Vec<MonthVolumeRow> {
    volumes
        .iter()
        .enumerate()
        .map(|(idx, volume)| MonthVolumeRow {
            month: volume.period.iso(),
            total_volume: volume.total,
            delta_volume: if idx == 0 {
                None
            } else {
                Some(deltas[idx - 1].delta)
            },
        })
        .collect()
}

/// Write the rows as headed CSV. An absent delta becomes an empty cell.
pub fn write_volume_csv<W: Write>(writer: W, rows: &[MonthVolumeRow]) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["month", "total_volume", "delta_volume"])?;
    for row in rows {
        let delta = row
            .delta_volume
            .map_or(String::new(), |delta| delta.to_string());
        csv_writer.write_record([
            row.month.as_str(),
            row.total_volume.to_string().as_str(),
            delta.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
