//! Linear interpolation for filling gaps in a monthly rate row.

/// Fill unpopulated cells lying strictly between two populated cells with
/// linearly interpolated values. Cells before the first or after the last
/// populated cell are left as `None`: no extrapolation at the edges.
///
/// A row with no gaps comes back unchanged, so the fill is idempotent.
pub fn fill_gaps(row: &mut [Option<f64>]) {
    let populated: Vec<usize> = row
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| cell.map(|_| idx))
        .collect();

    for window in populated.windows(2) {
        let (left, right) = (window[0], window[1]);
        if right - left <= 1 {
            continue;
        }
        // row[left] and row[right] are populated by construction
        let y_0 = row[left].unwrap();
        let y_n = row[right].unwrap();
        let slope = (y_n - y_0) / (right - left) as f64;
        for idx in (left + 1)..right {
            row[idx] = Some(y_0 + slope * (idx - left) as f64);
        }
    }
}
