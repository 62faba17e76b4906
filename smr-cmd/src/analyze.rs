//! Pipeline runs behind each subcommand: load batch, build matrix, export.

use crate::batch::load_survey_batch;
use anyhow::Context;
use log::info;
use smr_data::matrix::TemporalMatrix;
use smr_data::volume::{monthly_volumes, volume_deltas};
use smr_export::chart::{chart_payload, chart_payload_json};
use smr_export::frames::{frame_payload, frame_payload_json};
use smr_export::tabular::{volume_rows, write_volume_csv};
use std::fs::File;

/// Build the matrix and write the monthly volume CSV.
pub fn run_analyze(surveys_dir: &str, volumes_csv: &str) -> anyhow::Result<()> {
    let files = load_survey_batch(surveys_dir)?;
    let matrix = TemporalMatrix::build(&files)?;
    let volumes = monthly_volumes(&matrix);
    let deltas = volume_deltas(&volumes);
    let rows = volume_rows(&volumes, &deltas);

    let output =
        File::create(volumes_csv).with_context(|| format!("cannot create '{volumes_csv}'"))?;
    write_volume_csv(output, &rows)?;
    info!(
        "analysis complete: {} month(s) written to {}",
        rows.len(),
        volumes_csv
    );
    Ok(())
}

/// Build the matrix and write the chart payload JSON.
pub fn run_chart_data(surveys_dir: &str, output_json: &str) -> anyhow::Result<()> {
    let files = load_survey_batch(surveys_dir)?;
    let matrix = TemporalMatrix::build(&files)?;
    let volumes = monthly_volumes(&matrix);
    let deltas = volume_deltas(&volumes);
    let payload = chart_payload(&volumes, &deltas);

    let json = chart_payload_json(&payload)?;
    std::fs::write(output_json, json).with_context(|| format!("cannot write '{output_json}'"))?;
    info!(
        "chart payload: {} month(s), {} segment(s) written to {}",
        payload.months.len(),
        payload.segments.len(),
        output_json
    );
    Ok(())
}

/// Build the matrix and write the animation frame payload JSON.
pub fn run_frames(surveys_dir: &str, output_json: &str) -> anyhow::Result<()> {
    let files = load_survey_batch(surveys_dir)?;
    let matrix = TemporalMatrix::build(&files)?;
    let payload = frame_payload(&matrix);

    let json = frame_payload_json(&payload)?;
    std::fs::write(output_json, json).with_context(|| format!("cannot write '{output_json}'"))?;
    info!(
        "frame payload: {} frame(s) written to {}",
        payload.frames.len(),
        output_json
    );
    Ok(())
}
