//! Survey batch loading.

use anyhow::Context;
use log::info;
use smr_survey::error::SurveyError;
use smr_survey::filename::ACCEPTED_EXTENSIONS;
use smr_survey::survey_file::SurveyFile;
use std::fs;
use std::path::Path;

/// True when a file name carries one of the accepted survey extensions.
pub fn is_survey_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted)),
        None => false,
    }
}

/// Load every survey file under `surveys_dir`.
///
/// File names are sorted before loading; that order is what decides which
/// file wins when two stamp the same matrix cell, so it has to be stable
/// across runs. The first file with an unparseable name aborts the whole
/// batch (the error names the file), and a directory with no accepted
/// files is `EmptyInput`.
pub fn load_survey_batch(surveys_dir: &str) -> anyhow::Result<Vec<SurveyFile>> {
    let dir = Path::new(surveys_dir);
    let mut names: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("cannot read survey directory '{surveys_dir}'"))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_survey_file(name))
        .collect();
    names.sort();

    if names.is_empty() {
        return Err(SurveyError::EmptyInput.into());
    }

    let mut files = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let bytes = fs::read(dir.join(name)).with_context(|| format!("cannot read '{name}'"))?;
        let file = SurveyFile::from_bytes(name, &bytes)?;
        info!(
            "[{}/{}] {}: {} point(s), {} - {}",
            idx + 1,
            names.len(),
            name,
            file.points.len(),
            file.period.start.iso(),
            file.period.end.iso()
        );
        files.push(file);
    }
    Ok(files)
}
