use std::fmt;

/// Errors surfaced while turning uploaded survey files into usable data.
///
/// Any of these is fatal for the whole batch: the pipeline halts on the
/// first bad file instead of skipping it, so the caller can fix the input
/// and resubmit. Numeric coercion inside a file never produces one of
/// these; bad cells become missing readings instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// The file name has no "x" separator segment.
    Format { file_name: String },
    /// A year or month-name segment around the separator is invalid.
    DateParse { file_name: String, detail: String },
    /// No usable survey files were provided.
    EmptyInput,
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyError::Format { file_name } => {
                write!(
                    f,
                    "file '{file_name}' does not follow the expected pattern (missing 'x' separator)"
                )
            }
            SurveyError::DateParse { file_name, detail } => {
                write!(f, "could not read the dates in file '{file_name}': {detail}")
            }
            SurveyError::EmptyInput => write!(f, "no survey files to process"),
        }
    }
}

impl std::error::Error for SurveyError {}
