pub mod error;
pub mod filename;
pub mod period;
pub mod point;
pub mod reading;
pub mod survey_file;
