//! Command implementations for the siltation analysis CLI.
//!
//! Each subcommand loads the survey batch from a directory, builds the
//! temporal matrix, and hands one export artifact to disk.

use clap::Subcommand;

pub mod analyze;
pub mod batch;

#[derive(Subcommand)]
pub enum Command {
    /// Compute monthly volumes and write the (month, total, delta) CSV
    Analyze {
        /// Directory containing the survey files (.xyz/.txt/.csv)
        #[arg(short = 's', long)]
        surveys_dir: String,

        /// Output path for the monthly volume CSV
        #[arg(short = 'o', long)]
        volumes_csv: String,
    },

    /// Write the volume chart payload (line + trend segments) as JSON
    ChartData {
        /// Directory containing the survey files (.xyz/.txt/.csv)
        #[arg(short = 's', long)]
        surveys_dir: String,

        /// Output path for the chart payload JSON
        #[arg(short = 'o', long)]
        output_json: String,
    },

    /// Write the month-keyed animation frame sequence as JSON
    Frames {
        /// Directory containing the survey files (.xyz/.txt/.csv)
        #[arg(short = 's', long)]
        surveys_dir: String,

        /// Output path for the frame payload JSON
        #[arg(short = 'o', long)]
        output_json: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Analyze {
            surveys_dir,
            volumes_csv,
        } => analyze::run_analyze(&surveys_dir, &volumes_csv),
        Command::ChartData {
            surveys_dir,
            output_json,
        } => analyze::run_chart_data(&surveys_dir, &output_json),
        Command::Frames {
            surveys_dir,
            output_json,
        } => analyze::run_frames(&surveys_dir, &output_json),
    }
}
