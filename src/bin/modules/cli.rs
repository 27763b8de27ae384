use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str = "A command-line tool for enumerating adsorbate configurations and selecting representatives for simulation.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Job file in TOML format.
    ///
    /// The file selects a generation mode with `mode = "grid"` (rows, cols, count, symbol) or
    /// `mode = "sites"` (site_index, possible_adsorbates, adsorbate_index), and may list site
    /// coordinates under `vacancies`.
    #[arg(value_name = "JOB")]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub graph: GraphOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places for coordinates in XYZ output.
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,
}

/// Options for controlling graph construction.
#[derive(Args)]
#[command(next_help_heading = "Graph Options")]
pub struct GraphOptions {
    /// Vertex count from which pairwise distances are computed in parallel.
    ///
    /// Use 0 to always build in parallel.
    #[arg(long, default_value_t = 64)]
    pub parallel_threshold: usize,

    /// Build the graph on a single thread regardless of its size.
    #[arg(long, conflicts_with = "parallel_threshold")]
    pub serial: bool,
}

/// Output format for the selected configurations.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed summary and table of representative configurations.
    Pretty,
    /// JSON object with run metadata and the representative placements.
    Json,
    /// Comma-separated values with columns: representative, vertex, degree, site, slot, label.
    Csv,
    /// Multi-frame XYZ with one frame of adsorbate atoms per representative.
    Xyz,
}
