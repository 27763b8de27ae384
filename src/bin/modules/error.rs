use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the adsorb library.
    #[error("Selection error: {0}")]
    Selection(#[from] adsorb::AdsorbError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// XYZ output was requested for a job without site coordinates.
    #[error("XYZ output requires site coordinates; add `vacancies` to the job file")]
    MissingCoordinates,
}
