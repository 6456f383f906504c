use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not open locations file {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not read line {line} of locations file {path:?}: {source}")]
    ReadLine {
        path: PathBuf,
        line: usize,
        source: std::io::Error,
    },

    #[error("Invalid location {0:?}, expected \"<latitude>,<longitude>\"")]
    InvalidLocation(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Geocoding request for {place:?} failed: {message}")]
    Geocoding { place: String, message: String },

    #[error("Could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Could not load gazetteer {path:?}: {source}")]
    Gazetteer { path: PathBuf, source: csv::Error },

    #[error("Could not write map to {path:?}: {source}")]
    Render {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
