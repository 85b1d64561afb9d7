use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RectCliqueError {
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read input '{path}': {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Line {line}: need 4 values (x y width height) to create a rectangle, found {found}")]
    TokenCount { line: usize, found: usize },

    #[error("Line {line}: '{token}' is not an integer: {source}")]
    InvalidInteger {
        line: usize,
        token: String,
        source: std::num::ParseIntError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
