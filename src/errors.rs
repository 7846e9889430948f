use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("cannot read outline {path}: {source}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed outline {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error("cannot write {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type OutlineResult<T> = Result<T, OutlineError>;
