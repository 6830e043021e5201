use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not read image file {path}: {source}")]
    ImageRead { path: PathBuf, source: io::Error },

    #[error("chat completion request failed: {0}")]
    RemoteCall(String),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::RemoteCall(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
