use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("input is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to read input stream: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CodecError>;
