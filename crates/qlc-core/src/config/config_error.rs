use crate::file_reader::ReadContentError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Error in config file `{}`: {err}", .file.display())]
    InvalidJson {
        err: serde_json::Error,
        file: PathBuf,
    },

    #[error(transparent)]
    ReadError(Box<ReadContentError>),
}
