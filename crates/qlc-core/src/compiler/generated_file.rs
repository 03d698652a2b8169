use std::path::PathBuf;

/// A declaration file produced for one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub contents: String,
    pub path: PathBuf,
    pub source_path: PathBuf,
}
