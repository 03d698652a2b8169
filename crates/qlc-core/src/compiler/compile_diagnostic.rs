use crate::CompileError;
use std::path::PathBuf;

/// A failure attributed to one input document.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}: {error}", .file.display())]
pub struct CompileDiagnostic {
    pub error: CompileError,
    pub file: PathBuf,
}
impl CompileDiagnostic {
    pub(crate) fn new(file: impl Into<PathBuf>, error: impl Into<CompileError>) -> Self {
        Self {
            error: error.into(),
            file: file.into(),
        }
    }
}
