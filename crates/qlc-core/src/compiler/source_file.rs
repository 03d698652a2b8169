use std::path::PathBuf;

/// One GraphQL document handed to the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub content: String,
    pub path: PathBuf,
}
impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            path: path.into(),
        }
    }
}
