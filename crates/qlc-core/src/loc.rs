use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where a reference to a schema type was written down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// Built into GraphQL itself (`String`, `__typename`, ...).
    GraphQLBuiltIn,

    /// Read from an introspection result, which carries no positions.
    Introspection,

    /// Written in an operation or fragment document.
    Document(FilePosition),
}
impl SourceLocation {
    pub fn as_file_position(&self) -> Option<&FilePosition> {
        if let Self::Document(pos) = self {
            Some(pos)
        } else {
            None
        }
    }
}
