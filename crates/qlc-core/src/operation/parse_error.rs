use crate::loc;
use crate::operation::OperationKind;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Anonymous {kind} at {location}; operations need a name to derive type names from")]
    AnonymousOperation {
        kind: OperationKind,
        location: loc::FilePosition,
    },

    #[error("`{}` contains no operation or fragment definition", .file.display())]
    EmptyDocument {
        file: PathBuf,
    },

    #[error(
        "`{}` holds more than one definition ({}); each file may define one operation or fragment",
        .file.display(),
        .definition_names.join(", "),
    )]
    MultipleDefinitionsPerFile {
        definition_names: Vec<String>,
        file: PathBuf,
    },

    #[error("Syntax error in `{}`: {message}", .file.display())]
    Syntax {
        file: PathBuf,
        location: Option<loc::FilePosition>,
        message: String,
    },
}
impl ParseError {
    pub fn file(&self) -> &std::path::Path {
        match self {
            Self::AnonymousOperation { location, .. } =>
                location.file.as_deref().unwrap_or(std::path::Path::new("")),
            Self::EmptyDocument { file }
                | Self::MultipleDefinitionsPerFile { file, .. }
                | Self::Syntax { file, .. } => file.as_path(),
        }
    }
}
