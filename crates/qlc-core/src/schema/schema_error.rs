use crate::file_reader::ReadContentError;

/// Failures that make a schema unusable. Any one of these aborts the whole
/// batch since no document can be checked without a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("`{referenced_by}` references `{type_name}`, which is not defined in the schema")]
    DanglingReference {
        referenced_by: String,
        type_name: String,
    },

    #[error("The type `{type_name}` is defined more than once in the schema")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error(transparent)]
    FileReadError(Box<ReadContentError>),

    #[error("Malformed introspection result: {reason}")]
    Malformed {
        reason: String,
    },
}
