mod document_file;
mod field_selection;
mod fragment_registry;
mod fragment_registry_builder;
mod fragment_spread;
mod inline_fragment;
mod operation_document;
mod operation_kind;
mod parse_error;
mod resolution_error;
mod resolved_operation;
mod selection;
mod selection_set;
mod variable;

pub use document_file::DocumentFile;
pub use document_file::DocumentImport;
pub use field_selection::FieldSelection;
pub use fragment_registry::FragmentKey;
pub use fragment_registry::FragmentRegistry;
pub use fragment_registry_builder::FragmentRegistryBuilder;
pub use fragment_registry_builder::ImportRoots;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_document::OperationDocument;
pub use operation_kind::OperationKind;
pub use parse_error::ParseError;
pub use resolution_error::ResolutionError;
pub use resolved_operation::ResolvedOperation;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use variable::Variable;

/// Parse a document holding exactly one operation or fragment definition.
pub fn parse(
    source_text: &str,
    file_path: impl AsRef<std::path::Path>,
) -> Result<OperationDocument, ParseError> {
    let document_file = DocumentFile::parse(
        source_text,
        file_path.as_ref(),
        /* single_definition_per_file = */ true,
    )?;
    Ok(document_file.into_primary())
}

#[cfg(test)]
mod tests;
