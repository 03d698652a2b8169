/// The module specifiers a generated file imports its helper types from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSpecifiers {
    pub document_node: String,
    pub global_types: String,
}
