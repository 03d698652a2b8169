/// Import specifiers for the two kinds of module a generated file imports
/// from. Either may be left to an enclosing configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ModulePaths {
    /// Module exporting `QueryDocumentNode` and friends.
    pub document_node: Option<String>,

    /// Module exporting the global enum and input object types.
    pub global_types: Option<String>,
}
impl ModulePaths {
    pub fn is_empty(&self) -> bool {
        self.document_node.is_none() && self.global_types.is_none()
    }
}
