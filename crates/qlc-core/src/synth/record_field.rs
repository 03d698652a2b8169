use crate::synth::TypeShapeNode;
use crate::types::DeprecationState;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordField {
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) key: String,
    pub(crate) node: TypeShapeNode,
    /// Only variables may be left out entirely.
    pub(crate) optional: bool,
}
impl RecordField {
    pub fn deprecation(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn node(&self) -> &TypeShapeNode {
        &self.node
    }

    pub fn optional(&self) -> bool {
        self.optional
    }
}
