use crate::operation::OperationKind;
use crate::synth::Record;
use crate::synth::SynthesisWarning;
use crate::synth::TypeShapeNode;
use std::collections::BTreeSet;

/// Everything synthesized for one operation or fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeShapeTree {
    /// Enums and input objects referenced by the data or variables shapes.
    pub(crate) global_refs: BTreeSet<String>,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    /// A [`TypeShapeNode::Record`] or [`TypeShapeNode::DiscriminatedUnion`]
    /// named after the operation.
    pub(crate) root: TypeShapeNode,
    /// `None` when the operation declares no variables (and for fragments).
    pub(crate) variables: Option<Record>,
    pub(crate) warnings: Vec<SynthesisWarning>,
}
impl TypeShapeTree {
    pub fn global_refs(&self) -> &BTreeSet<String> {
        &self.global_refs
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn root(&self) -> &TypeShapeNode {
        &self.root
    }

    pub fn variables(&self) -> Option<&Record> {
        self.variables.as_ref()
    }

    pub fn warnings(&self) -> &[SynthesisWarning] {
        &self.warnings
    }
}
