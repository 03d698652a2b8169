use crate::loc;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use std::path::Path;
use std::path::PathBuf;

/// One operation or fragment definition as written in a document.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDocument {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) file_path: PathBuf,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    /// Only fragments have a type condition.
    pub(crate) type_condition: Option<String>,
    pub(crate) variables: Vec<Variable>,
}
impl OperationDocument {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }

    /// Variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}
