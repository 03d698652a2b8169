use crate::loc;
use crate::operation::SelectionSet;

/// A selection narrowed to a type condition.
///
/// Resolving a fragment spread replaces it with an `InlineFragment` holding
/// a copy of the fragment's selections under the fragment's type condition;
/// `origin_fragment` then names the fragment it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) def_location: loc::FilePosition,
    pub(super) origin_fragment: Option<String>,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn origin_fragment(&self) -> Option<&str> {
        self.origin_fragment.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
