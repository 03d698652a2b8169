use crate::loc;
use crate::operation::SelectionSet;

/// A field selection such as `me { id }` or `first: firstName`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) def_location: loc::FilePosition,
    pub(super) name: String,
    pub(super) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// `__typename`, whatever it is aliased to.
    pub fn is_typename(&self) -> bool {
        self.name == "__typename"
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key this field's value appears under in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
