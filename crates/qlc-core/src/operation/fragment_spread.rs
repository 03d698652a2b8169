use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(super) def_location: loc::FilePosition,
    pub(super) fragment_name: String,
}
impl FragmentSpread {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
