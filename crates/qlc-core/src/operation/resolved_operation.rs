use crate::operation::OperationDocument;

/// An operation or fragment with every fragment spread replaced by an owned
/// copy of the spread fragment's selections. Its selection tree contains no
/// [`FragmentSpread`](crate::operation::FragmentSpread)s.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOperation {
    pub(crate) document: OperationDocument,
}
impl ResolvedOperation {
    pub fn document(&self) -> &OperationDocument {
        &self.document
    }
}
impl std::ops::Deref for ResolvedOperation {
    type Target = OperationDocument;

    fn deref(&self) -> &Self::Target {
        &self.document
    }
}
