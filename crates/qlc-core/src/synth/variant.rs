use crate::synth::Record;

/// One member of a [`DiscriminatedUnion`](crate::synth::TypeShapeNode::DiscriminatedUnion).
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    /// Sorted. Exactly one for an explicit variant.
    pub(crate) concrete_types: Vec<String>,
    pub(crate) is_fallback: bool,
    pub(crate) record: Record,
}
impl Variant {
    pub fn concrete_types(&self) -> &[String] {
        &self.concrete_types
    }

    /// Whether this is the catch-all variant for every possible type no
    /// inline fragment narrowed to.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}
