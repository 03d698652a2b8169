use crate::synth::Record;
use crate::synth::Variant;

/// One node of a synthesized shape.
///
/// Wrappers mirror the schema's type reference exactly: a nullable list of
/// non-null strings is `Optional(ListOf(ScalarRef("string")))`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeShapeNode {
    /// A selection on an interface or union that narrows to at least one
    /// concrete type. Variants are ordered by name; the fallback variant,
    /// if any, is last.
    DiscriminatedUnion {
        name: String,
        variants: Vec<Variant>,
    },
    EnumRef(String),
    InputObjectRef(String),
    ListOf(Box<TypeShapeNode>),
    /// The value of `__typename` (under any alias): one of these concrete
    /// type names, sorted.
    Literal(Vec<String>),
    Optional(Box<TypeShapeNode>),
    Record(Record),
    /// The target type a scalar renders as (`string`, `any`, `PrefixISO8601`).
    ScalarRef(String),
}
impl TypeShapeNode {
    /// The name of the declaration this node introduces, if it introduces
    /// one.
    pub fn declaration_name(&self) -> Option<&str> {
        match self {
            Self::DiscriminatedUnion { name, .. } => Some(name.as_str()),
            Self::Record(record) => Some(record.name()),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    pub(crate) fn wrap_nullable(self, nullable: bool) -> Self {
        if nullable {
            Self::Optional(Box::new(self))
        } else {
            self
        }
    }
}
