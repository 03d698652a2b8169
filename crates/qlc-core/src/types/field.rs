use crate::types::DeprecationState;
use crate::types::TypeAnnotation;

/// A field defined on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Name of the object or interface type this field is defined on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
