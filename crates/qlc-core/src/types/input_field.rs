use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) description: Option<String>,
    pub(crate) has_default_value: bool,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An input field may be omitted when it is nullable or has a default.
    pub fn is_optional(&self) -> bool {
        self.has_default_value || self.type_annotation.nullable()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
