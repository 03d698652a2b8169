use crate::types::DeprecationState;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValue>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Values in the order the schema lists them.
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
