const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this is one of the five scalars every GraphQL schema defines.
    pub fn is_builtin(&self) -> bool {
        Self::is_builtin_name(self.name.as_str())
    }

    pub fn is_builtin_name(name: &str) -> bool {
        BUILTIN_SCALAR_NAMES.contains(&name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
