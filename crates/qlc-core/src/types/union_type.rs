use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) read from
/// the schema's introspection result.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
