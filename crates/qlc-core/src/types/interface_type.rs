use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// read from the schema's introspection result.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) possible_types: Vec<NamedGraphQLTypeRef>,
}
impl InterfaceType {
    /// Names of the concrete object types implementing this interface, in
    /// the order the schema lists them.
    pub fn possible_type_names(&self) -> Vec<&str> {
        self.possible_types
            .iter()
            .map(|type_ref| type_ref.name())
            .collect()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }
}
