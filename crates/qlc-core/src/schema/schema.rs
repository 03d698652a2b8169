use crate::operation::OperationKind;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// The type catalog read from an introspection result.
///
/// A `Schema` is immutable once built, so it may be shared freely between
/// worker threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Every concrete object type a value of `type_name` could be at
    /// runtime: the type itself for objects, the possible types for
    /// interfaces and unions, and nothing for any other kind of type.
    pub fn concrete_types_of(&self, type_name: &str) -> BTreeSet<&str> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => BTreeSet::from([obj_type.name()]),
            Some(GraphQLType::Interface(iface_type)) =>
                iface_type.possible_type_names().into_iter().collect(),
            Some(GraphQLType::Union(union_type)) =>
                union_type.member_type_names().into_iter().collect(),
            _ => BTreeSet::new(),
        }
    }

    pub fn defined_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Fields of an object or interface type, in schema order.
    pub fn fields_of(&self, type_name: &str) -> Option<&IndexMap<String, Field>> {
        self.types.get(type_name)?.fields()
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// The concrete object types of an interface or union. `None` for any
    /// other kind of type.
    pub fn possible_types_of(&self, type_name: &str) -> Option<BTreeSet<&str>> {
        self.types
            .get(type_name)
            .filter(|graphql_type| graphql_type.is_abstract())
            .map(|_| self.concrete_types_of(type_name))
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    pub fn resolve_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// The root type an operation of the given kind selects from.
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Fragment => None,
            OperationKind::Mutation => self.mutation_type_name(),
            OperationKind::Query => Some(self.query_type_name()),
            OperationKind::Subscription => self.subscription_type_name(),
        }
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }
}
