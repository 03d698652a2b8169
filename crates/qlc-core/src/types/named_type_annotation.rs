use crate::DerefByNameError;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    /// The kind the referencing site claimed for this type. Introspection
    /// results record one on every reference; documents never do.
    pub(crate) kind_hint: Option<GraphQLTypeKind>,
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        self.type_ref.deref(schema)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn kind_hint(&self) -> Option<GraphQLTypeKind> {
        self.kind_hint
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }

    pub fn to_graphql_string(&self) -> String {
        let name = self.type_ref.name();
        if self.nullable {
            name.to_string()
        } else {
            format!("{name}!")
        }
    }
}
