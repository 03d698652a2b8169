use crate::DerefByName;
use crate::DerefByNameError;
use crate::NamedRef;
use crate::schema::Schema;
use crate::types::GraphQLType;

pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.resolve_type(name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
