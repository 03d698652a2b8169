use crate::ast;
use crate::loc;
use crate::types::GraphQLTypeKind;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField), or
/// [`Variable`](crate::operation::Variable).
///
/// Nullability is tracked independently at every list level, so
/// `[[String!]]!` is a non-null list of nullable lists of non-null strings.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable,
            Self::Named(annot) => annot.nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Named(named_annot) => named_annot.to_graphql_string(),
            Self::List(list_annot) => list_annot.to_graphql_string(),
        }
    }

    pub(crate) fn named(
        name: &str,
        nullable: bool,
        kind_hint: Option<GraphQLTypeKind>,
        location: loc::SourceLocation,
    ) -> Self {
        Self::Named(NamedTypeAnnotation {
            kind_hint,
            nullable,
            type_ref: NamedGraphQLTypeRef::new(name, location),
        })
    }

    pub(crate) fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable,
        })
    }

    pub(crate) fn from_ast_type(
        location: &loc::FilePosition,
        ast_type: &ast::operation::Type,
    ) -> Self {
        Self::from_ast_type_impl(location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        location: &loc::FilePosition,
        ast_type: &ast::operation::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(location, inner, true), nullable),

            ast::operation::Type::NamedType(name) =>
                Self::named(
                    name,
                    nullable,
                    None,
                    loc::SourceLocation::Document(location.to_owned()),
                ),

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
