use crate::file_reader;
use crate::loc;
use crate::schema::introspection::IntrospectionField;
use crate::schema::introspection::IntrospectionInputValue;
use crate::schema::introspection::IntrospectionResponse;
use crate::schema::introspection::IntrospectionSchema;
use crate::schema::introspection::IntrospectionType;
use crate::schema::introspection::IntrospectionTypeKind;
use crate::schema::introspection::IntrospectionTypeRef;
use crate::schema::Schema;
use crate::schema::SchemaError;
use crate::types::DeprecationState;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, Vec<SchemaError>>;

/// Utility for building a [Schema] from an introspection result.
///
/// Both the bare `{"__schema": ...}` shape and the full GraphQL response
/// shape (`{"data": {"__schema": ...}}`) are accepted.
#[derive(Debug)]
pub struct SchemaBuilder {
    introspection: IntrospectionSchema,
}
impl SchemaBuilder {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let content = file_reader::read_content(file_path.as_ref())
            .map_err(|err| vec![SchemaError::FileReadError(Box::new(err))])?;
        Self::from_str(content.as_str())
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let response: IntrospectionResponse = serde_json::from_value(value)
            .map_err(|err| vec![SchemaError::Malformed { reason: err.to_string() }])?;
        Self::from_response(response)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let response: IntrospectionResponse = serde_json::from_str(content)
            .map_err(|err| vec![SchemaError::Malformed { reason: err.to_string() }])?;
        Self::from_response(response)
    }

    fn from_response(response: IntrospectionResponse) -> Result<Self> {
        let introspection = response.schema
            .or_else(|| response.data.and_then(|data| data.schema))
            .ok_or_else(|| vec![SchemaError::Malformed {
                reason: "`__schema` is missing".to_string(),
            }])?;

        Ok(Self { introspection })
    }

    pub fn build(self) -> Result<Schema> {
        let IntrospectionSchema {
            mutation_type,
            query_type,
            subscription_type,
            types,
        } = self.introspection;

        let mut errors = vec![];
        if types.is_none() {
            errors.push(SchemaError::Malformed {
                reason: "`__schema.types` is missing".to_string(),
            });
        }
        if query_type.is_none() {
            errors.push(SchemaError::Malformed {
                reason: "`__schema.queryType` is missing".to_string(),
            });
        }
        let (Some(introspected_types), Some(query_type)) = (types, query_type) else {
            return Err(errors);
        };

        let mut types_map = HashMap::new();
        for introspected_type in introspected_types {
            // Introspection's own meta types (`__Schema`, `__Type`, ...) are
            // never part of a selection's result shape.
            if introspected_type.name.starts_with("__") {
                continue;
            }

            match Self::build_type(introspected_type) {
                Ok(graphql_type) => {
                    let type_name = graphql_type.name().to_string();
                    if types_map.contains_key(&type_name) {
                        errors.push(SchemaError::DuplicateTypeDefinition { type_name });
                    } else {
                        types_map.insert(type_name, graphql_type);
                    }
                },
                Err(err) => errors.push(err),
            }
        }

        let schema = Schema {
            mutation_type: mutation_type.map(|t| t.name),
            query_type: query_type.name,
            subscription_type: subscription_type.map(|t| t.name),
            types: types_map,
        };
        errors.extend(Self::check_references(&schema));

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!(
            "Loaded {} types from the introspection result.",
            schema.types.len(),
        );
        Ok(schema)
    }

    fn build_type(introspected: IntrospectionType) -> std::result::Result<GraphQLType, SchemaError> {
        let IntrospectionType {
            description,
            enum_values,
            fields,
            input_fields,
            interfaces,
            kind,
            name,
            possible_types,
        } = introspected;

        Ok(match kind {
            IntrospectionTypeKind::Enum => GraphQLType::Enum(Box::new(EnumType {
                description,
                values: enum_values
                    .unwrap_or_default()
                    .into_iter()
                    .map(|value| EnumValue {
                        deprecation: DeprecationState::from_introspection(
                            value.is_deprecated,
                            value.deprecation_reason.as_deref(),
                        ),
                        description: value.description,
                        name: value.name,
                    })
                    .collect(),
                name,
            })),

            IntrospectionTypeKind::InputObject => {
                let fields = Self::build_input_fields(
                    name.as_str(),
                    input_fields.unwrap_or_default(),
                )?;
                GraphQLType::InputObject(Box::new(InputObjectType {
                    description,
                    fields,
                    name,
                }))
            },

            IntrospectionTypeKind::Interface => {
                let possible_types = Self::build_named_refs(
                    name.as_str(),
                    "possibleTypes",
                    possible_types.unwrap_or_default(),
                )?;
                let data = Self::build_object_or_interface_data(
                    name,
                    description,
                    fields.unwrap_or_default(),
                    interfaces.unwrap_or_default(),
                )?;
                GraphQLType::Interface(Box::new(InterfaceType { data, possible_types }))
            },

            IntrospectionTypeKind::Object => {
                let data = Self::build_object_or_interface_data(
                    name,
                    description,
                    fields.unwrap_or_default(),
                    interfaces.unwrap_or_default(),
                )?;
                GraphQLType::Object(Box::new(ObjectType(data)))
            },

            IntrospectionTypeKind::Scalar =>
                GraphQLType::Scalar(Box::new(ScalarType { description, name })),

            IntrospectionTypeKind::Union => {
                let members = Self::build_named_refs(
                    name.as_str(),
                    "possibleTypes",
                    possible_types.unwrap_or_default(),
                )?
                .into_iter()
                .map(|member_ref| (member_ref.name().to_string(), member_ref))
                .collect();
                GraphQLType::Union(Box::new(UnionType {
                    description,
                    members,
                    name,
                }))
            },

            IntrospectionTypeKind::List | IntrospectionTypeKind::NonNull =>
                return Err(SchemaError::Malformed {
                    reason: format!("The type `{name}` has the wrapper kind `{kind:?}`"),
                }),
        })
    }

    fn build_input_fields(
        type_name: &str,
        input_values: Vec<IntrospectionInputValue>,
    ) -> std::result::Result<IndexMap<String, InputField>, SchemaError> {
        let mut fields = IndexMap::new();
        for input_value in input_values {
            let referenced_by = format!("{type_name}.{}", input_value.name);
            let type_annotation = Self::annotation_from_type_ref(
                &input_value.type_ref,
                referenced_by.as_str(),
                /* nullable = */ true,
            )?;
            fields.insert(input_value.name.clone(), InputField {
                description: input_value.description,
                has_default_value: input_value.default_value.is_some(),
                name: input_value.name,
                type_annotation,
            });
        }
        Ok(fields)
    }

    fn build_named_refs(
        type_name: &str,
        property: &str,
        type_refs: Vec<IntrospectionTypeRef>,
    ) -> std::result::Result<Vec<NamedGraphQLTypeRef>, SchemaError> {
        type_refs
            .into_iter()
            .map(|type_ref| match type_ref.name {
                Some(name) => Ok(NamedGraphQLTypeRef::new(
                    name,
                    loc::SourceLocation::Introspection,
                )),
                None => Err(SchemaError::Malformed {
                    reason: format!("`{type_name}.{property}` contains an unnamed type"),
                }),
            })
            .collect()
    }

    fn build_object_or_interface_data(
        name: String,
        description: Option<String>,
        introspected_fields: Vec<IntrospectionField>,
        interfaces: Vec<IntrospectionTypeRef>,
    ) -> std::result::Result<ObjectOrInterfaceTypeData, SchemaError> {
        let mut fields = IndexMap::new();
        for introspected_field in introspected_fields {
            let referenced_by = format!("{name}.{}", introspected_field.name);
            let type_annotation = Self::annotation_from_type_ref(
                &introspected_field.type_ref,
                referenced_by.as_str(),
                /* nullable = */ true,
            )?;
            fields.insert(introspected_field.name.clone(), Field {
                deprecation: DeprecationState::from_introspection(
                    introspected_field.is_deprecated,
                    introspected_field.deprecation_reason.as_deref(),
                ),
                description: introspected_field.description,
                name: introspected_field.name,
                parent_type_name: name.clone(),
                type_annotation,
            });
        }

        let interfaces = Self::build_named_refs(name.as_str(), "interfaces", interfaces)?;
        Ok(ObjectOrInterfaceTypeData {
            description,
            fields,
            interfaces,
            name,
        })
    }

    fn annotation_from_type_ref(
        type_ref: &IntrospectionTypeRef,
        referenced_by: &str,
        nullable: bool,
    ) -> std::result::Result<TypeAnnotation, SchemaError> {
        let of_type = || type_ref.of_type.as_deref().ok_or_else(|| SchemaError::Malformed {
            reason: format!(
                "The `{:?}` type of `{referenced_by}` is missing `ofType`",
                type_ref.kind,
            ),
        });

        let kind_hint = match type_ref.kind {
            IntrospectionTypeKind::List => return Ok(TypeAnnotation::list(
                Self::annotation_from_type_ref(of_type()?, referenced_by, true)?,
                nullable,
            )),

            IntrospectionTypeKind::NonNull => {
                let inner = of_type()?;
                if inner.kind == IntrospectionTypeKind::NonNull {
                    return Err(SchemaError::Malformed {
                        reason: format!("The type of `{referenced_by}` is non-null twice"),
                    });
                }
                return Self::annotation_from_type_ref(inner, referenced_by, false);
            },

            IntrospectionTypeKind::Enum => GraphQLTypeKind::Enum,
            IntrospectionTypeKind::InputObject => GraphQLTypeKind::InputObject,
            IntrospectionTypeKind::Interface => GraphQLTypeKind::Interface,
            IntrospectionTypeKind::Object => GraphQLTypeKind::Object,
            IntrospectionTypeKind::Scalar => GraphQLTypeKind::Scalar,
            IntrospectionTypeKind::Union => GraphQLTypeKind::Union,
        };

        let Some(name) = type_ref.name.as_deref() else {
            return Err(SchemaError::Malformed {
                reason: format!("The type of `{referenced_by}` has no name"),
            });
        };
        Ok(TypeAnnotation::named(
            name,
            nullable,
            Some(kind_hint),
            loc::SourceLocation::Introspection,
        ))
    }

    /// Every named reference must land on a type in the catalog.
    fn check_references(schema: &Schema) -> Vec<SchemaError> {
        let mut errors = vec![];
        let mut check = |referenced_by: String, type_name: &str| {
            if !schema.types.contains_key(type_name) {
                errors.push(SchemaError::DanglingReference {
                    referenced_by,
                    type_name: type_name.to_string(),
                });
            }
        };

        check("__schema.queryType".to_string(), schema.query_type.as_str());
        if let Some(mutation_type) = &schema.mutation_type {
            check("__schema.mutationType".to_string(), mutation_type.as_str());
        }
        if let Some(subscription_type) = &schema.subscription_type {
            check("__schema.subscriptionType".to_string(), subscription_type.as_str());
        }

        let mut type_names: Vec<&String> = schema.types.keys().collect();
        type_names.sort();
        for type_name in type_names {
            match &schema.types[type_name] {
                GraphQLType::InputObject(input_type) => {
                    for (field_name, field) in input_type.fields() {
                        check(
                            format!("{type_name}.{field_name}"),
                            field.type_annotation().innermost_type_name(),
                        );
                    }
                },

                GraphQLType::Interface(iface_type) => {
                    for (field_name, field) in iface_type.fields() {
                        check(
                            format!("{type_name}.{field_name}"),
                            field.type_annotation().innermost_type_name(),
                        );
                    }
                    for iface_name in iface_type.interface_names() {
                        check(format!("{type_name}.interfaces"), iface_name);
                    }
                    for possible_type in iface_type.possible_type_names() {
                        check(format!("{type_name}.possibleTypes"), possible_type);
                    }
                },

                GraphQLType::Object(obj_type) => {
                    for (field_name, field) in obj_type.fields() {
                        check(
                            format!("{type_name}.{field_name}"),
                            field.type_annotation().innermost_type_name(),
                        );
                    }
                    for iface_name in obj_type.interface_names() {
                        check(format!("{type_name}.interfaces"), iface_name);
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        check(format!("{type_name}.possibleTypes"), member_name);
                    }
                },

                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),
            }
        }

        errors
    }
}
