use crate::config::NamingPolicy;
use crate::emit::FILE_HEADER;
use crate::emit::declaration_writer::type_expression;
use crate::emit::doc_block::write_doc_block;
use crate::schema::Schema;
use crate::synth::TypeShapeNode;
use crate::types::DeprecationState;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use std::collections::BTreeSet;

/// Render the shared declaration file holding every enum and input object
/// named in `used`, plus the enums and input objects those input objects
/// reference through their fields.
///
/// Names that the schema does not define (or that name other kinds of
/// types) are skipped.
pub fn render_global_types(
    schema: &Schema,
    used: &BTreeSet<String>,
    policy: &NamingPolicy,
) -> String {
    let mut included: BTreeSet<&str> = BTreeSet::new();
    let mut pending: Vec<&str> = used.iter().map(String::as_str).collect();
    while let Some(type_name) = pending.pop() {
        if included.contains(type_name) {
            continue;
        }
        match schema.resolve_type(type_name) {
            Some(GraphQLType::Enum(_)) => {
                included.insert(type_name);
            },
            Some(GraphQLType::InputObject(input_type)) => {
                included.insert(type_name);
                pending.extend(
                    input_type.fields()
                        .values()
                        .map(|field| field.type_annotation().innermost_type_name()),
                );
            },
            _ => (),
        }
    }
    log::debug!("Rendering {} global type declaration(s).", included.len());

    let declarations: Vec<String> = included
        .iter()
        .filter_map(|type_name| match schema.resolve_type(type_name) {
            Some(GraphQLType::Enum(enum_type)) => Some(enum_declaration(enum_type)),
            Some(GraphQLType::InputObject(input_type)) =>
                Some(input_object_declaration(schema, input_type, policy)),
            _ => None,
        })
        .collect();

    let mut out = String::from(FILE_HEADER);
    out.push_str(&declarations.join("\n"));
    out
}

fn enum_declaration(enum_type: &EnumType) -> String {
    let mut decl = String::new();
    write_doc_block(&mut decl, "", enum_type.description(), &DeprecationState::NotDeprecated);
    decl.push_str(&format!("export enum {} {{\n", enum_type.name()));
    for value in enum_type.values() {
        write_doc_block(&mut decl, "  ", value.description(), value.deprecation_state());
        decl.push_str(&format!("  {0} = \"{0}\",\n", value.name()));
    }
    decl.push_str("}\n");
    decl
}

fn input_object_declaration(
    schema: &Schema,
    input_type: &InputObjectType,
    policy: &NamingPolicy,
) -> String {
    let mut decl = String::new();
    write_doc_block(&mut decl, "", input_type.description(), &DeprecationState::NotDeprecated);
    decl.push_str(&format!("export type {} = {{\n", input_type.name()));
    for field in input_type.fields().values() {
        write_doc_block(&mut decl, "  ", field.description(), &DeprecationState::NotDeprecated);
        let optional_marker = if field.is_optional() { "?" } else { "" };
        let node = input_shape(schema, field.type_annotation(), policy);
        decl.push_str(&format!(
            "  {}{optional_marker}: {};\n",
            field.name(),
            type_expression(&node),
        ));
    }
    decl.push_str("};\n");
    decl
}

fn input_shape(
    schema: &Schema,
    type_annotation: &TypeAnnotation,
    policy: &NamingPolicy,
) -> TypeShapeNode {
    match type_annotation {
        TypeAnnotation::List(list_annot) => {
            let inner = input_shape(schema, list_annot.inner_type_annotation(), policy);
            TypeShapeNode::ListOf(Box::new(inner)).wrap_nullable(list_annot.nullable())
        },
        TypeAnnotation::Named(named_annot) => {
            let type_name = named_annot.graphql_type_name();
            let node = match schema.resolve_type(type_name) {
                Some(GraphQLType::Enum(_)) => TypeShapeNode::EnumRef(type_name.to_string()),
                Some(GraphQLType::InputObject(_)) =>
                    TypeShapeNode::InputObjectRef(type_name.to_string()),
                // Strictly checked scalars were already reported by the
                // documents that use them.
                _ => TypeShapeNode::ScalarRef(
                    policy.scalar_target(type_name).unwrap_or_else(|| type_name.to_string()),
                ),
            };
            node.wrap_nullable(named_annot.nullable())
        },
    }
}
