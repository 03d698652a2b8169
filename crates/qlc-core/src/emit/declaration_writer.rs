use crate::emit::doc_block::write_doc_block;
use crate::synth::Record;
use crate::synth::TypeShapeNode;

/// Collects `export type` declarations so that every declaration follows
/// the declarations it refers to.
#[derive(Debug, Default)]
pub(super) struct DeclarationWriter {
    declarations: Vec<String>,
}
impl DeclarationWriter {
    pub(super) fn into_declarations(self) -> Vec<String> {
        self.declarations
    }

    /// Declare every named type reachable from `node`, innermost first.
    pub(super) fn write_node(&mut self, node: &TypeShapeNode) {
        match node {
            TypeShapeNode::DiscriminatedUnion { name, variants } => {
                for variant in variants {
                    self.write_record(variant.record());
                }
                let variant_names = variants
                    .iter()
                    .map(|variant| variant.record().name())
                    .collect::<Vec<_>>()
                    .join(" | ");
                self.declarations.push(format!("export type {name} = {variant_names};\n"));
            },
            TypeShapeNode::ListOf(inner) | TypeShapeNode::Optional(inner) =>
                self.write_node(inner),
            TypeShapeNode::Record(record) => self.write_record(record),
            TypeShapeNode::EnumRef(_)
                | TypeShapeNode::InputObjectRef(_)
                | TypeShapeNode::Literal(_)
                | TypeShapeNode::ScalarRef(_) => (),
        }
    }

    /// Declare `record` after the types its fields refer to.
    ///
    /// A field marked `optional` renders as `key?: T` (its node already
    /// carries the `| null`).
    pub(super) fn write_record(&mut self, record: &Record) {
        for field in record.fields() {
            self.write_node(field.node());
        }

        let modifier = if record.readonly() { "readonly " } else { "" };
        let mut decl = format!("export type {} = {{\n", record.name());
        if record.fields().is_empty() {
            decl.push('\n');
        }
        for field in record.fields() {
            write_doc_block(&mut decl, "  ", field.description(), field.deprecation());
            let optional_marker = if field.optional() { "?" } else { "" };
            decl.push_str(&format!(
                "  {modifier}{}{optional_marker}: {};\n",
                field.key(),
                type_expression(field.node()),
            ));
        }
        decl.push_str("};\n");
        self.declarations.push(decl);
    }
}

/// The TypeScript type expression for a reference to `node`.
pub(super) fn type_expression(node: &TypeShapeNode) -> String {
    match node {
        TypeShapeNode::DiscriminatedUnion { name, .. } => name.clone(),
        TypeShapeNode::EnumRef(name)
            | TypeShapeNode::InputObjectRef(name)
            | TypeShapeNode::ScalarRef(name) => name.clone(),
        TypeShapeNode::ListOf(inner) => {
            let inner_expr = type_expression(inner);
            if is_bare(inner) {
                format!("{inner_expr}[]")
            } else {
                format!("({inner_expr})[]")
            }
        },
        TypeShapeNode::Literal(literals) => literals
            .iter()
            .map(|literal| format!("\"{literal}\""))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeShapeNode::Optional(inner) => format!("{} | null", type_expression(inner)),
        TypeShapeNode::Record(record) => record.name().to_string(),
    }
}

/// Whether `[]` can follow the expression for `node` without parentheses.
fn is_bare(node: &TypeShapeNode) -> bool {
    match node {
        TypeShapeNode::ListOf(_) | TypeShapeNode::Optional(_) => false,
        TypeShapeNode::Literal(literals) => literals.len() == 1,
        _ => true,
    }
}
