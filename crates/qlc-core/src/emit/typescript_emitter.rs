use crate::emit::FILE_HEADER;
use crate::emit::ImportSpecifiers;
use crate::emit::declaration_writer::DeclarationWriter;
use crate::operation::OperationKind;
use crate::synth::TypeShapeTree;

/// Renders a [`TypeShapeTree`] as a TypeScript declaration file: header,
/// imports, one declaration per named shape (leaves first), the variables
/// type and finally the default-exported document handle.
pub struct TypeScriptEmitter<'a> {
    imports: &'a ImportSpecifiers,
    tree: &'a TypeShapeTree,
}
impl<'a> TypeScriptEmitter<'a> {
    pub fn new(tree: &'a TypeShapeTree, imports: &'a ImportSpecifiers) -> Self {
        Self {
            imports,
            tree,
        }
    }

    fn document_node_type(&self) -> &'static str {
        match self.tree.kind() {
            OperationKind::Fragment => "FragmentDocumentNode",
            OperationKind::Mutation => "MutationDocumentNode",
            OperationKind::Query => "QueryDocumentNode",
            OperationKind::Subscription => "SubscriptionDocumentNode",
        }
    }

    fn handle_declaration(&self) -> String {
        let data_type = self.tree.root().declaration_name().unwrap_or(self.tree.name());
        let handle = if self.tree.kind().is_fragment() {
            format!("{}<{data_type}>", self.document_node_type())
        } else {
            let variables_type = self.tree
                .variables()
                .map(|variables| variables.name())
                .unwrap_or("never");
            format!("{}<{data_type}, {variables_type}>", self.document_node_type())
        };
        format!("declare const graphqlDocument: {handle};\nexport default graphqlDocument;\n")
    }

    fn import_lines(&self) -> String {
        let mut lines = format!(
            "import type {{ {} }} from \"{}\";\n",
            self.document_node_type(),
            self.imports.document_node,
        );
        let global_refs = self.tree.global_refs();
        if !global_refs.is_empty() {
            let names = global_refs.iter().cloned().collect::<Vec<_>>().join(", ");
            lines.push_str(&format!(
                "import type {{ {names} }} from \"{}\";\n",
                self.imports.global_types,
            ));
        }
        lines
    }

    pub fn render(&self) -> String {
        let mut writer = DeclarationWriter::default();
        writer.write_node(self.tree.root());
        if let Some(variables) = self.tree.variables() {
            writer.write_record(variables);
        }

        let mut out = String::from(FILE_HEADER);
        out.push_str(&self.import_lines());
        for declaration in writer.into_declarations() {
            out.push('\n');
            out.push_str(&declaration);
        }
        out.push('\n');
        out.push_str(&self.handle_declaration());
        out
    }
}
