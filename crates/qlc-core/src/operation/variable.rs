use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// A variable declared by an operation, e.g. `$id: ID!`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(super) def_location: loc::FilePosition,
    pub(super) has_default_value: bool,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Variable {
    pub(super) fn from_ast(
        file_path: &Path,
        ast_var: &ast::operation::VariableDefinition,
    ) -> Self {
        let def_location = loc::FilePosition::from_pos(Some(file_path), ast_var.position);
        Self {
            has_default_value: ast_var.default_value.is_some(),
            name: ast_var.name.clone(),
            type_annotation: TypeAnnotation::from_ast_type(&def_location, &ast_var.var_type),
            def_location,
        }
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// A caller may leave out a variable that is nullable or has a default.
    pub fn is_optional(&self) -> bool {
        self.has_default_value || self.type_annotation.nullable()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
