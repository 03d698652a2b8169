use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_ref: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        let inner = self.inner_type_ref.to_graphql_string();
        if self.nullable {
            format!("[{inner}]")
        } else {
            format!("[{inner}]!")
        }
    }
}
