use crate::types::Field;
use indexmap::IndexMap;

/// Behavior shared by the two schema types that declare fields.
pub trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
