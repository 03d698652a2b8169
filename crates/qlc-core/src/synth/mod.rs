mod record;
mod record_field;
mod synthesis_error;
mod synthesis_warning;
mod synthesizer;
mod type_shape_node;
mod type_shape_tree;
mod variant;

pub use record::Record;
pub use record_field::RecordField;
pub use synthesis_error::SynthesisError;
pub use synthesis_warning::SynthesisWarning;
pub use type_shape_node::TypeShapeNode;
pub use type_shape_tree::TypeShapeTree;
pub use variant::Variant;

use crate::config::NamingPolicy;
use crate::operation::ResolvedOperation;
use crate::schema::Schema;
use synthesizer::Synthesizer;

/// Walk a fully resolved operation or fragment against `schema` and produce
/// the shapes of its data and variables.
///
/// Every problem found is reported, not just the first.
pub fn synthesize(
    operation: &ResolvedOperation,
    schema: &Schema,
    policy: &NamingPolicy,
    show_deprecation_warnings: bool,
) -> Result<TypeShapeTree, Vec<SynthesisError>> {
    Synthesizer::new(schema, policy, show_deprecation_warnings).synthesize(operation)
}

#[cfg(test)]
mod tests;
