mod variables_tests;

use crate::config::NamingPolicy;
use crate::synth;
use crate::synth::SynthesisError;
use crate::synth::TypeShapeNode;
use crate::synth::TypeShapeTree;
use crate::test::synthesize_document;

fn synthesize_with(
    source: &str,
    policy: &NamingPolicy,
    show_deprecation_warnings: bool,
) -> Result<TypeShapeTree, Vec<SynthesisError>> {
    synthesize_document(source, policy, show_deprecation_warnings)
}

fn synthesize(source: &str) -> TypeShapeTree {
    synthesize_with(source, &NamingPolicy::default(), false).unwrap()
}

fn synthesize_err(source: &str) -> Vec<SynthesisError> {
    synthesize_with(source, &NamingPolicy::default(), false).unwrap_err()
}

fn unwrap_optional(node: &TypeShapeNode) -> &TypeShapeNode {
    match node {
        TypeShapeNode::Optional(inner) => inner,
        other => panic!("expected an optional node, got {other:?}"),
    }
}

fn unwrap_list(node: &TypeShapeNode) -> &TypeShapeNode {
    match node {
        TypeShapeNode::ListOf(inner) => inner,
        other => panic!("expected a list node, got {other:?}"),
    }
}

fn as_record(node: &TypeShapeNode) -> &synth::Record {
    match node {
        TypeShapeNode::Record(record) => record,
        other => panic!("expected a record, got {other:?}"),
    }
}

fn field_keys(record: &synth::Record) -> Vec<&str> {
    record.fields().iter().map(|field| field.key()).collect()
}
