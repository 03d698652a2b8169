use super::synthesize;
use super::synthesize_err;
use super::unwrap_list;
use super::unwrap_optional;
use crate::synth::SynthesisError;
use crate::synth::TypeShapeNode;

#[test]
fn no_variables_is_distinct_from_an_empty_record() {
    let tree = synthesize("query Me { me { id } }");
    assert!(tree.variables().is_none());
}

#[test]
fn variables_record_is_sorted_and_not_readonly() {
    let tree = synthesize(
        "query H($os: OperatingSystem, $id: ID!, $first: Int = 10, $ids: [ID!]) { host { id } }",
    );
    let variables = tree.variables().unwrap();
    assert_eq!(variables.name(), "HVariables");
    assert!(!variables.readonly());

    let keys: Vec<&str> = variables.fields().iter().map(|f| f.key()).collect();
    assert_eq!(keys, vec!["first", "id", "ids", "os"]);

    let id = variables.field("id").unwrap();
    assert!(!id.optional());
    assert_eq!(id.node(), &TypeShapeNode::ScalarRef("string".to_string()));

    let first = variables.field("first").unwrap();
    assert!(first.optional());

    let os = variables.field("os").unwrap();
    assert!(os.optional());
    assert_eq!(unwrap_optional(os.node()), &TypeShapeNode::EnumRef("OperatingSystem".to_string()));

    let ids = variables.field("ids").unwrap();
    assert_eq!(
        unwrap_list(unwrap_optional(ids.node())),
        &TypeShapeNode::ScalarRef("string".to_string()),
    );
    assert!(tree.global_refs().contains("OperatingSystem"));
}

#[test]
fn input_objects_are_global_references() {
    let tree = synthesize(
        "mutation P($input: ProvisionHostInput!) { provisionHost(input: $input) { id } }",
    );
    let variables = tree.variables().unwrap();
    assert_eq!(
        variables.field("input").unwrap().node(),
        &TypeShapeNode::InputObjectRef("ProvisionHostInput".to_string()),
    );
    assert!(tree.global_refs().contains("ProvisionHostInput"));
}

#[test]
fn output_types_cannot_be_variables() {
    let errors = synthesize_err("query Q($user: User) { me { id } }");
    assert!(matches!(
        &errors[0],
        SynthesisError::InvalidVariableType { variable_name, type_name, .. }
            if variable_name == "user" && type_name == "User",
    ));
}

#[test]
fn unknown_variable_types_are_reported() {
    let errors = synthesize_err("query Q($x: Nope!) { me { id } }");
    assert!(matches!(
        &errors[0],
        SynthesisError::UnknownType { type_name, .. } if type_name == "Nope",
    ));
}
