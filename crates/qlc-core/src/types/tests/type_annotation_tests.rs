use crate::loc;
use crate::test::fixture_schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;

fn from_document(type_str: &str) -> TypeAnnotation {
    let query = format!("query Q($v: {type_str}) {{ me {{ id }} }}");
    let doc = crate::operation::parse(query.as_str(), "q.graphql").unwrap();
    doc.variables()[0].type_annotation().clone()
}

#[test]
fn named_annotation_carries_nullability() {
    let annot = from_document("String");
    assert!(annot.nullable());
    assert_eq!(annot.innermost_type_name(), "String");
    assert!(annot.as_list_annotation().is_none());

    let annot = from_document("String!");
    assert!(!annot.nullable());
    assert_eq!(annot.to_string(), "String!");
}

#[test]
fn nested_lists_track_nullability_per_level() {
    let annot = from_document("[[String!]]!");
    assert_eq!(annot.to_graphql_string(), "[[String!]]!");
    assert!(!annot.nullable());

    let outer = annot.as_list_annotation().unwrap();
    let middle = outer.inner_type_annotation();
    assert!(middle.nullable());
    let inner = middle.as_list_annotation().unwrap().inner_type_annotation();
    assert!(!inner.nullable());
    assert_eq!(inner.as_named_annotation().unwrap().graphql_type_name(), "String");
}

#[test]
fn document_annotations_have_no_kind_hint() {
    let annot = from_document("ProvisionHostInput!");
    let named = annot.innermost_named_type_annotation();
    assert_eq!(named.kind_hint(), None);
    assert!(matches!(named.ref_location(), loc::SourceLocation::Document(pos) if pos.line == 1));
}

#[test]
fn named_annotation_derefs_against_schema() {
    let annot = from_document("OperatingSystem");
    let graphql_type = annot
        .innermost_named_type_annotation()
        .graphql_type(fixture_schema())
        .unwrap();
    assert!(matches!(graphql_type, GraphQLType::Enum(_)));
    assert_eq!(graphql_type.type_kind(), GraphQLTypeKind::Enum);

    let annot = from_document("Nope");
    assert!(annot
        .innermost_named_type_annotation()
        .graphql_type(fixture_schema())
        .is_err());
}

#[test]
fn introspected_fields_keep_kind_hints() {
    let fields = fixture_schema().fields_of("Host").unwrap();
    let os = fields.get("operatingSystem").unwrap().type_annotation();
    assert!(!os.nullable());
    assert_eq!(
        os.innermost_named_type_annotation().kind_hint(),
        Some(GraphQLTypeKind::Enum),
    );

    let networks = fields.get("networks").unwrap().type_annotation();
    assert_eq!(networks.to_graphql_string(), "[Network]");
}
