use super::emit_source;
use super::emit_with;
use crate::config::NamingPolicy;
use crate::emit::FILE_HEADER;
use proptest::prelude::*;

#[test]
fn simple_query_renders_leaves_before_parents() {
    let expected = format!("{FILE_HEADER}{}", r#"import type { QueryDocumentNode } from "@docs";

export type Me_me = {
  readonly firstName: string;
  /**
   * A globally unique identifier
   */
  readonly id: string;
};

export type Me = {
  /**
   * The currently authenticated user
   */
  readonly me: Me_me | null;
};

declare const graphqlDocument: QueryDocumentNode<Me, never>;
export default graphqlDocument;
"#);
    assert_eq!(emit_source("query Me { me { id firstName } }"), expected);
}

#[test]
fn mutation_imports_global_types_and_declares_variables() {
    let expected = format!("{FILE_HEADER}{}", r#"import type { MutationDocumentNode } from "@docs";
import type { OperatingSystem, ProvisionHostInput } from "@globals";

export type Provision_provisionHost = {
  readonly name: string | null;
  readonly operatingSystem: OperatingSystem;
};

export type Provision = {
  readonly provisionHost: Provision_provisionHost;
};

export type ProvisionVariables = {
  input: ProvisionHostInput;
};

declare const graphqlDocument: MutationDocumentNode<Provision, ProvisionVariables>;
export default graphqlDocument;
"#);
    let source = "mutation Provision($input: ProvisionHostInput!) {
        provisionHost(input: $input) { name operatingSystem }
    }";
    assert_eq!(emit_source(source), expected);
}

#[test]
fn discriminated_union_lists_variants_then_fallback() {
    let output = emit_source(r#"query N { node(id: "1") { __typename ... on Network { cidr } } }"#);
    assert!(output.contains(
        "export type N_node_Network = {\n  readonly __typename: \"Network\";\n",
    ));
    assert!(output.contains(
        "export type N_node_$$other = {\n  readonly __typename: \"Host\" | \"User\";\n};\n",
    ));
    assert!(output.contains("export type N_node = N_node_Network | N_node_$$other;\n"));
    assert!(output.contains("  readonly node: N_node | null;\n"));

    let union_pos = output.find("export type N_node =").unwrap();
    let variant_pos = output.find("export type N_node_$$other").unwrap();
    assert!(variant_pos < union_pos);
}

#[test]
fn fallback_without_common_fields_renders_an_empty_body() {
    let output = emit_source(r#"query N { node(id: "1") { ... on Network { cidr } } }"#);
    assert!(output.contains("export type N_node_$$other = {\n\n};\n"));
    assert!(output.contains("export type N_node_Network = {\n  readonly cidr: string;\n};\n"));
}

#[test]
fn nested_lists_parenthesize_compound_members() {
    let output = emit_source("query L { tagMatrix me { hostIdGroups } }");
    assert!(output.contains(
        "  readonly tagMatrix: (((string | null)[] | null)[] | null)[] | null;\n",
    ));
    assert!(output.contains("  readonly hostIdGroups: (string[])[];\n"));
}

#[test]
fn deprecations_render_as_doc_annotations() {
    let output = emit_source("query D { me { nickname legacyId } }");
    assert!(output.contains(concat!(
        "  /**\n",
        "   * @deprecated\n",
        "   */\n",
        "  readonly legacyId: number | null;\n",
        "  /**\n",
        "   * @deprecated Use `firstName` instead.\n",
        "   */\n",
        "  readonly nickname: string | null;\n",
    )));
}

#[test]
fn descriptions_are_trimmed_line_by_line() {
    let output = emit_source("query C { me { createdAt } }");
    assert!(output.contains(concat!(
        "  /**\n",
        "   * When the account was created.\n",
        "   * Always in UTC.\n",
        "   */\n",
        "  readonly createdAt: any;\n",
    )));
}

#[test]
fn fragments_use_a_single_parameter_handle() {
    let output = emit_source("fragment HostFields on Host { numCpus }");
    assert!(output.contains("import type { FragmentDocumentNode } from \"@docs\";\n"));
    assert!(output.contains("export type HostFields = {\n  readonly numCpus: number;\n};\n"));
    assert!(output.ends_with(
        "declare const graphqlDocument: FragmentDocumentNode<HostFields>;\nexport default graphqlDocument;\n",
    ));
}

#[test]
fn subscriptions_use_their_own_handle() {
    let output = emit_source("subscription W { hostUpdated { online } }");
    assert!(output.contains("SubscriptionDocumentNode<W, never>"));
}

#[test]
fn readonly_can_be_disabled_and_optional_variables_are_marked() {
    let policy = NamingPolicy::default().with_readonly_fields(false);
    let output = emit_with("query H($id: ID!, $first: Int) { host(id: $id) { online } }", &policy);
    assert!(output.contains("export type H_host = {\n  online: boolean;\n};\n"));
    assert!(output.contains(
        "export type HVariables = {\n  first?: number | null;\n  id: string;\n};\n",
    ));
    assert!(output.contains("QueryDocumentNode<H, HVariables>"));
}

proptest! {
    #[test]
    fn emission_ignores_selection_order(
        fields in Just(vec!["email", "firstName", "id", "lastName", "nickname"]).prop_shuffle(),
    ) {
        let source = format!("query Me {{ me {{ {} }} }}", fields.join(" "));
        let baseline = emit_source("query Me { me { email firstName id lastName nickname } }");
        prop_assert_eq!(emit_source(&source), baseline);
    }
}
