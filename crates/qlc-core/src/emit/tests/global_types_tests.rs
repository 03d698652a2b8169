use crate::config::NamingPolicy;
use crate::emit::FILE_HEADER;
use crate::emit::render_global_types;
use crate::test::fixture_schema;
use std::collections::BTreeSet;

fn render(names: &[&str]) -> String {
    let used: BTreeSet<String> = names.iter().map(|name| name.to_string()).collect();
    render_global_types(fixture_schema(), &used, &NamingPolicy::default())
}

#[test]
fn input_objects_pull_in_the_enums_they_use() {
    let expected = format!("{FILE_HEADER}{}", r#"/**
 * An OS makes hardware useful
 */
export enum OperatingSystem {
  ARCH_LINUX = "ARCH_LINUX",
  FREEBSD = "FREEBSD",
  UBUNTU_LINUX = "UBUNTU_LINUX",
}

export type ProvisionHostInput = {
  os: OperatingSystem;
  name?: string | null;
};
"#);
    assert_eq!(render(&["ProvisionHostInput"]), expected);
}

#[test]
fn input_fields_carry_descriptions() {
    let expected = format!("{FILE_HEADER}{}", r#"export type AttachHostToNetworksInput = {
  /**
   * ID of host to attach
   */
  hostId: string;
  /**
   * IDs of networks to attach to
   */
  networkIds: string[];
};
"#);
    assert_eq!(render(&["AttachHostToNetworksInput"]), expected);
}

#[test]
fn non_global_names_are_skipped() {
    assert_eq!(render(&["User", "Nope"]), FILE_HEADER);
}
