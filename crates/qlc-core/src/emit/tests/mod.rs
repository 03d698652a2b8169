mod global_types_tests;
mod typescript_emitter_tests;

use crate::config::NamingPolicy;
use crate::emit;
use crate::emit::ImportSpecifiers;
use crate::test::synthesize_document;

fn imports() -> ImportSpecifiers {
    ImportSpecifiers {
        document_node: "@docs".to_string(),
        global_types: "@globals".to_string(),
    }
}

fn emit_with(source: &str, policy: &NamingPolicy) -> String {
    let tree = synthesize_document(source, policy, false).unwrap();
    emit::emit(&tree, &imports())
}

fn emit_source(source: &str) -> String {
    emit_with(source, &NamingPolicy::default())
}
