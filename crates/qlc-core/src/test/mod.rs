mod snapshot_tests;

use crate::config::NamingPolicy;
use crate::operation::DocumentFile;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::ImportRoots;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::synth;
use crate::synth::SynthesisError;
use crate::synth::TypeShapeTree;
use std::path::Path;
use std::sync::OnceLock;

pub(crate) const FIXTURE_SCHEMA_JSON: &str = include_str!("fixtures/schema.json");

/// The introspection fixture shared by every test in the crate.
pub(crate) fn fixture_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        SchemaBuilder::from_str(FIXTURE_SCHEMA_JSON)
            .unwrap()
            .build()
            .unwrap()
    })
}

/// Parse, resolve and synthesize a single document (which may define local
/// fragments) against the fixture schema.
pub(crate) fn synthesize_document(
    source: &str,
    policy: &NamingPolicy,
    show_deprecation_warnings: bool,
) -> Result<TypeShapeTree, Vec<SynthesisError>> {
    let file = DocumentFile::parse(source, Path::new("/p/q.graphql"), false).unwrap();
    let mut builder = FragmentRegistryBuilder::new(ImportRoots::default());
    builder.add_file(file.clone()).unwrap();
    let registry = builder.build();
    let resolved = registry.resolve(file.primary()).unwrap();
    synth::synthesize(&resolved, fixture_schema(), policy, show_deprecation_warnings)
}
