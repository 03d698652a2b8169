use crate::CompileError;
use crate::Compiler;
use crate::SourceFile;
use crate::config::CompileConfig;
use crate::config::ConfigSet;
use crate::config::OutputLayout;
use crate::operation::ParseError;
use crate::synth::SynthesisError;
use crate::synth::SynthesisWarning;
use crate::test::fixture_schema;
use std::path::Path;
use std::path::PathBuf;

fn config_set(config: CompileConfig) -> ConfigSet {
    ConfigSet::new("/project", config)
}

fn source(path: &str, content: &str) -> SourceFile {
    SourceFile::new(format!("/project/{path}"), content)
}

fn mixed_batch() -> Vec<SourceFile> {
    vec![
        source("users/me.graphql", "query Me { me { id } }"),
        source("hosts/broken.graphql", "fragment Broken on Host { id"),
        source(
            "hosts/host.graphql",
            "#import \"./broken.graphql\"\nquery GetHost { host(id: \"1\") { ...Broken } }",
        ),
    ]
}

#[test]
fn compiles_into_generated_directory() {
    let compiler = Compiler::new(fixture_schema(), config_set(CompileConfig::default()));
    let output = compiler.compile(vec![source("users/me.graphql", "query Me { me { id } }")]);

    assert!(output.is_success());
    let [file] = output.files() else {
        panic!("expected one generated file, got {:?}", output.files());
    };
    assert_eq!(file.path, PathBuf::from("/project/users/__generated__/Me.ts"));
    assert_eq!(file.source_path, PathBuf::from("/project/users/me.graphql"));
    assert!(file.contents.starts_with("/* eslint-disable */\n"));
    assert!(file.contents.contains(
        "import type { QueryDocumentNode } from \"@notarize/qlc-cli/typed-documentnode\";",
    ));
}

#[test]
fn colocated_layout_writes_next_to_the_document() {
    let config = CompileConfig {
        output_layout: Some(OutputLayout::Colocated),
        ..CompileConfig::default()
    };
    let compiler = Compiler::new(fixture_schema(), config_set(config));
    let output = compiler.compile(vec![source("me.graphql", "query Me { me { id } }")]);
    assert_eq!(output.files()[0].path, PathBuf::from("/project/me.graphql.d.ts"));
}

#[test]
fn fragments_from_sibling_files_are_inlined() {
    let compiler = Compiler::new(fixture_schema(), config_set(CompileConfig::default()));
    let output = compiler.compile(vec![
        source("users/me.graphql", "query Me { me { ...UserName } }"),
        source("users/user_name.graphql", "fragment UserName on User { firstName }"),
    ]);

    assert!(output.is_success(), "{:?}", output.diagnostics());
    assert_eq!(output.files().len(), 2);
    let me = output
        .files()
        .iter()
        .find(|file| file.path.ends_with("Me.ts"))
        .unwrap();
    assert!(me.contents.contains("  readonly firstName: string;\n"));
}

#[test]
fn fail_together_reports_every_failure_and_keeps_healthy_output() {
    let compiler = Compiler::new(fixture_schema(), config_set(CompileConfig::default()));
    let output = compiler.compile(mixed_batch());

    assert_eq!(output.files().len(), 1);
    assert_eq!(output.files()[0].path, PathBuf::from("/project/users/__generated__/Me.ts"));

    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].file, PathBuf::from("/project/hosts/broken.graphql"));
    assert!(matches!(diagnostics[0].error, CompileError::Parse(ParseError::Syntax { .. })));
    assert_eq!(diagnostics[1].file, PathBuf::from("/project/hosts/host.graphql"));
    assert_eq!(
        diagnostics[1].error,
        CompileError::DependencyFailed {
            dependency: PathBuf::from("/project/hosts/broken.graphql"),
        },
    );
}

#[test]
fn fail_fast_emits_nothing() {
    let config = CompileConfig {
        fail_fast: Some(true),
        ..CompileConfig::default()
    };
    let compiler = Compiler::new(fixture_schema(), config_set(config));
    let output = compiler.compile(mixed_batch());

    assert!(!output.is_success());
    assert!(output.files().is_empty());
}

#[test]
fn fail_fast_reports_the_first_failing_document_by_path() {
    let config = CompileConfig {
        fail_fast: Some(true),
        ..CompileConfig::default()
    };
    let compiler = Compiler::new(fixture_schema(), config_set(config));
    let batch = || vec![
        source("z/late.graphql", "query Late { me { missingLate } }"),
        source("a/early.graphql", "query Early { me { missingEarly } }"),
        source("m/fine.graphql", "query Fine { me { id } }"),
    ];

    for _ in 0..8 {
        let output = compiler.compile(batch());
        assert!(output.files().is_empty());
        let [diagnostic] = output.diagnostics() else {
            panic!("expected one diagnostic, got {:?}", output.diagnostics());
        };
        assert_eq!(diagnostic.file, PathBuf::from("/project/a/early.graphql"));
    }
}

#[test]
fn dependents_of_failed_synthesis_report_the_dependency() {
    let compiler = Compiler::new(fixture_schema(), config_set(CompileConfig::default()));
    let output = compiler.compile(vec![
        source("users/bad.graphql", "fragment Bad on User { nope }"),
        source("users/me.graphql", "query Me { me { ...Bad } }"),
    ]);

    assert!(output.files().is_empty());
    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(matches!(
        &diagnostics[0].error,
        CompileError::Synthesis(SynthesisError::UnknownField { field_name, .. }) if field_name == "nope",
    ));
    assert_eq!(
        diagnostics[1].error,
        CompileError::DependencyFailed {
            dependency: PathBuf::from("/project/users/bad.graphql"),
        },
    );
}

#[test]
fn compiling_is_deterministic() {
    let batch = vec![
        source("a/me.graphql", "query Me { me { id firstName } }"),
        source("b/node.graphql", r#"query N { node(id: "1") { __typename ... on Host { name } } }"#),
        source("c/provision.graphql", "mutation P($input: ProvisionHostInput!) { provisionHost(input: $input) { id } }"),
    ];
    let mut reversed = batch.clone();
    reversed.reverse();

    let compiler = Compiler::new(fixture_schema(), config_set(CompileConfig::default()));
    let first = compiler.compile(batch.clone());
    assert_eq!(first, compiler.compile(batch));
    assert_eq!(first, compiler.compile(reversed));
}

#[test]
fn global_refs_feed_the_global_types_file() {
    let compiler = Compiler::new(fixture_schema(), config_set(CompileConfig::default()));
    let output = compiler.compile(vec![source(
        "provision.graphql",
        "mutation P($input: ProvisionHostInput!) { provisionHost(input: $input) { id } }",
    )]);

    let refs: Vec<&str> = output.global_refs().iter().map(String::as_str).collect();
    assert_eq!(refs, vec!["ProvisionHostInput"]);
    let globals = compiler.compile_global_types(output.global_refs());
    assert!(globals.contains("export enum OperatingSystem {\n"));
    assert!(globals.contains("export type ProvisionHostInput = {\n"));
}

#[test]
fn directory_configs_override_per_file_options() {
    let mut configs = config_set(CompileConfig::default());
    configs.add_directory_config("admin", CompileConfig {
        custom_scalar_prefix: Some("Admin".to_string()),
        typed_graphql_documentnode_module_name: Some("@admin/documents".to_string()),
        ..CompileConfig::default()
    });
    let compiler = Compiler::new(fixture_schema(), configs);
    let output = compiler.compile(vec![
        source("admin/created.graphql", "query AdminCreated { me { createdAt } }"),
        source("created.graphql", "query Created { me { createdAt } }"),
    ]);

    let contents_of = |name: &str| {
        output
            .files()
            .iter()
            .find(|file| file.path.file_name() == Some(Path::new(name).as_os_str()))
            .map(|file| file.contents.as_str())
            .unwrap()
    };
    let admin = contents_of("AdminCreated.ts");
    assert!(admin.contains("readonly createdAt: AdminISO8601;"));
    assert!(admin.contains("from \"@admin/documents\";"));
    let root = contents_of("Created.ts");
    assert!(root.contains("readonly createdAt: any;"));
}

#[test]
fn directory_configs_set_layout_and_deprecation_warnings() {
    let mut configs = config_set(CompileConfig::default());
    configs.add_directory_config("legacy", CompileConfig {
        output_layout: Some(OutputLayout::Colocated),
        show_deprecation_warnings: Some(true),
        ..CompileConfig::default()
    });
    let compiler = Compiler::new(fixture_schema(), configs);
    let output = compiler.compile(vec![
        source("legacy/nick.graphql", "query LegacyNick { me { nickname } }"),
        source("nick.graphql", "query Nick { me { nickname } }"),
    ]);

    assert!(output.is_success());
    let paths: Vec<&Path> = output.files().iter().map(|file| file.path.as_path()).collect();
    assert_eq!(paths, vec![
        Path::new("/project/legacy/nick.graphql.d.ts"),
        Path::new("/project/__generated__/Nick.ts"),
    ]);
    let [warning] = output.warnings() else {
        panic!("expected one warning, got {:?}", output.warnings());
    };
    assert_eq!(warning.file, PathBuf::from("/project/legacy/nick.graphql"));
}

#[test]
fn warnings_are_collected_per_file() {
    let config = CompileConfig {
        show_deprecation_warnings: Some(true),
        ..CompileConfig::default()
    };
    let compiler = Compiler::new(fixture_schema(), config_set(config));
    let output = compiler.compile(vec![source("nick.graphql", "query Nick { me { nickname } }")]);

    assert!(output.is_success());
    let [warning] = output.warnings() else {
        panic!("expected one warning, got {:?}", output.warnings());
    };
    assert_eq!(warning.file, PathBuf::from("/project/nick.graphql"));
    assert!(matches!(warning.warning, SynthesisWarning::DeprecatedField { .. }));
}

#[test]
fn multiple_definitions_per_file_are_rejected_by_default() {
    let compiler = Compiler::new(fixture_schema(), config_set(CompileConfig::default()));
    let output = compiler.compile(vec![source(
        "two.graphql",
        "query Me { me { ...F } } fragment F on User { id }",
    )]);
    assert!(matches!(
        output.diagnostics()[0].error,
        CompileError::Parse(ParseError::MultipleDefinitionsPerFile { .. }),
    ));
}
