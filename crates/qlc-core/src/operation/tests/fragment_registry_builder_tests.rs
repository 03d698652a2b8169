use crate::operation::DocumentFile;
use crate::operation::FragmentKey;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::ImportRoots;
use crate::operation::ResolutionError;
use crate::operation::Selection;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

fn roots() -> ImportRoots {
    ImportRoots {
        fragment_roots: vec![PathBuf::from("shared")],
        root_dir: PathBuf::from("/project"),
        root_dir_import_prefix: Some("@app/".to_string()),
    }
}

fn parse(path: &str, source: &str) -> DocumentFile {
    DocumentFile::parse(source, Path::new(path), true).unwrap()
}

fn build(files: Vec<DocumentFile>) -> FragmentRegistry {
    let mut builder = FragmentRegistryBuilder::new(roots());
    for file in files {
        builder.add_file(file).unwrap();
    }
    builder.build()
}

#[test]
fn empty_registry() {
    let registry = FragmentRegistryBuilder::new(ImportRoots::default()).build();
    assert!(registry.fragments().is_empty());
}

#[test]
fn resolves_same_directory_fragment() {
    let registry = build(vec![
        parse("/project/app/user_fields.graphql", "fragment UserFields on User { id }"),
        parse("/project/app/me.graphql", "query Me { me { ...UserFields } }"),
    ]);
    let key = registry.lookup(Path::new("/project/app/me.graphql"), "UserFields").unwrap();
    assert_eq!(key.file, PathBuf::from("/project/app/user_fields.graphql"));
}

#[test]
fn inlines_spreads_by_copy() {
    let me = parse("/project/app/me.graphql", "query Me { me { ...UserFields } }");
    let registry = build(vec![
        parse("/project/app/user_fields.graphql", "fragment UserFields on User { id firstName }"),
        me.clone(),
    ]);

    let resolved = registry.resolve(me.primary()).unwrap();
    let Selection::Field(me_field) = &resolved.selection_set().selections()[0] else {
        panic!("expected a field");
    };
    let Selection::InlineFragment(inlined) = &me_field.selection_set().unwrap().selections()[0] else {
        panic!("expected the spread to become an inline fragment");
    };
    assert_eq!(inlined.type_condition(), Some("User"));
    assert_eq!(inlined.origin_fragment(), Some("UserFields"));
    assert_eq!(inlined.selection_set().selections().len(), 2);
    assert!(resolved.selection_set().fragment_spreads().is_empty());
}

#[test]
fn transitive_inlining_terminates() {
    let a = parse("/project/app/a.graphql", "query A { me { ...B } }");
    let registry = build(vec![
        a.clone(),
        parse("/project/app/b.graphql", "fragment B on User { id personalHost { ...C } }"),
        parse("/project/app/c.graphql", "fragment C on Host { numCpus }"),
    ]);

    let resolved = registry.resolve(a.primary()).unwrap();
    assert!(resolved.selection_set().fragment_spreads().is_empty());
    assert_eq!(
        registry.dependencies_of(Path::new("/project/app/a.graphql")),
        BTreeSet::from([
            PathBuf::from("/project/app/b.graphql"),
            PathBuf::from("/project/app/c.graphql"),
        ]),
    );
}

#[test]
fn two_fragment_cycle_is_named() {
    let a = parse("/project/app/a.graphql", "fragment A on User { ...B }");
    let registry = build(vec![
        a.clone(),
        parse("/project/app/b.graphql", "fragment B on User { ...A }"),
    ]);

    let errors = registry.resolve(a.primary()).unwrap_err();
    assert_eq!(errors.len(), 1);
    let ResolutionError::CyclicFragment { cycle, .. } = &errors[0] else {
        panic!("expected a cycle error, got {errors:?}");
    };
    assert_eq!(cycle, &vec!["A".to_string(), "B".to_string(), "A".to_string()]);
}

#[test]
fn phase_shifted_cycles_share_one_path() {
    let b = parse("/project/app/b.graphql", "fragment B on User { ...C }");
    let registry = build(vec![
        parse("/project/app/a.graphql", "fragment A on User { ...B }"),
        b.clone(),
        parse("/project/app/c.graphql", "fragment C on User { ...A }"),
    ]);

    let errors = registry.resolve(b.primary()).unwrap_err();
    let ResolutionError::CyclicFragment { cycle, .. } = &errors[0] else {
        panic!("expected a cycle error");
    };
    assert_eq!(cycle.join(" → "), "A → B → C → A");
}

#[test]
fn self_spread_is_a_cycle() {
    let a = parse("/project/app/a.graphql", "fragment A on User { id ...A }");
    let registry = build(vec![a.clone()]);
    let errors = registry.resolve(a.primary()).unwrap_err();
    assert!(matches!(&errors[0], ResolutionError::CyclicFragment { cycle, .. } if cycle.len() == 2));
}

#[test]
fn unknown_fragment_names_referencing_file() {
    let q = parse("/project/app/q.graphql", "query Q { me { ...Missing } }");
    let registry = build(vec![q.clone()]);

    let errors = registry.resolve(q.primary()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ResolutionError::UnknownFragment { fragment_name, referencing_file, location }
            if fragment_name == "Missing"
                && referencing_file == Path::new("/project/app/q.graphql")
                && location.line == 1,
    ));
}

#[test]
fn imported_file_wins_over_fragment_roots() {
    let q = parse(
        "/project/app/q.graphql",
        "#import \"@app/lib/fields.graphql\"\nquery Q { me { ...Fields } }",
    );
    let registry = build(vec![
        q.clone(),
        parse("/project/lib/fields.graphql", "fragment Fields on User { id }"),
        parse("/project/shared/fields.graphql", "fragment Fields on User { email }"),
    ]);

    let key = registry.lookup(Path::new("/project/app/q.graphql"), "Fields").unwrap();
    assert_eq!(key, &FragmentKey {
        file: PathBuf::from("/project/lib/fields.graphql"),
        name: "Fields".to_string(),
    });
}

#[test]
fn relative_import_resolves_against_importing_directory() {
    let q = parse(
        "/project/app/pages/q.graphql",
        "#import \"../fragments/fields.graphql\"\nquery Q { me { ...Fields } }",
    );
    let registry = build(vec![
        q.clone(),
        parse("/project/app/fragments/fields.graphql", "fragment Fields on User { id }"),
    ]);
    assert!(registry.resolve(q.primary()).is_ok());
}

#[test]
fn fragment_roots_are_searched_last() {
    let q = parse("/project/app/q.graphql", "query Q { me { ...Shared } }");
    let registry = build(vec![
        q.clone(),
        parse("/project/shared/deep/shared.graphql", "fragment Shared on User { id }"),
    ]);
    let key = registry.lookup(Path::new("/project/app/q.graphql"), "Shared").unwrap();
    assert_eq!(key.file, PathBuf::from("/project/shared/deep/shared.graphql"));
}

#[test]
fn ambiguous_fragment_in_one_tier() {
    let q = parse("/project/app/q.graphql", "query Q { me { ...Twice } }");
    let registry = build(vec![
        q.clone(),
        parse("/project/app/one.graphql", "fragment Twice on User { id }"),
        parse("/project/app/two.graphql", "fragment Twice on User { email }"),
    ]);

    let errors = registry.resolve(q.primary()).unwrap_err();
    assert!(matches!(
        &errors[0],
        ResolutionError::AmbiguousFragment { candidates, .. } if candidates.len() == 2,
    ));
}

#[test]
fn unresolved_import_is_reported() {
    let q = parse(
        "/project/app/q.graphql",
        "#import \"./nowhere.graphql\"\nquery Q { me { id } }",
    );
    let registry = build(vec![q.clone()]);
    let errors = registry.resolve(q.primary()).unwrap_err();
    assert!(matches!(
        &errors[0],
        ResolutionError::UnresolvedImport { import_path, .. } if import_path == "./nowhere.graphql",
    ));
}

#[test]
fn imports_of_failed_files_are_dependencies() {
    let q = parse(
        "/project/app/q.graphql",
        "#import \"./broken.graphql\"\nquery Q { me { id } }",
    );
    let mut builder = FragmentRegistryBuilder::new(roots());
    builder.add_file(q.clone()).unwrap();
    builder.add_failed_file("/project/app/broken.graphql");
    let registry = builder.build();

    assert!(registry.resolve(q.primary()).is_ok());
    assert_eq!(
        registry.dependencies_of(Path::new("/project/app/q.graphql")),
        BTreeSet::from([PathBuf::from("/project/app/broken.graphql")]),
    );
}

#[test]
fn duplicate_fragment_in_one_file() {
    let file = DocumentFile::parse(
        "fragment F on User { id } fragment F on User { email }",
        Path::new("/project/app/f.graphql"),
        false,
    ).unwrap();
    let mut builder = FragmentRegistryBuilder::new(roots());
    let err = builder.add_file(file).unwrap_err();
    assert!(matches!(
        err,
        ResolutionError::DuplicateFragmentDefinition { fragment_name, .. } if fragment_name == "F",
    ));
}
