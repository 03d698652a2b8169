use crate::config::CompileConfig;
use crate::config::ConfigSet;
use crate::config::CustomScalarNaming;
use crate::config::ModulePaths;
use crate::module_resolver::ModuleRole;
use crate::operation::ResolutionError;
use std::path::Path;
use std::path::PathBuf;

fn root_config() -> CompileConfig {
    CompileConfig {
        fail_fast: Some(true),
        fragment_roots: vec![PathBuf::from("shared")],
        root_dir_import_prefix: Some("~/".to_string()),
        ..CompileConfig::default()
    }
}

#[test]
fn most_specific_directory_wins() {
    let mut configs = ConfigSet::new("/p", root_config());
    configs.add_directory_config("app", CompileConfig {
        custom_scalar_prefix: Some("App".to_string()),
        ..CompileConfig::default()
    });
    configs.add_directory_config("/p/app/admin", CompileConfig {
        custom_scalar_prefix: Some("Admin".to_string()),
        disable_readonly_types: Some(true),
        ..CompileConfig::default()
    });

    let admin = configs.naming_policy_for(Path::new("/p/app/admin/q.graphql"));
    assert_eq!(admin.custom_scalars(), &CustomScalarNaming::Prefixed("Admin".to_string()));
    assert!(!admin.readonly_fields());

    let app = configs.naming_policy_for(Path::new("/p/app/q.graphql"));
    assert_eq!(app.custom_scalars(), &CustomScalarNaming::Prefixed("App".to_string()));
    assert!(app.readonly_fields());

    let elsewhere = configs.naming_policy_for(Path::new("/p/lib/q.graphql"));
    assert_eq!(elsewhere.custom_scalars(), &CustomScalarNaming::Untyped);
}

#[test]
fn nested_readonly_fields_beat_outer_disable_readonly_types() {
    let mut configs = ConfigSet::new("/project", CompileConfig {
        disable_readonly_types: Some(true),
        ..CompileConfig::default()
    });
    configs.add_directory_config("app", CompileConfig {
        readonly_fields: Some(true),
        ..CompileConfig::default()
    });
    configs.add_directory_config("app/legacy", CompileConfig {
        disable_readonly_types: Some(true),
        ..CompileConfig::default()
    });

    assert!(!configs.naming_policy_for(Path::new("/project/q.graphql")).readonly_fields());
    assert!(configs.naming_policy_for(Path::new("/project/app/q.graphql")).readonly_fields());
    assert!(
        !configs
            .naming_policy_for(Path::new("/project/app/legacy/q.graphql"))
            .readonly_fields()
    );
}

#[test]
fn directory_configs_do_not_change_batch_options() {
    let mut configs = ConfigSet::new("/p", root_config());
    configs.add_directory_config("app", CompileConfig {
        fail_fast: Some(false),
        ..CompileConfig::default()
    });
    assert!(configs.config_for(Path::new("/p/app/q.graphql")).fail_fast());
}

#[test]
fn import_roots_come_from_root_config() {
    let configs = ConfigSet::new("/p/./", root_config());
    let roots = configs.import_roots();
    assert_eq!(roots.root_dir, PathBuf::from("/p"));
    assert_eq!(roots.fragment_roots, vec![PathBuf::from("shared")]);
    assert_eq!(roots.root_dir_import_prefix.as_deref(), Some("~/"));
}

#[test]
fn module_paths_become_module_roots() {
    let mut root = root_config();
    root.module_paths.insert(PathBuf::from("app"), ModulePaths {
        document_node: None,
        global_types: Some("~/gen-me/global-types".to_string()),
    });
    let mut configs = ConfigSet::new("/p", root);
    configs.add_directory_config("lib", CompileConfig {
        typed_graphql_documentnode_module_name: Some("./typed".to_string()),
        ..CompileConfig::default()
    });

    let resolver = configs.module_resolver();
    assert_eq!(
        resolver
            .specifier_for(Path::new("/p/app/__generated__/Q.ts"), ModuleRole::GlobalTypes)
            .unwrap(),
        "~/gen-me/global-types",
    );
    assert_eq!(
        resolver
            .specifier_for(Path::new("/p/lib/__generated__/Q.ts"), ModuleRole::DocumentNode)
            .unwrap(),
        "../typed",
    );
}

#[test]
fn overlapping_module_roots_are_ambiguous() {
    let mut root = root_config();
    root.module_paths.insert(PathBuf::from("app"), ModulePaths {
        document_node: None,
        global_types: Some("from-root".to_string()),
    });
    let mut configs = ConfigSet::new("/p", root);
    configs.add_directory_config("app", CompileConfig {
        global_types_module_name: Some("from-app".to_string()),
        ..CompileConfig::default()
    });

    let err = configs
        .module_resolver()
        .specifier_for(Path::new("/p/app/__generated__/Q.ts"), ModuleRole::GlobalTypes)
        .unwrap_err();
    assert!(matches!(err, ResolutionError::AmbiguousModuleRoot { role: ModuleRole::GlobalTypes, .. }));
}
