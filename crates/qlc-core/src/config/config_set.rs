use crate::config::CompileConfig;
use crate::config::ModulePaths;
use crate::config::NamingPolicy;
use crate::module_resolver::ModuleResolver;
use crate::module_resolver::ModuleRoot;
use crate::operation::ImportRoots;
use crate::paths;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

/// The project-root configuration plus every directory-level
/// configuration found below the root.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSet {
    directory_configs: BTreeMap<PathBuf, CompileConfig>,
    root: CompileConfig,
    root_dir: PathBuf,
}
impl ConfigSet {
    pub fn new(root_dir: impl AsRef<Path>, root: CompileConfig) -> Self {
        Self {
            directory_configs: BTreeMap::new(),
            root,
            root_dir: paths::normalize(root_dir.as_ref()),
        }
    }

    /// Register the configuration of a directory below the root. `dir` may
    /// be absolute or relative to the root.
    pub fn add_directory_config(&mut self, dir: impl AsRef<Path>, config: CompileConfig) {
        let dir = paths::normalize(&self.root_dir.join(dir.as_ref()));
        if dir == self.root_dir {
            self.root = std::mem::take(&mut self.root).overlay(&config);
            return;
        }
        self.directory_configs.insert(dir, config);
    }

    pub fn directory_configs(&self) -> &BTreeMap<PathBuf, CompileConfig> {
        &self.directory_configs
    }

    /// The configuration that applies to one document: the root
    /// configuration overlaid with the per-file options of each enclosing
    /// directory configuration, outermost first.
    pub fn config_for(&self, file_path: &Path) -> CompileConfig {
        let file_path = paths::normalize(file_path);
        self.directory_configs
            .iter()
            .filter(|(dir, _)| file_path.starts_with(dir))
            .fold(self.root.clone(), |config, (_, dir_config)| {
                config.overlay(&Self::per_file_options(dir_config))
            })
    }

    pub fn import_roots(&self) -> ImportRoots {
        ImportRoots {
            fragment_roots: self.root.fragment_roots.clone(),
            root_dir: self.root_dir.clone(),
            root_dir_import_prefix: self.root.root_dir_import_prefix.clone(),
        }
    }

    /// Module roots come from every `modulePaths` entry (relative to the
    /// declaring configuration's directory) and from the module names set by
    /// directory-level configurations. The root configuration's module names
    /// are the fallback.
    pub fn module_resolver(&self) -> ModuleResolver {
        let mut resolver = ModuleResolver::new(ModuleRoot {
            declared_in: self.root_dir.clone(),
            dir: self.root_dir.clone(),
            paths: ModulePaths {
                document_node: Some(self.root.document_node_module_name().to_string()),
                global_types: Some(self.root.global_types_module_name().to_string()),
            },
        });

        let all_configs = std::iter::once((&self.root_dir, &self.root))
            .chain(self.directory_configs.iter());
        for (config_dir, config) in all_configs {
            if config_dir != &self.root_dir {
                resolver.add_root(ModuleRoot {
                    declared_in: config_dir.clone(),
                    dir: config_dir.clone(),
                    paths: ModulePaths {
                        document_node: config.typed_graphql_documentnode_module_name.clone(),
                        global_types: config.global_types_module_name.clone(),
                    },
                });
            }
            for (dir, paths) in &config.module_paths {
                resolver.add_root(ModuleRoot {
                    declared_in: config_dir.clone(),
                    dir: config_dir.join(dir),
                    paths: paths.clone(),
                });
            }
        }

        log::debug!(
            "Configured {} module root(s) below `{}`.",
            resolver.roots().len(),
            self.root_dir.display(),
        );
        resolver
    }

    pub fn naming_policy_for(&self, file_path: &Path) -> NamingPolicy {
        self.config_for(file_path).naming_policy()
    }

    pub fn root(&self) -> &CompileConfig {
        &self.root
    }

    pub fn root_dir(&self) -> &Path {
        self.root_dir.as_path()
    }

    fn per_file_options(config: &CompileConfig) -> CompileConfig {
        CompileConfig {
            custom_scalar_prefix: config.custom_scalar_prefix.clone(),
            disable_readonly_types: config.disable_readonly_types,
            output_layout: config.output_layout,
            readonly_fields: config.readonly_fields,
            scalar_names: config.scalar_names.clone(),
            show_deprecation_warnings: config.show_deprecation_warnings,
            strict_scalars: config.strict_scalars,
            use_custom_scalars: config.use_custom_scalars,
            ..CompileConfig::default()
        }
    }
}
