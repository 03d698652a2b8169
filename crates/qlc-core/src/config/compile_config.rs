use crate::config::ConfigError;
use crate::config::CustomScalarNaming;
use crate::config::ModulePaths;
use crate::config::NamingPolicy;
use crate::config::OutputLayout;
use crate::file_reader;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

pub const DEFAULT_DOCUMENT_NODE_MODULE_NAME: &str = "@notarize/qlc-cli/typed-documentnode";
pub const DEFAULT_GLOBAL_TYPES_MODULE_NAME: &str = "graphql-globals";

/// Options read from a `.qlcrc.json` file (or assembled from command line
/// flags).
///
/// Every option is optional so that configurations can be layered: a
/// directory's configuration only overrides what it sets. The accessor
/// methods apply the built-in defaults.
///
/// A configuration in a subdirectory of the project only contributes the
/// per-file options: scalar naming, readonly marking, output layout,
/// deprecation warnings and module paths.
/// Batch-wide options (`failFast`, `fragmentRoots`, `numThreads`, ...) are
/// only read from the project root.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileConfig {
    #[serde(alias = "scalarPrefix")]
    pub custom_scalar_prefix: Option<String>,
    pub disable_readonly_types: Option<bool>,
    pub fail_fast: Option<bool>,
    pub fragment_roots: Vec<PathBuf>,
    pub global_types_module_name: Option<String>,
    /// Directory (relative to the directory of the declaring config) to the
    /// module specifiers used by files generated below it.
    pub module_paths: BTreeMap<PathBuf, ModulePaths>,
    pub num_threads: Option<usize>,
    pub output_layout: Option<OutputLayout>,
    pub readonly_fields: Option<bool>,
    pub root_dir_import_prefix: Option<String>,
    #[serde(alias = "scalarName")]
    pub scalar_names: BTreeMap<String, String>,
    pub schema_file: Option<PathBuf>,
    pub show_deprecation_warnings: Option<bool>,
    pub single_definition_per_file: Option<bool>,
    pub strict_scalars: Option<bool>,
    pub typed_graphql_documentnode_module_name: Option<String>,
    pub use_custom_scalars: Option<bool>,
}
impl CompileConfig {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| ConfigError::ReadError(Box::new(err)))?;
        Self::from_json_str(content.as_str(), file_path)
    }

    pub fn from_json_str(json: &str, file_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json).map_err(|err| {
            ConfigError::InvalidJson {
                err,
                file: file_path.as_ref().to_path_buf(),
            }
        })?;

        if let Some(schema_file) = config.schema_file.take() {
            config.schema_file = Some(
                if schema_file.is_absolute() {
                    schema_file
                } else {
                    file_path.as_ref()
                        .parent()
                        .unwrap_or(Path::new(""))
                        .join(schema_file)
                }
            );
        }

        Ok(config)
    }

    /// Layer `overrides` on top of `self`. Anything `overrides` sets wins;
    /// maps are merged key by key.
    pub fn overlay(mut self, overrides: &CompileConfig) -> Self {
        fn pick<T: Clone>(base: &mut Option<T>, over: &Option<T>) {
            if over.is_some() {
                base.clone_from(over);
            }
        }

        pick(&mut self.custom_scalar_prefix, &overrides.custom_scalar_prefix);
        pick(&mut self.fail_fast, &overrides.fail_fast);
        pick(&mut self.global_types_module_name, &overrides.global_types_module_name);
        pick(&mut self.num_threads, &overrides.num_threads);
        pick(&mut self.output_layout, &overrides.output_layout);
        pick(&mut self.root_dir_import_prefix, &overrides.root_dir_import_prefix);
        pick(&mut self.schema_file, &overrides.schema_file);
        pick(&mut self.show_deprecation_warnings, &overrides.show_deprecation_warnings);
        pick(&mut self.single_definition_per_file, &overrides.single_definition_per_file);
        pick(&mut self.strict_scalars, &overrides.strict_scalars);
        pick(
            &mut self.typed_graphql_documentnode_module_name,
            &overrides.typed_graphql_documentnode_module_name,
        );
        pick(&mut self.use_custom_scalars, &overrides.use_custom_scalars);

        // Either readonly option in `overrides` replaces both of ours.
        if overrides.readonly_fields.is_some() || overrides.disable_readonly_types.is_some() {
            self.readonly_fields = Some(overrides.readonly_fields());
            self.disable_readonly_types = None;
        }
        if !overrides.fragment_roots.is_empty() {
            self.fragment_roots.clone_from(&overrides.fragment_roots);
        }
        for (dir, paths) in &overrides.module_paths {
            self.module_paths.insert(dir.clone(), paths.clone());
        }
        for (scalar, target) in &overrides.scalar_names {
            self.scalar_names.insert(scalar.clone(), target.clone());
        }
        self
    }

    pub fn document_node_module_name(&self) -> &str {
        self.typed_graphql_documentnode_module_name
            .as_deref()
            .unwrap_or(DEFAULT_DOCUMENT_NODE_MODULE_NAME)
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast.unwrap_or(false)
    }

    pub fn global_types_module_name(&self) -> &str {
        self.global_types_module_name
            .as_deref()
            .unwrap_or(DEFAULT_GLOBAL_TYPES_MODULE_NAME)
    }

    pub fn naming_policy(&self) -> NamingPolicy {
        let custom_scalars = match (&self.custom_scalar_prefix, self.use_custom_scalars) {
            (Some(prefix), _) => CustomScalarNaming::Prefixed(prefix.clone()),
            (None, Some(true)) => CustomScalarNaming::SchemaName,
            (None, _) => CustomScalarNaming::Untyped,
        };
        NamingPolicy {
            custom_scalars,
            readonly_fields: self.readonly_fields(),
            scalar_names: self.scalar_names.clone(),
            strict_scalars: self.strict_scalars.unwrap_or(false),
        }
    }

    pub fn output_layout(&self) -> OutputLayout {
        self.output_layout.unwrap_or_default()
    }

    /// `disableReadonlyTypes` wins over `readonlyFields` when both are set
    /// in the same file.
    pub fn readonly_fields(&self) -> bool {
        match (self.disable_readonly_types, self.readonly_fields) {
            (Some(true), _) => false,
            (_, Some(readonly)) => readonly,
            _ => true,
        }
    }

    pub fn show_deprecation_warnings(&self) -> bool {
        self.show_deprecation_warnings.unwrap_or(false)
    }

    pub fn single_definition_per_file(&self) -> bool {
        self.single_definition_per_file.unwrap_or(true)
    }
}
