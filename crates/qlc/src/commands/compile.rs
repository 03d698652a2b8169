use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::discovery;
use crate::output_utils;
use anyhow::Context;
use qlc_core::BatchOutput;
use qlc_core::Compiler;
use qlc_core::SourceFile;
use qlc_core::config::CompileConfig;
use qlc_core::config::ConfigSet;
use qlc_core::file_reader;
use qlc_core::schema::Schema;
use qlc_core::schema::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_SCHEMA_FILE_NAME: &str = "schema.json";

#[derive(Clone, Debug, Default, clap::Args)]
pub(crate) struct CompileCmd {
    #[arg(
        help="Path to the configuration file. Defaults to `.qlcrc.json` in \
             ROOT_DIR.",
        long,
        short='c',
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Prefix for the names of custom scalars without an explicit \
             mapping. Implies --use-custom-scalars.",
        long,
    )]
    custom_scalar_prefix: Option<String>,

    #[arg(help="Omit the `readonly` marker on generated fields.", long)]
    disable_readonly_types: bool,

    #[arg(
        help="Also write a declaration file for every enum and input object \
             the documents use.",
        long,
        value_name="PATH",
    )]
    emit_global_types: Option<PathBuf>,

    #[arg(help="Stop at the first document that fails to compile.", long)]
    fail_fast: bool,

    #[arg(help="Module specifier for enum and input object imports.", long)]
    global_types_module_name: Option<String>,

    #[arg(help="Number of threads to compile with.", long)]
    num_threads: Option<usize>,

    #[arg(
        help="Directory to search for GraphQL documents.",
        name="ROOT_DIR",
    )]
    root_dir: Option<PathBuf>,

    #[arg(
        help="Prefix marking `#import` paths as relative to ROOT_DIR.",
        long,
    )]
    root_dir_import_prefix: Option<String>,

    #[arg(
        help="Path to the schema introspection JSON. Defaults to the config's \
             `schemaFile`, then `schema.json` in ROOT_DIR.",
        long,
        short='s',
    )]
    schema: Option<PathBuf>,

    #[arg(help="Warn about every selected deprecated field.", long)]
    show_deprecation_warnings: bool,

    #[arg(help="Reject custom scalars that have no explicit mapping.", long)]
    strict_scalars: bool,

    #[arg(
        help="Module specifier for the typed document node imports.",
        long,
    )]
    typed_graphql_documentnode_module_name: Option<String>,

    #[arg(
        help="Name unmapped custom scalars after the schema instead of `any`.",
        long,
    )]
    use_custom_scalars: bool,
}
impl CompileCmd {
    /// The configuration set by flags. Boolean flags only override the
    /// config file when given.
    fn flag_overrides(&self) -> CompileConfig {
        let set = |flag: bool| flag.then_some(true);
        CompileConfig {
            custom_scalar_prefix: self.custom_scalar_prefix.clone(),
            disable_readonly_types: set(self.disable_readonly_types),
            fail_fast: set(self.fail_fast),
            global_types_module_name: self.global_types_module_name.clone(),
            num_threads: self.num_threads,
            root_dir_import_prefix: self.root_dir_import_prefix.clone(),
            schema_file: self.schema.clone(),
            show_deprecation_warnings: set(self.show_deprecation_warnings),
            strict_scalars: set(self.strict_scalars),
            typed_graphql_documentnode_module_name:
                self.typed_graphql_documentnode_module_name.clone(),
            use_custom_scalars: set(self.use_custom_scalars),
            ..CompileConfig::default()
        }
    }

    fn load_root_config(&self, root_dir: &Path) -> anyhow::Result<CompileConfig> {
        let config = match &self.config {
            Some(config_path) => CompileConfig::from_file(config_path)?,
            None => {
                let default_path = root_dir.join(discovery::CONFIG_FILE_NAME);
                if default_path.is_file() {
                    CompileConfig::from_file(&default_path)?
                } else {
                    log::debug!("No config file at `{}`; using defaults.", default_path.display());
                    CompileConfig::default()
                }
            },
        };
        Ok(config.overlay(&self.flag_overrides()))
    }

    fn load_schema(&self, root_dir: &Path, config: &CompileConfig) -> anyhow::Result<Schema> {
        let schema_path = config.schema_file
            .clone()
            .unwrap_or_else(|| root_dir.join(DEFAULT_SCHEMA_FILE_NAME));
        let schema = SchemaBuilder::from_file(&schema_path)
            .and_then(|builder| builder.build())
            .map_err(|errs| {
                let messages = errs
                    .iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                anyhow::anyhow!("Invalid schema `{}`:\n{messages}", schema_path.display())
            })?;
        log::debug!(
            "Loaded schema `{}` with {} type(s).",
            schema_path.display(),
            schema.defined_types().len(),
        );
        Ok(schema)
    }

    /// Load the schema, every configuration and every document. Anything
    /// failing here aborts the run.
    fn load_inputs(&self) -> anyhow::Result<(Schema, ConfigSet, Vec<SourceFile>)> {
        let root_dir = self.root_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let root_dir = std::fs::canonicalize(&root_dir)
            .with_context(|| format!("Unable to open ROOT_DIR `{}`", root_dir.display()))?;

        let root_config = self.load_root_config(&root_dir)?;
        let schema = self.load_schema(&root_dir, &root_config)?;

        let discovered = discovery::discover(&root_dir);
        if let Some(err) = discovered.walk_errors.into_iter().next() {
            return Err(err).context("Unable to search ROOT_DIR for documents");
        }

        let mut config_set = ConfigSet::new(&root_dir, root_config);
        for config_path in &discovered.directory_configs {
            let dir_config = CompileConfig::from_file(config_path)?;
            if let Some(dir) = config_path.parent() {
                config_set.add_directory_config(dir, dir_config);
            }
        }

        let sources = discovered.documents
            .iter()
            .map(|path| {
                file_reader::read_content(path).map(|content| SourceFile::new(path.clone(), content))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((schema, config_set, sources))
    }

    fn write_outputs(
        &self,
        output: &BatchOutput,
        global_types: Option<&str>,
    ) -> anyhow::Result<()> {
        for file in output.files() {
            if let Some(dir) = file.path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Unable to create `{}`", dir.display()))?;
            }
            std::fs::write(&file.path, &file.contents)
                .with_context(|| format!("Unable to write `{}`", file.path.display()))?;
            log::trace!("Wrote `{}`.", file.path.display());
        }

        if let (Some(path), Some(contents)) = (&self.emit_global_types, global_types) {
            std::fs::write(path, contents)
                .with_context(|| format!("Unable to write `{}`", path.display()))?;
            log::debug!("Wrote global types to `{}`.", path.display());
        }
        Ok(())
    }
}

#[inherent::inherent]
impl RunnableCommand for CompileCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (schema, config_set, sources) = match self.load_inputs() {
            Ok(inputs) => inputs,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        let num_sources = sources.len();

        let emit_global_types = self.emit_global_types.is_some();
        let compiled = tokio::task::spawn_blocking(move || {
            let compiler = Compiler::new(&schema, config_set);
            let output = compiler.compile(sources);
            let global_types = emit_global_types
                .then(|| compiler.compile_global_types(output.global_refs()));
            (output, global_types)
        }).await;
        let (output, global_types) = match compiled {
            Ok(compiled) => compiled,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Compilation stopped unexpectedly: {err}",
                output_utils::RED_X,
            )),
        };

        if let Err(err) = self.write_outputs(&output, global_types.as_deref()) {
            return CommandResult::stderr(format_args!("{} {err:#}", output_utils::RED_X));
        }

        let mut stderr_lines = vec![];
        for warning in output.warnings() {
            stderr_lines.push(format!("{} {warning}", output_utils::YELLOW_WARNING));
        }
        for diagnostic in output.diagnostics() {
            stderr_lines.push(format!("{} {diagnostic}", output_utils::RED_X));
        }

        let (summary, exit_code) = if output.is_success() {
            (
                format!(
                    "{} Compiled {num_sources} document(s) into {} file(s).",
                    output_utils::GREEN_CHECK,
                    output.files().len(),
                ),
                ExitCode::SUCCESS,
            )
        } else {
            (
                format!(
                    "{} {} of {num_sources} document(s) failed to compile; wrote {} file(s).",
                    output_utils::RED_X,
                    output.diagnostics()
                        .iter()
                        .map(|diagnostic| &diagnostic.file)
                        .collect::<std::collections::BTreeSet<_>>()
                        .len(),
                    output.files().len(),
                ),
                ExitCode::FAILURE,
            )
        };
        CommandResult::stdout(format_args!("{summary}"))
            .with_stderr(stderr_lines.join("\n"), exit_code)
    }
}
