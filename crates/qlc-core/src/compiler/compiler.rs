use crate::BatchOutput;
use crate::CompileDiagnostic;
use crate::CompileError;
use crate::CompileWarning;
use crate::GeneratedFile;
use crate::SourceFile;
use crate::config::ConfigSet;
use crate::emit;
use crate::emit::ImportSpecifiers;
use crate::module_resolver::ModuleResolver;
use crate::module_resolver::ModuleRole;
use crate::operation::DocumentFile;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::paths;
use crate::schema::Schema;
use crate::synth;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

/// What compiling one document produced.
struct CompiledDocument {
    file: GeneratedFile,
    global_refs: BTreeSet<String>,
    warnings: Vec<CompileWarning>,
}

type DocumentResult = Result<CompiledDocument, Vec<CompileDiagnostic>>;

/// Compiles a batch of GraphQL documents against one schema.
///
/// Compilation runs in two parallel phases separated by a barrier: every
/// document is parsed and registered in the [`FragmentRegistry`] first, and
/// only then is each document resolved, synthesized and emitted. Both the
/// schema and the registry are read-only during the second phase.
pub struct Compiler<'schema> {
    config: ConfigSet,
    module_resolver: ModuleResolver,
    schema: &'schema Schema,
}
impl<'schema> Compiler<'schema> {
    pub fn new(schema: &'schema Schema, config: ConfigSet) -> Self {
        Self {
            module_resolver: config.module_resolver(),
            config,
            schema,
        }
    }

    pub fn config(&self) -> &ConfigSet {
        &self.config
    }

    pub fn compile(&self, sources: Vec<SourceFile>) -> BatchOutput {
        let sources: Vec<(PathBuf, String)> = sources
            .into_iter()
            .map(|source| (paths::normalize(&source.path), source.content))
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .collect();
        self.in_pool(|| self.compile_sorted(&sources))
    }

    /// Render the shared declaration file for the enums and input objects
    /// named in `used` (typically [`BatchOutput::global_refs`]).
    pub fn compile_global_types(&self, used: &BTreeSet<String>) -> String {
        emit::render_global_types(self.schema, used, &self.config.root().naming_policy())
    }

    fn compile_sorted(&self, sources: &[(PathBuf, String)]) -> BatchOutput {
        let fail_fast = self.config.root().fail_fast();

        let parsed: Vec<(&Path, Result<DocumentFile, CompileDiagnostic>)> = sources
            .par_iter()
            .map(|(path, content)| (path.as_path(), self.parse_document(path, content)))
            .collect();

        let mut builder = FragmentRegistryBuilder::new(self.config.import_roots());
        let mut diagnostics = vec![];
        let mut documents = vec![];
        let mut failed_files = BTreeSet::new();
        for (path, result) in parsed {
            match result {
                Ok(document_file) => match builder.add_file(document_file.clone()) {
                    Ok(()) => documents.push(document_file),
                    Err(err) => {
                        diagnostics.push(CompileDiagnostic::new(path, err));
                        failed_files.insert(path.to_path_buf());
                    },
                },
                Err(diagnostic) => {
                    builder.add_failed_file(path);
                    failed_files.insert(path.to_path_buf());
                    diagnostics.push(diagnostic);
                },
            }
        }
        log::debug!(
            "Parsed {} of {} document(s).",
            documents.len(),
            sources.len(),
        );
        if fail_fast && !diagnostics.is_empty() {
            return BatchOutput {
                diagnostics,
                ..BatchOutput::default()
            };
        }

        let registry = builder.build();
        log::debug!("Built a fragment registry of {} fragment(s).", registry.fragments().len());

        // Documents are sorted by path and rayon keeps that order, so the
        // first failure below is the same on every run.
        let results: Vec<(&Path, DocumentResult)> = documents
            .par_iter()
            .map(|document| {
                let result = self.compile_document(document, &registry, &failed_files);
                (document.file_path(), result)
            })
            .collect();
        if fail_fast
            && let Some(diagnostics) = results.iter().find_map(|(_, result)| result.as_ref().err())
        {
            return BatchOutput {
                diagnostics: diagnostics.clone(),
                ..BatchOutput::default()
            };
        }

        let output = Self::collect_results(results, &registry, &failed_files, diagnostics);
        log::debug!(
            "Compiled {} file(s) with {} failure(s).",
            output.files.len(),
            output.diagnostics.len(),
        );
        output
    }

    /// Assemble the batch output. A document depending on a document that
    /// failed is reported as a dependency failure instead of with its own
    /// (derived) errors.
    fn collect_results(
        results: Vec<(&Path, DocumentResult)>,
        registry: &FragmentRegistry,
        failed_before_compile: &BTreeSet<PathBuf>,
        mut diagnostics: Vec<CompileDiagnostic>,
    ) -> BatchOutput {
        let failed_during_compile: BTreeSet<PathBuf> = results
            .iter()
            .filter(|(_, result)| result.as_ref().is_err_and(|diags| {
                diags.iter().any(|diag| {
                    !matches!(diag.error, CompileError::DependencyFailed { .. })
                })
            }))
            .map(|(path, _)| path.to_path_buf())
            .collect();

        let mut output = BatchOutput::default();
        for (path, result) in results {
            let failed_dependency = registry
                .dependencies_of(path)
                .into_iter()
                .find(|dep| {
                    failed_during_compile.contains(dep) || failed_before_compile.contains(dep)
                });
            match (result, failed_dependency) {
                (_, Some(dependency)) => {
                    diagnostics.push(CompileDiagnostic::new(
                        path,
                        CompileError::DependencyFailed { dependency },
                    ));
                },
                (Ok(compiled), None) => {
                    output.global_refs.extend(compiled.global_refs);
                    output.warnings.extend(compiled.warnings);
                    output.files.push(compiled.file);
                },
                (Err(diags), None) => diagnostics.extend(diags),
            }
        }

        diagnostics.sort_by(|a, b| a.file.cmp(&b.file));
        output.diagnostics = diagnostics;
        output
    }

    fn compile_document(
        &self,
        document_file: &DocumentFile,
        registry: &FragmentRegistry,
        failed_files: &BTreeSet<PathBuf>,
    ) -> DocumentResult {
        let path = document_file.file_path();
        if let Some(dependency) = registry
            .dependencies_of(path)
            .into_iter()
            .find(|dep| failed_files.contains(dep)) {
            return Err(vec![CompileDiagnostic::new(
                path,
                CompileError::DependencyFailed { dependency },
            )]);
        }

        let config = self.config.config_for(path);
        let resolved = registry.resolve(document_file.primary()).map_err(|errs| {
            errs.into_iter()
                .map(|err| CompileDiagnostic::new(path, err))
                .collect::<Vec<_>>()
        })?;

        let tree = synth::synthesize(
            &resolved,
            self.schema,
            &config.naming_policy(),
            config.show_deprecation_warnings(),
        ).map_err(|errs| {
            errs.into_iter()
                .map(|err| CompileDiagnostic::new(path, err))
                .collect::<Vec<_>>()
        })?;

        let output_path = config.output_layout().output_path_for(path, tree.name());
        let imports = self.import_specifiers(&output_path).map_err(|errs| {
            errs.into_iter()
                .map(|err| CompileDiagnostic::new(path, err))
                .collect::<Vec<_>>()
        })?;
        let contents = emit::emit(&tree, &imports);
        log::trace!("Emitted `{}` for `{}`.", output_path.display(), path.display());

        Ok(CompiledDocument {
            file: GeneratedFile {
                contents,
                path: output_path,
                source_path: path.to_path_buf(),
            },
            global_refs: tree.global_refs().clone(),
            warnings: tree
                .warnings()
                .iter()
                .map(|warning| CompileWarning {
                    file: path.to_path_buf(),
                    warning: warning.clone(),
                })
                .collect(),
        })
    }

    fn import_specifiers(
        &self,
        output_path: &Path,
    ) -> Result<ImportSpecifiers, Vec<CompileError>> {
        let document_node = self.module_resolver.specifier_for(output_path, ModuleRole::DocumentNode);
        let global_types = self.module_resolver.specifier_for(output_path, ModuleRole::GlobalTypes);
        match (document_node, global_types) {
            (Ok(document_node), Ok(global_types)) => Ok(ImportSpecifiers {
                document_node,
                global_types,
            }),
            (document_node, global_types) => Err(
                [document_node.err(), global_types.err()]
                    .into_iter()
                    .flatten()
                    .map(CompileError::from)
                    .collect(),
            ),
        }
    }

    /// Run `f` on a pool sized by `numThreads`, or on rayon's global pool
    /// when no size is configured.
    fn in_pool<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        let Some(num_threads) = self.config.root().num_threads else {
            return f();
        };
        match rayon::ThreadPoolBuilder::new().num_threads(num_threads).build() {
            Ok(pool) => pool.install(f),
            Err(err) => {
                log::warn!(
                    "Could not start {num_threads} compile thread(s) ({err}); using the global \
                    pool.",
                );
                f()
            },
        }
    }

    fn parse_document(&self, path: &Path, content: &str) -> Result<DocumentFile, CompileDiagnostic> {
        let single_definition_per_file = self.config.config_for(path).single_definition_per_file();
        DocumentFile::parse(content, path, single_definition_per_file)
            .map_err(|err| CompileDiagnostic::new(path, err))
    }
}
