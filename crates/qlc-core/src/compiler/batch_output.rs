use crate::CompileDiagnostic;
use crate::CompileWarning;
use crate::GeneratedFile;
use std::collections::BTreeSet;

/// Everything a batch compile produced: the generated files of the
/// documents that compiled, the failures of those that did not, and the
/// warnings of both.
///
/// Under fail-fast compilation a failing batch carries no files.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOutput {
    pub(crate) diagnostics: Vec<CompileDiagnostic>,
    pub(crate) files: Vec<GeneratedFile>,
    pub(crate) global_refs: BTreeSet<String>,
    pub(crate) warnings: Vec<CompileWarning>,
}
impl BatchOutput {
    /// Failures, ordered by file path.
    pub fn diagnostics(&self) -> &[CompileDiagnostic] {
        &self.diagnostics
    }

    /// Generated files, ordered by source path.
    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    /// Every enum and input object referenced by a successfully compiled
    /// document.
    pub fn global_refs(&self) -> &BTreeSet<String> {
        &self.global_refs
    }

    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }
}
