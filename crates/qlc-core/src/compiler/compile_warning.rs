use crate::synth::SynthesisWarning;
use std::path::PathBuf;

/// A warning raised while compiling one input document.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}: {warning}", .file.display())]
pub struct CompileWarning {
    pub file: PathBuf,
    pub warning: SynthesisWarning,
}
