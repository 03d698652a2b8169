use crate::operation::ParseError;
use crate::operation::ResolutionError;
use crate::synth::SynthesisError;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("Depends on `{}`, which failed to compile", .dependency.display())]
    DependencyFailed {
        dependency: PathBuf,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}
