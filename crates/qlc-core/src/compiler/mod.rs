mod batch_output;
mod compile_diagnostic;
mod compile_error;
mod compile_warning;
mod compiler;
mod generated_file;
mod source_file;

pub use batch_output::BatchOutput;
pub use compile_diagnostic::CompileDiagnostic;
pub use compile_error::CompileError;
pub use compile_warning::CompileWarning;
pub use compiler::Compiler;
pub use generated_file::GeneratedFile;
pub use source_file::SourceFile;

#[cfg(test)]
mod tests;
