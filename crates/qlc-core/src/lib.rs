pub mod ast;
mod compiler;
pub mod config;
pub mod emit;
pub mod file_reader;
pub mod loc;
pub mod module_resolver;
mod named_ref;
pub mod operation;
mod paths;
pub mod schema;
pub mod synth;
#[cfg(test)]
mod test;
pub mod types;

pub use compiler::BatchOutput;
pub use compiler::CompileDiagnostic;
pub use compiler::CompileError;
pub use compiler::CompileWarning;
pub use compiler::Compiler;
pub use compiler::GeneratedFile;
pub use compiler::SourceFile;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
