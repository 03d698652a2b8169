mod declaration_writer;
mod doc_block;
mod global_types;
mod import_specifiers;
mod typescript_emitter;

pub use global_types::render_global_types;
pub use import_specifiers::ImportSpecifiers;
pub use typescript_emitter::TypeScriptEmitter;

use crate::synth::TypeShapeTree;

/// First lines of every generated declaration file.
pub const FILE_HEADER: &str =
    "/* eslint-disable */\n// This file was automatically generated and should not be edited.\n\n";

/// Render `tree` as the text of one TypeScript declaration file.
pub fn emit(tree: &TypeShapeTree, imports: &ImportSpecifiers) -> String {
    TypeScriptEmitter::new(tree, imports).render()
}

#[cfg(test)]
mod tests;
