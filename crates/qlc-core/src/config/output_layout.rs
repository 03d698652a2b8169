use std::path::Path;
use std::path::PathBuf;

/// Where the declaration file generated for a document is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputLayout {
    /// `<file>.d.ts` next to the document, e.g. `me.graphql.d.ts`.
    Colocated,

    /// `<dir>/__generated__/<DefinitionName>.ts`.
    #[default]
    GeneratedDirectory,
}
impl OutputLayout {
    pub fn output_path_for(&self, source_path: &Path, definition_name: &str) -> PathBuf {
        match self {
            Self::Colocated => {
                let mut file_name = source_path
                    .file_name()
                    .map(|name| name.to_os_string())
                    .unwrap_or_default();
                file_name.push(".d.ts");
                source_path.with_file_name(file_name)
            },
            Self::GeneratedDirectory => source_path
                .parent()
                .unwrap_or(Path::new(""))
                .join("__generated__")
                .join(format!("{definition_name}.ts")),
        }
    }
}
