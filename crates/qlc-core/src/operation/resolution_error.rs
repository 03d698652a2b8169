use crate::loc;
use crate::module_resolver::ModuleRole;
use std::path::PathBuf;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("`{}`", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolutionError {
    #[error(
        "The fragment `{fragment_name}` spread at {location} is defined in more than one \
        equally-near file: {}",
        display_paths(.candidates),
    )]
    AmbiguousFragment {
        candidates: Vec<PathBuf>,
        fragment_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "More than one configured module root claims `{}` for the {role} import: {}",
        .file.display(),
        display_paths(.roots),
    )]
    AmbiguousModuleRoot {
        file: PathBuf,
        role: ModuleRole,
        roots: Vec<PathBuf>,
    },

    #[error("Fragment cycle detected at {location}: {}", .cycle.join(" → "))]
    CyclicFragment {
        cycle: Vec<String>,
        location: loc::FilePosition,
    },

    #[error(
        "The fragment `{fragment_name}` is defined twice (at {first_def_location} and \
        {second_def_location})",
    )]
    DuplicateFragmentDefinition {
        first_def_location: loc::FilePosition,
        fragment_name: String,
        second_def_location: loc::FilePosition,
    },

    #[error("The import `{import_path}` at {location} does not name a document in this compile")]
    UnresolvedImport {
        import_path: String,
        location: loc::FilePosition,
    },

    #[error("Unknown fragment `{fragment_name}` spread at {location}")]
    UnknownFragment {
        fragment_name: String,
        location: loc::FilePosition,
        referencing_file: PathBuf,
    },
}
