use std::path::Path;
use std::path::PathBuf;
use walkdir::DirEntry;
use walkdir::WalkDir;

pub(crate) const CONFIG_FILE_NAME: &str = ".qlcrc.json";
const GRAPHQL_FILE_EXT: &str = "graphql";

/// The inputs found below a project root.
#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    /// `.qlcrc.json` files in directories below (not at) the root.
    pub directory_configs: Vec<PathBuf>,
    pub documents: Vec<PathBuf>,
    pub walk_errors: Vec<walkdir::Error>,
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || name == "node_modules")
}

/// Walk `root_dir` for GraphQL documents and directory configurations,
/// skipping hidden directories and `node_modules`.
pub(crate) fn discover(root_dir: &Path) -> DiscoveredFiles {
    let mut discovered = DiscoveredFiles::default();
    let walker = WalkDir::new(root_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::trace!("Error while walking `{}`: {err}", root_dir.display());
                discovered.walk_errors.push(err);
                continue;
            },
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == GRAPHQL_FILE_EXT) {
            log::trace!("Found document at {path:#?}.");
            discovered.documents.push(path.to_path_buf());
        } else if entry.depth() > 1 && entry.file_name() == CONFIG_FILE_NAME {
            log::trace!("Found directory configuration at {path:#?}.");
            discovered.directory_configs.push(path.to_path_buf());
        }
    }

    log::debug!(
        "Found {} document(s) and {} directory configuration(s) below `{}`.",
        discovered.documents.len(),
        discovered.directory_configs.len(),
        root_dir.display(),
    );
    discovered
}
