use std::fs;
use std::path::Path;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = ".qlcrc.json";
const EXPECTED_ERRORS_FILE_NAME: &str = "expected_errors.txt";
const EXPECTED_SUFFIX: &str = ".expected.ts";

/// One fixture directory.
#[derive(Clone, Debug)]
pub(super) struct SnapshotTestCase {
    pub config_path: Option<PathBuf>,
    pub dir: PathBuf,
    pub document_paths: Vec<PathBuf>,
    pub expected_errors: Vec<String>,
    /// Generated path to the `.expected.ts` file holding its contents.
    pub expected_outputs: Vec<(PathBuf, PathBuf)>,
    pub name: String,
}
impl SnapshotTestCase {
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return vec![];
        };
        let mut cases: Vec<Self> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    return None;
                }
                Some(Self::load(path))
            })
            .collect();
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    fn load(dir: PathBuf) -> Self {
        let mut files = vec![];
        collect_files(&dir, &mut files);
        files.sort();

        let document_paths = files
            .iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "graphql"))
            .cloned()
            .collect();
        let expected_outputs = files
            .iter()
            .filter_map(|path| {
                let file_name = path.file_name()?.to_str()?;
                let stem = file_name.strip_suffix(EXPECTED_SUFFIX)?;
                Some((path.with_file_name(format!("{stem}.ts")), path.clone()))
            })
            .collect();
        let expected_errors = fs::read_to_string(dir.join(EXPECTED_ERRORS_FILE_NAME))
            .map(|content| {
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let config_path = Some(dir.join(CONFIG_FILE_NAME)).filter(|path| path.is_file());

        Self {
            config_path,
            document_paths,
            expected_errors,
            expected_outputs,
            name: dir
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
            dir,
        }
    }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, files);
        } else {
            files.push(path);
        }
    }
}
