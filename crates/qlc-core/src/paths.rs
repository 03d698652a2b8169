use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Lexically collapse `.` and `..` components without touching the file
/// system. Leading `..` components of a relative path are kept.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized: Vec<Component<'_>> = vec![];
    for component in path.components() {
        match component {
            Component::CurDir => (),
            Component::ParentDir => match normalized.last() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                },
                Some(Component::RootDir | Component::Prefix(_)) => (),
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized.iter().collect()
}

/// A `/`-separated path from `from_dir` to `target`, always starting with
/// `./` or `../` so that it reads as a relative module specifier.
pub(crate) fn relative_module_specifier(from_dir: &Path, target: &Path) -> String {
    let from = normalize(from_dir);
    let target = normalize(target);
    let from_parts: Vec<_> = from.components().collect();
    let target_parts: Vec<_> = target.components().collect();
    let common_len = from_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec![];
    for _ in common_len..from_parts.len() {
        parts.push("..".to_string());
    }
    for part in &target_parts[common_len..] {
        parts.push(part.as_os_str().to_string_lossy().into_owned());
    }

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}
