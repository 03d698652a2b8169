use crate::operation::DocumentFile;
use crate::operation::FragmentKey;
use crate::operation::FragmentRegistry;
use crate::operation::OperationDocument;
use crate::operation::ResolutionError;
use crate::operation::fragment_registry::SpreadTarget;
use crate::paths;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

/// Where `#import` paths and fragment lookups that leave a document's own
/// directory are resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportRoots {
    /// Extra directories searched for fragments, in priority order, after
    /// same-file, imported-file and same-directory lookup all failed.
    pub fragment_roots: Vec<PathBuf>,
    pub root_dir: PathBuf,
    /// Stripped from non-relative `#import` paths before resolving them
    /// against `root_dir`.
    pub root_dir_import_prefix: Option<String>,
}

/// Builder for constructing a [`FragmentRegistry`] from every document of a
/// compile.
///
/// All documents must be added before [`build`](Self::build) is called,
/// because any document may define a fragment another one spreads.
#[derive(Debug)]
pub struct FragmentRegistryBuilder {
    failed_files: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, DocumentFile>,
    roots: ImportRoots,
}

impl FragmentRegistryBuilder {
    pub fn new(roots: ImportRoots) -> Self {
        Self {
            failed_files: BTreeSet::new(),
            files: BTreeMap::new(),
            roots,
        }
    }

    /// Add a parsed document.
    ///
    /// Returns an error if the file defines the same fragment name twice.
    /// The file is still registered with the first definition.
    pub fn add_file(
        &mut self,
        document_file: DocumentFile,
    ) -> Result<(), ResolutionError> {
        let mut seen: HashMap<&str, &OperationDocument> = HashMap::new();
        let mut duplicate = None;
        for definition in document_file.definitions.iter().filter(|d| d.kind.is_fragment()) {
            if let Some(first) = seen.get(definition.name.as_str()) {
                duplicate = Some(ResolutionError::DuplicateFragmentDefinition {
                    first_def_location: first.def_location.clone(),
                    fragment_name: definition.name.clone(),
                    second_def_location: definition.def_location.clone(),
                });
                break;
            }
            seen.insert(definition.name.as_str(), definition);
        }

        self.files.insert(document_file.file_path.clone(), document_file);
        match duplicate {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Record a document that failed to parse. Imports of it still resolve,
    /// so that importers can be reported as depending on a failed file.
    pub fn add_failed_file(&mut self, file_path: impl AsRef<Path>) {
        self.failed_files.insert(file_path.as_ref().to_path_buf());
    }

    /// Build the immutable [`FragmentRegistry`].
    ///
    /// This resolves every `#import` and every spread of every file,
    /// detects cycles among fragments, and records the problems against the
    /// file they were found in. Problems are surfaced when an operation
    /// depending on them is resolved.
    pub fn build(self) -> FragmentRegistry {
        let mut fragments = BTreeMap::new();
        let mut by_file: HashMap<&Path, Vec<FragmentKey>> = HashMap::new();
        let mut by_dir: HashMap<&Path, Vec<FragmentKey>> = HashMap::new();
        for (file_path, document_file) in &self.files {
            for definition in document_file.definitions.iter().filter(|d| d.kind.is_fragment()) {
                let key = FragmentKey {
                    file: file_path.clone(),
                    name: definition.name.clone(),
                };
                if fragments.contains_key(&key) {
                    continue;
                }
                by_file.entry(file_path.as_path()).or_default().push(key.clone());
                if let Some(dir) = file_path.parent() {
                    by_dir.entry(dir).or_default().push(key.clone());
                }
                fragments.insert(key, definition.clone());
            }
        }

        let mut file_errors: HashMap<PathBuf, Vec<ResolutionError>> = HashMap::new();
        let mut imports: HashMap<PathBuf, BTreeSet<PathBuf>> = HashMap::new();
        let mut spread_targets: HashMap<PathBuf, HashMap<String, SpreadTarget>> = HashMap::new();
        for (file_path, document_file) in &self.files {
            let mut imported_files = BTreeSet::new();
            for import in &document_file.imports {
                let import_path = self.resolve_import_path(file_path, import.path());
                if self.files.contains_key(&import_path) || self.failed_files.contains(&import_path) {
                    imported_files.insert(import_path);
                } else {
                    file_errors.entry(file_path.clone()).or_default().push(
                        ResolutionError::UnresolvedImport {
                            import_path: import.path.clone(),
                            location: import.def_location.clone(),
                        },
                    );
                }
            }

            let spread_names: BTreeSet<&str> = document_file.definitions
                .iter()
                .flat_map(|def| def.selection_set.fragment_spreads())
                .map(|spread| spread.fragment_name())
                .collect();
            let targets = spread_names
                .into_iter()
                .map(|name| {
                    let target = self.lookup_spread_target(
                        file_path,
                        &imported_files,
                        &by_file,
                        &by_dir,
                        name,
                    );
                    (name.to_string(), target)
                })
                .collect();

            spread_targets.insert(file_path.clone(), targets);
            imports.insert(file_path.clone(), imported_files);
        }

        let cycles = Self::find_cycles(&fragments, &spread_targets);
        log::debug!(
            "Built a fragment registry of {} fragments from {} documents ({} in cycles).",
            fragments.len(),
            self.files.len(),
            cycles.len(),
        );

        FragmentRegistry {
            cycles,
            file_errors,
            fragments,
            imports,
            spread_targets,
        }
    }

    fn resolve_import_path(&self, importing_file: &Path, import_path: &str) -> PathBuf {
        if import_path.starts_with('.') {
            let dir = importing_file.parent().unwrap_or(Path::new(""));
            return paths::normalize(&dir.join(import_path));
        }

        let stripped = self.roots.root_dir_import_prefix
            .as_deref()
            .and_then(|prefix| import_path.strip_prefix(prefix))
            .unwrap_or(import_path)
            .trim_start_matches('/');
        paths::normalize(&self.roots.root_dir.join(stripped))
    }

    /// Fragment lookup tiers, nearest first: the spreading file itself, the
    /// files it imports, its directory, then each configured fragment root.
    /// The first tier with any match decides.
    fn lookup_spread_target(
        &self,
        file_path: &Path,
        imported_files: &BTreeSet<PathBuf>,
        by_file: &HashMap<&Path, Vec<FragmentKey>>,
        by_dir: &HashMap<&Path, Vec<FragmentKey>>,
        fragment_name: &str,
    ) -> SpreadTarget {
        let named = |keys: Option<&Vec<FragmentKey>>| -> Vec<FragmentKey> {
            keys.into_iter()
                .flatten()
                .filter(|key| key.name == fragment_name)
                .cloned()
                .collect()
        };

        let same_file = named(by_file.get(file_path));
        let imported: Vec<FragmentKey> = imported_files
            .iter()
            .flat_map(|import| named(by_file.get(import.as_path())))
            .collect();
        let same_dir = named(file_path.parent().and_then(|dir| by_dir.get(dir)));

        let mut tiers = vec![same_file, imported, same_dir];
        for root in &self.roots.fragment_roots {
            let root = paths::normalize(&self.roots.root_dir.join(root));
            let mut under_root: Vec<FragmentKey> = by_file
                .iter()
                .filter(|(path, _)| path.starts_with(&root))
                .flat_map(|(_, keys)| keys.iter())
                .filter(|key| key.name == fragment_name)
                .cloned()
                .collect();
            under_root.sort();
            tiers.push(under_root);
        }

        for tier in tiers {
            match tier.len() {
                0 => continue,
                1 => return tier.into_iter().next().map_or(SpreadTarget::Unknown, SpreadTarget::Found),
                _ => return SpreadTarget::Ambiguous(
                    tier.into_iter().map(|key| key.file).collect(),
                ),
            }
        }
        SpreadTarget::Unknown
    }

    /// Find every fragment that takes part in a spread cycle.
    ///
    /// Uses DFS traversal with cycle normalization so that phase-shifted
    /// cycles (A→B→A and B→A→B) are reported once, with the same path.
    fn find_cycles(
        fragments: &BTreeMap<FragmentKey, OperationDocument>,
        spread_targets: &HashMap<PathBuf, HashMap<String, SpreadTarget>>,
    ) -> HashMap<FragmentKey, Vec<String>> {
        let edges: HashMap<&FragmentKey, Vec<&FragmentKey>> = fragments
            .iter()
            .map(|(key, fragment)| {
                let targets = spread_targets.get(&key.file);
                let mut out: Vec<&FragmentKey> = vec![];
                for spread in fragment.selection_set.fragment_spreads() {
                    if let Some(SpreadTarget::Found(target)) =
                        targets.and_then(|t| t.get(spread.fragment_name()))
                        && !out.contains(&target) {
                        out.push(target);
                    }
                }
                (key, out)
            })
            .collect();

        let mut cycles = HashMap::new();
        let mut seen_normalized = HashSet::new();
        for key in fragments.keys() {
            let mut path = vec![];
            let mut visiting = HashSet::new();
            Self::check_fragment_cycles(
                key,
                &edges,
                &mut path,
                &mut visiting,
                &mut seen_normalized,
                &mut cycles,
            );
        }
        cycles
    }

    fn check_fragment_cycles<'a>(
        key: &'a FragmentKey,
        edges: &HashMap<&'a FragmentKey, Vec<&'a FragmentKey>>,
        path: &mut Vec<&'a FragmentKey>,
        visiting: &mut HashSet<&'a FragmentKey>,
        seen_normalized: &mut HashSet<Vec<FragmentKey>>,
        cycles: &mut HashMap<FragmentKey, Vec<String>>,
    ) {
        if visiting.contains(key) {
            let start = path.iter().position(|k| *k == key).unwrap_or(0);
            let members: Vec<FragmentKey> = path[start..].iter().map(|k| (*k).clone()).collect();
            let normalized = normalize_cycle(&members);
            if seen_normalized.insert(normalized.clone()) {
                let mut cycle_path: Vec<String> = normalized
                    .iter()
                    .map(|k| k.name.clone())
                    .collect();
                if let Some(first) = cycle_path.first().cloned() {
                    cycle_path.push(first);
                }
                for member in normalized {
                    cycles.entry(member).or_insert_with(|| cycle_path.clone());
                }
            }
            return;
        }

        path.push(key);
        visiting.insert(key);
        if let Some(targets) = edges.get(key) {
            for target in targets {
                Self::check_fragment_cycles(
                    *target,
                    edges,
                    path,
                    visiting,
                    seen_normalized,
                    cycles,
                );
            }
        }
        path.pop();
        visiting.remove(key);
    }
}

/// Rotate a cycle so that it starts at its smallest member.
///
/// `[B, C, A]` and `[C, A, B]` both normalize to `[A, B, C]`.
fn normalize_cycle(cycle: &[FragmentKey]) -> Vec<FragmentKey> {
    let min_idx = cycle
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&cycle[min_idx..]);
    normalized.extend_from_slice(&cycle[..min_idx]);
    normalized
}
