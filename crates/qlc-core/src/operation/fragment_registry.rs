use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::OperationDocument;
use crate::operation::ResolutionError;
use crate::operation::ResolvedOperation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

/// Identifies a fragment definition. Fragment names are only unique per
/// file, so the defining file is part of the key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentKey {
    pub file: PathBuf,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SpreadTarget {
    Ambiguous(Vec<PathBuf>),
    Found(FragmentKey),
    Unknown,
}

/// Every fragment known to a compile, plus what each spread in each file
/// resolves to.
///
/// The registry is immutable once built and is shared by all workers that
/// resolve operations.
#[derive(Debug)]
pub struct FragmentRegistry {
    pub(super) cycles: HashMap<FragmentKey, Vec<String>>,
    pub(super) file_errors: HashMap<PathBuf, Vec<ResolutionError>>,
    pub(super) fragments: BTreeMap<FragmentKey, OperationDocument>,
    pub(super) imports: HashMap<PathBuf, BTreeSet<PathBuf>>,
    pub(super) spread_targets: HashMap<PathBuf, HashMap<String, SpreadTarget>>,
}
impl FragmentRegistry {
    /// Every file `file_path` depends on, directly or through other files:
    /// the files it imports and the files defining fragments it spreads.
    pub fn dependencies_of(&self, file_path: &Path) -> BTreeSet<PathBuf> {
        let mut deps = BTreeSet::new();
        let mut pending = vec![file_path.to_path_buf()];
        while let Some(current) = pending.pop() {
            for dep in self.direct_dependencies_of(current.as_path()) {
                if dep != file_path && deps.insert(dep.clone()) {
                    pending.push(dep);
                }
            }
        }
        deps
    }

    fn direct_dependencies_of(&self, file_path: &Path) -> BTreeSet<PathBuf> {
        let mut deps = self.imports.get(file_path).cloned().unwrap_or_default();
        if let Some(targets) = self.spread_targets.get(file_path) {
            for target in targets.values() {
                if let SpreadTarget::Found(key) = target
                    && key.file != file_path {
                    deps.insert(key.file.clone());
                }
            }
        }
        deps
    }

    pub fn fragments(&self) -> &BTreeMap<FragmentKey, OperationDocument> {
        &self.fragments
    }

    pub fn get(&self, key: &FragmentKey) -> Option<&OperationDocument> {
        self.fragments.get(key)
    }

    /// Which fragment a spread of `fragment_name` written in `file_path`
    /// refers to, if exactly one does.
    pub fn lookup(&self, file_path: &Path, fragment_name: &str) -> Option<&FragmentKey> {
        match self.spread_targets.get(file_path)?.get(fragment_name)? {
            SpreadTarget::Found(key) => Some(key),
            SpreadTarget::Ambiguous(_) | SpreadTarget::Unknown => None,
        }
    }

    /// Inline every fragment spread reachable from `document`.
    ///
    /// All problems found along the way are returned together.
    pub fn resolve(
        &self,
        document: &OperationDocument,
    ) -> Result<ResolvedOperation, Vec<ResolutionError>> {
        let mut errors = self.file_errors
            .get(document.file_path())
            .cloned()
            .unwrap_or_default();

        let mut stack = vec![];
        let selection_set = self.inline_selection_set(
            &document.selection_set,
            document.file_path(),
            &mut stack,
            &mut errors,
        );

        if !errors.is_empty() {
            let mut deduped: Vec<ResolutionError> = vec![];
            for err in errors {
                if !deduped.contains(&err) {
                    deduped.push(err);
                }
            }
            return Err(deduped);
        }

        let mut resolved = document.clone();
        resolved.selection_set = selection_set;
        Ok(ResolvedOperation { document: resolved })
    }

    fn inline_selection_set(
        &self,
        selection_set: &SelectionSet,
        file_path: &Path,
        stack: &mut Vec<FragmentKey>,
        errors: &mut Vec<ResolutionError>,
    ) -> SelectionSet {
        let mut selections = Vec::with_capacity(selection_set.selections.len());
        for selection in &selection_set.selections {
            match selection {
                Selection::Field(field) => {
                    selections.push(Selection::Field(FieldSelection {
                        selection_set: field.selection_set.as_ref().map(|nested_set| {
                            self.inline_selection_set(nested_set, file_path, stack, errors)
                        }),
                        ..field.clone()
                    }));
                },

                Selection::InlineFragment(inline) => {
                    selections.push(Selection::InlineFragment(InlineFragment {
                        selection_set: self.inline_selection_set(
                            &inline.selection_set,
                            file_path,
                            stack,
                            errors,
                        ),
                        ..inline.clone()
                    }));
                },

                Selection::FragmentSpread(spread) => {
                    let location = spread.def_location();
                    let target = self.spread_targets
                        .get(file_path)
                        .and_then(|targets| targets.get(spread.fragment_name()));
                    let key = match target {
                        Some(SpreadTarget::Found(key)) => key,
                        Some(SpreadTarget::Ambiguous(candidates)) => {
                            errors.push(ResolutionError::AmbiguousFragment {
                                candidates: candidates.clone(),
                                fragment_name: spread.fragment_name().to_string(),
                                location: location.clone(),
                            });
                            continue;
                        },
                        Some(SpreadTarget::Unknown) | None => {
                            errors.push(ResolutionError::UnknownFragment {
                                fragment_name: spread.fragment_name().to_string(),
                                location: location.clone(),
                                referencing_file: file_path.to_path_buf(),
                            });
                            continue;
                        },
                    };

                    if let Some(cycle) = self.cycles.get(key) {
                        errors.push(Self::cycle_error(cycle.clone(), location));
                        continue;
                    }
                    if stack.contains(key) {
                        let mut cycle: Vec<String> = stack
                            .iter()
                            .map(|key| key.name.clone())
                            .collect();
                        cycle.push(key.name.clone());
                        errors.push(Self::cycle_error(cycle, location));
                        continue;
                    }

                    let Some(fragment) = self.fragments.get(key) else {
                        continue;
                    };
                    stack.push(key.clone());
                    let inlined_set = self.inline_selection_set(
                        &fragment.selection_set,
                        key.file.as_path(),
                        stack,
                        errors,
                    );
                    stack.pop();

                    selections.push(Selection::InlineFragment(InlineFragment {
                        def_location: location.clone(),
                        origin_fragment: Some(fragment.name.clone()),
                        selection_set: inlined_set,
                        type_condition: fragment.type_condition.clone(),
                    }));
                },
            }
        }

        SelectionSet { selections }
    }

    fn cycle_error(cycle: Vec<String>, location: &loc::FilePosition) -> ResolutionError {
        ResolutionError::CyclicFragment {
            cycle,
            location: location.clone(),
        }
    }
}
