use crate::config::ModulePaths;
use crate::operation::ResolutionError;
use crate::paths;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

/// The two kinds of module a generated declaration file imports from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleRole {
    /// Exports the typed document handles (`QueryDocumentNode`, ...).
    DocumentNode,

    /// Exports the schema's enums and input object types.
    GlobalTypes,
}
impl std::fmt::Display for ModuleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DocumentNode => "document node",
            Self::GlobalTypes => "global types",
        })
    }
}

/// A directory whose generated files import from configured modules.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleRoot {
    /// Directory of the configuration that declared this root.
    pub declared_in: PathBuf,
    pub dir: PathBuf,
    pub paths: ModulePaths,
}
impl ModuleRoot {
    fn specifier(&self, role: ModuleRole) -> Option<&str> {
        match role {
            ModuleRole::DocumentNode => self.paths.document_node.as_deref(),
            ModuleRole::GlobalTypes => self.paths.global_types.as_deref(),
        }
    }
}

/// Picks the import specifier a generated file uses for each [`ModuleRole`].
///
/// The deepest root containing the generated file that configures the role
/// decides. Specifiers starting with `.` name a path relative to the root's
/// directory and are rewritten relative to the generated file; any other
/// specifier is used as written.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleResolver {
    fallback: ModuleRoot,
    roots: Vec<ModuleRoot>,
}
impl ModuleResolver {
    /// `fallback` applies wherever no added root configures a role, so it
    /// should configure both.
    pub fn new(fallback: ModuleRoot) -> Self {
        Self {
            fallback: ModuleRoot {
                dir: paths::normalize(&fallback.dir),
                ..fallback
            },
            roots: vec![],
        }
    }

    pub fn add_root(&mut self, root: ModuleRoot) {
        if root.paths.is_empty() {
            return;
        }
        self.roots.push(ModuleRoot {
            dir: paths::normalize(&root.dir),
            ..root
        });
    }

    pub fn roots(&self) -> &[ModuleRoot] {
        &self.roots
    }

    pub fn specifier_for(
        &self,
        output_path: &Path,
        role: ModuleRole,
    ) -> Result<String, ResolutionError> {
        let output_path = paths::normalize(output_path);
        let output_dir = output_path.parent().unwrap_or(Path::new(""));

        let claiming: Vec<&ModuleRoot> = self.roots
            .iter()
            .filter(|root| output_path.starts_with(&root.dir) && root.specifier(role).is_some())
            .collect();
        let deepest = claiming
            .iter()
            .map(|root| root.dir.components().count())
            .max();
        let nearest: Vec<&ModuleRoot> = match deepest {
            Some(depth) => claiming
                .into_iter()
                .filter(|root| root.dir.components().count() == depth)
                .collect(),
            None => vec![&self.fallback],
        };

        let specifiers: BTreeSet<&str> = nearest
            .iter()
            .filter_map(|root| root.specifier(role))
            .collect();

        match (specifiers.len(), nearest.first()) {
            (1, Some(root)) => {
                let specifier = specifiers.first().copied().unwrap_or_default();
                Ok(Self::render_specifier(root, specifier, output_dir))
            },
            (0, _) | (_, None) => Ok(String::new()),
            _ => Err(ResolutionError::AmbiguousModuleRoot {
                file: output_path.clone(),
                role,
                roots: nearest.iter().map(|root| root.declared_in.clone()).collect(),
            }),
        }
    }

    fn render_specifier(root: &ModuleRoot, specifier: &str, output_dir: &Path) -> String {
        if specifier.starts_with('.') {
            paths::relative_module_specifier(output_dir, &root.dir.join(specifier))
        } else {
            specifier.to_string()
        }
    }
}
