use crate::ast;
use crate::loc;
use crate::operation::OperationDocument;
use crate::operation::OperationKind;
use crate::operation::ParseError;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ParseError>;

/// An `#import "<path>"` comment line naming a file whose fragments this
/// document may spread.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentImport {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) path: String,
}
impl DocumentImport {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// `./x.graphql` and `../x.graphql` resolve against the importing file's
    /// directory. Anything else resolves against the project root.
    pub fn is_relative(&self) -> bool {
        self.path.starts_with('.')
    }
}

/// Every definition parsed out of one document file.
///
/// The first definition is the file's primary definition: its operation if
/// it has one, otherwise its first fragment. Any other definitions are
/// fragments local to the file.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentFile {
    pub(crate) definitions: Vec<OperationDocument>,
    pub(crate) file_path: PathBuf,
    pub(crate) imports: Vec<DocumentImport>,
}
impl DocumentFile {
    pub fn parse(
        source_text: &str,
        file_path: &Path,
        single_definition_per_file: bool,
    ) -> Result<Self> {
        let ast_doc = ast::operation::parse(source_text)
            .map_err(|err| {
                let message = err.to_string();
                ParseError::Syntax {
                    file: file_path.to_path_buf(),
                    location: syntax_error_position(file_path, message.as_str()),
                    message,
                }
            })?;

        let mut definitions = ast_doc.definitions
            .iter()
            .map(|ast_def| Self::definition_from_ast(file_path, ast_def))
            .collect::<Result<Vec<_>>>()?;

        if definitions.is_empty() {
            return Err(ParseError::EmptyDocument {
                file: file_path.to_path_buf(),
            });
        }

        let num_operations = definitions
            .iter()
            .filter(|def| !def.kind.is_fragment())
            .count();
        if num_operations > 1 || (single_definition_per_file && definitions.len() > 1) {
            return Err(ParseError::MultipleDefinitionsPerFile {
                definition_names: definitions.iter().map(|def| def.name.clone()).collect(),
                file: file_path.to_path_buf(),
            });
        }

        if let Some(op_idx) = definitions.iter().position(|def| !def.kind.is_fragment()) {
            let operation = definitions.remove(op_idx);
            definitions.insert(0, operation);
        }

        log::trace!(
            "Parsed {} definition(s) from {}.",
            definitions.len(),
            file_path.display(),
        );

        Ok(Self {
            definitions,
            file_path: file_path.to_path_buf(),
            imports: parse_imports(file_path, source_text),
        })
    }

    pub fn definitions(&self) -> &[OperationDocument] {
        &self.definitions
    }

    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }

    pub fn imports(&self) -> &[DocumentImport] {
        &self.imports
    }

    pub fn into_primary(mut self) -> OperationDocument {
        self.definitions.swap_remove(0)
    }

    pub fn primary(&self) -> &OperationDocument {
        &self.definitions[0]
    }

    fn definition_from_ast(
        file_path: &Path,
        ast_def: &ast::operation::Definition,
    ) -> Result<OperationDocument> {
        use ast::operation::OperationDefinition;

        let (kind, position, name, variable_defs, ast_selection_set) = match ast_def {
            ast::operation::Definition::Fragment(frag_def) => {
                let ast::operation::TypeCondition::On(type_condition) =
                    &frag_def.type_condition;
                return Ok(OperationDocument {
                    def_location: loc::FilePosition::from_pos(Some(file_path), frag_def.position),
                    file_path: file_path.to_path_buf(),
                    kind: OperationKind::Fragment,
                    name: frag_def.name.clone(),
                    selection_set: SelectionSet::from_ast(file_path, &frag_def.selection_set),
                    type_condition: Some(type_condition.clone()),
                    variables: vec![],
                });
            },

            ast::operation::Definition::Operation(OperationDefinition::Mutation(op)) =>
                (OperationKind::Mutation, op.position, &op.name, &op.variable_definitions, &op.selection_set),
            ast::operation::Definition::Operation(OperationDefinition::Query(op)) =>
                (OperationKind::Query, op.position, &op.name, &op.variable_definitions, &op.selection_set),
            ast::operation::Definition::Operation(OperationDefinition::Subscription(op)) =>
                (OperationKind::Subscription, op.position, &op.name, &op.variable_definitions, &op.selection_set),
            ast::operation::Definition::Operation(OperationDefinition::SelectionSet(set)) =>
                return Err(ParseError::AnonymousOperation {
                    kind: OperationKind::Query,
                    location: loc::FilePosition::from_pos(Some(file_path), set.span.0),
                }),
        };

        let def_location = loc::FilePosition::from_pos(Some(file_path), position);
        let Some(name) = name else {
            return Err(ParseError::AnonymousOperation {
                kind,
                location: def_location,
            });
        };

        Ok(OperationDocument {
            def_location,
            file_path: file_path.to_path_buf(),
            kind,
            name: name.clone(),
            selection_set: SelectionSet::from_ast(file_path, ast_selection_set),
            type_condition: None,
            variables: variable_defs
                .iter()
                .map(|var_def| Variable::from_ast(file_path, var_def))
                .collect(),
        })
    }
}

fn parse_imports(file_path: &Path, source_text: &str) -> Vec<DocumentImport> {
    source_text
        .lines()
        .enumerate()
        .filter_map(|(line_idx, line)| {
            let rest = line.trim_start().strip_prefix("#import")?;
            let quoted = rest.trim();
            let path = quoted
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .or_else(|| quoted.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))?;
            Some(DocumentImport {
                def_location: loc::FilePosition {
                    col: 1,
                    file: Some(file_path.to_path_buf()),
                    line: line_idx + 1,
                },
                path: path.to_string(),
            })
        })
        .collect()
}

/// graphql_parser reports positions only inside its message text, as
/// `Parse error at <line>:<col>`.
fn syntax_error_position(file_path: &Path, message: &str) -> Option<loc::FilePosition> {
    let after = message.split("Parse error at ").nth(1)?;
    let coords = after.split_whitespace().next()?;
    let (line, col) = coords.split_once(':')?;
    Some(loc::FilePosition {
        col: col.parse().ok()?,
        file: Some(file_path.to_path_buf()),
        line: line.parse().ok()?,
    })
}
