use crate::ast;
use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use std::path::Path;

/// An ordered sequence of [`Selection`]s. Source order is preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    pub(super) fn from_ast(
        file_path: &Path,
        ast_set: &ast::operation::SelectionSet,
    ) -> Self {
        let selections = ast_set.items
            .iter()
            .map(|ast_selection| match ast_selection {
                ast::operation::Selection::Field(ast_field) =>
                    Selection::Field(FieldSelection {
                        alias: ast_field.alias.clone(),
                        def_location: loc::FilePosition::from_pos(
                            Some(file_path),
                            ast_field.position,
                        ),
                        name: ast_field.name.clone(),
                        selection_set:
                            if ast_field.selection_set.items.is_empty() {
                                None
                            } else {
                                Some(Self::from_ast(file_path, &ast_field.selection_set))
                            },
                    }),

                ast::operation::Selection::FragmentSpread(ast_spread) =>
                    Selection::FragmentSpread(FragmentSpread {
                        def_location: loc::FilePosition::from_pos(
                            Some(file_path),
                            ast_spread.position,
                        ),
                        fragment_name: ast_spread.fragment_name.clone(),
                    }),

                ast::operation::Selection::InlineFragment(ast_inline) =>
                    Selection::InlineFragment(InlineFragment {
                        def_location: loc::FilePosition::from_pos(
                            Some(file_path),
                            ast_inline.position,
                        ),
                        origin_fragment: None,
                        selection_set: Self::from_ast(file_path, &ast_inline.selection_set),
                        type_condition: ast_inline.type_condition
                            .as_ref()
                            .map(|type_cond| match type_cond {
                                ast::operation::TypeCondition::On(name) => name.clone(),
                            }),
                    }),
            })
            .collect();

        Self { selections }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Names of every fragment spread in this set, including nested ones,
    /// in source order.
    pub fn fragment_spreads(&self) -> Vec<&FragmentSpread> {
        let mut spreads = vec![];
        self.collect_fragment_spreads(&mut spreads);
        spreads
    }

    fn collect_fragment_spreads<'a>(&'a self, spreads: &mut Vec<&'a FragmentSpread>) {
        for selection in &self.selections {
            match selection {
                Selection::Field(field) => {
                    if let Some(nested_set) = field.selection_set() {
                        nested_set.collect_fragment_spreads(spreads);
                    }
                },
                Selection::FragmentSpread(spread) => spreads.push(spread),
                Selection::InlineFragment(inline) =>
                    inline.selection_set().collect_fragment_spreads(spreads),
            }
        }
    }
}
