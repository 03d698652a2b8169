use crate::config::NamingPolicy;
use crate::loc;
use crate::operation::OperationKind;
use crate::operation::ResolvedOperation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::schema::Schema;
use crate::synth::Record;
use crate::synth::RecordField;
use crate::synth::SynthesisError;
use crate::synth::SynthesisWarning;
use crate::synth::TypeShapeNode;
use crate::synth::TypeShapeTree;
use crate::synth::Variant;
use crate::types::DeprecationState;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashSet;

const FALLBACK_VARIANT_SUFFIX: &str = "$$other";

/// Fields collected for one response key of one concrete type.
#[derive(Clone, Debug)]
struct CollectedField<'a> {
    deprecation: Option<&'a DeprecationState>,
    description: Option<&'a str>,
    field_name: &'a str,
    location: &'a loc::FilePosition,
    selection_sets: Vec<&'a SelectionSet>,
    /// `None` for `__typename`.
    type_annotation: Option<&'a TypeAnnotation>,
}

type FieldsByKey<'a> = IndexMap<&'a str, CollectedField<'a>>;

pub(crate) struct Synthesizer<'a> {
    errors: Vec<SynthesisError>,
    global_refs: BTreeSet<String>,
    policy: &'a NamingPolicy,
    schema: &'a Schema,
    show_deprecation_warnings: bool,
    warnings: Vec<SynthesisWarning>,
}
impl<'a> Synthesizer<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        policy: &'a NamingPolicy,
        show_deprecation_warnings: bool,
    ) -> Self {
        Self {
            errors: vec![],
            global_refs: BTreeSet::new(),
            policy,
            schema,
            show_deprecation_warnings,
            warnings: vec![],
        }
    }

    pub(crate) fn synthesize(
        mut self,
        operation: &'a ResolvedOperation,
    ) -> Result<TypeShapeTree, Vec<SynthesisError>> {
        let document = operation.document();
        let root_type_name = match document.kind() {
            OperationKind::Fragment => document.type_condition().unwrap_or_default(),
            kind => match self.schema.root_type_name(kind) {
                Some(name) => name,
                None => return Err(vec![SynthesisError::MissingRootType {
                    kind,
                    location: document.def_location().clone(),
                }]),
            },
        };

        let root = match self.schema.resolve_type(root_type_name) {
            None => {
                self.errors.push(SynthesisError::UnknownType {
                    location: document.def_location().clone(),
                    type_name: root_type_name.to_string(),
                });
                None
            },
            Some(graphql_type) if !graphql_type.type_kind().is_composite() => {
                self.errors.push(SynthesisError::TypeMismatch {
                    location: document.def_location().clone(),
                    parent_type: root_type_name.to_string(),
                    type_condition: root_type_name.to_string(),
                });
                None
            },
            Some(_) => Some(self.selection_shape(
                root_type_name,
                &[document.selection_set()],
                document.name(),
            )),
        };

        let variables =
            if document.kind().is_fragment() || document.variables().is_empty() {
                None
            } else {
                Some(self.variables_record(document.name(), document.variables()))
            };

        match root {
            Some(root) if self.errors.is_empty() => {
                log::trace!(
                    "Synthesized `{}` with {} global reference(s).",
                    document.name(),
                    self.global_refs.len(),
                );
                Ok(TypeShapeTree {
                    global_refs: self.global_refs,
                    kind: document.kind(),
                    name: document.name().to_string(),
                    root,
                    variables,
                    warnings: self.warnings,
                })
            },
            _ => {
                // A selection shared by several variants is checked once per
                // variant; keep the first report for each selection.
                let mut seen = HashSet::new();
                let deduped = self.errors
                    .into_iter()
                    .filter(|err| {
                        seen.insert((std::mem::discriminant(err), err.location().clone()))
                    })
                    .collect();
                Err(deduped)
            },
        }
    }

    /// The shape of one or more selection sets (several when the same
    /// response key was selected more than once) on `parent_type`.
    fn selection_shape(
        &mut self,
        parent_type: &'a str,
        selection_sets: &[&'a SelectionSet],
        name: &str,
    ) -> TypeShapeNode {
        let mut scope = self.schema.concrete_types_of(parent_type);
        if scope.is_empty() {
            scope.insert(parent_type);
        }

        let mut per_type: BTreeMap<&'a str, FieldsByKey<'a>> = scope
            .iter()
            .map(|type_name| (*type_name, IndexMap::new()))
            .collect();
        let mut explicit: BTreeSet<&'a str> = BTreeSet::new();
        for selection_set in selection_sets.iter().copied() {
            self.collect_fields(
                selection_set,
                parent_type,
                &scope,
                name,
                &mut per_type,
                &mut explicit,
            );
        }

        // Types whose selected keys differ from the keys every type shares
        // need their own variant even without an inline fragment of their
        // own (e.g. when narrowed through an interface).
        let common_keys = per_type
            .values()
            .map(|fields| fields.keys().copied().collect::<BTreeSet<_>>())
            .reduce(|common, keys| common.intersection(&keys).copied().collect())
            .unwrap_or_default();
        let mut fallback_types: Vec<&'a str> = vec![];
        for (type_name, fields) in &per_type {
            if explicit.contains(type_name) {
                continue;
            }
            let keys: BTreeSet<&str> = fields.keys().copied().collect();
            if keys == common_keys {
                fallback_types.push(*type_name);
            } else {
                explicit.insert(*type_name);
            }
        }

        if explicit.is_empty() {
            let empty = IndexMap::new();
            let fields = per_type.values().next().unwrap_or(&empty);
            return TypeShapeNode::Record(self.build_record(name, fields, &fallback_types));
        }

        let mut variants = vec![];
        for type_name in &explicit {
            let Some(fields) = per_type.get(type_name) else {
                continue;
            };
            variants.push(Variant {
                concrete_types: vec![type_name.to_string()],
                is_fallback: false,
                record: self.build_record(&format!("{name}_{type_name}"), fields, &[*type_name]),
            });
        }
        if let Some(fields) = fallback_types.first().and_then(|first| per_type.get(first)) {
            variants.push(Variant {
                concrete_types: fallback_types.iter().map(|t| t.to_string()).collect(),
                is_fallback: true,
                record: self.build_record(
                    &format!("{name}_{FALLBACK_VARIANT_SUFFIX}"),
                    fields,
                    &fallback_types,
                ),
            });
        }

        TypeShapeNode::DiscriminatedUnion {
            name: name.to_string(),
            variants,
        }
    }

    fn collect_fields(
        &mut self,
        selection_set: &'a SelectionSet,
        current_type: &'a str,
        scope: &BTreeSet<&'a str>,
        path: &str,
        per_type: &mut BTreeMap<&'a str, FieldsByKey<'a>>,
        explicit: &mut BTreeSet<&'a str>,
    ) {
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    let collected = if field.is_typename() {
                        if field.selection_set().is_some() {
                            self.errors.push(SynthesisError::UnexpectedSubselection {
                                field_name: field.name().to_string(),
                                location: field.def_location().clone(),
                                path: path.to_string(),
                                type_name: "String".to_string(),
                            });
                        }
                        CollectedField {
                            deprecation: None,
                            description: None,
                            field_name: field.name(),
                            location: field.def_location(),
                            selection_sets: vec![],
                            type_annotation: None,
                        }
                    } else {
                        let schema_field = self.schema
                            .fields_of(current_type)
                            .and_then(|fields| fields.get(field.name()));
                        let Some(schema_field) = schema_field else {
                            let suggestions = self.similar_field_names(current_type, field.name());
                            self.errors.push(SynthesisError::UnknownField {
                                field_name: field.name().to_string(),
                                location: field.def_location().clone(),
                                parent_type: current_type.to_string(),
                                path: path.to_string(),
                                suggestions,
                            });
                            continue;
                        };

                        let deprecation = schema_field.deprecation_state();
                        if self.show_deprecation_warnings && deprecation.is_deprecated() {
                            self.warnings.push(SynthesisWarning::DeprecatedField {
                                field_name: field.name().to_string(),
                                location: field.def_location().clone(),
                                parent_type: current_type.to_string(),
                                reason: deprecation.reason().map(str::to_string),
                            });
                        }

                        CollectedField {
                            deprecation: Some(deprecation),
                            description: schema_field.description(),
                            field_name: field.name(),
                            location: field.def_location(),
                            selection_sets: field.selection_set().into_iter().collect(),
                            type_annotation: Some(schema_field.type_annotation()),
                        }
                    };

                    for type_name in scope {
                        let fields = per_type.entry(*type_name).or_default();
                        self.merge_field(fields, field.response_key(), collected.clone(), path);
                    }
                },

                Selection::InlineFragment(inline) => {
                    let condition = inline.type_condition().unwrap_or(current_type);
                    let Some(condition_type) = self.schema.resolve_type(condition) else {
                        self.errors.push(SynthesisError::UnknownType {
                            location: inline.def_location().clone(),
                            type_name: condition.to_string(),
                        });
                        continue;
                    };

                    let possible_types = self.schema.concrete_types_of(condition);
                    let narrowed: BTreeSet<&'a str> = scope
                        .iter()
                        .copied()
                        .filter(|type_name| possible_types.contains(type_name))
                        .collect();
                    if !condition_type.type_kind().is_composite() || narrowed.is_empty() {
                        self.errors.push(SynthesisError::TypeMismatch {
                            location: inline.def_location().clone(),
                            parent_type: current_type.to_string(),
                            type_condition: condition.to_string(),
                        });
                        continue;
                    }

                    let is_object = matches!(condition_type, GraphQLType::Object(_));
                    if inline.origin_fragment().is_none()
                        && inline.type_condition() == Some(current_type)
                        && is_object {
                        self.warnings.push(SynthesisWarning::RedundantTypeCondition {
                            location: inline.def_location().clone(),
                            type_name: condition.to_string(),
                        });
                    }
                    if is_object && scope.len() > 1 {
                        explicit.insert(condition_type.name());
                    }

                    self.collect_fields(
                        inline.selection_set(),
                        condition_type.name(),
                        &narrowed,
                        path,
                        per_type,
                        explicit,
                    );
                },

                Selection::FragmentSpread(spread) => {
                    self.errors.push(SynthesisError::UnresolvedFragmentSpread {
                        fragment_name: spread.fragment_name().to_string(),
                        location: spread.def_location().clone(),
                    });
                },
            }
        }
    }

    fn merge_field(
        &mut self,
        fields: &mut FieldsByKey<'a>,
        response_key: &'a str,
        collected: CollectedField<'a>,
        path: &str,
    ) {
        let Some(existing) = fields.get_mut(response_key) else {
            fields.insert(response_key, collected);
            return;
        };

        if existing.field_name != collected.field_name {
            self.errors.push(SynthesisError::ConflictingResponseKey {
                existing_field: existing.field_name.to_string(),
                location: collected.location.clone(),
                new_field: collected.field_name.to_string(),
                path: path.to_string(),
                response_key: response_key.to_string(),
            });
            return;
        }

        existing.selection_sets.extend(collected.selection_sets);
        if existing.description.is_none_or(|desc| desc.trim().is_empty()) {
            existing.description = collected.description;
        }
        if existing.deprecation.is_none_or(|state| !state.is_deprecated()) {
            existing.deprecation = collected.deprecation.or(existing.deprecation);
        }
    }

    fn build_record(
        &mut self,
        name: &str,
        fields: &FieldsByKey<'a>,
        typename_literals: &[&str],
    ) -> Record {
        let mut record_fields = Vec::with_capacity(fields.len());
        for (key, collected) in fields {
            let node = match collected.type_annotation {
                None => {
                    let mut literals: Vec<String> = typename_literals
                        .iter()
                        .map(|t| t.to_string())
                        .collect();
                    literals.sort();
                    TypeShapeNode::Literal(literals)
                },
                Some(type_annotation) => self.output_shape(
                    type_annotation,
                    &collected.selection_sets,
                    &format!("{name}_{key}"),
                    collected,
                ),
            };
            record_fields.push(RecordField {
                deprecation: collected.deprecation
                    .cloned()
                    .unwrap_or(DeprecationState::NotDeprecated),
                description: collected.description
                    .filter(|desc| !desc.trim().is_empty())
                    .map(str::to_string),
                key: key.to_string(),
                node,
                optional: false,
            });
        }
        record_fields.sort_by(|a, b| a.key.cmp(&b.key));

        Record {
            fields: record_fields,
            name: name.to_string(),
            readonly: self.policy.readonly_fields(),
        }
    }

    /// Unwrap list and non-null wrappers of a field's type into
    /// [`TypeShapeNode::ListOf`] and [`TypeShapeNode::Optional`], outermost
    /// first.
    fn output_shape(
        &mut self,
        type_annotation: &'a TypeAnnotation,
        selection_sets: &[&'a SelectionSet],
        name: &str,
        collected: &CollectedField<'a>,
    ) -> TypeShapeNode {
        match type_annotation {
            TypeAnnotation::List(list_annot) => {
                let inner = self.output_shape(
                    list_annot.inner_type_annotation(),
                    selection_sets,
                    name,
                    collected,
                );
                TypeShapeNode::ListOf(Box::new(inner)).wrap_nullable(list_annot.nullable())
            },
            TypeAnnotation::Named(named_annot) => self
                .named_output_shape(named_annot, selection_sets, name, collected)
                .wrap_nullable(named_annot.nullable()),
        }
    }

    fn named_output_shape(
        &mut self,
        named_annot: &'a NamedTypeAnnotation,
        selection_sets: &[&'a SelectionSet],
        name: &str,
        collected: &CollectedField<'a>,
    ) -> TypeShapeNode {
        let type_name = named_annot.graphql_type_name();
        let location = collected.location;
        let Some(graphql_type) = self.resolve_hinted_type(named_annot, location) else {
            return TypeShapeNode::ScalarRef(type_name.to_string());
        };

        let leaf_error = || SynthesisError::UnexpectedSubselection {
            field_name: collected.field_name.to_string(),
            location: location.clone(),
            path: name.to_string(),
            type_name: type_name.to_string(),
        };

        match graphql_type {
            GraphQLType::Scalar(_) => {
                if !selection_sets.is_empty() {
                    self.errors.push(leaf_error());
                }
                TypeShapeNode::ScalarRef(self.scalar_target(type_name, location))
            },

            GraphQLType::Enum(_) => {
                if !selection_sets.is_empty() {
                    self.errors.push(leaf_error());
                }
                self.global_refs.insert(type_name.to_string());
                TypeShapeNode::EnumRef(type_name.to_string())
            },

            GraphQLType::InputObject(_) => {
                self.errors.push(SynthesisError::InvalidFieldType {
                    field_name: collected.field_name.to_string(),
                    location: location.clone(),
                    parent_type: name.to_string(),
                    type_name: type_name.to_string(),
                });
                TypeShapeNode::InputObjectRef(type_name.to_string())
            },

            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                if selection_sets.is_empty() {
                    self.errors.push(SynthesisError::MissingSubselection {
                        field_name: collected.field_name.to_string(),
                        location: location.clone(),
                        path: name.to_string(),
                        type_name: type_name.to_string(),
                    });
                    return TypeShapeNode::Record(Record {
                        fields: vec![],
                        name: name.to_string(),
                        readonly: self.policy.readonly_fields(),
                    });
                }
                self.selection_shape(graphql_type.name(), selection_sets, name)
            },
        }
    }

    /// Look up the named type, checking it against the kind the referencing
    /// site claimed for it.
    fn resolve_hinted_type(
        &mut self,
        named_annot: &NamedTypeAnnotation,
        location: &loc::FilePosition,
    ) -> Option<&'a GraphQLType> {
        let type_name = named_annot.graphql_type_name();
        let Some(graphql_type) = self.schema.resolve_type(type_name) else {
            self.errors.push(SynthesisError::UnknownType {
                location: location.clone(),
                type_name: type_name.to_string(),
            });
            return None;
        };

        match named_annot.kind_hint() {
            Some(GraphQLTypeKind::Enum) if graphql_type.as_enum().is_none() => {
                self.errors.push(SynthesisError::UnresolvedEnum {
                    location: location.clone(),
                    type_name: type_name.to_string(),
                });
                None
            },
            Some(GraphQLTypeKind::Scalar) if graphql_type.as_scalar().is_none() => {
                self.errors.push(SynthesisError::UnknownScalar {
                    location: location.clone(),
                    scalar_name: type_name.to_string(),
                });
                None
            },
            _ => Some(graphql_type),
        }
    }

    fn scalar_target(&mut self, scalar_name: &str, location: &loc::FilePosition) -> String {
        match self.policy.scalar_target(scalar_name) {
            Some(target) => target,
            None => {
                self.errors.push(SynthesisError::UnknownScalar {
                    location: location.clone(),
                    scalar_name: scalar_name.to_string(),
                });
                scalar_name.to_string()
            },
        }
    }

    fn similar_field_names(&self, type_name: &str, field_name: &str) -> Vec<String> {
        let mut similar: Vec<String> = self.schema
            .fields_of(type_name)
            .into_iter()
            .flat_map(|fields| fields.keys())
            .filter(|candidate| strsim::damerau_levenshtein(field_name, candidate) < 3)
            .cloned()
            .collect();
        similar.sort();
        similar
    }

    fn variables_record(&mut self, operation_name: &str, variables: &'a [Variable]) -> Record {
        let mut fields: Vec<RecordField> = variables
            .iter()
            .map(|variable| RecordField {
                deprecation: DeprecationState::NotDeprecated,
                description: None,
                key: variable.name().to_string(),
                node: self.variable_shape(variable.type_annotation(), variable),
                optional: variable.is_optional(),
            })
            .collect();
        fields.sort_by(|a, b| a.key.cmp(&b.key));

        Record {
            fields,
            name: format!("{operation_name}Variables"),
            readonly: false,
        }
    }

    fn variable_shape(
        &mut self,
        type_annotation: &'a TypeAnnotation,
        variable: &'a Variable,
    ) -> TypeShapeNode {
        match type_annotation {
            TypeAnnotation::List(list_annot) => {
                let inner = self.variable_shape(list_annot.inner_type_annotation(), variable);
                TypeShapeNode::ListOf(Box::new(inner)).wrap_nullable(list_annot.nullable())
            },
            TypeAnnotation::Named(named_annot) => {
                let type_name = named_annot.graphql_type_name();
                let location = variable.def_location();
                let node = match self.schema.resolve_type(type_name) {
                    None => {
                        self.errors.push(SynthesisError::UnknownType {
                            location: location.clone(),
                            type_name: type_name.to_string(),
                        });
                        TypeShapeNode::ScalarRef(type_name.to_string())
                    },
                    Some(GraphQLType::Scalar(_)) =>
                        TypeShapeNode::ScalarRef(self.scalar_target(type_name, location)),
                    Some(GraphQLType::Enum(_)) => {
                        self.global_refs.insert(type_name.to_string());
                        TypeShapeNode::EnumRef(type_name.to_string())
                    },
                    Some(GraphQLType::InputObject(_)) => {
                        self.global_refs.insert(type_name.to_string());
                        TypeShapeNode::InputObjectRef(type_name.to_string())
                    },
                    Some(_) => {
                        self.errors.push(SynthesisError::InvalidVariableType {
                            location: location.clone(),
                            type_name: type_name.to_string(),
                            variable_name: variable.name().to_string(),
                        });
                        TypeShapeNode::ScalarRef(type_name.to_string())
                    },
                };
                node.wrap_nullable(named_annot.nullable())
            },
        }
    }
}
