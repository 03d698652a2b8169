use crate::loc;
use crate::operation::OperationKind;

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean one of the following: `{}`?", suggestions.join("`, `"))
    }
}

/// Ways a resolved selection tree can disagree with the schema.
///
/// `path` names the declaration being synthesized when the problem was
/// found (e.g. `Me_me_personalHost`), which traces the selection path.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SynthesisError {
    #[error(
        "The response key `{response_key}` in `{path}` selects both `{existing_field}` and \
        `{new_field}` ({location})",
    )]
    ConflictingResponseKey {
        existing_field: String,
        location: loc::FilePosition,
        new_field: String,
        path: String,
        response_key: String,
    },

    #[error(
        "The field `{parent_type}.{field_name}` at {location} has the input type \
        `{type_name}` and cannot be selected",
    )]
    InvalidFieldType {
        field_name: String,
        location: loc::FilePosition,
        parent_type: String,
        type_name: String,
    },

    #[error(
        "The variable `${variable_name}` at {location} has the type `{type_name}`, which is \
        not an input type",
    )]
    InvalidVariableType {
        location: loc::FilePosition,
        type_name: String,
        variable_name: String,
    },

    #[error("The schema defines no {kind} root type, used at {location}")]
    MissingRootType {
        kind: OperationKind,
        location: loc::FilePosition,
    },

    #[error(
        "The field `{field_name}` in `{path}` ({location}) has the composite type \
        `{type_name}` and needs a selection set",
    )]
    MissingSubselection {
        field_name: String,
        location: loc::FilePosition,
        path: String,
        type_name: String,
    },

    #[error(
        "The inline fragment at {location} narrows to `{type_condition}`, which can never be \
        a `{parent_type}`",
    )]
    TypeMismatch {
        location: loc::FilePosition,
        parent_type: String,
        type_condition: String,
    },

    #[error(
        "The field `{field_name}` in `{path}` ({location}) has the leaf type `{type_name}` \
        and cannot have a selection set",
    )]
    UnexpectedSubselection {
        field_name: String,
        location: loc::FilePosition,
        path: String,
        type_name: String,
    },

    #[error(
        "Unknown field `{field_name}` on `{parent_type}` in `{path}` ({location}).{}",
        did_you_mean(.suggestions),
    )]
    UnknownField {
        field_name: String,
        location: loc::FilePosition,
        parent_type: String,
        path: String,
        suggestions: Vec<String>,
    },

    #[error("No type mapping is configured for the custom scalar `{scalar_name}` ({location})")]
    UnknownScalar {
        location: loc::FilePosition,
        scalar_name: String,
    },

    #[error("Unknown type `{type_name}` referenced at {location}")]
    UnknownType {
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("`{type_name}` is referenced as an enum at {location} but is not one")]
    UnresolvedEnum {
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("The fragment spread `...{fragment_name}` at {location} was never inlined")]
    UnresolvedFragmentSpread {
        fragment_name: String,
        location: loc::FilePosition,
    },
}
impl SynthesisError {
    pub fn location(&self) -> &loc::FilePosition {
        match self {
            Self::ConflictingResponseKey { location, .. }
                | Self::InvalidFieldType { location, .. }
                | Self::InvalidVariableType { location, .. }
                | Self::MissingRootType { location, .. }
                | Self::MissingSubselection { location, .. }
                | Self::TypeMismatch { location, .. }
                | Self::UnexpectedSubselection { location, .. }
                | Self::UnknownField { location, .. }
                | Self::UnknownScalar { location, .. }
                | Self::UnknownType { location, .. }
                | Self::UnresolvedEnum { location, .. }
                | Self::UnresolvedFragmentSpread { location, .. } => location,
        }
    }
}
