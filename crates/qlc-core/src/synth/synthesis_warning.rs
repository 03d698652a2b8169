use crate::loc;

/// Problems worth telling the author about that do not stop a document
/// from compiling.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SynthesisWarning {
    #[error(
        "The field `{parent_type}.{field_name}` selected at {location} is deprecated{}",
        .reason.as_ref().map(|r| format!(": {r}")).unwrap_or_default(),
    )]
    DeprecatedField {
        field_name: String,
        location: loc::FilePosition,
        parent_type: String,
        reason: Option<String>,
    },

    #[error(
        "The inline fragment at {location} narrows to `{type_name}`, which the selection \
        already is",
    )]
    RedundantTypeCondition {
        location: loc::FilePosition,
        type_name: String,
    },
}
