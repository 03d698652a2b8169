/// The reason GraphQL reports when `@deprecated` is applied without one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeprecationState {
    Deprecated(Option<String>),
    NotDeprecated,
}
impl DeprecationState {
    pub(crate) fn from_introspection(
        is_deprecated: bool,
        reason: Option<&str>,
    ) -> Self {
        if !is_deprecated {
            return Self::NotDeprecated;
        }
        match reason.map(str::trim) {
            None | Some("") => Self::Deprecated(None),
            Some(reason) if reason == DEFAULT_DEPRECATION_REASON => Self::Deprecated(None),
            Some(reason) => Self::Deprecated(Some(reason.to_string())),
        }
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    /// The explicit deprecation reason, if the schema gave a non-default one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => reason.as_deref(),
            Self::NotDeprecated => None,
        }
    }
}
