#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Fragment,
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment)
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Fragment => "fragment",
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}
