use crate::loc;
use std::marker::PhantomData;

/// Represents a reference to something by name.
///
/// Each field of an object or interface type holds a named reference to the
/// [GraphQLType](crate::types::GraphQLType) it returns. The reference is
/// only resolved against a [Schema](crate::schema::Schema) when it is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<
    TSource,
    TResource: DerefByName<Source=TSource>,
> {
    pub name: String,
    pub ref_location: loc::SourceLocation,
    phantom: PhantomData<TResource>,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            ref_location,
            phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// enables usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, location: loc::SourceLocation) -> NamedRef<Self::Source, Self> {
        NamedRef::<Self::Source, Self>::new(name, location)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("`{0}` does not name a type in the schema")]
    DanglingReference(String),
}
