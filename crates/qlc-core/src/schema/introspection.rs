//! Serde model of the standard introspection query result.
//!
//! Everything the schema builder must diagnose itself (rather than let serde
//! reject) is an `Option` here.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct IntrospectionResponse {
    pub data: Option<IntrospectionData>,
    #[serde(rename = "__schema")]
    pub schema: Option<IntrospectionSchema>,
}

#[derive(Debug, Deserialize)]
pub(super) struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: Option<IntrospectionSchema>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionSchema {
    pub mutation_type: Option<IntrospectionNamedType>,
    pub query_type: Option<IntrospectionNamedType>,
    pub subscription_type: Option<IntrospectionNamedType>,
    pub types: Option<Vec<IntrospectionType>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct IntrospectionNamedType {
    pub name: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(super) enum IntrospectionTypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionType {
    pub description: Option<String>,
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    pub fields: Option<Vec<IntrospectionField>>,
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    pub interfaces: Option<Vec<IntrospectionTypeRef>>,
    pub kind: IntrospectionTypeKind,
    pub name: String,
    pub possible_types: Option<Vec<IntrospectionTypeRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionField {
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionInputValue {
    #[serde(default)]
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionEnumValue {
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionTypeRef {
    pub kind: IntrospectionTypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
