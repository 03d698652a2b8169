use std::collections::BTreeMap;

/// How a custom scalar that has no explicit mapping is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CustomScalarNaming {
    /// `<prefix><ScalarName>`.
    Prefixed(String),

    /// The scalar's schema name.
    SchemaName,

    /// `any`.
    #[default]
    Untyped,
}

/// The per-file rules for naming scalar targets and marking fields.
#[derive(Clone, Debug, PartialEq)]
pub struct NamingPolicy {
    pub(crate) custom_scalars: CustomScalarNaming,
    pub(crate) readonly_fields: bool,
    pub(crate) scalar_names: BTreeMap<String, String>,
    /// Reject unmapped custom scalars instead of naming them.
    pub(crate) strict_scalars: bool,
}
impl NamingPolicy {
    pub fn new(custom_scalars: CustomScalarNaming) -> Self {
        Self {
            custom_scalars,
            ..Self::default()
        }
    }

    pub fn custom_scalars(&self) -> &CustomScalarNaming {
        &self.custom_scalars
    }

    pub fn readonly_fields(&self) -> bool {
        self.readonly_fields
    }

    /// The TypeScript type a scalar renders as, or `None` when the scalar is
    /// custom, unmapped, and strict scalar checking is on.
    ///
    /// Resolution order: built-in scalars, then an explicit mapping, then the
    /// custom scalar naming mode.
    pub fn scalar_target(&self, scalar_name: &str) -> Option<String> {
        let builtin = match scalar_name {
            "Boolean" => Some("boolean"),
            "Float" | "Int" => Some("number"),
            "ID" | "String" => Some("string"),
            _ => None,
        };
        if let Some(builtin) = builtin {
            return Some(builtin.to_string());
        }

        if let Some(mapped) = self.scalar_names.get(scalar_name) {
            return Some(mapped.clone());
        }

        match &self.custom_scalars {
            CustomScalarNaming::Prefixed(prefix) => Some(format!("{prefix}{scalar_name}")),
            CustomScalarNaming::SchemaName => Some(scalar_name.to_string()),
            CustomScalarNaming::Untyped if self.strict_scalars => None,
            CustomScalarNaming::Untyped => Some("any".to_string()),
        }
    }

    pub fn with_readonly_fields(mut self, readonly_fields: bool) -> Self {
        self.readonly_fields = readonly_fields;
        self
    }

    pub fn with_scalar_name(mut self, scalar_name: &str, target: &str) -> Self {
        self.scalar_names.insert(scalar_name.to_string(), target.to_string());
        self
    }

    pub fn with_strict_scalars(mut self, strict_scalars: bool) -> Self {
        self.strict_scalars = strict_scalars;
        self
    }
}
impl std::default::Default for NamingPolicy {
    fn default() -> Self {
        Self {
            custom_scalars: CustomScalarNaming::default(),
            readonly_fields: true,
            scalar_names: BTreeMap::new(),
            strict_scalars: false,
        }
    }
}
