use crate::synth::RecordField;

/// A named object shape. Fields are ordered by key.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub(crate) fields: Vec<RecordField>,
    pub(crate) name: String,
    pub(crate) readonly: bool,
}
impl Record {
    pub fn field(&self, key: &str) -> Option<&RecordField> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn readonly(&self) -> bool {
        self.readonly
    }
}
