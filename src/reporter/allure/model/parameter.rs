use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub hidden: bool,
    pub excluded: bool,
}

impl Parameter {
    /// A parameter kept for traceability, invisible in the report and ignored by history.
    pub fn hidden<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            hidden: true,
            excluded: true,
        }
    }
}
