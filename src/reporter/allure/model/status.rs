use serde_derive::Serialize;

#[derive(Debug, Serialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl StatusDetails {
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.trace.is_none()
    }
}

impl From<String> for StatusDetails {
    fn from(message: String) -> Self {
        Self {
            message: Some(message),
            trace: None,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Failed,
    Broken,
    Passed,
    Skipped,
    Unknown,
}

impl Status {
    /// Maps the `TestStatus` string written by older Xcode versions.
    pub fn from_legacy(text: Option<&str>) -> Self {
        match text {
            Some("Success") => Status::Passed,
            Some("Failure") => Status::Failed,
            _ => Status::Unknown,
        }
    }
}
