use serde_derive::Serialize;

use super::{
    attachment::Attachment,
    label::Label,
    parameter::Parameter,
    stage::Stage,
    status::{Status, StatusDetails},
};
use crate::time::TimeWindow;

pub type StepResult = ExecutableItem;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutableItem {
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "StatusDetails::is_empty")]
    pub status_details: StatusDetails,
    pub stage: Stage,
    pub steps: Vec<StepResult>,
    pub attachments: Vec<Attachment>,
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub time: TimeWindow,
}

impl ExecutableItem {
    pub fn new<N: Into<String>>(name: N, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
            status_details: StatusDetails::default(),
            stage: Stage::default(),
            steps: Vec::new(),
            attachments: Vec::new(),
            parameters: Vec::new(),
            time: TimeWindow::default(),
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_details.message.as_deref()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub uuid: uuid::Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case_id: Option<String>,
    #[serde(flatten)]
    pub item: ExecutableItem,
    pub labels: Vec<Label>,
}

impl TestResult {
    pub fn new(uuid: uuid::Uuid, item: ExecutableItem) -> Self {
        Self {
            uuid,
            history_id: None,
            full_name: None,
            test_case_id: None,
            item,
            labels: Vec::new(),
        }
    }

    pub fn uuid(&self) -> uuid::Uuid {
        self.uuid
    }

    /// Adds a label unless one with the same name is already present.
    pub fn add_label_if_not_exists(&mut self, label: Label) {
        let exists = self
            .labels
            .iter()
            .any(|existing| std::mem::discriminant(existing) == std::mem::discriminant(&label));
        if !exists {
            self.labels.push(label);
        }
    }
}
