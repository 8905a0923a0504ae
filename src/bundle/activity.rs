use std::path::{Component, Path, PathBuf};

use crate::bundle::model::Activity;
use crate::reporter::allure::model::{
    Attachment, ExecutableItem, Parameter, Status, StatusDetails, StepResult,
};
use crate::reporter::allure::ResultsVisitor;

/// Rolled-up status and steps of one list of sibling activities.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRollup {
    pub status: Status,
    pub steps: Vec<StepResult>,
}

/// Turns an activity tree into steps, attachments included.
pub struct ActivityWalker<'a> {
    attachments_dir: &'a Path,
    visitor: &'a mut dyn ResultsVisitor,
}

impl<'a> ActivityWalker<'a> {
    pub fn new(attachments_dir: &'a Path, visitor: &'a mut dyn ResultsVisitor) -> Self {
        Self {
            attachments_dir,
            visitor,
        }
    }

    /// Walks `activities` depth first.
    ///
    /// Titles of crashes and assertion failures found anywhere below are appended to
    /// `failures` in encounter order, children before their parent.
    pub fn walk(&mut self, activities: &[Activity], failures: &mut Vec<String>) -> ActivityRollup {
        let mut status = Status::Passed;
        let mut steps = Vec::with_capacity(activities.len());
        for activity in activities {
            let step = self.step(activity, failures);
            status = roll_up(status, step.status);
            steps.push(step);
        }
        ActivityRollup { status, steps }
    }

    fn step(&mut self, activity: &Activity, failures: &mut Vec<String>) -> StepResult {
        let window = activity.window();
        let children = self.walk(&activity.sub_activities, failures);
        let name = activity
            .title
            .clone()
            .or_else(|| activity.activity_type.clone())
            .unwrap_or_default();

        let status = if activity.is_crash() {
            Status::Failed
        } else if activity.is_assertion_failure() {
            roll_up(Status::Broken, children.status)
        } else if !children.steps.is_empty() {
            children.status
        } else {
            Status::Passed
        };

        let mut step = ExecutableItem::new(name, status);
        if activity.is_crash() || activity.is_assertion_failure() {
            if let Some(title) = &activity.title {
                failures.push(title.clone());
                step.status_details = StatusDetails::from(title.clone());
            }
        }
        step.time = window;
        step.steps = children.steps;
        step.attachments = self.attachments(&activity.attachments);
        if let Some(uuid) = &activity.uuid {
            step.parameters.push(Parameter::hidden("uuid", uuid.as_str()));
        }
        step
    }

    fn attachments(&mut self, filenames: &[String]) -> Vec<Attachment> {
        let mut attachments = Vec::new();
        for filename in filenames {
            if let Some(path) = resolve_attachment(self.attachments_dir, filename) {
                attachments.extend(self.visitor.visit_attachment_file(&path));
            }
        }
        attachments
    }
}

/// FAILED beats BROKEN beats PASSED.
pub fn roll_up(aggregate: Status, status: Status) -> Status {
    match status {
        Status::Failed => Status::Failed,
        Status::Broken if aggregate != Status::Failed => Status::Broken,
        _ => aggregate,
    }
}

/// Path of an existing attachment file. Names escaping the directory count as missing.
pub fn resolve_attachment(directory: &Path, filename: &str) -> Option<PathBuf> {
    let relative = Path::new(filename);
    let plain = relative.components().count() > 0
        && relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
    if !plain {
        return None;
    }
    let path = directory.join(relative);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}
