use std::path::Path;

use crate::bundle::activity::ActivityWalker;
use crate::bundle::error::NodeError;
use crate::bundle::model::{TestGroup, TestLeaf, TestNode, TestableSummary};
use crate::configuration::constants::common::UNKNOWN_TEST_NAME;
use crate::reporter::allure::model::{
    ExecutableItem, Label, Status, StatusDetails, TestResult,
};
use crate::reporter::allure::ResultsVisitor;
use crate::time::{time_window, TimeWindow};

/// Walks the group/test hierarchy of a summary and emits one result per test.
pub struct TestTreeWalker<'a> {
    attachments_dir: &'a Path,
    result_format: &'a str,
    visitor: &'a mut dyn ResultsVisitor,
}

impl<'a> TestTreeWalker<'a> {
    pub fn new(
        attachments_dir: &'a Path,
        result_format: &'a str,
        visitor: &'a mut dyn ResultsVisitor,
    ) -> Self {
        Self {
            attachments_dir,
            result_format,
            visitor,
        }
    }

    /// Emits every resolvable test of `summary`, returns how many were emitted.
    ///
    /// Tests that cannot be resolved are reported into `errors` and skipped.
    pub fn walk(&mut self, summary: &TestableSummary, errors: &mut Vec<NodeError>) -> usize {
        let suite = summary.name.as_deref();
        summary
            .tests
            .iter()
            .map(|node| self.walk_node(suite, node, None, errors))
            .sum()
    }

    fn walk_node(
        &mut self,
        suite: Option<&str>,
        node: &TestNode,
        parent: Option<&TestGroup>,
        errors: &mut Vec<NodeError>,
    ) -> usize {
        match node {
            TestNode::Group(group) => group
                .children
                .iter()
                .map(|child| self.walk_node(suite, child, Some(group), errors))
                .sum(),
            TestNode::Leaf(leaf) => match parent {
                Some(group) => {
                    let result = self.assemble(suite, group, leaf);
                    self.visitor.visit_test_result(result);
                    1
                }
                None => {
                    errors.push(NodeError::OrphanTest {
                        name: leaf.name.clone(),
                    });
                    0
                }
            },
        }
    }

    fn assemble(&mut self, suite: Option<&str>, group: &TestGroup, leaf: &TestLeaf) -> TestResult {
        let group_name = group.name.as_deref();
        let mut failures = Vec::new();
        let rollup = ActivityWalker::new(self.attachments_dir, &mut *self.visitor)
            .walk(&leaf.activities, &mut failures);

        let status = if leaf.activities.is_empty() {
            Status::from_legacy(leaf.legacy_status.as_deref())
        } else {
            rollup.status
        };
        let time = match (rollup.steps.first(), rollup.steps.last()) {
            (Some(first), Some(last)) => TimeWindow::span(&first.time, &last.time),
            _ => time_window(None, leaf.duration),
        };

        let mut item = ExecutableItem::new(
            leaf.name.as_deref().unwrap_or(UNKNOWN_TEST_NAME),
            status,
        );
        item.time = time;
        item.steps = rollup.steps;
        item.status_details = StatusDetails {
            message: if failures.is_empty() {
                None
            } else {
                Some(failures.join("\n\n"))
            },
            trace: if leaf.failures.is_empty() {
                None
            } else {
                Some(
                    leaf.failures
                        .iter()
                        .map(|failure| failure.render())
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            },
        };

        let uuid = leaf
            .summary_guid
            .as_deref()
            .and_then(|guid| uuid::Uuid::parse_str(guid).ok())
            .unwrap_or_else(uuid::Uuid::new_v4);
        let mut result = TestResult::new(uuid, item);
        result.history_id = match (group_name, leaf.name.as_deref()) {
            (Some(group_name), Some(name)) => Some(format!(
                "{}:{}#{}",
                suite.unwrap_or_default(),
                group_name,
                name
            )),
            _ => None,
        };
        result.full_name = leaf.identifier.clone();
        result.test_case_id = leaf.identifier.clone();
        result.add_label_if_not_exists(Label::ResultFormat(self.result_format.to_owned()));
        if let Some(group_name) = group_name {
            result.add_label_if_not_exists(Label::Suite(group_name.to_owned()));
            result.add_label_if_not_exists(Label::TestClass(group_name.to_owned()));
            result.add_label_if_not_exists(Label::Package(group_name.to_owned()));
        }
        result
    }
}
