use crate::bundle::document::Node;
use crate::bundle::error::NodeError;
use crate::configuration::constants::xcode::*;
use crate::time::{time_window, TimeWindow};

/// Typed view of one summary file, built once at the document boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestDocument {
    pub summaries: Vec<TestableSummary>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestableSummary {
    pub name: Option<String>,
    pub tests: Vec<TestNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TestNode {
    Group(TestGroup),
    Leaf(TestLeaf),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestGroup {
    pub name: Option<String>,
    pub children: Vec<TestNode>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestLeaf {
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub summary_guid: Option<String>,
    /// `TestStatus` of older Xcode versions
    pub legacy_status: Option<String>,
    /// Seconds
    pub duration: Option<f64>,
    pub activities: Vec<Activity>,
    pub failures: Vec<FailureSummary>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    pub activity_type: Option<String>,
    pub title: Option<String>,
    pub uuid: Option<String>,
    /// Seconds
    pub start: Option<f64>,
    /// Seconds, the start is used when absent
    pub finish: Option<f64>,
    /// Present only for activities that captured a crash
    pub crash_report: Option<String>,
    pub sub_activities: Vec<Activity>,
    /// Declared file names, resolved later against the attachments directory
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FailureSummary {
    pub file_name: Option<String>,
    pub message: Option<String>,
    pub line_number: Option<i64>,
    pub performance: bool,
}

impl Activity {
    pub fn is_crash(&self) -> bool {
        self.crash_report.is_some()
    }

    pub fn is_assertion_failure(&self) -> bool {
        self.activity_type.as_deref() == Some(ASSERTION_FAILURE_TYPE)
    }

    /// Seconds between start and finish. A missing finish makes a zero-length activity.
    pub fn duration(&self) -> Option<f64> {
        let start = self.start?;
        Some(self.finish.unwrap_or(start) - start)
    }

    pub fn window(&self) -> TimeWindow {
        time_window(self.start, self.duration())
    }
}

impl FailureSummary {
    pub fn render(&self) -> String {
        let prefix = if self.performance {
            "Performance failure"
        } else {
            "Failure"
        };
        format!(
            "{}: {} ({}:{})",
            prefix,
            self.message.as_deref().unwrap_or_default(),
            self.file_name.as_deref().unwrap_or_default(),
            self.line_number
                .map(|line| line.to_string())
                .unwrap_or_default()
        )
    }
}

impl TestDocument {
    /// Extracts the typed model from a raw root node.
    ///
    /// Nodes that cannot be represented are dropped and reported into `errors`; test trees
    /// and activity trees are each cut below `max_depth` levels.
    pub fn extract<N: Node>(root: &N, max_depth: usize, errors: &mut Vec<NodeError>) -> Self {
        let mut extractor = Extractor { max_depth, errors };
        Self {
            summaries: root
                .get_list(TESTABLE_SUMMARIES)
                .into_iter()
                .map(|summary| extractor.summary(summary))
                .collect(),
        }
    }
}

struct Extractor<'a> {
    max_depth: usize,
    errors: &'a mut Vec<NodeError>,
}

impl<'a> Extractor<'a> {
    fn summary<N: Node>(&mut self, node: &N) -> TestableSummary {
        TestableSummary {
            name: node.get_owned_string(TEST_NAME),
            tests: self.test_nodes(node.get_list(TESTS), 1),
        }
    }

    fn test_nodes<N: Node>(&mut self, nodes: Vec<&N>, depth: usize) -> Vec<TestNode> {
        if nodes.is_empty() {
            return Vec::new();
        }
        if depth > self.max_depth {
            self.errors.push(NodeError::TooDeep {
                node: "test",
                depth: self.max_depth,
            });
            return Vec::new();
        }
        nodes
            .into_iter()
            .filter_map(|node| self.test_node(node, depth))
            .collect()
    }

    fn test_node<N: Node>(&mut self, node: &N, depth: usize) -> Option<TestNode> {
        match node.get_string(TEST_OBJECT_CLASS) {
            Some(GROUP_CLASS) => Some(TestNode::Group(TestGroup {
                name: node.get_owned_string(TEST_NAME),
                children: self.test_nodes(node.get_list(SUBTESTS), depth + 1),
            })),
            Some(TEST_CLASS) => Some(TestNode::Leaf(self.leaf(node))),
            other => {
                self.errors
                    .push(NodeError::UnknownObjectClass(other.map(str::to_owned)));
                None
            }
        }
    }

    fn leaf<N: Node>(&mut self, node: &N) -> TestLeaf {
        TestLeaf {
            identifier: node.get_owned_string(TEST_IDENTIFIER),
            name: node.get_owned_string(TEST_NAME),
            summary_guid: node.get_owned_string(TEST_SUMMARY_GUID),
            legacy_status: node.get_owned_string(TEST_STATUS),
            duration: node.get_double(DURATION),
            activities: self.activities(node.get_list(ACTIVITY_SUMMARIES), 1),
            failures: node
                .get_list(FAILURE_SUMMARIES)
                .into_iter()
                .map(|failure| FailureSummary {
                    file_name: failure.get_owned_string(FILE_NAME),
                    message: failure.get_owned_string(MESSAGE),
                    line_number: failure.get_integer(LINE_NUMBER),
                    performance: failure.get_bool(PERFORMANCE_FAILURE, false),
                })
                .collect(),
        }
    }

    fn activities<N: Node>(&mut self, nodes: Vec<&N>, depth: usize) -> Vec<Activity> {
        if nodes.is_empty() {
            return Vec::new();
        }
        if depth > self.max_depth {
            self.errors.push(NodeError::TooDeep {
                node: "activity",
                depth: self.max_depth,
            });
            return Vec::new();
        }
        nodes
            .into_iter()
            .map(|node| Activity {
                activity_type: node.get_owned_string(ACTIVITY_TYPE),
                title: node.get_owned_string(TITLE),
                uuid: node.get_owned_string(UUID),
                start: node.get_double(START_TIME_INTERVAL),
                finish: node.get_double(FINISH_TIME_INTERVAL),
                crash_report: node.get_owned_string(DIAGNOSTIC_REPORT_FILE_NAME),
                sub_activities: self.activities(node.get_list(SUB_ACTIVITIES), depth + 1),
                attachments: node
                    .get_list(ATTACHMENTS)
                    .into_iter()
                    .filter_map(|attachment| attachment.get_owned_string(FILENAME))
                    .collect(),
            })
            .collect()
    }
}
