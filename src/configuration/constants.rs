pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const ENV_PREFIX: &str = "XCALLURE";
    pub const DEFAULT_RESULTS_PATTERN: &str = "*TestSummaries.plist";
    pub const DEFAULT_ATTACHMENTS_DIR: &str = "Attachments";
    pub const DEFAULT_OUTPUT: &str = "allure-results";
    pub const DEFAULT_MAX_DEPTH: usize = 1000;
    pub const XCODE_RESULT_FORMAT: &str = "xcode";
    pub const UNKNOWN_TEST_NAME: &str = "Unknown test case";
}

/// Keys and markers of the Xcode `TestSummaries.plist` document.
pub mod xcode {
    pub const TESTABLE_SUMMARIES: &str = "TestableSummaries";
    pub const TEST_NAME: &str = "TestName";
    pub const TESTS: &str = "Tests";
    pub const TEST_OBJECT_CLASS: &str = "TestObjectClass";
    pub const SUBTESTS: &str = "Subtests";
    pub const TEST_IDENTIFIER: &str = "TestIdentifier";
    pub const TEST_SUMMARY_GUID: &str = "TestSummaryGUID";
    pub const TEST_STATUS: &str = "TestStatus";
    pub const DURATION: &str = "Duration";
    pub const ACTIVITY_SUMMARIES: &str = "ActivitySummaries";
    pub const ACTIVITY_TYPE: &str = "ActivityType";
    pub const TITLE: &str = "Title";
    pub const START_TIME_INTERVAL: &str = "StartTimeInterval";
    pub const FINISH_TIME_INTERVAL: &str = "FinishTimeInterval";
    pub const UUID: &str = "UUID";
    pub const DIAGNOSTIC_REPORT_FILE_NAME: &str = "DiagnosticReportFileName";
    pub const SUB_ACTIVITIES: &str = "SubActivities";
    pub const ATTACHMENTS: &str = "Attachments";
    pub const FILENAME: &str = "Filename";
    pub const FAILURE_SUMMARIES: &str = "FailureSummaries";
    pub const FILE_NAME: &str = "FileName";
    pub const MESSAGE: &str = "Message";
    pub const LINE_NUMBER: &str = "LineNumber";
    pub const PERFORMANCE_FAILURE: &str = "PerformanceFailure";

    pub const GROUP_CLASS: &str = "IDESchemeActionTestSummaryGroup";
    pub const TEST_CLASS: &str = "IDESchemeActionTestSummary";
    pub const ASSERTION_FAILURE_TYPE: &str = "com.apple.dt.xctest.activity-type.testAssertionFailure";
}
