//! In-memory summary documents for tests.

use plist::{Dictionary, Value};

use crate::configuration::constants::xcode::*;

pub trait With {
    fn with<V: Into<Value>>(self, key: &str, value: V) -> Self;
    fn with_list(self, key: &str, items: Vec<Dictionary>) -> Self;
}

impl With for Dictionary {
    fn with<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.insert(key.to_owned(), value.into());
        self
    }

    fn with_list(self, key: &str, items: Vec<Dictionary>) -> Self {
        let items = items.into_iter().map(Value::Dictionary).collect::<Vec<_>>();
        self.with(key, Value::Array(items))
    }
}

pub fn document(summaries: Vec<Dictionary>) -> Dictionary {
    Dictionary::new().with_list(TESTABLE_SUMMARIES, summaries)
}

pub fn summary(name: &str, tests: Vec<Dictionary>) -> Dictionary {
    Dictionary::new()
        .with(TEST_NAME, name)
        .with_list(TESTS, tests)
}

pub fn group(name: &str, subtests: Vec<Dictionary>) -> Dictionary {
    Dictionary::new()
        .with(TEST_OBJECT_CLASS, GROUP_CLASS)
        .with(TEST_NAME, name)
        .with_list(SUBTESTS, subtests)
}

pub fn test_case(name: &str, activities: Vec<Dictionary>) -> Dictionary {
    Dictionary::new()
        .with(TEST_OBJECT_CLASS, TEST_CLASS)
        .with(TEST_NAME, name)
        .with_list(ACTIVITY_SUMMARIES, activities)
}

pub fn activity(title: &str, start: f64, finish: Option<f64>) -> Dictionary {
    let node = Dictionary::new()
        .with(TITLE, title)
        .with(ACTIVITY_TYPE, "com.apple.dt.xctest.activity-type.internal")
        .with(START_TIME_INTERVAL, start);
    match finish {
        Some(finish) => node.with(FINISH_TIME_INTERVAL, finish),
        None => node,
    }
}

pub fn crash(title: &str, start: f64) -> Dictionary {
    activity(title, start, None).with(DIAGNOSTIC_REPORT_FILE_NAME, "App_2020-01-01.crash")
}

pub fn assertion_failure(title: &str, start: f64) -> Dictionary {
    activity(title, start, None).with(ACTIVITY_TYPE, ASSERTION_FAILURE_TYPE)
}

pub fn attachment(filename: &str) -> Dictionary {
    Dictionary::new().with(FILENAME, filename)
}
