use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "name", content = "value")]
pub enum Label {
    Suite(String),
    TestClass(String),
    Package(String),
    ResultFormat(String),
}
