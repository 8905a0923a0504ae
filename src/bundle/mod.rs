//! Conversion of Xcode test summary bundles into report results.

pub mod activity;
pub mod discovery;
pub mod document;
pub mod error;
pub mod model;
pub mod reader;
pub mod test_tree;

#[cfg(test)]
pub(crate) mod fixture;

pub use self::error::{BundleError, NodeError};
pub use self::reader::{Reader, XcodeResultsReader};
