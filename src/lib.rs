//! Converts Xcode test summaries (`*TestSummaries.plist`) into Allure results.

#[macro_use]
extern crate log;

pub mod bundle;
pub mod configuration;
pub mod reporter;
pub mod time;

pub use self::bundle::{Reader, XcodeResultsReader};
pub use self::configuration::settings::Settings;
pub use self::reporter::allure::{AllureResultsWriter, CollectingVisitor, ResultsVisitor};
