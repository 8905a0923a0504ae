use std::path::Path;

use crate::bundle::discovery::list_results;
use crate::bundle::document::load_document;
use crate::bundle::error::BundleError;
use crate::bundle::model::TestDocument;
use crate::bundle::test_tree::TestTreeWalker;
use crate::configuration::settings::Settings;
use crate::reporter::allure::ResultsVisitor;

/// Source of test results for the report.
pub trait Reader {
    /// Feeds every result found in `directory` to `visitor`. Never fails; unreadable files
    /// and nodes only reduce the number of results.
    fn read_results(&self, settings: &Settings, visitor: &mut dyn ResultsVisitor, directory: &Path);
}

/// Reads the `*TestSummaries.plist` files written by `xcodebuild test`.
#[derive(Debug, Default)]
pub struct XcodeResultsReader;

impl Reader for XcodeResultsReader {
    fn read_results(&self, settings: &Settings, visitor: &mut dyn ResultsVisitor, directory: &Path) {
        let files = match list_results(directory, &settings.results_pattern) {
            Ok(files) => files,
            Err(e) => {
                error!("Could not read data from {}: {}", directory.display(), e);
                return;
            }
        };
        info!("Found {} summary files in {}", files.len(), directory.display());
        for file in files {
            match self.process_file(settings, visitor, &file) {
                Ok(emitted) => info!("Parsed {} tests from {}", emitted, file.display()),
                Err(e) => error!("Could not parse file {}: {}", file.display(), e),
            }
        }
    }
}

impl XcodeResultsReader {
    /// Emits the results of one summary file and returns how many were emitted.
    pub fn process_file(
        &self,
        settings: &Settings,
        visitor: &mut dyn ResultsVisitor,
        file: &Path,
    ) -> Result<usize, BundleError> {
        debug!("Parsing file {}", file.display());
        let root = load_document(file)?;
        let mut skipped = Vec::new();
        let document = TestDocument::extract(&root, settings.max_depth, &mut skipped);
        drop(root);

        let attachments_dir = file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&settings.attachments_dir);
        let mut walker = TestTreeWalker::new(&attachments_dir, &settings.result_format, visitor);
        let mut emitted = 0;
        for summary in &document.summaries {
            emitted += walker.walk(summary, &mut skipped);
        }
        for node in &skipped {
            warn!("Skipped node in {}: {}", file.display(), node);
        }
        Ok(emitted)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bundle::fixture::*;
    use crate::reporter::allure::model::Status;
    use crate::reporter::allure::{AllureResultsWriter, CollectingVisitor};
    use plist::{Dictionary, Value};
    use std::fs;

    fn write_summary(path: &Path, root: Dictionary) {
        Value::Dictionary(root).to_file_xml(path).unwrap();
    }

    fn login_suite() -> Dictionary {
        document(vec![summary(
            "AppTests",
            vec![group(
                "LoginTests",
                vec![
                    test_case(
                        "testLogin()",
                        vec![activity("Screenshot", 1.0, Some(2.0))
                            .with_list("Attachments", vec![attachment("Screenshot_1.png")])],
                    ),
                    test_case("testLogout()", vec![assertion_failure("Logout failed", 3.0)]),
                ],
            )],
        )])
    }

    #[test]
    fn test_reads_every_summary_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_summary(&dir.path().join("1_TestSummaries.plist"), login_suite());
        write_summary(&dir.path().join("2_TestSummaries.plist"), login_suite());
        fs::create_dir(dir.path().join("Attachments")).unwrap();
        fs::write(dir.path().join("Attachments/Screenshot_1.png"), b"png").unwrap();
        let mut visitor = CollectingVisitor::default();

        XcodeResultsReader.read_results(&Settings::default(), &mut visitor, dir.path());

        assert_eq!(visitor.results.len(), 4);
        assert_eq!(
            visitor.attachments,
            vec![
                dir.path().join("Attachments/Screenshot_1.png"),
                dir.path().join("Attachments/Screenshot_1.png")
            ]
        );
        assert_eq!(visitor.results[1].item.status, Status::Broken);
        assert_eq!(visitor.results[1].item.status_message(), Some("Logout failed"));
    }

    #[test]
    fn test_broken_file_does_not_stop_siblings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1_TestSummaries.plist"), "<plist><dict>").unwrap();
        write_summary(&dir.path().join("2_TestSummaries.plist"), login_suite());
        let mut visitor = CollectingVisitor::default();

        XcodeResultsReader.read_results(&Settings::default(), &mut visitor, dir.path());

        assert_eq!(visitor.results.len(), 2);
        assert!(visitor.attachments.is_empty());
    }

    #[test]
    fn test_missing_directory_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut visitor = CollectingVisitor::default();

        XcodeResultsReader.read_results(
            &Settings::default(),
            &mut visitor,
            &dir.path().join("absent"),
        );

        assert!(visitor.results.is_empty());
    }

    #[test]
    fn test_process_file_reports_count_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Run_TestSummaries.plist");
        write_summary(&path, login_suite());
        let mut visitor = CollectingVisitor::default();

        let emitted = XcodeResultsReader
            .process_file(&Settings::default(), &mut visitor, &path)
            .unwrap();
        assert_eq!(emitted, 2);

        let missing = dir.path().join("Missing_TestSummaries.plist");
        assert!(XcodeResultsReader
            .process_file(&Settings::default(), &mut visitor, &missing)
            .is_err());
    }

    #[test]
    fn test_results_written_as_allure_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Logs");
        fs::create_dir(&input).unwrap();
        write_summary(&input.join("Run_TestSummaries.plist"), login_suite());
        let output = dir.path().join("allure-results");
        let mut writer = AllureResultsWriter::new(&output);

        XcodeResultsReader.read_results(&Settings::default(), &mut writer, &input);

        let written = fs::read_dir(&output)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with("-result.json"))
            .count();
        assert_eq!(written, 2);
    }
}
