use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use self::model::{Attachment, TestResult};

pub mod model;

const RESULT_SUFFIX: &str = "-result.json";
const ATTACHMENT_SUFFIX: &str = "-attachment";

/// Receives the results assembled from a bundle.
pub trait ResultsVisitor {
    /// Called exactly once per resolved test.
    fn visit_test_result(&mut self, result: TestResult);

    /// Called once per existing attachment file, the returned handle is embedded into the step.
    /// `None` means the attachment could not be stored and is left out of the result.
    fn visit_attachment_file(&mut self, path: &Path) -> Option<Attachment>;
}

#[derive(Debug)]
pub enum WriteError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl ::std::error::Error for WriteError {}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WriteError::Io(ref err) => write!(f, "I/O error: {}", err),
            WriteError::Json(ref err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl From<io::Error> for WriteError {
    fn from(err: io::Error) -> Self {
        WriteError::Io(err)
    }
}

impl From<serde_json::Error> for WriteError {
    fn from(err: serde_json::Error) -> Self {
        WriteError::Json(err)
    }
}

/// Writes results and attachments into an Allure results directory.
#[derive(Debug)]
pub struct AllureResultsWriter {
    output: PathBuf,
}

impl AllureResultsWriter {
    pub fn new<P: Into<PathBuf>>(output: P) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    fn write_result(&self, result: &TestResult) -> Result<PathBuf, WriteError> {
        fs::create_dir_all(&self.output)?;
        let path = self
            .output
            .join(format!("{}{}", result.uuid().to_hyphenated(), RESULT_SUFFIX));
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, result)?;
        writer.flush()?;
        Ok(path)
    }

    fn copy_attachment(&self, path: &Path, source: &str) -> Result<u64, WriteError> {
        fs::create_dir_all(&self.output)?;
        Ok(fs::copy(path, self.output.join(source))?)
    }
}

impl ResultsVisitor for AllureResultsWriter {
    fn visit_test_result(&mut self, result: TestResult) {
        match self.write_result(&result) {
            Ok(path) => debug!("Result '{}' written to {}", result.item.name, path.display()),
            Err(e) => error!("Cannot write result '{}': {}", result.item.name, e),
        }
    }

    fn visit_attachment_file(&mut self, path: &Path) -> Option<Attachment> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();
        let source = format!(
            "{}{}{}",
            uuid::Uuid::new_v4().to_hyphenated(),
            ATTACHMENT_SUFFIX,
            extension
        );
        match self.copy_attachment(path, &source) {
            Ok(size) => trace!("Attachment {} copied as {} ({} bytes)", path.display(), source, size),
            Err(e) => {
                error!("Cannot copy attachment {}: {}", path.display(), e);
                return None;
            }
        }
        Some(Attachment {
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            r#type: Attachment::mime_of(path),
            source,
        })
    }
}

/// Keeps everything it is given in memory.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    pub results: Vec<TestResult>,
    pub attachments: Vec<PathBuf>,
}

impl ResultsVisitor for CollectingVisitor {
    fn visit_test_result(&mut self, result: TestResult) {
        self.results.push(result);
    }

    fn visit_attachment_file(&mut self, path: &Path) -> Option<Attachment> {
        self.attachments.push(path.to_path_buf());
        Some(Attachment {
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            r#type: Attachment::mime_of(path),
            source: path.to_string_lossy().into_owned(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::model::{ExecutableItem, Status};
    use super::*;

    #[test]
    fn test_writer_creates_result_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("allure-results");
        let mut writer = AllureResultsWriter::new(&output);
        let result = TestResult::new(
            uuid::Uuid::new_v4(),
            ExecutableItem::new("testLogin()", Status::Passed),
        );
        let uuid = result.uuid();

        writer.visit_test_result(result);

        let path = output.join(format!("{}-result.json", uuid.to_hyphenated()));
        let written: serde_json::Value =
            serde_json::from_reader(File::open(path).unwrap()).unwrap();
        assert_eq!(written["name"], "testLogin()");
        assert_eq!(written["status"], "passed");
    }

    #[test]
    fn test_writer_copies_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Screenshot_1.png");
        fs::write(&source, b"png").unwrap();
        let output = dir.path().join("out");
        let mut writer = AllureResultsWriter::new(&output);

        let attachment = writer.visit_attachment_file(&source).unwrap();

        assert_eq!(attachment.name, "Screenshot_1.png");
        assert_eq!(attachment.r#type, mime::IMAGE_PNG);
        assert!(attachment.source.ends_with("-attachment.png"));
        assert_eq!(fs::read(output.join(&attachment.source)).unwrap(), b"png");
    }

    #[test]
    fn test_writer_skips_attachment_it_cannot_copy() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = AllureResultsWriter::new(dir.path());

        let attachment = writer.visit_attachment_file(&dir.path().join("gone.txt"));

        assert_eq!(attachment, None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
