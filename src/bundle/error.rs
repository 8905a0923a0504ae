use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure of a whole summary file or input directory. The file is skipped.
#[derive(Debug)]
pub enum BundleError {
    Io(io::Error),
    Plist(plist::Error),
    Pattern(glob::PatternError),
    InvalidRoot(PathBuf),
}

impl ::std::error::Error for BundleError {}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BundleError::Io(ref err) => write!(f, "I/O error: {}", err),
            BundleError::Plist(ref err) => write!(f, "malformed property list: {}", err),
            BundleError::Pattern(ref err) => write!(f, "invalid results pattern: {}", err),
            BundleError::InvalidRoot(ref path) => {
                write!(f, "root of {} is not a dictionary", path.display())
            }
        }
    }
}

impl From<io::Error> for BundleError {
    fn from(err: io::Error) -> Self {
        BundleError::Io(err)
    }
}

impl From<plist::Error> for BundleError {
    fn from(err: plist::Error) -> Self {
        BundleError::Plist(err)
    }
}

impl From<glob::PatternError> for BundleError {
    fn from(err: glob::PatternError) -> Self {
        BundleError::Pattern(err)
    }
}

/// A single tree node that could not be turned into a result. Its siblings are still processed.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeError {
    OrphanTest { name: Option<String> },
    UnknownObjectClass(Option<String>),
    TooDeep { node: &'static str, depth: usize },
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NodeError::OrphanTest { ref name } => write!(
                f,
                "test '{}' has no enclosing group",
                name.as_deref().unwrap_or("<unnamed>")
            ),
            NodeError::UnknownObjectClass(Some(ref class)) => {
                write!(f, "unrecognized test object class '{}'", class)
            }
            NodeError::UnknownObjectClass(None) => write!(f, "missing test object class"),
            NodeError::TooDeep { node, depth } => {
                write!(f, "{} nested deeper than {} levels dropped", node, depth)
            }
        }
    }
}
