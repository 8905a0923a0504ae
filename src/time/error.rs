use std::fmt;

/// An error that occurred while converting a timestamp into milliseconds.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    NotFinite(String),
    Overflow(String),
}

impl ::std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NotFinite(ref value) => write!(f, "Value '{}' is not a finite number", value),
            Error::Overflow(ref value) => {
                write!(f, "Value '{}' does not fit into milliseconds range", value)
            }
        }
    }
}
