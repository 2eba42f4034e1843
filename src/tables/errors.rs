use std::fmt;
use std::fmt::{Display, Formatter};

/// A representation of errors encountered while loading the name table.
#[derive(Debug)]
pub enum LoadingError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [csv::Error]
    Csv(csv::Error),
}

impl From<std::io::Error> for LoadingError {
    fn from(error: std::io::Error) -> Self {
        LoadingError::Io(error)
    }
}

impl From<csv::Error> for LoadingError {
    fn from(error: csv::Error) -> Self {
        LoadingError::Csv(error)
    }
}

impl Display for LoadingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoadingError::Io(error) => write!(f, "Could not read the name table: {}", error),
            LoadingError::Csv(error) => write!(f, "Malformed name table: {}", error),
        }
    }
}
