use std::fmt;
use std::fmt::{Display, Formatter};

use crate::names::errors::NameError;
use crate::tables::errors::LoadingError;

/// The error type used by the generator.
/// Any of these aborts the run before the output file is touched.
#[derive(Debug)]
pub enum BuildError {
    /// The name table could not be loaded
    Loading(LoadingError),
    /// A row carried an unacceptable name
    Name(NameError),
    /// The generated module could not be written
    Io(std::io::Error),
}

impl From<LoadingError> for BuildError {
    fn from(error: LoadingError) -> Self {
        BuildError::Loading(error)
    }
}

impl From<NameError> for BuildError {
    fn from(error: NameError) -> Self {
        BuildError::Name(error)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(error: std::io::Error) -> Self {
        BuildError::Io(error)
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BuildError::Loading(error) => write!(f, "{}", error),
            BuildError::Name(error) => write!(f, "{}", error),
            BuildError::Io(error) => write!(f, "Could not write the generated module: {}", error),
        }
    }
}
