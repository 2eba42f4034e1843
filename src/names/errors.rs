use std::fmt;
use std::fmt::{Display, Formatter};

/// A representation of errors encountered while validating emoji names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Indicates that a name does not match the allowed name pattern
    InvalidName(String),
    /// Indicates that a name has already been claimed by an earlier entry
    DuplicateName(String),
}

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NameError::InvalidName(name) => write!(f, "Invalid name: {:?}", name),
            NameError::DuplicateName(name) => write!(f, "Duplicate name: {:?}", name),
        }
    }
}
