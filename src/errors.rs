use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleError {
    NonPositiveLength(f64),
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::NonPositiveLength(length) => {
                write!(f, "Length scale must be positive, but found: {:e} m", length)
            }
        }
    }
}

impl Error for ScaleError {}
