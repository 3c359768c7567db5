use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    ShapeMismatch { expected: usize, actual: usize },
    InvalidBinSpec(&'static str),
    EdgeCoverage { lo: usize, hi: usize },
    NonFiniteCounts,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} elements, got {actual}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected side {expected}, got {actual}")
            }
            Self::InvalidBinSpec(reason) => write!(f, "invalid bin spec: {reason}"),
            Self::EdgeCoverage { lo, hi } => {
                write!(f, "rounded bin edges do not cover [{lo}, {hi}] exactly")
            }
            Self::NonFiniteCounts => write!(f, "count matrix contains non-finite entries"),
        }
    }
}

impl std::error::Error for Error {}
