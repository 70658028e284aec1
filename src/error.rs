//! Crate-level error types.

use std::fmt;

/// Errors produced by the molframe crate.
///
/// Geometry never fails; these only surface at the data boundary (validating
/// a flat coordinate array) and in options I/O.
#[derive(Debug)]
pub enum MolframeError {
    /// Flat coordinate array whose length is not a multiple of 3.
    MalformedPositions {
        /// Length of the rejected array.
        len: usize,
    },
    /// Per-atom padding array not parallel to the atom count.
    PaddingLength {
        /// Number of atoms in the position array.
        atoms: usize,
        /// Number of padding entries supplied.
        padding: usize,
    },
    /// Coordinate file token that is not a number.
    CoordinateParse {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MolframeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPositions { len } => write!(
                f,
                "position array length {len} is not a multiple of 3"
            ),
            Self::PaddingLength { atoms, padding } => write!(
                f,
                "padding has {padding} entries but there are {atoms} atoms"
            ),
            Self::CoordinateParse { line, token } => {
                write!(f, "line {line}: {token:?} is not a coordinate")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MolframeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolframeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bad_length() {
        let err = MolframeError::MalformedPositions { len: 7 };
        assert_eq!(
            err.to_string(),
            "position array length 7 is not a multiple of 3"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err = MolframeError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(MolframeError::OptionsParse("x".to_owned()).source().is_none());
    }
}
