//! Error type shared by every fallible bracket operation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by seeding, layout and drawing.
#[derive(Debug, Error)]
pub enum BracketError {
    /// Bracket size other than 16 or 32.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Entrant count mismatch, unknown seed, malformed roster.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Logo image path does not resolve.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other failure while reading a file.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BracketError>;

impl BracketError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = BracketError::invalid_configuration("bracket size 12 is not supported");
        assert_eq!(
            e.to_string(),
            "invalid configuration: bracket size 12 is not supported"
        );
        let e = BracketError::FileNotFound(PathBuf::from("logo.png"));
        assert_eq!(e.to_string(), "file not found: logo.png");
    }

    #[test]
    fn test_io_source_is_kept() {
        use std::error::Error as _;
        let e = BracketError::Io {
            path: PathBuf::from("x.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("cannot read 'x.png'"));
    }
}
