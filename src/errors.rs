use std::fmt;

#[derive(Debug)]
pub enum ExplorerError {
    /// Filesystem operation error
    Fs(String),
    /// Path resolution error
    Path(String),
    /// Configuration error
    Config(String),
    /// Audit logging error
    Log(String),
    /// Serialization error
    Serialization(String),
    /// Menu input that is not one of the listed choices
    InvalidChoice(String),
    /// Target of an operation does not exist
    NotFound(String),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerError::Fs(msg) => write!(f, "Filesystem error: {msg}"),
            ExplorerError::Path(msg) => write!(f, "Path error: {msg}"),
            ExplorerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ExplorerError::Log(msg) => write!(f, "Logging error: {msg}"),
            ExplorerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ExplorerError::InvalidChoice(input) => write!(f, "Invalid choice: {input:?}"),
            ExplorerError::NotFound(what) => write!(f, "Not found: {what}"),
            ExplorerError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for ExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExplorerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl ExplorerError {
    /// The bare message without the category prefix, as shown to the
    /// interactive user after an operation-specific lead-in.
    pub fn message(&self) -> String {
        match self {
            ExplorerError::Fs(msg)
            | ExplorerError::Path(msg)
            | ExplorerError::Config(msg)
            | ExplorerError::Log(msg)
            | ExplorerError::Serialization(msg)
            | ExplorerError::NotFound(msg) => msg.clone(),
            ExplorerError::InvalidChoice(input) => format!("invalid choice {input:?}"),
            ExplorerError::Io(err) => err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            ExplorerError::NotFound(_) => true,
            ExplorerError::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl From<std::io::Error> for ExplorerError {
    fn from(err: std::io::Error) -> Self {
        ExplorerError::Io(err)
    }
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::Serialization(err.to_string())
    }
}

impl PartialEq for ExplorerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExplorerError::Fs(a), ExplorerError::Fs(b)) => a == b,
            (ExplorerError::Path(a), ExplorerError::Path(b)) => a == b,
            (ExplorerError::Config(a), ExplorerError::Config(b)) => a == b,
            (ExplorerError::Log(a), ExplorerError::Log(b)) => a == b,
            (ExplorerError::Serialization(a), ExplorerError::Serialization(b)) => a == b,
            (ExplorerError::InvalidChoice(a), ExplorerError::InvalidChoice(b)) => a == b,
            (ExplorerError::NotFound(a), ExplorerError::NotFound(b)) => a == b,
            // std::io::Error has no PartialEq, compare kind and message
            (ExplorerError::Io(a), ExplorerError::Io(b)) => {
                a.kind() == b.kind() && a.to_string() == b.to_string()
            }
            _ => false,
        }
    }
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let err: ExplorerError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ExplorerError::Io(_)));
        assert!(err.is_not_found());
        assert_eq!(err.message(), "gone");
        assert_eq!(format!("{err}"), "I/O error: gone");
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ExplorerError = parse_err.into();
        assert!(matches!(err, ExplorerError::Serialization(_)));
    }

    #[test]
    fn test_invalid_choice_display() {
        let err = ExplorerError::InvalidChoice("abc".to_string());
        assert_eq!(format!("{err}"), "Invalid choice: \"abc\"");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_partial_eq_io_compares_kind_and_message() {
        let a = ExplorerError::Io(io::Error::new(io::ErrorKind::Other, "x"));
        let b = ExplorerError::Io(io::Error::new(io::ErrorKind::Other, "x"));
        let c = ExplorerError::Io(io::Error::new(io::ErrorKind::NotFound, "x"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(ExplorerError::Fs("x".into()), ExplorerError::Path("x".into()));
    }
}
