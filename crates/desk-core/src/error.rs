use thiserror::Error;

/// All errors produced by the hospital desk.
///
/// Empty queues, unknown menu choices and unreadable patient counts are not
/// errors; they are handled as ordinary session branches. Only the terminal
/// itself can fail.
#[derive(Error, Debug)]
pub enum DeskError {
    /// An error originating from the terminal layer (prompting, flushing).
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error on stdin / stdout.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the desk crates.
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_terminal() {
        let err = DeskError::Terminal("stdout closed".to_string());
        assert_eq!(err.to_string(), "Terminal error: stdout closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err: DeskError = io_err.into();
        assert!(matches!(err, DeskError::Io(_)));
        assert!(err.to_string().contains("pipe gone"));
    }
}
