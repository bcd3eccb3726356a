/// Errors that can occur across the Herald pipelines.
///
/// Each variant wraps a specific error domain. Library crates use this type
/// directly; the binary crate converts to `miette` diagnostics at the boundary.
///
/// # Examples
///
/// ```
/// use herald_core::HeraldError;
///
/// let err = HeraldError::Config("OPENAI_API_KEY not set".into());
/// assert!(err.to_string().contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HeraldError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Completion API or response error.
    #[error("LLM error: {0}")]
    Llm(String),

    /// GitHub publish failure.
    #[error("publish error: {0}")]
    Publish(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HeraldError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = HeraldError::Config("PR_NUMBER not set".into());
        assert_eq!(err.to_string(), "configuration error: PR_NUMBER not set");
    }

    #[test]
    fn publish_error_displays_message() {
        let err = HeraldError::Publish("connection refused".into());
        assert!(err.to_string().starts_with("publish error"));
    }
}
