use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact book is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_parse_error_message() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err = AppError::from(bad_json);

        assert!(format!("{}", err).starts_with("Contact book is not valid JSON: "));
    }

    #[test]
    fn confirm_parse_command_message() {
        let err = AppError::ParseCommand("x".to_string());

        assert_eq!(format!("{}", err), "Unrecognized command: 'x'");
    }

    #[test]
    fn io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io_err.into();

        assert!(matches!(err, AppError::Io(_)));
    }
}
