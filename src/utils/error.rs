use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("System error: {0}")]
    System(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<AppError>() {
        Some(AppError::InvalidArgument(msg)) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
            eprintln!("   {}", OutputStyle::muted("Run 'tfplan --help' for usage."));
        }
        Some(AppError::Config(msg)) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        _ => {
            // Include the context chain so "while reading plan.json" survives
            eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::Parse("bad json".to_string()).to_string(),
            "Parse error: bad json"
        );
        assert_eq!(
            AppError::InvalidArgument("no file".to_string()).to_string(),
            "Invalid argument: no file"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = AppError::Config("title empty".to_string()).into();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Config(_))
        ));
    }
}
