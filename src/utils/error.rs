use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No message text was provided")]
    MissingInputError,

    #[error("Insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u64, available: u64 },
}

impl SmsError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SmsError::IoError(e) => format!("Could not read input: {}", e),
            SmsError::SerializationError(_) => "Failed to render output as JSON".to_string(),
            SmsError::ConfigParseError { .. } => "The configuration file is not valid TOML".to_string(),
            SmsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            SmsError::MissingInputError => "No message to measure".to_string(),
            SmsError::InsufficientCredits {
                required,
                available,
            } => format!(
                "This send needs {} credits but only {} are available",
                required, available
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SmsError::IoError(_) => "Check that the input file exists and is readable",
            SmsError::SerializationError(_) => "Retry with --format text",
            SmsError::ConfigParseError { .. } => "Fix the TOML syntax in the config file",
            SmsError::InvalidConfigValueError { .. } => "Correct the highlighted setting and retry",
            SmsError::MissingInputError => "Pass the message as an argument, with --file, or on stdin",
            SmsError::InsufficientCredits { .. } => {
                "Top up the balance, shorten the message, or reduce the recipient list"
            }
        }
    }

    /// Process exit status used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            SmsError::InsufficientCredits { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_credits_exit_code() {
        let err = SmsError::InsufficientCredits {
            required: 10,
            available: 4,
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "Insufficient credits: 10 required, 4 available"
        );
        assert!(err.user_friendly_message().contains("10 credits"));
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = SmsError::InvalidConfigValueError {
            field: "recipients".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(SmsError::MissingInputError.exit_code(), 1);
    }
}
