use crate::config::toml_config::{TomlConfig, OUTPUT_FORMATS};
use crate::utils::error::{Result, SmsError};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::{IsTerminal, Read};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sms-meter")]
#[command(about = "Count SMS segments and estimate bulk-send credits")]
pub struct CliConfig {
    /// Message text. Read from --file or stdin when omitted
    pub message: Option<String>,

    #[arg(short, long, help = "Read the message from a file")]
    pub file: Option<String>,

    #[arg(short, long, default_value = "1")]
    pub recipients: usize,

    #[arg(short, long, help = "Available credits; the send is checked against it")]
    pub balance: Option<u64>,

    #[arg(short, long, help = "TOML file with [billing] and [output] settings")]
    pub config: Option<String>,

    #[arg(long, help = "Output format: text or json")]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn load_toml(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// CLI flag first, then the config file, then plain text.
    pub fn output_format<'a>(&'a self, toml: &'a TomlConfig) -> &'a str {
        self.format
            .as_deref()
            .or_else(|| toml.output_format())
            .unwrap_or("text")
    }

    pub fn balance(&self, toml: &TomlConfig) -> Option<u64> {
        self.balance.or(toml.billing.balance)
    }

    pub fn read_message(&self) -> Result<String> {
        if self.message.is_none() && self.file.is_none() {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(SmsError::MissingInputError);
            }
            return self.read_message_from(stdin.lock());
        }
        self.read_message_from(std::io::empty())
    }

    /// Resolves the message from the positional argument, then `--file`, then `reader`.
    pub fn read_message_from<R: Read>(&self, mut reader: R) -> Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        let raw = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                reader.read_to_string(&mut buf)?;
                buf
            }
        };

        Ok(strip_trailing_newline(raw))
    }
}

/// Drops one trailing `\n` or `\r\n` left by editors and `echo`.
pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.message.is_some() && self.file.is_some() {
            return Err(SmsError::InvalidConfigValueError {
                field: "file".to_string(),
                value: self.file.clone().unwrap_or_default(),
                reason: "Pass either a message argument or --file, not both".to_string(),
            });
        }

        if let Some(file) = &self.file {
            validate_path("file", file)?;
        }

        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }

        if let Some(format) = &self.format {
            validate_one_of("format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }
}
