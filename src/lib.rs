pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{BillingConfig, TomlConfig};
pub use crate::core::credits::CreditEstimate;
pub use crate::core::encoding::{detect_encoding, requires_unicode, utf16_len};
pub use crate::core::segments::{calculate_sms_segments, format_sms_info, get_remaining_characters};
pub use domain::model::{SmsEncoding, SmsSegmentInfo};
pub use utils::error::{Result, SmsError};
