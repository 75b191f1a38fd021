pub mod credits;
pub mod encoding;
pub mod segments;

pub use crate::domain::model::{SmsEncoding, SmsSegmentInfo};
pub use crate::utils::error::Result;
