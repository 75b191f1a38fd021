use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-segment capacity for GSM 7-bit messages.
pub const GSM_SINGLE_SEGMENT: usize = 160;
/// Per-part capacity for concatenated GSM 7-bit messages.
pub const GSM_MULTI_SEGMENT: usize = 153;
/// Single-segment capacity for UCS-2 messages.
pub const UNICODE_SINGLE_SEGMENT: usize = 70;
/// Per-part capacity for concatenated UCS-2 messages.
pub const UNICODE_MULTI_SEGMENT: usize = 67;

/// Character-set regime a message is sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmsEncoding {
    #[serde(rename = "GSM")]
    Gsm,
    Unicode,
}

impl SmsEncoding {
    pub fn single_segment_capacity(&self) -> usize {
        match self {
            SmsEncoding::Gsm => GSM_SINGLE_SEGMENT,
            SmsEncoding::Unicode => UNICODE_SINGLE_SEGMENT,
        }
    }

    /// Capacity of each part once the message is split and carries a UDH.
    pub fn multi_segment_capacity(&self) -> usize {
        match self {
            SmsEncoding::Gsm => GSM_MULTI_SEGMENT,
            SmsEncoding::Unicode => UNICODE_MULTI_SEGMENT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SmsEncoding::Gsm => "GSM",
            SmsEncoding::Unicode => "Unicode",
        }
    }
}

impl fmt::Display for SmsEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of measuring one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsSegmentInfo {
    pub segments: usize,
    /// Length in UTF-16 code units.
    pub characters: usize,
    pub characters_per_segment: usize,
    pub encoding: SmsEncoding,
}

impl SmsSegmentInfo {
    pub fn is_multipart(&self) -> bool {
        self.segments > 1
    }

    /// Characters left before the current segment fills up. An exact multiple in
    /// the multipart case reports a whole empty segment.
    pub fn remaining_characters(&self) -> usize {
        if self.is_multipart() {
            self.characters_per_segment - (self.characters % self.characters_per_segment)
        } else {
            self.characters_per_segment - self.characters
        }
    }
}

impl fmt::Display for SmsSegmentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_multipart() {
            write!(f, "{} characters ({} SMS)", self.characters, self.segments)
        } else {
            write!(
                f,
                "{}/{} characters (1 SMS)",
                self.characters, self.characters_per_segment
            )
        }
    }
}
