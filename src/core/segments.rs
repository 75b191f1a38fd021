use crate::core::encoding::{detect_encoding, utf16_len};
use crate::domain::model::SmsSegmentInfo;

/// Measures `message`: encoding, UTF-16 length, segment count and per-segment capacity.
///
/// Messages that fit a single segment get the full 160/70 budget; longer ones are
/// split into parts of 153/67 to leave room for the concatenation header.
pub fn calculate_sms_segments(message: &str) -> SmsSegmentInfo {
    let characters = utf16_len(message);
    let encoding = detect_encoding(message);

    let single = encoding.single_segment_capacity();
    let (segments, characters_per_segment) = if characters <= single {
        (1, single)
    } else {
        let multi = encoding.multi_segment_capacity();
        (characters.div_ceil(multi), multi)
    };

    tracing::trace!(characters, segments, %encoding, "measured sms");

    SmsSegmentInfo {
        segments,
        characters,
        characters_per_segment,
        encoding,
    }
}

/// One-line counter text, e.g. `"11/160 characters (1 SMS)"`.
pub fn format_sms_info(message: &str) -> String {
    calculate_sms_segments(message).to_string()
}

pub fn get_remaining_characters(message: &str) -> usize {
    calculate_sms_segments(message).remaining_characters()
}
