use anyhow::Result;
use proptest::prelude::*;
use sms_meter::{
    calculate_sms_segments, format_sms_info, get_remaining_characters, requires_unicode,
    utf16_len, SmsEncoding, SmsSegmentInfo,
};

/// GSM 長度由單段跨入多段
#[test]
fn test_gsm_growth_from_153_to_307() -> Result<()> {
    let expectations = [(153, 1), (160, 1), (161, 2), (306, 2), (307, 3)];

    for (len, segments) in expectations {
        let info = calculate_sms_segments(&"a".repeat(len));
        assert_eq!(info.segments, segments, "length {}", len);
        assert_eq!(info.encoding, SmsEncoding::Gsm);
    }

    assert_eq!(calculate_sms_segments(&"a".repeat(307)).characters_per_segment, 153);
    Ok(())
}

#[test]
fn test_bengali_greeting_of_45_chars() -> Result<()> {
    let greeting = "শুভ সকাল".chars().cycle().take(45).collect::<String>();
    assert_eq!(utf16_len(&greeting), 45);

    let info = calculate_sms_segments(&greeting);
    assert_eq!(info.encoding, SmsEncoding::Unicode);
    assert_eq!(info.segments, 1);
    assert_eq!(info.characters_per_segment, 70);
    assert_eq!(get_remaining_characters(&greeting), 25);
    assert_eq!(format_sms_info(&greeting), "45/70 characters (1 SMS)");
    Ok(())
}

#[test]
fn test_134_bengali_chars_need_two_parts() -> Result<()> {
    let message = "ক".repeat(134);
    let info = calculate_sms_segments(&message);

    assert_eq!(
        info,
        SmsSegmentInfo {
            segments: 2,
            characters: 134,
            characters_per_segment: 67,
            encoding: SmsEncoding::Unicode,
        }
    );
    assert_eq!(format_sms_info(&message), "134 characters (2 SMS)");
    Ok(())
}

#[test]
fn test_emoji_pushes_message_into_unicode() -> Result<()> {
    let message = "Thanks! 😊";
    let info = calculate_sms_segments(message);

    assert_eq!(info.encoding, SmsEncoding::Unicode);
    assert_eq!(info.characters, 10);
    assert_eq!(get_remaining_characters(message), 60);

    // 69 ASCII + one astral emoji is 71 code units: two parts.
    let overflow = format!("{}😊", "a".repeat(69));
    let info = calculate_sms_segments(&overflow);
    assert_eq!(info.characters, 71);
    assert_eq!(info.segments, 2);
    Ok(())
}

#[test]
fn test_json_shape_matches_dashboard() -> Result<()> {
    let json = serde_json::to_value(calculate_sms_segments("Hello world"))?;
    assert_eq!(
        json,
        serde_json::json!({
            "segments": 1,
            "characters": 11,
            "charactersPerSegment": 160,
            "encoding": "GSM"
        })
    );
    Ok(())
}

proptest! {
    #[test]
    fn prop_segment_info_invariants(s in "\\PC{0,400}") {
        let info = calculate_sms_segments(&s);

        prop_assert!(info.segments >= 1);
        prop_assert_eq!(info.characters, s.encode_utf16().count());
        prop_assert_eq!(info.encoding == SmsEncoding::Unicode, requires_unicode(&s));
        prop_assert!(info.remaining_characters() <= info.characters_per_segment);
        prop_assert!(info.segments * info.characters_per_segment >= info.characters);
    }

    #[test]
    fn prop_unicode_iff_non_ascii(s in "\\PC{0,200}") {
        prop_assert_eq!(requires_unicode(&s), !s.is_ascii());
    }

    #[test]
    fn prop_appending_never_reduces_segments(base in "\\PC{0,300}", tail in "\\PC{0,200}") {
        let before = calculate_sms_segments(&base).segments;
        let after = calculate_sms_segments(&format!("{}{}", base, tail)).segments;
        prop_assert!(after >= before);
    }

    #[test]
    fn prop_ascii_segment_count(len in 0usize..2000) {
        let info = calculate_sms_segments(&"x".repeat(len));
        let expected = if len <= 160 { 1 } else { len.div_ceil(153) };
        prop_assert_eq!(info.segments, expected);
        prop_assert_eq!(info.encoding, SmsEncoding::Gsm);
    }
}
