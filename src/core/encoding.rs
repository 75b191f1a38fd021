use crate::domain::model::SmsEncoding;

const BENGALI: (u32, u32) = (0x0980, 0x09FF);

// Emoticons, misc symbols & pictographs, transport & map, regional indicators.
const EMOJI_BLOCKS: [(u32, u32); 4] = [
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
];

fn in_block(code: u32, (start, end): (u32, u32)) -> bool {
    (start..=end).contains(&code)
}

fn forces_unicode(c: char) -> bool {
    let code = c as u32;
    code >= 128
        || in_block(code, BENGALI)
        || EMOJI_BLOCKS.iter().any(|&block| in_block(code, block))
}

/// Whether `message` has to be sent as UCS-2. An empty message stays GSM.
pub fn requires_unicode(message: &str) -> bool {
    message.chars().any(forces_unicode)
}

pub fn detect_encoding(message: &str) -> SmsEncoding {
    if requires_unicode(message) {
        SmsEncoding::Unicode
    } else {
        SmsEncoding::Gsm
    }
}

/// Length in UTF-16 code units; astral characters count twice.
pub fn utf16_len(message: &str) -> usize {
    message.chars().map(char::len_utf16).sum()
}
