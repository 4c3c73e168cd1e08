//! Hex code point entry

use crate::block::DisplayBlock;

/// Parse an unsigned 32-bit hex number
///
/// Surrounding whitespace and a `0x`/`0X` prefix are accepted. Signs, empty
/// input and overflowing values are rejected.
pub fn parse_hex(text: &str) -> Option<u32> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Index of the first display block containing `code_point`
pub fn find_block(blocks: &[DisplayBlock], code_point: u32) -> Option<usize> {
    blocks.iter().position(|b| b.contains(code_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::UnicodeBlock;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("500"), Some(0x500));
        assert_eq!(parse_hex("1f600"), Some(0x1F600));
        assert_eq!(parse_hex(" 0x7F "), Some(0x7F));
        assert_eq!(parse_hex("FFFFFFFF"), Some(u32::MAX));
    }

    #[test]
    fn test_parse_hex_rejects() {
        assert_eq!(parse_hex("zz"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("0x"), None);
        assert_eq!(parse_hex("+5"), None);
        assert_eq!(parse_hex("100000000"), None);
    }

    #[test]
    fn test_find_block() {
        let blocks = UnicodeBlock::new(0, 0xFFF, "Test").unwrap().expand();
        assert_eq!(find_block(&blocks, 0x500), Some(1));
        assert_eq!(find_block(&blocks, 0xFFF), Some(3));
        assert_eq!(find_block(&blocks, 0x1000), None);
    }

    #[test]
    fn test_first_match_wins() {
        let mut blocks = UnicodeBlock::new(0, 0x7F, "A").unwrap().expand();
        blocks.extend(UnicodeBlock::new(0x40, 0xFF, "B").unwrap().expand());
        assert_eq!(find_block(&blocks, 0x50), Some(0));
    }
}
