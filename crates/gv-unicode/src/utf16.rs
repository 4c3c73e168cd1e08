//! UTF-16 surrogate handling

/// Check for a high (leading) surrogate unit
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// Check for a low (trailing) surrogate unit
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combine a surrogate pair into a scalar value
pub fn surrogate_to_ucs4(high: u16, low: u16) -> u32 {
    0x10000 + (((high as u32) - 0xD800) << 10) + ((low as u32) - 0xDC00)
}

/// Code point at UTF-16 index `i`
///
/// A high surrogate followed by a low surrogate yields the combined scalar;
/// any other unit, lone surrogates included, is returned as is. Returns
/// `None` when `i` is out of bounds.
pub fn code_point_at(units: &[u16], i: usize) -> Option<u32> {
    let unit = *units.get(i)?;
    if is_high_surrogate(unit) {
        if let Some(&low) = units.get(i + 1) {
            if is_low_surrogate(low) {
                return Some(surrogate_to_ucs4(unit, low));
            }
        }
    }
    Some(unit as u32)
}

/// Append a code point as one or two UTF-16 units
///
/// Values past U+10FFFF are not representable and are skipped.
pub fn push_code_point(units: &mut Vec<u16>, code_point: u32) {
    match code_point {
        0..=0xFFFF => units.push(code_point as u16),
        0x10000..=0x10FFFF => {
            let v = code_point - 0x10000;
            units.push(0xD800 + (v >> 10) as u16);
            units.push(0xDC00 + (v & 0x3FF) as u16);
        }
        _ => {}
    }
}

/// Number of UTF-16 units needed for a code point
pub fn len_utf16(code_point: u32) -> usize {
    if code_point > 0xFFFF { 2 } else { 1 }
}
