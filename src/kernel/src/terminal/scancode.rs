//! Scancode set 1 to ASCII translation.
//!
//! Unshifted US layout only. Modifier keys, function keys and the keypad
//! are left unmapped.

use marsh_common::keyboard::is_release;

/// Sentinel stored in [`SCANCODE_MAP`] for keys with no character.
pub const UNMAPPED: u8 = 0;

/// Backspace as produced by the translator.
pub const BACKSPACE: char = '\x08';

/// Characters for make codes `0x00..=0x39`.
const DEFINED: [u8; 58] = [
    UNMAPPED, 0x1b, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', 0x08,
    b'\t', b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n',
    UNMAPPED, b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', b'`',
    UNMAPPED, b'\\', b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.', b'/', UNMAPPED,
    b'*', UNMAPPED, b' ',
];

const fn build_map() -> [u8; 128] {
    let mut map = [UNMAPPED; 128];
    let mut i = 0;
    while i < DEFINED.len() {
        map[i] = DEFINED[i];
        i += 1;
    }
    map
}

/// Make code to ASCII table, indexed by raw scancode.
pub static SCANCODE_MAP: [u8; 128] = build_map();

/// Translates a raw scancode into a character.
///
/// Returns `None` for key releases (high bit set) and for keys that have
/// no mapping.
pub fn translate(scancode: u8) -> Option<char> {
    if is_release(scancode) {
        return None;
    }
    SCANCODE_MAP
        .get(scancode as usize)
        .copied()
        .filter(|&byte| byte != UNMAPPED)
        .map(char::from)
}

/// Finds the make code that produces `ch`.
pub fn scancode_for(ch: char) -> Option<u8> {
    if !ch.is_ascii() || ch == '\0' {
        return None;
    }
    SCANCODE_MAP
        .iter()
        .position(|&byte| byte == ch as u8)
        .map(|index| index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_codes_never_translate() {
        for scancode in 0x80..=0xffu8 {
            assert_eq!(translate(scancode), None, "scancode {:#04x}", scancode);
        }
    }

    #[test]
    fn test_mapped_codes_translate_to_table_entry() {
        for scancode in 0..0x80u8 {
            let expected = match SCANCODE_MAP[scancode as usize] {
                UNMAPPED => None,
                byte => Some(byte as char),
            };
            assert_eq!(translate(scancode), expected);
        }
    }

    #[test]
    fn test_known_keys() {
        assert_eq!(translate(0x1e), Some('a'));
        assert_eq!(translate(0x10), Some('q'));
        assert_eq!(translate(0x02), Some('1'));
        assert_eq!(translate(0x1c), Some('\n'));
        assert_eq!(translate(0x0e), Some(BACKSPACE));
        assert_eq!(translate(0x39), Some(' '));
        assert_eq!(translate(0x01), Some('\x1b'));
    }

    #[test]
    fn test_modifiers_and_high_keys_are_unmapped() {
        // left ctrl, left shift, right shift, alt, caps lock, F1
        for scancode in [0x1d, 0x2a, 0x36, 0x38, 0x3a, 0x3b, 0x7f] {
            assert_eq!(translate(scancode), None);
        }
    }

    #[test]
    fn test_scancode_for_inverts_translate() {
        for ch in "about help 0123456789-=[];'`\\,./*".chars() {
            let scancode = scancode_for(ch).expect("mapped");
            assert_eq!(translate(scancode), Some(ch));
        }
        assert_eq!(scancode_for('A'), None);
        assert_eq!(scancode_for('\0'), None);
        assert_eq!(scancode_for('é'), None);
    }
}
