//! Decoder for the proprietary 8-bit text encoding used in Red/Blue.
//!
//! Printable glyphs live in two disjoint byte ranges; everything outside
//! them (control codes, tile indices) has no textual meaning and decodes
//! to [`UNKNOWN_GLYPH`]. A glyph may expand to more than one character,
//! so decoded text can be longer than its byte source.

/// Glyphs for bytes `0x80..=0xBF`: Latin letters plus bracket,
/// punctuation and contraction glyphs.
pub const GLYPHS_80_BF: [&str; 64] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
    "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "(", ")", " :", " ;", "[", "]",
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
    "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "é", "'d", "'l", "'s", "'t", "'v",
];

/// Glyphs for bytes `0xE0..=0xFF`: punctuation, UI symbols and digits.
pub const GLYPHS_E0_FF: [&str; 32] = [
    "'", "Pk", "Mn", "-", "'r", "'m", " ?", " !", ".", "ァ", "ゥ", "ェ", "▷", "▶", "▼", "♂",
    "$", "×", ".", "/", ",", "♀", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
];

/// Placeholder for byte values with no glyph mapping.
pub const UNKNOWN_GLYPH: &str = "?";

/// Decodes game text byte by byte. Unmapped bytes become [`UNKNOWN_GLYPH`]
/// rather than failing; the caller is expected to have stripped any
/// terminator already.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            0x80..=0xBF => out.push_str(GLYPHS_80_BF[(byte - 0x80) as usize]),
            0xE0..=0xFF => out.push_str(GLYPHS_E0_FF[(byte - 0xE0) as usize]),
            _ => out.push_str(UNKNOWN_GLYPH),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_uppercase_and_lowercase_letters() {
        assert_eq!(decode_text(&[0x80, 0x99]), "AZ");
        assert_eq!(decode_text(&[0xA0, 0xB9]), "az");
        assert_eq!(decode_text(&[0x91, 0x84, 0x83]), "RED");
    }

    #[test]
    fn decodes_digits_at_the_top_of_the_symbol_range() {
        assert_eq!(decode_text(&[0xF6]), "0");
        assert_eq!(decode_text(&[0xFF]), "9");
        assert_eq!(decode_text(&[0xF7, 0xF9, 0xFC]), "136");
    }

    #[test]
    fn multi_character_glyphs_expand_the_output() {
        assert_eq!(decode_text(&[0xBB]), "'d");
        assert_eq!(decode_text(&[0xE1, 0xE2]), "PkMn");
        let decoded = decode_text(&[0xE1, 0xE2, 0x80]);
        assert!(decoded.chars().count() > 3);
    }

    #[test]
    fn gender_symbols_and_accented_e_survive_decoding() {
        assert_eq!(decode_text(&[0xEF]), "♂");
        assert_eq!(decode_text(&[0xF5]), "♀");
        assert_eq!(decode_text(&[0xBA]), "é");
    }

    #[test]
    fn bytes_outside_both_ranges_become_placeholders() {
        assert_eq!(decode_text(&[0x00]), "?");
        assert_eq!(decode_text(&[0x4F]), "?");
        assert_eq!(decode_text(&[0x7F]), "?");
        assert_eq!(decode_text(&[0xC0]), "?");
        assert_eq!(decode_text(&[0xDF]), "?");
        // The terminator has no glyph either; stripping it is the
        // extractor's job, not the codec's.
        assert_eq!(decode_text(&[0x50]), "?");
    }

    #[test]
    fn empty_input_decodes_to_the_empty_string() {
        assert_eq!(decode_text(&[]), "");
    }

    #[test]
    fn table_boundaries_are_exact() {
        assert_eq!(decode_text(&[0xBF]), "'v");
        assert_eq!(decode_text(&[0xE0]), "'");
        assert_eq!(decode_text(&[0x9A, 0x9B]), "()");
    }
}
