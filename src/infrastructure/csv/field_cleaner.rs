use encoding_rs::WINDOWS_1252;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

static CONTROL_AND_HIGH_BYTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)[\x00-\x1F\x7F-\xFF]").unwrap());

/// Strips every byte in 0x00-0x1F and 0x7F-0xFF from a header cell.
///
/// Removal, not replacement: the result only holds printable ASCII.
pub fn clean_header_value(raw: &[u8]) -> String {
    let cleaned = CONTROL_AND_HIGH_BYTES.replace_all(raw, &b""[..]);
    String::from_utf8_lossy(&cleaned).into_owned()
}

/// True when every byte is one a whitespace trim would drop
/// (space, tab, newline, carriage return, NUL, vertical tab)
pub fn is_blank(raw: &[u8]) -> bool {
    raw.iter()
        .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x00 | 0x0B))
}

/// Decode a content cell without altering it.
///
/// UTF-8 stays as is; anything else is read as Windows-1252 so legacy
/// single-byte files keep one character per byte.
pub fn decode_field(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_string(),
        Err(_) => WINDOWS_1252
            .decode_without_bom_handling(raw)
            .0
            .into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_control_bytes() {
        assert_eq!(clean_header_value(b"Na\x01me\r\n"), "Name");
    }

    #[test]
    fn test_clean_strips_high_bytes() {
        // "é" in UTF-8 is two bytes above 0x7F; both go
        assert_eq!(clean_header_value("Café".as_bytes()), "Caf");
        assert_eq!(clean_header_value(b"Caf\xe9\x7f"), "Caf");
    }

    #[test]
    fn test_clean_keeps_printable_ascii() {
        assert_eq!(clean_header_value(b"  Total (EUR) "), "  Total (EUR) ");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(b""));
        assert!(is_blank(b" \t\r\n\x0b\x00"));
        assert!(!is_blank(b" 0 "));
        // non-breaking space is content
        assert!(!is_blank("\u{a0}".as_bytes()));
    }

    #[test]
    fn test_decode_utf8_passthrough() {
        assert_eq!(decode_field("Zürich\x01".as_bytes()), "Zürich\x01");
    }

    #[test]
    fn test_decode_single_byte_fallback() {
        assert_eq!(decode_field(b"caf\xe9"), "café");
    }
}
