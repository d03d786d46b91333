//! Single character predicates used by the sub-lexers.

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

pub fn is_numeric(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_alnum(c: u8) -> bool {
    is_alpha(c) || is_numeric(c)
}

/// Characters that can start an operator.
pub fn is_symbol(c: u8) -> bool {
    matches!(
        c,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'!' | b'<' | b'>' | b'&' | b'|' | b'^' | b'~'
    )
}

/// Horizontal whitespace. Newlines are lexed on their own.
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

pub fn is_newline(c: u8) -> bool {
    c == b'\n'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifiers() {
        assert!(is_alpha(b'a') && is_alpha(b'Z') && is_alpha(b'_'));
        assert!(!is_alpha(b'1'));
        assert!(is_numeric(b'0') && !is_numeric(b'x'));
        assert!(is_alnum(b'9') && is_alnum(b'q') && !is_alnum(b'-'));
        assert!(is_symbol(b'<') && is_symbol(b'~') && !is_symbol(b'('));
        assert!(is_whitespace(b' ') && is_whitespace(b'\t') && !is_whitespace(b'\n'));
        assert!(is_newline(b'\n') && !is_newline(b'\r'));
    }
}
