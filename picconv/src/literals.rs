//! MPASM writes literals as `B'1010'`; ASPIC wants `1010B`, and character constants as `"A"`.
//!
//! `0xFF` style hex is valid in both and is never touched.

use log::trace;
use std::borrow::Cow;

const CHARACTER_TYPE: char = 'A';
const RADIX_TYPES: [char; 4] = ['B', 'D', 'H', 'O'];
const QUOTES: [char; 2] = ['\'', '"'];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Literal<'a> {
    kind: char,
    payload: &'a str,
    /// Whatever follows the closing quote.
    rest: &'a str,
}

impl Literal<'_> {
    fn is_character(&self) -> bool {
        self.kind.eq_ignore_ascii_case(&CHARACTER_TYPE)
    }
}

fn is_type_marker(character: char) -> bool {
    let upper = character.to_ascii_uppercase();
    upper == CHARACTER_TYPE || RADIX_TYPES.contains(&upper)
}

fn match_literal(field: &str) -> Option<Literal<'_>> {
    let mut characters = field.chars();
    let kind = characters.next().filter(|c| is_type_marker(*c))?;
    let open = characters.next().filter(|c| QUOTES.contains(c))?;

    let body = &field[kind.len_utf8() + open.len_utf8()..];
    let end = body.find(|c: char| QUOTES.contains(&c))?;
    if end == 0 || !body[end..].starts_with(open) {
        return None;
    }

    Some(Literal {
        kind,
        payload: &body[..end],
        rest: &body[end + open.len_utf8()..],
    })
}

/// Rewrites a literal at the start of `field`, or hands the field back untouched.
pub fn fix_literal(field: &str) -> Cow<'_, str> {
    match match_literal(field) {
        Some(literal) => {
            let fixed = if literal.is_character() {
                format!("\"{}\"{}", literal.payload, literal.rest)
            } else {
                format!("{}{}{}", literal.payload, literal.kind, literal.rest)
            };
            trace!("Literal {:?} -> {:?}", field, fixed);
            Cow::Owned(fixed)
        }
        None => Cow::Borrowed(field),
    }
}

pub fn fix_literals(field: Option<&str>) -> Option<String> {
    field.map(|field| fix_literal(field).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(field: &str) -> String {
        fix_literal(field).into_owned()
    }

    #[test]
    fn test_binary() {
        assert_eq!(fix("B'01010101'"), "01010101B");
        assert_eq!(fix("B\"10101010\""), "10101010B");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(fix("D'32'"), "32D");
    }

    #[test]
    fn test_hex() {
        assert_eq!(fix("H'32'"), "32H");
        assert_eq!(fix("h'ff'"), "ffh");
    }

    #[test]
    fn test_octal() {
        assert_eq!(fix("O'777'"), "777O");
    }

    #[test]
    fn test_hex_0x() {
        assert!(matches!(fix_literal("0x32"), Cow::Borrowed("0x32")));
    }

    #[test]
    fn test_ascii_char() {
        assert_eq!(fix("A'A'"), "\"A\"");
        assert_eq!(fix("A' '"), "\" \"");
        assert_eq!(fix("a\"z\""), "\"z\"");
    }

    #[test]
    fn test_string() {
        assert_eq!(fix("A'Hello'"), "\"Hello\"");
    }

    #[test]
    fn test_trailing_text_is_kept() {
        assert_eq!(fix("D'10'+1"), "10D+1");
        assert_eq!(fix("B'1010', W"), "1010B, W");
    }

    #[test]
    fn test_not_literals() {
        for field in ["TRISB", "B'", "B''", "B'101\"", "X'10'", "1 << 5", "", "'A'"] {
            assert_eq!(fix(field), field);
        }
    }

    #[test]
    fn test_fix_literals_is_idempotent() {
        for field in ["A'A'", "D'32'", "B'1'", "H'B'", "0x32", "A'Hello'", "O'7'+1"] {
            let once = fix_literals(Some(field));
            let twice = fix_literals(once.as_deref());
            assert_eq!(once, twice, "not idempotent on {}", field);
        }
    }

    #[test]
    fn test_absent_field() {
        assert_eq!(fix_literals(None), None);
    }
}
