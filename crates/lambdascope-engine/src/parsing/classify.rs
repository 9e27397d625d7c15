//! Character-level classification predicates.
//!
//! There is no tokenization pass: the dispatcher and every sub-parser decide
//! what they are looking at by probing single characters through these
//! predicates, on demand, at the current cursor position.

use regex::Regex;
use std::sync::OnceLock;

/// `(`, `[` and `{` open a call form, a lambda or a parameter list.
pub(crate) fn is_opener(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// The closer that must terminate a form opened with `c`.
pub(crate) fn closer_for(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Characters that may begin a numeric literal.
pub(crate) fn is_number_opener(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-')
}

/// Everything is identifier material except brackets, the quote characters,
/// comma, semicolon, `#`, `|` and backslash.
pub(crate) fn is_identifier_char(c: char) -> bool {
    !matches!(
        c,
        '(' | ')' | '[' | ']' | '{' | '}' | '"' | ',' | '\'' | '`' | ';' | '#' | '|' | '\\'
    )
}

/// Whether `c` legally terminates the item being scanned.
///
/// End of input, whitespace, closers and comma always end an item. In
/// `at_opener` mode an opener ends the item too — used for identifiers in
/// head position, which may be glued to a bracketed group (`lambda(x)`), so
/// the identifier does not swallow the bracket.
pub(crate) fn is_item_end(c: Option<char>, at_opener: bool) -> bool {
    let Some(c) = c else { return true };
    c.is_whitespace() || is_closer(c) || c == ',' || (at_opener && is_opener(c))
}

/// Whether `text` is shaped like a number: optional sign, digits, optional
/// decimal point and digits, optional `e`-exponent with digits.
///
/// The shape is loose on purpose — the empty string and a bare `.` match.
/// The identifier parser uses it to decline in favor of the numeric parser,
/// which applies the same test before committing; a bare `+` or `-` is
/// exempted by [`is_lone_sign`] so the arithmetic procedure names survive.
pub(crate) fn is_numeric_shape(text: &str) -> bool {
    static NUMERIC_SHAPE: OnceLock<Regex> = OnceLock::new();
    let re = NUMERIC_SHAPE.get_or_init(|| {
        Regex::new(r"^[+-]?[0-9]*\.?[0-9]*(e[0-9]+)?$").expect("invalid numeric shape regex")
    });
    re.is_match(text)
}

/// A bare `+` or `-`: always a genuine identifier, never a number.
pub(crate) fn is_lone_sign(text: &str) -> bool {
    matches!(text, "+" | "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('(', Some(')'))]
    #[case('[', Some(']'))]
    #[case('{', Some('}'))]
    #[case('<', None)]
    fn closers_match_their_openers(#[case] opener: char, #[case] closer: Option<char>) {
        assert_eq!(closer_for(opener), closer);
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(' '), true)]
    #[case(Some('\u{a0}'), true)]
    #[case(Some(')'), true)]
    #[case(Some(']'), true)]
    #[case(Some(','), true)]
    #[case(Some('('), false)]
    #[case(Some('x'), false)]
    fn item_enders(#[case] c: Option<char>, #[case] ends: bool) {
        assert_eq!(is_item_end(c, false), ends);
    }

    #[test]
    fn opener_mode_adds_openers_to_the_enders() {
        assert!(is_item_end(Some('('), true));
        assert!(is_item_end(Some('['), true));
        assert!(!is_item_end(Some('('), false));
    }

    #[rstest]
    #[case("12", true)]
    #[case("-3.5", true)]
    #[case("1e9", true)]
    #[case("+0.5e2", true)]
    #[case("", true)]
    #[case(".", true)]
    #[case("+", true)]
    #[case("1e+2", false)]
    #[case("1.2.3", false)]
    #[case("abc", false)]
    #[case("e", false)]
    fn numeric_shapes(#[case] text: &str, #[case] numeric: bool) {
        assert_eq!(is_numeric_shape(text), numeric);
    }

    #[test]
    fn identifier_characters_exclude_structure() {
        for c in ['(', ')', '[', ']', '{', '}', '"', ',', '\'', '`', ';', '#', '|', '\\'] {
            assert!(!is_identifier_char(c), "{c:?} should not be identifier material");
        }
        for c in ['a', 'Z', '0', '+', '-', '?', '!', 'λ', '*'] {
            assert!(is_identifier_char(c), "{c:?} should be identifier material");
        }
    }
}
