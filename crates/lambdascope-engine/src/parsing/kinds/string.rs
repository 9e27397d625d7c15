use crate::ast::Item;
use crate::parsing::cursor::Cursor;
use crate::parsing::error::{Context, ParseError, ParseErrorKind};

/// Parses a double-quoted string literal at the cursor.
///
/// The value is the raw text between the quotes: escape sequences are not
/// decoded, the backslash stays in the value, and only an unescaped `"`
/// terminates the literal. Never declines.
pub(crate) fn string_literal(cur: &mut Cursor<'_>) -> Result<Item, ParseError> {
    cur.bump(); // opening quote
    let mut value = String::new();
    let mut escaping = false;
    loop {
        match cur.peek() {
            None => {
                return Err(ParseError::new(
                    Context::StringLiteral,
                    ParseErrorKind::UnexpectedEnd,
                    cur.pos(),
                ));
            }
            Some(c) if escaping => {
                escaping = false;
                value.push(c);
                cur.bump();
            }
            Some('\\') => {
                escaping = true;
                value.push('\\');
                cur.bump();
            }
            Some('"') => {
                cur.bump();
                break;
            }
            Some(c) => {
                value.push(c);
                cur.bump();
            }
        }
    }
    Ok(Item::StringLiteral { value })
}
