use crate::ast::Identifier;
use crate::parsing::Attempt;
use crate::parsing::classify;
use crate::parsing::cursor::Cursor;
use crate::parsing::error::{Context, ParseError, ParseErrorKind};

/// Accumulates an identifier at the cursor.
///
/// A backslash escapes the following character: both are kept in the name
/// and the escaped character bypasses identifier validation. Accumulation
/// stops at an item-ending character; `at_opener` widens that set to
/// openers for identifiers in head position (see
/// [`classify::is_item_end`]).
///
/// Declines when the accumulated name is shaped like a number, handing it
/// back to the dispatcher to retry as a numeric literal — except a bare `+`
/// or `-`, which stays an identifier (addition and subtraction are
/// procedure names).
pub(crate) fn identifier(
    cur: &mut Cursor<'_>,
    at_opener: bool,
) -> Result<Attempt<Identifier>, ParseError> {
    let saved = cur.clone();
    let mut name = String::new();
    let mut escaping = false;
    loop {
        match cur.peek() {
            Some(c) if escaping => {
                escaping = false;
                name.push(c);
                cur.bump();
            }
            None if escaping => {
                return Err(ParseError::new(
                    Context::Identifier,
                    ParseErrorKind::UnexpectedEnd,
                    cur.pos(),
                ));
            }
            Some('\\') => {
                escaping = true;
                name.push('\\');
                cur.bump();
            }
            c if classify::is_item_end(c, at_opener) => break,
            Some(c) if !classify::is_identifier_char(c) => {
                return Err(ParseError::new(
                    Context::Identifier,
                    ParseErrorKind::UnexpectedCharacter(Some(c)),
                    cur.pos(),
                ));
            }
            Some(c) => {
                name.push(c);
                cur.bump();
            }
            // End of input is always an item end, handled above.
            None => break,
        }
    }

    if !classify::is_lone_sign(&name) && classify::is_numeric_shape(&name) {
        *cur = saved;
        return Ok(Attempt::Declined);
    }
    Ok(Attempt::Parsed(Identifier { name }))
}
