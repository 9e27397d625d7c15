use crate::ast::Item;
use crate::parsing::classify;
use crate::parsing::cursor::Cursor;
use crate::parsing::error::{Context, ParseError, ParseErrorKind};

/// Parses `#t`, `#f`, `#true`, `#false`, `#T` or `#F` at the cursor.
///
/// Every form must be immediately followed by an item-ending character.
/// Never declines: after a `#` this is a boolean literal or an error.
pub(crate) fn boolean_literal(cur: &mut Cursor<'_>) -> Result<Item, ParseError> {
    cur.bump(); // '#'
    let value = match cur.peek() {
        Some('t') => {
            cur.bump();
            if classify::is_item_end(cur.peek(), false) {
                true
            } else if cur.matches("rue") {
                cur.bump_n(3);
                ensure_item_end(cur)?;
                true
            } else {
                return Err(unexpected_here(cur));
            }
        }
        Some('f') => {
            cur.bump();
            if classify::is_item_end(cur.peek(), false) {
                false
            } else if cur.matches("alse") {
                cur.bump_n(4);
                ensure_item_end(cur)?;
                false
            } else {
                return Err(unexpected_here(cur));
            }
        }
        Some('T') => {
            cur.bump();
            ensure_item_end(cur)?;
            true
        }
        Some('F') => {
            cur.bump();
            ensure_item_end(cur)?;
            false
        }
        c => {
            return Err(ParseError::new(
                Context::BooleanLiteral,
                ParseErrorKind::UnexpectedCharacter(c),
                cur.pos(),
            ));
        }
    };
    Ok(Item::BooleanLiteral { value })
}

fn ensure_item_end(cur: &Cursor<'_>) -> Result<(), ParseError> {
    match cur.peek() {
        c if classify::is_item_end(c, false) => Ok(()),
        c => Err(ParseError::new(
            Context::BooleanLiteral,
            ParseErrorKind::ExpectedItemEnd(c),
            cur.pos(),
        )),
    }
}

fn unexpected_here(cur: &Cursor<'_>) -> ParseError {
    ParseError::new(
        Context::BooleanLiteral,
        ParseErrorKind::UnexpectedCharacter(cur.peek()),
        cur.pos(),
    )
}
