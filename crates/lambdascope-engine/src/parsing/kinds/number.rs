use crate::ast::Item;
use crate::parsing::Attempt;
use crate::parsing::classify;
use crate::parsing::cursor::Cursor;
use crate::parsing::error::{Context, ParseError, ParseErrorKind};

/// Parses a numeric literal at the cursor, keeping its exact textual form.
///
/// Tracks the decimal point and the exponent marker so repeats are
/// rejected; a sign is only accepted directly after the `e`. If a
/// validation error fires — or the scan completes — and the accumulated
/// text no longer matches the numeric shape, or is a bare sign, the parser
/// restores the cursor and declines so the dispatcher can retry the token
/// as an identifier. Only a malformed numeral whose accumulated text still
/// matches the shape surfaces its specific error.
pub(crate) fn numeric_literal(cur: &mut Cursor<'_>) -> Result<Attempt<Item>, ParseError> {
    let saved = cur.clone();
    let Some(first) = cur.bump() else {
        return Ok(Attempt::Declined);
    };
    let mut value = String::from(first);
    let mut decimal = first == '.';
    let mut exponent = false;
    let mut prev = first;

    let failure = loop {
        let c = match cur.peek() {
            c if classify::is_item_end(c, false) => break None,
            Some(c) => c,
            // End of input is always an item end, handled above.
            None => break None,
        };
        value.push(c);
        let at = cur.pos();
        if c == '.' && !exponent {
            if decimal {
                break Some((ParseErrorKind::MultipleDecimalPoints, at));
            }
            decimal = true;
        } else if c == 'e' {
            if exponent {
                break Some((ParseErrorKind::MultipleExponents, at));
            }
            exponent = true;
        } else if !c.is_ascii_digit() && !(matches!(c, '+' | '-') && prev == 'e') {
            break Some((ParseErrorKind::UnexpectedCharacter(Some(c)), at));
        }
        prev = c;
        cur.bump();
    };

    if classify::is_lone_sign(&value) || !classify::is_numeric_shape(&value) {
        *cur = saved;
        return Ok(Attempt::Declined);
    }
    if let Some((kind, offset)) = failure {
        return Err(ParseError::new(Context::NumericLiteral, kind, offset));
    }
    Ok(Attempt::Parsed(Item::NumericLiteral { value }))
}
