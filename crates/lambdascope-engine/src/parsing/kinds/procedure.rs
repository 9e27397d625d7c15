use crate::ast::Item;
use crate::parsing::classify;
use crate::parsing::cursor::Cursor;
use crate::parsing::error::{Context, ParseError, ParseErrorKind};
use crate::parsing::{Attempt, parse_item};

use super::{LAMBDA_KEYWORDS, identifier};

/// Parses a call form `opener ws* name (ws item)* ws* closer` at the cursor.
///
/// The closer must be the counterpart of the opener actually seen. Declines
/// in two cases: the cursor is not at an opener, or the head identifier is
/// the lambda keyword — the dispatcher then reparses the whole form as a
/// lambda.
pub(crate) fn procedure(
    cur: &mut Cursor<'_>,
    depth: usize,
) -> Result<Attempt<Item>, ParseError> {
    let saved = cur.clone();
    let Some(opener) = cur.peek() else {
        return Ok(Attempt::Declined);
    };
    let Some(closer) = classify::closer_for(opener) else {
        return Ok(Attempt::Declined);
    };
    cur.bump();
    cur.skip_whitespace();

    // The head must read as an identifier, though a bare sign is fine: `+`
    // and `-` are procedure names.
    match cur.peek() {
        Some(c) if matches!(c, '+' | '-') || reads_as_identifier(c) => {}
        c => {
            return Err(ParseError::new(
                Context::Procedure,
                ParseErrorKind::ExpectedIdentifier(c),
                cur.pos(),
            ));
        }
    }
    let name = match identifier(cur, true)? {
        Attempt::Parsed(ident) => ident.name,
        Attempt::Declined => {
            return Err(ParseError::new(
                Context::Procedure,
                ParseErrorKind::ExpectedIdentifierFoundNumber,
                cur.pos(),
            ));
        }
    };
    if LAMBDA_KEYWORDS.contains(&name.as_str()) {
        *cur = saved;
        return Ok(Attempt::Declined);
    }

    // A closer straight after the name is a zero-argument call.
    let mut probe = cur.clone();
    probe.skip_whitespace();
    if probe.peek() == Some(closer) {
        probe.bump();
        *cur = probe;
        return Ok(Attempt::Parsed(Item::Procedure {
            name,
            args: Vec::new(),
        }));
    }

    // Otherwise at least one whitespace character must separate the name
    // from the first argument.
    match cur.peek() {
        None => {
            return Err(ParseError::new(
                Context::Procedure,
                ParseErrorKind::UnexpectedEnd,
                cur.pos(),
            ));
        }
        Some(c) if !c.is_whitespace() => {
            return Err(ParseError::new(
                Context::Procedure,
                ParseErrorKind::ExpectedWhitespace(Some(c)),
                cur.pos(),
            ));
        }
        _ => {}
    }
    cur.skip_whitespace();

    let mut args = Vec::new();
    loop {
        match cur.peek() {
            Some(c) if c == closer => {
                cur.bump();
                break;
            }
            None => {
                return Err(ParseError::new(
                    Context::Procedure,
                    ParseErrorKind::UnexpectedEnd,
                    cur.pos(),
                ));
            }
            _ => {}
        }
        args.push(parse_item(cur, depth + 1)?);
        // After an argument comes the closer or a mandatory separator; end
        // of input is caught at the top of the loop.
        match cur.peek() {
            Some(c) if c == closer => {}
            None => {}
            Some(c) if c.is_whitespace() => cur.skip_whitespace(),
            Some(c) => {
                return Err(ParseError::new(
                    Context::Procedure,
                    ParseErrorKind::ExpectedWhitespace(Some(c)),
                    cur.pos(),
                ));
            }
        }
    }
    Ok(Attempt::Parsed(Item::Procedure { name, args }))
}

/// Mirrors the dispatcher's leading-character classification: anything that
/// would not dispatch to another item kind reads as an identifier.
pub(super) fn reads_as_identifier(c: char) -> bool {
    !(classify::is_opener(c) || c == '"' || classify::is_number_opener(c) || c == '#')
}
