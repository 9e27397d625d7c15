use serde::Serialize;
use std::fmt;

/// What the parser was in the middle of when it failed. Shown verbatim in
/// the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Context {
    Item,
    Procedure,
    Lambda,
    Identifier,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Context::Item => "item",
            Context::Procedure => "procedure",
            Context::Lambda => "lambda",
            Context::Identifier => "identifier",
            Context::StringLiteral => "string literal",
            Context::NumericLiteral => "numeric literal",
            Context::BooleanLiteral => "boolean literal",
        })
    }
}

/// A parse failure anchored to the exact character that caused it.
///
/// `offset` is a character index into the source, pointing at the character
/// where the mismatch was detected, never at the start of the enclosing
/// form. End of input is reported at `source.chars().count()`, so a caret
/// drawn there lands one past the last character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("failed to parse {context}: {kind}")]
pub struct ParseError {
    pub context: Context,
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(context: Context, kind: ParseErrorKind, offset: usize) -> Self {
        Self {
            context,
            kind,
            offset,
        }
    }
}

/// The individual failure modes of the grammar.
///
/// `None` in a character payload means the failure was detected at end of
/// input; it renders as the empty character `''`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParseErrorKind {
    InvalidItem,
    UnexpectedEnd,
    UnexpectedCharacter(Option<char>),
    ExpectedIdentifier(Option<char>),
    ExpectedIdentifierFoundNumber,
    ExpectedWhitespace(Option<char>),
    ExpectedArgumentsGroup(Option<char>),
    ExpectedLambda(String),
    ExpectedBodyFoundClose,
    ExpectedClose(Option<char>),
    ExpectedItemEnd(Option<char>),
    MultipleDecimalPoints,
    MultipleExponents,
    TooDeeplyNested,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn ch(c: &Option<char>) -> String {
            c.map(String::from).unwrap_or_default()
        }
        match self {
            ParseErrorKind::InvalidItem => write!(f, "invalid item"),
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end"),
            ParseErrorKind::UnexpectedCharacter(c) => {
                write!(f, "unexpected character '{}'", ch(c))
            }
            ParseErrorKind::ExpectedIdentifier(c) => {
                write!(f, "expected identifier but found character '{}'", ch(c))
            }
            ParseErrorKind::ExpectedIdentifierFoundNumber => {
                write!(f, "expected identifier but found number")
            }
            ParseErrorKind::ExpectedWhitespace(c) => {
                write!(f, "expected white space but found character '{}'", ch(c))
            }
            ParseErrorKind::ExpectedArgumentsGroup(c) => {
                write!(f, "expected arguments group but found character '{}'", ch(c))
            }
            ParseErrorKind::ExpectedLambda(name) => {
                write!(f, "expected lambda but found procedure '{name}'")
            }
            ParseErrorKind::ExpectedBodyFoundClose => {
                write!(f, "expected body but found close")
            }
            ParseErrorKind::ExpectedClose(c) => {
                write!(f, "expected close but found character '{}'", ch(c))
            }
            ParseErrorKind::ExpectedItemEnd(c) => {
                write!(f, "expected end but found character '{}'", ch(c))
            }
            ParseErrorKind::MultipleDecimalPoints => write!(f, "multiple decimal points"),
            ParseErrorKind::MultipleExponents => write!(f, "multiple exponents"),
            ParseErrorKind::TooDeeplyNested => write!(f, "too deeply nested"),
        }
    }
}
