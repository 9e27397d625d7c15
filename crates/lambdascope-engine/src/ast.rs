use serde::Serialize;

/// One parsed syntactic unit of the expression language.
///
/// Items are immutable once constructed: the parser builds them bottom-up and
/// parents own their children (`args`, `params`, `body`) until the whole tree
/// is dropped on the next input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Item {
    /// A parenthesized call form `(name arg ...)`.
    Procedure { name: String, args: Vec<Item> },
    /// An anonymous function form `(lambda (params ...) body)`.
    Lambda {
        params: Vec<Identifier>,
        body: Box<Item>,
    },
    /// A free-standing symbol.
    Identifier(Identifier),
    /// The raw text between double quotes. Escape markers are kept verbatim,
    /// never decoded.
    StringLiteral { value: String },
    /// The literal's exact textual form. Never converted to a numeric type.
    NumericLiteral { value: String },
    /// `#t`, `#true`, `#T` or their false counterparts.
    BooleanLiteral { value: bool },
}

/// A symbol name, also the element type of lambda parameter lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
}
