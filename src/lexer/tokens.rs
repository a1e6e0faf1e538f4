use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("val", TokenKind::Val);
        map.insert("fn", TokenKind::Fn);
        map.insert("match", TokenKind::Match);
        map.insert("with", TokenKind::With);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Name,

    OpenParen,
    CloseParen,

    Equals, // =
    Arrow,  // ->
    VBar,   // |

    Plus,
    Minus,
    Star,

    // Reserved
    Val,
    Fn,
    Match,
    With,
    Else,
    End,

    /// Fallback key for mixfix dispatch. Never produced by the lexer.
    Default,
}

impl TokenKind {
    /// Whether the token can stand in for a bare name inside parentheses.
    ///
    /// Operators qualify so that sections such as `(+)` parse as names.
    pub fn is_name_symbol(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus | TokenKind::Star)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

// Spans are diagnostic only and do not participate in structural equality.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
