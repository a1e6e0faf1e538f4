use std::fmt::{self, Display, Formatter};

use crate::lexer::tokens::{Token, TokenKind};

/// Expression
///
/// The closed set of AST nodes the parser can produce. Every node is
/// immutable once built and exclusively owned by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Name(NameExpr),
    Integer(IntegerExpr),
    ValDecl(ValDeclExpr),
    Fn(FnExpr),
    Match(MatchExpr),
    Apply(ApplyExpr),
    Binary(BinaryExpr),
}

/// Name Expression
/// A reference or binder name. Operator sections such as `(+)` carry the
/// operator token here instead of a name token.
#[derive(Debug, Clone, PartialEq)]
pub struct NameExpr {
    pub token: Token,
}

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub token: Token,
}

/// Val Declaration Expression
/// A single non-recursive binding: `val x = expr`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValDeclExpr {
    pub name: NameExpr,
    pub value: Box<Expression>,
}

/// Fn Expression
/// A curried function literal over zero or more parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub params: Vec<NameExpr>,
    pub body: Box<Expression>,
}

/// Match Expression
/// Cases are matched top to bottom; a wildcard case from an `else` clause
/// is always last.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchExpr {
    pub scrutinee: Box<Expression>,
    pub cases: Vec<CaseExpr>,
}

/// Case Expression
/// One arm of a match expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub pattern: Pattern,
    pub result: Expression,
}

/// Pattern
/// Either an expression used as a structural/literal pattern, or the
/// distinguished wildcard produced by an `else` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Expression(Box<Expression>),
    Wildcard,
}

/// Apply Expression
/// Juxtaposition application: `f x`. Left-associative, so `f x y` is
/// `Apply(Apply(f, x), y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyExpr {
    pub callee: Box<Expression>,
    pub argument: Box<Expression>,
}

/// Binary Expression
/// An infix operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: Token,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Display for NameExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Operator sections need their parentheses back to re-parse as names.
        if self.token.kind == TokenKind::Name {
            write!(f, "{}", self.token.value)
        } else {
            write!(f, "({})", self.token.value)
        }
    }
}

// Renders a child of an application or binary operation. Anything that is
// not a bare name or literal is parenthesized so the rendering re-parses
// into the same tree.
fn write_operand(f: &mut Formatter<'_>, expr: &Expression) -> fmt::Result {
    match expr {
        Expression::Name(_) | Expression::Integer(_) => write!(f, "{}", expr),
        _ => write!(f, "({})", expr),
    }
}

/// The unparser. Produces source text that re-parses to a structurally
/// identical tree; it makes no attempt to preserve original positions.
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Name(name) => write!(f, "{}", name),
            Expression::Integer(integer) => write!(f, "{}", integer.token.value),
            Expression::ValDecl(decl) => write!(f, "val {} = {}", decl.name, decl.value),
            Expression::Fn(function) => {
                write!(f, "fn")?;
                for param in &function.params {
                    write!(f, " {}", param)?;
                }
                write!(f, " -> {}", function.body)
            }
            Expression::Match(match_expr) => {
                write!(f, "match {} with", match_expr.scrutinee)?;
                for case in &match_expr.cases {
                    match &case.pattern {
                        Pattern::Expression(pattern) => {
                            write!(f, " | {} -> {}", pattern, case.result)?
                        }
                        Pattern::Wildcard => write!(f, " else {}", case.result)?,
                    }
                }
                write!(f, " end")
            }
            Expression::Apply(apply) => {
                write_operand(f, &apply.callee)?;
                write!(f, " ")?;
                write_operand(f, &apply.argument)
            }
            Expression::Binary(binary) => {
                write_operand(f, &binary.left)?;
                write!(f, " {} ", binary.operator.value)?;
                write_operand(f, &binary.right)
            }
        }
    }
}
