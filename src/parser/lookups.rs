//! Token-kind dispatch for the Pratt parser.
//!
//! The grammar is fixed, so instead of runtime registries the three lookups
//! are pure match expressions over `TokenKind`: a prefix rule for tokens
//! that can begin an expression, a mixfix rule for tokens that extend an
//! already-parsed left expression, and the binding power that decides when
//! the engine's loop keeps going.

use crate::{
    ast::expressions::Expression,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser};

/// Binding power (precedence) levels, weakest first.
///
/// Application binds tighter than any binary operator, so `f x + 1`
/// parses as `(f x) + 1`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    None,
    Additive,
    Multiplicative,
    Apply,
}

pub type PrefixHandler = fn(&mut Parser, Token) -> Result<Expression, Error>;
pub type MixfixHandler = fn(&mut Parser, Expression, Token) -> Result<Expression, Error>;

/// Returns the prefix rule for a token beginning a new expression, or
/// `None` if the token cannot start one.
pub fn prefix_lookup(kind: TokenKind) -> Option<PrefixHandler> {
    match kind {
        TokenKind::Name => Some(parse_name_expr),
        TokenKind::Integer => Some(parse_integer_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::Val => Some(parse_val_decl_expr),
        TokenKind::Fn => Some(parse_fn_expr),
        TokenKind::Match => Some(parse_match_expr),
        _ => None,
    }
}

/// Returns the mixfix rule for a token following a parsed left expression.
///
/// Total: kinds without an explicit binary registration fall through to
/// juxtaposition application, which is what `TokenKind::Default` stands
/// for. The fallback is only ever reached for kinds with a non-zero
/// binding power, so EOF and the keyword terminators never invoke it.
pub fn mixfix_lookup(kind: TokenKind) -> MixfixHandler {
    match kind {
        TokenKind::Plus | TokenKind::Minus | TokenKind::Star => parse_binary_expr,
        _ => parse_apply_expr,
    }
}

/// Returns the binding power of the mixfix rule for a token kind.
///
/// `None` (the zero level) covers EOF and every token that cannot extend
/// an expression, which is what terminates the engine's loop.
pub fn binding_power_lookup(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Plus | TokenKind::Minus => BindingPower::Additive,
        TokenKind::Star => BindingPower::Multiplicative,
        TokenKind::Name | TokenKind::Integer | TokenKind::OpenParen => BindingPower::Apply,
        _ => BindingPower::None,
    }
}
