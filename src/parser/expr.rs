use crate::{
    ast::expressions::{
        ApplyExpr, BinaryExpr, CaseExpr, Expression, FnExpr, IntegerExpr, MatchExpr, NameExpr,
        Pattern, ValDeclExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{binding_power_lookup, mixfix_lookup, prefix_lookup, BindingPower},
    parser::Parser,
};

/// Binding power of the mixfix rule for the token `distance` positions
/// ahead. Zero-level (`None`) for EOF and anything else that cannot extend
/// an expression.
pub fn get_precedence(parser: &Parser, distance: usize) -> BindingPower {
    binding_power_lookup(parser.look_ahead(distance).kind)
}

/// Parses one expression at the given minimum binding power.
///
/// Consumes the lead token and hands it to `parse_operand`. Recursion depth
/// is bounded by the nesting depth of the source, not by an explicit limit.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    let lead = parser.advance().clone();
    parse_operand(parser, lead, bp)
}

/// The precedence-climbing loop, starting from an already-consumed lead
/// token.
///
/// The lead token selects a prefix rule for the initial left expression.
/// Then, while the next token's binding power strictly exceeds `bp`, that
/// token is consumed and its mixfix rule folds the left expression into a
/// larger one. Strict `>` makes equal-power operators left-associative.
pub fn parse_operand(parser: &mut Parser, lead: Token, bp: BindingPower) -> Result<Expression, Error> {
    let prefix = prefix_lookup(lead.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnparseableStart {
                token: lead.value.clone(),
            },
            lead.span.start.clone(),
        )
    })?;

    let mut left = prefix(parser, lead)?;

    while get_precedence(parser, 0) > bp {
        let token = parser.advance().clone();
        let mixfix = mixfix_lookup(token.kind);
        left = mixfix(parser, left, token)?;
    }

    Ok(left)
}

pub fn parse_name_expr(_parser: &mut Parser, token: Token) -> Result<Expression, Error> {
    Ok(Expression::Name(NameExpr { token }))
}

pub fn parse_integer_expr(_parser: &mut Parser, token: Token) -> Result<Expression, Error> {
    if token.value.parse::<i64>().is_err() {
        return Err(Error::new(
            ErrorImpl::IntegerParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(Expression::Integer(IntegerExpr { token }))
}

/// Parses a parenthesized expression.
///
/// An operator directly after `(` is an operator section such as `(+)`
/// and becomes a plain name; anything else is a full expression parsed
/// from the lowest binding power. Either way the closing `)` is required.
pub fn parse_grouping_expr(parser: &mut Parser, _token: Token) -> Result<Expression, Error> {
    let grouped = if parser.current_token_kind().is_name_symbol() {
        let token = parser.advance().clone();
        Expression::Name(NameExpr { token })
    } else {
        parse_expr(parser, BindingPower::None)?
    };

    parser.expect(TokenKind::CloseParen)?;
    Ok(grouped)
}

/// Parses `val name = expr`.
///
/// The binder is a bare name, or a parenthesized name or operator section
/// (`val (+) = ...` rebinds an operator).
pub fn parse_val_decl_expr(parser: &mut Parser, _token: Token) -> Result<Expression, Error> {
    let name = if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();
        let binder = parser.advance().clone();

        if binder.kind != TokenKind::Name && !binder.kind.is_name_symbol() {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    found: binder.value.clone(),
                    expected: TokenKind::Name.to_string(),
                },
                binder.span.start.clone(),
            ));
        }

        parser.expect(TokenKind::CloseParen)?;
        NameExpr { token: binder }
    } else {
        NameExpr {
            token: parser.expect(TokenKind::Name)?,
        }
    };

    parser.expect(TokenKind::Equals)?;
    let value = parse_expr(parser, BindingPower::None)?;

    Ok(Expression::ValDecl(ValDeclExpr {
        name,
        value: Box::new(value),
    }))
}

/// Parses `fn a b ... -> body`. Zero parameters is a degenerate but legal
/// function literal.
pub fn parse_fn_expr(parser: &mut Parser, _token: Token) -> Result<Expression, Error> {
    let mut params = vec![];

    while parser.current_token_kind() == TokenKind::Name {
        params.push(NameExpr {
            token: parser.advance().clone(),
        });
    }

    parser.expect(TokenKind::Arrow)?;
    let body = parse_expr(parser, BindingPower::None)?;

    Ok(Expression::Fn(FnExpr {
        params,
        body: Box::new(body),
    }))
}

/// Parses `match scrutinee with | pattern -> result ... else result end`.
///
/// The first `else` ends the case list and contributes the wildcard case.
/// A match that collects no cases at all is malformed.
pub fn parse_match_expr(parser: &mut Parser, _token: Token) -> Result<Expression, Error> {
    let scrutinee = parse_expr(parser, BindingPower::None)?;
    parser.expect(TokenKind::With)?;

    let mut cases = vec![];

    while parser.current_token_kind() == TokenKind::VBar {
        parser.advance();
        let pattern = parse_expr(parser, BindingPower::None)?;
        parser.expect(TokenKind::Arrow)?;
        let result = parse_expr(parser, BindingPower::None)?;

        cases.push(CaseExpr {
            pattern: Pattern::Expression(Box::new(pattern)),
            result,
        });
    }

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        let result = parse_expr(parser, BindingPower::None)?;

        cases.push(CaseExpr {
            pattern: Pattern::Wildcard,
            result,
        });
    }

    if cases.is_empty() {
        return Err(Error::new(ErrorImpl::EmptyMatch, parser.get_position()));
    }

    parser.expect(TokenKind::End)?;

    Ok(Expression::Match(MatchExpr {
        scrutinee: Box::new(scrutinee),
        cases,
    }))
}

/// Parses the right operand of a binary operator.
///
/// The right side is parsed at the operator's own binding power, which
/// together with the engine's strict `>` gives left associativity.
pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    token: Token,
) -> Result<Expression, Error> {
    let bp = binding_power_lookup(token.kind);
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Binary(BinaryExpr {
        operator: token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Folds juxtaposition into application.
///
/// The engine has already consumed the token that starts the argument, so
/// the argument is parsed from that lead token at the application binding
/// power. `f x y` therefore curries as `Apply(Apply(f, x), y)`.
pub fn parse_apply_expr(
    parser: &mut Parser,
    left: Expression,
    token: Token,
) -> Result<Expression, Error> {
    let argument = parse_operand(parser, token, BindingPower::Apply)?;

    Ok(Expression::Apply(ApplyExpr {
        callee: Box::new(left),
        argument: Box::new(argument),
    }))
}
