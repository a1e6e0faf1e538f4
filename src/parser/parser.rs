//! Parser state and the top-level parse entry point.
//!
//! This module contains the Parser struct that owns the token stream and
//! tracks the cursor. The precedence-climbing engine itself lives in
//! `expr`, and the token-kind dispatch tables live in `lookups`.

use crate::{
    ast::expressions::Expression,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// The main parser structure that maintains parsing state.
///
/// Owns the token stream and the forward-only cursor into it. Lookahead
/// may peek arbitrarily far without consuming; consumption never rewinds.
pub struct Parser {
    /// The list of tokens to parse, terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// The token vector must be terminated by an EOF token, which the
    /// lexer always appends.
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|token| token.kind == TokenKind::EOF),
            "token stream must be terminated by an EOF token"
        );

        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.look_ahead(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.look_ahead(0).kind
    }

    /// Returns the token `distance` positions ahead without consuming.
    ///
    /// Total: once the stream is exhausted this keeps returning the
    /// terminal EOF token.
    pub fn look_ahead(&self, distance: usize) -> &Token {
        let index = (self.pos as usize + distance).min(self.tokens.len() - 1);
        self.tokens.get(index).unwrap()
    }

    /// Consumes and returns the next token.
    ///
    /// Consistent with `look_ahead(0)`; never moves past the EOF token.
    pub fn advance(&mut self) -> &Token {
        let index = (self.pos as usize).min(self.tokens.len() - 1);
        if index < self.tokens.len() - 1 {
            self.pos += 1;
        }
        self.tokens.get(index).unwrap()
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        found: token.value.clone(),
                        expected: expected_kind.to_string(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into a sequence of top-level expressions.
///
/// This is the main entry point for parsing. Each top-level expression is
/// parsed at the lowest binding power; the first failure aborts the whole
/// parse with no partial result. Token spans already name the source file,
/// so no separate file handle is needed.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Expression>, Error> {
    let mut parser = Parser::new(tokens);

    let mut program = vec![];

    while parser.has_tokens() {
        program.push(parse_expr(&mut parser, BindingPower::None)?);
    }

    Ok(program)
}
