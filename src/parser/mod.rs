//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a Pratt parser: each token kind
//! maps to a prefix rule (for tokens that begin an expression) and a
//! mixfix rule (for tokens that extend one), with binding powers driving
//! the precedence-climbing loop. It handles:
//!
//! - Literals, names, and operator sections
//! - `val` bindings, `fn` literals, and `match` expressions
//! - Binary operators and juxtaposition application
//!
//! The lookups are pure match expressions over the closed token-kind
//! enumeration, so no runtime registration is needed.

pub mod expr;
pub mod lookups;
pub mod parser;
