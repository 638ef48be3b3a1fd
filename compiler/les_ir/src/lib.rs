//! LES IR - shared lexical data model
//!
//! This crate contains the types every stage after the scanner agrees on:
//! - Spans for source locations
//! - Symbols for interned, identity-compared names
//! - Decimals for high-precision numeric literals
//! - Tokens, their kinds, and their decoded values
//!
//! # Design Philosophy
//!
//! - **Intern names**: identifiers and operator names become [`Symbol`]s,
//!   compared by address rather than content.
//! - **Closed kinds**: [`TokenKind`] is a closed enum matched exhaustively;
//!   [`TokenKind::accepts`] states which [`TokenValue`] variants it may carry.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod decimal;
mod span;
mod symbol;
mod token;

pub use decimal::Decimal;
pub use span::Span;
pub use symbol::{Symbol, SymbolTable};
pub use token::{Token, TokenKind, TokenValue};
