//! Decoded token payloads.

use std::fmt;

use crate::{Decimal, Symbol};

/// The decoded value of a token.
///
/// Integer variants record the width the literal was stored at; the lexer
/// picks the narrowest width allowed by the literal's suffix.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenValue {
    #[default]
    None,
    /// Interned identifier, symbol, or `#`-prefixed operator name
    Name(Symbol),
    Str(String),
    Char(char),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
}

impl TokenValue {
    /// Returns `true` for the integer, float and decimal variants.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TokenValue::I32(_)
                | TokenValue::U32(_)
                | TokenValue::I64(_)
                | TokenValue::U64(_)
                | TokenValue::F32(_)
                | TokenValue::F64(_)
                | TokenValue::Decimal(_)
        )
    }

    /// The interned name, for identifier-like tokens.
    pub fn as_name(&self) -> Option<Symbol> {
        match self {
            TokenValue::Name(sym) => Some(*sym),
            _ => None,
        }
    }

    /// The decoded string, for string tokens.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Name(sym) => write!(f, "{sym}"),
            TokenValue::Str(s) => write!(f, "{s:?}"),
            TokenValue::Char(c) => write!(f, "{c:?}"),
            TokenValue::I32(v) => write!(f, "{v}"),
            TokenValue::U32(v) => write!(f, "{v}u"),
            TokenValue::I64(v) => write!(f, "{v}L"),
            TokenValue::U64(v) => write!(f, "{v}uL"),
            TokenValue::F32(v) => write!(f, "{v}f"),
            TokenValue::F64(v) => write!(f, "{v}d"),
            TokenValue::Decimal(v) => write!(f, "{v}m"),
        }
    }
}
