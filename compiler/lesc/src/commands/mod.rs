//! Command implementations.
//!
//! Each command returns `Ok(true)` when the input is free of lexical errors,
//! `Ok(false)` when errors were reported, and `Err` when the input could not
//! be read or the output could not be produced.

mod check;
mod lex;

pub use check::check_files;
pub use lex::lex_file;

use std::io;

/// Failures outside of lexing itself.
#[derive(Debug, thiserror::Error)]
pub enum LescError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl LescError {
    fn read(path: &str, error: io::Error) -> Self {
        let path = path.to_owned();
        match error.kind() {
            io::ErrorKind::NotFound => LescError::NotFound { path },
            io::ErrorKind::PermissionDenied => LescError::PermissionDenied { path },
            io::ErrorKind::InvalidData => LescError::InvalidUtf8 { path },
            _ => LescError::Io {
                path,
                source: error,
            },
        }
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, LescError> {
    std::fs::read_to_string(path).map_err(|e| LescError::read(path, e))
}

/// 1-based line and column (in characters) of a byte offset.
pub(crate) fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let before = source
        .get(..offset as usize)
        .unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}
