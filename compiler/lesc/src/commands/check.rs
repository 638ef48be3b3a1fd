//! `lesc check`: report lexical errors in many files.

use les_lexer::tokenize;
use rayon::prelude::*;

use super::{line_col, read_file, LescError};

/// Diagnostics for one file, rendered as `path:line:col: error: message`.
fn check_one(path: &str) -> Result<Vec<String>, LescError> {
    let source = read_file(path)?;
    let output = tokenize(&source);
    Ok(output
        .errors
        .iter()
        .map(|e| {
            let (line, col) = line_col(&source, e.span.start);
            format!("{path}:{line}:{col}: error: {e}")
        })
        .collect())
}

/// Lex every file in parallel and print their errors in argument order.
///
/// Unreadable files are reported and count as failures; they do not stop
/// the remaining files from being checked.
pub fn check_files(paths: &[String]) -> Result<bool, LescError> {
    let results: Vec<_> = paths.par_iter().map(|p| check_one(p)).collect();

    let mut clean = true;
    let mut total = 0usize;
    for result in results {
        match result {
            Ok(diagnostics) => {
                total += diagnostics.len();
                clean &= diagnostics.is_empty();
                for line in diagnostics {
                    eprintln!("{line}");
                }
            }
            Err(e) => {
                clean = false;
                eprintln!("error: {e}");
            }
        }
    }

    if total > 0 {
        eprintln!("{total} lexical error(s) in {} file(s) checked", paths.len());
    }
    Ok(clean)
}
