//! `lesc lex`: print the token stream of one file.

use les_lexer::{tokenize, Span, Token};
use serde::Serialize;

use super::{line_col, read_file, LescError};

#[derive(Serialize)]
struct JsonError {
    span: Span,
    line: usize,
    column: usize,
    message: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    path: &'a str,
    tokens: &'a [Token],
    errors: Vec<JsonError>,
}

/// Lex a file and display its tokens, as text or JSON.
pub fn lex_file(path: &str, json: bool) -> Result<bool, LescError> {
    let source = read_file(path)?;
    let output = tokenize(&source);
    tracing::debug!(path, tokens = output.tokens.len(), errors = output.errors.len(), "lexed");

    if json {
        let errors = output
            .errors
            .iter()
            .map(|e| {
                let (line, column) = line_col(&source, e.span.start);
                JsonError {
                    span: e.span,
                    line,
                    column,
                    message: e.message(),
                }
            })
            .collect();
        let doc = JsonOutput {
            path,
            tokens: &output.tokens,
            errors,
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
        for tok in &output.tokens {
            println!("  {tok:?}");
        }
        for error in &output.errors {
            let (line, col) = line_col(&source, error.span.start);
            eprintln!("{path}:{line}:{col}: error: {error}");
        }
    }

    Ok(!output.has_errors())
}
