use std::collections::HashMap;
use std::fmt::Write;

use crate::lexer::tokens::{Token, TokenKind};

/// Read-only aggregates over a finished analysis. Totals exclude the
/// end-of-input marker and whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_tokens: usize,
    pub total_errors: usize,
    pub tokens_valid: usize,
    pub counts_by_kind: HashMap<TokenKind, usize>,
}

/// Produces the fixed-width token table, one row per token, end-of-input
/// excluded. Console printers and GUI panes show this text verbatim.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<20} {:<15} {:<6} {:<7} {}",
        "Token", "Lexeme", "Line", "Column", "Description"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));

    for token in tokens {
        if token.kind == TokenKind::EOF {
            continue;
        }
        let _ = writeln!(
            out,
            "{:<20} {:<15} {:<6} {:<7} {}",
            token.kind.to_string(),
            token.lexeme,
            token.line,
            token.column,
            token.description
        );
    }

    out
}

pub fn statistics(tokens: &[Token]) -> Statistics {
    let mut counts_by_kind: HashMap<TokenKind, usize> = HashMap::new();
    let mut total_tokens = 0;
    let mut total_errors = 0;

    for token in tokens {
        if token.kind == TokenKind::EOF || token.kind == TokenKind::Whitespace {
            continue;
        }

        total_tokens += 1;
        *counts_by_kind.entry(token.kind).or_insert(0) += 1;

        if token.is_error() {
            total_errors += 1;
        }
    }

    Statistics {
        total_tokens,
        total_errors,
        tokens_valid: total_tokens - total_errors,
        counts_by_kind,
    }
}
