//! Utility macros for the analyzer.
//!
//! This module defines helper macros used throughout the analyzer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates a pattern table row for the scanner
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$line` - 1-based source line
/// * `$column` - 1-based source column
/// * `$description` - Human-readable classification
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), 1, 1, "Integer value".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $column:expr, $description:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            column: $column,
            description: $description,
        }
    };
}

/// Creates a pattern table row.
///
/// Generates a `TokenPattern` with a compiled regex; rows are tried in
/// declaration order, so placement in the table is the disambiguation
/// policy.
///
/// # Arguments
///
/// * `$kind` - The TokenKind the row classifies
/// * `$pattern` - The regex source (matched at the scan position)
/// * `$description` - Human-readable classification carried by the token
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Start, r"\bals\b", "Reserved word: program start")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $pattern:expr, $description:literal) => {
        TokenPattern {
            kind: $kind,
            regex: Regex::new($pattern).unwrap(),
            description: $description,
        }
    };
}
