use crate::lexer::tokens::{Token, TokenKind};
use crate::MK_TOKEN;

/// Checks that the first significant token is the program-start keyword.
///
/// On violation one `MissingStart` error token is prepended, carrying the
/// offending token's position (line 1, column 1 when the stream has no
/// significant token at all). The stream is otherwise left untouched.
pub fn validate(mut tokens: Vec<Token>) -> Vec<Token> {
    let missing = match tokens.iter().find(|token| token.kind.is_significant()) {
        Some(token) if token.kind == TokenKind::Start => None,
        Some(token) => Some((token.line, token.column)),
        None => Some((1, 1)),
    };

    if let Some((line, column)) = missing {
        tokens.insert(
            0,
            MK_TOKEN!(
                TokenKind::MissingStart,
                String::new(),
                line,
                column,
                String::from("Program must start with the reserved word 'als'")
            ),
        );
    }

    tokens
}
