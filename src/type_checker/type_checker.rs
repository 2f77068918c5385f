use std::collections::HashMap;

use crate::lexer::tokens::{Token, TokenKind};
use crate::MK_TOKEN;

/// Walks the finalized token stream with a three-token window, recording
/// `type-keyword identifier` declarations and flagging literal
/// assignments that contradict the declared type.
///
/// Violations become `IncompatibleType` tokens appended after the
/// end-of-input marker; the declared-variable map lives and dies inside
/// this call.
pub fn check_types(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut declared: HashMap<String, String> = HashMap::new();
    let mut violations: Vec<Token> = vec![];
    let mut index = 0;

    while index < tokens.len() {
        // Declaration: a type keyword directly followed by an identifier.
        if tokens[index].kind == TokenKind::TypeKeyword
            && index + 1 < tokens.len()
            && tokens[index + 1].kind == TokenKind::Identifier
        {
            declared.insert(
                tokens[index + 1].lexeme.clone(),
                tokens[index].lexeme.clone(),
            );
            index += 2;
            continue;
        }

        // Assignment to a declared variable: identifier, `<=`, value.
        if tokens[index].kind == TokenKind::Identifier
            && index + 2 < tokens.len()
            && tokens[index + 1].kind == TokenKind::AssignOp
        {
            if let Some(declared_type) = declared.get(&tokens[index].lexeme) {
                if let Some(violation) =
                    incompatibility(&tokens[index], declared_type, &tokens[index + 2])
                {
                    violations.push(violation);
                }
                index += 3;
                continue;
            }
        }

        index += 1;
    }

    tokens.extend(violations);
    tokens
}

fn incompatibility(variable: &Token, declared_type: &str, value: &Token) -> Option<Token> {
    let incompatible = match declared_type {
        "intn" => value.kind == TokenKind::RealLiteral,
        "bln" => value.kind != TokenKind::BoolLiteral,
        "txt" => value.kind != TokenKind::TextLiteral,
        // den and crt carry no compatibility rule
        _ => false,
    };

    if !incompatible {
        return None;
    }

    Some(MK_TOKEN!(
        TokenKind::IncompatibleType,
        format!("{} <= {}", variable.lexeme, value.lexeme),
        variable.line,
        variable.column,
        format!(
            "Variable '{}' of type '{}' assigned incompatible value '{}'",
            variable.lexeme, declared_type, value.lexeme
        )
    ))
}
