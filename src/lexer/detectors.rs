use super::tokens::TokenKind;

pub const MAX_NUMBER_LEN: usize = 15;
pub const MAX_IDENTIFIER_LEN: usize = 30;

/// A token produced by one of the error detectors, before the
/// generic pattern table gets a chance to run. The scanner advances by
/// the lexeme's length.
pub struct Detection {
    pub kind: TokenKind,
    pub lexeme: String,
    pub description: String,
}

/// Runs the detectors against the unconsumed remainder of the current
/// line, in fixed order. `None` hands the position over to the pattern
/// table.
pub fn detect_at(rest: &str) -> Option<Detection> {
    unterminated_text(rest)
        .or_else(|| malformed_number(rest))
        .or_else(|| leading_digit_identifier(rest))
        .or_else(|| malformed_identifier(rest))
}

/// Classifies a character that neither the detectors nor the pattern
/// table could consume.
pub fn fallback(ch: char) -> Detection {
    if ch == '@' {
        Detection {
            kind: TokenKind::InvalidSymbol,
            lexeme: ch.to_string(),
            description: String::from("Invalid symbol '@'"),
        }
    } else {
        Detection {
            kind: TokenKind::UnrecognizedChar,
            lexeme: ch.to_string(),
            description: format!("Unrecognized character: '{}'", ch),
        }
    }
}

fn unterminated_text(rest: &str) -> Option<Detection> {
    if !rest.starts_with('"') || rest[1..].contains('"') {
        return None;
    }

    // No closing quote on this line: the rest of the line is the lexeme
    // and the scanner abandons the line.
    Some(Detection {
        kind: TokenKind::UnterminatedText,
        lexeme: String::from(rest),
        description: String::from("Text value missing its closing quote"),
    })
}

fn malformed_number(rest: &str) -> Option<Detection> {
    let chars: Vec<char> = rest.chars().collect();
    if !chars.first()?.is_ascii_digit() {
        return None;
    }

    let mut end = 0;
    let mut seen_dot = false;
    let mut malformed = false;

    while end < chars.len() {
        let ch = chars[end];
        if malformed {
            // A letter poisoned the run: keep swallowing alphanumerics
            // and dots so the whole thing becomes one error token.
            if ch.is_ascii_alphanumeric() || ch == '.' {
                end += 1;
            } else {
                break;
            }
        } else if ch.is_ascii_digit() {
            end += 1;
        } else if ch == '.' && !seen_dot {
            seen_dot = true;
            end += 1;
        } else if ch.is_ascii_alphabetic() {
            malformed = true;
            end += 1;
        } else {
            break;
        }
    }

    let lexeme: String = chars[..end].iter().collect();

    if malformed {
        Some(Detection {
            kind: TokenKind::MalformedNumber,
            description: format!("Malformed number: '{}'", lexeme),
            lexeme,
        })
    } else if end > MAX_NUMBER_LEN {
        Some(Detection {
            kind: TokenKind::NumberTooLong,
            description: format!("Number longer than {} characters", MAX_NUMBER_LEN),
            lexeme,
        })
    } else {
        None
    }
}

fn leading_digit_identifier(rest: &str) -> Option<Detection> {
    let chars: Vec<char> = rest.chars().collect();
    if !chars.first()?.is_ascii_digit() {
        return None;
    }

    let run: String = chars
        .iter()
        .take_while(|ch| ch.is_ascii_alphanumeric() || **ch == '_' || **ch == '@')
        .collect();

    if run
        .chars()
        .any(|ch| ch.is_ascii_alphabetic() || ch == '_' || ch == '@')
    {
        Some(Detection {
            kind: TokenKind::MalformedIdentifier,
            description: format!("Identifier must not start with a digit: '{}'", run),
            lexeme: run,
        })
    } else {
        None
    }
}

fn malformed_identifier(rest: &str) -> Option<Detection> {
    let first = rest.chars().next()?;
    if !first.is_ascii_alphabetic() && first != '_' {
        return None;
    }

    let run: String = rest
        .chars()
        .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '@')
        .collect();

    if run.contains('@') {
        Some(Detection {
            kind: TokenKind::MalformedIdentifier,
            description: format!("Invalid character '@' in identifier: '{}'", run),
            lexeme: run,
        })
    } else if run.len() > MAX_IDENTIFIER_LEN {
        Some(Detection {
            kind: TokenKind::IdentifierTooLong,
            description: format!("Identifier longer than {} characters", MAX_IDENTIFIER_LEN),
            lexeme: run,
        })
    } else {
        None
    }
}
