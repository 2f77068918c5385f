use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_PATTERN, MK_TOKEN};

use super::detectors::{detect_at, fallback};
use super::tokens::{Token, TokenKind};

pub struct TokenPattern {
    pub kind: TokenKind,
    pub regex: Regex,
    pub description: &'static str,
}

lazy_static! {
    /// The pattern table. Rows are tried top to bottom at each scan
    /// position and the first hit wins, so order encodes priority:
    /// comments before the `-` operator, reserved words before the
    /// identifier catch-all, real literals before integer literals.
    pub static ref TOKEN_PATTERNS: Vec<TokenPattern> = vec![
        MK_PATTERN!(TokenKind::Comment, r"--.*", "Line comment"),
        MK_PATTERN!(TokenKind::Start, r"\bals\b", "Reserved word: program start"),
        MK_PATTERN!(TokenKind::ElseIf, r"!cdt\+", "Reserved word: else-if"),
        // `!cdt+` sits above this row, so the plain form cannot shadow it
        MK_PATTERN!(TokenKind::Else, r"!cdt", "Reserved word: else"),
        MK_PATTERN!(TokenKind::If, r"\bcdt\b", "Reserved word: conditional"),
        MK_PATTERN!(TokenKind::LoopFor, r"\bcycle\b", "Reserved word: for loop"),
        MK_PATTERN!(TokenKind::LoopWhile, r"\bduring\b", "Reserved word: while loop"),
        MK_PATTERN!(TokenKind::LoopRepeat, r"\brepeat\b", "Reserved word: counted repetition"),
        MK_PATTERN!(TokenKind::Write, r"\bwrt\b", "Reserved word: output"),
        MK_PATTERN!(TokenKind::Function, r"\bfunction\b", "Reserved word: function definition"),
        MK_PATTERN!(TokenKind::FunctionName, r"\bfuncao\s+[a-zA-Z][a-zA-Z0-9]*", "Function name declaration"),
        MK_PATTERN!(TokenKind::LineBreak, r"\bbrkln\b", "Reserved word: line break"),
        MK_PATTERN!(TokenKind::TypeKeyword, r"\b(intn|den|txt|bln|crt)\b", "Variable type"),
        MK_PATTERN!(TokenKind::VarDecl, r"\bvar\b", "Reserved word: variable declaration"),
        MK_PATTERN!(TokenKind::BoolLiteral, r"\b(valid|invalid)\b", "Boolean value"),
        MK_PATTERN!(TokenKind::RelOp, r"\b(gt|eq|ne|lt|ge|le)\b", "Relational operator"),
        MK_PATTERN!(TokenKind::LogicOp, r"\b(and|or)\b", "Logical operator"),
        MK_PATTERN!(TokenKind::AssignOp, r"<=", "Assignment operator"),
        MK_PATTERN!(TokenKind::MathOp, r"[+\-*/]", "Arithmetic operator"),
        MK_PATTERN!(TokenKind::RealLiteral, r"\b[0-9]+\.[0-9]+\b", "Real value"),
        MK_PATTERN!(TokenKind::IntLiteral, r"\b[0-9]+\b", "Integer value"),
        MK_PATTERN!(TokenKind::TextLiteral, "\"[^\"]*\"", "Text value"),
        MK_PATTERN!(TokenKind::OpenParen, r"\(", "Opening parenthesis"),
        MK_PATTERN!(TokenKind::CloseParen, r"\)", "Closing parenthesis"),
        MK_PATTERN!(TokenKind::OpenBracket, r"\[", "Opening bracket"),
        MK_PATTERN!(TokenKind::CloseBracket, r"\]", "Closing bracket"),
        MK_PATTERN!(TokenKind::Comma, r",", "Comma"),
        MK_PATTERN!(TokenKind::Identifier, r"[a-zA-Z_][a-zA-Z0-9_]*", "Identifier"),
        MK_PATTERN!(TokenKind::Whitespace, r"[ \t]+", "Whitespace"),
    ];
}

fn match_pattern(rest: &str) -> Option<(&'static TokenPattern, &'_ str)> {
    for pattern in TOKEN_PATTERNS.iter() {
        if let Some(found) = pattern.regex.find(rest) {
            if found.start() == 0 {
                return Some((pattern, found.as_str()));
            }
        }
    }

    None
}

/// Scans the source into tokens, one line at a time.
///
/// At each column the error detectors run first, then the
/// pattern table in declaration order. Whitespace matches are consumed
/// silently. A position nothing claims yields a one-character error
/// token. Exactly one end-of-input token is appended, positioned one
/// line past the last.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = vec![];
    let lines: Vec<&str> = source.split('\n').collect();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let mut column = 0;

        while column < line.len() {
            let rest = &line[column..];

            if let Some(detection) = detect_at(rest) {
                let advance = detection.lexeme.len();
                tokens.push(MK_TOKEN!(
                    detection.kind,
                    detection.lexeme,
                    line_number,
                    column + 1,
                    detection.description
                ));
                column += advance;
                continue;
            }

            if let Some((pattern, lexeme)) = match_pattern(rest) {
                if pattern.kind != TokenKind::Whitespace {
                    tokens.push(MK_TOKEN!(
                        pattern.kind,
                        String::from(lexeme),
                        line_number,
                        column + 1,
                        String::from(pattern.description)
                    ));
                }
                column += lexeme.len();
                continue;
            }

            let ch = match rest.chars().next() {
                Some(ch) => ch,
                None => break,
            };
            let detection = fallback(ch);
            let advance = detection.lexeme.len();
            tokens.push(MK_TOKEN!(
                detection.kind,
                detection.lexeme,
                line_number,
                column + 1,
                detection.description
            ));
            column += advance;
        }
    }

    tokens.push(MK_TOKEN!(
        TokenKind::EOF,
        String::new(),
        lines.len() + 1,
        1,
        String::from("End of input")
    ));

    tokens
}
