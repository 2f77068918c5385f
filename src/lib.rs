#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use crate::errors::errors::Error;
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::Token;
use crate::type_checker::type_checker::check_types;
use crate::validator::validator::validate;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;
pub mod type_checker;
pub mod validator;

extern crate regex;

/// Runs the full analysis pipeline over a source text: scanner, then
/// structural validator, then type checker. Pure function of its input;
/// the caller owns the resulting token sequence.
pub fn analyze(source: &str) -> Vec<Token> {
    let tokens = tokenize(source);
    let tokens = validate(tokens);
    check_types(tokens)
}

/// Reads a source file on behalf of the analysis core, which itself
/// performs no I/O.
pub fn load_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
