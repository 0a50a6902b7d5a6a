use std::io;

use thiserror::Error;

/// Everything that can go wrong while reading a line of input.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unknown name '{0}'")]
    UnknownName(String),
    #[error("invalid token '{0}'")]
    InvalidToken(char),
    #[error("{0} unclosed parentheses")]
    UnclosedParen(usize),
    #[error("extra closing parenthesis")]
    ExtraCloseParen,
    #[error("empty expression")]
    EmptyExpression,
    #[error("wrong syntax for definition, should be <name> = <expr>")]
    BadDefinition,
    #[error("cannot redefine built-in name '{0}'")]
    BuiltinRedefined(String),
    #[error("command ':{0}' expects an argument")]
    MissingArgument(&'static str),
    #[error("numeral {literal} is larger than the ceiling {ceiling}")]
    NumeralTooLarge { literal: String, ceiling: u64 },
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<EvalError>,
    },
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
