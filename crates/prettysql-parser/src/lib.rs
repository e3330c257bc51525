/// prettysql-parser - dialect-driven SQL tokenizer and shallow parser
///
/// This crate turns SQL text into a lossless, shallow syntax tree that a
/// formatter can lay out:
/// - A tokenizer configured by a `DialectConfig` value (reserved phrases,
///   quoting rules, operators, parameter syntaxes)
/// - A permissive recursive-descent parser that accepts any input and
///   recognizes clauses, set operations, function calls, brackets,
///   BETWEEN/LIMIT idioms and array subscripts
/// - A compact printer for round-trip checks
///
/// Neither stage can fail: malformed input degrades to flatter trees.
pub mod token_kind;
pub mod dialect;
pub mod error;
mod vocabulary;
pub mod lexer;
pub mod ast;
pub mod parser;
pub mod printer;

pub use token_kind::TokenKind;
pub use dialect::{dedupe, BracketKind, DialectConfig, ParamTypes, QuoteKind, QuoteStyle};
pub use error::ConfigError;
pub use lexer::{tokenize, Token, Tokenizer};
pub use parser::{parse, parse_str, Parser};
pub use printer::print_statements;
pub use ast::*;

/// Re-export Rowan types for convenience
pub use rowan::{TextRange, TextSize};
