/// Compact printer for converting syntax trees back to SQL
///
/// This is not a layout formatter: it writes every token verbatim on as few
/// lines as possible, which is what round-trip testing (parse → print →
/// parse) needs.
///
/// Spacing rules:
/// - One space between tokens
/// - No space between tokens that touched in the source when either is a
///   lone operator character, so a broken quote (`'`, `\`) re-tokenizes
///   the same way
/// - No space before a comma
/// - No space between a function or array name and its bracket
/// - No space just inside brackets
/// - A newline after a line comment
use crate::ast::*;
use crate::lexer::Token;
use crate::TokenKind::*;
use rowan::TextSize;
use std::fmt::{self, Display};

/// Print statements one per line.
pub fn print_statements(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spacing {
    None,
    Space,
    Newline,
}

#[derive(Debug)]
struct Printer {
    out: String,
    pending: Spacing,
    /// End offset of the last printed token and whether it is a lone operator character
    last: Option<(TextSize, bool)>,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::new(),
            pending: Spacing::None,
            last: None,
        }
    }

    fn token(&mut self, token: &Token) {
        if self.touches(token) {
            self.glue();
        }
        match self.pending {
            Spacing::Newline => self.out.push('\n'),
            Spacing::Space if token.kind != COMMA => self.out.push(' '),
            _ => {}
        }
        self.out.push_str(&token.text);
        self.pending = if token.kind == LINE_COMMENT {
            Spacing::Newline
        } else {
            Spacing::Space
        };
        self.last = Some((token.range.end(), is_lone_operator(token)));
    }

    /// Whether `token` started right where the last one ended, with a lone
    /// operator character on either side.
    fn touches(&self, token: &Token) -> bool {
        self.last.is_some_and(|(end, lone)| {
            end == token.range.start() && (lone || is_lone_operator(token))
        })
    }

    /// Suppress the next space (a newline after a line comment stays).
    fn glue(&mut self) {
        if self.pending == Spacing::Space {
            self.pending = Spacing::None;
        }
    }

    fn nodes(&mut self, nodes: &[AstNode]) {
        for node in nodes {
            self.node(node);
        }
    }

    fn node(&mut self, node: &AstNode) {
        match node {
            AstNode::Clause(Clause { name, children })
            | AstNode::SetOperation(SetOperation { name, children }) => {
                self.token(name);
                self.nodes(children);
            }
            AstNode::FunctionCall(FunctionCall { name, parenthesis })
            | AstNode::ArraySubscript(ArraySubscript {
                array: name,
                parenthesis,
            }) => {
                self.token(name);
                self.glue();
                self.parenthesis(parenthesis);
            }
            AstNode::Parenthesis(paren) => self.parenthesis(paren),
            AstNode::BetweenPredicate(between) => {
                self.token(&between.between);
                self.token(&between.expr1);
                self.token(&between.and);
                self.token(&between.expr2);
            }
            AstNode::LimitClause(limit) => {
                self.token(&limit.limit);
                if let Some(offset) = &limit.offset {
                    self.nodes(&offset.children);
                    self.token(&offset.comma);
                }
                self.nodes(&limit.count);
            }
            AstNode::AllColumnsAsterisk(token) | AstNode::Token(token) => self.token(token),
        }
    }

    fn parenthesis(&mut self, paren: &Parenthesis) {
        self.token(&paren.open);
        self.glue();
        self.nodes(&paren.children);
        if let Some(close) = &paren.close {
            self.glue();
            self.token(close);
        }
    }

    fn statement(&mut self, statement: &Statement) {
        self.nodes(&statement.children);
        if statement.has_semicolon {
            if self.pending == Spacing::Newline {
                self.out.push('\n');
            }
            self.out.push(';');
        }
    }
}

/// Single-character operators, which include the fallback for any
/// character no other rule claims.
fn is_lone_operator(token: &Token) -> bool {
    token.kind == OPERATOR && token.text.chars().count() == 1
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer::new();
        printer.statement(self);
        f.write_str(&printer.out)
    }
}

impl Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer::new();
        printer.node(self);
        f.write_str(&printer.out)
    }
}
