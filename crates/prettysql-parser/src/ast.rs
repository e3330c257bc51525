/// Shallow syntax tree handed to the renderer
///
/// Nodes own copies of their tokens. Flattening a statement with
/// [`Statement::tokens`] yields every token between statement boundaries,
/// once each and in source order.
use crate::lexer::Token;

/// One top-level SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub children: Vec<AstNode>,
    /// Terminated by a `;` (the delimiter itself is not stored)
    pub has_semicolon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    Clause(Clause),
    SetOperation(SetOperation),
    FunctionCall(FunctionCall),
    ArraySubscript(ArraySubscript),
    Parenthesis(Parenthesis),
    BetweenPredicate(BetweenPredicate),
    LimitClause(LimitClause),
    /// `*` directly after SELECT
    AllColumnsAsterisk(Token),
    /// Anything not otherwise classified
    Token(Token),
}

/// A reserved command and everything up to the next clause boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub name: Token,
    pub children: Vec<AstNode>,
}

/// UNION / INTERSECT / EXCEPT and what follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOperation {
    pub name: Token,
    pub children: Vec<AstNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: Token,
    pub parenthesis: Parenthesis,
}

/// `arr[1]`: the parenthesis is always of the `[]` family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySubscript {
    pub array: Token,
    pub parenthesis: Parenthesis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parenthesis {
    pub open: Token,
    pub children: Vec<AstNode>,
    /// `None` when input ended before a matching close bracket
    pub close: Option<Token>,
}

impl Parenthesis {
    pub fn open_paren(&self) -> &str {
        &self.open.text
    }

    /// The closing bracket, or `""` for an unterminated group.
    pub fn close_paren(&self) -> &str {
        self.close.as_ref().map_or("", |t| t.text.as_str())
    }

    pub fn is_terminated(&self) -> bool {
        self.close.is_some()
    }
}

/// `BETWEEN expr1 AND expr2` with single-token operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetweenPredicate {
    pub between: Token,
    pub expr1: Token,
    pub and: Token,
    pub expr2: Token,
}

/// `LIMIT count` or `LIMIT offset, count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitClause {
    pub limit: Token,
    pub offset: Option<LimitOffset>,
    pub count: Vec<AstNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOffset {
    pub children: Vec<AstNode>,
    /// Separator before the count; renderers drop it
    pub comma: Token,
}

impl LimitClause {
    pub fn offset_children(&self) -> Option<&[AstNode]> {
        self.offset.as_ref().map(|offset| offset.children.as_slice())
    }
}

impl Statement {
    /// All tokens of the statement in source order (the delimiter excluded).
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        collect_all(&self.children, &mut out);
        out
    }
}

impl AstNode {
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    /// First token of the node in source order.
    pub fn first_token(&self) -> &Token {
        match self {
            AstNode::Clause(clause) => &clause.name,
            AstNode::SetOperation(op) => &op.name,
            AstNode::FunctionCall(call) => &call.name,
            AstNode::ArraySubscript(subscript) => &subscript.array,
            AstNode::Parenthesis(paren) => &paren.open,
            AstNode::BetweenPredicate(between) => &between.between,
            AstNode::LimitClause(limit) => &limit.limit,
            AstNode::AllColumnsAsterisk(token) | AstNode::Token(token) => token,
        }
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            AstNode::Clause(Clause { name, children })
            | AstNode::SetOperation(SetOperation { name, children }) => {
                out.push(name);
                collect_all(children, out);
            }
            AstNode::FunctionCall(FunctionCall { name, parenthesis })
            | AstNode::ArraySubscript(ArraySubscript {
                array: name,
                parenthesis,
            }) => {
                out.push(name);
                parenthesis.collect_tokens(out);
            }
            AstNode::Parenthesis(paren) => paren.collect_tokens(out),
            AstNode::BetweenPredicate(between) => {
                out.extend([&between.between, &between.expr1, &between.and, &between.expr2]);
            }
            AstNode::LimitClause(limit) => {
                out.push(&limit.limit);
                if let Some(offset) = &limit.offset {
                    collect_all(&offset.children, out);
                    out.push(&offset.comma);
                }
                collect_all(&limit.count, out);
            }
            AstNode::AllColumnsAsterisk(token) | AstNode::Token(token) => out.push(token),
        }
    }
}

impl Parenthesis {
    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(&self.open);
        collect_all(&self.children, out);
        out.extend(&self.close);
    }
}

fn collect_all<'a>(nodes: &'a [AstNode], out: &mut Vec<&'a Token>) {
    for node in nodes {
        node.collect_tokens(out);
    }
}
