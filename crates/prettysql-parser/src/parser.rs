/// Permissive recursive-descent parser producing a shallow syntax tree
use crate::ast::*;
use crate::dialect::{BracketKind, DialectConfig};
use crate::lexer::{tokenize, Token};
use crate::token_kind::TokenKind;
use crate::TokenKind::*;
use rowan::TextSize;
use tracing::{debug, trace, warn};

/// Parse a token stream into statements. Never fails.
pub fn parse(tokens: &[Token]) -> Vec<Statement> {
    Parser::new(tokens).parse()
}

/// Tokenize and parse input text in one go.
pub fn parse_str(input: &str, config: &DialectConfig) -> Vec<Statement> {
    let tokens = tokenize(input, config);
    parse(&tokens)
}

/// A parser rule: returns `None` without consuming anything when it does not
/// apply at the current position.
type Rule<'a> = fn(&mut Parser<'a>) -> Option<AstNode>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
    depth: usize,
    max_depth: usize,
    depth_exceeded: bool,
}

impl<'a> Parser<'a> {
    /// Bracket nesting beyond this degrades to flat tokens.
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(TextSize::from(0), |t| t.range.end());
        Self {
            tokens,
            pos: 0,
            eof: Token::eof(end),
            depth: 0,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            depth_exceeded: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn parse(mut self) -> Vec<Statement> {
        let mut statements = Vec::new();
        while let Some(statement) = self.statement() {
            trace!(
                children = statement.children.len(),
                has_semicolon = statement.has_semicolon,
                "parsed statement"
            );
            statements.push(statement);
        }
        debug!(
            tokens = self.tokens.len(),
            statements = statements.len(),
            "parsed token stream"
        );
        statements
    }

    // ===== Cursor =====

    /// Token at `ahead` positions from the cursor (negative looks back),
    /// or the EOF sentinel when out of range.
    fn look(&self, ahead: isize) -> &Token {
        self.pos
            .checked_add_signed(ahead)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&self.eof)
    }

    /// Current token kind
    fn current(&self) -> TokenKind {
        self.look(0).kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    /// Return the current token and advance past it
    fn next(&mut self) -> Token {
        let token = self.look(0).clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn at_bracket(&self, ahead: isize, open: &str) -> bool {
        let token = self.look(ahead);
        token.kind == OPEN_PAREN && token.text == open
    }

    fn nesting_allowed(&mut self) -> bool {
        if self.depth < self.max_depth {
            return true;
        }
        if !self.depth_exceeded {
            warn!(
                max_depth = self.max_depth,
                "bracket nesting too deep, keeping remaining brackets flat"
            );
            self.depth_exceeded = true;
        }
        false
    }

    // ===== Parsing rules =====

    fn statement(&mut self) -> Option<Statement> {
        let mut children = Vec::new();
        loop {
            match self.current() {
                DELIMITER => {
                    self.next();
                    return Some(Statement {
                        children,
                        has_semicolon: true,
                    });
                }
                EOF if children.is_empty() => return None,
                EOF => {
                    return Some(Statement {
                        children,
                        has_semicolon: false,
                    })
                }
                _ => children.push(self.expression()),
            }
        }
    }

    /// Parse one node. Rules are tried in order and the first that applies
    /// wins; the order resolves constructs whose starts overlap.
    fn expression(&mut self) -> AstNode {
        let rules: [Rule<'a>; 8] = [
            Self::limit_clause,
            Self::clause,
            Self::set_operation,
            Self::function_call,
            Self::array_subscript,
            Self::parenthesis,
            Self::between_predicate,
            Self::all_columns_asterisk,
        ];

        for rule in rules {
            if let Some(node) = rule(self) {
                return node;
            }
        }
        self.next_token_node()
    }

    fn limit_clause(&mut self) -> Option<AstNode> {
        if !self.look(0).is_limit() {
            return None;
        }

        let limit = self.next();
        let first = self.expressions_until_clause_end(true);
        let clause = if self.at(COMMA) {
            // LIMIT offset, count
            let comma = self.next();
            LimitClause {
                limit,
                offset: Some(LimitOffset {
                    children: first,
                    comma,
                }),
                count: self.expressions_until_clause_end(false),
            }
        } else {
            LimitClause {
                limit,
                offset: None,
                count: first,
            }
        };
        Some(AstNode::LimitClause(clause))
    }

    fn clause(&mut self) -> Option<AstNode> {
        if !self.at(RESERVED_COMMAND) {
            return None;
        }
        let name = self.next();
        let children = self.expressions_until_clause_end(false);
        Some(AstNode::Clause(Clause { name, children }))
    }

    fn set_operation(&mut self) -> Option<AstNode> {
        if !self.at(RESERVED_SET_OPERATION) {
            return None;
        }
        let name = self.next();
        let children = self.expressions_until_clause_end(false);
        Some(AstNode::SetOperation(SetOperation { name, children }))
    }

    fn function_call(&mut self) -> Option<AstNode> {
        if !(self.at(RESERVED_FUNCTION_NAME) && self.at_bracket(1, "(") && self.nesting_allowed()) {
            return None;
        }
        let name = self.next();
        let parenthesis = self.parenthesis_group()?;
        Some(AstNode::FunctionCall(FunctionCall { name, parenthesis }))
    }

    fn array_subscript(&mut self) -> Option<AstNode> {
        let is_array = matches!(self.current(), RESERVED_KEYWORD | IDENTIFIER);
        if !(is_array && self.at_bracket(1, "[") && self.nesting_allowed()) {
            return None;
        }
        let array = self.next();
        let parenthesis = self.parenthesis_group()?;
        Some(AstNode::ArraySubscript(ArraySubscript { array, parenthesis }))
    }

    fn parenthesis(&mut self) -> Option<AstNode> {
        self.parenthesis_group().map(AstNode::Parenthesis)
    }

    fn parenthesis_group(&mut self) -> Option<Parenthesis> {
        if !self.at(OPEN_PAREN) || !self.nesting_allowed() {
            return None;
        }

        let open = self.next();
        let family = BracketKind::of(&open.text);
        let mut children = Vec::new();
        let mut close = None;

        self.depth += 1;
        loop {
            match self.current() {
                EOF => break,
                CLOSE_PAREN if BracketKind::of(&self.look(0).text) == family => {
                    close = Some(self.next());
                    break;
                }
                // A bracket of another family never closes this group
                CLOSE_PAREN => children.push(self.next_token_node()),
                _ => children.push(self.expression()),
            }
        }
        self.depth -= 1;

        if close.is_none() {
            debug!(open = %open.text, offset = ?open.range.start(), "unterminated bracket group");
        }
        Some(Parenthesis {
            open,
            children,
            close,
        })
    }

    fn between_predicate(&mut self) -> Option<AstNode> {
        let is_between = self.look(0).is_word("BETWEEN")
            && self.look(2).is_word("AND")
            && is_operand(self.look(1))
            && is_operand(self.look(3));
        if !is_between {
            return None;
        }
        Some(AstNode::BetweenPredicate(BetweenPredicate {
            between: self.next(),
            expr1: self.next(),
            and: self.next(),
            expr2: self.next(),
        }))
    }

    fn all_columns_asterisk(&mut self) -> Option<AstNode> {
        if self.look(0).text == "*" && self.look(-1).is_select() {
            return Some(AstNode::AllColumnsAsterisk(self.next()));
        }
        None
    }

    fn next_token_node(&mut self) -> AstNode {
        AstNode::Token(self.next())
    }

    /// Collect nodes until a clause boundary, or a comma when `stop_at_comma`.
    fn expressions_until_clause_end(&mut self, stop_at_comma: bool) -> Vec<AstNode> {
        let mut children = Vec::new();
        while !self.current().ends_clause() && !(stop_at_comma && self.at(COMMA)) {
            children.push(self.expression());
        }
        children
    }
}

/// Single-token BETWEEN operands must not be structural tokens.
fn is_operand(token: &Token) -> bool {
    !token.is_eof() && !matches!(token.kind, DELIMITER | OPEN_PAREN | CLOSE_PAREN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{BracketKind, DialectConfig};

    fn config() -> DialectConfig {
        DialectConfig {
            reserved_commands: vec![
                "SELECT".into(),
                "SELECT DISTINCT".into(),
                "FROM".into(),
                "WHERE".into(),
                "LIMIT".into(),
                "ORDER BY".into(),
            ],
            reserved_set_operations: vec!["UNION".into(), "UNION ALL".into()],
            reserved_keywords: vec!["BETWEEN".into(), "AS".into(), "ARRAY".into()],
            reserved_function_names: vec!["COUNT".into(), "SUM".into()],
            brackets: vec![BracketKind::Round, BracketKind::Square],
            ..DialectConfig::default()
        }
    }

    fn parse_sql(input: &str) -> Vec<Statement> {
        parse_str(input, &config())
    }

    fn single(input: &str) -> Vec<AstNode> {
        let mut statements = parse_sql(input);
        assert_eq!(statements.len(), 1, "expected one statement for {input:?}");
        statements.remove(0).children
    }

    fn texts(nodes: &[AstNode]) -> Vec<String> {
        nodes
            .iter()
            .flat_map(|n| n.tokens())
            .map(|t| t.text.clone())
            .collect()
    }

    fn clause(node: &AstNode) -> &Clause {
        match node {
            AstNode::Clause(clause) => clause,
            other => panic!("expected clause, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse(&[]).is_empty());
        assert!(parse_sql("   ").is_empty());
    }

    #[test]
    fn test_statement_splitting() {
        let statements = parse_sql("SELECT * FROM t ; SELECT 1");
        assert_eq!(statements.len(), 2);
        assert!(statements[0].has_semicolon);
        assert!(!statements[1].has_semicolon);
        assert_eq!(statements[0].children.len(), 2);
    }

    #[test]
    fn test_lone_delimiter_is_empty_statement() {
        let statements = parse_sql(";");
        assert_eq!(statements.len(), 1);
        assert!(statements[0].children.is_empty());
        assert!(statements[0].has_semicolon);
    }

    #[test]
    fn test_clauses() {
        let nodes = single("SELECT a, b FROM t WHERE x = 1");
        assert_eq!(nodes.len(), 3);
        let select = clause(&nodes[0]);
        assert_eq!(select.name.text, "SELECT");
        assert_eq!(texts(&select.children), vec!["a", ",", "b"]);
        assert_eq!(clause(&nodes[2]).name.text, "WHERE");
    }

    #[test]
    fn test_subquery_clauses_stay_inside_parenthesis() {
        let nodes = single("SELECT * FROM (SELECT a FROM t) sub WHERE x");
        assert_eq!(nodes.len(), 3);
        let from = clause(&nodes[1]);
        let AstNode::Parenthesis(paren) = &from.children[0] else {
            panic!("expected parenthesis");
        };
        assert_eq!(paren.children.len(), 2);
        assert_eq!(paren.close_paren(), ")");
        assert_eq!(texts(&from.children[1..]), vec!["sub"]);
    }

    #[test]
    fn test_set_operation() {
        let nodes = single("SELECT 1 UNION ALL SELECT 2");
        assert_eq!(nodes.len(), 3);
        let AstNode::SetOperation(op) = &nodes[1] else {
            panic!("expected set operation");
        };
        assert_eq!(op.name.text, "UNION ALL");
        assert!(op.children.is_empty());
    }

    #[test]
    fn test_function_call() {
        let nodes = single("SELECT COUNT(*), my_fn(x)");
        let select = clause(&nodes[0]);
        let AstNode::FunctionCall(call) = &select.children[0] else {
            panic!("expected function call");
        };
        assert_eq!(call.name.text, "COUNT");
        assert_eq!(texts(&call.parenthesis.children), vec!["*"]);
        // Not a known function: identifier followed by a parenthesis
        assert!(matches!(select.children[2], AstNode::Token(_)));
        assert!(matches!(select.children[3], AstNode::Parenthesis(_)));
    }

    #[test]
    fn test_array_subscript() {
        let nodes = single("SELECT arr[1], ARRAY[2]");
        let select = clause(&nodes[0]);
        let AstNode::ArraySubscript(subscript) = &select.children[0] else {
            panic!("expected array subscript");
        };
        assert_eq!(subscript.array.text, "arr");
        assert_eq!(subscript.parenthesis.open_paren(), "[");
        assert_eq!(subscript.parenthesis.close_paren(), "]");
        assert!(matches!(select.children[2], AstNode::ArraySubscript(_)));
    }

    #[test]
    fn test_unterminated_parenthesis() {
        let nodes = single("SELECT (a, (b");
        let select = clause(&nodes[0]);
        let AstNode::Parenthesis(outer) = &select.children[0] else {
            panic!("expected parenthesis");
        };
        assert_eq!(outer.open_paren(), "(");
        assert_eq!(outer.close_paren(), "");
        assert!(!outer.is_terminated());
    }

    #[test]
    fn test_mismatched_bracket_does_not_close() {
        let nodes = single("[a)]");
        let AstNode::Parenthesis(paren) = &nodes[0] else {
            panic!("expected parenthesis");
        };
        assert_eq!(paren.close_paren(), "]");
        assert_eq!(texts(&paren.children), vec!["a", ")"]);
    }

    #[test]
    fn test_stray_close_paren_is_a_leaf() {
        let nodes = single("SELECT a) FROM t");
        assert_eq!(nodes.len(), 3);
        assert!(matches!(&nodes[1], AstNode::Token(t) if t.text == ")"));
    }

    #[test]
    fn test_between_predicate() {
        let nodes = single("SELECT * FROM t WHERE x BETWEEN 1 AND 10");
        let filter = clause(&nodes[2]);
        let AstNode::BetweenPredicate(between) = &filter.children[1] else {
            panic!("expected between");
        };
        assert_eq!(between.expr1.text, "1");
        assert_eq!(between.and.text, "AND");
        assert_eq!(between.expr2.text, "10");
        assert_eq!(filter.children.len(), 2);
    }

    #[test]
    fn test_incomplete_between_stays_flat() {
        let nodes = single("x BETWEEN 1 AND");
        assert_eq!(nodes.len(), 4);
        assert!(nodes.iter().all(|n| matches!(n, AstNode::Token(_))));
    }

    #[test]
    fn test_limit_forms() {
        let nodes = single("SELECT a LIMIT 10");
        let AstNode::LimitClause(limit) = &nodes[1] else {
            panic!("expected limit");
        };
        assert_eq!(texts(&limit.count), vec!["10"]);
        assert!(limit.offset.is_none());

        let nodes = single("SELECT a LIMIT 5, 10");
        let AstNode::LimitClause(limit) = &nodes[1] else {
            panic!("expected limit");
        };
        assert_eq!(texts(limit.offset_children().unwrap()), vec!["5"]);
        assert_eq!(texts(&limit.count), vec!["10"]);
    }

    #[test]
    fn test_asterisk_context() {
        let nodes = single("SELECT * FROM t");
        let select = clause(&nodes[0]);
        assert!(matches!(select.children[0], AstNode::AllColumnsAsterisk(_)));

        let nodes = single("SELECT DISTINCT * FROM t");
        let select = clause(&nodes[0]);
        assert!(matches!(select.children[0], AstNode::AllColumnsAsterisk(_)));

        let nodes = single("SELECT a * 2");
        let select = clause(&nodes[0]);
        assert!(matches!(&select.children[1], AstNode::Token(t) if t.text == "*"));
    }

    #[test]
    fn test_statements_are_lossless() {
        let input = "SELECT COUNT(*) FROM (SELECT a FROM t) WHERE a BETWEEN 1 AND 2 LIMIT 5, 10; x)(";
        let tokens = tokenize(input, &config());
        let statements = parse(&tokens);

        let flattened: Vec<&Token> = statements.iter().flat_map(|s| s.tokens()).collect();
        let expected: Vec<&Token> = tokens.iter().filter(|t| t.kind != DELIMITER).collect();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_nesting_bound_keeps_parse_total() {
        let input = format!("SELECT {}1{}", "(".repeat(50), ")".repeat(50));
        let tokens = tokenize(&input, &config());
        let statements = Parser::new(&tokens).with_max_depth(10).parse();

        let flattened: Vec<&Token> = statements.iter().flat_map(|s| s.tokens()).collect();
        assert_eq!(flattened.len(), tokens.len());
    }

    #[test]
    fn test_deep_nesting_default_bound() {
        let input = "(".repeat(10_000);
        let statements = parse_sql(&input);
        let flattened: usize = statements.iter().map(|s| s.tokens().len()).sum();
        assert_eq!(flattened, 10_000);
    }
}
