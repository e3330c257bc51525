//! Property-based round-trip tests
//!
//! These tests use proptest to generate thousands of SQL scripts and verify that:
//! 1. Tokenizing and parsing never panic
//! 2. Tokens cover the input exactly, apart from whitespace
//! 3. The tree survives print → re-parse unchanged

use prettysql_dialects::Dialect;
use prettysql_parser::{
    dedupe, parse, parse_str, print_statements, AstNode, DialectConfig, Parenthesis, Statement,
    Tokenizer,
};
use proptest::prelude::*;

use proptest_generators::*;

/// Tree structure with ranges left out: kinds, texts and nesting only.
fn shape(statements: &[Statement]) -> Vec<String> {
    fn node(node: &AstNode) -> String {
        match node {
            AstNode::Clause(c) => format!("Clause({}){}", c.name.text, nodes(&c.children)),
            AstNode::SetOperation(s) => format!("SetOperation({}){}", s.name.text, nodes(&s.children)),
            AstNode::FunctionCall(f) => format!("FunctionCall({}){}", f.name.text, paren(&f.parenthesis)),
            AstNode::ArraySubscript(a) => format!("ArraySubscript({}){}", a.array.text, paren(&a.parenthesis)),
            AstNode::Parenthesis(p) => paren(p),
            AstNode::BetweenPredicate(b) => format!("Between({} {})", b.expr1.text, b.expr2.text),
            AstNode::LimitClause(l) => format!(
                "Limit({:?}){}",
                l.offset_children().map(nodes),
                nodes(&l.count)
            ),
            AstNode::AllColumnsAsterisk(_) => "AllColumns".to_string(),
            AstNode::Token(t) => format!("{:?}({})", t.kind, t.text),
        }
    }

    fn nodes(children: &[AstNode]) -> String {
        let inner: Vec<String> = children.iter().map(node).collect();
        format!("[{}]", inner.join(" "))
    }

    fn paren(p: &Parenthesis) -> String {
        format!("{}{}{}", p.open_paren(), nodes(&p.children), p.close_paren())
    }

    statements
        .iter()
        .map(|s| format!("{}{}", nodes(&s.children), if s.has_semicolon { ";" } else { "" }))
        .collect()
}

/// Helper to perform round-trip test: parse → print → parse
fn assert_round_trip(sql: &str, config: &DialectConfig) {
    let parse1 = parse_str(sql, config);
    let printed = print_statements(&parse1);
    let parse2 = parse_str(&printed, config);

    if shape(&parse1) != shape(&parse2) {
        panic!(
            "Round-trip failed!\nOriginal: {}\nPrinted: {}\nTree1: {:#?}\nTree2: {:#?}",
            sql,
            printed,
            shape(&parse1),
            shape(&parse2)
        );
    }

    // Printing is a fixed point after one pass
    assert_eq!(print_statements(&parse2), printed);
}

/// Token texts sit at their ranges and only whitespace lies between them.
fn assert_lossless(input: &str, config: &DialectConfig) {
    let tokens = Tokenizer::new(config).tokenize(input);
    let mut cursor = 0usize;
    for token in &tokens {
        let start = usize::from(token.range.start());
        let end = usize::from(token.range.end());
        assert!(
            input[cursor..start].chars().all(char::is_whitespace),
            "non-whitespace dropped before {:?} in {:?}",
            token,
            input
        );
        assert_eq!(&input[start..end], token.text);
        assert!(!token.text.is_empty());
        cursor = end;
    }
    assert!(input[cursor..].chars().all(char::is_whitespace));

    let statements = parse(&tokens);
    let kept: usize = statements.iter().map(|s| s.tokens().len()).sum();
    let delimiters = statements.iter().filter(|s| s.has_semicolon).count();
    assert_eq!(kept + delimiters, tokens.len());
}

fn arb_dialect() -> impl Strategy<Value = Dialect> {
    prop::sample::select(Dialect::ALL.to_vec())
}

// ===== Property tests for round-trip preservation =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: generated SELECT statements round-trip in every dialect
    #[test]
    fn prop_select_round_trip(sql in arb_select(), dialect in arb_dialect()) {
        assert_round_trip(&sql, &dialect.config());
    }

    /// Property: set operations round-trip
    #[test]
    fn prop_compound_select_round_trip(sql in arb_compound_select(), dialect in arb_dialect()) {
        assert_round_trip(&sql, &dialect.config());
    }

    /// Property: multi-statement scripts round-trip with statement count intact
    #[test]
    fn prop_script_round_trip(sql in arb_script(), dialect in arb_dialect()) {
        let config = dialect.config();
        assert_round_trip(&sql, &config);
        let printed = print_statements(&parse_str(&sql, &config));
        prop_assert_eq!(parse_str(&printed, &config).len(), parse_str(&sql, &config).len());
    }
}

// ===== Property tests for robustness =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: Tokens account for every non-whitespace character of generated SQL
    #[test]
    fn prop_generated_sql_is_lossless(sql in arb_script(), dialect in arb_dialect()) {
        assert_lossless(&sql, &dialect.config());
    }

    /// Property: Tokenizer and parser never panic or lose text on arbitrary strings
    #[test]
    fn prop_arbitrary_input_is_lossless(s in "\\PC{0,100}", dialect in arb_dialect()) {
        assert_lossless(&s, &dialect.config());
    }

    /// Property: SQL-flavoured noise (unbalanced brackets, stray quotes) is handled
    #[test]
    fn prop_sql_noise_is_lossless(
        s in "(SELECT|FROM|LIMIT|BETWEEN|AND|COUNT|\\(|\\)|\\[|\\]|'|\"|,|;|\\*|--|/\\*|\\$|\\?| |x|1){0,40}",
        dialect in arb_dialect(),
    ) {
        assert_lossless(&s, &dialect.config());
    }
}

// ===== dedupe =====

proptest! {
    /// Property: dedupe is idempotent and keeps first occurrences in order
    #[test]
    fn prop_dedupe_idempotent(
        a in prop::collection::vec("[a-cA-C]{1,2}( [a-c]{1,2})?", 0..10),
        b in prop::collection::vec("[a-cA-C]{1,2}", 0..10),
    ) {
        let a: Vec<&str> = a.iter().map(String::as_str).collect();
        let b: Vec<&str> = b.iter().map(String::as_str).collect();
        let once = dedupe(&[a.as_slice(), b.as_slice()]);
        let refs: Vec<&str> = once.iter().map(String::as_str).collect();
        prop_assert_eq!(dedupe(&[refs.as_slice()]), once.clone());

        let first: Vec<String> = a.iter().chain(&b).take(1).map(|s| s.to_string()).collect();
        prop_assert_eq!(once.first(), first.first());
    }
}

// ===== Specific edge case tests =====

#[test]
fn test_round_trip_between_and_limit() {
    let sql = "SELECT * FROM t WHERE x BETWEEN 1 AND 10 LIMIT 5, 10";
    assert_round_trip(sql, &Dialect::Sqlite.config());
}

#[test]
fn test_round_trip_function_calls() {
    let sql = "SELECT COUNT(*), SUM(amount) FROM transactions";
    assert_round_trip(sql, &Dialect::Sql.config());
}

#[test]
fn test_round_trip_array_subscripts() {
    let sql = "SELECT arr[1], ARRAY[1, 2][2] FROM t";
    assert_round_trip(sql, &Dialect::PostgreSql.config());
}

#[test]
fn test_round_trip_comments() {
    let sql = "SELECT a -- trailing\n FROM t /* block */ WHERE b = 1;";
    assert_round_trip(sql, &Dialect::TransactSql.config());
}

#[test]
fn test_round_trip_unterminated_parenthesis() {
    let sql = "SELECT (a, (b FROM t";
    assert_round_trip(sql, &Dialect::Sqlite.config());
}

#[test]
fn test_round_trip_broken_quotes() {
    for dialect in Dialect::ALL {
        assert_round_trip(r"'\'", &dialect.config());
        assert_round_trip(r"SELECT 'a\' FROM t", &dialect.config());
        assert_round_trip("SELECT a FROM t WHERE b = 'x", &dialect.config());
    }
}
