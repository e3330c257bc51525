//! Fuzz target: Round-trip testing
//!
//! This fuzz target verifies that any input can be:
//! 1. Parsed into a syntax tree
//! 2. Printed back to SQL
//! 3. Re-parsed into a tree with the same shape
//!
//! The compact printer is a fixed point after one pass.

#![no_main]

use libfuzzer_sys::fuzz_target;
use prettysql_parser::{parse_str, print_statements, Statement, TokenKind};

/// Per statement: its tokens without ranges, and whether it ended in `;`.
/// The parser only looks at kinds and texts, so equal shapes mean equal trees.
fn shape(statements: &[Statement]) -> Vec<(Vec<(TokenKind, String)>, bool)> {
    statements
        .iter()
        .map(|st| {
            let tokens = st.tokens().into_iter().map(|t| (t.kind, t.text.clone())).collect();
            (tokens, st.has_semicolon)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if let Ok(sql) = std::str::from_utf8(data) {
        let config = prettysql_dialects::sqlite::config();

        let parsed = parse_str(sql, &config);
        let printed = print_statements(&parsed);
        let reparsed = parse_str(&printed, &config);
        let reprinted = print_statements(&reparsed);

        assert!(
            !reparsed.iter().flat_map(|st| st.tokens()).any(|t| t.is_eof()),
            "EOF sentinel leaked into the tree"
        );

        if shape(&parsed) != shape(&reparsed) || printed != reprinted {
            panic!(
                "Round-trip failed!\nOriginal: {}\nPrinted: {}\nReprinted: {}\nTree1: {:?}\nTree2: {:?}",
                sql,
                printed,
                reprinted,
                shape(&parsed),
                shape(&reparsed)
            );
        }
    }
});
