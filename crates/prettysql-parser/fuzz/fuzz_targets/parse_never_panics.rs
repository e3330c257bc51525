//! Fuzz target: Parse never panics
//!
//! This fuzz target verifies that tokenizing and parsing never panic on any
//! input, no matter how malformed, and that no token is ever lost.

#![no_main]

use libfuzzer_sys::fuzz_target;
use prettysql_parser::{parse, Tokenizer};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for config in prettysql_dialects::all() {
            let tokens = Tokenizer::new(&config).tokenize(s);
            let statements = parse(&tokens);

            let kept: usize = statements.iter().map(|st| st.tokens().len()).sum();
            let terminated = statements.iter().filter(|st| st.has_semicolon).count();
            assert_eq!(kept + terminated, tokens.len());
            assert!(tokens.iter().all(|t| !t.is_eof()));
        }
    }
});
