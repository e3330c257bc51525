/// Reserved vocabulary compiled from a dialect configuration
use crate::dialect::{normalize_phrase, DialectConfig};
use crate::token_kind::TokenKind;
use crate::TokenKind::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Phrase {
    /// Uppercase words of the phrase, at least one
    pub words: Vec<String>,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Vocabulary {
    /// Phrases keyed by their first word, longest phrase first
    phrases: HashMap<String, Vec<Phrase>>,
    functions: HashSet<String>,
}

impl Vocabulary {
    pub fn new(config: &DialectConfig) -> Self {
        // Category priority: an entry listed in several categories keeps the first
        let categories: [(&[String], TokenKind); 6] = [
            (&config.reserved_commands, RESERVED_COMMAND),
            (&config.reserved_set_operations, RESERVED_SET_OPERATION),
            (&config.reserved_joins, RESERVED_JOIN),
            (&config.reserved_dependent_clauses, RESERVED_DEPENDENT_CLAUSE),
            (&config.reserved_logical_operators, RESERVED_LOGICAL_OPERATOR),
            (&config.reserved_keywords, RESERVED_KEYWORD),
        ];

        let mut seen = HashSet::new();
        let mut phrases: HashMap<String, Vec<Phrase>> = HashMap::new();
        for (entries, kind) in categories {
            for entry in entries {
                let normalized = normalize_phrase(entry);
                if normalized.is_empty() || !seen.insert(normalized.clone()) {
                    continue;
                }
                let words: Vec<String> = normalized.split(' ').map(str::to_string).collect();
                phrases
                    .entry(words[0].clone())
                    .or_default()
                    .push(Phrase { words, kind });
            }
        }

        for bucket in phrases.values_mut() {
            // Stable: equal lengths keep category order
            bucket.sort_by(|a, b| b.words.len().cmp(&a.words.len()));
        }

        let functions = config
            .reserved_function_names
            .iter()
            .map(|name| normalize_phrase(name))
            .collect();

        Self { phrases, functions }
    }

    /// Phrases starting with `first_word` (already uppercased), longest first.
    pub fn candidates(&self, first_word: &str) -> &[Phrase] {
        self.phrases
            .get(first_word)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_function(&self, word: &str) -> bool {
        self.functions.contains(word)
    }
}
