/// Dialect configuration: the declarative lexical surface of one SQL dialect.
///
/// A dialect is pure data. The tokenizer is a single engine parameterized by
/// a `DialectConfig`; adding a dialect means producing another value of this
/// type, either in code or from YAML.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectConfig {
    /// Statement-shaping phrases (SELECT, GROUP BY, INSERT INTO)
    pub reserved_commands: Vec<String>,
    /// UNION / INTERSECT / EXCEPT phrases
    pub reserved_set_operations: Vec<String>,
    pub reserved_joins: Vec<String>,
    /// WHEN / ELSE
    pub reserved_dependent_clauses: Vec<String>,
    pub reserved_logical_operators: Vec<String>,
    pub reserved_keywords: Vec<String>,
    /// Names tagged as function names when directly followed by `(`
    pub reserved_function_names: Vec<String>,
    pub string_types: Vec<QuoteStyle>,
    pub ident_types: Vec<QuoteStyle>,
    /// Dialect-specific operator glyphs, merged with the base set
    pub operators: Vec<String>,
    pub param_types: ParamTypes,
    pub brackets: Vec<BracketKind>,
    pub line_comment_types: Vec<String>,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            reserved_commands: Vec::new(),
            reserved_set_operations: Vec::new(),
            reserved_joins: Vec::new(),
            reserved_dependent_clauses: Vec::new(),
            reserved_logical_operators: vec!["AND".to_string(), "OR".to_string()],
            reserved_keywords: Vec::new(),
            reserved_function_names: Vec::new(),
            string_types: vec![QuoteStyle::new(QuoteKind::Single)],
            ident_types: vec![QuoteStyle::new(QuoteKind::Double)],
            operators: Vec::new(),
            param_types: ParamTypes::default(),
            brackets: vec![BracketKind::Round],
            line_comment_types: vec!["--".to_string()],
        }
    }
}

/// A quote family plus the letter prefixes that may precede it (`X'0F'`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteStyle {
    pub quote: QuoteKind,
    #[serde(default)]
    pub prefixes: Vec<String>,
}

impl QuoteStyle {
    pub fn new(quote: QuoteKind) -> Self {
        Self {
            quote,
            prefixes: Vec::new(),
        }
    }

    pub fn with_prefixes(quote: QuoteKind, prefixes: &[&str]) -> Self {
        Self {
            quote,
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl From<QuoteKind> for QuoteStyle {
    fn from(quote: QuoteKind) -> Self {
        Self::new(quote)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteKind {
    /// 'text', '' and \' escapes
    #[serde(rename = "''")]
    Single,
    /// "text", "" and \" escapes
    #[serde(rename = "\"\"")]
    Double,
    /// `text`, `` escape
    #[serde(rename = "``")]
    Backtick,
    /// [text], ]] escape
    #[serde(rename = "[]")]
    Bracket,
    /// $tag$ text $tag$
    #[serde(rename = "$$")]
    Dollar,
}

impl QuoteKind {
    /// Length in bytes of the quoted literal at the start of `text`, if it is
    /// a complete (terminated) literal of this family.
    pub(crate) fn scan(self, text: &str) -> Option<usize> {
        match self {
            QuoteKind::Single => scan_delimited(text, '\'', '\'', true),
            QuoteKind::Double => scan_delimited(text, '"', '"', true),
            QuoteKind::Backtick => scan_delimited(text, '`', '`', false),
            QuoteKind::Bracket => scan_delimited(text, '[', ']', false),
            QuoteKind::Dollar => scan_dollar_quoted(text),
        }
    }
}

fn scan_delimited(text: &str, open: char, close: char, backslash_escapes: bool) -> Option<usize> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c == open => {}
        _ => return None,
    }

    while let Some((i, c)) = chars.next() {
        if backslash_escapes && c == '\\' {
            chars.next();
        } else if c == close {
            let end = i + c.len_utf8();
            if text[end..].starts_with(close) {
                // Doubled quote is an escaped quote
                chars.next();
            } else {
                return Some(end);
            }
        }
    }

    None
}

fn scan_dollar_quoted(text: &str) -> Option<usize> {
    let rest = text.strip_prefix('$')?;
    let tag_len = rest
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    if rest[..tag_len].starts_with(|c: char| c.is_ascii_digit()) {
        // $1 is a parameter, not a tag
        return None;
    }
    if !rest[tag_len..].starts_with('$') {
        return None;
    }

    let delimiter = &text[..tag_len + 2];
    let body = &text[delimiter.len()..];
    body.find(delimiter)
        .map(|i| delimiter.len() + i + delimiter.len())
}

/// Bracket families that produce OPEN_PAREN / CLOSE_PAREN tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracketKind {
    #[serde(rename = "()")]
    Round,
    #[serde(rename = "[]")]
    Square,
    #[serde(rename = "{}")]
    Curly,
}

impl BracketKind {
    pub fn open(self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }

    /// The family a bracket token belongs to, judged by its text.
    pub fn of(text: &str) -> Option<BracketKind> {
        match text {
            "(" | ")" => Some(BracketKind::Round),
            "[" | "]" => Some(BracketKind::Square),
            "{" | "}" => Some(BracketKind::Curly),
            _ => None,
        }
    }
}

/// Parameter placeholder syntaxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamTypes {
    /// Bare `?` placeholders
    pub positional: bool,
    /// Prefixes followed by an index: `?1`, `$1`
    pub numbered: Vec<char>,
    /// Prefixes followed by a name: `:name`, `@name`, `$name`
    pub named: Vec<char>,
}

impl DialectConfig {
    /// Parse a YAML dialect description and validate it.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: DialectConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_vocabulary("reserved_commands", &self.reserved_commands)?;
        check_vocabulary("reserved_set_operations", &self.reserved_set_operations)?;
        check_vocabulary("reserved_joins", &self.reserved_joins)?;
        check_vocabulary("reserved_dependent_clauses", &self.reserved_dependent_clauses)?;
        check_vocabulary("reserved_logical_operators", &self.reserved_logical_operators)?;
        check_vocabulary("reserved_keywords", &self.reserved_keywords)?;
        check_vocabulary("reserved_function_names", &self.reserved_function_names)?;
        check_quote_prefixes("string_types", &self.string_types)?;
        check_quote_prefixes("ident_types", &self.ident_types)?;

        for op in &self.operators {
            if op.is_empty() || op.chars().any(char::is_whitespace) {
                return Err(ConfigError::invalid(
                    "operators",
                    format!("'{}' is not a valid operator glyph", op),
                ));
            }
        }

        for comment in &self.line_comment_types {
            if comment.is_empty() || comment.chars().any(char::is_whitespace) {
                return Err(ConfigError::invalid(
                    "line_comment_types",
                    format!("'{}' is not a valid comment introducer", comment),
                ));
            }
        }

        let params = &self.param_types;
        for &prefix in params.numbered.iter().chain(&params.named) {
            if is_word_char(prefix) || prefix.is_whitespace() {
                return Err(ConfigError::invalid(
                    "param_types",
                    format!("'{}' cannot introduce a parameter", prefix),
                ));
            }
        }

        Ok(())
    }
}

fn check_vocabulary(field: &'static str, entries: &[String]) -> Result<(), ConfigError> {
    for entry in entries {
        let words: Vec<&str> = entry.split_whitespace().collect();
        if words.is_empty() {
            return Err(ConfigError::invalid(field, "empty vocabulary entry"));
        }
        if let Some(word) = words.iter().find(|w| !w.chars().all(is_word_char)) {
            return Err(ConfigError::invalid(
                field,
                format!("'{}' in '{}' is not a word", word, entry),
            ));
        }
    }
    Ok(())
}

fn check_quote_prefixes(field: &'static str, styles: &[QuoteStyle]) -> Result<(), ConfigError> {
    for prefix in styles.iter().flat_map(|s| &s.prefixes) {
        if prefix.is_empty() || prefix.chars().any(|c| c.is_whitespace() || "'\"`[$".contains(c)) {
            return Err(ConfigError::invalid(
                field,
                format!("'{}' is not a valid quote prefix", prefix),
            ));
        }
    }
    Ok(())
}

/// Characters that make up words (keywords, identifiers, parameter names).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Duplicate-removing union of vocabulary lists.
///
/// Keeps the first occurrence of each entry (compared case-insensitively with
/// whitespace collapsed), so the result is deterministic and applying it again
/// changes nothing.
pub fn dedupe(groups: &[&[&str]]) -> Vec<String> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .flat_map(|group| group.iter())
        .filter(|entry| seen.insert(normalize_phrase(entry)))
        .map(|entry| entry.to_string())
        .collect()
}

/// Uppercase a phrase and collapse its inner whitespace to single spaces.
pub fn normalize_phrase(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}
