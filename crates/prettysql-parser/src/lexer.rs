/// Lexer for SQL text, driven by a dialect configuration
use crate::dialect::{is_word_char, normalize_phrase, BracketKind, DialectConfig, QuoteStyle};
use crate::token_kind::TokenKind;
use crate::vocabulary::Vocabulary;
use crate::TokenKind::*;
use rowan::{TextRange, TextSize};
use tracing::debug;

/// Operators every dialect understands; single characters need no entry.
const BASE_OPERATORS: &[&str] = &["<>", "<=", ">=", "!="];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text, case and inner whitespace as written
    pub text: String,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    /// The end-of-input sentinel, positioned at `offset`.
    pub fn eof(offset: TextSize) -> Self {
        Self::new(EOF, "", TextRange::empty(offset))
    }

    /// Whether this is the lookahead sentinel rather than source text.
    pub fn is_eof(&self) -> bool {
        self.kind == EOF
    }

    /// Text uppercased with inner whitespace collapsed (`group  by` -> `GROUP BY`).
    /// Renderers compare reserved words through this form.
    pub fn normalized(&self) -> String {
        normalize_phrase(&self.text)
    }

    /// Whether this is the bare word `word` (case-insensitive).
    pub fn is_word(&self, word: &str) -> bool {
        self.text.eq_ignore_ascii_case(word)
    }

    /// SELECT, SELECT DISTINCT, SELECT ALL, ...
    pub fn is_select(&self) -> bool {
        self.kind == RESERVED_COMMAND && self.normalized().split(' ').next() == Some("SELECT")
    }

    pub fn is_limit(&self) -> bool {
        self.kind == RESERVED_COMMAND && self.is_word("LIMIT")
    }

    /// Prefix of a prefixed literal (`X` in `X'0F'`, `U&` in `U&"name"`).
    pub fn literal_prefix(&self) -> Option<&str> {
        if !matches!(self.kind, STRING | IDENTIFIER) {
            return None;
        }
        let end = self.text.find(&['\'', '"', '`', '[', '$'][..])?;
        (end > 0).then(|| &self.text[..end])
    }
}

/// Tokenize `input` with a one-off compiled `Tokenizer`.
pub fn tokenize(input: &str, config: &DialectConfig) -> Vec<Token> {
    Tokenizer::new(config).tokenize(input)
}

/// A dialect configuration compiled into lookup tables.
///
/// Immutable once built; one instance can tokenize any number of inputs,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: DialectConfig,
    vocabulary: Vocabulary,
    /// Longest glyph first
    operators: Vec<String>,
}

impl Tokenizer {
    pub fn new(config: &DialectConfig) -> Self {
        let mut operators: Vec<String> = config
            .operators
            .iter()
            .map(String::as_str)
            .chain(BASE_OPERATORS.iter().copied())
            .filter(|op| !op.is_empty())
            .map(str::to_string)
            .collect();
        operators.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
        operators.dedup();

        Self {
            config: config.clone(),
            vocabulary: Vocabulary::new(config),
            operators,
        }
    }

    /// The dialect this tokenizer was built from, for renderers that need
    /// its parameter or bracket settings alongside the tokens.
    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Tokenize input text into a stream of tokens. Whitespace is skipped;
    /// every other character ends up in exactly one token.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input, self);
        let mut tokens: Vec<Token> = Vec::new();

        while let Some(token) = lexer.next_token(tokens.last()) {
            tokens.push(token);
        }

        debug!(bytes = input.len(), tokens = tokens.len(), "tokenized input");
        tokens
    }
}

/// Byte offset as a `TextSize`. Offsets past `u32::MAX` (inputs over 4 GiB)
/// saturate, so ranges there are clamped but never inverted.
fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    tokenizer: &'a Tokenizer,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str, tokenizer: &'a Tokenizer) -> Self {
        Self {
            input,
            pos: 0,
            tokenizer,
        }
    }

    fn next_token(&mut self, previous: Option<&Token>) -> Option<Token> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let (kind, len) = self.scan(previous);
        self.pos += len;

        let text = &self.input[start..self.pos];
        let range = TextRange::new(text_size(start), text_size(self.pos));
        Some(Token::new(kind, text, range))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Classify the token at the current position; returns its kind and
    /// byte length, which is always at least one character.
    fn scan(&self, previous: Option<&Token>) -> (TokenKind, usize) {
        let config = &self.tokenizer.config;
        let rest = self.rest();

        if let Some(scanned) = self.scan_comment(rest) {
            return scanned;
        }
        if let Some(len) = scan_quoted(rest, &config.string_types) {
            return (STRING, len);
        }
        if let Some(len) = scan_quoted(rest, &config.ident_types) {
            return (IDENTIFIER, len);
        }
        if let Some(len) = scan_number(rest) {
            return (NUMBER, len);
        }
        if let Some(len) = self.scan_parameter(rest) {
            return (PARAMETER, len);
        }
        if rest.starts_with(is_word_char) {
            return self.scan_word(rest, previous);
        }
        if let Some(op) = self.tokenizer.operators.iter().find(|op| rest.starts_with(op.as_str())) {
            return (OPERATOR, op.len());
        }

        // rest is non-empty here
        let c = rest.chars().next().unwrap_or('\0');
        let kind = match c {
            ',' => COMMA,
            ';' => DELIMITER,
            c if self.is_bracket(c, BracketKind::open) => OPEN_PAREN,
            c if self.is_bracket(c, BracketKind::close) => CLOSE_PAREN,
            // Unknown character
            _ => OPERATOR,
        };
        (kind, c.len_utf8())
    }

    fn is_bracket(&self, c: char, side: fn(BracketKind) -> char) -> bool {
        self.tokenizer
            .config
            .brackets
            .iter()
            .any(|&bracket| side(bracket) == c)
    }

    fn scan_comment(&self, rest: &str) -> Option<(TokenKind, usize)> {
        if rest.starts_with("/*") {
            // Unterminated block comments run to the end of input
            let len = rest[2..].find("*/").map(|i| i + 4).unwrap_or(rest.len());
            return Some((BLOCK_COMMENT, len));
        }

        let is_line_comment = self
            .tokenizer
            .config
            .line_comment_types
            .iter()
            .any(|prefix| !prefix.is_empty() && rest.starts_with(prefix.as_str()));
        if is_line_comment {
            // Consume until newline or EOF
            let len = rest.find('\n').unwrap_or(rest.len());
            let len = rest[..len].trim_end_matches('\r').len();
            return Some((LINE_COMMENT, len));
        }

        None
    }

    fn scan_parameter(&self, rest: &str) -> Option<usize> {
        let params = &self.tokenizer.config.param_types;
        let prefix = rest.chars().next()?;
        let after = &rest[prefix.len_utf8()..];

        if params.numbered.contains(&prefix) {
            let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits > 0 && !after[digits..].starts_with(is_word_char) {
                return Some(prefix.len_utf8() + digits);
            }
        }
        if params.named.contains(&prefix) {
            let name = word_len(after);
            if name > 0 {
                return Some(prefix.len_utf8() + name);
            }
        }
        if prefix == '?' && params.positional {
            return Some(1);
        }

        None
    }

    fn scan_word(&self, rest: &str, previous: Option<&Token>) -> (TokenKind, usize) {
        let first_len = word_len(rest);

        // Qualified names: t.from is a column, not a keyword
        if previous.is_some_and(|t| t.kind == OPERATOR && t.text == ".") {
            return (IDENTIFIER, first_len);
        }

        let vocabulary = &self.tokenizer.vocabulary;
        let first = rest[..first_len].to_uppercase();

        let matched = vocabulary
            .candidates(&first)
            .iter()
            .find_map(|phrase| match_phrase(rest, first_len, &phrase.words[1..]).map(|len| (phrase.kind, len)));

        match matched {
            Some((kind, len)) if kind != RESERVED_KEYWORD || len > first_len => (kind, len),
            matched => {
                if vocabulary.is_function(&first) && rest[first_len..].trim_start().starts_with('(') {
                    (RESERVED_FUNCTION_NAME, first_len)
                } else {
                    matched.unwrap_or((IDENTIFIER, first_len))
                }
            }
        }
    }
}

/// Match the remaining `words` of a phrase after the first word, each
/// separated from the previous one by whitespace. Returns the total length.
fn match_phrase(rest: &str, first_len: usize, words: &[String]) -> Option<usize> {
    let mut end = first_len;
    for word in words {
        let after = &rest[end..];
        let gap = after.len() - after.trim_start().len();
        if gap == 0 {
            return None;
        }
        let candidate_start = end + gap;
        let candidate_len = word_len(&rest[candidate_start..]);
        let candidate = &rest[candidate_start..candidate_start + candidate_len];
        if candidate_len == 0 || candidate.to_uppercase() != *word {
            return None;
        }
        end = candidate_start + candidate_len;
    }
    Some(end)
}

fn word_len(text: &str) -> usize {
    text.find(|c: char| !is_word_char(c)).unwrap_or(text.len())
}

fn scan_quoted(rest: &str, styles: &[QuoteStyle]) -> Option<usize> {
    styles.iter().find_map(|style| {
        let prefixed = style.prefixes.iter().find_map(|prefix| {
            let head = rest.get(..prefix.len())?;
            if !head.eq_ignore_ascii_case(prefix) {
                return None;
            }
            style.quote.scan(&rest[prefix.len()..]).map(|len| prefix.len() + len)
        });
        prefixed.or_else(|| style.quote.scan(rest))
    })
}

fn scan_number(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digits_from = |start: usize, accept: fn(&u8) -> bool| {
        start + bytes[start.min(bytes.len())..].iter().take_while(|b| accept(*b)).count()
    };

    let radix_len = match bytes {
        [b'0', b'x' | b'X', ..] => Some(digits_from(2, u8::is_ascii_hexdigit)),
        [b'0', b'b' | b'B', ..] => Some(digits_from(2, |b| matches!(*b, b'0' | b'1'))),
        _ => None,
    };

    let len = match radix_len {
        Some(len) if len > 2 => len,
        _ => {
            let mut len = digits_from(0, u8::is_ascii_digit);
            if bytes.get(len) == Some(&b'.') {
                let fraction_end = digits_from(len + 1, u8::is_ascii_digit);
                if len == 0 && fraction_end == 1 {
                    // A lone dot
                    return None;
                }
                len = fraction_end;
            } else if len == 0 {
                return None;
            }

            if matches!(bytes.get(len), Some(&(b'e' | b'E'))) {
                let sign = usize::from(matches!(bytes.get(len + 1), Some(&(b'+' | b'-'))));
                let exponent_end = digits_from(len + 1 + sign, u8::is_ascii_digit);
                if exponent_end > len + 1 + sign {
                    len = exponent_end;
                }
            }
            len
        }
    };

    // 1st, 0xZZ and friends are words, not numbers
    if rest[len..].starts_with(is_word_char) {
        return None;
    }
    Some(len)
}
