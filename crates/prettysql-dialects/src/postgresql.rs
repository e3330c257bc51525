//! PostgreSQL

use crate::owned;
use prettysql_parser::{dedupe, BracketKind, DialectConfig, ParamTypes, QuoteKind, QuoteStyle};

// https://www.postgresql.org/docs/current/functions.html (common subset)
const FUNCTIONS: &[&str] = &[
    "ABS", "AGE", "ARRAY_AGG", "ARRAY_LENGTH", "ARRAY_TO_STRING", "AVG",
    "BOOL_AND", "BOOL_OR", "BTRIM", "CEIL", "CEILING", "CHAR_LENGTH",
    "COALESCE", "CONCAT", "CONCAT_WS", "COUNT", "DATE_PART", "DATE_TRUNC",
    "EXTRACT", "FLOOR", "FORMAT", "GENERATE_SERIES", "GREATEST",
    "JSON_AGG", "JSON_BUILD_OBJECT", "JSONB_AGG", "JSONB_BUILD_OBJECT",
    "JSONB_SET", "LEAST", "LEFT", "LENGTH", "LOWER", "LPAD", "LTRIM", "MAX",
    "MIN", "MOD", "NOW", "NULLIF", "POSITION", "POWER", "RANDOM",
    "REGEXP_REPLACE", "REPLACE", "RIGHT", "ROUND", "ROW_NUMBER", "RPAD",
    "RTRIM", "SPLIT_PART", "STRING_AGG", "SUBSTRING", "SUM", "TO_CHAR",
    "TO_DATE", "TO_TIMESTAMP", "TRIM", "UNNEST", "UPPER",
];

// https://www.postgresql.org/docs/current/sql-keywords-appendix.html (reserved)
const KEYWORDS: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC",
    "BETWEEN", "BOTH", "CASE", "CAST", "CHECK", "COLLATE", "COLUMN",
    "CONCURRENTLY", "CONSTRAINT", "CREATE", "CROSS", "CURRENT_CATALOG",
    "CURRENT_DATE", "CURRENT_ROLE", "CURRENT_SCHEMA", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "CURRENT_USER", "DEFAULT", "DEFERRABLE", "DESC",
    "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "EXISTS", "FALSE", "FETCH",
    "FOR", "FOREIGN", "FREEZE", "FROM", "FULL", "GRANT", "GROUP", "HAVING",
    "ILIKE", "IN", "INITIALLY", "INNER", "INTERSECT", "INTO", "IS", "ISNULL",
    "JOIN", "LATERAL", "LEADING", "LEFT", "LIKE", "LIMIT", "LOCALTIME",
    "LOCALTIMESTAMP", "NATURAL", "NOT", "NOTNULL", "NULL", "OFFSET", "ON",
    "ONLY", "ORDER", "OUTER", "OVER", "OVERLAPS", "PARTITION", "PLACING",
    "PRIMARY", "REFERENCES", "RETURNING", "RIGHT", "SELECT", "SESSION_USER",
    "SIMILAR", "SOME", "SYMMETRIC", "TABLE", "TABLESAMPLE", "THEN", "TO",
    "TRAILING", "TRUE", "UNION", "UNIQUE", "USER", "USING", "VARIADIC",
    "VERBOSE", "WHEN", "WHERE", "WINDOW", "WITH",
];

const COMMANDS: &[&str] = &[
    "ALTER TABLE", "ALTER COLUMN", "COPY", "CREATE INDEX", "CREATE TABLE",
    "CREATE VIEW", "DELETE FROM", "DO UPDATE SET", "DROP TABLE", "FETCH FIRST",
    "FETCH NEXT", "FROM", "GROUP BY", "HAVING", "INSERT INTO", "LIMIT",
    "OFFSET", "ON CONFLICT", "ORDER BY", "PARTITION BY", "RETURNING",
    "SELECT", "SELECT DISTINCT", "SELECT DISTINCT ON", "SET", "TRUNCATE",
    "UPDATE", "VALUES", "WHERE", "WINDOW", "WITH", "WITH RECURSIVE",
];

const SET_OPERATIONS: &[&str] = &[
    "INTERSECT", "INTERSECT ALL", "INTERSECT DISTINCT", "UNION", "UNION ALL",
    "UNION DISTINCT", "EXCEPT", "EXCEPT ALL", "EXCEPT DISTINCT",
];

const JOINS: &[&str] = &[
    "JOIN", "INNER JOIN", "LEFT JOIN", "LEFT OUTER JOIN", "RIGHT JOIN",
    "RIGHT OUTER JOIN", "FULL JOIN", "FULL OUTER JOIN", "CROSS JOIN",
    "NATURAL JOIN", "NATURAL LEFT JOIN", "NATURAL RIGHT JOIN",
    "NATURAL FULL JOIN", "NATURAL INNER JOIN", "JOIN LATERAL",
    "LEFT JOIN LATERAL", "CROSS JOIN LATERAL",
];

const DEPENDENT_CLAUSES: &[&str] = &["WHEN", "ELSE"];

// https://www.postgresql.org/docs/current/functions.html
const OPERATORS: &[&str] = &[
    "%", "^", "|/", "||/", "@", "~", "&", "|", "#", "<<", ">>", "&&", "||",
    "::", ":=", "=>", "->", "->>", "#>", "#>>", "@>", "<@", "?|", "?&",
    "#-", "@?", "@@", "~~", "~~*", "!~~", "!~~*", "~*", "!~", "!~*", "-|-",
    "&<", "&>", "<<|", "|>>", "<->",
];

pub fn config() -> DialectConfig {
    DialectConfig {
        reserved_commands: owned(COMMANDS),
        reserved_set_operations: owned(SET_OPERATIONS),
        reserved_joins: owned(JOINS),
        reserved_dependent_clauses: owned(DEPENDENT_CLAUSES),
        reserved_keywords: dedupe(&[KEYWORDS, FUNCTIONS]),
        reserved_function_names: owned(FUNCTIONS),
        string_types: vec![
            QuoteStyle::with_prefixes(QuoteKind::Single, &["U&", "E", "X", "B"]),
            QuoteKind::Dollar.into(),
        ],
        ident_types: vec![QuoteStyle::with_prefixes(QuoteKind::Double, &["U&"])],
        operators: owned(OPERATORS),
        param_types: ParamTypes {
            numbered: vec!['$'],
            ..ParamTypes::default()
        },
        brackets: vec![BracketKind::Round, BracketKind::Square],
        ..DialectConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prettysql_parser::{tokenize, TokenKind};

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        tokenize(input, &config())
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_prefixed_strings() {
        for input in ["U&'d\\0061t'", "E'line\\n'", "x'0F'", "B'1010'"] {
            assert_eq!(kinds(input), vec![(TokenKind::STRING, input.to_string())]);
        }
    }

    #[test]
    fn test_dollar_quoted_body_is_one_string() {
        let body = "$fn$ SELECT 'x'; $$ $fn$";
        let tokens = kinds(&format!("AS {};", body));
        assert_eq!(tokens[1], (TokenKind::STRING, body.to_string()));
        assert_eq!(tokens[2].0, TokenKind::DELIMITER);
    }

    #[test]
    fn test_numbered_parameters() {
        let tokens = kinds("WHERE id = $1 AND name = $12");
        assert_eq!(tokens[3], (TokenKind::PARAMETER, "$1".to_string()));
        assert_eq!(tokens[7], (TokenKind::PARAMETER, "$12".to_string()));
    }

    #[test]
    fn test_casts_and_json_operators() {
        let tokens = kinds("a::text, b->>'k', c @> d");
        assert_eq!(tokens[1], (TokenKind::OPERATOR, "::".to_string()));
        assert_eq!(tokens[5], (TokenKind::OPERATOR, "->>".to_string()));
        assert_eq!(tokens[9], (TokenKind::OPERATOR, "@>".to_string()));
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(
            kinds("U&\"d0061t\""),
            vec![(TokenKind::IDENTIFIER, "U&\"d0061t\"".to_string())]
        );
    }

    #[test]
    fn test_square_brackets_are_brackets() {
        let tokens = kinds("arr[1]");
        assert_eq!(tokens[1].0, TokenKind::OPEN_PAREN);
        assert_eq!(tokens[3].0, TokenKind::CLOSE_PAREN);
    }
}
