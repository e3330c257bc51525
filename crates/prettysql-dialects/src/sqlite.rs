//! SQLite
//!
//! Vocabulary follows <https://www.sqlite.org/lang_keywords.html> and the
//! core, aggregate and date/time function references.

use crate::owned;
use prettysql_parser::{dedupe, DialectConfig, ParamTypes, QuoteKind, QuoteStyle};

// https://www.sqlite.org/lang_corefunc.html
const SCALAR_FUNCTIONS: &[&str] = &[
    "ABS", "CHANGES", "CHAR", "COALESCE", "FORMAT", "GLOB", "HEX",
    "IFNULL", "IIF", "INSTR", "LAST_INSERT_ROWID", "LENGTH", "LIKE",
    "LIKELIHOOD", "LIKELY", "LOAD_EXTENSION", "LOWER", "LTRIM", "NULLIF",
    "PRINTF", "QUOTE", "RANDOM", "RANDOMBLOB", "REPLACE", "ROUND", "RTRIM",
    "SIGN", "SOUNDEX", "SQLITE_COMPILEOPTION_GET",
    "SQLITE_COMPILEOPTION_USED", "SQLITE_OFFSET", "SQLITE_SOURCE_ID",
    "SQLITE_VERSION", "SUBSTR", "SUBSTRING", "TOTAL_CHANGES", "TRIM",
    "TYPEOF", "UNICODE", "UNLIKELY", "UPPER", "ZEROBLOB",
];

// https://www.sqlite.org/lang_aggfunc.html
const AGGREGATE_FUNCTIONS: &[&str] = &[
    "AVG", "COUNT", "GROUP_CONCAT", "MAX", "MIN", "SUM", "TOTAL",
];

// https://www.sqlite.org/lang_datefunc.html
const DATETIME_FUNCTIONS: &[&str] = &[
    "DATE", "TIME", "DATETIME", "JULIANDAY", "UNIXEPOCH", "STRFTIME",
];

// AND / OR are logical operators, not keywords
const KEYWORDS: &[&str] = &[
    "ABORT", "ACTION", "ADD", "AFTER", "ALL", "ALTER", "ANY", "ARE",
    "ARRAY", "ALWAYS", "ANALYZE", "AS", "ASC", "ATTACH", "AUTOINCREMENT",
    "BEFORE", "BEGIN", "BETWEEN", "BY", "CASCADE", "CASE", "CAST", "CHECK",
    "COLLATE", "COLUMN", "COMMIT", "CONFLICT", "CONSTRAINT", "CREATE",
    "CROSS", "CURRENT", "CURRENT_DATE", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "DATABASE", "DEFAULT", "DEFERRABLE", "DEFERRED",
    "DELETE", "DESC", "DETACH", "DISTINCT", "DO", "DROP", "EACH", "ELSE",
    "END", "ESCAPE", "EXCEPT", "EXCLUDE", "EXCLUSIVE", "EXISTS", "EXPLAIN",
    "FAIL", "FILTER", "FIRST", "FOLLOWING", "FOR", "FOREIGN", "FROM",
    "FULL", "GENERATED", "GLOB", "GROUP", "GROUPS", "HAVING", "IF",
    "IGNORE", "IMMEDIATE", "IN", "INDEX", "INDEXED", "INITIALLY", "INNER",
    "INSERT", "INSTEAD", "INTERSECT", "INTO", "IS", "ISNULL", "JOIN",
    "KEY", "LAST", "LEFT", "LIKE", "LIMIT", "MATCH", "MATERIALIZED",
    "NATURAL", "NO", "NOT", "NOTHING", "NOTNULL", "NULL", "NULLS", "OF",
    "OFFSET", "ON DELETE", "ON UPDATE", "ONLY", "OPEN", "ORDER", "OTHERS",
    "OUTER", "OVER", "PARTITION", "PLAN", "PRAGMA", "PRECEDING", "PRIMARY",
    "QUERY", "RAISE", "RANGE", "RECURSIVE", "REFERENCES", "REGEXP",
    "REINDEX", "RELEASE", "RENAME", "REPLACE", "RESTRICT", "RETURNING",
    "RIGHT", "ROLLBACK", "ROW", "ROWS", "SAVEPOINT", "SELECT", "SET",
    "TABLE", "TEMP", "TEMPORARY", "THEN", "TIES", "TO", "TRANSACTION",
    "TRIGGER", "UNBOUNDED", "UNION", "UNIQUE", "UPDATE", "USING", "VACUUM",
    "VALUES", "VIEW", "VIRTUAL", "WHEN", "WHERE", "WINDOW", "WITH",
    "WITHOUT",
];

const COMMANDS: &[&str] = &[
    "ADD", "ALTER COLUMN", "ALTER TABLE", "CREATE TABLE", "DROP TABLE",
    "DELETE", "DELETE FROM", "FETCH FIRST", "FETCH NEXT", "FETCH PRIOR",
    "FETCH LAST", "FETCH ABSOLUTE", "FETCH RELATIVE", "FROM", "GROUP BY",
    "HAVING", "INSERT INTO", "LIMIT", "OFFSET", "ORDER BY", "SELECT",
    "SET SCHEMA", "SET", "UPDATE", "VALUES", "WHERE", "WITH",
];

const SET_OPERATIONS: &[&str] = &[
    "INTERSECT", "INTERSECT ALL", "INTERSECT DISTINCT", "UNION",
    "UNION ALL", "UNION DISTINCT", "EXCEPT", "EXCEPT ALL",
    "EXCEPT DISTINCT",
];

// https://www.sqlite.org/syntax/join-operator.html
const JOINS: &[&str] = &[
    "JOIN", "LEFT JOIN", "LEFT OUTER JOIN", "INNER JOIN", "CROSS JOIN",
    "NATURAL JOIN", "NATURAL LEFT JOIN", "NATURAL LEFT OUTER JOIN",
    "NATURAL INNER JOIN", "NATURAL CROSS JOIN",
];

const DEPENDENT_CLAUSES: &[&str] = &["WHEN", "ELSE"];

// https://www.sqlite.org/lang_expr.html
const OPERATORS: &[&str] = &["~", "->", "->>", "||", "<<", ">>", "=="];

pub fn config() -> DialectConfig {
    let functions = [SCALAR_FUNCTIONS, AGGREGATE_FUNCTIONS, DATETIME_FUNCTIONS];
    let keywords = [KEYWORDS, SCALAR_FUNCTIONS, AGGREGATE_FUNCTIONS, DATETIME_FUNCTIONS];

    DialectConfig {
        reserved_commands: owned(COMMANDS),
        reserved_set_operations: owned(SET_OPERATIONS),
        reserved_joins: owned(JOINS),
        reserved_dependent_clauses: owned(DEPENDENT_CLAUSES),
        reserved_keywords: dedupe(&keywords),
        reserved_function_names: dedupe(&functions),
        string_types: vec![QuoteStyle::with_prefixes(QuoteKind::Single, &["X"])],
        ident_types: vec![
            QuoteKind::Double.into(),
            QuoteKind::Backtick.into(),
            QuoteKind::Bracket.into(),
        ],
        operators: owned(OPERATORS),
        // https://www.sqlite.org/lang_expr.html#parameters
        param_types: ParamTypes {
            positional: true,
            numbered: vec!['?'],
            named: vec![':', '@', '$'],
        },
        ..DialectConfig::default()
    }
}
