//! Standard SQL

use crate::owned;
use prettysql_parser::{dedupe, BracketKind, DialectConfig, ParamTypes};

const FUNCTIONS: &[&str] = &[
    "ABS", "AVG", "CARDINALITY", "CAST", "CEIL", "CEILING", "CHAR_LENGTH",
    "COALESCE", "COUNT", "EXP", "EXTRACT", "FLOOR", "LN", "LOWER", "MAX",
    "MIN", "MOD", "NULLIF", "OCTET_LENGTH", "OVERLAY", "POSITION", "POWER",
    "RANK", "ROW_NUMBER", "SQRT", "SUBSTRING", "SUM", "TRIM", "UPPER",
];

const KEYWORDS: &[&str] = &[
    "ALL", "ALTER", "ANY", "ARRAY", "AS", "ASC", "BETWEEN", "BY", "CASE",
    "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE", "CROSS",
    "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "DEFAULT", "DELETE",
    "DESC", "DISTINCT", "DROP", "ELSE", "END", "ESCAPE", "EXCEPT", "EXISTS",
    "FALSE", "FETCH", "FOR", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING",
    "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "KEY",
    "LATERAL", "LEFT", "LIKE", "NATURAL", "NOT", "NULL", "OF", "OFFSET", "ON",
    "ONLY", "ORDER", "OUTER", "OVER", "PARTITION", "PRIMARY", "REFERENCES",
    "RIGHT", "ROW", "ROWS", "SELECT", "SET", "TABLE", "THEN", "TO", "TRUE",
    "UNION", "UNIQUE", "UNKNOWN", "UPDATE", "USING", "VALUES", "WHEN",
    "WHERE", "WINDOW", "WITH",
];

const COMMANDS: &[&str] = &[
    "ALTER TABLE", "CREATE TABLE", "DELETE FROM", "DROP TABLE", "FETCH FIRST",
    "FETCH NEXT", "FROM", "GROUP BY", "HAVING", "INSERT INTO", "LIMIT",
    "OFFSET", "ORDER BY", "SELECT", "SET", "UPDATE", "VALUES", "WHERE",
    "WITH",
];

const SET_OPERATIONS: &[&str] = &[
    "UNION", "UNION ALL", "UNION DISTINCT", "EXCEPT", "EXCEPT ALL",
    "EXCEPT DISTINCT", "INTERSECT", "INTERSECT ALL", "INTERSECT DISTINCT",
];

const JOINS: &[&str] = &[
    "JOIN", "INNER JOIN", "LEFT JOIN", "LEFT OUTER JOIN", "RIGHT JOIN",
    "RIGHT OUTER JOIN", "FULL JOIN", "FULL OUTER JOIN", "CROSS JOIN",
    "NATURAL JOIN",
];

const DEPENDENT_CLAUSES: &[&str] = &["WHEN", "ELSE"];

pub fn config() -> DialectConfig {
    DialectConfig {
        reserved_commands: owned(COMMANDS),
        reserved_set_operations: owned(SET_OPERATIONS),
        reserved_joins: owned(JOINS),
        reserved_dependent_clauses: owned(DEPENDENT_CLAUSES),
        reserved_keywords: dedupe(&[KEYWORDS, FUNCTIONS]),
        reserved_function_names: owned(FUNCTIONS),
        operators: vec!["||".to_string()],
        param_types: ParamTypes {
            positional: true,
            ..ParamTypes::default()
        },
        brackets: vec![BracketKind::Round, BracketKind::Square],
        ..DialectConfig::default()
    }
}
