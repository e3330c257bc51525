//! Transact-SQL (SQL Server)

use crate::owned;
use prettysql_parser::{dedupe, DialectConfig, ParamTypes, QuoteKind, QuoteStyle};

const FUNCTIONS: &[&str] = &[
    "ABS", "AVG", "CAST", "CEILING", "CHARINDEX", "COALESCE", "CONCAT",
    "CONVERT", "COUNT", "COUNT_BIG", "DATEADD", "DATEDIFF", "DATENAME",
    "DATEPART", "DAY", "FLOOR", "FORMAT", "GETDATE", "GETUTCDATE",
    "IIF", "ISNULL", "LEFT", "LEN", "LOWER", "LTRIM", "MAX", "MIN", "MONTH",
    "NEWID", "NULLIF", "PATINDEX", "REPLACE", "REPLICATE", "RIGHT", "ROUND",
    "ROW_NUMBER", "RTRIM", "STRING_AGG", "STUFF", "SUBSTRING", "SUM",
    "SYSDATETIME", "TRIM", "TRY_CAST", "TRY_CONVERT", "UPPER", "YEAR",
];

// https://learn.microsoft.com/en-us/sql/t-sql/language-elements/reserved-keywords-transact-sql
const KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "ANY", "AS", "ASC", "BEGIN", "BETWEEN", "BREAK",
    "BY", "CASCADE", "CASE", "CHECK", "CLUSTERED", "COLLATE", "COLUMN",
    "COMMIT", "CONSTRAINT", "CONTINUE", "CREATE", "CROSS", "CURRENT",
    "CURRENT_DATE", "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR",
    "DATABASE", "DECLARE", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP",
    "ELSE", "END", "EXCEPT", "EXEC", "EXECUTE", "EXISTS", "FETCH", "FOR",
    "FOREIGN", "FROM", "FULL", "FUNCTION", "GOTO", "GRANT", "GROUP",
    "HAVING", "IDENTITY", "IF", "IN", "INDEX", "INNER", "INSERT", "INTERSECT",
    "INTO", "IS", "JOIN", "KEY", "LIKE", "MERGE", "NOCHECK", "NONCLUSTERED",
    "NOT", "NULL", "OF", "OFF", "OFFSETS", "ON", "OPEN", "OPTION", "ORDER",
    "OUTER", "OVER", "PERCENT", "PIVOT", "PRIMARY", "PRINT", "PROC",
    "PROCEDURE", "RAISERROR", "REFERENCES", "RETURN", "REVOKE", "ROLLBACK",
    "ROWCOUNT", "SCHEMA", "SELECT", "SET", "TABLE", "THEN", "TO", "TOP",
    "TRAN", "TRANSACTION", "TRIGGER", "TRUNCATE", "UNION", "UNIQUE",
    "UNPIVOT", "UPDATE", "USE", "VALUES", "VIEW", "WAITFOR", "WHEN", "WHERE",
    "WHILE", "WITH",
];

const COMMANDS: &[&str] = &[
    "ADD", "ALTER COLUMN", "ALTER TABLE", "CREATE TABLE", "CROSS APPLY",
    "DELETE", "DELETE FROM", "DROP TABLE", "FETCH FIRST", "FETCH NEXT", "FROM",
    "GO", "GROUP BY", "HAVING", "INSERT INTO", "MERGE INTO", "OFFSET",
    "ORDER BY", "OUTER APPLY", "OUTPUT", "SELECT", "SET", "UPDATE", "VALUES",
    "WHERE", "WITH",
];

const SET_OPERATIONS: &[&str] = &["INTERSECT", "UNION", "UNION ALL", "EXCEPT"];

const JOINS: &[&str] = &[
    "JOIN", "INNER JOIN", "LEFT JOIN", "LEFT OUTER JOIN", "RIGHT JOIN",
    "RIGHT OUTER JOIN", "FULL JOIN", "FULL OUTER JOIN", "CROSS JOIN",
];

const DEPENDENT_CLAUSES: &[&str] = &["WHEN", "ELSE"];

const OPERATORS: &[&str] = &[
    "!<", "!>", "+=", "-=", "*=", "/=", "%=", "|=", "&=", "^=", "::",
];

pub fn config() -> DialectConfig {
    DialectConfig {
        reserved_commands: owned(COMMANDS),
        reserved_set_operations: owned(SET_OPERATIONS),
        reserved_joins: owned(JOINS),
        reserved_dependent_clauses: owned(DEPENDENT_CLAUSES),
        reserved_keywords: dedupe(&[KEYWORDS, FUNCTIONS]),
        reserved_function_names: owned(FUNCTIONS),
        string_types: vec![QuoteStyle::with_prefixes(QuoteKind::Single, &["N"])],
        ident_types: vec![QuoteKind::Double.into(), QuoteKind::Bracket.into()],
        operators: owned(OPERATORS),
        param_types: ParamTypes {
            named: vec!['@'],
            ..ParamTypes::default()
        },
        ..DialectConfig::default()
    }
}
