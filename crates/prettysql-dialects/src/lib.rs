//! SQL dialect configurations for the prettysql tokenizer.
//!
//! Every dialect is plain data: a function returning a
//! [`DialectConfig`](prettysql_parser::DialectConfig). The tokenizer and
//! parser are shared by all of them.

pub mod postgresql;
pub mod sql;
pub mod sqlite;
pub mod transactsql;

use prettysql_parser::DialectConfig;
use std::fmt;

/// The dialects shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Standard SQL
    Sql,
    Sqlite,
    PostgreSql,
    /// Microsoft SQL Server
    TransactSql,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::Sql,
        Dialect::Sqlite,
        Dialect::PostgreSql,
        Dialect::TransactSql,
    ];

    /// Get a human-readable name for this dialect.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Sql => "Standard SQL",
            Dialect::Sqlite => "SQLite",
            Dialect::PostgreSql => "PostgreSQL",
            Dialect::TransactSql => "Transact-SQL",
        }
    }

    pub fn config(&self) -> DialectConfig {
        match self {
            Dialect::Sql => sql::config(),
            Dialect::Sqlite => sqlite::config(),
            Dialect::PostgreSql => postgresql::config(),
            Dialect::TransactSql => transactsql::config(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configurations of every shipped dialect.
pub fn all() -> Vec<DialectConfig> {
    Dialect::ALL.iter().map(Dialect::config).collect()
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
