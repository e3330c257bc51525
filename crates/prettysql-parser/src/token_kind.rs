/// Token kinds produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // Reserved vocabulary (membership decided by the dialect)
    RESERVED_COMMAND,           // SELECT, FROM, GROUP BY
    RESERVED_SET_OPERATION,     // UNION, INTERSECT ALL, EXCEPT
    RESERVED_JOIN,              // JOIN, LEFT OUTER JOIN
    RESERVED_DEPENDENT_CLAUSE,  // WHEN, ELSE
    RESERVED_LOGICAL_OPERATOR,  // AND, OR
    RESERVED_KEYWORD,           // everything else reserved
    RESERVED_FUNCTION_NAME,     // COUNT in COUNT(*)

    // Literals & identifiers
    IDENTIFIER, // column_name, "quoted", [bracketed]
    STRING,     // 'value', X'0F', U&'text'
    NUMBER,     // 123, 3.14, 0xFF
    PARAMETER,  // ?, ?1, :name, @name, $1

    // Operators & punctuation
    OPERATOR,    // +, ->>, ::, or any unclassifiable character
    OPEN_PAREN,  // ( [ {
    CLOSE_PAREN, // ) ] }
    COMMA,       // ,
    DELIMITER,   // ;

    // Comments
    LINE_COMMENT,  // -- comment
    BLOCK_COMMENT, // /* comment */

    // Special
    EOF, // Lookahead past the end of input; never produced by the tokenizer
}

use TokenKind::*;

// `is_reserved`, `is_comment` and `is_literal` classify tokens for renderers
// (keyword casing, comment placement, literal styling); the parser itself
// dispatches on exact kinds.
impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            RESERVED_COMMAND
                | RESERVED_SET_OPERATION
                | RESERVED_JOIN
                | RESERVED_DEPENDENT_CLAUSE
                | RESERVED_LOGICAL_OPERATOR
                | RESERVED_KEYWORD
                | RESERVED_FUNCTION_NAME
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, LINE_COMMENT | BLOCK_COMMENT)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, STRING | NUMBER)
    }

    /// Kinds that end a clause body.
    pub fn ends_clause(&self) -> bool {
        matches!(
            self,
            RESERVED_COMMAND | RESERVED_SET_OPERATION | EOF | CLOSE_PAREN | DELIMITER
        )
    }
}
