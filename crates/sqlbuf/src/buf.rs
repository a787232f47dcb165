//! Append-only SQL text buffer.

use crate::table::TableName;
use std::fmt;

/// An owned text buffer that SQL statements are assembled into.
///
/// Fragments are appended verbatim, in call order. Nothing is escaped,
/// validated or parsed, so appending cannot fail.
///
/// # Example
/// ```
/// use sqlbuf::{SqlBuf, TableName};
///
/// let users = TableName::parse("USERS")?;
/// let mut buf = SqlBuf::new();
/// buf.append("DELETE FROM ").append_table(&users).append(" WHERE USER_ID = ?");
/// assert_eq!(buf.as_str(), "DELETE FROM USERS WHERE USER_ID = ?");
/// # Ok::<(), sqlbuf::SqlBufError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct SqlBuf {
    text: String,
}

impl SqlBuf {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer that can hold `capacity` bytes without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    /// Append a text fragment to the end of the buffer.
    pub fn append(&mut self, fragment: &str) -> &mut Self {
        self.text.push_str(fragment);
        self
    }

    /// Append the resolved text of a table-name token.
    pub fn append_table(&mut self, table: &TableName) -> &mut Self {
        self.append(table.as_str())
    }

    /// The assembled text so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the assembled text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the buffer, returning the assembled text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for SqlBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for SqlBuf {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<SqlBuf> for String {
    fn from(buf: SqlBuf) -> Self {
        buf.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buf = SqlBuf::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn appends_in_call_order() {
        let mut buf = SqlBuf::new();
        buf.append("SELECT ").append("1");
        buf.append(" FROM DUAL");
        assert_eq!(buf.as_str(), "SELECT 1 FROM DUAL");
    }

    #[test]
    fn append_is_not_commutative() {
        let mut ab = SqlBuf::new();
        ab.append("WHERE ").append("A = ?");
        let mut ba = SqlBuf::new();
        ba.append("A = ?").append("WHERE ");
        assert_ne!(ab, ba);
    }

    #[test]
    fn empty_fragment_is_a_no_op() {
        let mut buf = SqlBuf::new();
        buf.append("X").append("").append("Y");
        assert_eq!(buf.as_str(), "XY");
    }

    #[test]
    fn fragments_are_not_escaped() {
        let mut buf = SqlBuf::new();
        buf.append("NAME = 'O''Brien'; --");
        assert_eq!(buf.as_str(), "NAME = 'O''Brien'; --");
    }

    #[test]
    fn append_table_writes_token_text() {
        let table = TableName::parse("APP.USERS").unwrap();
        let mut buf = SqlBuf::with_capacity(32);
        buf.append("INSERT INTO ").append_table(&table);
        assert_eq!(buf.as_str(), "INSERT INTO APP.USERS");
    }

    #[test]
    fn conversions_expose_same_text() {
        let mut buf = SqlBuf::new();
        buf.append("UPDATE USERS");
        assert_eq!(buf.to_string(), "UPDATE USERS");
        let text: &str = buf.as_ref();
        assert_eq!(text, "UPDATE USERS");
        let s: String = buf.clone().into();
        assert_eq!(s, buf.into_string());
    }
}
