//! Fixed statements against the users table.
//!
//! Each statement is assembled into a fresh [`SqlBuf`] by a single linear run
//! of appends; the table name comes from the injected [`TableNames`]. Bind
//! positions are left as `?` markers.
//!
//! # Example
//!
//! ```
//! use sqlbuf::{TableNames, UserStatements};
//!
//! let tables = TableNames::default();
//! let stmts = UserStatements::new(&tables);
//! assert_eq!(
//!     stmts.insert_statement(),
//!     "INSERT INTO USERS (USER_ID, USER_NAME, EMAIL, CREATED_DATE) VALUES (?, ?, ?, SYSDATE)"
//! );
//! ```

use crate::buf::SqlBuf;
use crate::table::TableNames;


/// The statements that can be assembled for the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserStatement {
    /// UPDATE of name, email and update date, keyed by id and status.
    Update,
    /// INSERT of a new user row.
    Insert,
    /// UPDATE that additionally sets phone and address.
    MultiLineUpdate,
}

impl UserStatement {
    /// Every statement, in declaration order.
    pub const ALL: [UserStatement; 3] = [Self::Update, Self::Insert, Self::MultiLineUpdate];

    /// Stable name, used as the log tag.
    pub fn name(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Insert => "insert",
            Self::MultiLineUpdate => "multi_line_update",
        }
    }

    /// Number of `?` markers in the assembled text.
    pub fn placeholder_count(self) -> usize {
        match self {
            Self::Update => 4,
            Self::Insert => 3,
            Self::MultiLineUpdate => 6,
        }
    }

    /// Assemble the statement text.
    pub fn build(self, tables: &TableNames) -> String {
        let mut buf = SqlBuf::new();
        match self {
            Self::Update => write_update(&mut buf, tables),
            Self::Insert => write_insert(&mut buf, tables),
            Self::MultiLineUpdate => write_multi_line_update(&mut buf, tables),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlbuf.sql", statement = self.name(), sql = %buf, "assembled");

        buf.into_string()
    }
}

fn write_update(buf: &mut SqlBuf, tables: &TableNames) {
    buf.append("UPDATE ").append_table(tables.users()).append(" SET ");
    buf.append("USER_NAME = ?, EMAIL = ?, UPDATED_DATE = SYSDATE ");
    buf.append("WHERE USER_ID = ? AND STATUS = ?");
}

fn write_insert(buf: &mut SqlBuf, tables: &TableNames) {
    buf.append("INSERT INTO ").append_table(tables.users()).append(" ");
    buf.append("(USER_ID, USER_NAME, EMAIL, CREATED_DATE) ");
    buf.append("VALUES (?, ?, ?, SYSDATE)");
}

fn write_multi_line_update(buf: &mut SqlBuf, tables: &TableNames) {
    buf.append("UPDATE ").append_table(tables.users()).append(" SET ");
    buf.append(concat!(
        "USER_NAME = ?, EMAIL = ?, PHONE = ?, ",
        "ADDRESS = ?, UPDATED_DATE = SYSDATE "
    ));
    buf.append("WHERE USER_ID = ? AND STATUS = ?");
}

/// The users statements, bound to a table-name provider.
#[derive(Debug, Clone, Copy)]
pub struct UserStatements<'a> {
    tables: &'a TableNames,
}

impl<'a> UserStatements<'a> {
    pub fn new(tables: &'a TableNames) -> Self {
        Self { tables }
    }

    /// `UPDATE <users> SET USER_NAME = ?, EMAIL = ?, UPDATED_DATE = SYSDATE WHERE USER_ID = ? AND STATUS = ?`
    pub fn update_statement(&self) -> String {
        UserStatement::Update.build(self.tables)
    }

    /// `INSERT INTO <users> (USER_ID, USER_NAME, EMAIL, CREATED_DATE) VALUES (?, ?, ?, SYSDATE)`
    pub fn insert_statement(&self) -> String {
        UserStatement::Insert.build(self.tables)
    }

    /// Like [`update_statement`](Self::update_statement), also setting `PHONE` and `ADDRESS`.
    pub fn multi_line_update_statement(&self) -> String {
        UserStatement::MultiLineUpdate.build(self.tables)
    }
}
