//! # sqlbuf
//!
//! Assembles the fixed UPDATE and INSERT statements used against the users
//! table by appending literal fragments to an owned text buffer.
//!
//! - **Literal assembly**: fragments are appended verbatim, in order, with `?`
//!   bind markers left untouched
//! - **Fresh buffer per statement**: no state is carried between builds
//! - **Injected table names**: the table name comes from a [`TableNames`]
//!   provider (defaults or TOML), validated as a safe identifier
//!
//! ```
//! use sqlbuf::{TableNames, UserStatement};
//!
//! let tables = TableNames::default();
//! assert_eq!(
//!     UserStatement::Update.build(&tables),
//!     "UPDATE USERS SET USER_NAME = ?, EMAIL = ?, UPDATED_DATE = SYSDATE WHERE USER_ID = ? AND STATUS = ?"
//! );
//! ```

pub mod buf;
pub mod error;
pub mod statement;
pub mod table;

pub use buf::SqlBuf;
pub use error::{SqlBufError, SqlBufResult};
pub use statement::{UserStatement, UserStatements};
pub use table::{DEFAULT_USERS_TABLE, TableName, TableNames};
