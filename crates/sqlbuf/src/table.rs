//! Table-name tokens and the provider that resolves them.
//!
//! Statements never hard-code a table name; they ask a [`TableNames`] for it.
//! The provider is built once (from defaults or a TOML document) and then
//! passed by reference to whatever assembles SQL.
//!
//! ```toml
//! [tables]
//! users = "APP.USERS"
//! ```

use crate::error::{SqlBufError, SqlBufResult};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Table name the users statements target when nothing else is configured.
pub const DEFAULT_USERS_TABLE: &str = "USERS";

/// A validated table name, optionally schema-qualified (`SCHEMA.TABLE`).
///
/// Every dot-separated part must match `[A-Za-z_][A-Za-z0-9_$]*`. The name is
/// spliced into SQL text as-is, so anything else is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct TableName(String);

impl TableName {
    /// Parse and validate a table name.
    pub fn parse(s: &str) -> SqlBufResult<Self> {
        if s.is_empty() {
            return Err(SqlBufError::validation("Table name cannot be empty"));
        }

        for part in s.split('.') {
            validate_part(s, part)?;
        }

        Ok(Self(s.to_string()))
    }

    /// The resolved table-name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_part(full: &str, part: &str) -> SqlBufResult<()> {
    let mut chars = part.chars();
    match chars.next() {
        None => {
            return Err(SqlBufError::validation(format!(
                "Empty segment in table name '{full}'"
            )));
        }
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(c) => {
            return Err(SqlBufError::validation(format!(
                "Invalid table name start character '{c}' in '{full}'"
            )));
        }
    }

    if let Some(c) = chars.find(|&c| !(c == '_' || c == '$' || c.is_ascii_alphanumeric())) {
        return Err(SqlBufError::validation(format!(
            "Invalid character '{c}' in table name '{full}'"
        )));
    }
    Ok(())
}

impl TryFrom<String> for TableName {
    type Error = SqlBufError;

    fn try_from(s: String) -> SqlBufResult<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for TableName {
    type Error = SqlBufError;

    fn try_from(s: &str) -> SqlBufResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only table-name provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableNames {
    #[serde(default = "default_users")]
    users: TableName,
}

fn default_users() -> TableName {
    TableName(DEFAULT_USERS_TABLE.to_string())
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            users: default_users(),
        }
    }
}

/// Top-level shape of a table-name config document.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tables: TableNames,
}

impl TableNames {
    /// Provider with every table at its default name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the users table name.
    pub fn with_users(mut self, users: TableName) -> Self {
        self.users = users;
        self
    }

    /// The users table.
    pub fn users(&self) -> &TableName {
        &self.users
    }

    /// Parse table names from a TOML document with a `[tables]` section.
    ///
    /// Missing sections and keys fall back to the defaults.
    pub fn from_toml_str(raw: &str) -> SqlBufResult<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        Ok(file.tables)
    }

    /// Read and parse table names from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SqlBufResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SqlBufError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlbuf.config", path = %path.display(), "loading table names");

        Self::from_toml_str(&raw).map_err(|e| match e {
            SqlBufError::Config(msg) => {
                SqlBufError::config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }
}
