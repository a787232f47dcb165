//! Print the users statements.
//!
//! Run with:
//!   cargo run --example user_statements -p sqlbuf
//!
//! Optional (read table names from a TOML file):
//!   SQLBUF_CONFIG=tables.toml

use sqlbuf::{SqlBufError, TableNames, UserStatement};
use std::env;

fn main() -> Result<(), SqlBufError> {
    dotenvy::dotenv().ok();

    let tables = match env::var("SQLBUF_CONFIG") {
        Ok(path) => TableNames::load(path)?,
        Err(_) => TableNames::default(),
    };

    println!("users table: {}", tables.users());
    for stmt in UserStatement::ALL {
        println!("{:<18} {}", stmt.name(), stmt.build(&tables));
    }

    Ok(())
}
