pub mod memory;
pub mod mysql;

pub use memory::InMemoryStormStore;
pub use mysql::MySqlStormStore;
pub use stormtracker_core::{NewStorm, Result, Storm, StoreError, StormStore};

/// DDL for the `storms` table, seeded so the first assigned id is 10.
pub const MYSQL_SCHEMA: &str = include_str!("../ddl/mysql/storms.sql");
