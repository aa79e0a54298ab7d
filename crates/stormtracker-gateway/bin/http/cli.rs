use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "STORMTRACKER_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "STORMTRACKER_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "STORMTRACKER_MYSQL_DSN";
pub const ID_OFFSET_ENV: &str = "STORMTRACKER_ID_OFFSET";
pub const SEED_SAMPLE_DATA_ENV: &str = "STORMTRACKER_SEED_SAMPLE_DATA";
pub const LOG_FORMAT_ENV: &str = "STORMTRACKER_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_ID_OFFSET: &str = "10";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "stormtracker")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// First id handed out by the in-memory store. MySQL uses the table's AUTO_INCREMENT.
    #[arg(
        long,
        env = ID_OFFSET_ENV,
        default_value = DEFAULT_ID_OFFSET,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub id_offset: i64,

    /// Insert the two sample storms on startup.
    #[arg(long, env = SEED_SAMPLE_DATA_ENV)]
    pub seed_sample_data: bool,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}
