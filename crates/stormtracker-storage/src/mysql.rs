use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use stormtracker_core::{NewStorm, Result, StoreError, Storm, StormStore};
use tracing::{debug, trace};

use crate::MYSQL_SCHEMA;

/// MySQL implementation of the storm store contract.
///
/// Ids are assigned by the table's `AUTO_INCREMENT` column; the bundled DDL
/// starts it at 10. `start_location` uses the NO PAD binary collation
/// `utf8mb4_0900_bin`, so lookups are exact matches including case and
/// trailing spaces.
#[derive(Debug, Clone)]
pub struct MySqlStormStore {
    pool: MySqlPool,
}

impl MySqlStormStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Creates the `storms` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(MYSQL_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("storms table is present");
        Ok(())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_) => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

fn storm_from_row(row: &MySqlRow) -> Result<Storm> {
    Ok(Storm {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        start_date: row.try_get("start_date").map_err(map_sqlx_error)?,
        end_date: row.try_get("end_date").map_err(map_sqlx_error)?,
        start_location: row.try_get("start_location").map_err(map_sqlx_error)?,
        end_location: row.try_get("end_location").map_err(map_sqlx_error)?,
        kind: row.try_get("storm_type").map_err(map_sqlx_error)?,
        intensity: row.try_get("intensity").map_err(map_sqlx_error)?,
    })
}

#[async_trait]
impl StormStore for MySqlStormStore {
    async fn add(&self, storm: NewStorm) -> Result<Storm> {
        let result = sqlx::query(
            r#"
            INSERT INTO storms (start_date, end_date, start_location, end_location, storm_type, intensity)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&storm.start_date)
        .bind(&storm.end_date)
        .bind(&storm.start_location)
        .bind(&storm.end_location)
        .bind(&storm.kind)
        .bind(storm.intensity)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id = i64::try_from(result.last_insert_id()).map_err(|e| {
            StoreError::InvalidData(format!(
                "generated id '{}' out of range: {e}",
                result.last_insert_id()
            ))
        })?;
        trace!(id, "stored storm");

        Ok(Storm::from_new(id, storm))
    }

    async fn get_all(&self) -> Result<Vec<Storm>> {
        let rows = sqlx::query(
            r#"
            SELECT id, start_date, end_date, start_location, end_location, storm_type, intensity
            FROM storms
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(storm_from_row).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Storm> {
        let row = sqlx::query(
            r#"
            SELECT id, start_date, end_date, start_location, end_location, storm_type, intensity
            FROM storms
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Err(StoreError::NotFound(id));
        };

        storm_from_row(&row)
    }

    async fn find_by_start_location(&self, location: &str) -> Result<Vec<Storm>> {
        let rows = sqlx::query(
            r#"
            SELECT id, start_date, end_date, start_location, end_location, storm_type, intensity
            FROM storms
            WHERE start_location = ?
            ORDER BY id
            "#,
        )
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(storm_from_row).collect()
    }

    async fn count(&self) -> Result<u64> {
        let total: i64 = sqlx::query("SELECT COUNT(*) AS total FROM storms")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .try_get("total")
            .map_err(map_sqlx_error)?;

        u64::try_from(total)
            .map_err(|e| StoreError::InvalidData(format!("negative row count '{total}': {e}")))
    }
}
