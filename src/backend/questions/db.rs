/**
 * Question Storage
 *
 * Pass-through read of the `question` table. Rows come back as JSON objects
 * keyed by column name, with values typed from the SQLite storage class of
 * each cell, so columns added to the table show up without code changes.
 */

use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};
use std::time::Duration;

use crate::backend::auth::store::StoreError;
use crate::backend::auth::users::bounded;

/// A question row, column name to value
pub type QuestionRecord = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct QuestionRepository {
    pool: SqlitePool,
    timeout: Duration,
}

impl QuestionRepository {
    pub fn new(pool: SqlitePool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Every row of the question table
    pub async fn list_all(&self) -> Result<Vec<QuestionRecord>, StoreError> {
        let rows = bounded(
            self.timeout,
            sqlx::query("SELECT * FROM question").fetch_all(&self.pool),
        )
        .await?;

        rows.iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::from)
    }
}

fn row_to_record(row: &SqliteRow) -> Result<QuestionRecord, sqlx::Error> {
    let mut record = Map::new();
    for (index, column) in row.columns().iter().enumerate() {
        record.insert(column.name().to_string(), cell_value(row, index)?);
    }
    Ok(record)
}

fn cell_value(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => Number::from_f64(row.try_get_unchecked::<f64, _>(index)?)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => Value::from(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}
