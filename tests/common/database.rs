//! Database test fixtures and utilities
//!
//! Every fixture gets its own in-memory SQLite database with the full schema,
//! so tests never share rows.

use bloodconnect::backend::auth::users::ensure_schema;
use bloodconnect::backend::server::config::connect_database;
use sqlx::SqlitePool;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a fresh in-memory database with all tables
    pub async fn new() -> Self {
        let pool = connect_database("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");
        ensure_schema(&pool).await.expect("Failed to create schema");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a question and return its id
    pub async fn insert_question(&self, text: &str) -> i64 {
        sqlx::query("INSERT INTO question (questionText) VALUES (?)")
            .bind(text)
            .execute(&self.pool)
            .await
            .expect("Failed to insert question")
            .last_insert_rowid()
    }

    /// Write a row directly, bypassing hashing
    pub async fn insert_raw_user(&self, table: &str, email: &str, password: &str) {
        let (name, email_col, password_col, dob) = match table {
            "donor" => ("donorName", "donorEmail", "donorPassword", "donorDOB"),
            "medicalStaff" => ("staffName", "staffEmail", "staffPassword", "staffDOB"),
            "admin" => ("adminName", "adminEmail", "adminPassword", "adminDOB"),
            other => panic!("unknown table {}", other),
        };
        let sql = format!(
            "INSERT INTO {} ({}, {}, {}, {}) VALUES ('Raw', ?, ?, '1970-01-01')",
            table, name, email_col, password_col, dob
        );
        sqlx::query(&sql)
            .bind(email)
            .bind(password)
            .execute(&self.pool)
            .await
            .expect("Failed to insert raw user");
    }

    /// Stored credential for an email in a table
    pub async fn stored_password(&self, table: &str, email: &str) -> Option<String> {
        let (email_col, password_col) = match table {
            "donor" => ("donorEmail", "donorPassword"),
            "medicalStaff" => ("staffEmail", "staffPassword"),
            "admin" => ("adminEmail", "adminPassword"),
            other => panic!("unknown table {}", other),
        };
        let sql = format!("SELECT {} FROM {} WHERE {} = ?", password_col, table, email_col);
        sqlx::query_scalar::<_, String>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .expect("Failed to read stored password")
    }

    /// Number of rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
