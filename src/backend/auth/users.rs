/**
 * User Tables and Database Operations
 *
 * SQLite implementation of `CredentialStore`. Each role owns one table; the
 * table and column names are fixed by `TableSpec` and never come from user
 * input. Values are always bound as query parameters.
 */

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::future::Future;
use std::time::Duration;

use crate::backend::auth::credentials::CredentialPolicy;
use crate::backend::auth::store::{CredentialStore, NewUser, StoreError, UserRecord};
use crate::shared::Role;

/// Physical layout of one role's table
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub date_of_birth: &'static str,
}

const DONOR_TABLE: TableSpec = TableSpec {
    table: "donor",
    id: "donorID",
    name: "donorName",
    email: "donorEmail",
    password: "donorPassword",
    date_of_birth: "donorDOB",
};

const MEDICAL_STAFF_TABLE: TableSpec = TableSpec {
    table: "medicalStaff",
    id: "staffID",
    name: "staffName",
    email: "staffEmail",
    password: "staffPassword",
    date_of_birth: "staffDOB",
};

const ADMIN_TABLE: TableSpec = TableSpec {
    table: "admin",
    id: "adminID",
    name: "adminName",
    email: "adminEmail",
    password: "adminPassword",
    date_of_birth: "adminDOB",
};

impl TableSpec {
    pub fn for_role(role: Role) -> &'static TableSpec {
        match role {
            Role::Donor => &DONOR_TABLE,
            Role::MedicalStaff => &MEDICAL_STAFF_TABLE,
            Role::Admin => &ADMIN_TABLE,
        }
    }

    fn create_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                {id} INTEGER PRIMARY KEY AUTOINCREMENT,
                {name} TEXT NOT NULL,
                {email} TEXT NOT NULL UNIQUE,
                {password} TEXT NOT NULL,
                {dob} TEXT NOT NULL
            )",
            table = self.table,
            id = self.id,
            name = self.name,
            email = self.email,
            password = self.password,
            dob = self.date_of_birth,
        )
    }

    fn select_by_email_sql(&self) -> String {
        format!(
            "SELECT {id} AS id, {name} AS name, {email} AS email, {password} AS password, {dob} AS date_of_birth
             FROM {table} WHERE {email} = ?",
            table = self.table,
            id = self.id,
            name = self.name,
            email = self.email,
            password = self.password,
            dob = self.date_of_birth,
        )
    }

    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {table} ({name}, {email}, {password}, {dob}) VALUES (?, ?, ?, ?)",
            table = self.table,
            name = self.name,
            email = self.email,
            password = self.password,
            dob = self.date_of_birth,
        )
    }
}

const QUESTION_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS question (
    questionID INTEGER PRIMARY KEY AUTOINCREMENT,
    questionText TEXT NOT NULL
)";

/// Create the user and question tables if they do not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for role in Role::LOGIN_ORDER {
        let spec = TableSpec::for_role(role);
        sqlx::query(&spec.create_sql()).execute(pool).await?;
        tracing::debug!("Table {} ready", spec.table);
    }
    sqlx::query(QUESTION_TABLE_SQL).execute(pool).await?;
    Ok(())
}

/// Bound a store call by `limit`
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

/// Credential policy for each role's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePolicies {
    pub donor: CredentialPolicy,
    pub medical_staff: CredentialPolicy,
    pub admin: CredentialPolicy,
}

impl RolePolicies {
    /// Hashed credentials everywhere, optionally tolerating legacy plaintext
    /// rows in the staff and admin tables
    pub fn new(legacy_plaintext: bool) -> Self {
        let privileged = if legacy_plaintext {
            CredentialPolicy::LegacyPlaintext
        } else {
            CredentialPolicy::Bcrypt
        };
        Self {
            donor: CredentialPolicy::Bcrypt,
            medical_staff: privileged,
            admin: privileged,
        }
    }

    pub fn for_role(&self, role: Role) -> CredentialPolicy {
        match role {
            Role::Donor => self.donor,
            Role::MedicalStaff => self.medical_staff,
            Role::Admin => self.admin,
        }
    }
}

impl Default for RolePolicies {
    fn default() -> Self {
        Self::new(false)
    }
}

/// SQLite-backed credential store
#[derive(Debug, Clone)]
pub struct SqlCredentialStore {
    pool: SqlitePool,
    policies: RolePolicies,
    timeout: Duration,
}

impl SqlCredentialStore {
    pub fn new(pool: SqlitePool, policies: RolePolicies, timeout: Duration) -> Self {
        Self {
            pool,
            policies,
            timeout,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for SqlCredentialStore {
    async fn find_by_email(&self, role: Role, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let sql = TableSpec::for_role(role).select_by_email_sql();
        bounded(
            self.timeout,
            sqlx::query_as::<_, UserRecord>(&sql)
                .bind(email)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn insert(&self, role: Role, user: NewUser) -> Result<i64, StoreError> {
        let sql = TableSpec::for_role(role).insert_sql();
        let result = bounded(
            self.timeout,
            sqlx::query(&sql)
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.date_of_birth)
                .execute(&self.pool),
        )
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(StoreError::Database(sqlx::Error::Database(db_err))) if db_err.is_unique_violation() => {
                Err(StoreError::Conflict)
            }
            Err(e) => Err(e),
        }
    }

    fn credential_policy(&self, role: Role) -> CredentialPolicy {
        self.policies.for_role(role)
    }
}
