/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool
 * 2. Create the user and question tables if missing
 * 3. Wire the credential store, session manager and authenticator
 * 4. Ensure the bootstrap admin account, when configured
 * 5. Create the router
 */

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::authenticator::{AuthError, Authenticator};
use crate::backend::auth::sessions::SessionManager;
use crate::backend::auth::users::{ensure_schema, RolePolicies, SqlCredentialStore};
use crate::backend::questions::db::QuestionRepository;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::shared::Role;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("database setup failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("bootstrap admin could not be created: {0}")]
    Bootstrap(#[from] AuthError),
}

pub async fn create_app(config: ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing BloodConnect backend server");

    let pool = connect_database(&config.database_url).await?;
    let state = build_state(config, pool).await?;

    let app = create_router(state);
    tracing::info!("Router configured");
    Ok(app)
}

/// Wire every component on top of an open pool
pub async fn build_state(config: ServerConfig, pool: SqlitePool) -> Result<AppState, InitError> {
    ensure_schema(&pool).await?;
    tracing::info!("Database schema ready");

    if config.legacy_plaintext_credentials {
        tracing::warn!("Accepting legacy plaintext credentials for medical staff and admin accounts");
    }

    let store = Arc::new(SqlCredentialStore::new(
        pool.clone(),
        RolePolicies::new(config.legacy_plaintext_credentials),
        config.store_timeout,
    ));
    let sessions = Arc::new(SessionManager::new(&config.jwt_secret, config.token_ttl));
    let authenticator = Arc::new(Authenticator::new(store, sessions.clone(), config.bcrypt_cost));

    if let Some(admin) = &config.bootstrap_admin {
        if authenticator.ensure_account(Role::Admin, admin.into()).await? {
            tracing::info!("Bootstrap admin {} created", admin.email);
        } else {
            tracing::debug!("Bootstrap admin {} already present", admin.email);
        }
    }

    let questions = Arc::new(QuestionRepository::new(pool, config.store_timeout));

    Ok(AppState {
        authenticator,
        sessions,
        questions,
        config: Arc::new(config),
    })
}
