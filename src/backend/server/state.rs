/**
 * Application State Management
 *
 * `AppState` is the router state. Everything in it is immutable after
 * startup and shared behind `Arc`; the only mutable resource is the SQLite
 * pool inside the store and question repository, which synchronizes itself.
 *
 * The `FromRef` implementations let handlers extract just the component they
 * need, e.g. `State<Arc<Authenticator>>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::questions::db::QuestionRepository;
use crate::backend::server::config::ServerConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Arc<Authenticator>,
    pub sessions: Arc<SessionManager>,
    pub questions: Arc<QuestionRepository>,
    pub config: Arc<ServerConfig>,
}

impl FromRef<AppState> for Arc<Authenticator> {
    fn from_ref(state: &AppState) -> Self {
        state.authenticator.clone()
    }
}

impl FromRef<AppState> for Arc<SessionManager> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<QuestionRepository> {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
