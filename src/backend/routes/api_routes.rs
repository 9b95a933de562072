/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /sign-up` - Donor registration
 * - `POST /sign-in` - Sign-in for every role
 * - `GET /questions` - Onboarding questions
 *
 * ## Admin
 * - `POST /add-admin` - Create another admin (bearer token, role admin)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{add_admin, sign_in, sign_up};
use crate::backend::middleware::require_session;
use crate::backend::questions::list_questions;
use crate::backend::server::state::AppState;

pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/add-admin", post(add_admin))
        .route_layer(from_fn_with_state(app_state.clone(), require_session));

    router
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/questions", get(list_questions))
        .merge(admin_routes)
}
