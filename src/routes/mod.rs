use axum::{middleware::from_fn_with_state, Router};

use crate::{
    auth::middleware::{require_admin, require_auth},
    state::AppState,
};

pub mod admin;
pub mod session;

/// Routes behind the authorization gates.
pub fn protected(state: &AppState) -> Router<AppState> {
    let authenticated = session::router()
        .route_layer(from_fn_with_state(state.clone(), require_auth));
    let admin = admin::router()
        .route_layer(from_fn_with_state(state.clone(), require_admin));
    Router::new().merge(authenticated).merge(admin)
}
