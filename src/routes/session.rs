use axum::{routing::get, Json, Router};

use crate::{auth::AuthContext, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(session))
}

/// Echoes the identity the gate attached; no store access.
pub async fn session(ctx: AuthContext) -> Json<AuthContext> {
    Json(ctx)
}
