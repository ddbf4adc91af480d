use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    auth::{AuthContext, PublicUser},
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<PublicUser>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/users", get(list_users))
}

#[instrument(skip(state, ctx), fields(admin_id = %ctx.user_id))]
pub async fn list_users(
    State(state): State<AppState>,
    ctx: AuthContext,
) -> ApiResult<Json<UserList>> {
    let users = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;
    info!(count = users.len(), "admin listed users");
    Ok(Json(UserList {
        users: users.into_iter().map(PublicUser::from).collect(),
    }))
}
