use crate::state::AppState;
use axum::Router;

pub mod claims;
mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod repo;
pub mod repo_types;
mod validation;

pub use dto::PublicUser;
pub use extractors::AuthContext;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
