use axum::{
    extract::{FromRef, Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::{
    extractors::{authenticate, AuthContext},
    jwt::JwtKeys,
};
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_EMAIL_HEADER: &str = "x-user-email";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Rejects requests without a valid token (401); otherwise forwards them with
/// the caller's identity attached.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> ApiResult<Response> {
    let ctx = identify(&state, &req)?;
    attach_identity(&mut req, ctx);
    Ok(next.run(req).await)
}

/// Like [`require_auth`], additionally rejecting non-admin callers with 403.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> ApiResult<Response> {
    let ctx = identify(&state, &req)?;
    if !ctx.is_admin() {
        warn!(user_id = %ctx.user_id, role = %ctx.role, "admin access denied");
        return Err(ApiError::Forbidden("Admin access required".into()));
    }
    attach_identity(&mut req, ctx);
    Ok(next.run(req).await)
}

fn identify(state: &AppState, req: &Request) -> ApiResult<AuthContext> {
    let keys = JwtKeys::from_ref(state);
    let claims = authenticate(&keys, req.headers())?;
    Ok(AuthContext::from(claims))
}

/// Overwrites any client-supplied identity headers and stores the context as an extension.
///
/// A value that is not a legal header value (e.g. an email carrying control
/// characters from an older registration) is left out of the headers; the
/// extension still carries the full identity.
fn attach_identity(req: &mut Request, ctx: AuthContext) {
    let headers = req.headers_mut();
    let fields = [
        (USER_ID_HEADER, ctx.user_id.to_string()),
        (USER_EMAIL_HEADER, ctx.email.clone()),
        (USER_ROLE_HEADER, ctx.role.clone()),
    ];
    for (name, value) in fields {
        let name = HeaderName::from_static(name);
        match HeaderValue::from_str(&value) {
            Ok(v) => {
                headers.insert(name, v);
            }
            Err(_) => {
                warn!(user_id = %ctx.user_id, header = %name, "identity value not header-safe; omitted");
                headers.remove(name);
            }
        }
    }
    debug!(user_id = %ctx.user_id, role = %ctx.role, "identity attached");
    req.extensions_mut().insert(ctx);
}
