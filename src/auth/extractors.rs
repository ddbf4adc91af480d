use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::{claims::Claims, jwt::JwtKeys, repo_types::ADMIN_ROLE};
use crate::error::{ApiError, ApiResult};

/// Cookie consulted when no bearer token is sent.
pub const TOKEN_COOKIE: &str = "token";

/// Reads `Authorization: Bearer <token>`, falling back to the `token` cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|auth| auth.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Extracts and verifies the request token.
pub fn authenticate(keys: &JwtKeys, headers: &HeaderMap) -> ApiResult<Claims> {
    let token = token_from_headers(headers)
        .ok_or_else(|| ApiError::Auth("Authentication required".into()))?;
    keys.verify(&token).ok_or_else(|| {
        warn!("invalid or expired token");
        ApiError::Auth("Invalid or expired token".into())
    })
}

/// Identity attached to a request by the authorization middleware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

impl From<Claims> for AuthContext {
    fn from(c: Claims) -> Self {
        Self {
            user_id: c.user_id,
            email: c.email,
            role: c.role,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::Auth("Authentication required".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, HeaderValue};

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut h = HeaderMap::new();
        for (k, v) in pairs {
            h.insert(k.clone(), HeaderValue::from_str(v).unwrap());
        }
        h
    }

    #[test]
    fn bearer_token_is_read() {
        let h = headers(&[(AUTHORIZATION, "Bearer abc.def.ghi")]);
        assert_eq!(token_from_headers(&h).as_deref(), Some("abc.def.ghi"));
        let h = headers(&[(AUTHORIZATION, "bearer abc")]);
        assert_eq!(token_from_headers(&h).as_deref(), Some("abc"));
    }

    #[test]
    fn cookie_is_fallback() {
        let h = headers(&[(COOKIE, "theme=dark; token=xyz")]);
        assert_eq!(token_from_headers(&h).as_deref(), Some("xyz"));
        let h = headers(&[(AUTHORIZATION, "Basic Zm9vOmJhcg=="), (COOKIE, "token=xyz")]);
        assert_eq!(token_from_headers(&h).as_deref(), Some("xyz"));
    }

    #[test]
    fn bearer_wins_over_cookie() {
        let h = headers(&[(AUTHORIZATION, "Bearer from-header"), (COOKIE, "token=from-cookie")]);
        assert_eq!(token_from_headers(&h).as_deref(), Some("from-header"));
    }

    #[test]
    fn absent_or_empty_token_is_none() {
        assert!(token_from_headers(&HeaderMap::new()).is_none());
        assert!(token_from_headers(&headers(&[(AUTHORIZATION, "Bearer ")])).is_none());
        assert!(token_from_headers(&headers(&[(COOKIE, "token=")])).is_none());
    }

    #[test]
    fn admin_check_is_exact() {
        let mut ctx = AuthContext {
            user_id: Uuid::new_v4(),
            email: "a@b.co".into(),
            role: "admin".into(),
        };
        assert!(ctx.is_admin());
        ctx.role = "Admin".into();
        assert!(!ctx.is_admin());
    }
}
