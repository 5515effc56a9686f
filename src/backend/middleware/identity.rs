/**
 * Request Identity
 *
 * Resolves the owner id for every `/todos` request. There is no
 * authentication: the identity is taken from the `X-User-Id` header, then
 * the `userId` query parameter, then the fixed development default.
 * Blank values count as absent.
 */

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

pub use crate::shared::USER_ID_HEADER;
use crate::shared::DEFAULT_USER_ID;

/// Effective owner id of the current request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct IdentityQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

/// Resolve the identity from request parts
///
/// Precedence: header, query parameter, `"demo"`.
pub fn resolve_user_id(parts: &Parts) -> String {
    let from_header = parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    if let Some(user_id) = from_header {
        return user_id;
    }

    let from_query = Query::<IdentityQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(q)| q.user_id)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    from_query.unwrap_or_else(|| DEFAULT_USER_ID.to_string())
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = resolve_user_id(parts);
        tracing::debug!("Resolved request identity: {}", user_id);
        Ok(CurrentUser(user_id))
    }
}
