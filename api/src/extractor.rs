use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kernel::model::id::UserId;
use shared::error::AppError;

/// Header the auth gateway sets after validating the caller's token.
/// Token parsing never happens here; the value is the verified user id.
pub const USER_ID_HEADER: &str = "x-user-id";

pub struct AuthorizedUser {
    user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::UnauthenticatedError)?;
        let user_id = value
            .parse::<UserId>()
            .map_err(|_| AppError::UnauthenticatedError)?;
        Ok(Self { user_id })
    }
}
