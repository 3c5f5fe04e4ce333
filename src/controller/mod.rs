pub mod payment;
pub mod reservation;
pub mod room;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{data::user::UserRepository, error::AppError, model::actor::Actor, state::AppState};

/// Extracts the acting user from the `x-user-id` header.
///
/// Identity issuance lives in front of this service; the gateway
/// authenticates the caller and forwards their user ID. The extractor
/// resolves it to a stored user so role checks run against current data.
pub struct CurrentUser(pub Actor);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authorization("Missing x-user-id header".to_string()))?;

        let user_id: i32 = header
            .parse()
            .map_err(|_| AppError::Authorization("Invalid x-user-id header".to_string()))?;

        let user = UserRepository::new(&state.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Authorization("Unknown user".to_string()))?;

        Ok(CurrentUser(user.actor()))
    }
}
