use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// Caller input rejected by the service; `reason` is the client-facing message.
    #[error("{reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },

    /// Store-level update of an id that does not exist. The service looks
    /// the record up first, so this only surfaces when a concurrent delete
    /// lands in between.
    #[error("User with id {0} not found")]
    NotFound(i64),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn invalid_argument(field: &'static str, reason: &'static str) -> Self {
        UserError::InvalidArgument { field, reason }
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidArgument { field, reason } => AppError::InvalidField {
                field: field.to_string(),
                message: reason.to_string(),
            },
            UserError::NotFound(id) => {
                tracing::error!(user_id = id, "Store update reached a missing user");
                AppError::InternalServerError(format!("User {} vanished before update", id))
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_reason_only() {
        let err = UserError::invalid_argument("email", "invalid email format");
        assert_eq!(err.to_string(), "invalid email format");
    }

    #[test]
    fn test_store_not_found_becomes_internal_error() {
        let app: AppError = UserError::NotFound(12).into();
        assert!(matches!(app, AppError::InternalServerError(msg) if msg.contains("12")));
    }

    #[test]
    fn test_into_response_status() {
        use axum::http::StatusCode;

        let invalid = UserError::invalid_argument("name", "name cannot be empty").into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let vanished = UserError::NotFound(9).into_response();
        assert_eq!(vanished.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_argument_becomes_invalid_field() {
        let app: AppError = UserError::invalid_argument("name", "name cannot be empty").into();
        assert!(matches!(
            app,
            AppError::InvalidField { ref field, ref message }
                if field == "name" && message == "name cannot be empty"
        ));
    }
}
