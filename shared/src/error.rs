use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Failure taxonomy for booking operations. Business-rule violations map to
/// client statuses; collaborator failures stay unclassified and surface as 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequestError(String),
    #[error("unauthenticated")]
    UnauthenticatedError,
    #[error("{0}")]
    ForbiddenOperation(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("failed to convert to uuid")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::BadRequestError(_)
            | AppError::ValidationError(_)
            | AppError::ConvertToUuidError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation(_) => StatusCode::FORBIDDEN,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_rule_failures_map_to_client_statuses() {
        let assert_status = |err: AppError, expected: StatusCode| {
            assert_eq!(err.into_response().status(), expected);
        };

        assert_status(
            AppError::BadRequestError("roomId is required".into()),
            StatusCode::BAD_REQUEST,
        );
        assert_status(AppError::UnauthenticatedError, StatusCode::UNAUTHORIZED);
        assert_status(
            AppError::ForbiddenOperation("room is fully booked".into()),
            StatusCode::FORBIDDEN,
        );
        assert_status(
            AppError::EntityNotFound("booking not found".into()),
            StatusCode::NOT_FOUND,
        );
        assert_status(
            AppError::NoRowsAffectedError("no booking record updated".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        );
    }
}
