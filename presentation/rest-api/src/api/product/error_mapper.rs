use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::Validation(errors) => {
                let fields = errors
                    .fields()
                    .iter()
                    .map(|f| FieldErrorResponse {
                        field: f.field.clone(),
                        messages: f.messages.clone(),
                    })
                    .collect();
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: self.to_string(),
                        errors: Some(fields),
                    }),
                );
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
            ProductError::Storage(e) => {
                tracing::error!("Blob storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "StorageError",
                    "storage.failure",
                )
            }
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::{RepositoryError, StorageError};
    use business::domain::product::validation::{MIN_LENGTH, REQUIRED, ValidationErrors};

    #[test]
    fn should_map_validation_errors_to_unprocessable_entity() {
        let mut errors = ValidationErrors::new();
        errors.add("title", MIN_LENGTH);
        errors.add("image", REQUIRED);

        let (status, json) = ProductError::Validation(errors).into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "product.validation_failed");
        let fields = json.0.errors.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "title");
        assert_eq!(fields[0].messages, vec![MIN_LENGTH.to_string()]);
        assert_eq!(fields[1].field, "image");
    }

    #[test]
    fn should_map_not_found() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
        assert!(json.0.errors.is_none());
    }

    #[test]
    fn should_map_store_failures_to_internal_error() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");

        let (status, json) = ProductError::Storage(StorageError::WriteFailed).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "StorageError");
    }
}
