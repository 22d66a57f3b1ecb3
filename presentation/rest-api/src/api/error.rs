use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Messages reported for one invalid request field.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    pub field: String,
    pub messages: Vec<String>,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Present on validation failures
    #[oai(skip_serializing_if_is_none)]
    pub errors: Option<Vec<FieldErrorResponse>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            errors: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
