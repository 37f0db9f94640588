use shared::error::{AppError, AppResult};

/// Uniform result of a backend call.
///
/// Backend failures, non-2xx statuses and lost connections all end up here
/// with `success == false`; callers branch on the flag instead of on an
/// error type.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
        }
    }

    pub fn into_result(self) -> AppResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(AppError::ExternalServiceError(
                self.message
                    .unwrap_or_else(|| "request was not successful".into()),
            ))
        }
    }
}
