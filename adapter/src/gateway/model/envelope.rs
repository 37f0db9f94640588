use kernel::model::envelope::ApiResponse;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EnvelopeBody<T> {
    pub success: bool,
    // absent key reads as None
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> From<EnvelopeBody<T>> for ApiResponse<T> {
    fn from(value: EnvelopeBody<T>) -> Self {
        let EnvelopeBody {
            success,
            data,
            message,
        } = value;
        ApiResponse {
            success,
            data,
            message,
        }
    }
}
