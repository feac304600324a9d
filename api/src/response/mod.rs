use serde::Serialize;

/// Body of every JSON acknowledgement and error:
///
/// ```json
/// { "message": "Submission updated successfully" }
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
