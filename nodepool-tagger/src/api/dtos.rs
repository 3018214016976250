use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseBase<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
}

impl<T> ResponseBase<T> {
    pub fn ok(content: Option<T>) -> Self {
        Self {
            status: 200,
            message: "ok".to_string(),
            content,
        }
    }

    pub fn err(status: u16, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            content: None,
        }
    }
}
