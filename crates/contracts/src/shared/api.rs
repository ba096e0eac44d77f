use serde::{Deserialize, Serialize};

/// Envelope returned by every backend endpoint: `{ "message": ..., "data": ... }`.
///
/// Both fields are optional on the wire; mutations usually only carry `message`,
/// listings carry `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Result of a create/update/delete call. The payload is not interpreted by the list core.
pub type MessageResponse = ApiEnvelope<serde_json::Value>;

/// Body of a 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paging::PageData;

    #[test]
    fn test_listing_envelope_decodes() {
        let raw = r#"{"data":{"content":[1,2,3],"totalPages":4}}"#;
        let env: ApiEnvelope<PageData<i64>> = serde_json::from_str(raw).unwrap();
        assert_eq!(env.message, None);
        let page = env.data.unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_message_only_envelope() {
        let raw = r#"{"message":"Deleted"}"#;
        let env: MessageResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(env.message.as_deref(), Some("Deleted"));
        assert!(env.data.is_none());
    }
}
