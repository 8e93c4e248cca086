use thiserror::Error;

/// Failure of a single chat completion round trip.
///
/// None of these are fatal: the session reports them and prompts again.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("error marshalling payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("error creating request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("error sending request: {0}")]
    Send(#[source] reqwest::Error),

    #[error("unexpected status code: {status}")]
    Status { status: u16, body: String },

    #[error("error decoding response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mentions_code() {
        let err = CompletionError::Status {
            status: 500,
            body: "upstream exploded".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status code: 500");
    }

    #[test]
    fn test_decode_error_message() {
        let Err(source) = serde_json::from_str::<serde_json::Value>("not json") else {
            panic!("expected a parse error");
        };
        let err = CompletionError::Decode(source);
        assert!(err.to_string().starts_with("error decoding response:"));
    }
}
