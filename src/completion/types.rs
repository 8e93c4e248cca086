use serde::{Deserialize, Deserializer, Serialize};

/// The author of a chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Any role the server reports that this client never sends (e.g. "system"),
    /// or no role at all.
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    /// `null` for tool calls and refusals; decoded as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST /v1/chat/completions`.
///
/// Every request carries exactly one user message; nothing from earlier
/// turns is sent along.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn single(model: &str, temperature: f32, content: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::user(content)],
            temperature,
        }
    }
}

/// Response body of `POST /v1/chat/completions`.
///
/// Missing or `null` fields decode to their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: Usage,
}

impl ChatResponse {
    /// Content of the first choice, if the server returned any choices.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Choice {
    #[serde(deserialize_with = "null_as_default")]
    pub index: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Usage {
    #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_single_user_message() {
        let request = ChatRequest::single("gpt-3.5-turbo-0301", 0.5, "\"hi\"");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-3.5-turbo-0301");
        assert_eq!(value["temperature"], 0.5);
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "\"hi\"");
    }

    #[test]
    fn test_response_full_body() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1677652288,
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.created, 1_677_652_288);
        assert_eq!(response.choices[0].message.role, Role::Assistant);
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.total_tokens, 21);
        assert_eq!(response.first_content(), Some("Hello"));
    }

    #[test]
    fn test_response_missing_fields_default() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());
        assert_eq!(response.usage, Usage::default());
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_response_null_finish_reason_and_unknown_role() {
        let body = r#"{"choices":[{"message":{"role":"system","content":""},"finish_reason":null}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.choices[0].message.role, Role::Other);
        assert!(response.choices[0].finish_reason.is_none());
        assert_eq!(response.first_content(), Some(""));
    }

    #[test]
    fn test_null_content_decodes_as_empty() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.choices[0].message.role, Role::Assistant);
        assert_eq!(response.first_content(), Some(""));
    }

    #[test]
    fn test_choice_without_message() {
        let body = r#"{"choices":[{"index":0,"finish_reason":"stop"}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.choices[0].message, ChatMessage::default());
        assert_eq!(response.first_content(), Some(""));
    }

    #[test]
    fn test_message_without_role() {
        let body = r#"{"choices":[{"message":{"content":"Hi"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.choices[0].message.role, Role::Other);
        assert_eq!(response.first_content(), Some("Hi"));
    }

    #[test]
    fn test_null_usage_and_top_level_fields() {
        let body = r#"{"id":null,"object":null,"created":null,"choices":null,"usage":null}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert!(response.id.is_empty());
        assert_eq!(response.created, 0);
        assert!(response.choices.is_empty());
        assert_eq!(response.usage, Usage::default());
    }

    #[test]
    fn test_null_token_counts() {
        let body = r#"{"usage":{"prompt_tokens":null,"completion_tokens":2,"total_tokens":null}}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.usage.prompt_tokens, 0);
        assert_eq!(response.usage.completion_tokens, 2);
    }
}
