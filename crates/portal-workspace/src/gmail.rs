//! Gmail v1 send client.

use serde::{Deserialize, Serialize};

use crate::{WorkspaceClient, error::ServiceError, http::check_response};

const USERS_URL: &str = "https://gmail.googleapis.com/gmail/v1/users";

/// Gmail's reply to `users.messages.send`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub thread_id: String,
    #[serde(default)]
    pub label_ids: Vec<String>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    raw: &'a str,
}

impl WorkspaceClient {
    /// Send an already encoded message (see [`crate::mime::encode_raw`]).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails, Gmail returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn gmail_send(
        &self,
        token: &str,
        user_id: &str,
        raw: &str,
    ) -> Result<SendResult, ServiceError> {
        let url = format!("{USERS_URL}/{}/messages/send", urlencoding::encode(user_id));
        let resp = check_response(
            self.http
                .post(&url)
                .bearer_auth(token)
                .json(&SendRequest { raw })
                .send()
                .await?,
        )
        .await?;
        let result: SendResult = resp.json().await?;
        tracing::debug!(id = %result.id, "gmail message sent");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_send_result() {
        let result: SendResult = serde_json::from_str(
            r#"{"id": "18c1", "threadId": "18c1", "labelIds": ["SENT"]}"#,
        )
        .unwrap();
        assert_eq!(result.id, "18c1");
        assert_eq!(result.label_ids, vec!["SENT".to_string()]);
    }

    #[test]
    fn send_request_body_has_only_raw() {
        let body = serde_json::to_value(SendRequest { raw: "abc" }).unwrap();
        assert_eq!(body, serde_json::json!({"raw": "abc"}));
    }
}
