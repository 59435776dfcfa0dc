//! Reply provider backed by a JSON query endpoint.
//!
//! Wire format:
//! - request: `POST <endpoint>` with body `{"message": "<text>"}`
//! - response: `{"answer"?: string, "actions"?: [string]}`

use serde::{Deserialize, Serialize};

use super::{BotReply, NO_RESPONSE_TEXT, ReplyError, ReplyProvider};

/// Request body sent to the query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub message: String,
}

/// Response body returned by the query endpoint. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub actions: Option<Vec<String>>,
}

impl QueryResponse {
    /// Convert into a bot reply, filling in the placeholder for a missing or
    /// empty answer.
    pub fn into_reply(self) -> BotReply {
        let text = self
            .answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string());
        BotReply::new(text).with_actions(self.actions.unwrap_or_default())
    }
}

/// POSTs each message to `endpoint` and turns the JSON answer into a reply.
pub struct RemoteReply {
    endpoint: String,
    max_response_bytes: u64,
    agent: ureq::Agent,
}

impl RemoteReply {
    pub fn new(endpoint: impl Into<String>, max_response_bytes: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            max_response_bytes,
            agent: crate::http::agent(),
        }
    }

    fn query(&self, text: &str) -> Result<QueryResponse, ReplyError> {
        let body = serde_json::to_string(&QueryRequest {
            message: text.to_string(),
        })
        .map_err(ReplyError::Encode)?;

        crate::debug_log!("REPLY", "POST {} ({} bytes)", self.endpoint, body.len());

        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("User-Agent", crate::http::USER_AGENT)
            .send(body.as_str())
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => ReplyError::Status {
                    endpoint: self.endpoint.clone(),
                    status,
                },
                source => ReplyError::Transport {
                    endpoint: self.endpoint.clone(),
                    source,
                },
            })?;

        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_response_bytes)
            .read_to_string()
            .map_err(|source| ReplyError::Body {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        crate::debug_trace!("REPLY", "Response body: {}", body);

        serde_json::from_str(&body).map_err(|source| ReplyError::Decode {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}

impl ReplyProvider for RemoteReply {
    fn reply(&self, text: &str) -> Result<BotReply, ReplyError> {
        self.query(text).map(QueryResponse::into_reply)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> BotReply {
        serde_json::from_str::<QueryResponse>(json)
            .unwrap()
            .into_reply()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&QueryRequest {
            message: "tacos".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"tacos"}"#);
    }

    #[test]
    fn test_answer_and_actions() {
        let reply = parse(r#"{"answer":"We open at 5pm","actions":["Book a table"]}"#);
        assert_eq!(reply.text, "We open at 5pm");
        assert_eq!(reply.actions, vec!["Book a table"]);
    }

    #[test]
    fn test_missing_answer_is_placeholder() {
        let reply = parse(r#"{"actions":["View menu"]}"#);
        assert_eq!(reply.text, "No response");
        assert_eq!(reply.actions, vec!["View menu"]);
    }

    #[test]
    fn test_empty_answer_is_placeholder() {
        assert_eq!(parse(r#"{"answer":""}"#).text, "No response");
        assert_eq!(parse(r#"{"answer":null}"#).text, "No response");
    }

    #[test]
    fn test_null_or_missing_actions_are_empty() {
        assert!(parse(r#"{"answer":"ok","actions":null}"#).actions.is_empty());
        assert!(parse(r#"{"answer":"ok"}"#).actions.is_empty());
        assert!(parse("{}").actions.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let reply = parse(r#"{"answer":"ok","confidence":0.9}"#);
        assert_eq!(reply.text, "ok");
    }
}
