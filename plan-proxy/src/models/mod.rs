//! Request shapes: what the plan page sends us and what we send Gemini.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Message returned when either prompt is absent or empty.
pub const MISSING_PROMPT_MESSAGE: &str = "Missing prompt data.";

/// Prompts read from the body posted by the plan page.
///
/// A prompt is kept only when it is a JSON string; `null`, `false`, `0` and
/// every other non-string value count as absent, and `""` fails validation.
#[derive(Debug, Clone, Default, Validate)]
pub struct PlanRequest {
    #[validate(required, length(min = 1))]
    pub system_prompt: Option<String>,
    #[validate(required, length(min = 1))]
    pub user_prompt: Option<String>,
}

/// Body of a Gemini `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl GenerateContentRequest {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: Content::text(system_prompt),
            contents: vec![Content::text(user_prompt)],
        }
    }
}

impl PlanRequest {
    /// Read the prompts from a decoded body.
    ///
    /// Only an object carries prompts: arrays, strings, numbers and booleans
    /// yield an empty request. Returns `None` for `null`, which has no fields
    /// to read at all.
    pub fn from_json(body: Value) -> Option<Self> {
        match body {
            Value::Null => None,
            Value::Object(fields) => Some(Self {
                system_prompt: prompt_text(fields.get("systemPrompt")),
                user_prompt: prompt_text(fields.get("userPrompt")),
            }),
            _ => Some(Self::default()),
        }
    }

    /// Turn a validated request into the upstream payload.
    ///
    /// Returns `None` when a prompt is missing or empty.
    pub fn into_payload(self) -> Option<GenerateContentRequest> {
        if self.validate().is_err() {
            return None;
        }
        match (self.system_prompt, self.user_prompt) {
            (Some(system), Some(user)) => Some(GenerateContentRequest::new(system, user)),
            _ => None,
        }
    }
}

fn prompt_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> PlanRequest {
        PlanRequest::from_json(body).unwrap()
    }

    #[test]
    fn payload_has_the_generate_content_shape() {
        let payload = GenerateContentRequest::new("be a coach", "plan my week");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "systemInstruction": { "parts": [{ "text": "be a coach" }] },
                "contents": [{ "parts": [{ "text": "plan my week" }] }]
            })
        );
    }

    #[test]
    fn complete_request_becomes_payload() {
        let payload = parse(json!({ "systemPrompt": "sys", "userPrompt": "user" }))
            .into_payload()
            .unwrap();

        assert_eq!(payload.system_instruction.parts[0].text, "sys");
        assert_eq!(payload.contents[0].parts[0].text, "user");
    }

    #[test]
    fn missing_null_or_empty_prompts_are_rejected() {
        let cases = [
            json!({}),
            json!({ "systemPrompt": "sys" }),
            json!({ "userPrompt": "user" }),
            json!({ "systemPrompt": null, "userPrompt": "user" }),
            json!({ "systemPrompt": "sys", "userPrompt": "" }),
            json!({ "systemPrompt": "", "userPrompt": "" }),
        ];

        for body in cases {
            assert!(parse(body.clone()).into_payload().is_none(), "{body}");
        }
    }

    #[test]
    fn falsy_and_non_string_prompts_are_rejected() {
        let cases = [
            json!({ "systemPrompt": false, "userPrompt": "user" }),
            json!({ "systemPrompt": 0, "userPrompt": "user" }),
            json!({ "systemPrompt": "sys", "userPrompt": 0.0 }),
            json!({ "systemPrompt": true, "userPrompt": "user" }),
            json!({ "systemPrompt": "sys", "userPrompt": 42 }),
            json!({ "systemPrompt": ["sys"], "userPrompt": "user" }),
            json!({ "systemPrompt": "sys", "userPrompt": { "text": "user" } }),
        ];

        for body in cases {
            assert!(parse(body.clone()).into_payload().is_none(), "{body}");
        }
    }

    #[test]
    fn non_object_bodies_carry_no_prompts() {
        for body in [json!(["sys", "user"]), json!("sys"), json!(7), json!(true)] {
            assert!(parse(body.clone()).into_payload().is_none(), "{body}");
        }
    }

    #[test]
    fn null_body_has_nothing_to_read() {
        assert!(PlanRequest::from_json(Value::Null).is_none());
    }

    #[test]
    fn duplicate_key_keeps_last_value() {
        let body: Value =
            serde_json::from_str(r#"{"systemPrompt":"sys","systemPrompt":"","userPrompt":"u"}"#)
                .unwrap();
        assert!(parse(body).into_payload().is_none());

        let body: Value =
            serde_json::from_str(r#"{"systemPrompt":"","systemPrompt":"sys","userPrompt":"u"}"#)
                .unwrap();
        let payload = parse(body).into_payload().unwrap();
        assert_eq!(payload.system_instruction.parts[0].text, "sys");
    }

    #[test]
    fn whitespace_prompt_is_forwarded() {
        assert!(parse(json!({ "systemPrompt": " ", "userPrompt": "user" }))
            .into_payload()
            .is_some());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request = parse(json!({
            "systemPrompt": "sys",
            "userPrompt": "user",
            "temperature": 0.2
        }));
        assert!(request.into_payload().is_some());
    }
}
