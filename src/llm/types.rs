use crate::{
    config::GenerationParameters,
    error::{Error, ErrorKind},
};
use serde::{Deserialize, Serialize};

/// Body of one call to the text-generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
    pub options: RequestOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestOptions {
    pub use_cache: bool,
}

impl InferenceRequest {
    pub fn new(inputs: String, parameters: GenerationParameters) -> Self {
        Self {
            inputs,
            parameters,
            options: RequestOptions { use_cache: false },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchCompletion {
    #[serde(default)]
    pub generated_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleCompletion {
    pub generated_text: String,
}

/// Accepted success bodies, tried top to bottom.
///
/// Only the head of a batch is decoded; later elements are never inspected.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CompletionPayload {
    Batch(Vec<serde_json::Value>),
    Single(SingleCompletion),
}

impl CompletionPayload {
    /// Decodes a JSON body, rejecting every shape other than the two accepted ones.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        Self::deserialize(value).map_err(|_| Error::UnexpectedFormat)
    }

    /// Trimmed completion text. An empty batch carries no completion.
    pub fn into_text(self) -> Result<String, Error> {
        let text = match self {
            Self::Batch(items) => {
                let head = items.into_iter().next().ok_or(Error::UnexpectedFormat)?;
                BatchCompletion::deserialize(head)
                    .map_err(|_| Error::UnexpectedFormat)?
                    .generated_text
            }
            Self::Single(item) => item.generated_text,
        };
        Ok(text.trim().to_string())
    }
}

/// Normalized outcome of one inference call.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResult {
    Text(String),
    Refused(String),
    Error { kind: ErrorKind, detail: String },
}

impl InferenceResult {
    pub fn from_error(error: &Error) -> Self {
        let detail = match error {
            Error::Network(msg) | Error::Internal(msg) => msg.clone(),
            Error::Http { status, detail } => format!("{status}: {detail}"),
            other => other.to_string(),
        };
        Self::Error {
            kind: error.kind(),
            detail,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Text shown to the user as the assistant's turn.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) | Self::Refused(text) => text.clone(),
            Self::Error { kind, detail } => match kind {
                ErrorKind::NetworkError => {
                    "Error: Could not connect to the chatbot service.".to_string()
                }
                ErrorKind::UnexpectedFormat => {
                    "Error: Unexpected response format from API.".to_string()
                }
                ErrorKind::HttpError | ErrorKind::InternalError => {
                    format!("Error processing request: {detail}")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<String, Error> {
        CompletionPayload::from_value(value)?.into_text()
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = InferenceRequest::new("prompt".to_string(), GenerationParameters::default());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["inputs"], "prompt");
        assert_eq!(value["parameters"]["max_new_tokens"], 512);
        assert_eq!(value["parameters"]["do_sample"], true);
        assert_eq!(value["parameters"]["return_full_text"], false);
        assert_eq!(value["options"], json!({"use_cache": false}));
    }

    #[test]
    fn test_decode_batch_takes_first_element() {
        let text = decode(json!([
            {"generated_text": "  first  "},
            {"generated_text": "second"}
        ]))
        .unwrap();
        assert_eq!(text, "first");
    }

    #[test]
    fn test_decode_batch_ignores_malformed_tail() {
        let text = decode(json!([
            {"generated_text": "ok"},
            {"generated_text": 5},
            "not an object"
        ]))
        .unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_decode_batch_without_field_is_empty() {
        assert_eq!(decode(json!([{"score": 1}])).unwrap(), "");
    }

    #[test]
    fn test_decode_single_object() {
        assert_eq!(decode(json!({"generated_text": "x\n"})).unwrap(), "x");
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        for value in [
            json!({}),
            json!([]),
            json!("text"),
            json!(42),
            json!(null),
            json!({"error": "Model is loading"}),
            json!([{"generated_text": 3}]),
            json!([1, {"generated_text": "second"}]),
        ] {
            assert!(
                matches!(decode(value.clone()), Err(Error::UnexpectedFormat)),
                "expected UnexpectedFormat for {value}"
            );
        }
    }

    #[test]
    fn test_render_errors() {
        let network = InferenceResult::from_error(&Error::network("connection refused"));
        assert_eq!(
            network.render(),
            "Error: Could not connect to the chatbot service."
        );

        let http = InferenceResult::from_error(&Error::Http {
            status: 500,
            detail: "N/A".to_string(),
        });
        assert_eq!(
            http,
            InferenceResult::Error {
                kind: ErrorKind::HttpError,
                detail: "500: N/A".to_string()
            }
        );
        assert_eq!(http.render(), "Error processing request: 500: N/A");

        let format = InferenceResult::from_error(&Error::UnexpectedFormat);
        assert_eq!(format.render(), "Error: Unexpected response format from API.");
        assert!(format.is_error());
    }
}
