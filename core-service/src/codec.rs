//! Method-call wire types
//!
//! The host runtime delivers calls as `{ "method": ..., "arguments": {...} }`
//! and expects one of three reply shapes back:
//!
//! ```json
//! {"status": "success", "result": ...}
//! {"status": "error", "code": "...", "message": "...", "details": null}
//! {"status": "notImplemented"}
//! ```
//!
//! Artwork bytes travel base64-encoded (standard alphabet); the tag record
//! is a JSON object with camelCase keys.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use core_metadata::AudioTags;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

pub const EXTRACT_ARTWORK: &str = "extractArtwork";
pub const EXTRACT_METADATA: &str = "extractMetadata";

/// Argument carrying the absolute path of the media file
pub const FILE_PATH_ARGUMENT: &str = "filePath";

/// Error code for a call that violates the argument contract
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

pub(crate) const FILE_PATH_REQUIRED: &str = "File path is required";

/// An incoming call from the host runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Typed argument lookup; `None` when absent or of another type.
    pub fn argument<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.arguments.get(key)?;
        T::deserialize(value).ok()
    }

    /// String argument lookup without copying.
    pub fn argument_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key)?.as_str()
    }
}

/// Payload of a successful reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyValue {
    /// Absent result (no file, no artwork, unreadable file)
    Null,
    Bytes(Bytes),
    Tags(AudioTags),
}

impl From<Option<Bytes>> for ReplyValue {
    fn from(value: Option<Bytes>) -> Self {
        value.map_or(ReplyValue::Null, ReplyValue::Bytes)
    }
}

impl From<Option<AudioTags>> for ReplyValue {
    fn from(value: Option<AudioTags>) -> Self {
        value.map_or(ReplyValue::Null, ReplyValue::Tags)
    }
}

/// Reply to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(ReplyValue),
    Error {
        code: String,
        message: String,
        details: Option<Value>,
    },
    NotImplemented,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum Envelope<'a> {
    Success {
        result: Value,
    },
    Error {
        code: &'a str,
        message: &'a str,
        details: Option<&'a Value>,
    },
    NotImplemented,
}

impl MethodResponse {
    pub fn success(value: impl Into<ReplyValue>) -> Self {
        MethodResponse::Success(value.into())
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodResponse::Error {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub(crate) fn missing_file_path() -> Self {
        Self::error(INVALID_ARGUMENT, FILE_PATH_REQUIRED)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResponse::Success(_))
    }

    /// Encode into the JSON envelope understood by the host.
    pub fn to_envelope(&self) -> Result<Value> {
        let envelope = match self {
            MethodResponse::Success(value) => Envelope::Success {
                result: reply_to_json(value)?,
            },
            MethodResponse::Error {
                code,
                message,
                details,
            } => Envelope::Error {
                code,
                message,
                details: details.as_ref(),
            },
            MethodResponse::NotImplemented => Envelope::NotImplemented,
        };

        Ok(serde_json::to_value(envelope)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_envelope()?)?)
    }
}

fn reply_to_json(value: &ReplyValue) -> Result<Value> {
    Ok(match value {
        ReplyValue::Null => Value::Null,
        ReplyValue::Bytes(bytes) => Value::String(STANDARD.encode(bytes)),
        ReplyValue::Tags(tags) => serde_json::to_value(tags)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_from_json() {
        let call = MethodCall::from_json(
            r#"{"method":"extractArtwork","arguments":{"filePath":"/music/a.mp3"}}"#,
        )
        .unwrap();

        assert_eq!(call.method, EXTRACT_ARTWORK);
        assert_eq!(call.argument_str(FILE_PATH_ARGUMENT), Some("/music/a.mp3"));
        assert_eq!(
            call.argument::<String>(FILE_PATH_ARGUMENT).as_deref(),
            Some("/music/a.mp3")
        );
    }

    #[test]
    fn test_call_without_arguments() {
        let call = MethodCall::from_json(r#"{"method":"extractMetadata"}"#).unwrap();
        assert!(call.arguments.is_null());
        assert_eq!(call.argument_str(FILE_PATH_ARGUMENT), None);
    }

    #[test]
    fn test_non_string_argument_is_absent() {
        let call = MethodCall::new(EXTRACT_ARTWORK, json!({ "filePath": 42 }));
        assert_eq!(call.argument_str(FILE_PATH_ARGUMENT), None);
        assert_eq!(call.argument::<String>(FILE_PATH_ARGUMENT), None);
        assert_eq!(call.argument::<i64>(FILE_PATH_ARGUMENT), Some(42));
    }

    #[test]
    fn test_malformed_call_is_codec_error() {
        let err = MethodCall::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::CoreError::Codec(_)));
    }

    #[test]
    fn test_null_success_envelope() {
        let envelope = MethodResponse::success(None::<Bytes>).to_envelope().unwrap();
        assert_eq!(envelope, json!({ "status": "success", "result": null }));
    }

    #[test]
    fn test_artwork_is_base64() {
        let response = MethodResponse::success(Some(Bytes::from_static(b"\x89PNG")));
        let envelope = response.to_envelope().unwrap();

        assert_eq!(envelope["status"], "success");
        assert_eq!(envelope["result"], "iVBORw==");
    }

    #[test]
    fn test_tags_envelope() {
        let tags = AudioTags {
            title: Some("Harbor Lights".to_string()),
            track_number: Some(3),
            ..Default::default()
        };
        let envelope = MethodResponse::success(Some(tags)).to_envelope().unwrap();

        assert_eq!(envelope["result"]["title"], "Harbor Lights");
        assert_eq!(envelope["result"]["trackNumber"], 3);
        assert_eq!(envelope["result"]["hasArtwork"], false);
    }

    #[test]
    fn test_error_envelope() {
        let envelope = MethodResponse::missing_file_path().to_envelope().unwrap();
        assert_eq!(
            envelope,
            json!({
                "status": "error",
                "code": "INVALID_ARGUMENT",
                "message": "File path is required",
                "details": null,
            })
        );
    }

    #[test]
    fn test_not_implemented_envelope() {
        let raw = MethodResponse::NotImplemented.to_json().unwrap();
        assert_eq!(raw, r#"{"status":"notImplemented"}"#);
    }
}
