use crate::domain::ports::JsonCodec;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonCodec;

impl JsonCodec for SerdeJsonCodec {
    fn encode(&self, value: &serde_json::Value) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode(&self, text: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ApiError;
    use serde_json::json;

    #[test]
    fn test_encode_is_compact() {
        let text = SerdeJsonCodec.encode(&json!({"name": "x"})).unwrap();
        assert_eq!(text, r#"{"name":"x"}"#);
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = SerdeJsonCodec.decode("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_decode_empty_body_fails() {
        assert!(SerdeJsonCodec.decode("").is_err());
    }
}
