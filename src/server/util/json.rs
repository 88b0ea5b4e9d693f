//! Request bodies are read as a `serde_json::Value` first so that only JSON objects reach
//! the typed DTOs. Serde would otherwise fill a struct from a JSON array by position.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::AppError;

/// Deserializes a request body that must be a JSON object.
pub fn from_object<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::InvalidJson(
            "request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|err| AppError::InvalidJson(err.to_string()))
}

/// Parses raw body bytes, then applies [`from_object`].
pub fn from_slice<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value = serde_json::from_slice(body).map_err(|err| AppError::InvalidJson(err.to_string()))?;

    from_object(value)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug)]
    struct Name {
        first: Option<String>,
        last: Option<String>,
    }

    #[test]
    fn accepts_objects() {
        let name: Name = from_object(json!({ "first": "Ada" })).unwrap();

        assert_eq!(name.first.as_deref(), Some("Ada"));
        assert_eq!(name.last, None);
    }

    #[test]
    fn rejects_arrays_and_scalars() {
        for body in [json!(["Ada", "Lovelace"]), json!("Ada"), json!(7), Value::Null] {
            let result = from_object::<Name>(body);

            assert!(matches!(result, Err(AppError::InvalidJson(_))));
        }
    }

    #[test]
    fn rejects_malformed_bytes() {
        let result = from_slice::<Name>(b"{\"first\":");

        assert!(matches!(result, Err(AppError::InvalidJson(_))));
    }
}
