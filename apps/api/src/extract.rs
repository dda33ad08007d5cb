//! Lenient JSON body parsing for the POST routes.
//!
//! Bodies are parsed whatever the `Content-Type` header says. Anything that is not a
//! JSON object (malformed text, `null`, arrays, an empty body) reads as an empty object,
//! so field validation in the handlers decides the response.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

pub fn json_object_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(_) => T::default(),
        Err(e) => {
            if !body.is_empty() {
                debug!("Ignoring unparseable request body: {e}");
            }
            T::default()
        }
    }
}

/// Returns the field only when it is a JSON string.
pub fn string_field(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}
