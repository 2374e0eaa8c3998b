//! The response envelope wrapping every service reply.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::ListResponse;
use crate::error::{Error, Result};

/// The uniform `{success, data, error, message}` wrapper.
///
/// ```rust
/// use aras_auth::{Envelope, ErrorKind};
///
/// let ok: Envelope = serde_json::from_str(r#"{"success": true, "data": {"id": "1"}}"#).unwrap();
/// assert!(ok.into_data().unwrap().is_some());
///
/// let failed: Envelope =
///     serde_json::from_str(r#"{"success": false, "error": "not_found", "message": "no such user"}"#)
///         .unwrap();
/// let err = failed.into_data().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Api);
/// assert_eq!(err.code(), Some("not_found"));
/// assert_eq!(err.message(), "no such user");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    /// Whether the request succeeded.
    pub success: bool,
    /// The payload; absent or `null` for operations without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Creates a successful envelope around `data`.
    pub fn success(data: Option<Value>) -> Self {
        Self {
            success: true,
            data,
            ..Self::default()
        }
    }

    /// Unwraps the envelope.
    ///
    /// Returns the `data` field when `success` is true (possibly `None`),
    /// and an [`ErrorKind::Api`](crate::ErrorKind::Api) error carrying
    /// `error` and `message` otherwise.
    pub fn into_data(self) -> Result<Option<Value>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(Error::api(self.error, self.message))
        }
    }

    /// Unwraps the envelope and deserializes a single record from `data`.
    ///
    /// A missing or `null` payload, or one that is not a JSON object, is an
    /// [`ErrorKind::InvalidResponse`](crate::ErrorKind::InvalidResponse) error.
    pub fn into_record<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        match self.into_data()? {
            None | Some(Value::Null) => Err(Error::invalid_response("response contained no data")),
            Some(value) => decode_record(value),
        }
    }

    /// Unwraps the envelope and deserializes a list of records from `data`.
    ///
    /// A missing or `null` payload is an empty list. Every item must be a
    /// JSON object.
    pub fn into_list<T>(self) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        match self.into_data()? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items.into_iter().map(decode_record).collect(),
            Some(other) => Err(unexpected_shape("an array", &other)),
        }
    }

    /// Unwraps the envelope and deserializes one page of a paginated list.
    ///
    /// Items are read from `items`, or from `items_key` (e.g. `"users"`)
    /// when the payload names them after the resource. A missing or `null`
    /// payload is an empty first page.
    pub fn into_page<T>(self, items_key: &str) -> Result<ListResponse<T>>
    where
        T: DeserializeOwned,
    {
        match self.into_data()? {
            None | Some(Value::Null) => Ok(ListResponse::default()),
            Some(Value::Object(mut map)) => {
                if !map.contains_key("items")
                    && let Some(items) = map.remove(items_key)
                {
                    map.insert("items".to_string(), items);
                }
                if let Some(Value::Array(items)) = map.get("items")
                    && let Some(item) = items.iter().find(|item| !item.is_object())
                {
                    return Err(unexpected_shape("an object", item));
                }
                decode(Value::Object(map))
            },
            Some(other) => Err(unexpected_shape("an object", &other)),
        }
    }

    /// Unwraps the envelope, discarding any payload.
    pub fn into_unit(self) -> Result<()> {
        self.into_data().map(|_| ())
    }
}

/// Decodes a record, accepting only a JSON object.
///
/// Derived struct decoding would also fill fields from a JSON array by
/// position.
pub(crate) fn decode_record<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    if value.is_object() {
        decode(value)
    } else {
        Err(unexpected_shape("an object", &value))
    }
}

fn decode<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| {
        Error::invalid_response(format!("unexpected payload shape: {}", e)).with_source(e)
    })
}

fn unexpected_shape(expected: &str, value: &Value) -> Error {
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Error::invalid_response(format!("unexpected payload shape: expected {}, found {}", expected, found))
}
