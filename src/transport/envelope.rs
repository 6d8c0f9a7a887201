use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ApiResponse;

#[derive(Debug, Clone, Deserialize)]
struct EnvelopeJson<T> {
    #[serde(default = "success_by_default")]
    success: bool,
    #[serde(default = "Option::default")]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Decode a 2xx body into the response envelope.
///
/// A blank body or a missing `success` field counts as success, since only 2xx replies
/// reach this point. A missing or `null` `data` field is decoded as JSON `null` into `T`.
pub fn decode_envelope<T: DeserializeOwned>(
    json: &str,
) -> Result<ApiResponse<T>, serde_json::Error> {
    if json.trim().is_empty() {
        return Ok(ApiResponse {
            success: true,
            data: T::deserialize(serde_json::Value::Null)?,
            error: None,
            message: None,
        });
    }

    let parsed: EnvelopeJson<T> = serde_json::from_str(json)?;
    let data = match parsed.data {
        Some(data) => data,
        None => T::deserialize(serde_json::Value::Null)?,
    };

    Ok(ApiResponse {
        success: parsed.success,
        data,
        error: parsed.error,
        message: parsed.message,
    })
}

fn success_by_default() -> bool {
    true
}

/// Extract the remote error text from an error body: `error`, then `message`.
///
/// Empty strings, non-string values and non-JSON bodies count as absent.
pub fn remote_error_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"].into_iter().find_map(|field| {
        parsed
            .get(field)
            .and_then(serde_json::Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
    })
}
