use serde::{Deserialize, Serialize};

/// Uniform response envelope used by every portal endpoint.
///
/// The backend reports the outcome in `success`; a missing or falsy
/// `success` is a failure regardless of the HTTP status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope into the carried data.
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or_else(|| "Request failed".to_string()));
        }
        self.data
            .ok_or_else(|| "Response carried no data".to_string())
    }

    /// Unwrap an envelope whose data payload is irrelevant (probe, submit).
    pub fn ack(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "Request failed".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_success_is_failure_even_with_data() {
        let resp: ApiResponse<i32> = serde_json::from_str(r#"{"data": 7}"#).unwrap();
        assert!(resp.into_result().is_err());
    }

    #[test]
    fn success_with_data_unwraps() {
        let resp: ApiResponse<i32> =
            serde_json::from_str(r#"{"success": true, "data": 7}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), 7);
    }

    #[test]
    fn ack_ignores_missing_data() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": true, "message": "ok"}"#).unwrap();
        assert!(resp.ack().is_ok());
    }

    #[test]
    fn failure_message_is_surfaced() {
        let resp: ApiResponse<i32> =
            serde_json::from_str(r#"{"success": false, "message": "no backend"}"#).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "no backend");
    }
}
