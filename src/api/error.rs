//! Error handling for the assessments API module

use crate::consts::ui_consts::{INSIGHT_FAILED, INSIGHT_SERVICE_ERROR};
use serde::Deserialize;
use thiserror::Error;

/// Shape of the JSON body the server attaches to failed responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON payload from the server
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {}", message.as_deref().unwrap_or("no error payload"))]
    Http {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// Builds an `Http` error from a non-success response. The server puts
    /// human-readable Croatian messages under an `error` key; keep that
    /// message when the body parses, otherwise record the bare status.
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|payload| payload.error),
            Err(_) => None,
        };

        ApiError::Http { status, message }
    }

    /// The message shown to the user when an insight request fails.
    ///
    /// Server-provided messages win; a rejection without a payload message
    /// and a transport failure each get their own generic text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Http { message: None, .. } => INSIGHT_FAILED.to_string(),
            _ => INSIGHT_SERVICE_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_payload() {
        let error = ApiError::Http {
            status: 503,
            message: Some("Usluga trenutno nije dostupna.".to_string()),
        };
        assert_eq!(error.user_message(), "Usluga trenutno nije dostupna.");
    }

    #[test]
    fn test_user_message_without_payload() {
        let error = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(error.user_message(), INSIGHT_FAILED);
    }

    #[test]
    fn test_user_message_for_decode_failure() {
        let error = ApiError::Decode(serde_json::from_str::<ErrorBody>("not json").unwrap_err());
        assert_eq!(error.user_message(), INSIGHT_SERVICE_ERROR);
    }
}
