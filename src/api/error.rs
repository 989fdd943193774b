// This file is part of the terraform-provider-nios project
//
// Copyright (C) ANEO, 2026-2026. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;

/// Error raised by the WAPI client.
#[derive(Debug, thiserror::Error)]
pub enum WapiError {
    /// The request never reached the point of producing a WAPI response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server URL or one of its derived endpoints is not a valid URL.
    #[error("invalid WAPI URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The WAPI answered with a non-success status code.
    #[error("WAPI error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// The WAPI answered with a success status but an unexpected payload.
    #[error("failed to decode WAPI response: {message}")]
    Decode { message: String, body: String },
}

/// Body shape of a WAPI error response.
///
/// ```json
/// {"Error": "AdmConProtoError: Unknown object type (x)",
///  "code": "Client.Ibap.Proto",
///  "text": "Unknown object type (x)"}
/// ```
#[derive(Debug, Deserialize)]
struct WapiErrorBody {
    #[serde(rename = "Error")]
    error: Option<String>,
    code: Option<String>,
    text: Option<String>,
}

impl WapiError {
    /// Build an [`WapiError::Api`] from a response status and raw body,
    /// extracting the structured WAPI error message when there is one.
    pub(crate) fn api(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<WapiErrorBody>(body).ok();
        let (message, code) = match parsed {
            Some(parsed) => (
                parsed
                    .text
                    .or(parsed.error)
                    .unwrap_or_else(|| body.trim().to_owned()),
                parsed.code,
            ),
            None => (body.trim().to_owned(), None),
        };
        WapiError::Api {
            status,
            message,
            code,
        }
    }

    /// Whether the error means the addressed object does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            WapiError::Api { status, .. } => *status == 404,
            WapiError::Transport(err) => {
                err.status() == Some(reqwest::StatusCode::NOT_FOUND)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_extracts_wapi_message() {
        let body = r#"{"Error": "AdmConProtoError: Unknown object type (gmcgroupp)",
                       "code": "Client.Ibap.Proto",
                       "text": "Unknown object type (gmcgroupp)"}"#;
        let err = WapiError::api(400, body);
        match err {
            WapiError::Api {
                status,
                message,
                code,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Unknown object type (gmcgroupp)");
                assert_eq!(code.as_deref(), Some("Client.Ibap.Proto"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_keeps_unstructured_body() {
        let err = WapiError::api(502, "Bad Gateway\n");
        match err {
            WapiError::Api {
                status,
                message,
                code,
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
                assert_eq!(code, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_found_only_matches_404() {
        assert!(WapiError::api(404, "{}").is_not_found());
        assert!(!WapiError::api(403, "{}").is_not_found());
        assert!(!WapiError::Decode {
            message: "bad".into(),
            body: "{}".into(),
        }
        .is_not_found());
    }
}
