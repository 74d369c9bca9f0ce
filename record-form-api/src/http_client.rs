//! Generic HTTP client tools
//!
//! Sending a request, logging it, classifying failures, and reading the body
//! are the same for every record operation; the operations themselves only
//! build a `RequestBuilder` and decide how to interpret the text.
//!
//! # design principles
//! - **No retries** - every failure is reported to the caller exactly once
//! - **Non-2xx is an error** - the body is kept for diagnostics
//! - **Flexible response parsing** - callers decide whether to parse or ignore the body

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, body, headers)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any 2xx status
    /// * `Err(ApiError::HttpStatus)` for any other status
    /// * `Err(ApiError::NetworkError | ApiError::Timeout)` when nothing came back
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("{method_name} {url} -> {status_code}");

        if !status.is_success() {
            let body = response.text().await.ok();
            log::warn!(
                "{method_name} {url} failed with HTTP {status_code}: {}",
                body.as_deref().map(truncate_for_log).unwrap_or_default()
            );
            return Err(ApiError::HttpStatus {
                status: status_code,
                body,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Age, Record};

    #[test]
    fn parse_json_record_list() {
        let result: Result<Vec<Record>, ApiError> =
            HttpUtils::parse_json(r#"[{"_id":"1","name":"Ana","age":"30"}]"#);
        assert!(
            matches!(&result, Ok(list) if list.len() == 1 && list[0].age == Age::Years(30)),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Record, ApiError> = HttpUtils::parse_json("<html>oops</html>");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_wrong_shape() {
        let result: Result<Vec<Record>, ApiError> = HttpUtils::parse_json(r#"{"records":[]}"#);
        assert!(matches!(result, Err(ApiError::ParseError { .. })));
    }
}
