//! Wheel-Size API client
//!
//! Thin blocking client for `api.wheel-size.com/v2`. Every call is a single
//! GET with the user key in the query string. Connect and request timeouts
//! prevent indefinite hangs on an unresponsive endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::fitment::types::{CatalogEntry, Payload, SearchResult};

/// Production API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.wheel-size.com/v2";

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error bodies are truncated to this many characters before display
const MAX_ERROR_BODY_CHARS: usize = 400;

#[derive(Debug, Error)]
pub enum FitmentError {
    #[error("missing Wheel-Size API key (set WHEELSIZE_API_KEY or add api_key to your user config)")]
    MissingApiKey,

    #[error("fitment API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fitment API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("fitment API returned non-JSON: {raw}")]
    BadJson { raw: String },
}

/// Blocking Wheel-Size API client
pub struct FitmentClient {
    http: Client,
    base: String,
    user_key: String,
}

impl FitmentClient {
    /// Client against the production endpoint
    pub fn new(user_key: impl Into<String>) -> Result<FitmentClient, FitmentError> {
        FitmentClient::with_base(user_key, DEFAULT_API_BASE)
    }

    /// Client against an alternate endpoint
    pub fn with_base(
        user_key: impl Into<String>,
        base: impl Into<String>,
    ) -> Result<FitmentClient, FitmentError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("treadfit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(FitmentClient {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            user_key: user_key.into(),
        })
    }

    fn get<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, FitmentError> {
        let url = format!("{}/{}/", self.base, path);
        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("user_key", &self.user_key));

        let response = self
            .http
            .get(&url)
            .query(&query)
            .header("accept", "application/json")
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(FitmentError::Api {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        let payload: Payload<T> = serde_json::from_str(&text).map_err(|_| FitmentError::BadJson {
            raw: truncate_body(&text),
        })?;
        Ok(payload.into_vec())
    }

    /// Years available for a make
    pub fn years(&self, make: &str) -> Result<Vec<CatalogEntry>, FitmentError> {
        self.get("years", &[("make", make)])
    }

    /// Models for a make and year
    pub fn models(&self, make: &str, year: &str) -> Result<Vec<CatalogEntry>, FitmentError> {
        self.get("models", &[("make", make), ("year", year)])
    }

    /// Modifications (trim/engine variants) for a make, model, and year
    pub fn modifications(
        &self,
        make: &str,
        model: &str,
        year: &str,
    ) -> Result<Vec<CatalogEntry>, FitmentError> {
        self.get(
            "modifications",
            &[("make", make), ("model", model), ("year", year)],
        )
    }

    /// OEM fitment search for a specific modification
    pub fn search_by_model(
        &self,
        make: &str,
        model: &str,
        year: &str,
        modification: &str,
    ) -> Result<Vec<SearchResult>, FitmentError> {
        self.get(
            "search/by_model",
            &[
                ("make", make),
                ("model", model),
                ("year", year),
                ("modification", modification),
            ],
        )
    }

    /// Raw OEM tire sizes for a vehicle. Only the first search result is
    /// consulted; within it, front and rear designations are collected per
    /// axle pair.
    pub fn tire_sizes(
        &self,
        make: &str,
        model: &str,
        year: &str,
        modification: &str,
    ) -> Result<Vec<String>, FitmentError> {
        let results = self.search_by_model(make, model, year, modification)?;
        Ok(results
            .first()
            .map(|r| r.tire_sizes())
            .unwrap_or_default())
    }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_trims_trailing_slash() {
        let client = FitmentClient::with_base("key", "https://example.test/v2/").unwrap();
        assert_eq!(client.base, "https://example.test/v2");
    }

    #[test]
    fn test_truncate_body_caps_length() {
        let long = "x".repeat(1000);
        assert_eq!(truncate_body(&long).len(), MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn test_missing_api_key_message_names_env_var() {
        let msg = FitmentError::MissingApiKey.to_string();
        assert!(msg.contains("WHEELSIZE_API_KEY"));
    }
}
