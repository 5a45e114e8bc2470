//! Stateless HTTP request builder and response parser for the navi API.
//!
//! # Design
//! `NaviClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint has a `build_*` method that produces an `HttpRequest`;
//! every endpoint answers with an opaque JSON payload, so a single `parse`
//! consumes the `HttpResponse`. The gateway runs the round-trip in between.

use serde_json::Value;
use url::form_urlencoded;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

const ACCEPT: &str = "application/json, text/plain, */*";

/// Synchronous, stateless request builder for the navi API.
#[derive(Debug, Clone)]
pub struct NaviClient {
    base_url: String,
}

impl NaviClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_user_data(&self) -> HttpRequest {
        self.build(Endpoint::User, "")
    }

    pub fn build_map_info(&self) -> HttpRequest {
        self.build(Endpoint::MapInfo, "")
    }

    pub fn build_traffic(&self) -> HttpRequest {
        self.build(Endpoint::Traffic, "")
    }

    pub fn build_weather(&self) -> HttpRequest {
        self.build(Endpoint::Weather, "")
    }

    /// Build a road search. Parameters are form-encoded in iteration order,
    /// so `[("from", "A"), ("to", "B")]` yields `/road?from=A&to=B`.
    pub fn build_search_road<I, K, V>(&self, params: I) -> HttpRequest
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        self.build(Endpoint::RoadSearch, &query)
    }

    /// Build the no-argument request for `endpoint`. Road search built this
    /// way carries no parameters.
    pub fn build_endpoint(&self, endpoint: Endpoint) -> HttpRequest {
        self.build(endpoint, "")
    }

    /// Turn a response into the JSON payload it carries.
    ///
    /// Any 2xx is success. An empty 2xx body is `Value::Null`.
    pub fn parse(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn build(&self, endpoint: Endpoint, query: &str) -> HttpRequest {
        let mut url = format!("{}{}", self.base_url, endpoint.path());
        if endpoint.accepts_query() && !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        HttpRequest {
            url,
            headers: vec![("accept".to_string(), ACCEPT.to_string())],
        }
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
