//! The request gateway: one async operation per backend endpoint.
//!
//! # Design
//! Each operation builds its request with `NaviClient`, hands it to the
//! injected `Transport`, and parses the response. A failure at either step is
//! logged once through `tracing` with the endpoint's failure label and then
//! returned to the caller unchanged. There is no retry and no recovery.

use serde_json::Value;
use tracing::{debug, error};

use crate::client::NaviClient;
use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::{HttpTransport, Transport};

/// Async facade over the navi backend.
#[derive(Debug, Clone)]
pub struct Gateway<T = HttpTransport> {
    client: NaviClient,
    transport: T,
}

impl Gateway<HttpTransport> {
    /// Gateway over a fresh `reqwest`-backed transport.
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> Gateway<T> {
    pub fn with_transport(config: &Config, transport: T) -> Self {
        Self {
            client: NaviClient::new(&config.base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// A gateway for another base URL sharing this gateway's transport.
    pub fn with_base_url(&self, base_url: &str) -> Self
    where
        T: Clone,
    {
        Self {
            client: NaviClient::new(base_url),
            transport: self.transport.clone(),
        }
    }

    pub async fn fetch_user_data(&self) -> Result<Value, ApiError> {
        self.dispatch(Endpoint::User, self.client.build_user_data()).await
    }

    pub async fn fetch_map_info(&self) -> Result<Value, ApiError> {
        self.dispatch(Endpoint::MapInfo, self.client.build_map_info()).await
    }

    pub async fn fetch_traffic(&self) -> Result<Value, ApiError> {
        self.dispatch(Endpoint::Traffic, self.client.build_traffic()).await
    }

    pub async fn fetch_weather(&self) -> Result<Value, ApiError> {
        self.dispatch(Endpoint::Weather, self.client.build_weather()).await
    }

    /// Search roads with the given query parameters, e.g.
    /// `[("from", "A"), ("to", "B")]`.
    pub async fn search_road<I, K, V>(&self, params: I) -> Result<Value, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self.client.build_search_road(params);
        self.dispatch(Endpoint::RoadSearch, request).await
    }

    async fn dispatch(&self, endpoint: Endpoint, request: HttpRequest) -> Result<Value, ApiError> {
        debug!(operation = endpoint.operation(), url = %request.url, "dispatching request");
        let outcome = match self.transport.execute(request).await {
            Ok(response) => self.client.parse(response),
            Err(err) => Err(err),
        };
        outcome.inspect_err(|err| {
            error!(operation = endpoint.operation(), error = %err, "{}", endpoint.failure_label());
        })
    }
}
