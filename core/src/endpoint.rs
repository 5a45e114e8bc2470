//! Endpoint descriptors for the navi backend.
//!
//! # Design
//! The backend exposes five fixed GET paths. Each one is a variant of
//! `Endpoint` rather than a free-form string so the path, whether a query
//! string is allowed, and the diagnostic label always travel together.

/// A backend endpoint the gateway can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    User,
    MapInfo,
    Traffic,
    Weather,
    RoadSearch,
}

impl Endpoint {
    /// Every endpoint, in the order they are documented.
    pub const ALL: [Endpoint; 5] = [
        Endpoint::User,
        Endpoint::MapInfo,
        Endpoint::Traffic,
        Endpoint::Weather,
        Endpoint::RoadSearch,
    ];

    /// Path suffix appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::User => "/user",
            Endpoint::MapInfo => "/map/info",
            Endpoint::Traffic => "/map/traffic",
            Endpoint::Weather => "/map/weather",
            Endpoint::RoadSearch => "/road",
        }
    }

    pub fn accepts_query(self) -> bool {
        matches!(self, Endpoint::RoadSearch)
    }

    /// Name of the gateway operation bound to this endpoint.
    pub fn operation(self) -> &'static str {
        match self {
            Endpoint::User => "fetch_user_data",
            Endpoint::MapInfo => "fetch_map_info",
            Endpoint::Traffic => "fetch_traffic",
            Endpoint::Weather => "fetch_weather",
            Endpoint::RoadSearch => "search_road",
        }
    }

    /// Message logged when a call to this endpoint fails.
    pub fn failure_label(self) -> &'static str {
        match self {
            Endpoint::User => "get user data failed",
            Endpoint::MapInfo => "get map info failed",
            Endpoint::Traffic => "get traffic info failed",
            Endpoint::Weather => "get weather data failed",
            Endpoint::RoadSearch => "search road failed",
        }
    }
}
