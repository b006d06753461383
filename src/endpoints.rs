use crate::objects::{
    ArrivalsResponse, DeparturesResponse, EnvelopeKind, NationalStopGroupResponse,
    ResponseEnvelope,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;

/// Identifier of one supported remote operation
///
/// The catalog is closed: these six identifiers are the only vocabulary the
/// dispatchers and the mock store accept, and every projection over an
/// identifier (method, path template, parameter shape, response shape) derives
/// from this one enumeration. Path templates with one and two placeholders are
/// distinct identifiers, never optional-segment variants of the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// List stop groups matching a name
    StopSearch,
    /// List all stop groups
    StopList,
    /// Departure board for a stop, at the current time
    DeparturesNow,
    /// Departure board for a stop, at a specific time
    DeparturesAt,
    /// Arrival board for a stop, at the current time
    ArrivalsNow,
    /// Arrival board for a stop, at a specific time
    ArrivalsAt,
}

impl Endpoint {
    /// Every identifier in the catalog
    pub const ALL: [Endpoint; 6] = [
        Endpoint::StopSearch,
        Endpoint::StopList,
        Endpoint::DeparturesNow,
        Endpoint::DeparturesAt,
        Endpoint::ArrivalsNow,
        Endpoint::ArrivalsAt,
    ];

    /// HTTP method of the endpoint. The catalog is currently GET-only, but
    /// the dispatcher always consumes this projection rather than assuming so
    pub fn method(self) -> Method {
        match self {
            Endpoint::StopSearch
            | Endpoint::StopList
            | Endpoint::DeparturesNow
            | Endpoint::DeparturesAt
            | Endpoint::ArrivalsNow
            | Endpoint::ArrivalsAt => Method::GET,
        }
    }

    /// Path template of the endpoint, with `{name}` placeholders
    pub fn path_template(self) -> &'static str {
        match self {
            Endpoint::StopSearch => "/stops/name/{searchValue}",
            Endpoint::StopList => "/stops/list",
            Endpoint::DeparturesNow => "/departures/{stopId}",
            Endpoint::DeparturesAt => "/departures/{stopId}/{dateTime}",
            Endpoint::ArrivalsNow => "/arrivals/{stopId}",
            Endpoint::ArrivalsAt => "/arrivals/{stopId}/{dateTime}",
        }
    }

    /// Which of the three envelope kinds the endpoint answers with
    pub fn response_kind(self) -> EnvelopeKind {
        match self {
            Endpoint::StopSearch | Endpoint::StopList => EnvelopeKind::StopGroups,
            Endpoint::DeparturesNow | Endpoint::DeparturesAt => EnvelopeKind::Departures,
            Endpoint::ArrivalsNow | Endpoint::ArrivalsAt => EnvelopeKind::Arrivals,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path_template())
    }
}

/// Request parameters for one endpoint
///
/// Path placeholders and the API key are the only parameter kinds the catalog
/// currently uses; anything else a record exposes through
/// [RequestParams::query_params] goes on the query string.
pub trait RequestParams {
    /// Ordered `(placeholder, value)` pairs substituted into the path template
    fn path_params(&self) -> Vec<(&'static str, &str)>;

    /// Parameter fields not consumed as path placeholders, sent as query
    /// parameters
    fn query_params(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Per-call API key. When set it wins over the client-level default
    fn api_key(&self) -> Option<&str>;
}

mod sealed {
    pub trait Sealed {}
}

/// One entry of the endpoint catalog, binding an identifier to its parameter
/// record and response envelope
///
/// The trait is sealed: the six marker types in this module are its only
/// implementations, so a dispatch call can never pair an identifier with
/// another endpoint's parameters or response.
pub trait RealtimeEndpoint: sealed::Sealed {
    /// Identifier of this endpoint in the catalog
    const ID: Endpoint;
    /// Parameter record callers must supply
    type Params: RequestParams;
    /// Response shape the endpoint answers with
    type Response: DeserializeOwned + Into<ResponseEnvelope> + TryFrom<ResponseEnvelope>;
}

/// Parameters for [StopSearch]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopsByNameParams {
    /// The name to search for (minimum 3 characters)
    pub search_value: String,
    /// API key, overriding the client default
    pub key: Option<String>,
}

impl RequestParams for StopsByNameParams {
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("searchValue", &self.search_value)]
    }

    fn api_key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Parameters for [StopList]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllStopsParams {
    /// API key, overriding the client default
    pub key: Option<String>,
}

impl RequestParams for AllStopsParams {
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    fn api_key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Parameters for [DeparturesNow]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeparturesParams {
    /// The id of the stop (e.g. "740020101")
    pub stop_id: String,
    /// API key, overriding the client default
    pub key: Option<String>,
}

impl RequestParams for DeparturesParams {
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("stopId", &self.stop_id)]
    }

    fn api_key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Parameters for [DeparturesAt]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeparturesAtTimeParams {
    /// The id of the stop (e.g. "740020101")
    pub stop_id: String,
    /// The queried time, ISO 8601 (e.g. "2025-03-31T16:30")
    pub date_time: String,
    /// API key, overriding the client default
    pub key: Option<String>,
}

impl RequestParams for DeparturesAtTimeParams {
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("stopId", &self.stop_id), ("dateTime", &self.date_time)]
    }

    fn api_key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Parameters for [ArrivalsNow]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrivalsParams {
    /// The id of the stop (e.g. "740020101")
    pub stop_id: String,
    /// API key, overriding the client default
    pub key: Option<String>,
}

impl RequestParams for ArrivalsParams {
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("stopId", &self.stop_id)]
    }

    fn api_key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Parameters for [ArrivalsAt]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrivalsAtTimeParams {
    /// The id of the stop (e.g. "740020101")
    pub stop_id: String,
    /// The queried time, ISO 8601 (e.g. "2025-03-31T16:30")
    pub date_time: String,
    /// API key, overriding the client default
    pub key: Option<String>,
}

impl RequestParams for ArrivalsAtTimeParams {
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("stopId", &self.stop_id), ("dateTime", &self.date_time)]
    }

    fn api_key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// List stop groups matching a name
#[derive(Debug, Clone, Copy)]
pub struct StopSearch;

impl sealed::Sealed for StopSearch {}

impl RealtimeEndpoint for StopSearch {
    const ID: Endpoint = Endpoint::StopSearch;
    type Params = StopsByNameParams;
    type Response = NationalStopGroupResponse;
}

/// List all stop groups
#[derive(Debug, Clone, Copy)]
pub struct StopList;

impl sealed::Sealed for StopList {}

impl RealtimeEndpoint for StopList {
    const ID: Endpoint = Endpoint::StopList;
    type Params = AllStopsParams;
    type Response = NationalStopGroupResponse;
}

/// Departure board for a stop, at the current time
#[derive(Debug, Clone, Copy)]
pub struct DeparturesNow;

impl sealed::Sealed for DeparturesNow {}

impl RealtimeEndpoint for DeparturesNow {
    const ID: Endpoint = Endpoint::DeparturesNow;
    type Params = DeparturesParams;
    type Response = DeparturesResponse;
}

/// Departure board for a stop, at a specific time
#[derive(Debug, Clone, Copy)]
pub struct DeparturesAt;

impl sealed::Sealed for DeparturesAt {}

impl RealtimeEndpoint for DeparturesAt {
    const ID: Endpoint = Endpoint::DeparturesAt;
    type Params = DeparturesAtTimeParams;
    type Response = DeparturesResponse;
}

/// Arrival board for a stop, at the current time
#[derive(Debug, Clone, Copy)]
pub struct ArrivalsNow;

impl sealed::Sealed for ArrivalsNow {}

impl RealtimeEndpoint for ArrivalsNow {
    const ID: Endpoint = Endpoint::ArrivalsNow;
    type Params = ArrivalsParams;
    type Response = ArrivalsResponse;
}

/// Arrival board for a stop, at a specific time
#[derive(Debug, Clone, Copy)]
pub struct ArrivalsAt;

impl sealed::Sealed for ArrivalsAt {}

impl RealtimeEndpoint for ArrivalsAt {
    const ID: Endpoint = Endpoint::ArrivalsAt;
    type Params = ArrivalsAtTimeParams;
    type Response = ArrivalsResponse;
}
