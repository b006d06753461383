pub use crate::enums::*;
use crate::serde_helpers::*;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Details about the query a response answers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QueryDetails {
    /// The time at which the query was made
    #[serde(
        rename = "queryTime",
        deserialize_with = "deserialize_datetime",
        serialize_with = "serialize_datetime"
    )]
    pub query_time: NaiveDateTime,
    /// The literal query parameter used for this request (a stop id, a
    /// search string…)
    pub query: String,
}

/// A platform within a stop (e.g. A, B)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Platform {
    /// Unique technical identifier of the platform
    pub id: String,
    /// Platform designation shown to travellers
    pub designation: String,
}

/// A service alert attached to a stop or a timetable entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Alert {
    /// Category of the alert
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Title or summary of the alert
    pub title: String,
    /// Detailed description of the alert
    pub text: String,
}

/// A physical stop
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stop {
    /// Unique technical identifier of the stop
    pub id: String,
    /// Name of the stop as shown to travellers
    pub name: String,
    /// Latitude of the stop
    pub lat: f64,
    /// Longitude of the stop
    pub lon: f64,
}

impl Stop {
    /// Whether the stop's coordinates lie within the valid WGS84 range
    /// (|lat| ≤ 90, |lon| ≤ 180)
    pub fn coordinates_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A stop enriched with realtime context (modes and alerts)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RealtimeStop {
    /// Unique technical identifier of the stop
    pub id: String,
    /// Name of the stop as shown to travellers
    pub name: String,
    /// Latitude of the stop
    pub lat: f64,
    /// Longitude of the stop
    pub lon: f64,
    /// Transport modes available at the stop
    pub transport_modes: Vec<TransportMode>,
    /// Alerts currently affecting the stop
    pub alerts: Vec<Alert>,
}

/// A named group of stops from the national stop register
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StopGroup {
    /// Unique technical identifier of the group
    pub id: String,
    /// Name of the group
    pub name: String,
    /// Whether the group is a meta stop or a rikshållplats
    pub group_type: StopGroupType,
    /// Transport modes available within the group
    pub transport_modes: Vec<TransportMode>,
    /// Stops belonging to the group
    pub stops: Vec<Stop>,
}

/// The agency responsible for a trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Agency {
    /// Unique technical identifier of the agency
    pub id: String,
    /// Name of the agency
    pub name: String,
    /// Operator running the trip on behalf of the agency
    pub operator: String,
}

/// One run of a vehicle along a route
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub trip_id: String,
    /// Service day the trip belongs to
    #[serde(
        deserialize_with = "deserialize_date",
        serialize_with = "serialize_date"
    )]
    pub start_date: NaiveDate,
    /// Technical number associated with the trip
    pub technical_number: u32,
}

/// A line as announced to travellers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Route {
    /// Optional route name. Routes without a service name transmit null,
    /// which is a valid value and not an error
    pub name: Option<String>,
    /// Route designation (line number or service)
    pub designation: String,
    /// Numeric code for the mode of transport
    pub transport_mode_code: i32,
    /// Mode of transport
    pub transport_mode: TransportMode,
    /// Direction of the route as shown on the vehicle
    pub direction: String,
    /// Origin stop of the route
    pub origin: Stop,
    /// Destination stop of the route
    pub destination: Stop,
}

/// One departure or arrival with its full context
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimetableEntry {
    /// Scheduled departure or arrival time
    #[serde(
        deserialize_with = "deserialize_datetime",
        serialize_with = "serialize_datetime"
    )]
    pub scheduled: NaiveDateTime,
    /// Realtime departure or arrival time, if available
    #[serde(
        deserialize_with = "deserialize_datetime",
        serialize_with = "serialize_datetime"
    )]
    pub realtime: NaiveDateTime,
    /// Delay in seconds. A negative value indicates an early departure or
    /// arrival
    pub delay: i32,
    /// Whether the trip was canceled
    pub canceled: bool,
    /// Route details
    pub route: Route,
    /// Trip details
    pub trip: Trip,
    /// Agency details
    pub agency: Agency,
    /// Stop the entry belongs to
    pub stop: Stop,
    /// Scheduled platform
    pub scheduled_platform: Platform,
    /// Realtime platform
    pub realtime_platform: Platform,
    /// Alerts related to this entry
    pub alerts: Vec<Alert>,
    /// Whether the times are based on realtime information
    pub is_realtime: bool,
}

/// Departure board response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeparturesResponse {
    /// Timestamp of the response. May be in the past for cached responses
    #[serde(
        deserialize_with = "deserialize_datetime",
        serialize_with = "serialize_datetime"
    )]
    pub timestamp: NaiveDateTime,
    /// Details about the answered query
    #[serde(rename = "queryDetails")]
    pub query_details: QueryDetails,
    /// Stops covered by the board
    pub stops: Vec<RealtimeStop>,
    /// The departures, ordered as transmitted
    pub departures: Vec<TimetableEntry>,
}

/// Arrival board response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArrivalsResponse {
    /// Timestamp of the response. May be in the past for cached responses
    #[serde(
        deserialize_with = "deserialize_datetime",
        serialize_with = "serialize_datetime"
    )]
    pub timestamp: NaiveDateTime,
    /// Details about the answered query
    #[serde(rename = "queryDetails")]
    pub query_details: QueryDetails,
    /// Stops covered by the board
    pub stops: Vec<RealtimeStop>,
    /// The arrivals, ordered as transmitted
    pub arrivals: Vec<TimetableEntry>,
}

/// Stop lookup response over the national stop register
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NationalStopGroupResponse {
    /// Timestamp of the response. May be in the past for cached responses
    #[serde(
        deserialize_with = "deserialize_datetime",
        serialize_with = "serialize_datetime"
    )]
    pub timestamp: NaiveDateTime,
    /// Details about the answered query
    #[serde(rename = "queryDetails")]
    pub query_details: QueryDetails,
    /// The matching stop groups
    #[serde(rename = "stopGroups")]
    pub stop_groups: Vec<StopGroup>,
}

/// The three envelope kinds a response can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    /// [DeparturesResponse]
    Departures,
    /// [ArrivalsResponse]
    Arrivals,
    /// [NationalStopGroupResponse]
    StopGroups,
}

/// A response of any of the three envelope kinds
///
/// This is the value the mock store holds: the endpoint identifier picks the
/// variant back out at the call site, so a stored response is restored to its
/// declared shape without a cast.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    /// A departure board
    Departures(DeparturesResponse),
    /// An arrival board
    Arrivals(ArrivalsResponse),
    /// A stop lookup result
    StopGroups(NationalStopGroupResponse),
}

impl ResponseEnvelope {
    /// Which of the three envelope kinds this value is
    pub fn kind(&self) -> EnvelopeKind {
        match self {
            ResponseEnvelope::Departures(_) => EnvelopeKind::Departures,
            ResponseEnvelope::Arrivals(_) => EnvelopeKind::Arrivals,
            ResponseEnvelope::StopGroups(_) => EnvelopeKind::StopGroups,
        }
    }
}

impl From<DeparturesResponse> for ResponseEnvelope {
    fn from(response: DeparturesResponse) -> Self {
        ResponseEnvelope::Departures(response)
    }
}

impl From<ArrivalsResponse> for ResponseEnvelope {
    fn from(response: ArrivalsResponse) -> Self {
        ResponseEnvelope::Arrivals(response)
    }
}

impl From<NationalStopGroupResponse> for ResponseEnvelope {
    fn from(response: NationalStopGroupResponse) -> Self {
        ResponseEnvelope::StopGroups(response)
    }
}

impl TryFrom<ResponseEnvelope> for DeparturesResponse {
    type Error = ResponseEnvelope;

    fn try_from(envelope: ResponseEnvelope) -> Result<Self, Self::Error> {
        match envelope {
            ResponseEnvelope::Departures(response) => Ok(response),
            other => Err(other),
        }
    }
}

impl TryFrom<ResponseEnvelope> for ArrivalsResponse {
    type Error = ResponseEnvelope;

    fn try_from(envelope: ResponseEnvelope) -> Result<Self, Self::Error> {
        match envelope {
            ResponseEnvelope::Arrivals(response) => Ok(response),
            other => Err(other),
        }
    }
}

impl TryFrom<ResponseEnvelope> for NationalStopGroupResponse {
    type Error = ResponseEnvelope;

    fn try_from(envelope: ResponseEnvelope) -> Result<Self, Self::Error> {
        match envelope {
            ResponseEnvelope::StopGroups(response) => Ok(response),
            other => Err(other),
        }
    }
}
