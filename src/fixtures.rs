//! Builders for well-formed sample values of every record and envelope
//!
//! Each function returns a complete record with domain-realistic defaults;
//! callers override individual fields with struct-update syntax instead of
//! hand-authoring the full nested value:
//!
//! ```
//! # use trafiklab_realtime::{fixtures, Stop};
//! let stop = Stop {
//!     name: "T-Centralen".to_owned(),
//!     ..fixtures::stop()
//! };
//! ```
//!
//! Builders compose: [route] fills its origin and destination through [stop],
//! [timetable_entry] fills its context through the record builders, and the
//! envelope builders carry a single built entry in their payload lists.
//! Nested records are replaced whole, not merged. No builder validates —
//! out-of-range coordinates or empty strings are constructible on purpose,
//! that check belongs to the consumer.

use crate::objects::*;
use crate::serde_helpers::{parse_date, parse_datetime};
use chrono::{NaiveDate, NaiveDateTime};

fn datetime(s: &str) -> NaiveDateTime {
    parse_datetime(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

/// Query details for a departure or arrival board lookup
pub fn query_details() -> QueryDetails {
    QueryDetails {
        query_time: datetime("2025-03-31T16:30:00"),
        query: "740020101".to_owned(),
    }
}

/// A stop in central Stockholm
pub fn stop() -> Stop {
    Stop {
        id: "12799".to_owned(),
        name: "Slussen".to_owned(),
        lat: 59.319522,
        lon: 18.072027,
    }
}

/// [stop] with realtime context
pub fn realtime_stop() -> RealtimeStop {
    RealtimeStop {
        id: "12799".to_owned(),
        name: "Slussen".to_owned(),
        lat: 59.319522,
        lon: 18.072027,
        transport_modes: vec![TransportMode::Bus, TransportMode::Metro],
        alerts: Vec::new(),
    }
}

/// A maintenance alert
pub fn alert() -> Alert {
    Alert {
        alert_type: AlertType::Maintenance,
        title: "Hållplats FMV och Malmen Vakten läggs ner från 20 mars".to_owned(),
        text: "Detta gäller 20 mars - tillsvidare: buss linje 232 trafikerar inte hållplats FMV ..."
            .to_owned(),
    }
}

/// A platform designation
pub fn platform() -> Platform {
    Platform {
        id: "9022050012799016".to_owned(),
        designation: "H".to_owned(),
    }
}

/// The Stockholm public transport agency
pub fn agency() -> Agency {
    Agency {
        id: "505000000000000001".to_owned(),
        name: "AB Storstockholms Lokaltrafik".to_owned(),
        operator: "Keolis".to_owned(),
    }
}

/// One trip on the sample service day
pub fn trip() -> Trip {
    Trip {
        trip_id: "14010000664236480".to_owned(),
        start_date: date("2025-03-31"),
        technical_number: 1810,
    }
}

/// Bus line 3, unnamed service
pub fn route() -> Route {
    Route {
        name: None,
        designation: "3".to_owned(),
        transport_mode_code: 700,
        transport_mode: TransportMode::Bus,
        direction: "Karolinska sjukhuset".to_owned(),
        origin: Stop {
            id: "1".to_owned(),
            name: "Origin".to_owned(),
            ..stop()
        },
        destination: Stop {
            id: "2".to_owned(),
            name: "Destination".to_owned(),
            ..stop()
        },
    }
}

/// An entry running 46 seconds early
pub fn timetable_entry() -> TimetableEntry {
    TimetableEntry {
        scheduled: datetime("2025-03-31T16:30:00"),
        realtime: datetime("2025-03-31T16:29:14"),
        delay: -46,
        canceled: false,
        route: route(),
        trip: trip(),
        agency: agency(),
        stop: stop(),
        scheduled_platform: platform(),
        realtime_platform: platform(),
        alerts: Vec::new(),
        is_realtime: true,
    }
}

/// A departure board with one stop and one departure
pub fn departures_response() -> DeparturesResponse {
    DeparturesResponse {
        timestamp: datetime("2025-03-31T16:30:00"),
        query_details: query_details(),
        stops: vec![realtime_stop()],
        departures: vec![timetable_entry()],
    }
}

/// An arrival board with one stop and one arrival
pub fn arrivals_response() -> ArrivalsResponse {
    ArrivalsResponse {
        timestamp: datetime("2025-03-31T16:30:00"),
        query_details: query_details(),
        stops: vec![realtime_stop()],
        arrivals: vec![timetable_entry()],
    }
}

/// The Stockholm meta stop group
pub fn stop_group() -> StopGroup {
    StopGroup {
        id: "740098000".to_owned(),
        name: "Stockholm".to_owned(),
        group_type: StopGroupType::MetaStop,
        transport_modes: vec![TransportMode::Bus, TransportMode::Metro],
        stops: vec![stop()],
    }
}

/// A stop lookup result holding one group
pub fn national_stop_group_response() -> NationalStopGroupResponse {
    NationalStopGroupResponse {
        timestamp: datetime("2025-03-31T16:30:00"),
        query_details: QueryDetails {
            query_time: datetime("2025-03-31T16:30:00"),
            query: "Stockholm".to_owned(),
        },
        stop_groups: vec![stop_group()],
    }
}
