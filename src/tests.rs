use crate::client::build_url;
use crate::fixtures;
use crate::serde_helpers::parse_datetime;
use crate::*;
use std::collections::HashMap;
use warp::http::StatusCode;
use warp::Filter;

fn placeholders(template: &str) -> Vec<&str> {
    template
        .split('{')
        .skip(1)
        .filter_map(|part| part.split('}').next())
        .collect()
}

fn names(pairs: &[(&'static str, &str)]) -> Vec<&'static str> {
    pairs.iter().map(|(name, _)| *name).collect()
}

#[test]
fn catalog_is_closed_and_total() {
    assert_eq!(6, Endpoint::ALL.len());
    for endpoint in Endpoint::ALL {
        assert_eq!(reqwest::Method::GET, endpoint.method());
        assert!(endpoint.path_template().starts_with('/'));
        assert_eq!(
            format!("{} {}", endpoint.method(), endpoint.path_template()),
            endpoint.to_string()
        );
    }
    assert_eq!(EnvelopeKind::StopGroups, Endpoint::StopSearch.response_kind());
    assert_eq!(EnvelopeKind::StopGroups, Endpoint::StopList.response_kind());
    assert_eq!(EnvelopeKind::Departures, Endpoint::DeparturesNow.response_kind());
    assert_eq!(EnvelopeKind::Departures, Endpoint::DeparturesAt.response_kind());
    assert_eq!(EnvelopeKind::Arrivals, Endpoint::ArrivalsNow.response_kind());
    assert_eq!(EnvelopeKind::Arrivals, Endpoint::ArrivalsAt.response_kind());
}

#[test]
fn params_shapes_match_path_templates() {
    let search = StopsByNameParams {
        search_value: "Stockholm".to_owned(),
        key: None,
    };
    assert_eq!(
        placeholders(Endpoint::StopSearch.path_template()),
        names(&search.path_params())
    );

    let list = AllStopsParams { key: None };
    assert_eq!(
        placeholders(Endpoint::StopList.path_template()),
        names(&list.path_params())
    );

    let departures = DeparturesParams {
        stop_id: "740020101".to_owned(),
        key: None,
    };
    assert_eq!(
        placeholders(Endpoint::DeparturesNow.path_template()),
        names(&departures.path_params())
    );

    let departures_at = DeparturesAtTimeParams {
        stop_id: "740020101".to_owned(),
        date_time: "2025-03-31T16:30".to_owned(),
        key: None,
    };
    assert_eq!(
        placeholders(Endpoint::DeparturesAt.path_template()),
        names(&departures_at.path_params())
    );

    let arrivals = ArrivalsParams {
        stop_id: "740020101".to_owned(),
        key: None,
    };
    assert_eq!(
        placeholders(Endpoint::ArrivalsNow.path_template()),
        names(&arrivals.path_params())
    );

    let arrivals_at = ArrivalsAtTimeParams {
        stop_id: "740020101".to_owned(),
        date_time: "2025-03-31T16:30".to_owned(),
        key: None,
    };
    assert_eq!(
        placeholders(Endpoint::ArrivalsAt.path_template()),
        names(&arrivals_at.path_params())
    );
}

#[test]
fn every_params_record_carries_a_key() {
    let key = Some("secret".to_owned());
    assert_eq!(
        Some("secret"),
        StopsByNameParams {
            search_value: "Slussen".to_owned(),
            key: key.clone(),
        }
        .api_key()
    );
    assert_eq!(Some("secret"), AllStopsParams { key: key.clone() }.api_key());
    assert_eq!(
        Some("secret"),
        DeparturesParams {
            stop_id: "1".to_owned(),
            key: key.clone(),
        }
        .api_key()
    );
    assert_eq!(
        Some("secret"),
        DeparturesAtTimeParams {
            stop_id: "1".to_owned(),
            date_time: "2025-03-31T16:30".to_owned(),
            key: key.clone(),
        }
        .api_key()
    );
    assert_eq!(
        Some("secret"),
        ArrivalsParams {
            stop_id: "1".to_owned(),
            key: key.clone(),
        }
        .api_key()
    );
    assert_eq!(
        Some("secret"),
        ArrivalsAtTimeParams {
            stop_id: "1".to_owned(),
            date_time: "2025-03-31T16:30".to_owned(),
            key,
        }
        .api_key()
    );
}

#[test]
fn build_url_substitutes_every_placeholder() {
    let params = DeparturesAtTimeParams {
        stop_id: "740020101".to_owned(),
        date_time: "2025-03-31T16:30".to_owned(),
        key: Some("secret".to_owned()),
    };
    let url = build_url(
        "https://realtime-api.trafiklab.se/v1",
        Endpoint::DeparturesAt,
        &params,
        None,
    )
    .unwrap();

    assert_eq!("/v1/departures/740020101/2025-03-31T16%3A30", url.path());
    let query: Vec<_> = url.query_pairs().collect();
    assert_eq!(1, query.len());
    assert_eq!("key", query[0].0);
    assert_eq!("secret", query[0].1);
}

#[test]
fn per_call_key_wins_over_client_default() {
    let params = DeparturesParams {
        stop_id: "740020101".to_owned(),
        key: Some("per-call".to_owned()),
    };
    let url = build_url(
        DEFAULT_BASE_URL,
        Endpoint::DeparturesNow,
        &params,
        Some("default"),
    )
    .unwrap();
    let query: Vec<_> = url.query_pairs().collect();
    assert_eq!(1, query.len());
    assert_eq!("per-call", query[0].1);

    let params = DeparturesParams {
        stop_id: "740020101".to_owned(),
        key: None,
    };
    let url = build_url(
        DEFAULT_BASE_URL,
        Endpoint::DeparturesNow,
        &params,
        Some("default"),
    )
    .unwrap();
    let query: Vec<_> = url.query_pairs().collect();
    assert_eq!(1, query.len());
    assert_eq!("default", query[0].1);
}

#[test]
fn build_url_without_any_key_sends_no_query() {
    let params = DeparturesParams {
        stop_id: "740020101".to_owned(),
        key: None,
    };
    let url = build_url(DEFAULT_BASE_URL, Endpoint::DeparturesNow, &params, None).unwrap();
    assert_eq!(None, url.query());
}

#[test]
fn mock_round_trips_a_stored_response() {
    let mock = MockClient::new();
    let response = fixtures::departures_response();
    mock.set_response::<DeparturesNow>(response.clone());

    let returned = mock
        .request::<DeparturesNow>(&DeparturesParams::default())
        .unwrap();
    assert_eq!(response, returned);
}

#[test]
fn mock_without_response_names_the_endpoint() {
    let mock = MockClient::new();
    let err = mock
        .request::<ArrivalsNow>(&ArrivalsParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::NoMockResponse(Endpoint::ArrivalsNow)));
    assert!(err.to_string().contains("GET /arrivals/{stopId}"));
}

#[test]
fn mock_clear_returns_endpoints_to_unset() {
    let mock = MockClient::new();
    mock.set_response::<StopSearch>(fixtures::national_stop_group_response());
    assert!(mock
        .request::<StopSearch>(&StopsByNameParams::default())
        .is_ok());

    mock.clear();
    let err = mock
        .request::<StopSearch>(&StopsByNameParams::default())
        .unwrap_err();
    assert!(err.to_string().contains("GET /stops/name/{searchValue}"));
}

#[test]
fn mock_last_write_wins() {
    let mock = MockClient::new();
    mock.set_response::<ArrivalsNow>(fixtures::arrivals_response());
    mock.set_response::<ArrivalsNow>(ArrivalsResponse {
        arrivals: Vec::new(),
        ..fixtures::arrivals_response()
    });

    let returned = mock
        .request::<ArrivalsNow>(&ArrivalsParams::default())
        .unwrap();
    assert!(returned.arrivals.is_empty());
}

#[test]
fn mock_keeps_one_entry_per_endpoint() {
    let mock = MockClient::new();
    mock.set_response::<DeparturesNow>(fixtures::departures_response());

    // DeparturesAt shares the envelope kind but is a distinct identifier.
    let err = mock
        .request::<DeparturesAt>(&DeparturesAtTimeParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::NoMockResponse(Endpoint::DeparturesAt)));
}

#[test]
fn envelope_kind_follows_the_catalog() {
    assert_eq!(
        Endpoint::DeparturesNow.response_kind(),
        ResponseEnvelope::from(fixtures::departures_response()).kind()
    );
    assert_eq!(
        Endpoint::ArrivalsNow.response_kind(),
        ResponseEnvelope::from(fixtures::arrivals_response()).kind()
    );
    assert_eq!(
        Endpoint::StopList.response_kind(),
        ResponseEnvelope::from(fixtures::national_stop_group_response()).kind()
    );
}

#[test]
fn route_name_stays_null_through_an_envelope() {
    let response = fixtures::departures_response();
    assert_eq!(None, response.departures[0].route.name);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"name\":null"));

    let parsed: DeparturesResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(None, parsed.departures[0].route.name);
    assert_eq!(response, parsed);
}

#[test]
fn coordinates_validity_bounds() {
    let valid = Stop {
        lat: 90.0,
        lon: 180.0,
        ..fixtures::stop()
    };
    assert!(valid.coordinates_valid());

    let south_west = Stop {
        lat: -90.0,
        lon: -180.0,
        ..fixtures::stop()
    };
    assert!(south_west.coordinates_valid());

    let bad_lat = Stop {
        lat: 91.0,
        ..fixtures::stop()
    };
    assert!(!bad_lat.coordinates_valid());

    let bad_lon = Stop {
        lon: 181.0,
        ..fixtures::stop()
    };
    assert!(!bad_lon.coordinates_valid());
}

#[test]
fn fixtures_build_valid_records() {
    assert!(fixtures::stop().coordinates_valid());
    for stop in &fixtures::stop_group().stops {
        assert!(stop.coordinates_valid());
    }
    let entry = fixtures::timetable_entry();
    assert!(entry.delay < 0);
    assert!(!entry.canceled);
    assert!(entry.is_realtime);
    assert_eq!(TransportMode::Bus, entry.route.transport_mode);
}

#[test]
fn wire_shape_deserializes() {
    let raw = serde_json::json!({
        "timestamp": "2025-03-31T16:30:00",
        "queryDetails": {
            "queryTime": "2025-03-31T16:30:00Z",
            "query": "740020101"
        },
        "stops": [{
            "id": "12799",
            "name": "Slussen",
            "lat": 59.319522,
            "lon": 18.072027,
            "transport_modes": ["BUS", "HYPERLOOP"],
            "alerts": [{
                "type": "DISRUPTION",
                "title": "Signalfel",
                "text": "Förseningar förekommer"
            }]
        }],
        "departures": [{
            "scheduled": "2025-03-31T16:30:00",
            "realtime": "2025-03-31T16:29:14",
            "delay": -46,
            "canceled": false,
            "route": {
                "name": null,
                "designation": "3",
                "transport_mode_code": 700,
                "transport_mode": "BUS",
                "direction": "Karolinska sjukhuset",
                "origin": {"id": "1", "name": "Origin", "lat": 59.3, "lon": 18.0},
                "destination": {"id": "2", "name": "Destination", "lat": 59.4, "lon": 18.1}
            },
            "trip": {
                "trip_id": "14010000664236480",
                "start_date": "2025-03-31",
                "technical_number": 1810
            },
            "agency": {
                "id": "505000000000000001",
                "name": "AB Storstockholms Lokaltrafik",
                "operator": "Keolis"
            },
            "stop": {"id": "12799", "name": "Slussen", "lat": 59.319522, "lon": 18.072027},
            "scheduled_platform": {"id": "9022050012799016", "designation": "H"},
            "realtime_platform": {"id": "9022050012799016", "designation": "H"},
            "alerts": [],
            "is_realtime": true
        }]
    });

    let parsed: DeparturesResponse = serde_json::from_value(raw).unwrap();
    assert_eq!("740020101", parsed.query_details.query);
    assert_eq!(parsed.timestamp, parsed.query_details.query_time);
    assert_eq!(
        vec![
            TransportMode::Bus,
            TransportMode::Unknown("HYPERLOOP".to_owned())
        ],
        parsed.stops[0].transport_modes
    );
    assert_eq!(AlertType::Disruption, parsed.stops[0].alerts[0].alert_type);
    assert_eq!(None, parsed.departures[0].route.name);
    assert_eq!(-46, parsed.departures[0].delay);
}

#[test]
fn undecodable_body_is_a_hard_failure() {
    // A body missing a mandatory field never yields a partial record.
    let raw = serde_json::json!({
        "timestamp": "2025-03-31T16:30:00",
        "queryDetails": {"queryTime": "2025-03-31T16:30:00", "query": "740020101"},
        "stops": []
    });
    assert!(serde_json::from_value::<DeparturesResponse>(raw).is_err());

    assert!(serde_json::from_str::<NationalStopGroupResponse>("not json").is_err());
}

#[test]
fn envelopes_survive_a_serde_round_trip() {
    let departures = fixtures::departures_response();
    let json = serde_json::to_string(&departures).unwrap();
    assert_eq!(departures, serde_json::from_str(&json).unwrap());

    let arrivals = fixtures::arrivals_response();
    let json = serde_json::to_string(&arrivals).unwrap();
    assert_eq!(arrivals, serde_json::from_str(&json).unwrap());

    let groups = fixtures::national_stop_group_response();
    let json = serde_json::to_string(&groups).unwrap();
    assert_eq!(groups, serde_json::from_str(&json).unwrap());
}

#[test]
fn thousand_entries_keep_their_integrity() {
    let entries: Vec<TimetableEntry> = (0..1000)
        .map(|i| TimetableEntry {
            delay: i - 500,
            ..fixtures::timetable_entry()
        })
        .collect();
    let response = DeparturesResponse {
        departures: entries,
        ..fixtures::departures_response()
    };
    assert_eq!(1000, response.departures.len());

    let json = serde_json::to_string(&response).unwrap();
    let parsed: DeparturesResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(1000, parsed.departures.len());
    for (i, entry) in parsed.departures.iter().enumerate() {
        assert_eq!(i as i32 - 500, entry.delay);
        assert_eq!(entry.scheduled, parse_datetime("2025-03-31T16:30:00").unwrap());
        assert_eq!(entry.realtime, parse_datetime("2025-03-31T16:29:14").unwrap());
    }
}

// ---------------------------------------------------------------------------
// Live dispatcher tests, against an in-process server that mirrors the remote
// API: every route requires a `key` query parameter and echoes the query back
// into the response's query details.
// ---------------------------------------------------------------------------

fn unauthorized() -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({"error": "API key required"})),
        StatusCode::UNAUTHORIZED,
    )
}

fn ok_json<T: serde::Serialize>(value: &T) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(value), StatusCode::OK)
}

fn mock_api() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let query = warp::query::<HashMap<String, String>>();

    let stop_search = warp::path!("stops" / "name" / String).and(query).map(
        |search_value: String, q: HashMap<String, String>| {
            if !q.contains_key("key") {
                return unauthorized();
            }
            let mut response = fixtures::national_stop_group_response();
            response.query_details.query = search_value.clone();
            response.stop_groups = vec![StopGroup {
                name: search_value,
                ..fixtures::stop_group()
            }];
            ok_json(&response)
        },
    );

    let stop_list =
        warp::path!("stops" / "list")
            .and(query)
            .map(|q: HashMap<String, String>| {
                if !q.contains_key("key") {
                    return unauthorized();
                }
                let response = NationalStopGroupResponse {
                    stop_groups: ["Stockholm", "Göteborg", "Malmö"]
                        .map(|name| StopGroup {
                            name: name.to_owned(),
                            ..fixtures::stop_group()
                        })
                        .to_vec(),
                    ..fixtures::national_stop_group_response()
                };
                ok_json(&response)
            });

    let departures_now = warp::path!("departures" / String).and(query).map(
        |stop_id: String, q: HashMap<String, String>| {
            if !q.contains_key("key") {
                return unauthorized();
            }
            let mut response = fixtures::departures_response();
            response.query_details.query = stop_id;
            ok_json(&response)
        },
    );

    let departures_at = warp::path!("departures" / String / String).and(query).map(
        |stop_id: String, date_time: String, q: HashMap<String, String>| {
            if !q.contains_key("key") {
                return unauthorized();
            }
            // A real HTTP server percent-decodes path segments; warp leaves
            // them encoded, so mirror the remote API by decoding here.
            let date_time = urlencoding::decode(&date_time).unwrap().into_owned();
            let mut response = fixtures::departures_response();
            response.query_details = QueryDetails {
                query_time: parse_datetime(&date_time).unwrap(),
                query: stop_id,
            };
            ok_json(&response)
        },
    );

    let arrivals_now = warp::path!("arrivals" / String).and(query).map(
        |stop_id: String, q: HashMap<String, String>| {
            if !q.contains_key("key") {
                return unauthorized();
            }
            let mut response = fixtures::arrivals_response();
            response.query_details.query = stop_id;
            ok_json(&response)
        },
    );

    let arrivals_at = warp::path!("arrivals" / String / String).and(query).map(
        |stop_id: String, date_time: String, q: HashMap<String, String>| {
            if !q.contains_key("key") {
                return unauthorized();
            }
            // A real HTTP server percent-decodes path segments; warp leaves
            // them encoded, so mirror the remote API by decoding here.
            let date_time = urlencoding::decode(&date_time).unwrap().into_owned();
            let mut response = fixtures::arrivals_response();
            response.query_details = QueryDetails {
                query_time: parse_datetime(&date_time).unwrap(),
                query: stop_id,
            };
            ok_json(&response)
        },
    );

    stop_search
        .or(stop_list)
        .or(departures_at)
        .or(departures_now)
        .or(arrivals_at)
        .or(arrivals_now)
}

async fn spawn_api() -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    let (addr, server) = warp::serve(mock_api()).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{}", addr)
}

fn test_client(base_url: String) -> RealtimeClient {
    RealtimeClient::builder()
        .base_url(base_url)
        .api_key("test-key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn missing_key_reports_status_401() {
    let base_url = spawn_api().await;
    let client = RealtimeClient::builder()
        .base_url(base_url)
        .build()
        .unwrap();

    let err = client.departures("740020101").await.unwrap_err();
    match &err {
        Error::Status { status, .. } => assert_eq!(401, *status),
        other => panic!("expected a status error, got {:?}", other),
    }
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn stop_search_echoes_the_query() {
    let base_url = spawn_api().await;
    let client = test_client(base_url);

    let response = client.search_stops("Stockholm").await.unwrap();
    assert_eq!("Stockholm", response.query_details.query);
    assert_eq!("Stockholm", response.stop_groups[0].name);
}

#[tokio::test]
async fn stop_list_returns_every_group() {
    let base_url = spawn_api().await;
    let client = test_client(base_url);

    let response = client.all_stops().await.unwrap();
    let names: Vec<&str> = response.stop_groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(vec!["Stockholm", "Göteborg", "Malmö"], names);
}

#[tokio::test]
async fn departures_at_substitutes_both_placeholders() {
    let base_url = spawn_api().await;
    let client = test_client(base_url);

    let response = client
        .departures_at("740020101", "2025-03-31T16:30:00")
        .await
        .unwrap();
    assert_eq!("740020101", response.query_details.query);
    assert_eq!(
        parse_datetime("2025-03-31T16:30:00").unwrap(),
        response.query_details.query_time
    );
}

#[tokio::test]
async fn arrivals_board_round_trips() {
    let base_url = spawn_api().await;
    let client = test_client(base_url);

    let response = client.arrivals("740020101").await.unwrap();
    assert_eq!("740020101", response.query_details.query);
    assert_eq!(1, response.arrivals.len());

    let at = client
        .arrivals_at("740020101", "2025-03-31T16:30:00")
        .await
        .unwrap();
    assert_eq!(
        parse_datetime("2025-03-31T16:30:00").unwrap(),
        at.query_details.query_time
    );
}

#[tokio::test]
async fn generic_request_accepts_a_per_call_key() {
    let base_url = spawn_api().await;
    // No client-level key: the per-call record carries it instead.
    let client = RealtimeClient::builder()
        .base_url(base_url)
        .build()
        .unwrap();

    let response = client
        .request::<StopSearch>(&StopsByNameParams {
            search_value: "Slussen".to_owned(),
            key: Some("per-call-key".to_owned()),
        })
        .await
        .unwrap();
    assert_eq!("Slussen", response.query_details.query);
}

#[tokio::test]
async fn a_body_that_is_not_the_declared_shape_fails() {
    let _ = env_logger::builder().is_test(true).try_init();
    let garbage = warp::any().map(|| "not json");
    let (addr, server) = warp::serve(garbage).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = RealtimeClient::builder()
        .base_url(format!("http://{}", addr))
        .api_key("test-key")
        .build()
        .unwrap();

    let err = client.departures("740020101").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}
