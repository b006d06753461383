/*! Typed client for the [Trafiklab realtime APIs](https://www.trafiklab.se/api/) — departure boards, arrival boards and stop lookup.

This crate brings [serde](https://serde.rs) structures of the realtime data model, a closed
catalog of the supported endpoints, and two dispatchers over that catalog.

To get started, see [RealtimeClient].

## The endpoint catalog

Every supported remote operation is one [Endpoint] identifier. The identifier carries the
HTTP method, the path template, the parameter record and the response envelope — all four
projections derive from the same catalog entry, so a request path can never drift apart
from the types used to decode its response, and parameters written for one endpoint do not
type-check against another.

## Design decisions

### Two dispatchers

[RealtimeClient] performs the single network round trip: placeholder substitution into the
path template, API key on the query string, status check, JSON decode. [MockClient] answers
from an identifier-keyed store programmed by tests; it shares the catalog's typing and
fails loudly when a test forgot to program it. The [fixtures] module builds well-formed
sample values to feed either of them.

### Use of Enum

String-coded values (transport modes, alert categories, stop group kinds) are Rust enums
such as [TransportMode], not bare strings. Values outside the documented sets are kept in
an `Unknown` variant instead of failing the response.

### Errors

Everything surfaces as one [Error]: transport failures, non-success statuses (a missing
API key is observed as status 401), undecodable bodies, unprogrammed mock endpoints. The
crate never retries, falls back or degrades — resilience policy belongs to the caller.

*/
#![warn(missing_docs)]

mod client;
mod endpoints;
mod enums;
pub mod error;
pub mod fixtures;
mod mock;
pub(crate) mod objects;
mod serde_helpers;

#[cfg(test)]
mod tests;

pub use client::{RealtimeClient, RealtimeClientBuilder, DEFAULT_BASE_URL};
pub use endpoints::{
    AllStopsParams, ArrivalsAt, ArrivalsAtTimeParams, ArrivalsNow, ArrivalsParams,
    DeparturesAt, DeparturesAtTimeParams, DeparturesNow, DeparturesParams, Endpoint,
    RealtimeEndpoint, RequestParams, StopList, StopSearch, StopsByNameParams,
};
pub use error::Error;
pub use mock::MockClient;
pub use objects::*;
