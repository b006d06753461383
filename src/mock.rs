use crate::endpoints::{Endpoint, RealtimeEndpoint};
use crate::objects::ResponseEnvelope;
use crate::Error;
use std::collections::HashMap;
use std::sync::Mutex;

/// The mock dispatcher: answers requests from a programmable store instead of
/// the network
///
/// Tests address it with the same endpoint identifiers as the live
/// dispatcher, store one canned response per identifier, and get it back
/// typed as that endpoint's declared response shape. A request for an
/// identifier with nothing stored fails loudly with
/// [Error::NoMockResponse] rather than answering with empty data, so a
/// missing test setup cannot go unnoticed.
///
/// ```
/// # use trafiklab_realtime::{fixtures, DeparturesNow, DeparturesParams, MockClient};
/// let mock = MockClient::new();
/// mock.set_response::<DeparturesNow>(fixtures::departures_response());
/// let response = mock.request::<DeparturesNow>(&DeparturesParams::default())?;
/// assert_eq!(1, response.departures.len());
/// # Ok::<(), trafiklab_realtime::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<HashMap<Endpoint, ResponseEnvelope>>,
}

impl MockClient {
    /// An empty store: every endpoint starts unset
    pub fn new() -> Self {
        MockClient {
            responses: Mutex::new(HashMap::new()),
        }
    }

    /// Stores `response` for endpoint `E`, replacing any previously stored
    /// value for that identifier
    pub fn set_response<E: RealtimeEndpoint>(&self, response: E::Response) {
        let mut store = self.responses.lock().unwrap();
        store.insert(E::ID, response.into());
    }

    /// Answers with the stored response for endpoint `E`
    ///
    /// `params` is accepted for interface symmetry with
    /// [RealtimeClient::request](crate::RealtimeClient::request) and
    /// type-checked against the endpoint's parameter shape, but not
    /// interpreted: the store is response-programmed, not
    /// behavior-programmed. Completes from memory, never suspends
    pub fn request<E: RealtimeEndpoint>(&self, _params: &E::Params) -> Result<E::Response, Error> {
        let store = self.responses.lock().unwrap();
        let envelope = store
            .get(&E::ID)
            .cloned()
            .ok_or(Error::NoMockResponse(E::ID))?;
        // The typed setter keys the variant by the same endpoint, so a kind
        // mismatch here is unreachable; it is treated as unset regardless.
        E::Response::try_from(envelope).map_err(|_| Error::NoMockResponse(E::ID))
    }

    /// Returns every endpoint to the unset state
    pub fn clear(&self) {
        self.responses.lock().unwrap().clear();
    }
}
