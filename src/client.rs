use crate::endpoints::{
    AllStopsParams, ArrivalsAt, ArrivalsAtTimeParams, ArrivalsNow, ArrivalsParams, DeparturesAt,
    DeparturesAtTimeParams, DeparturesNow, DeparturesParams, Endpoint, RealtimeEndpoint,
    RequestParams, StopList, StopSearch, StopsByNameParams,
};
use crate::objects::{ArrivalsResponse, DeparturesResponse, NationalStopGroupResponse};
use crate::Error;
use log::debug;
use std::time::Duration;
use url::Url;

/// Production base address of the realtime API
pub const DEFAULT_BASE_URL: &str = "https://realtime-api.trafiklab.se/v1";

/// Builds the concrete request URL for one dispatch: every placeholder of the
/// endpoint's path template is substituted from the parameter record, and the
/// remaining parameter fields plus the API key go on the query string. A
/// per-call key wins over the client default; at most one `key` parameter is
/// ever attached.
pub(crate) fn build_url(
    base_url: &str,
    endpoint: Endpoint,
    params: &impl RequestParams,
    default_key: Option<&str>,
) -> Result<Url, Error> {
    let mut path = endpoint.path_template().to_owned();
    for (name, value) in params.path_params() {
        path = path.replace(&format!("{{{}}}", name), &urlencoding::encode(value));
    }

    let mut url = Url::parse(&format!("{}{}", base_url, path))?;
    let pairs = params.query_params();
    let key = params.api_key().or(default_key);
    if !pairs.is_empty() || key.is_some() {
        let mut query = url.query_pairs_mut();
        for (name, value) in pairs {
            query.append_pair(name, value);
        }
        if let Some(key) = key {
            query.append_pair("key", key);
        }
    }
    Ok(url)
}

/// Configures and builds a [RealtimeClient]
///
/// ```no_run
/// # use trafiklab_realtime::RealtimeClient;
/// # use std::time::Duration;
/// let client = RealtimeClient::builder()
///     .api_key("my-key")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), trafiklab_realtime::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RealtimeClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl RealtimeClientBuilder {
    /// Base address to dispatch against (default: [DEFAULT_BASE_URL]).
    /// Returns Self and can be chained
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Default API key attached to every call whose parameter record does not
    /// carry its own. Returns Self and can be chained
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Request timeout, enforced by the transport. The dispatcher itself
    /// imposes no additional deadline. Returns Self and can be chained
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client
    pub fn build(self) -> Result<RealtimeClient, Error> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        Ok(RealtimeClient {
            http: http.build()?,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            api_key: self.api_key,
        })
    }
}

/// The live dispatcher: issues one HTTP request per call against the realtime
/// API and decodes the body into the endpoint's declared response shape
///
/// Each call is a single round trip. There are no retries, no caching and no
/// local recovery: transport failures, non-success statuses and undecodable
/// bodies all surface to the caller as an [Error].
#[derive(Debug, Clone)]
pub struct RealtimeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Default for RealtimeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeClient {
    /// A client against [DEFAULT_BASE_URL] with no default API key
    pub fn new() -> Self {
        RealtimeClient {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
        }
    }

    /// Starts configuring a client
    pub fn builder() -> RealtimeClientBuilder {
        RealtimeClientBuilder::default()
    }

    /// Dispatches one call to endpoint `E`
    ///
    /// The parameter record is fixed by the endpoint: supplying another
    /// endpoint's record does not compile. A missing API key is not rejected
    /// locally; the remote answers with status 401 and that is surfaced as
    /// [Error::Status]
    pub async fn request<E: RealtimeEndpoint>(&self, params: &E::Params) -> Result<E::Response, Error> {
        let url = build_url(&self.base_url, E::ID, params, self.api_key.as_deref())?;
        debug!("{} {}", E::ID.method(), url);

        let response = self.http.request(E::ID.method(), url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {}", E::ID, status);
            return Err(Error::Status {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("unknown status").to_owned(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List stop groups matching `search_value`
    pub async fn search_stops(&self, search_value: &str) -> Result<NationalStopGroupResponse, Error> {
        self.request::<StopSearch>(&StopsByNameParams {
            search_value: search_value.to_owned(),
            key: None,
        })
        .await
    }

    /// List all stop groups
    pub async fn all_stops(&self) -> Result<NationalStopGroupResponse, Error> {
        self.request::<StopList>(&AllStopsParams { key: None }).await
    }

    /// Departure board for `stop_id` at the current time
    pub async fn departures(&self, stop_id: &str) -> Result<DeparturesResponse, Error> {
        self.request::<DeparturesNow>(&DeparturesParams {
            stop_id: stop_id.to_owned(),
            key: None,
        })
        .await
    }

    /// Departure board for `stop_id` at `date_time` (ISO 8601)
    pub async fn departures_at(
        &self,
        stop_id: &str,
        date_time: &str,
    ) -> Result<DeparturesResponse, Error> {
        self.request::<DeparturesAt>(&DeparturesAtTimeParams {
            stop_id: stop_id.to_owned(),
            date_time: date_time.to_owned(),
            key: None,
        })
        .await
    }

    /// Arrival board for `stop_id` at the current time
    pub async fn arrivals(&self, stop_id: &str) -> Result<ArrivalsResponse, Error> {
        self.request::<ArrivalsNow>(&ArrivalsParams {
            stop_id: stop_id.to_owned(),
            key: None,
        })
        .await
    }

    /// Arrival board for `stop_id` at `date_time` (ISO 8601)
    pub async fn arrivals_at(
        &self,
        stop_id: &str,
        date_time: &str,
    ) -> Result<ArrivalsResponse, Error> {
        self.request::<ArrivalsAt>(&ArrivalsAtTimeParams {
            stop_id: stop_id.to_owned(),
            date_time: date_time.to_owned(),
            key: None,
        })
        .await
    }
}
