//! The resource fetcher: a host request/load-event transport wrapped in a
//! [`Promise`] of parsed JSON.

use std::thread;

use reqwest::{blocking::Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::{basics::Promise, error::LookupError};

/// Lifecycle of a request, as reported alongside its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Unsent,
    Opened,
    HeadersReceived,
    Loading,
    Done,
}

/// What the transport hands to the load callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// `0` when no HTTP exchange took place.
    pub status: u16,
    pub ready_state: ReadyState,
    pub body: String,
}

pub type OnLoad = Box<dyn FnOnce(Response) + Send>;

/// A host capability able to issue a request and signal when it has loaded.
pub trait Transport {
    fn send(&self, method: Method, url: &str, on_load: OnLoad);
}

/// `GET` the resource at `url` and parse its body as JSON.
///
/// Every failure collapses into [`LookupError::NotFound`]: a status other than
/// 200, a request which never completed and a body which isn't JSON alike.
pub fn fetch_json<T: Transport + ?Sized>(transport: &T, url: &str) -> Promise<Value, LookupError> {
    Promise::new(|resolver| {
        debug!(%url, "sending request");
        transport.send(
            Method::GET,
            url,
            Box::new(move |response| {
                debug!(status = response.status, ready_state = ?response.ready_state, "request loaded");
                if response.status != 200 || response.ready_state != ReadyState::Done {
                    return resolver.reject(LookupError::NotFound);
                }
                match serde_json::from_str(&response.body) {
                    Ok(payload) => resolver.resolve(payload),
                    Err(error) => {
                        debug!(%error, "response body is not JSON");
                        resolver.reject(LookupError::NotFound);
                    }
                }
            }),
        );
    })
}

/// An HTTP transport which performs each request on its own thread and
/// invokes the load callback from there.
///
/// A request that fails below HTTP (refused connection, DNS, TLS...) still
/// loads, with status `0` and an empty body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, method: Method, url: &str, on_load: OnLoad) {
        let request = self.client.request(method, url);

        thread::spawn(move || {
            let response = request.send().and_then(|response| {
                let status = response.status().as_u16();
                response.text().map(|body| Response {
                    status,
                    ready_state: ReadyState::Done,
                    body,
                })
            });

            on_load(response.unwrap_or_else(|error| {
                debug!(%error, "request failed");
                Response {
                    status: 0,
                    ready_state: ReadyState::Done,
                    body: String::new(),
                }
            }));
        });
    }
}
