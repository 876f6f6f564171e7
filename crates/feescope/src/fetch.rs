//! Background fetch worker for the remote simulation service.
//!
//! The worker owns a thread running a current-thread tokio runtime. Requests
//! and responses cross over channels; the UI never blocks on the network. At
//! most one request is in flight: a newer request replaces the pending
//! future, and dropping that future aborts its connection, so superseded
//! fetches stop consuming the wire instead of merely being ignored. The
//! ticket travels with the response so the session can discard anything
//! stale that slipped through.

use std::future::Future;
use std::pin::Pin;
use std::sync::mpsc as std_mpsc;
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;

use feescope_core::{SimulationQuery, Ticket, TransportError};

#[derive(Debug)]
pub enum FetchRequest {
    Fetch {
        ticket: Ticket,
        query: SimulationQuery,
    },
    /// Graceful shutdown.
    Shutdown,
}

#[derive(Debug)]
pub struct FetchResponse {
    pub ticket: Ticket,
    pub outcome: Result<serde_json::Value, TransportError>,
}

type InFlight = Pin<Box<dyn Future<Output = FetchResponse>>>;

/// Handle to the fetch thread. Dropping it cancels any in-flight request and
/// joins the thread.
pub struct FetchWorker {
    request_tx: mpsc::UnboundedSender<FetchRequest>,
    response_rx: std_mpsc::Receiver<FetchResponse>,
    thread: Option<JoinHandle<()>>,
}

impl FetchWorker {
    pub fn new(api_base: String) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = std_mpsc::channel();

        let thread = thread::spawn(move || run_loop(api_base, request_rx, response_tx));

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Send a request to the worker.
    pub fn send(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking).
    pub fn try_recv(&self) -> Option<FetchResponse> {
        self.response_rx.try_recv().ok()
    }

    pub fn shutdown(&self) {
        let _ = self.request_tx.send(FetchRequest::Shutdown);
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Full request URL for a query. The base is an opaque prefix; a trailing
/// slash is tolerated.
pub fn request_url(api_base: &str, query: &SimulationQuery) -> String {
    format!(
        "{}/simulators/investment?{}",
        api_base.trim_end_matches('/'),
        query.query_string()
    )
}

fn run_loop(
    api_base: String,
    mut request_rx: mpsc::UnboundedReceiver<FetchRequest>,
    response_tx: std_mpsc::Sender<FetchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            tracing::error!(%error, "failed to start fetch runtime");
            return;
        }
    };

    runtime.block_on(async move {
        let client = match reqwest::Client::builder().build() {
            Ok(client) => client,
            Err(error) => {
                tracing::error!(%error, "failed to build HTTP client");
                return;
            }
        };

        let mut in_flight: Option<InFlight> = None;
        loop {
            tokio::select! {
                request = request_rx.recv() => match request {
                    None | Some(FetchRequest::Shutdown) => break,
                    Some(FetchRequest::Fetch { ticket, query }) => {
                        if in_flight.is_some() {
                            tracing::debug!(?ticket, "superseding in-flight request");
                        }
                        let url = request_url(&api_base, &query);
                        // Replacing the slot drops the old future, aborting
                        // its connection.
                        in_flight = Some(Box::pin(fetch_one(client.clone(), url, ticket)));
                    }
                },
                response = poll_in_flight(&mut in_flight) => {
                    in_flight = None;
                    if response_tx.send(response).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

/// Await the pending fetch, or park forever when there is none so the other
/// select branch stays in charge.
async fn poll_in_flight(in_flight: &mut Option<InFlight>) -> FetchResponse {
    match in_flight.as_mut() {
        Some(fut) => fut.await,
        None => std::future::pending().await,
    }
}

async fn fetch_one(client: reqwest::Client, url: String, ticket: Ticket) -> FetchResponse {
    tracing::debug!(%url, "fetching simulation");
    let outcome = match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => response
            .json::<serde_json::Value>()
            .await
            .map_err(|error| TransportError(error.to_string())),
        Ok(response) => Err(TransportError(format!("HTTP {}", response.status()))),
        Err(error) => Err(TransportError(error.to_string())),
    };
    if let Err(error) = &outcome {
        tracing::warn!(%error, "simulation fetch failed");
    }
    FetchResponse { ticket, outcome }
}

#[cfg(test)]
mod tests {
    use feescope_core::{SimulationParameters, SimulationQuery};

    use super::request_url;

    #[test]
    fn builds_request_url_from_query() {
        let query = SimulationQuery::from_params(&SimulationParameters::default());
        assert_eq!(
            request_url("http://localhost:8000/api", &query),
            "http://localhost:8000/api/simulators/investment?initial=1000&growth_rate=0.07&fee_a=0&fee_b=0.02&years=30"
        );
    }

    #[test]
    fn tolerates_trailing_slash_in_base() {
        let query = SimulationQuery::from_params(&SimulationParameters::default());
        let with_slash = request_url("http://localhost:8000/api/", &query);
        let without = request_url("http://localhost:8000/api", &query);
        assert_eq!(with_slash, without);
    }
}
