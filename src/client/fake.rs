//! In-memory [`HttpTransport`] for unit tests: records requests, replays a canned outcome.

use std::io;
use std::sync::{Arc, Mutex};

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportFailure};

#[derive(Debug, Clone)]
enum Outcome {
    Respond { status: u16, body: String },
    NoResponse,
    NotDispatched(String),
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    outcome: Outcome,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

impl FakeTransport {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Respond {
            status,
            body: body.into(),
        })
    }

    pub(crate) fn no_response() -> Self {
        Self::with_outcome(Outcome::NoResponse)
    }

    pub(crate) fn not_dispatched(reason: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::NotDispatched(reason.into()))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                outcome,
            })),
        }
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl HttpTransport for FakeTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let outcome = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.outcome.clone()
            };
            match outcome {
                Outcome::Respond { status, body } => Ok(HttpResponse { status, body }),
                Outcome::NoResponse => Err(TransportFailure::NoResponse(Box::new(
                    io::Error::new(io::ErrorKind::TimedOut, "timed out"),
                ))),
                Outcome::NotDispatched(reason) => Err(TransportFailure::NotDispatched(
                    Box::new(io::Error::other(reason)),
                )),
            }
        })
    }
}
