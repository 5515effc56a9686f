//! Background request execution
//!
//! The UI thread never awaits the network. [`SyncDriver::dispatch`] spawns
//! the request on a tokio runtime and the outcome is queued on a channel;
//! [`SyncDriver::drain`] applies whatever has arrived to the store, once per
//! frame.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::egui_app::api::{ApiError, ApiResponse, TodoApiClient};
use crate::egui_app::state::{Dispatch, Ticket, TodoStore};

type Completion = (Ticket, Result<ApiResponse, ApiError>);
type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs store requests and collects their outcomes
pub struct SyncDriver {
    api: Arc<TodoApiClient>,
    handle: Handle,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    waker: Option<Waker>,
}

impl SyncDriver {
    pub fn new(api: TodoApiClient, handle: Handle) -> Self {
        let (tx, rx) = channel();
        Self {
            api: Arc::new(api),
            handle,
            tx,
            rx,
            waker: None,
        }
    }

    /// Call `waker` after each completion is queued (e.g. request a repaint)
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    pub fn api(&self) -> &TodoApiClient {
        &self.api
    }

    /// Send a request in the background
    pub fn dispatch(&self, dispatch: Dispatch) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        let waker = self.waker.clone();
        let Dispatch { ticket, request } = dispatch;
        tracing::debug!("Dispatching request {}: {:?}", ticket.value(), request);

        self.handle.spawn(async move {
            let outcome = api.execute(request).await;
            if tx.send((ticket, outcome)).is_err() {
                tracing::debug!("Completion {} dropped, driver is gone", ticket.value());
                return;
            }
            if let Some(wake) = waker {
                wake();
            }
        });
    }

    /// Apply every completion that has arrived; returns the errors to surface
    pub fn drain(&self, store: &mut TodoStore) -> Vec<ApiError> {
        let mut errors = Vec::new();
        while let Ok((ticket, outcome)) = self.rx.try_recv() {
            if let Err(e) = store.complete(ticket, outcome) {
                errors.push(e);
            }
        }
        errors
    }

    /// Block until the store has nothing in flight or `timeout` passes
    pub fn settle(&self, store: &mut TodoStore, timeout: Duration) -> Vec<ApiError> {
        let deadline = Instant::now() + timeout;
        let mut errors = self.drain(store);

        while store.pending_count() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!("{} requests still pending after {:?}", store.pending_count(), timeout);
                break;
            }
            match self.rx.recv_timeout(remaining) {
                Ok((ticket, outcome)) => {
                    if let Err(e) = store.complete(ticket, outcome) {
                        errors.push(e);
                    }
                }
                Err(_) => break,
            }
        }
        errors
    }
}
