use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::analysis::analyst::CareerAnalyst;
use crate::form::Session;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analyst. Production wires `GeminiAnalyst`; tests stub it.
    pub analyst: Arc<dyn CareerAnalyst>,
    /// The one mutable session. The lock is only held for synchronous state
    /// transitions, never across the external call.
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(analyst: Arc<dyn CareerAnalyst>) -> Self {
        Self {
            analyst,
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    /// Locks the session, recovering the guard if a prior holder panicked.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
