//! Staleness guards for the polling and streaming views.
//!
//! Both guards are plain single-writer state machines; the original client has
//! no shared-state concurrency, only overlapping in-flight requests whose
//! responses can arrive out of order.

/// Discards out-of-order poll responses. Each request takes a ticket from
/// `begin`; only the response carrying the most recently issued ticket is
/// accepted, so a slow older fetch can never overwrite newer state.
#[derive(Debug, Default)]
pub struct ResponseGate {
    issued: u64,
}

impl ResponseGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new outgoing request, superseding all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True only for the ticket of the newest outstanding request.
    pub fn accept(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

/// Admits streamed events for the active run only, in strictly increasing
/// sequence order. Events from a superseded run, duplicates, and out-of-order
/// arrivals are all rejected.
#[derive(Debug, Default)]
pub struct StreamGate {
    run_id: Option<String>,
    last_seq: Option<u64>,
}

impl StreamGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run, superseding the previous one and resetting the
    /// sequence window.
    pub fn begin_run(&mut self, run_id: impl Into<String>) {
        self.run_id = Some(run_id.into());
        self.last_seq = None;
    }

    /// Admits an event when it belongs to the active run and its sequence
    /// number is strictly greater than everything seen so far.
    pub fn admit(&mut self, run_id: &str, seq: u64) -> bool {
        if self.run_id.as_deref() != Some(run_id) {
            return false;
        }
        if self.last_seq.is_some_and(|last| seq <= last) {
            return false;
        }
        self.last_seq = Some(seq);
        true
    }
}
