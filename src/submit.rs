use std::future::Future;
use std::pin::Pin;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use thiserror::Error;

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<Ack, SubmitError>>>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ack;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum SubmitError {
    // A real backend surfaces transport failures through this variant; the
    // simulated backend never constructs it.
    #[error("submission channel unavailable")]
    Unavailable,
}

// Seam for the backend that doesn't exist yet. Pages talk to this trait so a
// real transport can be swapped in without touching the wizard state logic.
pub trait SubmissionPort {
    fn submit(&self, kind: &'static str, payload: Value) -> SubmitFuture;
}

pub struct SimulatedBackend {
    latency_ms: u32,
}

impl SimulatedBackend {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

impl SubmissionPort for SimulatedBackend {
    fn submit(&self, kind: &'static str, payload: Value) -> SubmitFuture {
        let latency = self.latency_ms;
        Box::pin(async move {
            TimeoutFuture::new(latency).await;
            log!(format!("{kind}: {payload}"));
            Ok(Ack)
        })
    }
}
