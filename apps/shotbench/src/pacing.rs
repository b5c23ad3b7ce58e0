//! Pacing between external calls.
//!
//! Drivers call `Pacer::pause()` after every invocation, whether it succeeded
//! or not. The hosted API rate-limits bursts; the pause keeps a sequential
//! run under that limit.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Sleeps a fixed duration after each call. A zero duration never yields.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
