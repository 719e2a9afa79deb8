//! Mocked remote services
//!
//! Each call sleeps for a simulated network latency, then answers with a
//! canned or deterministically varied payload. None of them fail.

mod account;
mod advisor;
mod weather;

pub use account::MockAccountService;
pub use advisor::MockAdvisor;
pub use weather::MockWeather;

use std::time::Duration;

/// Simulated round-trip time per call.
///
/// `Latency::Typical` uses a per-operation delay (300 ms for current
/// weather, 800 ms for recommendations, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    #[default]
    Typical,
    Fixed(Duration),
    None,
}

impl Latency {
    pub fn from_config(latency_ms: Option<u64>) -> Self {
        match latency_ms {
            Some(0) => Latency::None,
            Some(ms) => Latency::Fixed(Duration::from_millis(ms)),
            None => Latency::Typical,
        }
    }

    fn wait(&self, typical_ms: u64) {
        let delay = match self {
            Latency::Typical => Duration::from_millis(typical_ms),
            Latency::Fixed(d) => *d,
            Latency::None => return,
        };
        log::debug!("simulating {} ms of latency", delay.as_millis());
        std::thread::sleep(delay);
    }
}
