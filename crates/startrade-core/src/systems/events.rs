//! Random encounters while travelling.
//!
//! The scheduler is polled every tick with the elapsed time. Once the time
//! since the last encounter reaches a randomly drawn threshold it fires an
//! encounter number and draws the next threshold. What an encounter means is
//! up to the dialogue layer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::EventConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventScheduler {
    /// Seconds since the last encounter
    elapsed: f32,
    /// Seconds until the next encounter fires
    threshold: f32,
    min_interval: f32,
    max_interval: f32,
    event_count: u32,
    /// Encounters fired so far
    fired: u32,
}

impl EventScheduler {
    pub fn new(config: &EventConfig, rng: &mut impl Rng) -> Self {
        let mut scheduler = Self {
            elapsed: 0.0,
            threshold: 0.0,
            min_interval: config.min_interval,
            max_interval: config.max_interval,
            event_count: config.event_count.max(1),
            fired: 0,
        };
        scheduler.threshold = scheduler.draw_threshold(rng);
        scheduler
    }

    fn draw_threshold(&self, rng: &mut impl Rng) -> f32 {
        rng.gen_range(self.min_interval..=self.max_interval)
    }

    /// Advance by `dt` seconds. Returns an encounter number in
    /// `1..=event_count` when one fires.
    pub fn poll(&mut self, dt: f32, rng: &mut impl Rng) -> Option<u32> {
        self.elapsed += dt;
        if self.elapsed < self.threshold {
            return None;
        }

        self.elapsed = 0.0;
        self.threshold = self.draw_threshold(rng);
        self.fired += 1;
        let event_id = rng.gen_range(1..=self.event_count);
        log::debug!(
            "Encounter {} fired, next in {:.1}s",
            event_id,
            self.threshold
        );
        Some(event_id)
    }

    pub fn time_until_next(&self) -> f32 {
        (self.threshold - self.elapsed).max(0.0)
    }

    pub fn fired(&self) -> u32 {
        self.fired
    }
}
