//! Fixed-rate tick source.
//!
//! Two independent timers share one cadence: gravity pulls the bird down and
//! the obstacle timer scrolls the obstacle pair left. Each timer is armed only
//! while its guard holds and is cancelled the moment the guard flips, so an
//! idle game has no live timers and the event loop can block on input.

use super::logic::tick_guard;
use super::types::GameState;
use crate::core::config::GameConfig;
use crate::core::constants::MAX_TICK_LAG_MS;
use std::time::{Duration, Instant};

/// Which timer produced a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Gravity,
    Obstacle,
}

impl TickKind {
    /// Firing order when both timers fall due at the same instant.
    pub const ALL: [TickKind; 2] = [TickKind::Gravity, TickKind::Obstacle];
}

#[derive(Debug, Clone, Default)]
struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Start the timer if it is not already running. Re-arming a live timer
    /// keeps its phase.
    fn arm(&mut self, now: Instant, interval: Duration) {
        if self.deadline.is_none() {
            self.deadline = Some(now + interval);
        }
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_live(&self) -> bool {
        self.deadline.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    max_lag: Duration,
    gravity: Timer,
    obstacle: Timer,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_lag: Duration::from_millis(MAX_TICK_LAG_MS),
            gravity: Timer::default(),
            obstacle: Timer::default(),
        }
    }

    fn timer(&self, kind: TickKind) -> &Timer {
        match kind {
            TickKind::Gravity => &self.gravity,
            TickKind::Obstacle => &self.obstacle,
        }
    }

    fn timer_mut(&mut self, kind: TickKind) -> &mut Timer {
        match kind {
            TickKind::Gravity => &mut self.gravity,
            TickKind::Obstacle => &mut self.obstacle,
        }
    }

    /// Arm or cancel each timer to match its guard. Must run after every transition.
    pub fn sync(&mut self, state: &GameState, config: &GameConfig, now: Instant) {
        let interval = self.interval;
        for kind in TickKind::ALL {
            let timer = self.timer_mut(kind);
            if tick_guard(state, config, kind) {
                timer.arm(now, interval);
            } else {
                timer.cancel();
            }
        }
    }

    /// Pop the earliest timer whose deadline has passed and schedule its next firing.
    ///
    /// Returns at most one tick so the caller can apply it and re-sync before
    /// anything else fires.
    pub fn next_due(&mut self, now: Instant) -> Option<TickKind> {
        let (kind, deadline) = TickKind::ALL
            .into_iter()
            .filter_map(|kind| self.timer(kind).deadline.map(|d| (kind, d)))
            .filter(|&(_, deadline)| deadline <= now)
            .min_by_key(|&(_, deadline)| deadline)?;

        let interval = self.interval;
        let max_lag = self.max_lag;
        let next = deadline + interval;
        // Too far behind: drop the backlog instead of replaying it in a burst
        let next = if now.saturating_duration_since(next) > max_lag {
            now + interval
        } else {
            next
        };
        self.timer_mut(kind).deadline = Some(next);
        Some(kind)
    }

    /// How long the event loop may sleep before the next tick. `None` when no timer is live.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        TickKind::ALL
            .into_iter()
            .filter_map(|kind| self.timer(kind).deadline)
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn live_timers(&self) -> usize {
        TickKind::ALL
            .into_iter()
            .filter(|&kind| self.timer(kind).is_live())
            .count()
    }

    pub fn is_live(&self, kind: TickKind) -> bool {
        self.timer(kind).is_live()
    }

    pub fn cancel_all(&mut self) {
        self.gravity.cancel();
        self.obstacle.cancel();
    }
}
