//! A play session: one state, its config, the tick source, and the RNG.
//!
//! The session is the only caller of the transition functions. After every
//! transition it re-syncs the ticker, so a timer whose guard went false can
//! never deliver another tick.

use super::logic::{process_input, process_tick, GameInput, InputOutcome, TickOutcome};
use super::ticker::Ticker;
use super::types::GameState;
use crate::core::config::GameConfig;
use crate::scene::{project, Scene};
use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};

pub struct Session<R: Rng> {
    state: GameState,
    config: GameConfig,
    ticker: Ticker,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            state: GameState::new(&config),
            ticker: Ticker::new(config.tick_interval()),
            config,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Handle one activation at time `now`.
    pub fn activate(&mut self, now: Instant) -> InputOutcome {
        let outcome = process_input(&mut self.state, &self.config, GameInput::Activate);
        match outcome {
            InputOutcome::Started => debug!("round started"),
            InputOutcome::Jumped { bird_top } => debug!("jump to {bird_top}"),
            InputOutcome::Acknowledged { archived } => info!(
                "round archived with score {archived} (best {})",
                self.state.leaderboard.best().unwrap_or(archived)
            ),
        }
        self.ticker.sync(&self.state, &self.config, now);
        outcome
    }

    /// Apply every tick that has fallen due by `now`, one at a time.
    pub fn advance(&mut self, now: Instant) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        while let Some(kind) = self.ticker.next_due(now) {
            let outcome = process_tick(&mut self.state, &self.config, kind, &mut self.rng);
            self.record(outcome);
            outcomes.push(outcome);
            self.ticker.sync(&self.state, &self.config, now);
        }
        outcomes
    }

    fn record(&self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Scored { score } => debug!("obstacle cleared, score {score}"),
            TickOutcome::Collided { cause, score } => {
                info!("collision with {cause:?} at score {score}")
            }
            TickOutcome::Moved | TickOutcome::Ignored => {}
        }
    }

    /// How long the caller may block before the next tick is due.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }

    /// Stop the round clock for good. Later calls to `advance` deliver nothing.
    pub fn shutdown(&mut self) {
        self.ticker.cancel_all();
        debug!("session shut down at score {}", self.state.score);
    }

    pub fn scene(&self) -> Scene {
        project(&self.state, &self.config)
    }
}
