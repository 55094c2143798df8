//! Headless simulation: the knight on a recording stage, fed frame ticks and
//! scripted pointer gestures.

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use sprite::geom::{Point, Size};
use sprite::{Controller, ControllerConfig, Event, Facing, HeadlessStage, SetupError, StageCall, Transition};

/// A scripted throw: at `at_tick`, grab the knight at its centre, drag it to
/// `to` and let go there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub at_tick: u64,
    pub to: Point,
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("expected X,Y@TICK, got `{0}`")]
pub struct GestureParseError(String);

impl FromStr for Gesture {
    type Err = GestureParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let bad = || GestureParseError(raw.to_string());
        let (point, tick) = raw.split_once('@').ok_or_else(bad)?;
        let (x, y) = point.split_once(',').ok_or_else(bad)?;
        let x = x.trim().parse::<f64>().map_err(|_| bad())?;
        let y = y.trim().parse::<f64>().map_err(|_| bad())?;
        let at_tick = tick.trim().parse::<u64>().map_err(|_| bad())?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(bad());
        }
        Ok(Self { at_tick, to: Point::new(x, y) })
    }
}

/// One logged state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRecord {
    pub tick: u64,
    pub from: &'static str,
    pub to: &'static str,
}

impl TransitionRecord {
    fn new(tick: u64, t: Transition) -> Self {
        Self { tick, from: t.from.name(), to: t.to.name() }
    }
}

/// What happened over a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub ticks: u64,
    pub transitions: Vec<TransitionRecord>,
    pub final_state: &'static str,
    pub position: Point,
    pub facing: Facing,
    /// Visibility toggles the stage actually performed.
    pub clip_swaps: usize,
}

pub struct Simulation {
    controller: Controller<HeadlessStage, StdRng>,
    gestures: Vec<Gesture>,
    tick: u64,
}

impl Simulation {
    /// Set up a knight on a `viewport`-sized headless stage.
    ///
    /// # Errors
    ///
    /// Returns the controller's [`SetupError`] for a bad config or an empty viewport.
    pub fn new(viewport: Size, seed: u64, config: ControllerConfig, mut gestures: Vec<Gesture>) -> Result<Self, SetupError> {
        gestures.sort_by_key(|g| g.at_tick);
        let controller = Controller::new(HeadlessStage::new(viewport), StdRng::seed_from_u64(seed), config)?;
        Ok(Self { controller, gestures, tick: 0 })
    }

    #[must_use]
    pub fn controller(&self) -> &Controller<HeadlessStage, StdRng> {
        &self.controller
    }

    /// Play any gestures due this tick, then advance one frame.
    pub fn step(&mut self) -> Vec<TransitionRecord> {
        let mut records = Vec::new();
        let due = self.gestures.iter().filter(|g| g.at_tick == self.tick).copied().collect::<Vec<_>>();
        for gesture in due {
            let grab = self.controller.position();
            let events = [Event::PointerDown(grab), Event::PointerMove(gesture.to), Event::PointerUp(gesture.to)];
            let before = records.len();
            for event in events {
                if let Some(t) = self.controller.handle(event) {
                    records.push(TransitionRecord::new(self.tick, t));
                }
            }
            if records.len() == before {
                tracing::warn!(tick = self.tick, state = self.controller.state().name(), "gesture ignored");
            }
        }

        if let Some(t) = self.controller.handle(Event::Tick) {
            records.push(TransitionRecord::new(self.tick, t));
        }
        self.tick += 1;
        records
    }

    /// Run `ticks` frames, handing every stage call to `on_call` as it happens.
    pub fn run<F>(&mut self, ticks: u64, mut on_call: F) -> Report
    where
        F: FnMut(&StageCall),
    {
        let mut transitions = Vec::new();
        for call in self.controller.stage_mut().take_calls() {
            on_call(&call);
        }
        for _ in 0..ticks {
            for record in self.step() {
                tracing::info!(tick = record.tick, from = record.from, to = record.to, "transition");
                transitions.push(record);
            }
            for call in self.controller.stage_mut().take_calls() {
                on_call(&call);
            }
        }

        Report {
            ticks: self.tick,
            transitions,
            final_state: self.controller.state().name(),
            position: self.controller.position(),
            facing: self.controller.facing(),
            clip_swaps: self.controller.stage().swaps().len(),
        }
    }
}
