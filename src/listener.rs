//! Run reporting: fire-and-forget notifications from the coordinator.
//!
//! Listeners never influence control flow; they observe. The engine itself
//! aggregates nothing, so anything downstream (progress bars, sweep result
//! collection, logging) hangs off this trait.

use crate::params::Params;
use crate::particle::Particle;
use crate::problem::{ProblemData, ProblemResults};

/// Receives run lifecycle events.
///
/// Every method has a no-op default, so implementors override only what
/// they care about.
pub trait Listener {
    /// A run is about to start with `params` on `data`.
    fn on_configured(&mut self, params: &Params, data: &ProblemData) {
        let _ = (params, data);
    }

    /// Universal best after `iteration` (1-based) iterations.
    fn on_progress(&mut self, best: &Particle, iteration: usize) {
        let _ = (best, iteration);
    }

    /// A run finished with `results`.
    fn on_completed(&mut self, results: &ProblemResults) {
        let _ = results;
    }
}

/// Silent runs.
impl Listener for () {}

/// Forwards events to the `log` facade.
///
/// Per-iteration progress goes to `debug` so long sweeps stay readable at
/// `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogListener;

impl Listener for LogListener {
    fn on_configured(&mut self, params: &Params, data: &ProblemData) {
        let summary =
            serde_json::to_string(params).unwrap_or_else(|_| "<unserializable>".to_string());
        log::info!(
            "starting {} ({}, {}) with {}",
            data.name,
            data.kind,
            data.direction,
            summary
        );
    }

    fn on_progress(&mut self, best: &Particle, iteration: usize) {
        log::debug!("iteration {} universal best {:.3}", iteration, best.fitness());
    }

    fn on_completed(&mut self, results: &ProblemResults) {
        log::info!(
            "finished in {:.3}s: fitness {:.3} at {:?}",
            results.elapsed.as_secs_f64(),
            results.fitness,
            results.position
        );
    }
}

/// Stores every event it sees.
///
/// The test double for the reporting seam; also the simplest way to collect
/// all 1250 results of a parameter sweep.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    /// One `Params` clone per run started.
    pub configured: Vec<Params>,
    /// `(iteration, universal best fitness)` per iteration of every run.
    pub progress: Vec<(usize, f64)>,
    /// One result per run finished.
    pub completed: Vec<ProblemResults>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Listener for RecordingListener {
    fn on_configured(&mut self, params: &Params, _data: &ProblemData) {
        self.configured.push(params.clone());
    }

    fn on_progress(&mut self, best: &Particle, iteration: usize) {
        self.progress.push((iteration, best.fitness()));
    }

    fn on_completed(&mut self, results: &ProblemResults) {
        self.completed.push(results.clone());
    }
}

/*───────────────────────── tests ─────────────────────────*/
