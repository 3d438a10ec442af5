//! dpso – discrete particle swarm optimization, Rust kernel + PyO3 bindings.
//!
//! Velocity-free PSO over facility-location instances: particles are
//! facility selections, the weights are per-dimension move probabilities,
//! and a parameter sweep drives the full 5×5×5 weight grid. The kernel is
//! plain Rust; the optional `python` feature adds a thin `_native` module.

/*───────── internal modules ─────────*/
pub mod assignment;
pub mod compare;
pub mod error;
pub mod fitness;
pub mod listener;
pub mod objective;
pub mod optimizer;
pub mod params;
pub mod particle;
pub mod problem;
pub mod swarm;
pub mod sweep;

/*───────── re-exports for Rust users ─────────*/
pub use compare::Comparator;
pub use error::PsoError;
pub use fitness::FitnessEvaluator;
pub use listener::{Listener, LogListener, RecordingListener};
pub use optimizer::Optimizer;
pub use params::Params;
pub use particle::{IterationWeights, Particle};
pub use problem::{CostMatrix, Direction, ProblemData, ProblemKind, ProblemResults};
pub use swarm::{Swarm, update_universal_best};
pub use sweep::{TRIALS_PER_COMBINATION, WEIGHT_GRID, search_parameters};

/*───────── extern util ─────────*/
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyModule;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;
#[cfg(feature = "python")]
use rand::SeedableRng;
#[cfg(feature = "python")]
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "python")]
use std::fs::File;
#[cfg(feature = "python")]
use std::io::BufReader;

/*======================================================================
│  Python functions
└=====================================================================*/

#[cfg(feature = "python")]
fn load_problem(problem_path: &str) -> PyResult<ProblemData> {
    let file = File::open(problem_path)
        .map_err(|e| pyo3::exceptions::PyIOError::new_err(e.to_string()))?;
    ProblemData::from_json(BufReader::new(file))
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Single run – returns (fitness, position, assignments).
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(text_signature = "(problem_path, social, cognitive, inertia, inertia_discount, swarm_size, max_iterations, seed)")]
#[allow(clippy::too_many_arguments)]
fn optimize_py(
    problem_path: String,
    social: f64,
    cognitive: f64,
    inertia: f64,
    inertia_discount: f64,
    swarm_size: usize,
    max_iterations: usize,
    seed: u64,
) -> PyResult<(f64, Vec<usize>, Vec<usize>)> {
    let data = load_problem(&problem_path)?;
    let params = Params {
        swarm_size,
        social,
        cognitive,
        inertia,
        inertia_discount,
        max_iterations,
    };
    let optimizer =
        Optimizer::new(params).map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let results = optimizer
        .optimize(&data, &mut rng, &mut LogListener)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok((results.fitness, results.position, results.assignments))
}

/// Full 5×5×5 weight sweep – returns a JSON array of per-run records.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(text_signature = "(problem_path, swarm_size, inertia_discount, max_iterations, seed)")]
fn sweep_py(
    problem_path: String,
    swarm_size: usize,
    inertia_discount: f64,
    max_iterations: usize,
    seed: u64,
) -> PyResult<String> {
    let data = load_problem(&problem_path)?;
    let base = Params::default()
        .with_swarm_size(swarm_size)
        .with_inertia_discount(inertia_discount)
        .with_max_iterations(max_iterations);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut recorder = RecordingListener::new();
    search_parameters(&data, &base, &mut rng, &mut recorder)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;

    let report: Vec<serde_json::Value> = recorder
        .configured
        .iter()
        .zip(&recorder.completed)
        .map(|(params, results)| serde_json::json!({ "params": params, "results": results }))
        .collect();
    serde_json::to_string(&report)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Helper: parse a problem file, return (num_facilities, num_customers).
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(text_signature = "(problem_path)")]
fn parse_problem_py(problem_path: String) -> PyResult<(usize, usize)> {
    let data = load_problem(&problem_path)?;
    Ok((data.num_facilities, data.num_customers))
}

/*======================================================================
│  PyO3 module-init
└=====================================================================*/

/// ***Important***: name `_native` must match `pyproject.toml -> module-name`.
#[cfg(feature = "python")]
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(optimize_py, m)?)?;
    m.add_function(wrap_pyfunction!(sweep_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_problem_py, m)?)?;
    Ok(())
}
