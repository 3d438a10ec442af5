//! Exhaustive parameter characterization over the weight grid.
//!
//! Five values per weight, three weights, ten trials each: 125 parameter
//! combinations and 1250 complete runs per sweep. The sweep only drives
//! runs and reports them; it keeps no results of its own. Aggregation
//! (means, best-per-cell tables) belongs downstream of the listener.

use rand::Rng;

use crate::error::PsoError;
use crate::listener::Listener;
use crate::optimizer::Optimizer;
use crate::params::Params;
use crate::problem::ProblemData;

/// Grid applied independently to the inertia, cognitive and social weights.
pub const WEIGHT_GRID: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];

/// Independent runs per weight combination.
pub const TRIALS_PER_COMBINATION: usize = 10;

/// Runs the full grid on `data`.
///
/// Swarm size, inertia discount and iteration budget come from `base`; the
/// three weights are overridden per combination. Every grid point gets a
/// fresh `Optimizer`, so no run can see another's state. The first failure
/// aborts the sweep.
pub fn search_parameters<R, L>(
    data: &ProblemData,
    base: &Params,
    rng: &mut R,
    listener: &mut L,
) -> Result<(), PsoError>
where
    R: Rng + ?Sized,
    L: Listener + ?Sized,
{
    let mut done = 0usize;
    for &inertia in &WEIGHT_GRID {
        for &cognitive in &WEIGHT_GRID {
            for &social in &WEIGHT_GRID {
                let params = Params {
                    social,
                    cognitive,
                    inertia,
                    ..base.clone()
                };
                let optimizer = Optimizer::new(params)?;
                for _ in 0..TRIALS_PER_COMBINATION {
                    optimizer.optimize(data, rng, listener)?;
                    done += 1;
                }
                log::info!(
                    "{done} runs done (inertia {inertia}, cognitive {cognitive}, social {social})"
                );
            }
        }
    }
    Ok(())
}

/*───────────────────────── tests ─────────────────────────*/
