use std::collections::HashMap;

use dpso::{
    CostMatrix, Direction, Params, ProblemData, ProblemKind, RecordingListener,
    TRIALS_PER_COMBINATION, WEIGHT_GRID, search_parameters,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn tiny_problem() -> ProblemData {
    let rows = (0..5)
        .map(|s: usize| (0..5).map(|c| (s as f64 - c as f64).abs()).collect())
        .collect();
    ProblemData::new("tiny", CostMatrix::new(rows), 2, ProblemKind::Median, Direction::Minimize)
        .unwrap()
}

fn sweep_base() -> Params {
    Params::default()
        .with_swarm_size(4)
        .with_max_iterations(3)
        .with_inertia_discount(0.9)
}

#[test]
fn full_grid_runs_1250_times() {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = tiny_problem();
    let base = sweep_base();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut recorder = RecordingListener::new();
    search_parameters(&data, &base, &mut rng, &mut recorder).unwrap();

    assert_eq!(recorder.configured.len(), 1250);
    assert_eq!(recorder.completed.len(), 1250);
    assert_eq!(recorder.progress.len(), 1250 * 3);
}

#[test]
fn every_combination_gets_its_trials() {
    let data = tiny_problem();
    let base = sweep_base();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut recorder = RecordingListener::new();
    search_parameters(&data, &base, &mut rng, &mut recorder).unwrap();

    let mut counts: HashMap<(u64, u64, u64), usize> = HashMap::new();
    for p in &recorder.configured {
        assert!(WEIGHT_GRID.contains(&p.social));
        assert!(WEIGHT_GRID.contains(&p.cognitive));
        assert!(WEIGHT_GRID.contains(&p.inertia));
        // base settings survive the weight override
        assert_eq!(p.swarm_size, 4);
        assert_eq!(p.max_iterations, 3);
        assert_eq!(p.inertia_discount.to_bits(), 0.9f64.to_bits());
        *counts
            .entry((p.inertia.to_bits(), p.cognitive.to_bits(), p.social.to_bits()))
            .or_default() += 1;
    }
    assert_eq!(counts.len(), 125);
    assert!(counts.values().all(|&n| n == TRIALS_PER_COMBINATION));
}

#[test]
fn combinations_vary_social_first() {
    let data = tiny_problem();
    let base = sweep_base();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut recorder = RecordingListener::new();
    search_parameters(&data, &base, &mut rng, &mut recorder).unwrap();

    // trials of one combination run back to back
    for p in &recorder.configured[..TRIALS_PER_COMBINATION] {
        assert_eq!(p.social.to_bits(), WEIGHT_GRID[0].to_bits());
        assert_eq!(p.cognitive.to_bits(), WEIGHT_GRID[0].to_bits());
        assert_eq!(p.inertia.to_bits(), WEIGHT_GRID[0].to_bits());
    }
    // the innermost loop advances the social weight
    let next = &recorder.configured[TRIALS_PER_COMBINATION];
    assert_eq!(next.social.to_bits(), WEIGHT_GRID[1].to_bits());
    assert_eq!(next.cognitive.to_bits(), WEIGHT_GRID[0].to_bits());
    assert_eq!(next.inertia.to_bits(), WEIGHT_GRID[0].to_bits());
}

#[test]
fn every_run_leaves_a_usable_result() {
    let data = tiny_problem();
    let base = sweep_base();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut recorder = RecordingListener::new();
    search_parameters(&data, &base, &mut rng, &mut recorder).unwrap();

    for results in &recorder.completed {
        assert!(results.fitness.is_finite());
        assert_eq!(results.position.len(), 2);
        assert_eq!(results.assignments.len(), 5);
        assert_eq!(results.kind, ProblemKind::Median);
        assert_eq!(results.direction, Direction::Minimize);
    }
}
