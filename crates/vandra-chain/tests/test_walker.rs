//! Tests for classical walk simulation and aggregation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use vandra_chain::{
    ChainError, MarkovChain, TorusLattice, TransitionModel, hitting_times, multi_walk,
    single_walk, walk_distribution,
};
use vandra_types::CancelToken;

fn setup(w: u32, h: u32) -> (TorusLattice, MarkovChain) {
    let lattice = TorusLattice::new(w, h).unwrap();
    let chain = MarkovChain::from_lattice(&lattice, TransitionModel::Torus).unwrap();
    (lattice, chain)
}

#[test]
fn search_disabled_walk_advances_exactly_the_budget() {
    let (_, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(31);
    let walk = single_walk(&chain, 50, None, &mut rng).unwrap();
    assert_eq!(walk.states.len(), 51);
    assert!(walk.hitting_time.is_none());
    // Every visited state is on the lattice.
    assert!(walk.states.iter().all(|&s| s < 9));
}

#[test]
fn search_records_hitting_time_at_the_target() {
    let (_, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(32);
    // A 500-step budget on 9 states finds the target for this seed.
    let walk = single_walk(&chain, 500, Some(4), &mut rng).unwrap();
    let hit = walk.hitting_time.expect("target reached within budget");
    assert!(hit < 500);
    assert_eq!(walk.states[hit as usize], 4);
    // The walk stops at the hit: no step is taken past the target.
    assert_eq!(walk.states.len() as u64, hit + 1);
}

#[test]
fn start_on_target_hits_at_step_zero() {
    // A single-state lattice forces start == target.
    let (_, chain) = setup(1, 1);
    let mut rng = StdRng::seed_from_u64(33);
    let walk = single_walk(&chain, 5, Some(0), &mut rng).unwrap();
    assert_eq!(walk.hitting_time, Some(0));
    assert_eq!(walk.states, vec![0]);
}

#[test]
fn zero_budget_walk_is_just_the_start() {
    let (_, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(34);
    let walk = single_walk(&chain, 0, None, &mut rng).unwrap();
    assert_eq!(walk.states.len(), 1);
    assert!(walk.hitting_time.is_none());
}

#[test]
fn target_outside_lattice_rejected() {
    let (_, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(35);
    assert!(matches!(
        single_walk(&chain, 10, Some(9), &mut rng),
        Err(ChainError::StateOutOfRange { state: 9, .. })
    ));
}

#[test]
fn multi_walk_runs_independent_trials() {
    let (_, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(36);
    let walks = multi_walk(&chain, 10, 200, None, &mut rng, &CancelToken::new()).unwrap();
    assert_eq!(walks.len(), 200);
    assert!(walks.iter().all(|w| w.states.len() == 11));
    assert_eq!(hitting_times(&walks).len(), 200);
}

#[test]
fn zero_trials_rejected() {
    let (_, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(37);
    assert!(matches!(
        multi_walk(&chain, 10, 0, None, &mut rng, &CancelToken::new()),
        Err(ChainError::InvalidTrials(0))
    ));
}

#[test]
fn cancelled_token_aborts_the_batch() {
    let (_, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(38);
    let cancel = CancelToken::new();
    cancel.cancel();
    assert!(matches!(
        multi_walk(&chain, 10, 100, None, &mut rng, &cancel),
        Err(ChainError::Cancelled)
    ));
}

#[test]
fn seeded_walks_are_reproducible() {
    let (_, chain) = setup(4, 4);
    let mut rng_a = StdRng::seed_from_u64(39);
    let mut rng_b = StdRng::seed_from_u64(39);
    let a = multi_walk(&chain, 20, 50, Some(7), &mut rng_a, &CancelToken::new()).unwrap();
    let b = multi_walk(&chain, 20, 50, Some(7), &mut rng_b, &CancelToken::new()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn final_state_aggregation_counts_one_per_trial() {
    let (lattice, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(40);
    let walks = multi_walk(&chain, 5, 300, None, &mut rng, &CancelToken::new()).unwrap();

    let table = walk_distribution(&walks, true, &lattice).unwrap();
    let total: u64 = table.rows().iter().map(|r| r.occurrences).sum();
    assert_eq!(total, 300);
    assert!((table.probability_sum() - 1.0).abs() < 1e-9);
}

#[test]
fn full_aggregation_counts_every_visited_state() {
    let (lattice, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(41);
    let walks = multi_walk(&chain, 5, 100, None, &mut rng, &CancelToken::new()).unwrap();

    let table = walk_distribution(&walks, false, &lattice).unwrap();
    let total: u64 = table.rows().iter().map(|r| r.occurrences).sum();
    // No search: every walk contributes budget + 1 states.
    assert_eq!(total, 600);
}

#[test]
fn aggregation_attaches_lattice_coordinates() {
    let (lattice, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(42);
    let walks = multi_walk(&chain, 8, 50, None, &mut rng, &CancelToken::new()).unwrap();

    let table = walk_distribution(&walks, false, &lattice).unwrap();
    for row in table.rows() {
        assert_eq!(row.coordinate, Some(lattice.index_to_coordinate(row.state)));
    }
}

#[test]
fn final_states_converge_to_the_evolved_distribution() {
    // 5-step walks from a uniform start ≈ uniform · P⁵ (which stays uniform
    // for the doubly stochastic torus).
    let (lattice, chain) = setup(3, 3);
    let mut rng = StdRng::seed_from_u64(43);
    let walks = multi_walk(&chain, 5, 2000, None, &mut rng, &CancelToken::new()).unwrap();
    let table = walk_distribution(&walks, true, &lattice).unwrap();

    let expected = chain.distribution_after(&chain.uniform_distribution(), 5);
    for state in 0..9u64 {
        let observed = table.probability_of(state);
        assert!(
            (observed - expected[state as usize]).abs() < 0.05,
            "state {state}: observed {observed}, expected {}",
            expected[state as usize]
        );
    }
}
