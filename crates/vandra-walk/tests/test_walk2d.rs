//! Tests for the 2-D coined walk.

use rand::SeedableRng;
use rand::rngs::StdRng;
use vandra_sim::StatevectorRunner;
use vandra_types::{CancelToken, Coordinate};
use vandra_walk::{Walk2D, WalkError};

#[test]
fn zero_bits_per_axis_returns_error() {
    assert!(matches!(
        Walk2D::new(0, 1).circuit(),
        Err(WalkError::InvalidPositionBits(0))
    ));
}

#[test]
fn start_outside_grid_returns_error() {
    let walk = Walk2D::new(2, 1).with_start(Coordinate::new(4, 0));
    assert!(matches!(
        walk.circuit(),
        Err(WalkError::StartOutOfRange { side: 4, .. })
    ));
}

#[test]
fn circuit_width_is_two_registers_plus_coin() {
    let circuit = Walk2D::new(3, 1).circuit().unwrap();
    assert_eq!(circuit.num_qubits(), 8);
    // Both position registers are read out, the coin is not.
    assert_eq!(circuit.num_clbits(), 6);
}

#[test]
fn zero_steps_concentrates_at_center() {
    let walk = Walk2D::new(2, 0);
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(21);

    let outcome = walk.run(&runner, 50, &mut rng, &CancelToken::new()).unwrap();
    // Center of the 4×4 grid is (2, 2) → outcome 0b10_10.
    assert_eq!(walk.start_outcome(), 0b1010);
    assert_eq!(outcome.counts.get(0b1010), 50);
    assert_eq!(walk.coordinate_of(0b1010), Coordinate::new(2, 2));
}

#[test]
fn custom_start_is_encoded() {
    let walk = Walk2D::new(2, 0).with_start(Coordinate::new(1, 3));
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(22);

    let outcome = walk.run(&runner, 20, &mut rng, &CancelToken::new()).unwrap();
    assert_eq!(outcome.counts.get(0b0111), 20);
}

#[test]
fn single_step_moves_to_the_four_neighbors() {
    let walk = Walk2D::new(2, 1);
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(23);

    let outcome = walk
        .run(&runner, 800, &mut rng, &CancelToken::new())
        .unwrap();
    // Each coin pattern moves exactly one axis by ±1 from (2, 2).
    let mut observed: Vec<Coordinate> = outcome
        .counts
        .iter()
        .map(|(s, _)| walk.coordinate_of(s))
        .collect();
    observed.sort_by_key(|c| (c.x, c.y));
    assert_eq!(
        observed,
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(2, 1),
            Coordinate::new(2, 3),
            Coordinate::new(3, 2),
        ]
    );
    // No interference after one step: roughly a quarter each.
    for (_, count) in outcome.counts.iter() {
        assert!(count > 120, "expected ~200 of 800 per neighbor, got {count}");
    }
}

#[test]
fn shifts_wrap_around_the_torus_edge() {
    let walk = Walk2D::new(2, 1).with_start(Coordinate::new(0, 0));
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(24);

    let outcome = walk
        .run(&runner, 800, &mut rng, &CancelToken::new())
        .unwrap();
    let observed: Vec<Coordinate> = outcome
        .counts
        .iter()
        .map(|(s, _)| walk.coordinate_of(s))
        .collect();
    // −1 moves wrap to the far edge.
    assert!(observed.contains(&Coordinate::new(3, 0)));
    assert!(observed.contains(&Coordinate::new(0, 3)));
}

#[test]
fn amplitudes_stay_normalized() {
    let walk = Walk2D::new(2, 4);
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(25);

    let outcome = walk.run(&runner, 1, &mut rng, &CancelToken::new()).unwrap();
    let norm: f64 = outcome.amplitudes.iter().map(|a| a.norm_sqr()).sum();
    assert!((norm - 1.0).abs() < 1e-6);
}

#[test]
fn distribution_is_labelled_and_normalized() {
    let walk = Walk2D::new(2, 3);
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(26);

    let outcome = walk
        .run(&runner, 600, &mut rng, &CancelToken::new())
        .unwrap();
    let table = walk.distribution(&outcome).unwrap();
    assert!((table.probability_sum() - 1.0).abs() < 1e-9);
    assert!(table.rows().iter().all(|r| r.coordinate.is_some()));
}

#[test]
fn frames_yield_one_distribution_per_step() {
    let walk = Walk2D::new(2, 3);
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(27);

    let frames = walk
        .frames(&runner, 300, &mut rng, &CancelToken::new())
        .unwrap();
    assert_eq!(frames.len(), 3);
    for frame in &frames {
        assert!((frame.probability_sum() - 1.0).abs() < 1e-9);
    }
    // Frame 1 is the single-step walk: exactly the four neighbors.
    assert_eq!(frames[0].len(), 4);
}

#[test]
fn cancelled_token_aborts_execution() {
    let walk = Walk2D::new(2, 2);
    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(28);
    let cancel = CancelToken::new();
    cancel.cancel();

    assert!(matches!(
        walk.run(&runner, 100, &mut rng, &cancel),
        Err(WalkError::Sim(vandra_sim::SimError::Cancelled))
    ));
}
