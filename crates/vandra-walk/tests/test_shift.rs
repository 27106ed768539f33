//! Exhaustive permutation tests for the ripple-carry shift primitives.
//!
//! Computational-basis inputs stay computational-basis states under the
//! shift sequences, so a single deterministic shot reads the result exactly.

use rand::SeedableRng;
use rand::rngs::StdRng;
use vandra_ir::{Circuit, Instruction, QubitId};
use vandra_sim::StatevectorRunner;
use vandra_types::CancelToken;
use vandra_walk::shift;

/// Apply `sequences` to the basis state `value` of an n-cell register and
/// read the register back. `control_set` decides whether the external
/// control qubit is |1⟩ during the sequence.
fn apply_to_basis(
    n: u32,
    value: u64,
    control_set: bool,
    sequences: &[Vec<Instruction>],
) -> u64 {
    let mut circuit = Circuit::new("basis-probe");
    let pos = circuit.add_qreg("pos", n);
    let ctl = circuit.add_qreg("ctl", 1)[0];

    if control_set {
        circuit.x(ctl).unwrap();
    }
    for (i, &cell) in pos.iter().enumerate() {
        if (value >> (n as usize - 1 - i)) & 1 == 1 {
            circuit.x(cell).unwrap();
        }
    }
    for seq in sequences {
        circuit.extend(seq.iter().cloned()).unwrap();
    }
    circuit.measure_register(&pos).unwrap();

    let runner = StatevectorRunner::new();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = runner
        .run(&circuit, 1, &mut rng, &CancelToken::new())
        .unwrap();
    let (state, count) = outcome.counts.iter().next().unwrap();
    assert_eq!(count, 1);
    state
}

fn register(n: u32) -> Vec<QubitId> {
    (0..n).map(QubitId).collect()
}

fn control(n: u32) -> QubitId {
    QubitId(n)
}

#[test]
fn increment_adds_one_modulo_register_size() {
    for n in 1..=4u32 {
        let pos = register(n);
        let seq = shift::increment(&pos, &[control(n)]);
        let modulus = 1u64 << n;
        for value in 0..modulus {
            let result = apply_to_basis(n, value, true, &[seq.clone()]);
            assert_eq!(result, (value + 1) % modulus, "n={n} value={value}");
        }
    }
}

#[test]
fn decrement_subtracts_one_modulo_register_size() {
    for n in 1..=4u32 {
        let pos = register(n);
        let seq = shift::decrement(&pos, &[control(n)]);
        let modulus = 1u64 << n;
        for value in 0..modulus {
            let result = apply_to_basis(n, value, true, &[seq.clone()]);
            assert_eq!(result, (value + modulus - 1) % modulus, "n={n} value={value}");
        }
    }
}

#[test]
fn decrement_inverts_increment_on_every_basis_state() {
    for n in 1..=4u32 {
        let pos = register(n);
        let inc = shift::increment(&pos, &[control(n)]);
        let dec = shift::decrement(&pos, &[control(n)]);
        for value in 0..(1u64 << n) {
            let result = apply_to_basis(n, value, true, &[inc.clone(), dec.clone()]);
            assert_eq!(result, value, "round trip broken at n={n} value={value}");
        }
    }
}

#[test]
fn unsatisfied_control_fixes_every_basis_state() {
    for n in 1..=3u32 {
        let pos = register(n);
        let inc = shift::increment(&pos, &[control(n)]);
        let dec = shift::decrement(&pos, &[control(n)]);
        for value in 0..(1u64 << n) {
            assert_eq!(apply_to_basis(n, value, false, &[inc.clone()]), value);
            assert_eq!(apply_to_basis(n, value, false, &[dec.clone()]), value);
        }
    }
}

#[test]
fn uncontrolled_shift_still_wraps() {
    let n = 3u32;
    let pos = register(n);
    let inc = shift::increment(&pos, &[]);
    let dec = shift::decrement(&pos, &[]);
    assert_eq!(apply_to_basis(n, 7, false, &[inc]), 0);
    assert_eq!(apply_to_basis(n, 0, false, &[dec]), 7);
}
