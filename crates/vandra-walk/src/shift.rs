//! Ripple-carry shift primitives.
//!
//! The conditional position shift of a coined walk is a modular ±1 on a
//! binary register, built entirely from multi-controlled bit-flips:
//!
//! ```text
//! increment (+1 mod 2ⁿ), register most-significant-first:
//!
//!   for i = 0..n:  MCX( controls ∪ pos[i+1..]  →  pos[i] )
//! ```
//!
//! Cell `i` flips exactly when every less-significant cell is |1⟩ — the
//! binary carry chain expressed as reversible controlled flips. The
//! most-significant cell goes first so each carry condition reads the
//! not-yet-updated cells below it; the least-significant cell flips
//! unconditionally (on the external controls alone).
//!
//! The decrement conjugates each carry condition from "all 1s" to "all 0s"
//! by bracketing the flip with unconditional X on the same lower cells,
//! yielding the exact inverse permutation. With `controls` unsatisfied both
//! sequences are the identity.
//!
//! Both combinators are pure: they return the gate sequence as a value and
//! touch no circuit, so they can be tested and composed independently of any
//! execution backend.

use vandra_ir::{Gate, Instruction, QubitId};

/// Gate sequence adding 1 (mod 2ⁿ) to `position` when all `controls` are set.
///
/// `position` is ordered most-significant cell first. An empty control set
/// yields an unconditional increment.
pub fn increment(position: &[QubitId], controls: &[QubitId]) -> Vec<Instruction> {
    let n = position.len();
    let mut seq = Vec::with_capacity(n);
    for i in 0..n {
        let carry = controls.iter().chain(&position[i + 1..]).copied();
        seq.push(Instruction::mcx(carry, position[i]));
    }
    seq
}

/// Gate sequence subtracting 1 (mod 2ⁿ) from `position` when all `controls`
/// are set — the exact inverse of [`increment`].
///
/// Each carry flip is bracketed with unconditional X on the cells it reads,
/// turning the borrow condition "all lower cells 0" into a controlled-on-1
/// test so the same MCX primitive serves both directions.
pub fn decrement(position: &[QubitId], controls: &[QubitId]) -> Vec<Instruction> {
    let n = position.len();
    // n MCX gates plus two X brackets per lower cell.
    let mut seq = Vec::with_capacity(n * n);
    for i in 0..n {
        for &cell in &position[i + 1..] {
            seq.push(Instruction::single(Gate::X, cell));
        }
        let borrow = controls.iter().chain(&position[i + 1..]).copied();
        seq.push(Instruction::mcx(borrow, position[i]));
        for &cell in &position[i + 1..] {
            seq.push(Instruction::single(Gate::X, cell));
        }
    }
    seq
}
