//! Benchmarks for the statevector gate kernels
//!
//! Run with: cargo bench -p vandra-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vandra_ir::{Instruction, QubitId};
use vandra_sim::Statevector;

/// Benchmark the Hadamard kernel at growing widths
fn bench_hadamard(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard");

    for num_qubits in &[8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("apply_h", num_qubits),
            num_qubits,
            |b, &n| {
                let inst = Instruction::single(vandra_ir::Gate::H, QubitId(0));
                b.iter(|| {
                    let mut sv = Statevector::new(black_box(n));
                    sv.apply(black_box(&inst));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the multi-controlled flip kernel by control arity
fn bench_mcx(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcx");

    for controls in &[1u32, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("apply_mcx", controls),
            controls,
            |b, &k| {
                let ctrls: Vec<QubitId> = (0..k).map(QubitId).collect();
                let inst = Instruction::mcx(ctrls, QubitId(k));
                b.iter(|| {
                    let mut sv = Statevector::new(black_box(12));
                    sv.apply(black_box(&inst));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_hadamard, bench_mcx);
criterion_main!(benches);
